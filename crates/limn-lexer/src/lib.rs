//! # Limn Lexer
//!
//! Streaming lexical analysis for the Limn diagram notation, a
//! PlantUML-style language for component, class, and sequence diagrams.
//! This crate turns raw diagram source bytes into a classified token stream
//! that diagram-specific parsers build on; it has no opinion about diagram
//! structure or semantics.
//!
//! Two entry points cover the two transport shapes:
//!
//! - [`tokenize`] scans a complete in-memory buffer;
//! - [`tokenize_stream`] scans a chunked [`AsyncRead`](tokio::io::AsyncRead)
//!   source through a bounded, flow-controlled producer/consumer pipeline.
//!
//! Tokenization never fails: unrecognized bytes become [`TokenKind::Unknown`]
//! tokens and unterminated constructs degrade to whatever text was available.
//! The only fallible part is the transport, reported as [`PipelineError`].
//!
//! ```
//! use limn_lexer::{tokenize, Token, TokenKind};
//!
//! let mut tokens = Vec::new();
//! tokenize("[Web] --> [Db] : persists", &mut |token: Token| tokens.push(token));
//!
//! assert_eq!(tokens[0].kind, TokenKind::Component);
//! assert_eq!(tokens[1].kind, TokenKind::Arrow);
//! assert_eq!(tokens[3].kind, TokenKind::Label);
//! ```

mod cursor;
mod error;
mod keyword;
mod lexer;
mod pipeline;
mod tokens;

pub use error::PipelineError;
pub use keyword::keyword_kind;
pub use lexer::{Tokenizer, tokenize};
pub use pipeline::{PipelineOptions, tokenize_stream};
pub use tokens::{CollectVisitor, Token, TokenKind, TokenVisitor};
