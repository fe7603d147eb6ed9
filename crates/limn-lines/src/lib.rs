//! # Limn Lines
//!
//! Line-oriented word splitting and assembly for the Limn diagram notation.
//! Where [`limn-lexer`] scans raw bytes into tokens, this crate works on
//! whole lines of text: it splits them into words with quote or generic
//! awareness, then classifies the words into the shapes diagram parsers care
//! about (relationship lines, keyword prefixes, brace blocks).
//!
//! The two front-ends are alternatives, not stages: a diagram dialect either
//! consumes the token stream or the word stream, and both feed the same kind
//! of downstream parser.
//!
//! ```
//! use limn_lines::{split_quoted, PointerLine};
//!
//! let mut pointer = PointerLine::new();
//! split_quoted(r#""Load Balancer" --> gw : forwards"#, |word| pointer.parse(word));
//!
//! assert_eq!(pointer.left_side(), Some("Load Balancer"));
//! assert_eq!(pointer.connector(), Some("-->"));
//! assert_eq!(pointer.text(), "forwards");
//! ```
//!
//! [`limn-lexer`]: https://crates.io/crates/limn-lexer

mod block;
mod generics;
mod keywords;
mod pointer;
mod quote;

pub use block::{BlockReader, SkinParamBlock};
pub use generics::{split_generics, split_generics_indexed};
pub use keywords::KeywordPrefix;
pub use pointer::PointerLine;
pub use quote::{split_quoted, split_quoted_indexed, split_quoted_with};
