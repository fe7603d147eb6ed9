//! Byte-level tokenizer for the Limn diagram notation.
//!
//! The tokenizer classifies one lexeme at a time against an ad-hoc,
//! context-sensitive grammar: quoted strings, bracketed component names,
//! arrows with embedded style attributes, stereotypes, colors, labels and
//! keywords. It is deliberately infallible — malformed input degrades to
//! `Unknown` tokens or unterminated-construct tokens, never an error.
//!
//! [`Tokenizer`] is the incremental form fed by the transport
//! [`pipeline`](crate::pipeline); [`tokenize`] is the whole-buffer
//! convenience entry point.

use crate::cursor::ChunkCursor;
use crate::keyword::keyword_kind;
use crate::tokens::{Token, TokenKind, TokenVisitor};

/// Lookahead budget for the bracketed-component disambiguation, in bytes.
const BRACKET_LOOKAHEAD_BYTES: usize = 500;
/// Lookahead budget for the bracketed-component disambiguation, in newlines.
const BRACKET_LOOKAHEAD_LINES: usize = 20;

/// Outcome of one dispatch attempt.
enum Scan {
    Token(Token),
    /// The lexeme may continue into a chunk that has not arrived yet.
    Incomplete,
    /// All buffered input has been consumed.
    End,
}

/// Result of the speculative scan for a closing `]`.
enum BracketLookahead {
    Found,
    /// No `]` within the byte/line budget; treat `[` as a lone bracket.
    NotFound,
    /// Ran out of buffered bytes with budget remaining.
    OutOfInput,
}

/// Incremental tokenizer over a chunked byte sequence.
///
/// Chunks arrive via [`push_chunk`](Self::push_chunk) in source order;
/// [`next_token`](Self::next_token) scans the next lexeme from the buffered
/// bytes. Line/column state lives in the internal cursor and survives chunk
/// boundaries; the cursor only rewinds for bounded speculative scans.
#[derive(Debug)]
pub struct Tokenizer {
    cursor: ChunkCursor,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Tokenizer {
    pub fn new() -> Self {
        Self {
            cursor: ChunkCursor::new(),
        }
    }

    /// Append the next chunk of the byte stream.
    pub fn push_chunk(&mut self, chunk: Vec<u8>) {
        self.cursor.push_chunk(chunk);
    }

    /// Scan the next token from the buffered bytes.
    ///
    /// With `at_eof == false` a lexeme is only committed when it provably
    /// cannot continue into a future chunk; a lexeme that reaches the end of
    /// the buffered bytes is held back (`None`) until more input arrives or
    /// the caller drains with `at_eof == true`. This keeps line/column
    /// accounting exact under arbitrary chunking.
    ///
    /// Comment tokens are returned here so the cursor advances correctly;
    /// callers that feed visitors filter on [`TokenKind::is_significant`].
    /// Whitespace is consumed silently and never surfaces as a token.
    pub fn next_token(&mut self, at_eof: bool) -> Option<Token> {
        let mark = self.cursor.mark();
        match self.scan(at_eof) {
            Scan::Token(token) => {
                if !at_eof && self.cursor.is_empty() {
                    self.cursor.rewind(mark);
                    return None;
                }
                self.cursor.compact();
                Some(token)
            }
            Scan::Incomplete => {
                self.cursor.rewind(mark);
                None
            }
            Scan::End => None,
        }
    }

    fn scan(&mut self, at_eof: bool) -> Scan {
        self.skip_whitespace();

        let line = self.cursor.line();
        let column = self.cursor.column();
        let Some(current) = self.cursor.peek() else {
            return Scan::End;
        };

        match current {
            b'\'' => Scan::Token(self.comment(line, column)),
            b'"' => Scan::Token(self.quoted_string(line, column)),
            b'{' => Scan::Token(self.single(TokenKind::OpenBrace, "{", line, column)),
            b'}' => Scan::Token(self.single(TokenKind::CloseBrace, "}", line, column)),
            b']' => Scan::Token(self.single(TokenKind::CloseBracket, "]", line, column)),
            b')' => Scan::Token(self.single(TokenKind::CloseParen, ")", line, column)),
            b'[' => match self.find_closing_bracket() {
                BracketLookahead::Found => Scan::Token(self.bracketed_component(line, column)),
                BracketLookahead::OutOfInput if !at_eof => Scan::Incomplete,
                BracketLookahead::NotFound | BracketLookahead::OutOfInput => {
                    Scan::Token(self.single(TokenKind::OpenBracket, "[", line, column))
                }
            },
            b'(' => {
                if self.cursor.peek_at(1) == Some(b')') {
                    self.cursor.bump();
                    self.cursor.bump();
                    Scan::Token(Token::new(TokenKind::Interface, "()", line, column))
                } else {
                    Scan::Token(self.single(TokenKind::OpenParen, "(", line, column))
                }
            }
            b':' => Scan::Token(self.colon_or_label(line, column)),
            b'#' => Scan::Token(self.color(line, column)),
            b'<' if self.cursor.peek_at(1) == Some(b'<') => {
                Scan::Token(self.stereotype(line, column))
            }
            _ if self.is_arrow_start() => Scan::Token(self.arrow(line, column)),
            _ => Scan::Token(self.keyword_or_identifier(line, column)),
        }
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.cursor.peek() {
            match c {
                b' ' | b'\t' | b'\r' | b'\n' => {
                    self.cursor.bump();
                }
                _ => break,
            }
        }
    }

    fn single(&mut self, kind: TokenKind, text: &'static str, line: u32, column: u32) -> Token {
        self.cursor.bump();
        Token::new(kind, text, line, column)
    }

    /// A `'` comment runs to the end of the line. Never delivered to
    /// visitors.
    fn comment(&mut self, line: u32, column: u32) -> Token {
        self.cursor.bump();
        let mut text = Vec::new();
        while let Some(c) = self.cursor.peek() {
            if c == b'\n' {
                break;
            }
            text.push(c);
            self.cursor.bump();
        }
        Token::new(
            TokenKind::Comment,
            String::from_utf8_lossy(&text).into_owned(),
            line,
            column,
        )
    }

    /// Interior of a `"..."` span, escapes preserved verbatim.
    ///
    /// A backslash marks the following byte as escaped; both bytes are copied
    /// through without interpretation. Embedded newlines are legal and
    /// advance the line counter. An unterminated quote consumes to the end of
    /// input and still yields a token.
    fn quoted_string(&mut self, line: u32, column: u32) -> Token {
        self.cursor.bump();
        let mut text = Vec::new();
        let mut escaped = false;
        while let Some(c) = self.cursor.peek() {
            if escaped {
                escaped = false;
                text.push(c);
                self.cursor.bump();
                continue;
            }
            if c == b'\\' {
                escaped = true;
                text.push(c);
                self.cursor.bump();
                continue;
            }
            if c == b'"' {
                break;
            }
            text.push(c);
            self.cursor.bump();
        }
        if self.cursor.peek() == Some(b'"') {
            self.cursor.bump();
        }
        Token::new(
            TokenKind::QuotedString,
            String::from_utf8_lossy(&text).into_owned(),
            line,
            column,
        )
    }

    /// `#RRGGBB` or `#name`; the leading `#` stays in the token text.
    fn color(&mut self, line: u32, column: u32) -> Token {
        self.cursor.bump();
        let mut text = String::from("#");
        while let Some(c) = self.cursor.peek() {
            if c.is_ascii_alphanumeric() {
                text.push(c as char);
                self.cursor.bump();
            } else {
                break;
            }
        }
        Token::new(TokenKind::Color, text, line, column)
    }

    /// `<<name>>` annotation; interior may span lines. Unterminated
    /// stereotypes consume to end of input.
    fn stereotype(&mut self, line: u32, column: u32) -> Token {
        self.cursor.bump();
        self.cursor.bump();
        let mut text = Vec::new();
        loop {
            match self.cursor.peek() {
                None => break,
                Some(b'>') if self.cursor.peek_at(1) == Some(b'>') => break,
                Some(c) => {
                    text.push(c);
                    self.cursor.bump();
                }
            }
        }
        if self.cursor.peek() == Some(b'>') {
            self.cursor.bump();
            if self.cursor.peek() == Some(b'>') {
                self.cursor.bump();
            }
        }
        Token::new(
            TokenKind::Stereotype,
            String::from_utf8_lossy(&text).into_owned(),
            line,
            column,
        )
    }

    /// After a `:`, any remaining text on the line becomes a trimmed label.
    ///
    /// Only spaces and tabs are skipped between the colon and the label; a
    /// line-final colon stays a bare `Colon` token and leaves the newline for
    /// the next dispatch.
    fn colon_or_label(&mut self, line: u32, column: u32) -> Token {
        self.cursor.bump();
        while matches!(self.cursor.peek(), Some(b' ') | Some(b'\t')) {
            self.cursor.bump();
        }
        match self.cursor.peek() {
            None | Some(b'\n') | Some(b'\r') => Token::new(TokenKind::Colon, ":", line, column),
            Some(_) => {
                let mut text = Vec::new();
                while let Some(c) = self.cursor.peek() {
                    if c == b'\n' || c == b'\r' {
                        break;
                    }
                    text.push(c);
                    self.cursor.bump();
                }
                let value = String::from_utf8_lossy(&text).trim().to_string();
                Token::new(TokenKind::Label, value, line, column)
            }
        }
    }

    /// Speculatively look for a `]` within the lookahead budget, without
    /// moving the cursor.
    fn find_closing_bracket(&self) -> BracketLookahead {
        let mut bytes = self.cursor.remaining();
        bytes.next(); // the '[' itself
        let mut scanned = 0usize;
        let mut newlines = 0usize;
        for c in bytes {
            if c == b'\n' {
                newlines += 1;
                if newlines > BRACKET_LOOKAHEAD_LINES {
                    return BracketLookahead::NotFound;
                }
            }
            if c == b']' {
                return BracketLookahead::Found;
            }
            if scanned > BRACKET_LOOKAHEAD_BYTES {
                return BracketLookahead::NotFound;
            }
            scanned += 1;
        }
        BracketLookahead::OutOfInput
    }

    /// `[Component Name]` with a known-reachable `]`; the interior may span
    /// lines and may contain literal `\n` two-byte escapes, which are copied
    /// through unchanged.
    fn bracketed_component(&mut self, line: u32, column: u32) -> Token {
        self.cursor.bump();
        let mut text = Vec::new();
        while let Some(c) = self.cursor.peek() {
            if c == b']' {
                break;
            }
            if c == b'\\' && self.cursor.peek_at(1) == Some(b'n') {
                text.push(b'\\');
                text.push(b'n');
                self.cursor.bump();
                self.cursor.bump();
                continue;
            }
            text.push(c);
            self.cursor.bump();
        }
        if self.cursor.peek() == Some(b']') {
            self.cursor.bump();
        }
        Token::new(
            TokenKind::Component,
            String::from_utf8_lossy(&text).into_owned(),
            line,
            column,
        )
    }

    fn is_arrow_start(&self) -> bool {
        match self.cursor.peek() {
            Some(b'<') | Some(b'-') | Some(b'.') | Some(b'>') => true,
            Some(b'=') => self.cursor.peek_at(1) == Some(b'='),
            _ => false,
        }
    }

    /// Greedy arrow scan.
    ///
    /// Outside brackets the scan accepts arrow glyph characters; a `[`
    /// switches to an inside-brackets mode that additionally accepts style
    /// attribute text such as `[#green,thickness=2]` or `[right]`, and `]`
    /// switches back out. The full matched span, attributes included, is the
    /// token text — no attribute parsing happens here.
    fn arrow(&mut self, line: u32, column: u32) -> Token {
        let mut text = String::new();
        let mut in_bracket = false;
        while let Some(c) = self.cursor.peek() {
            let accept = match c {
                b'[' => {
                    in_bracket = true;
                    true
                }
                b']' => {
                    in_bracket = false;
                    true
                }
                _ if in_bracket => {
                    c.is_ascii_alphanumeric() || matches!(c, b'_' | b'#' | b',' | b'=')
                }
                b'<' | b'>' | b'-' | b'.' | b'=' | b'(' | b')' | b'o' | b'#' | b'|' | b',' => true,
                _ => false,
            };
            if !accept {
                break;
            }
            text.push(c as char);
            self.cursor.bump();
        }
        Token::new(TokenKind::Arrow, text, line, column)
    }

    /// Identifier/keyword scan, and the forward-progress fallback.
    ///
    /// Consumes a run of alphanumerics, `_` and `@`. If the current byte
    /// starts no lexeme at all, exactly one byte is consumed and emitted as
    /// `Unknown` so the scanner can never stall on unrecognized input.
    fn keyword_or_identifier(&mut self, line: u32, column: u32) -> Token {
        let mut text = String::new();
        while let Some(c) = self.cursor.peek() {
            if c.is_ascii_alphanumeric() || c == b'_' || c == b'@' {
                text.push(c as char);
                self.cursor.bump();
            } else {
                break;
            }
        }
        if text.is_empty() {
            return match self.cursor.bump() {
                Some(byte) => Token::new(
                    TokenKind::Unknown,
                    String::from_utf8_lossy(&[byte]).into_owned(),
                    line,
                    column,
                ),
                None => Token::new(TokenKind::EndOfStream, "", line, column),
            };
        }
        match keyword_kind(&text) {
            Some(kind) => Token::new(kind, text, line, column),
            None => Token::new(TokenKind::Identifier, text, line, column),
        }
    }
}

/// Tokenize a complete in-memory byte sequence.
///
/// Every significant token is delivered to `visitor` in source order;
/// whitespace and comments are consumed but not delivered.
pub fn tokenize(source: impl AsRef<[u8]>, visitor: &mut impl TokenVisitor) {
    let mut tokenizer = Tokenizer::new();
    tokenizer.push_chunk(source.as_ref().to_vec());
    while let Some(token) = tokenizer.next_token(true) {
        if token.kind.is_significant() {
            visitor.visit(token);
        }
    }
}


#[cfg(test)]
mod proptest_tests {
    use proptest::prelude::*;

    use super::*;
    use crate::tokens::CollectVisitor;

    fn lex_bytes(source: &[u8]) -> Vec<Token> {
        let mut visitor = CollectVisitor::new();
        tokenize(source, &mut visitor);
        visitor.into_tokens()
    }

    proptest! {
        /// Token positions never go backwards, whatever the input.
        #[test]
        fn positions_monotonic(source in proptest::collection::vec(any::<u8>(), 0..512)) {
            let tokens = lex_bytes(&source);
            let mut previous = (0u32, 0u32);
            for token in &tokens {
                let position = (token.line, token.column);
                prop_assert!(position >= previous);
                previous = position;
            }
        }

        /// The tokenizer terminates and drains any input completely; no byte
        /// sequence can stall it.
        #[test]
        fn forward_progress(source in proptest::collection::vec(any::<u8>(), 0..512)) {
            let mut tokenizer = Tokenizer::new();
            tokenizer.push_chunk(source.clone());
            let mut count = 0usize;
            while tokenizer.next_token(true).is_some() {
                count += 1;
                prop_assert!(count <= source.len() + 1);
            }
        }

        /// Chunking never changes the token stream.
        #[test]
        fn chunking_equivalence(
            source in "[ -~\\n]{0,200}",
            split in 0usize..200,
        ) {
            let bytes = source.as_bytes();
            let whole = lex_bytes(bytes);

            let cut = split.min(bytes.len());
            let mut tokenizer = Tokenizer::new();
            let mut chunked = Vec::new();
            tokenizer.push_chunk(bytes[..cut].to_vec());
            while let Some(token) = tokenizer.next_token(false) {
                if token.kind.is_significant() {
                    chunked.push(token);
                }
            }
            tokenizer.push_chunk(bytes[cut..].to_vec());
            while let Some(token) = tokenizer.next_token(false) {
                if token.kind.is_significant() {
                    chunked.push(token);
                }
            }
            while let Some(token) = tokenizer.next_token(true) {
                if token.kind.is_significant() {
                    chunked.push(token);
                }
            }
            prop_assert_eq!(whole, chunked);
        }
    }
}
