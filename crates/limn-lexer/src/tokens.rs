//! Token model for the Limn lexer.
//!
//! A [`Token`] is a classified lexeme with the 1-based source position of its
//! first byte. Tokens are produced once by the tokenizer and handed to a
//! [`TokenVisitor`]; the lexer never mutates or re-emits them.

/// The closed set of token classifications.
///
/// Structural keywords are recognized case-insensitively by the
/// [`keyword`](crate::keyword) table; the token text always preserves the
/// casing found in the source.
///
/// `Newline`, `Whitespace` and `Comment` exist so the cursor can account for
/// consumed bytes, but they are filtered out before any visitor sees them.
/// `EndOfStream` is an internal sentinel and is likewise never delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    StartUml,
    EndUml,
    Title,
    Component,
    Database,
    Queue,
    Actor,
    Interface,
    Package,
    Frame,
    Node,
    Cloud,
    Folder,
    Together,
    Rectangle,
    Port,
    PortIn,
    PortOut,
    Arrow,
    Note,
    Left,
    Right,
    Top,
    Bottom,
    Up,
    Down,
    Direction,
    To,
    Of,
    End,
    Footer,
    SkinParam,
    Sprite,
    As,
    OpenBrace,
    CloseBrace,
    OpenBracket,
    CloseBracket,
    OpenParen,
    CloseParen,
    Colon,
    Identifier,
    QuotedString,
    Label,
    Color,
    Stereotype,
    Newline,
    Whitespace,
    Comment,
    Unknown,
    EndOfStream,
}

impl TokenKind {
    /// Whether tokens of this kind are delivered to visitors.
    ///
    /// Whitespace and comments advance the cursor but carry no meaning for
    /// downstream diagram parsers.
    pub fn is_significant(self) -> bool {
        !matches!(
            self,
            TokenKind::Whitespace
                | TokenKind::Newline
                | TokenKind::Comment
                | TokenKind::EndOfStream
        )
    }
}

/// A classified lexeme with its start position.
///
/// `text` is the exact matched span for structural tokens, or the decoded
/// payload for quoted strings, stereotypes and labels (delimiters stripped,
/// labels trimmed). Escape markers inside quoted strings are preserved
/// verbatim; no unescaping is performed here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    /// 1-based line of the first byte of the lexeme.
    pub line: u32,
    /// 1-based column of the first byte of the lexeme.
    pub column: u32,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, line: u32, column: u32) -> Self {
        Self {
            kind,
            text: text.into(),
            line,
            column,
        }
    }
}

/// Receiver for the token stream.
///
/// [`visit`](TokenVisitor::visit) is invoked once per significant token, in
/// source order. Implementations own the tokens they receive.
pub trait TokenVisitor {
    fn visit(&mut self, token: Token);
}

impl<F: FnMut(Token)> TokenVisitor for F {
    fn visit(&mut self, token: Token) {
        self(token)
    }
}

/// Visitor that collects tokens into a `Vec`, mostly useful in tests and
/// small consumers.
#[derive(Debug, Default)]
pub struct CollectVisitor {
    tokens: Vec<Token>,
}

impl CollectVisitor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn into_tokens(self) -> Vec<Token> {
        self.tokens
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }
}

impl TokenVisitor for CollectVisitor {
    fn visit(&mut self, token: Token) {
        self.tokens.push(token);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn significance_filter() {
        assert!(TokenKind::Arrow.is_significant());
        assert!(TokenKind::Identifier.is_significant());
        assert!(TokenKind::Unknown.is_significant());
        assert!(!TokenKind::Whitespace.is_significant());
        assert!(!TokenKind::Comment.is_significant());
        assert!(!TokenKind::EndOfStream.is_significant());
    }

    #[test]
    fn closure_visitor() {
        let mut seen = Vec::new();
        {
            let mut visitor = |token: Token| seen.push(token.kind);
            visitor.visit(Token::new(TokenKind::Colon, ":", 1, 1));
        }
        assert_eq!(seen, vec![TokenKind::Colon]);
    }
}
