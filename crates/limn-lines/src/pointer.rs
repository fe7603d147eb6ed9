//! Directional line assembly.
//!
//! Classifies the words of an `A --> B : label` style line into a left
//! operand, a connector, a right operand, and trailing label text.

/// Accumulates the parts of one relationship line, one word at a time.
///
/// Feed words in line order via [`parse`](Self::parse), then read the parts.
/// Classification per word: a word whose first character is an arrow glyph
/// (`-`, `<`, `>`, `.`, `[`, `]`) becomes the connector; before any connector
/// the first word is the left operand; after the connector the first word is
/// the right operand; everything later joins the trailing text, except words
/// starting with `:` (the label separator).
#[derive(Debug, Default)]
pub struct PointerLine {
    left: Option<String>,
    connector: Option<String>,
    right: Option<String>,
    text_words: Vec<String>,
    text_cache: Option<String>,
}

impl PointerLine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn parse(&mut self, word: &str) {
        let first = word.chars().next();
        if matches!(first, Some('-' | '<' | '>' | '.' | '[' | ']')) {
            // A later glyph word (e.g. a trailing "[r]") overwrites.
            self.connector = Some(word.to_string());
        } else if self.connector.is_none() {
            self.left = Some(word.to_string());
        } else if self.right.is_none() {
            self.right = Some(word.to_string());
        } else if first != Some(':') {
            self.text_words.push(word.to_string());
        }
    }

    pub fn left_side(&self) -> Option<&str> {
        self.left.as_deref()
    }

    pub fn connector(&self) -> Option<&str> {
        self.connector.as_deref()
    }

    pub fn right_side(&self) -> Option<&str> {
        self.right.as_deref()
    }

    /// The trailing label text, trimmed. Joined and cached on first read;
    /// words fed after that do not refresh the cache.
    pub fn text(&mut self) -> &str {
        self.text_cache
            .get_or_insert_with(|| self.text_words.join(" ").trim().to_string())
    }
}
