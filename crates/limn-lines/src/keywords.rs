//! Keyword-prefix splitting.

use std::collections::HashSet;

/// Peels a run of recognized keywords off the front of a word stream.
///
/// Feed words in line order via [`parse`](Self::parse). Words are matched
/// case-sensitively against the constructed set for as long as the run holds;
/// the first miss permanently ends keyword matching, and that word plus
/// everything after it accumulates as leftovers. Separates grammar prefixes
/// like `abstract class` from the subject name and whatever trails it.
#[derive(Debug)]
pub struct KeywordPrefix {
    keywords: HashSet<String>,
    finished: bool,
    matched: Vec<String>,
    left_overs: Vec<String>,
}

impl KeywordPrefix {
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            keywords: keywords.into_iter().map(Into::into).collect(),
            finished: false,
            matched: Vec::new(),
            left_overs: Vec::new(),
        }
    }

    pub fn parse(&mut self, word: &str) {
        if !self.finished {
            if self.keywords.contains(word) {
                self.matched.push(word.to_string());
                return;
            }
            self.finished = true;
        }
        self.left_overs.push(word.to_string());
    }

    pub fn matched_keywords(&self) -> &[String] {
        &self.matched
    }

    pub fn left_overs(&self) -> &[String] {
        &self.left_overs
    }

    /// The leftover words reassembled into a single space-joined string.
    pub fn left_over_text(&self) -> String {
        self.left_overs.join(" ")
    }
}
