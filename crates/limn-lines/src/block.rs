//! Multi-line block accumulation.
//!
//! Some constructs open a brace at the end of one line and close it on a
//! later one. [`BlockReader`] drives the quote-aware splitter over each line
//! and lets an implementation decide, word by word, whether more lines are
//! needed; [`SkinParamBlock`] is the concrete style-block variant.

use log::trace;

use crate::quote::split_quoted_indexed;

/// Line-by-line accumulator for a block construct.
///
/// Implementations see every word of every line through
/// [`read`](Self::read) and get a [`line_done`](Self::line_done) call after
/// each line. The verdict of the *last* word on a line decides whether the
/// caller should feed another line.
pub trait BlockReader {
    /// Inspect one word. `end_offset == line_len` marks the last word on the
    /// line; the return value of that call becomes the line's verdict.
    fn read(&mut self, word: &str, end_offset: usize, line_len: usize) -> bool;

    /// Called once after all words of a line have been read.
    fn line_done(&mut self);

    /// Feed one full line; returns `true` when the block needs more lines.
    fn read_line(&mut self, line: &str) -> bool {
        let mut continue_block = false;
        split_quoted_indexed(line, '"', |word, end_offset, line_len| {
            continue_block = self.read(word, end_offset, line_len);
        });
        self.line_done();
        trace!(more = continue_block; "block line consumed");
        continue_block
    }
}

/// Accumulates a `skinparam ... { ... }` style block.
///
/// Requests continuation exactly when the last word on a line starts with
/// `{` — an opening brace with nothing after it on the line. All words of
/// every consumed line are kept, with line boundaries preserved; the caller
/// stops feeding lines once its own close condition is met.
#[derive(Debug, Default)]
pub struct SkinParamBlock {
    lines: Vec<Vec<String>>,
    current: Vec<String>,
}

impl SkinParamBlock {
    pub fn new() -> Self {
        Self::default()
    }

    /// The accumulated words, one inner list per consumed line.
    pub fn lines(&self) -> &[Vec<String>] {
        &self.lines
    }
}

impl BlockReader for SkinParamBlock {
    fn read(&mut self, word: &str, end_offset: usize, line_len: usize) -> bool {
        self.current.push(word.to_string());
        end_offset == line_len && word.starts_with('{')
    }

    fn line_done(&mut self) {
        if !self.current.is_empty() {
            self.lines.push(std::mem::take(&mut self.current));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_brace_at_line_end_requests_more() {
        let mut block = SkinParamBlock::new();
        assert!(block.read_line("skinparam component {"));
    }

    #[test]
    fn line_without_trailing_brace_does_not_continue() {
        let mut block = SkinParamBlock::new();
        assert!(!block.read_line("skinparam monochrome true"));
    }

    #[test]
    fn brace_followed_by_more_words_does_not_continue() {
        let mut block = SkinParamBlock::new();
        assert!(!block.read_line("skinparam component { inline }"));
    }

    #[test]
    fn accumulates_words_per_line() {
        let mut block = SkinParamBlock::new();
        assert!(block.read_line("skinparam component {"));
        assert!(!block.read_line("    BackgroundColor white"));
        assert!(!block.read_line("}"));
        assert_eq!(block.lines(), &[
            vec!["skinparam".to_string(), "component".to_string(), "{".to_string()],
            vec!["BackgroundColor".to_string(), "white".to_string()],
            vec!["}".to_string()],
        ]);
    }

    #[test]
    fn blank_line_neither_continues_nor_records() {
        let mut block = SkinParamBlock::new();
        assert!(!block.read_line("   "));
        assert!(block.lines().is_empty());
    }
}
