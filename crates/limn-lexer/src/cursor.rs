//! Chunk-spanning byte cursor with line/column accounting.
//!
//! The transport hands the scanner arbitrarily sized chunks; the cursor
//! presents them as one logical byte sequence so position state never has to
//! be re-derived from chunk-local offsets. The `(line, column)` pair is owned
//! exclusively by the scanning stage and advances by exactly one unit per
//! consumed byte.

use std::collections::VecDeque;

/// Cheap, copyable snapshot of the cursor position.
///
/// Taken before a speculative scan and applied back with
/// [`ChunkCursor::rewind`] when the speculation fails. Snapshots are only
/// valid until the next [`ChunkCursor::compact`] call.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Mark {
    seg: usize,
    offset: usize,
    line: u32,
    column: u32,
}

/// Segment-list reader over the chunks received so far.
///
/// Consumption is FIFO in the exact order chunks were pushed. The cursor
/// never rewinds except through a [`Mark`].
#[derive(Debug)]
pub(crate) struct ChunkCursor {
    segments: VecDeque<Vec<u8>>,
    /// Index of the segment holding the next unconsumed byte.
    seg: usize,
    /// Byte offset of the next unconsumed byte within that segment.
    offset: usize,
    line: u32,
    column: u32,
}

impl ChunkCursor {
    pub(crate) fn new() -> Self {
        Self {
            segments: VecDeque::new(),
            seg: 0,
            offset: 0,
            line: 1,
            column: 1,
        }
    }

    /// Append a chunk to the tail of the logical sequence.
    pub(crate) fn push_chunk(&mut self, chunk: Vec<u8>) {
        if !chunk.is_empty() {
            self.segments.push_back(chunk);
        }
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.seg >= self.segments.len()
    }

    pub(crate) fn line(&self) -> u32 {
        self.line
    }

    pub(crate) fn column(&self) -> u32 {
        self.column
    }

    /// Next unconsumed byte, if any is buffered.
    pub(crate) fn peek(&self) -> Option<u8> {
        self.segments.get(self.seg).map(|s| s[self.offset])
    }

    /// Byte `n` positions ahead of the cursor, spanning segments.
    pub(crate) fn peek_at(&self, n: usize) -> Option<u8> {
        let mut seg = self.seg;
        let mut offset = self.offset + n;
        while let Some(segment) = self.segments.get(seg) {
            if offset < segment.len() {
                return Some(segment[offset]);
            }
            offset -= segment.len();
            seg += 1;
        }
        None
    }

    /// Consume one byte, advancing the position accounting.
    pub(crate) fn bump(&mut self) -> Option<u8> {
        let byte = self.peek()?;
        self.offset += 1;
        if self.offset >= self.segments[self.seg].len() {
            self.seg += 1;
            self.offset = 0;
        }
        if byte == b'\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(byte)
    }

    pub(crate) fn mark(&self) -> Mark {
        Mark {
            seg: self.seg,
            offset: self.offset,
            line: self.line,
            column: self.column,
        }
    }

    /// Restore a snapshot taken with [`mark`](Self::mark).
    pub(crate) fn rewind(&mut self, mark: Mark) {
        self.seg = mark.seg;
        self.offset = mark.offset;
        self.line = mark.line;
        self.column = mark.column;
    }

    /// Free fully-consumed front segments.
    ///
    /// Invalidates outstanding [`Mark`]s; only call between committed tokens.
    pub(crate) fn compact(&mut self) {
        while self.seg > 0 {
            self.segments.pop_front();
            self.seg -= 1;
        }
    }

    /// Iterator over the unconsumed bytes, without moving the cursor.
    pub(crate) fn remaining(&self) -> Remaining<'_> {
        Remaining {
            cursor: self,
            seg: self.seg,
            offset: self.offset,
        }
    }
}

/// Non-consuming walker used for bounded lookahead.
pub(crate) struct Remaining<'a> {
    cursor: &'a ChunkCursor,
    seg: usize,
    offset: usize,
}

impl Iterator for Remaining<'_> {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        let segment = self.cursor.segments.get(self.seg)?;
        let byte = segment[self.offset];
        self.offset += 1;
        if self.offset >= segment.len() {
            self.seg += 1;
            self.offset = 0;
        }
        Some(byte)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cursor_over(chunks: &[&[u8]]) -> ChunkCursor {
        let mut cursor = ChunkCursor::new();
        for chunk in chunks {
            cursor.push_chunk(chunk.to_vec());
        }
        cursor
    }

    #[test]
    fn consumes_across_segments_in_order() {
        let mut cursor = cursor_over(&[b"ab", b"", b"cd"]);
        let mut seen = Vec::new();
        while let Some(b) = cursor.bump() {
            seen.push(b);
        }
        assert_eq!(seen, b"abcd");
        assert!(cursor.is_empty());
    }

    #[test]
    fn position_accounting() {
        let mut cursor = cursor_over(&[b"a\n", b"bc"]);
        assert_eq!((cursor.line(), cursor.column()), (1, 1));
        cursor.bump(); // 'a'
        assert_eq!((cursor.line(), cursor.column()), (1, 2));
        cursor.bump(); // '\n'
        assert_eq!((cursor.line(), cursor.column()), (2, 1));
        cursor.bump(); // 'b'
        assert_eq!((cursor.line(), cursor.column()), (2, 2));
    }

    #[test]
    fn peek_at_spans_segments() {
        let cursor = cursor_over(&[b"ab", b"cd"]);
        assert_eq!(cursor.peek_at(0), Some(b'a'));
        assert_eq!(cursor.peek_at(2), Some(b'c'));
        assert_eq!(cursor.peek_at(3), Some(b'd'));
        assert_eq!(cursor.peek_at(4), None);
    }

    #[test]
    fn mark_and_rewind_restore_position() {
        let mut cursor = cursor_over(&[b"x\nyz"]);
        let mark = cursor.mark();
        cursor.bump();
        cursor.bump();
        cursor.bump();
        assert_eq!((cursor.line(), cursor.column()), (2, 2));
        cursor.rewind(mark);
        assert_eq!((cursor.line(), cursor.column()), (1, 1));
        assert_eq!(cursor.peek(), Some(b'x'));
    }

    #[test]
    fn compact_keeps_cursor_stable() {
        let mut cursor = cursor_over(&[b"ab", b"cd"]);
        cursor.bump();
        cursor.bump();
        cursor.bump(); // now inside second segment
        cursor.compact();
        assert_eq!(cursor.peek(), Some(b'd'));
        assert_eq!(cursor.bump(), Some(b'd'));
        assert!(cursor.is_empty());
    }

    #[test]
    fn remaining_does_not_consume() {
        let cursor = cursor_over(&[b"ab", b"c"]);
        let collected: Vec<u8> = cursor.remaining().collect();
        assert_eq!(collected, b"abc");
        assert_eq!(cursor.peek(), Some(b'a'));
    }
}
