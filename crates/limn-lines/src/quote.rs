//! Quote-aware word splitting.
//!
//! Splits one line of diagram text into space-delimited words while treating
//! double-quoted spans as atomic: spaces inside a quoted region are preserved
//! verbatim, runs of unquoted spaces collapse, and the quote character itself
//! is never part of an emitted word.

/// Split `line` on unquoted spaces, with `"` as the quoting delimiter.
pub fn split_quoted(line: &str, on_word: impl FnMut(&str)) {
    split_quoted_with(line, '"', on_word);
}

/// Split `line` on unquoted spaces, with a caller-chosen quoting delimiter.
///
/// Every occurrence of `quote` toggles the in-quote flag; there is no pairing
/// or nesting. Words are flushed on each unquoted space and once more at the
/// end of the line if any text is pending.
pub fn split_quoted_with(line: &str, quote: char, mut on_word: impl FnMut(&str)) {
    split_quoted_indexed(line, quote, |word, _, _| on_word(word));
}

/// Positional variant of [`split_quoted_with`].
///
/// `on_word(word, end_offset, line_len)` reports the character offset at
/// which the word ended and the total line length in characters. The final
/// word of a line is flushed with `end_offset == line_len` — the "last word
/// on the line" sentinel used by the multi-line block accumulator.
pub fn split_quoted_indexed(
    line: &str,
    quote: char,
    mut on_word: impl FnMut(&str, usize, usize),
) {
    let line_len = line.chars().count();
    let mut word = String::new();
    let mut in_quotes = false;

    for (index, c) in line.chars().enumerate() {
        if c == quote {
            in_quotes = !in_quotes;
            continue;
        }

        if !in_quotes && c == ' ' {
            if !word.is_empty() {
                on_word(&word, index, line_len);
                word.clear();
            }
            continue;
        }

        word.push(c);
    }

    if !word.is_empty() {
        on_word(&word, line_len, line_len);
    }
}
