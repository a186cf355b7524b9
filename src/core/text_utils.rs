//! Text manipulation utilities for working with source code.

use smol_str::SmolStr;

/// Check if a character is considered part of a word (identifier).
///
/// Uses Unicode Standard Annex #31 rules for identifier characters, which
/// covers the letters/digits/underscore set Ember identifiers are built from.
#[inline]
pub fn is_word_character(c: char) -> bool {
    unicode_ident::is_xid_continue(c)
}

/// Find the boundaries of a word at the given position.
///
/// Returns `Some((start, end))` where `start` is the character index of the word start
/// and `end` is the character index after the last word character.
/// Returns `None` if there is no word at the position.
pub fn find_word_boundaries(chars: &[char], position: usize) -> Option<(usize, usize)> {
    if position >= chars.len() {
        return None;
    }

    // Check if we're on a word character
    if !is_word_character(chars[position]) {
        return None;
    }

    // Find start of word
    let mut start = position;
    while start > 0 && is_word_character(chars[start - 1]) {
        start -= 1;
    }

    // Find end of word
    let mut end = position;
    while end < chars.len() && is_word_character(chars[end]) {
        end += 1;
    }

    Some((start, end))
}

/// Extract the word (identifier) at the cursor position in a line of text.
///
/// Returns the word as a [`SmolStr`], or `None` if there is no word at the position.
///
/// # Example
/// ```
/// use ember_analysis::core::text_utils::extract_word_at_cursor;
///
/// let line = "mut int count = 0";
/// assert_eq!(extract_word_at_cursor(line, 4).as_deref(), Some("int"));
/// assert_eq!(extract_word_at_cursor(line, 9).as_deref(), Some("count"));
/// assert_eq!(extract_word_at_cursor(line, 3), None); // space
/// ```
pub fn extract_word_at_cursor(line: &str, position: usize) -> Option<SmolStr> {
    let chars: Vec<char> = line.chars().collect();

    if position >= chars.len() {
        return None;
    }

    let (start, end) = find_word_boundaries(&chars, position)?;

    Some(chars[start..end].iter().copied().collect())
}

/// Extract the word ending exactly at character index `end` (exclusive).
///
/// This is the trailing-word match used to recover a callee name from the
/// text immediately preceding a call's opening paren: for `"digitalWrite("`
/// with `end` at the paren, the result is `digitalWrite`.
/// Returns `None` if the character before `end` is not a word character.
pub fn trailing_word(chars: &[char], end: usize) -> Option<SmolStr> {
    if end == 0 || end > chars.len() {
        return None;
    }
    if !is_word_character(chars[end - 1]) {
        return None;
    }

    let mut start = end - 1;
    while start > 0 && is_word_character(chars[start - 1]) {
        start -= 1;
    }

    Some(chars[start..end].iter().copied().collect())
}

/// Fetch the text of a 0-indexed line, without its terminator.
pub fn line_at(text: &str, line: u32) -> Option<&str> {
    text.lines().nth(line as usize)
}
