//! Text helpers for working with the line under the cursor.
//!
//! All positions are character columns, matching [`LineCol::col`].
//!
//! [`LineCol::col`]: crate::base::LineCol

/// Check if a character is part of an identifier.
///
/// Uses Unicode Standard Annex #31 rules plus `$`, which Solidity allows in
/// identifiers.
#[inline]
pub fn is_word_character(c: char) -> bool {
    unicode_ident::is_xid_continue(c) || c == '$'
}

/// Find the boundaries of a word at the given position.
///
/// Returns `Some((start, end))` where `start` is the character index of the word start
/// and `end` is the character index after the last word character.
/// Returns `None` if there is no word at the position.
pub fn find_word_boundaries(chars: &[char], position: usize) -> Option<(usize, usize)> {
    if position >= chars.len() || !is_word_character(chars[position]) {
        return None;
    }

    let mut start = position;
    while start > 0 && is_word_character(chars[start - 1]) {
        start -= 1;
    }

    let mut end = position;
    while end < chars.len() && is_word_character(chars[end]) {
        end += 1;
    }

    Some((start, end))
}

/// The word under the cursor, also when the cursor sits right after it.
///
/// Returns the word and its start and end columns.
///
/// # Example
/// ```
/// use solidity_assist::ide::text_utils::word_at;
///
/// let line = "token.owner();";
/// assert_eq!(word_at(line, 7), Some(("owner".to_string(), 6, 11)));
/// assert_eq!(word_at(line, 5), Some(("token".to_string(), 0, 5)));
/// assert_eq!(word_at(line, 13), None);
/// ```
pub fn word_at(line: &str, col: usize) -> Option<(String, usize, usize)> {
    let chars: Vec<char> = line.chars().collect();
    let (start, end) = find_word_boundaries(&chars, col)
        .or_else(|| col.checked_sub(1).and_then(|prev| find_word_boundaries(&chars, prev)))?;
    Some((chars[start..end].iter().collect(), start, end))
}

/// Identifier characters as the completion triggers see them.
#[inline]
fn is_trigger_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '$'
}

/// The word ending just before `col`, skipping spaces between it and the
/// cursor. Any character other than a space before the word gives an empty
/// string, so `emit` is found in `  emit ` but not in `x.emit`.
pub fn word_before_trimming_spaces(line: &str, col: usize) -> String {
    let chars: Vec<char> = line.chars().collect();
    let mut pos = col.min(chars.len());

    while pos > 0 && chars[pos - 1] == ' ' {
        pos -= 1;
    }

    let end = pos;
    while pos > 0 && is_trigger_ident_char(chars[pos - 1]) {
        pos -= 1;
    }

    if pos > 0 && chars[pos - 1] != ' ' {
        return String::new();
    }
    chars[pos..end].iter().collect()
}

/// Column of the `.` that starts the member being typed at `col`.
///
/// The identifier run ending at the cursor must be preceded by a `.` that is
/// not the first character of the line.
pub fn dot_trigger_column(line: &str, col: usize) -> Option<usize> {
    let chars: Vec<char> = line.chars().collect();
    let mut pos = col.min(chars.len());
    while pos > 0 && is_trigger_ident_char(chars[pos - 1]) {
        pos -= 1;
    }
    let dot = pos.checked_sub(1)?;
    (dot > 0 && chars[dot] == '.').then_some(dot)
}
