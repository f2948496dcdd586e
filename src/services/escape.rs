//! Escaping for Go raw string literals.
//!
//! A raw string literal runs from one backtick to the next and cannot contain a
//! backtick itself. Each backtick in the content is replaced by a sequence that
//! closes the literal, concatenates an interpreted `"`"` literal, and opens a new
//! raw literal. Nothing else is touched; newlines, tabs and Unicode pass through.

/// Delimiter of a raw string literal.
pub const DELIMITER: char = '`';

/// What each delimiter in the content becomes.
pub const REPLACEMENT: &str = "` + \"`\" + `";

/// Escape `text` for embedding between two [`DELIMITER`]s.
///
/// Total over all strings. Not idempotent: escaping twice escapes the
/// delimiters introduced by the first pass.
pub fn escape(text: &str) -> String {
    let extra = text.matches(DELIMITER).count() * (REPLACEMENT.len() - 1);
    let mut out = String::with_capacity(text.len() + extra);

    let mut rest = text;
    while let Some(pos) = rest.find(DELIMITER) {
        out.push_str(&rest[..pos]);
        out.push_str(REPLACEMENT);
        rest = &rest[pos + DELIMITER.len_utf8()..];
    }
    out.push_str(rest);
    out
}

/// Reverse [`escape`].
///
/// Every delimiter in escaped text starts a [`REPLACEMENT`], so a leftmost
/// non-overlapping replace restores the original exactly.
pub fn unescape(escaped: &str) -> String {
    escaped.replace(REPLACEMENT, "`")
}
