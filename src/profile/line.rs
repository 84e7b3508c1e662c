//! Line classification for the INI-like profile format.
//!
//! Every input line is classified as exactly one of blank, comment,
//! section header, or key=value assignment, in that priority order.
//! Callers hand in lines already trimmed of surrounding whitespace.

/// One input line, classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Line<'a> {
    /// Empty after trimming.
    Blank,
    /// First character is `;` or `#`.
    Comment,
    /// `[name]`; the name is the untrimmed interior, possibly empty.
    Section(&'a str),
    /// `key=value`, split on the first `=`. The value keeps any further
    /// `=` characters verbatim. A line with no `=` becomes a key with an
    /// empty value rather than an error.
    Assignment(&'a str, &'a str),
}

/// Classifies a single trimmed line.
///
/// Classification is exclusive: a line that parses as a section header is
/// never additionally treated as an assignment, even for degenerate shapes
/// like `[x]=y]` (which reads as a header named `x]=y`).
pub(crate) fn classify(line: &str) -> Line<'_> {
    if line.is_empty() {
        return Line::Blank;
    }
    if line.starts_with(';') || line.starts_with('#') {
        return Line::Comment;
    }
    if let Some(name) = line.strip_prefix('[').and_then(|rest| rest.strip_suffix(']')) {
        return Line::Section(name);
    }
    match line.split_once('=') {
        Some((key, value)) => Line::Assignment(key, value),
        None => Line::Assignment(line, ""),
    }
}
