//! Shell-style filename matching.
//!
//! Directory loads filter entries with shell globs (`*`, `?`). Patterns
//! are compiled to anchored regexes; everything else in the pattern is
//! matched literally.

use regex::Regex;

/// Returns true if `segment` contains a glob metacharacter.
pub(crate) fn is_glob(segment: &str) -> bool {
    segment.contains(['*', '?'])
}

/// Compiles a shell-style pattern into an anchored filename matcher.
pub(crate) fn compile(pattern: &str) -> Result<Regex, regex::Error> {
    let mut expr = String::with_capacity(pattern.len() + 8);
    let mut buf = [0u8; 4];
    expr.push('^');
    for ch in pattern.chars() {
        match ch {
            '*' => expr.push_str(".*"),
            '?' => expr.push('.'),
            _ => expr.push_str(&regex::escape(ch.encode_utf8(&mut buf))),
        }
    }
    expr.push('$');
    Regex::new(&expr)
}
