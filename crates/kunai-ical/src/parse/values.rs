//! TEXT value interpretation (RFC 5545 §3.3.11).
//!
//! The pipeline stores values raw; this is for callers that want the text.

/// Unescapes a TEXT value.
///
/// Recognizes `\\`, `\;`, `\,` and `\n`/`\N`. Unknown escapes are preserved
/// as written, and a trailing lone backslash is kept.
#[must_use]
pub fn unescape_text(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars();

    while let Some(c) = chars.next() {
        if c == '\\' {
            match chars.next() {
                Some('n' | 'N') => result.push('\n'),
                Some(',') => result.push(','),
                Some(';') => result.push(';'),
                Some('\\') | None => result.push('\\'),
                Some(other) => {
                    result.push('\\');
                    result.push(other);
                }
            }
        } else {
            result.push(c);
        }
    }

    result
}
