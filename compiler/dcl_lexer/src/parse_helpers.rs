//! Numeric and string literal decoding.
//!
//! Shared between the lexer, which validates literals, and the grammar,
//! which decodes the token text into atoms.

/// Decode a decimal or `0x` hexadecimal integer literal.
pub fn parse_int_literal(text: &str) -> Option<i64> {
    match text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        Some(hex) => i64::from_str_radix(hex, 16).ok(),
        None => text.parse().ok(),
    }
}

/// Decode a float literal.
pub fn parse_float_literal(text: &str) -> Option<f64> {
    text.parse().ok()
}

/// Resolve escapes in the body of a string literal (quotes stripped).
///
/// On an unknown escape returns the byte offset of its backslash.
pub(crate) fn unescape(body: &str) -> Result<String, usize> {
    let mut out = String::with_capacity(body.len());
    let mut chars = body.char_indices();
    while let Some((i, c)) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some((_, 'n')) => out.push('\n'),
            Some((_, 't')) => out.push('\t'),
            Some((_, 'r')) => out.push('\r'),
            Some((_, '0')) => out.push('\0'),
            Some((_, '\\')) => out.push('\\'),
            Some((_, '"')) => out.push('"'),
            _ => return Err(i),
        }
    }
    Ok(out)
}
