/// Escape a string body for output. The standard single-character
/// escapes plus `/`; everything else passes through unchanged.
pub fn escape_into(out: &mut String, s: &str) {
    for ch in s.chars() {
        match ch {
            '\u{0008}' => out.push_str("\\b"),
            '\u{000C}' => out.push_str("\\f"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '/' => out.push_str("\\/"),
            _ => out.push(ch),
        }
    }
}

pub fn quote_into(out: &mut String, s: &str) {
    out.push('"');
    escape_into(out, s);
    out.push('"');
}

pub fn format_bool(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}

pub fn format_null() -> &'static str {
    "null"
}
