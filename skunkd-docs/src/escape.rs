//! Text escaping and number formatting for generated HTML.
//!
//! Record text lands in three places: element content, attribute values,
//! and the JSON literal inside a `<script>` element. Each needs its own
//! treatment.

/// Escape text for HTML element content or a double-quoted attribute.
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Make serialized JSON safe to inline inside a `<script>` element.
///
/// Replaces `<`, `>` and `&` with their `\uXXXX` escapes so no record can
/// close the script element or open a comment. Also escapes U+2028 and
/// U+2029, which older engines treat as line terminators. The result is
/// still valid JSON and parses to the same value.
#[must_use]
pub fn escape_script_json(json: &str) -> String {
    let mut out = String::with_capacity(json.len());
    for c in json.chars() {
        match c {
            '<' => out.push_str("\\u003c"),
            '>' => out.push_str("\\u003e"),
            '&' => out.push_str("\\u0026"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            _ => out.push(c),
        }
    }
    out
}

/// Format an integer with comma thousands separators (`12994800` → `12,994,800`).
#[must_use]
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
