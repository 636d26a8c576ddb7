/// Escapes `text` for use inside a double-quoted C++ string literal.
///
/// ASCII control characters without a short escape are written as three-digit
/// octal escapes, so a following digit can never extend them.
pub fn escape_cpp(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    for ch in text.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_ascii_control() => out.push_str(&format!("\\{:03o}", c as u32)),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_is_verbatim() {
        assert_eq!(escape_cpp("hello, world"), "hello, world");
        assert_eq!(escape_cpp("日本語 ü"), "日本語 ü");
    }

    #[test]
    fn test_short_escapes() {
        assert_eq!(escape_cpp("x\"y\""), "x\\\"y\\\"");
        assert_eq!(escape_cpp("a\\b"), "a\\\\b");
        assert_eq!(escape_cpp("a\nb\rc\td"), "a\\nb\\rc\\td");
    }

    #[test]
    fn test_octal_escapes() {
        assert_eq!(escape_cpp("\u{0}1"), "\\0001");
        assert_eq!(escape_cpp("\u{7f}"), "\\177");
        assert_eq!(escape_cpp("\u{1b}[0m"), "\\033[0m");
    }
}
