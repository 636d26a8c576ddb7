use crate::config::IndentStyle;

/// Text layout shared by every lowering rule.
#[derive(Debug, Clone)]
pub struct EmitContext {
    pub indent_chars: String,
}

impl EmitContext {
    pub fn new(style: &IndentStyle) -> Self {
        Self {
            indent_chars: style.unit(),
        }
    }

    /// Indents every non-empty line of `text` one level, dropping one trailing newline.
    pub fn indent(&self, text: &str) -> String {
        let text = text.strip_suffix('\n').unwrap_or(text);
        text.split('\n')
            .map(|line| {
                if line.is_empty() {
                    String::new()
                } else {
                    format!("{}{}", self.indent_chars, line)
                }
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// `header {` + indented body + `}`, without a trailing newline.
    pub fn braced(&self, header: &str, body: &str) -> String {
        format!("{} {{\n{}\n}}", header, self.indent(body))
    }
}

impl Default for EmitContext {
    fn default() -> Self {
        Self::new(&IndentStyle::Spaces(2))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indent_skips_empty_lines() {
        let ctx = EmitContext::default();
        assert_eq!(ctx.indent("a;\n\nb;\n"), "  a;\n\n  b;");
        assert_eq!(ctx.indent(""), "");
    }

    #[test]
    fn test_braced_block() {
        let ctx = EmitContext::default();
        assert_eq!(ctx.braced("if (c)", "x;\n"), "if (c) {\n  x;\n}");
    }

    #[test]
    fn test_custom_indent_chars() {
        let ctx = EmitContext::new(&IndentStyle::Tabs);
        assert_eq!(ctx.braced("f()", "{\n  x;\n}\n"), "f() {\n\t{\n\t  x;\n\t}\n}");
    }
}
