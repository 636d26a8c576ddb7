use serde::{Deserialize, Serialize};

/// Layout of the generated source. Target bindings come from the descriptor only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TranspilerConfig {
    pub indent: IndentStyle,
    pub entry_point: String,
}

impl Default for TranspilerConfig {
    fn default() -> Self {
        Self {
            indent: IndentStyle::Spaces(2),
            entry_point: "int main()".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum IndentStyle {
    Spaces(usize),
    Tabs,
}

impl IndentStyle {
    pub fn unit(&self) -> String {
        match self {
            IndentStyle::Spaces(n) => " ".repeat(*n),
            IndentStyle::Tabs => "\t".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout() {
        let config = TranspilerConfig::default();
        assert_eq!(config.indent.unit(), "  ");
        assert_eq!(config.entry_point, "int main()");
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: TranspilerConfig = serde_json::from_str(r#"{"indent": "Tabs"}"#).unwrap();
        assert_eq!(config.indent, IndentStyle::Tabs);
        assert_eq!(config.entry_point, "int main()");

        let config: TranspilerConfig =
            serde_json::from_str(r#"{"indent": {"Spaces": 4}, "entry_point": "int run()"}"#)
                .unwrap();
        assert_eq!(config.indent.unit(), "    ");
        assert_eq!(config.entry_point, "int run()");
    }
}
