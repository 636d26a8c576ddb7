/// A numeric literal.
///
/// `value` holds the digits exactly as the producer wrote them; they are never
/// parsed into a machine number so no precision is lost on the way through.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Num {
    pub value: String,
    pub is_float: bool,
}

impl Num {
    pub fn new(value: impl Into<String>, is_float: bool) -> Self {
        Self {
            value: value.into(),
            is_float,
        }
    }

    pub fn int(value: impl Into<String>) -> Self {
        Self::new(value, false)
    }

    pub fn float(value: impl Into<String>) -> Self {
        Self::new(value, true)
    }
}

/// A string literal. The text is raw; escaping happens at emission time.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Str {
    pub value: String,
}

impl Str {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identifier {
    pub id: String,
}

impl Identifier {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

impl From<&str> for Identifier {
    fn from(id: &str) -> Self {
        Identifier::new(id)
    }
}
