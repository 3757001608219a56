use std::fmt::{self, Display};

///
/// A single cell of a [Table](crate::models::Table).
///
/// Numbers and null markers such as `NA` keep the literal text they were read
/// from so that columns which are not touched by a derivation are written back
/// exactly as they came in.
///
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Value {
    /// An empty cell.
    Null,
    /// A null marker (`NA`, `NaN`, ...). Treated as null, written back verbatim.
    Missing(String),
    Number(String),
    Text(String),
}

impl Value {
    ///
    /// Classify one raw cell of a delimited file.
    ///
    /// # Arguments
    /// - raw: the cell text as read from disk
    /// - null_values: sentinels that mean "absent"; an empty cell is always null
    pub fn parse(raw: &str, null_values: &[String]) -> Value {
        if raw.is_empty() {
            return Value::Null;
        }
        if null_values.iter().any(|n| n == raw) {
            return Value::Missing(raw.to_string());
        }

        let trimmed = raw.trim();
        // rust's f64 parser also accepts "nan" and "inf"
        let looks_numeric = trimmed.bytes().any(|b| b.is_ascii_digit());
        if looks_numeric && trimmed.parse::<f64>().is_ok() {
            Value::Number(raw.to_string())
        } else {
            Value::Text(raw.to_string())
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null | Value::Missing(_))
    }

    ///
    /// Text form of the value, `None` when the cell is null.
    ///
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Null | Value::Missing(_) => None,
            Value::Number(s) | Value::Text(s) => Some(s.as_str()),
        }
    }

    ///
    /// The cell exactly as it appears on disk.
    ///
    pub fn raw(&self) -> &str {
        match self {
            Value::Null => "",
            Value::Missing(s) | Value::Number(s) | Value::Text(s) => s.as_str(),
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw())
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    #[case("", Value::Null)]
    #[case("12", Value::Number("12".to_string()))]
    #[case("1.50", Value::Number("1.50".to_string()))]
    #[case("-3e2", Value::Number("-3e2".to_string()))]
    #[case("nan", Value::Text("nan".to_string()))]
    #[case("inf", Value::Text("inf".to_string()))]
    #[case("clip.mp4", Value::Text("clip.mp4".to_string()))]
    fn test_parse_default_sentinels(#[case] raw: &str, #[case] expected: Value) {
        assert_eq!(Value::parse(raw, &[]), expected);
    }

    #[rstest]
    fn test_parse_extra_sentinels() {
        let nulls = vec!["NA".to_string(), "null".to_string()];
        assert_eq!(Value::parse("NA", &nulls), Value::Missing("NA".to_string()));
        assert_eq!(Value::parse("null", &nulls), Value::Missing("null".to_string()));
        assert_eq!(Value::parse("NULL", &nulls), Value::Text("NULL".to_string()));
    }

    #[rstest]
    fn test_missing_is_null_but_keeps_raw_text() {
        let value = Value::parse("NaN", &["NaN".to_string()]);
        assert!(value.is_null());
        assert_eq!(value.as_text(), None);
        assert_eq!(value.raw(), "NaN");
        assert_eq!(value.to_string(), "NaN");
    }

    #[rstest]
    fn test_display_keeps_number_literal() {
        assert_eq!(Value::parse("007", &[]).to_string(), "007");
        assert_eq!(Value::Null.to_string(), "");
    }

    #[rstest]
    fn test_from_option() {
        assert_eq!(Value::from(None::<&str>), Value::Null);
        assert_eq!(Value::from(Some("a")), Value::Text("a".to_string()));
    }
}
