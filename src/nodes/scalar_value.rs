use ordered_float::NotNan;
use std::fmt::{self, Display};

use crate::builder::{BuildError, RawRecord};

/// Parser value nodes (`String`, `Integer`, `Float`, `Boolean`, `Null`).
///
/// These appear inside name lists and as the payload of `A_Const`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ScalarValue {
    String(String),
    Integer(i64),
    Float(NotNan<f64>),
    Boolean(bool),
    Null,
}

impl ScalarValue {
    pub fn kind(&self) -> &'static str {
        match self {
            ScalarValue::String(_) => "String",
            ScalarValue::Integer(_) => "Integer",
            ScalarValue::Float(_) => "Float",
            ScalarValue::Boolean(_) => "Boolean",
            ScalarValue::Null => "Null",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, ScalarValue::Null)
    }

    // Older output spells the payload `str`/`ival`, newer output `sval`/`fval`.
    pub fn build_string(record: &RawRecord) -> Result<Self, BuildError> {
        let text = match record.string("sval")? {
            Some(text) => text,
            None => record.string("str")?.unwrap_or_default(),
        };
        Ok(ScalarValue::String(text))
    }

    pub fn build_integer(record: &RawRecord) -> Result<Self, BuildError> {
        Ok(ScalarValue::Integer(record.int("ival")?.unwrap_or(0)))
    }

    pub fn build_float(record: &RawRecord) -> Result<Self, BuildError> {
        let field = if record.has("fval") { "fval" } else { "str" };
        let text = record.string(field)?.unwrap_or_default();
        Self::parse_float(&text).ok_or_else(|| BuildError::malformed(record.kind, field, "numeric text"))
    }

    pub fn build_boolean(record: &RawRecord) -> Result<Self, BuildError> {
        Ok(ScalarValue::Boolean(record.flag("boolval")?))
    }

    pub fn parse_float(text: &str) -> Option<Self> {
        let value = text.trim().parse::<f64>().ok()?;
        NotNan::new(value).ok().map(ScalarValue::Float)
    }
}

impl Display for ScalarValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScalarValue::String(s) => write!(f, "\"{}\"", s),
            ScalarValue::Integer(i) => write!(f, "{}", i),
            ScalarValue::Float(n) => write!(f, "{}", n.into_inner()),
            ScalarValue::Boolean(b) => write!(f, "{}", b),
            ScalarValue::Null => write!(f, "NULL"),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::nodes::ScalarValue;

    #[test]
    fn parse_float_accepts_numeric_literals() {
        assert_eq!(ScalarValue::parse_float("1.5").map(|v| v.to_string()), Some("1.5".to_string()));
        assert_eq!(ScalarValue::parse_float("2e3").map(|v| v.to_string()), Some("2000".to_string()));
        assert!(ScalarValue::parse_float("abc").is_none());
        assert!(ScalarValue::parse_float("NaN").is_none());
    }
}
