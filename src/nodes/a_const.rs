use crate::{builder::{BuildError, RawRecord}, nodes::{Node, ScalarValue}};

/// A literal constant.
#[derive(Debug, Clone, PartialEq)]
pub struct AConst {
    pub val: ScalarValue,
    pub location: i64,
}

impl AConst {
    pub fn build(record: &RawRecord) -> Result<Self, BuildError> {
        Ok(Self { val: Self::value(record)?, location: record.location()? })
    }

    // Older output wraps the value in a `val` record; newer output inlines it
    // as one of ival/fval/sval/boolval, or sets `isnull`.
    fn value(record: &RawRecord) -> Result<ScalarValue, BuildError> {
        if record.flag("isnull")? {
            return Ok(ScalarValue::Null);
        }

        if let Some(val) = record.child("val")? {
            return match *val {
                Node::Scalar(value) => Ok(value),
                _ => BuildError::malformed(record.kind, "val", "value record").err(),
            };
        }

        for (field, kind) in [("ival", "Integer"), ("fval", "Float"), ("sval", "String"), ("boolval", "Boolean")] {
            if record.has(field) {
                let wrapped = record.inline_record(field, kind)?;
                return match wrapped {
                    Node::Scalar(value) => Ok(value),
                    _ => BuildError::malformed(record.kind, field, "value record").err(),
                };
            }
        }

        // `{"A_Const": {}}` is the integer 0 with every field omitted
        Ok(ScalarValue::Integer(0))
    }

    pub fn is_null(&self) -> bool {
        self.val.is_null()
    }
}
