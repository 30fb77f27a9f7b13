use crate::builder::{BuildError, RawRecord};

/// `DEFAULT` in an INSERT/UPDATE value position. Metadata only.
#[derive(Debug, Clone, PartialEq)]
pub struct SetToDefault {
    pub type_id: Option<i64>,
    pub type_mod: Option<i64>,
    pub collation: Option<i64>,
    pub location: i64,
}

impl SetToDefault {
    pub fn build(record: &RawRecord) -> Result<Self, BuildError> {
        Ok(Self {
            type_id: record.int("typeId")?,
            type_mod: record.int("typeMod")?,
            collation: record.int("collation")?,
            location: record.location()?,
        })
    }
}
