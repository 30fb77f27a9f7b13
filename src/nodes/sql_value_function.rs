use crate::builder::{BuildError, RawEnum, RawRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SqlValueOp {
    CurrentDate,
    CurrentTime,
    CurrentTimeN,
    CurrentTimestamp,
    CurrentTimestampN,
    LocalTime,
    LocalTimeN,
    LocalTimestamp,
    LocalTimestampN,
    CurrentRole,
    CurrentUser,
    User,
    SessionUser,
    CurrentCatalog,
    CurrentSchema,
}

impl RawEnum for SqlValueOp {
    fn from_code(code: i64) -> Option<Self> {
        use SqlValueOp::*;
        Some(match code {
            0 => CurrentDate,
            1 => CurrentTime,
            2 => CurrentTimeN,
            3 => CurrentTimestamp,
            4 => CurrentTimestampN,
            5 => LocalTime,
            6 => LocalTimeN,
            7 => LocalTimestamp,
            8 => LocalTimestampN,
            9 => CurrentRole,
            10 => CurrentUser,
            11 => User,
            12 => SessionUser,
            13 => CurrentCatalog,
            14 => CurrentSchema,
            _ => return None,
        })
    }

    fn from_symbol(symbol: &str) -> Option<Self> {
        use SqlValueOp::*;
        Some(match symbol {
            "SVFOP_CURRENT_DATE" => CurrentDate,
            "SVFOP_CURRENT_TIME" => CurrentTime,
            "SVFOP_CURRENT_TIME_N" => CurrentTimeN,
            "SVFOP_CURRENT_TIMESTAMP" => CurrentTimestamp,
            "SVFOP_CURRENT_TIMESTAMP_N" => CurrentTimestampN,
            "SVFOP_LOCALTIME" => LocalTime,
            "SVFOP_LOCALTIME_N" => LocalTimeN,
            "SVFOP_LOCALTIMESTAMP" => LocalTimestamp,
            "SVFOP_LOCALTIMESTAMP_N" => LocalTimestampN,
            "SVFOP_CURRENT_ROLE" => CurrentRole,
            "SVFOP_CURRENT_USER" => CurrentUser,
            "SVFOP_USER" => User,
            "SVFOP_SESSION_USER" => SessionUser,
            "SVFOP_CURRENT_CATALOG" => CurrentCatalog,
            "SVFOP_CURRENT_SCHEMA" => CurrentSchema,
            _ => return None,
        })
    }
}

/// Keyword functions such as `CURRENT_DATE` or `CURRENT_USER`. No children.
#[derive(Debug, Clone, PartialEq)]
pub struct SqlValueFunction {
    pub op: SqlValueOp,
    pub type_id: Option<i64>,
    pub typmod: i64,
    pub location: i64,
}

impl SqlValueFunction {
    pub fn build(record: &RawRecord) -> Result<Self, BuildError> {
        Ok(Self {
            op: record.enumeration("op")?,
            type_id: record.int("type")?,
            typmod: record.int("typmod")?.unwrap_or(-1),
            location: record.location()?,
        })
    }
}
