use crate::{builder::{BuildError, RawEnum, RawRecord}, nodes::Node};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MinMaxOp {
    Greatest,
    Least,
}

impl RawEnum for MinMaxOp {
    fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(MinMaxOp::Greatest),
            1 => Some(MinMaxOp::Least),
            _ => None,
        }
    }

    fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "IS_GREATEST" => Some(MinMaxOp::Greatest),
            "IS_LEAST" => Some(MinMaxOp::Least),
            _ => None,
        }
    }
}

/// `GREATEST(...)` / `LEAST(...)`
#[derive(Debug, Clone, PartialEq)]
pub struct MinMaxExpr {
    pub op: MinMaxOp,
    pub minmaxtype: Option<i64>,
    pub args: Vec<Node>,
    pub location: i64,
}

impl MinMaxExpr {
    pub fn build(record: &RawRecord) -> Result<Self, BuildError> {
        Ok(Self {
            op: record.enumeration("op")?,
            minmaxtype: record.int("minmaxtype")?,
            args: record.children("args")?,
            location: record.location()?,
        })
    }

    pub fn children(&self) -> Vec<&Node> {
        self.args.iter().collect()
    }
}
