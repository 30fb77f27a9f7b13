use crate::{builder::{BuildError, RawRecord}, nodes::Node};

/// `COALESCE(a, b, ...)`
#[derive(Debug, Clone, PartialEq)]
pub struct CoalesceExpr {
    pub coalescetype: Option<i64>,
    pub coalescecollid: Option<i64>,
    pub args: Vec<Node>,
    pub location: i64,
}

impl CoalesceExpr {
    pub fn build(record: &RawRecord) -> Result<Self, BuildError> {
        Ok(Self {
            coalescetype: record.int("coalescetype")?,
            coalescecollid: record.int("coalescecollid")?,
            args: record.children("args")?,
            location: record.location()?,
        })
    }

    pub fn children(&self) -> Vec<&Node> {
        self.args.iter().collect()
    }
}
