use crate::{builder::{BuildError, RawRecord}, nodes::Node};

/// Sub-select in a FROM clause: `[LATERAL] (SELECT ...) alias`.
#[derive(Debug, Clone, PartialEq)]
pub struct RangeSubselect {
    pub lateral: bool,
    pub subquery: Box<Node>,
    pub alias: Option<Box<Node>>,
}

impl RangeSubselect {
    pub fn build(record: &RawRecord) -> Result<Self, BuildError> {
        Ok(Self {
            lateral: record.flag("lateral")?,
            subquery: record.select_child("subquery")?,
            alias: record.child("alias")?,
        })
    }

    pub fn children(&self) -> Vec<&Node> {
        let mut out = vec![self.subquery.as_ref()];
        out.extend(self.alias.as_deref());
        out
    }
}
