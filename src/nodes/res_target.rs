use crate::{builder::{BuildError, RawRecord}, nodes::Node};

/// One entry of a target list: `val [AS name]`.
#[derive(Debug, Clone, PartialEq)]
pub struct ResTarget {
    pub name: Option<String>,
    pub indirection: Vec<Node>,
    pub val: Option<Box<Node>>,
    pub location: i64,
}

impl ResTarget {
    pub fn build(record: &RawRecord) -> Result<Self, BuildError> {
        Ok(Self {
            name: record.string("name")?,
            indirection: record.children("indirection")?,
            val: record.child("val")?,
            location: record.location()?,
        })
    }

    pub fn children(&self) -> Vec<&Node> {
        let mut out: Vec<&Node> = self.indirection.iter().collect();
        out.extend(self.val.as_deref());
        out
    }
}
