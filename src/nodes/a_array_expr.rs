use crate::{builder::{BuildError, RawRecord}, nodes::Node};

/// `ARRAY[a, b, ...]`
#[derive(Debug, Clone, PartialEq)]
pub struct AArrayExpr {
    pub elements: Vec<Node>,
    pub location: i64,
}

impl AArrayExpr {
    pub fn build(record: &RawRecord) -> Result<Self, BuildError> {
        Ok(Self {
            elements: record.children("elements")?,
            location: record.location()?,
        })
    }

    pub fn children(&self) -> Vec<&Node> {
        self.elements.iter().collect()
    }
}
