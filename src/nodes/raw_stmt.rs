use crate::{builder::{BuildError, RawRecord}, nodes::Node};

/// One statement of a multi-statement parse result.
#[derive(Debug, Clone, PartialEq)]
pub struct RawStmt {
    pub stmt: Box<Node>,
    pub stmt_location: i64,
    /// length in bytes; 0 means "rest of string"
    pub stmt_len: i64,
}

impl RawStmt {
    pub fn build(record: &RawRecord) -> Result<Self, BuildError> {
        Ok(Self {
            stmt: record.required_child("stmt")?,
            stmt_location: record.int("stmt_location")?.unwrap_or(0),
            stmt_len: record.int("stmt_len")?.unwrap_or(0),
        })
    }

    pub fn children(&self) -> Vec<&Node> {
        vec![self.stmt.as_ref()]
    }
}
