use crate::{builder::{BuildError, RawRecord}, nodes::Node};

/// `INSERT INTO relation [(cols)] { VALUES ... | SELECT ... | DEFAULT VALUES }`
#[derive(Debug, Clone, PartialEq)]
pub struct InsertStmt {
    pub relation: Box<Node>,
    /// `ResTarget` entries naming the written columns
    pub cols: Vec<Node>,
    /// absent for `DEFAULT VALUES`
    pub select_stmt: Option<Box<Node>>,
    pub returning_list: Vec<Node>,
    pub with_clause: Option<Box<Node>>,
}

impl InsertStmt {
    pub fn build(record: &RawRecord) -> Result<Self, BuildError> {
        Ok(Self {
            relation: record.required_child("relation")?,
            cols: record.children("cols")?,
            select_stmt: record.optional_select_child("selectStmt")?,
            returning_list: record.children("returningList")?,
            with_clause: record.child("withClause")?,
        })
    }

    /// Everything except the target relation, which is only written.
    pub fn read_children(&self) -> Vec<&Node> {
        let mut out: Vec<&Node> = self.cols.iter().collect();
        out.extend(self.select_stmt.as_deref());
        out.extend(self.returning_list.iter());
        out.extend(self.with_clause.as_deref());
        out
    }

    pub fn children(&self) -> Vec<&Node> {
        let mut out = vec![self.relation.as_ref()];
        out.extend(self.read_children());
        out
    }
}
