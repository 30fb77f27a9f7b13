use crate::{builder::{BuildError, RawRecord}, nodes::Node};

/// `DELETE FROM relation [USING ...] [WHERE ...] [RETURNING ...]`
#[derive(Debug, Clone, PartialEq)]
pub struct DeleteStmt {
    pub relation: Box<Node>,
    pub using_clause: Vec<Node>,
    pub where_clause: Option<Box<Node>>,
    pub returning_list: Vec<Node>,
    pub with_clause: Option<Box<Node>>,
}

impl DeleteStmt {
    pub fn build(record: &RawRecord) -> Result<Self, BuildError> {
        Ok(Self {
            relation: record.required_child("relation")?,
            using_clause: record.children("usingClause")?,
            where_clause: record.child("whereClause")?,
            returning_list: record.children("returningList")?,
            with_clause: record.child("withClause")?,
        })
    }

    pub fn children(&self) -> Vec<&Node> {
        let mut out = vec![self.relation.as_ref()];
        out.extend(self.using_clause.iter());
        out.extend(self.where_clause.as_deref());
        out.extend(self.returning_list.iter());
        out.extend(self.with_clause.as_deref());
        out
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::{builder::{BuildError, NodeBuilder}, nodes::Node};

    #[test]
    fn test_delete_using() {
        let raw = json!({ "DeleteStmt": {
            "relation": { "RangeVar": { "relname": "order_items" } },
            "usingClause": [{ "RangeVar": { "relname": "orders" } }]
        }});

        match NodeBuilder::new().build(&raw).expect("Failed to build delete") {
            Some(Node::DeleteStmt(delete)) => {
                assert_eq!(delete.using_clause.len(), 1);
                assert!(delete.where_clause.is_none());
            }
            _ => panic!(),
        }
    }

    #[test]
    fn test_delete_requires_relation() {
        let raw = json!({ "DeleteStmt": { "usingClause": [] } });
        assert_eq!(
            NodeBuilder::new().build(&raw),
            Err(BuildError::malformed("DeleteStmt", "relation", "record"))
        );
    }
}
