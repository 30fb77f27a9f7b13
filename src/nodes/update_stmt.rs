use crate::{builder::{BuildError, RawRecord}, nodes::Node};

/// `UPDATE relation SET ... [FROM ...] [WHERE ...] [RETURNING ...]`
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateStmt {
    pub relation: Box<Node>,
    pub target_list: Vec<Node>,
    pub where_clause: Option<Box<Node>>,
    pub from_clause: Vec<Node>,
    pub returning_list: Vec<Node>,
    pub with_clause: Option<Box<Node>>,
}

impl UpdateStmt {
    pub fn build(record: &RawRecord) -> Result<Self, BuildError> {
        Ok(Self {
            relation: record.required_child("relation")?,
            target_list: record.children("targetList")?,
            where_clause: record.child("whereClause")?,
            from_clause: record.children("fromClause")?,
            returning_list: record.children("returningList")?,
            with_clause: record.child("withClause")?,
        })
    }

    pub fn children(&self) -> Vec<&Node> {
        let mut out = vec![self.relation.as_ref()];
        out.extend(self.target_list.iter());
        out.extend(self.where_clause.as_deref());
        out.extend(self.from_clause.iter());
        out.extend(self.returning_list.iter());
        out.extend(self.with_clause.as_deref());
        out
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::{builder::NodeBuilder, nodes::Node};

    #[test]
    fn test_update_set_default() {
        let raw = json!({ "UpdateStmt": {
            "relation": { "RangeVar": { "relname": "people" } },
            "targetList": [{ "ResTarget": { "name": "city", "val": { "SetToDefault": {} } } }],
            "whereClause": { "A_Expr": {
                "name": [{ "String": { "str": "=" } }],
                "lexpr": { "ColumnRef": { "fields": [{ "String": { "str": "id" } }] } },
                "rexpr": { "ParamRef": { "number": 1 } }
            }}
        }});

        match NodeBuilder::new().build(&raw).expect("Failed to build update") {
            Some(Node::UpdateStmt(update)) => {
                assert_eq!(update.target_list.len(), 1);
                assert!(update.from_clause.is_empty());
                assert_eq!(update.children().len(), 3);
            }
            _ => panic!(),
        }
    }
}
