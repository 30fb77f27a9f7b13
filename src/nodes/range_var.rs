use crate::{builder::{BuildError, RawRecord}, nodes::Node};

/// Range variable, used in FROM clauses and as the target of utility
/// statements.
///
/// This is the only kind that names a base table. `nullable` is a
/// construction-time annotation: it is `false` unless the raw record marks
/// the relation as nullable.
#[derive(Debug, Clone, PartialEq)]
pub struct RangeVar {
    pub catalogname: Option<String>,
    pub schemaname: Option<String>,
    pub relname: String,
    /// whether the reference also scans child tables
    pub inh: bool,
    pub relpersistence: Option<String>,
    pub alias: Option<Box<Node>>,
    pub location: i64,
    pub nullable: bool,
}

impl RangeVar {
    pub fn build(record: &RawRecord) -> Result<Self, BuildError> {
        // inhOpt: 0 = no, 1 = yes, 2 = default (yes)
        let inh = match record.int("inhOpt")? {
            Some(opt) => opt != 0,
            None => record.flag("inh")?,
        };

        Ok(Self {
            catalogname: record.string("catalogname")?,
            schemaname: record.string("schemaname")?,
            relname: record.required_string("relname")?,
            inh,
            relpersistence: record.string("relpersistence")?,
            alias: record.child("alias")?,
            location: record.location()?,
            nullable: record.flag("nullable")?,
        })
    }

    /// `schema.relation` when a schema is present, otherwise `relation`.
    pub fn qualified_name(&self) -> String {
        match &self.schemaname {
            Some(schema) => format!("{}.{}", schema, self.relname),
            None => self.relname.clone(),
        }
    }

    pub fn children(&self) -> Vec<&Node> {
        self.alias.as_deref().into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::{builder::{BuildError, NodeBuilder}, nodes::Node};

    fn build(raw: serde_json::Value) -> Result<Node, BuildError> {
        NodeBuilder::new().build(&raw).map(|node| node.expect("Missing node"))
    }

    #[test]
    fn test_range_var_with_schema_and_alias() {
        let node = build(json!({ "RangeVar": {
            "schemaname": "s",
            "relname": "a",
            "inhOpt": 2,
            "relpersistence": "p",
            "alias": { "Alias": { "aliasname": "x" } },
            "location": 5
        }})).expect("Failed to build range var");

        match node {
            Node::RangeVar(range_var) => {
                assert_eq!(range_var.qualified_name(), "s.a");
                assert!(range_var.inh);
                assert_eq!(range_var.relpersistence.as_deref(), Some("p"));
                assert_eq!(range_var.location, 5);
                assert!(!range_var.nullable);
                assert_eq!(range_var.children().len(), 1);
            }
            _ => panic!(),
        }
    }

    #[test]
    fn test_range_var_without_schema() {
        let node = build(json!({ "RangeVar": { "relname": "t", "inh": true, "catalogname": "db" } }))
            .expect("Failed to build range var");

        match node {
            Node::RangeVar(range_var) => {
                assert_eq!(range_var.qualified_name(), "t");
                assert_eq!(range_var.location, -1);
                assert!(range_var.children().is_empty());
            }
            _ => panic!(),
        }
    }

    #[test]
    fn test_range_var_requires_relname() {
        let result = build(json!({ "RangeVar": { "schemaname": "s" } }));
        assert_eq!(result, Err(BuildError::malformed("RangeVar", "relname", "string")));
    }
}
