use crate::{builder::{BuildError, RawRecord}, nodes::{dotted_names, Node}};

/// `[table.]column` or `[table.]*`.
///
/// `nullable` is a construction-time annotation set when the raw record marks
/// the column as nullable.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnRef {
    pub fields: Vec<Node>,
    pub location: i64,
    pub nullable: bool,
}

impl ColumnRef {
    pub fn build(record: &RawRecord) -> Result<Self, BuildError> {
        Ok(Self {
            fields: record.children("fields")?,
            location: record.location()?,
            nullable: record.flag("nullable")?,
        })
    }

    pub fn name(&self) -> String {
        dotted_names(&self.fields)
    }

    pub fn is_star(&self) -> bool {
        matches!(self.fields.last(), Some(Node::AStar))
    }

    pub fn children(&self) -> Vec<&Node> {
        self.fields.iter().collect()
    }
}

/// Positional parameter `$n`.
#[derive(Debug, Clone, PartialEq)]
pub struct ParamRef {
    pub number: i64,
    pub location: i64,
    pub nullable: bool,
}

impl ParamRef {
    pub fn build(record: &RawRecord) -> Result<Self, BuildError> {
        Ok(Self {
            number: record.int("number")?.unwrap_or(0),
            location: record.location()?,
            nullable: record.flag("nullable")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::{builder::NodeBuilder, nodes::Node};

    #[test]
    fn test_qualified_column() {
        let raw = json!({ "ColumnRef": {
            "fields": [{ "String": { "str": "a" } }, { "String": { "str": "id" } }],
            "location": 40,
            "nullable": true
        }});

        match NodeBuilder::new().build(&raw).expect("Failed to build column ref") {
            Some(Node::ColumnRef(column)) => {
                assert_eq!(column.name(), "a.id");
                assert!(column.nullable);
                assert!(!column.is_star());
            }
            _ => panic!(),
        }
    }

    #[test]
    fn test_star_column() {
        let raw = json!({ "ColumnRef": { "fields": [{ "String": { "str": "b" } }, { "A_Star": {} }] } });

        match NodeBuilder::new().build(&raw).expect("Failed to build column ref") {
            Some(Node::ColumnRef(column)) => {
                assert!(column.is_star());
                assert_eq!(column.name(), "b");
                assert!(!column.nullable);
            }
            _ => panic!(),
        }
    }

    #[test]
    fn test_param_ref() {
        let raw = json!({ "ParamRef": { "number": 2, "location": 9 } });

        match NodeBuilder::new().build(&raw).expect("Failed to build param ref") {
            Some(Node::ParamRef(param)) => assert_eq!(param.number, 2),
            _ => panic!(),
        }
    }
}
