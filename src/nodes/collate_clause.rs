use crate::{builder::{BuildError, RawRecord}, nodes::{dotted_names, Node}};

/// `arg COLLATE collname`
#[derive(Debug, Clone, PartialEq)]
pub struct CollateClause {
    pub arg: Option<Box<Node>>,
    pub collname: Vec<Node>,
    pub location: i64,
}

impl CollateClause {
    pub fn build(record: &RawRecord) -> Result<Self, BuildError> {
        Ok(Self {
            arg: record.child("arg")?,
            collname: record.children("collname")?,
            location: record.location()?,
        })
    }

    pub fn collation(&self) -> String {
        dotted_names(&self.collname)
    }

    pub fn children(&self) -> Vec<&Node> {
        self.arg.as_deref().into_iter().chain(self.collname.iter()).collect()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::{builder::NodeBuilder, nodes::Node};

    #[test]
    fn test_collate() {
        let raw = json!({ "CollateClause": {
            "arg": { "ColumnRef": { "fields": [{ "String": { "str": "name" } }] } },
            "collname": [{ "String": { "str": "C" } }],
            "location": 12
        }});

        match NodeBuilder::new().build(&raw).expect("Failed to build collate") {
            Some(Node::CollateClause(collate)) => {
                assert_eq!(collate.collation(), "C");
                assert_eq!(collate.children().len(), 2);
            }
            _ => panic!(),
        }
    }
}
