use crate::{builder::{BuildError, RawEnum, RawRecord}, nodes::Node};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortByDir {
    Default,
    Asc,
    Desc,
    Using,
}

impl RawEnum for SortByDir {
    fn from_code(code: i64) -> Option<Self> {
        Some(match code {
            0 => SortByDir::Default,
            1 => SortByDir::Asc,
            2 => SortByDir::Desc,
            3 => SortByDir::Using,
            _ => return None,
        })
    }

    fn from_symbol(symbol: &str) -> Option<Self> {
        Some(match symbol {
            "SORTBY_DEFAULT" => SortByDir::Default,
            "SORTBY_ASC" => SortByDir::Asc,
            "SORTBY_DESC" => SortByDir::Desc,
            "SORTBY_USING" => SortByDir::Using,
            _ => return None,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortByNulls {
    Default,
    First,
    Last,
}

impl RawEnum for SortByNulls {
    fn from_code(code: i64) -> Option<Self> {
        Some(match code {
            0 => SortByNulls::Default,
            1 => SortByNulls::First,
            2 => SortByNulls::Last,
            _ => return None,
        })
    }

    fn from_symbol(symbol: &str) -> Option<Self> {
        Some(match symbol {
            "SORTBY_NULLS_DEFAULT" => SortByNulls::Default,
            "SORTBY_NULLS_FIRST" => SortByNulls::First,
            "SORTBY_NULLS_LAST" => SortByNulls::Last,
            _ => return None,
        })
    }
}

/// One ORDER BY item.
#[derive(Debug, Clone, PartialEq)]
pub struct SortBy {
    pub node: Option<Box<Node>>,
    pub sortby_dir: SortByDir,
    pub sortby_nulls: SortByNulls,
    pub use_op: Vec<Node>,
    pub location: i64,
}

impl SortBy {
    pub fn build(record: &RawRecord) -> Result<Self, BuildError> {
        Ok(Self {
            node: record.child("node")?,
            sortby_dir: record.enumeration("sortby_dir")?,
            sortby_nulls: record.enumeration("sortby_nulls")?,
            use_op: record.children("useOp")?,
            location: record.location()?,
        })
    }

    pub fn children(&self) -> Vec<&Node> {
        self.node.as_deref().into_iter().chain(self.use_op.iter()).collect()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::{builder::NodeBuilder, nodes::{Node, SortByDir, SortByNulls}};

    #[test]
    fn test_desc_nulls_last() {
        let raw = json!({ "SortBy": {
            "node": { "ColumnRef": { "fields": [{ "String": { "str": "description" } }] } },
            "sortby_dir": 2,
            "sortby_nulls": "SORTBY_NULLS_LAST"
        }});

        match NodeBuilder::new().build(&raw).expect("Failed to build sort") {
            Some(Node::SortBy(sort)) => {
                assert_eq!(sort.sortby_dir, SortByDir::Desc);
                assert_eq!(sort.sortby_nulls, SortByNulls::Last);
                assert_eq!(sort.children().len(), 1);
            }
            _ => panic!(),
        }
    }
}
