use crate::{builder::{BuildError, RawEnum, RawRecord}, nodes::Node};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowFormat {
    ExplicitCall,
    ExplicitCast,
    ImplicitCast,
    SqlSyntax,
}

impl RawEnum for RowFormat {
    fn from_code(code: i64) -> Option<Self> {
        Some(match code {
            0 => RowFormat::ExplicitCall,
            1 => RowFormat::ExplicitCast,
            2 => RowFormat::ImplicitCast,
            3 => RowFormat::SqlSyntax,
            _ => return None,
        })
    }

    fn from_symbol(symbol: &str) -> Option<Self> {
        Some(match symbol {
            "COERCE_EXPLICIT_CALL" => RowFormat::ExplicitCall,
            "COERCE_EXPLICIT_CAST" => RowFormat::ExplicitCast,
            "COERCE_IMPLICIT_CAST" => RowFormat::ImplicitCast,
            "COERCE_SQL_SYNTAX" => RowFormat::SqlSyntax,
            _ => return None,
        })
    }
}

/// `ROW(a, b, ...)` constructor.
#[derive(Debug, Clone, PartialEq)]
pub struct RowExpr {
    pub args: Vec<Node>,
    pub colnames: Vec<Node>,
    pub row_format: RowFormat,
    pub row_typeid: Option<i64>,
    pub location: i64,
}

impl RowExpr {
    pub fn build(record: &RawRecord) -> Result<Self, BuildError> {
        Ok(Self {
            args: record.children("args")?,
            colnames: record.children("colnames")?,
            row_format: record.enumeration("row_format")?,
            row_typeid: record.int("row_typeid")?,
            location: record.location()?,
        })
    }

    pub fn children(&self) -> Vec<&Node> {
        self.args.iter().chain(self.colnames.iter()).collect()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::{builder::NodeBuilder, nodes::{Node, RowFormat}};

    #[test]
    fn test_row_constructor() {
        let raw = json!({ "RowExpr": {
            "args": [{ "A_Const": { "val": { "Integer": { "ival": 1 } } } }, { "A_Const": { "val": { "Null": {} } } }],
            "row_format": 0,
            "location": 4
        }});

        match NodeBuilder::new().build(&raw).expect("Failed to build row") {
            Some(Node::RowExpr(row)) => {
                assert_eq!(row.args.len(), 2);
                assert!(row.colnames.is_empty());
                assert_eq!(row.row_format, RowFormat::ExplicitCall);
            }
            _ => panic!(),
        }
    }
}
