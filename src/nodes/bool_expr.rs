use std::fmt;

use crate::{builder::{BuildError, RawEnum, RawRecord}, nodes::Node};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoolOp {
    And,
    Or,
    Not,
}

impl RawEnum for BoolOp {
    fn from_code(code: i64) -> Option<Self> {
        Some(match code {
            0 => BoolOp::And,
            1 => BoolOp::Or,
            2 => BoolOp::Not,
            _ => return None,
        })
    }

    fn from_symbol(symbol: &str) -> Option<Self> {
        Some(match symbol {
            "AND_EXPR" => BoolOp::And,
            "OR_EXPR" => BoolOp::Or,
            "NOT_EXPR" => BoolOp::Not,
            _ => return None,
        })
    }
}

impl fmt::Display for BoolOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoolOp::And => write!(f, "AND"),
            BoolOp::Or => write!(f, "OR"),
            BoolOp::Not => write!(f, "NOT"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BoolExpr {
    pub boolop: BoolOp,
    pub args: Vec<Node>,
    pub location: i64,
}

impl BoolExpr {
    pub fn build(record: &RawRecord) -> Result<Self, BuildError> {
        Ok(Self {
            boolop: record.enumeration("boolop")?,
            args: record.children("args")?,
            location: record.location()?,
        })
    }

    pub fn children(&self) -> Vec<&Node> {
        self.args.iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::{builder::NodeBuilder, nodes::{BoolOp, Node}};

    #[test]
    fn test_bool_expr_defaults_to_and() {
        let raw = json!({ "BoolExpr": {
            "args": [{ "A_Const": { "val": { "Integer": { "ival": 1 } } } }, { "A_Star": {} }],
            "location": 10
        }});

        match NodeBuilder::new().build(&raw).expect("Failed to build bool expr") {
            Some(Node::BoolExpr(expr)) => {
                assert_eq!(expr.boolop, BoolOp::And);
                assert_eq!(expr.args.len(), 2);
                assert_eq!(expr.location, 10);
            }
            _ => panic!(),
        }
    }

    #[test]
    fn test_bool_expr_symbolic_op() {
        let raw = json!({ "BoolExpr": { "boolop": "NOT_EXPR", "args": [{ "A_Star": {} }] } });

        match NodeBuilder::new().build(&raw).expect("Failed to build bool expr") {
            Some(Node::BoolExpr(expr)) => assert_eq!(expr.boolop.to_string(), "NOT"),
            _ => panic!(),
        }
    }
}
