use std::fmt;

use crate::{builder::{BuildError, RawEnum, RawRecord}, nodes::Node};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinType {
    Inner,
    Left,
    Full,
    Right,
}

impl JoinType {
    /// Left, right and full joins pad unmatched rows with NULLs.
    pub fn is_outer(&self) -> bool {
        !matches!(self, JoinType::Inner)
    }
}

impl RawEnum for JoinType {
    fn from_code(code: i64) -> Option<Self> {
        Some(match code {
            0 => JoinType::Inner,
            1 => JoinType::Left,
            2 => JoinType::Full,
            3 => JoinType::Right,
            _ => return None,
        })
    }

    fn from_symbol(symbol: &str) -> Option<Self> {
        Some(match symbol {
            "JOIN_INNER" => JoinType::Inner,
            "JOIN_LEFT" => JoinType::Left,
            "JOIN_FULL" => JoinType::Full,
            "JOIN_RIGHT" => JoinType::Right,
            _ => return None,
        })
    }
}

impl fmt::Display for JoinType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JoinType::Inner => write!(f, "INNER"),
            JoinType::Left => write!(f, "LEFT"),
            JoinType::Full => write!(f, "FULL"),
            JoinType::Right => write!(f, "RIGHT"),
        }
    }
}

/// `larg JOIN rarg ON quals` / `USING (...)`.
#[derive(Debug, Clone, PartialEq)]
pub struct JoinExpr {
    pub jointype: JoinType,
    pub is_natural: bool,
    pub larg: Box<Node>,
    pub rarg: Box<Node>,
    pub using_clause: Vec<Node>,
    pub quals: Option<Box<Node>>,
    pub alias: Option<Box<Node>>,
}

impl JoinExpr {
    pub fn build(record: &RawRecord) -> Result<Self, BuildError> {
        Ok(Self {
            jointype: record.enumeration("jointype")?,
            is_natural: record.flag("isNatural")?,
            larg: record.required_child("larg")?,
            rarg: record.required_child("rarg")?,
            using_clause: record.children("usingClause")?,
            quals: record.child("quals")?,
            alias: record.child("alias")?,
        })
    }

    /// The parser encodes `CROSS JOIN` as an inner join with no condition.
    pub fn is_cross(&self) -> bool {
        self.jointype == JoinType::Inner && !self.is_natural && self.quals.is_none() && self.using_clause.is_empty()
    }

    pub fn children(&self) -> Vec<&Node> {
        let mut out = vec![self.larg.as_ref(), self.rarg.as_ref()];
        out.extend(self.using_clause.iter());
        out.extend(self.quals.as_deref());
        out.extend(self.alias.as_deref());
        out
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::{builder::{BuildError, NodeBuilder}, nodes::{JoinType, Node}};

    fn join(jointype: serde_json::Value, quals: bool) -> serde_json::Value {
        let mut body = json!({
            "jointype": jointype,
            "larg": { "RangeVar": { "relname": "a" } },
            "rarg": { "RangeVar": { "relname": "b" } }
        });
        if quals {
            body["quals"] = json!({ "A_Expr": {
                "name": [{ "String": { "str": "=" } }],
                "lexpr": { "ColumnRef": { "fields": [{ "String": { "str": "a" } }, { "String": { "str": "id" } }] } },
                "rexpr": { "ColumnRef": { "fields": [{ "String": { "str": "b" } }, { "String": { "str": "id" } }] } }
            }});
        }
        json!({ "JoinExpr": body })
    }

    #[test]
    fn test_join_types_from_codes_and_symbols() {
        let expected = [
            (json!(0), JoinType::Inner),
            (json!(1), JoinType::Left),
            (json!(2), JoinType::Full),
            (json!(3), JoinType::Right),
            (json!("JOIN_LEFT"), JoinType::Left),
            (json!("JOIN_RIGHT"), JoinType::Right),
        ];

        for (code, join_type) in expected {
            match NodeBuilder::new().build(&join(code, true)).expect("Failed to build join") {
                Some(Node::JoinExpr(join)) => {
                    assert_eq!(join.jointype, join_type);
                    assert!(!join.is_cross());
                }
                _ => panic!(),
            }
        }
    }

    #[test]
    fn test_cross_join_has_no_condition() {
        match NodeBuilder::new().build(&join(json!(null), false)).expect("Failed to build join") {
            Some(Node::JoinExpr(join)) => {
                assert_eq!(join.jointype, JoinType::Inner);
                assert!(join.is_cross());
                assert_eq!(join.children().len(), 2);
            }
            _ => panic!(),
        }
    }

    #[test]
    fn test_unknown_join_type() {
        let result = NodeBuilder::new().build(&join(json!(9), false));
        assert_eq!(result, Err(BuildError::malformed("JoinExpr", "jointype", "known enum code")));
    }

    #[test]
    fn test_join_requires_both_sides() {
        let raw = json!({ "JoinExpr": { "larg": { "RangeVar": { "relname": "a" } } } });
        assert_eq!(NodeBuilder::new().build(&raw), Err(BuildError::malformed("JoinExpr", "rarg", "record")));
    }
}
