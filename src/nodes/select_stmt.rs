use std::fmt;

use crate::{builder::{BuildError, RawEnum, RawRecord}, nodes::Node};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetOperation {
    None,
    Union,
    Intersect,
    Except,
}

impl RawEnum for SetOperation {
    fn from_code(code: i64) -> Option<Self> {
        Some(match code {
            0 => SetOperation::None,
            1 => SetOperation::Union,
            2 => SetOperation::Intersect,
            3 => SetOperation::Except,
            _ => return None,
        })
    }

    fn from_symbol(symbol: &str) -> Option<Self> {
        Some(match symbol {
            "SETOP_NONE" => SetOperation::None,
            "SETOP_UNION" => SetOperation::Union,
            "SETOP_INTERSECT" => SetOperation::Intersect,
            "SETOP_EXCEPT" => SetOperation::Except,
            _ => return None,
        })
    }
}

impl fmt::Display for SetOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SetOperation::None => write!(f, "NONE"),
            SetOperation::Union => write!(f, "UNION"),
            SetOperation::Intersect => write!(f, "INTERSECT"),
            SetOperation::Except => write!(f, "EXCEPT"),
        }
    }
}

/// A SELECT, VALUES list or set operation.
///
/// For `op == None` the clause fields are populated and `larg`/`rarg` are
/// absent; for a set operation only `larg`, `rarg`, `all` and the trailing
/// sort/limit clauses are meaningful. Both operands are `SelectStmt`s.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectStmt {
    pub distinct_clause: Vec<Node>,
    pub into_clause: Option<Box<Node>>,
    pub target_list: Vec<Node>,
    pub from_clause: Vec<Node>,
    pub where_clause: Option<Box<Node>>,
    pub group_clause: Vec<Node>,
    pub having_clause: Option<Box<Node>>,
    /// one `List` per VALUES row
    pub values_lists: Vec<Node>,
    pub sort_clause: Vec<Node>,
    pub limit_offset: Option<Box<Node>>,
    pub limit_count: Option<Box<Node>>,
    pub with_clause: Option<Box<Node>>,
    pub op: SetOperation,
    pub all: bool,
    pub larg: Option<Box<Node>>,
    pub rarg: Option<Box<Node>>,
}

impl SelectStmt {
    pub fn build(record: &RawRecord) -> Result<Self, BuildError> {
        let op: SetOperation = record.enumeration("op")?;
        let larg = record.optional_select_child("larg")?;
        let rarg = record.optional_select_child("rarg")?;
        if op != SetOperation::None {
            if larg.is_none() {
                return BuildError::malformed(record.kind, "larg", "record").err();
            }
            if rarg.is_none() {
                return BuildError::malformed(record.kind, "rarg", "record").err();
            }
        }

        Ok(Self {
            distinct_clause: record.children("distinctClause")?,
            into_clause: record.child("intoClause")?,
            target_list: record.children("targetList")?,
            from_clause: record.children("fromClause")?,
            where_clause: record.child("whereClause")?,
            group_clause: record.children("groupClause")?,
            having_clause: record.child("havingClause")?,
            values_lists: record.children("valuesLists")?,
            sort_clause: record.children("sortClause")?,
            limit_offset: record.child("limitOffset")?,
            limit_count: record.child("limitCount")?,
            with_clause: record.child("withClause")?,
            op,
            all: record.flag("all")?,
            larg,
            rarg,
        })
    }

    pub fn is_set_operation(&self) -> bool {
        self.op != SetOperation::None
    }

    pub fn children(&self) -> Vec<&Node> {
        let mut out: Vec<&Node> = self.distinct_clause.iter().collect();
        out.extend(self.into_clause.as_deref());
        out.extend(self.target_list.iter());
        out.extend(self.from_clause.iter());
        out.extend(self.where_clause.as_deref());
        out.extend(self.group_clause.iter());
        out.extend(self.having_clause.as_deref());
        out.extend(self.values_lists.iter());
        out.extend(self.sort_clause.iter());
        out.extend(self.limit_offset.as_deref());
        out.extend(self.limit_count.as_deref());
        out.extend(self.with_clause.as_deref());
        out.extend(self.larg.as_deref());
        out.extend(self.rarg.as_deref());
        out
    }
}

/// `WITH [RECURSIVE] name AS (...) [, ...]`
#[derive(Debug, Clone, PartialEq)]
pub struct WithClause {
    pub ctes: Vec<Node>,
    pub recursive: bool,
    pub location: i64,
}

impl WithClause {
    pub fn build(record: &RawRecord) -> Result<Self, BuildError> {
        Ok(Self {
            ctes: record.children("ctes")?,
            recursive: record.flag("recursive")?,
            location: record.location()?,
        })
    }

    pub fn children(&self) -> Vec<&Node> {
        self.ctes.iter().collect()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CommonTableExpr {
    pub ctename: String,
    pub aliascolnames: Vec<Node>,
    pub ctequery: Box<Node>,
    pub location: i64,
}

impl CommonTableExpr {
    pub fn build(record: &RawRecord) -> Result<Self, BuildError> {
        Ok(Self {
            ctename: record.required_string("ctename")?,
            aliascolnames: record.children("aliascolnames")?,
            ctequery: record.required_child("ctequery")?,
            location: record.location()?,
        })
    }

    pub fn children(&self) -> Vec<&Node> {
        let mut out: Vec<&Node> = self.aliascolnames.iter().collect();
        out.push(self.ctequery.as_ref());
        out
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::{builder::{BuildError, NodeBuilder}, nodes::{Node, SetOperation}};

    fn select_from(table: &str) -> serde_json::Value {
        json!({ "SelectStmt": {
            "targetList": [{ "ResTarget": { "val": { "ColumnRef": { "fields": [{ "A_Star": {} }] } } } }],
            "fromClause": [{ "RangeVar": { "relname": table } }]
        }})
    }

    #[test]
    fn test_plain_select() {
        let raw = json!({ "SelectStmt": {
            "targetList": [{ "ResTarget": { "val": { "ColumnRef": { "fields": [{ "String": { "str": "id" } }] } } } }],
            "fromClause": [{ "RangeVar": { "relname": "people" } }],
            "whereClause": { "A_Expr": {
                "name": [{ "String": { "str": ">" } }],
                "lexpr": { "ColumnRef": { "fields": [{ "String": { "str": "age" } }] } },
                "rexpr": { "A_Const": { "val": { "Integer": { "ival": 16 } } } }
            }},
            "sortClause": [{ "SortBy": { "node": { "ColumnRef": { "fields": [{ "String": { "str": "id" } }] } } } }],
            "limitCount": { "A_Const": { "val": { "Integer": { "ival": 10 } } } },
            "op": 0
        }});

        match NodeBuilder::new().build(&raw).expect("Failed to build select") {
            Some(Node::SelectStmt(stmt)) => {
                assert!(!stmt.is_set_operation());
                assert_eq!(stmt.target_list.len(), 1);
                assert_eq!(stmt.from_clause.len(), 1);
                assert!(stmt.where_clause.is_some());
                assert_eq!(stmt.sort_clause.len(), 1);
                assert_eq!(stmt.children().len(), 5);
            }
            _ => panic!(),
        }
    }

    #[test]
    fn test_union_all() {
        let raw = json!({ "SelectStmt": {
            "op": "SETOP_UNION",
            "all": true,
            "larg": select_from("a"),
            "rarg": select_from("b")
        }});

        match NodeBuilder::new().build(&raw).expect("Failed to build union") {
            Some(Node::SelectStmt(stmt)) => {
                assert_eq!(stmt.op, SetOperation::Union);
                assert!(stmt.all);
                assert!(stmt.larg.as_deref().and_then(Node::as_select).is_some());
                assert!(stmt.rarg.as_deref().and_then(Node::as_select).is_some());
            }
            _ => panic!(),
        }
    }

    #[test]
    fn test_set_operation_needs_both_operands() {
        let raw = json!({ "SelectStmt": { "op": 2, "larg": select_from("a") } });
        assert_eq!(NodeBuilder::new().build(&raw), Err(BuildError::malformed("SelectStmt", "rarg", "record")));
    }

    #[test]
    fn test_with_clause() {
        let raw = json!({ "SelectStmt": {
            "withClause": { "WithClause": { "ctes": [{ "CommonTableExpr": {
                "ctename": "recent",
                "ctequery": select_from("orders")
            }}]}},
            "fromClause": [{ "RangeVar": { "relname": "recent" } }]
        }});

        match NodeBuilder::new().build(&raw).expect("Failed to build with clause") {
            Some(Node::SelectStmt(stmt)) => match stmt.with_clause.as_deref() {
                Some(Node::WithClause(with)) => {
                    assert!(!with.recursive);
                    match &with.ctes[0] {
                        Node::CommonTableExpr(cte) => assert_eq!(cte.ctename, "recent"),
                        _ => panic!(),
                    }
                }
                _ => panic!(),
            },
            _ => panic!(),
        }
    }
}
