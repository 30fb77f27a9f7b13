use std::fmt;

use crate::{builder::{BuildError, RawEnum, RawRecord}, nodes::{dotted_names, Node}};

/// How a sub-select is used inside an expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubLinkType {
    /// `EXISTS (SELECT ...)`
    Exists,
    /// `x op ALL (SELECT ...)`, also `NOT IN`
    All,
    /// `x op ANY (SELECT ...)`, also `IN`
    Any,
    RowCompare,
    /// scalar `(SELECT ...)`
    Expr,
    MultiExpr,
    Array,
    Cte,
}

impl SubLinkType {
    pub fn code(&self) -> i64 {
        match self {
            SubLinkType::Exists => 0,
            SubLinkType::All => 1,
            SubLinkType::Any => 2,
            SubLinkType::RowCompare => 3,
            SubLinkType::Expr => 4,
            SubLinkType::MultiExpr => 5,
            SubLinkType::Array => 6,
            SubLinkType::Cte => 7,
        }
    }
}

impl RawEnum for SubLinkType {
    fn from_code(code: i64) -> Option<Self> {
        Some(match code {
            0 => SubLinkType::Exists,
            1 => SubLinkType::All,
            2 => SubLinkType::Any,
            3 => SubLinkType::RowCompare,
            4 => SubLinkType::Expr,
            5 => SubLinkType::MultiExpr,
            6 => SubLinkType::Array,
            7 => SubLinkType::Cte,
            _ => return None,
        })
    }

    fn from_symbol(symbol: &str) -> Option<Self> {
        Some(match symbol {
            "EXISTS_SUBLINK" => SubLinkType::Exists,
            "ALL_SUBLINK" => SubLinkType::All,
            "ANY_SUBLINK" => SubLinkType::Any,
            "ROWCOMPARE_SUBLINK" => SubLinkType::RowCompare,
            "EXPR_SUBLINK" => SubLinkType::Expr,
            "MULTIEXPR_SUBLINK" => SubLinkType::MultiExpr,
            "ARRAY_SUBLINK" => SubLinkType::Array,
            "CTE_SUBLINK" => SubLinkType::Cte,
            _ => return None,
        })
    }
}

impl fmt::Display for SubLinkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SubLinkType::Exists => "EXISTS",
            SubLinkType::All => "ALL",
            SubLinkType::Any => "ANY",
            SubLinkType::RowCompare => "ROWCOMPARE",
            SubLinkType::Expr => "EXPR",
            SubLinkType::MultiExpr => "MULTIEXPR",
            SubLinkType::Array => "ARRAY",
            SubLinkType::Cte => "CTE",
        };
        write!(f, "{}", name)
    }
}

/// A sub-select appearing in expression context.
///
/// `subselect` is always a `SelectStmt`; the builder rejects anything else.
#[derive(Debug, Clone, PartialEq)]
pub struct SubLink {
    pub sub_link_type: SubLinkType,
    pub sub_link_id: i64,
    pub testexpr: Option<Box<Node>>,
    pub oper_name: Vec<Node>,
    pub subselect: Box<Node>,
    pub location: i64,
}

impl SubLink {
    pub fn build(record: &RawRecord) -> Result<Self, BuildError> {
        Ok(Self {
            sub_link_type: record.enumeration("subLinkType")?,
            sub_link_id: record.int("subLinkId")?.unwrap_or(0),
            testexpr: record.child("testexpr")?,
            oper_name: record.children("operName")?,
            subselect: record.select_child("subselect")?,
            location: record.location()?,
        })
    }

    pub fn operator(&self) -> String {
        dotted_names(&self.oper_name)
    }

    pub fn children(&self) -> Vec<&Node> {
        let mut out: Vec<&Node> = self.testexpr.as_deref().into_iter().collect();
        out.extend(self.oper_name.iter());
        out.push(self.subselect.as_ref());
        out
    }
}
