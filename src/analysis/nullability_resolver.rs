use tracing::trace;

use crate::{
    analysis::{AnalysisError, Nullability, QueryNullability},
    nodes::{JoinExpr, Node, SelectStmt, SetOperation, SubLink, SubLinkType},
};

/// Infers whether a node may produce NULL.
///
/// Every rule is a pure function of the subtree; nothing is cached on the
/// nodes, and each node is visited at most once per call.
pub struct NullabilityResolver;

impl NullabilityResolver {
    pub fn nullability(node: &Node) -> Result<Nullability, AnalysisError> {
        match node {
            Node::RangeVar(range_var) => Ok(range_var.nullable.into()),
            Node::ColumnRef(column) => Ok(column.nullable.into()),
            Node::ParamRef(param) => Ok(param.nullable.into()),
            Node::AConst(constant) => Ok(constant.is_null().into()),
            Node::Alias(_) => Ok(Nullability::Nested(vec![])),
            Node::JoinExpr(join) => Self::join(join).map(Nullability::Known),
            Node::BoolExpr(expr) => Self::any_operand(&expr.args).map(Nullability::Known),
            Node::SubLink(link) => Self::sub_link(link).map(|(verdict, _)| Nullability::Known(verdict)),
            Node::SelectStmt(stmt) => Self::select(stmt).map(|props| Nullability::Known(props.holds())),
            other => other
                .children()
                .into_iter()
                .map(Self::nullability)
                .collect::<Result<Vec<_>, _>>()
                .map(Nullability::Nested),
        }
    }

    pub fn holds(node: &Node) -> Result<bool, AnalysisError> {
        Self::nullability(node).map(|n| n.holds())
    }

    /// `nullable_results` / `nullable_contents` of a nested query.
    pub fn query_nullability(node: &Node) -> Result<QueryNullability, AnalysisError> {
        match node {
            Node::SelectStmt(stmt) => Self::select(stmt),
            other => AnalysisError::undefined(other.kind(), "query properties are only defined for SelectStmt").err(),
        }
    }

    fn select(stmt: &SelectStmt) -> Result<QueryNullability, AnalysisError> {
        if stmt.op == SetOperation::None {
            let results = Self::any_holds(&stmt.target_list)? | Self::any_holds(&stmt.values_lists)?;
            let contents = Self::any_holds(&stmt.from_clause)?;
            return Ok(QueryNullability { nullable_results: results, nullable_contents: contents });
        }

        let (Some(larg), Some(rarg)) = (stmt.larg.as_deref(), stmt.rarg.as_deref()) else {
            return AnalysisError::undefined("SelectStmt", format!("{} without both operands", stmt.op)).err();
        };
        let left = Self::query_nullability(larg)?;
        let right = Self::query_nullability(rarg)?;
        trace!(op = %stmt.op, ?left, ?right, "combining set operation operands");

        Ok(match stmt.op {
            SetOperation::Union => left.union(right),
            SetOperation::Intersect => left.intersect(right),
            SetOperation::Except | SetOperation::None => left,
        })
    }

    fn join(join: &JoinExpr) -> Result<bool, AnalysisError> {
        let left = Self::holds(&join.larg)?;
        let right = Self::holds(&join.rarg)?;
        Ok(join.jointype.is_outer() || left || right)
    }

    /// Returns the sub-link verdict together with the nested query's
    /// properties, so callers that also need `nullable_results` do not
    /// evaluate the subselect twice.
    fn sub_link(link: &SubLink) -> Result<(bool, QueryNullability), AnalysisError> {
        if !matches!(link.sub_link_type, SubLinkType::Exists | SubLinkType::All | SubLinkType::Any | SubLinkType::Expr) {
            return AnalysisError::undefined("SubLink", format!("no nullability rule for {} sub-links", link.sub_link_type)).err();
        }

        let props = Self::query_nullability(&link.subselect)?;
        let test = match link.testexpr.as_deref() {
            Some(expr) => Self::holds(expr)?,
            None => false,
        };

        let verdict = match link.sub_link_type {
            SubLinkType::Exists => props.nullable_contents,
            SubLinkType::All => props.nullable_results || props.nullable_contents || test,
            SubLinkType::Any => props.nullable_contents || test,
            _ => props.nullable_results,
        };
        Ok((verdict, props))
    }

    fn any_operand(args: &[Node]) -> Result<bool, AnalysisError> {
        let mut any = false;
        for arg in args {
            any |= match arg {
                Node::SubLink(link) => {
                    let (verdict, props) = Self::sub_link(link)?;
                    verdict || props.nullable_results
                }
                other => Self::holds(other)?,
            };
        }
        Ok(any)
    }

    fn any_holds(nodes: &[Node]) -> Result<bool, AnalysisError> {
        let mut any = false;
        for node in nodes {
            any |= Self::holds(node)?;
        }
        Ok(any)
    }
}
