use std::fmt;

use crate::nodes::{
    AArrayExpr, AConst, AExpr, AIndices, AIndirection, Alias, BoolExpr, BooleanTest, CaseExpr, CaseWhen,
    CoalesceExpr, CollateClause, ColumnRef, CommonTableExpr, DeleteStmt, FuncCall, InsertStmt, IntoClause, JoinExpr,
    MinMaxExpr, NullIfExpr, NullTest, ParamRef, RangeFunction, RangeSubselect, RangeVar, RawStmt, ResTarget, RowExpr,
    ScalarValue, SelectStmt, SetToDefault, SortBy, SqlValueFunction, SubLink, TypeCast, TypeName, UpdateStmt,
    WithClause,
};

/// One element of a typed parse tree.
///
/// The set of kinds is closed: every tag the builder accepts maps to exactly
/// one variant, and every analysis matches on all of them. Each node owns its
/// children, so a tree is released as a whole when the root is dropped.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    RawStmt(Box<RawStmt>),
    SelectStmt(Box<SelectStmt>),
    InsertStmt(Box<InsertStmt>),
    UpdateStmt(Box<UpdateStmt>),
    DeleteStmt(Box<DeleteStmt>),
    IntoClause(Box<IntoClause>),
    ResTarget(Box<ResTarget>),
    SortBy(Box<SortBy>),
    WithClause(Box<WithClause>),
    CommonTableExpr(Box<CommonTableExpr>),

    // FROM items
    RangeVar(RangeVar),
    RangeSubselect(Box<RangeSubselect>),
    RangeFunction(Box<RangeFunction>),
    JoinExpr(Box<JoinExpr>),
    Alias(Alias),

    // Expressions
    BoolExpr(BoolExpr),
    SubLink(Box<SubLink>),
    CaseExpr(Box<CaseExpr>),
    CaseWhen(Box<CaseWhen>),
    NullTest(Box<NullTest>),
    BooleanTest(Box<BooleanTest>),
    RowExpr(RowExpr),
    SetToDefault(SetToDefault),
    AExpr(Box<AExpr>),
    FuncCall(Box<FuncCall>),
    TypeCast(Box<TypeCast>),
    TypeName(TypeName),
    ColumnRef(ColumnRef),
    ParamRef(ParamRef),
    AConst(AConst),
    AStar,
    CoalesceExpr(Box<CoalesceExpr>),
    MinMaxExpr(Box<MinMaxExpr>),
    NullIfExpr(Box<NullIfExpr>),
    AArrayExpr(AArrayExpr),
    AIndirection(Box<AIndirection>),
    AIndices(Box<AIndices>),
    CollateClause(Box<CollateClause>),
    SqlValueFunction(SqlValueFunction),

    List(Vec<Node>),
    Scalar(ScalarValue),
}

impl Node {
    /// The raw type tag this node was built from.
    pub fn kind(&self) -> &'static str {
        match self {
            Node::RawStmt(_) => "RawStmt",
            Node::SelectStmt(_) => "SelectStmt",
            Node::InsertStmt(_) => "InsertStmt",
            Node::UpdateStmt(_) => "UpdateStmt",
            Node::DeleteStmt(_) => "DeleteStmt",
            Node::IntoClause(_) => "IntoClause",
            Node::ResTarget(_) => "ResTarget",
            Node::SortBy(_) => "SortBy",
            Node::WithClause(_) => "WithClause",
            Node::CommonTableExpr(_) => "CommonTableExpr",
            Node::RangeVar(_) => "RangeVar",
            Node::RangeSubselect(_) => "RangeSubselect",
            Node::RangeFunction(_) => "RangeFunction",
            Node::JoinExpr(_) => "JoinExpr",
            Node::Alias(_) => "Alias",
            Node::BoolExpr(_) => "BoolExpr",
            Node::SubLink(_) => "SubLink",
            Node::CaseExpr(_) => "CaseExpr",
            Node::CaseWhen(_) => "CaseWhen",
            Node::NullTest(_) => "NullTest",
            Node::BooleanTest(_) => "BooleanTest",
            Node::RowExpr(_) => "RowExpr",
            Node::SetToDefault(_) => "SetToDefault",
            Node::AExpr(_) => "A_Expr",
            Node::FuncCall(_) => "FuncCall",
            Node::TypeCast(_) => "TypeCast",
            Node::TypeName(_) => "TypeName",
            Node::ColumnRef(_) => "ColumnRef",
            Node::ParamRef(_) => "ParamRef",
            Node::AConst(_) => "A_Const",
            Node::AStar => "A_Star",
            Node::CoalesceExpr(_) => "CoalesceExpr",
            Node::MinMaxExpr(_) => "MinMaxExpr",
            Node::NullIfExpr(_) => "NullIfExpr",
            Node::AArrayExpr(_) => "A_ArrayExpr",
            Node::AIndirection(_) => "A_Indirection",
            Node::AIndices(_) => "A_Indices",
            Node::CollateClause(_) => "CollateClause",
            Node::SqlValueFunction(_) => "SQLValueFunction",
            Node::List(_) => "List",
            Node::Scalar(value) => value.kind(),
        }
    }

    /// Direct children in field declaration order.
    ///
    /// This is the structural view the generic traversal walks; kinds with
    /// their own analysis rules may ignore some of these.
    pub fn children(&self) -> Vec<&Node> {
        match self {
            Node::RawStmt(stmt) => stmt.children(),
            Node::SelectStmt(stmt) => stmt.children(),
            Node::InsertStmt(stmt) => stmt.children(),
            Node::UpdateStmt(stmt) => stmt.children(),
            Node::DeleteStmt(stmt) => stmt.children(),
            Node::IntoClause(into) => into.children(),
            Node::ResTarget(target) => target.children(),
            Node::SortBy(sort) => sort.children(),
            Node::WithClause(with) => with.children(),
            Node::CommonTableExpr(cte) => cte.children(),
            Node::RangeVar(range_var) => range_var.children(),
            Node::RangeSubselect(range) => range.children(),
            Node::RangeFunction(range) => range.children(),
            Node::JoinExpr(join) => join.children(),
            Node::Alias(alias) => alias.children(),
            Node::BoolExpr(expr) => expr.children(),
            Node::SubLink(link) => link.children(),
            Node::CaseExpr(expr) => expr.children(),
            Node::CaseWhen(when) => when.children(),
            Node::NullTest(test) => test.children(),
            Node::BooleanTest(test) => test.children(),
            Node::RowExpr(row) => row.children(),
            Node::AExpr(expr) => expr.children(),
            Node::FuncCall(call) => call.children(),
            Node::TypeCast(cast) => cast.children(),
            Node::TypeName(type_name) => type_name.children(),
            Node::ColumnRef(column) => column.children(),
            Node::CoalesceExpr(expr) => expr.children(),
            Node::MinMaxExpr(expr) => expr.children(),
            Node::NullIfExpr(expr) => expr.children(),
            Node::AArrayExpr(array) => array.children(),
            Node::AIndirection(indirection) => indirection.children(),
            Node::AIndices(indices) => indices.children(),
            Node::CollateClause(collate) => collate.children(),
            Node::List(items) => items.iter().collect(),
            Node::SetToDefault(_)
            | Node::SqlValueFunction(_)
            | Node::ParamRef(_)
            | Node::AConst(_)
            | Node::AStar
            | Node::Scalar(_) => vec![],
        }
    }

    pub fn as_select(&self) -> Option<&SelectStmt> {
        match self {
            Node::SelectStmt(stmt) => Some(stmt),
            _ => None,
        }
    }

    /// Text of a `String` scalar node, used by name lists such as
    /// `ColumnRef.fields` or `FuncCall.funcname`.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Node::Scalar(ScalarValue::String(text)) => Some(text),
            _ => None,
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::RangeVar(range_var) => write!(f, "<RangeVar ({})>", range_var.relname),
            Node::JoinExpr(join) => write!(f, "<JoinExpr type={}>", join.jointype),
            Node::Scalar(value) => write!(f, "<{}>", value),
            other => write!(f, "<{}>", other.kind()),
        }
    }
}

/// Joins a list of `String` nodes with `.`, skipping anything that is not a
/// plain name (such as `A_Star`).
pub(crate) fn dotted_names(names: &[Node]) -> String {
    names.iter().filter_map(Node::as_str).collect::<Vec<_>>().join(".")
}
