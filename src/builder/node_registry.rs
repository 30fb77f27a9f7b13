use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::{
    builder::{BuildError, RawRecord},
    nodes::{
        AArrayExpr, AConst, AExpr, AIndices, AIndirection, Alias, BoolExpr, BooleanTest, CaseExpr, CaseWhen,
        CoalesceExpr, CollateClause, ColumnRef, CommonTableExpr, DeleteStmt, FuncCall, InsertStmt, IntoClause,
        JoinExpr, MinMaxExpr, Node, NullIfExpr, NullTest, ParamRef, RangeFunction, RangeSubselect, RangeVar, RawStmt,
        ResTarget, RowExpr, ScalarValue, SelectStmt, SetToDefault, SortBy, SqlValueFunction, SubLink, TypeCast,
        TypeName, UpdateStmt, WithClause,
    },
};

pub type NodeConstructor = fn(&RawRecord) -> Result<Node, BuildError>;

static DEFAULT_REGISTRY: Lazy<NodeRegistry> = Lazy::new(NodeRegistry::default_node_registry);

/// Type tag → constructor table used by the builder.
#[derive(Default)]
pub struct NodeRegistry {
    by_kind: HashMap<&'static str, NodeConstructor>,
}

impl NodeRegistry {
    pub fn new() -> Self { Self { by_kind: HashMap::new() } }

    pub fn register(&mut self, kind: &'static str, constructor: NodeConstructor) {
        self.by_kind.insert(kind, constructor);
    }

    pub fn lookup(&self, kind: &str) -> Option<NodeConstructor> {
        self.by_kind.get(kind).copied()
    }

    pub fn kinds(&self) -> Vec<&'static str> {
        let mut v: Vec<_> = self.by_kind.keys().copied().collect();
        v.sort();
        v
    }

    /// The shared registry holding every known node kind.
    pub fn global() -> &'static NodeRegistry {
        &DEFAULT_REGISTRY
    }

    pub fn default_node_registry() -> Self {
        let mut registry = Self::new();

        registry.register("RawStmt", |r| RawStmt::build(r).map(|n| Node::RawStmt(Box::new(n))));
        registry.register("SelectStmt", |r| SelectStmt::build(r).map(|n| Node::SelectStmt(Box::new(n))));
        registry.register("InsertStmt", |r| InsertStmt::build(r).map(|n| Node::InsertStmt(Box::new(n))));
        registry.register("UpdateStmt", |r| UpdateStmt::build(r).map(|n| Node::UpdateStmt(Box::new(n))));
        registry.register("DeleteStmt", |r| DeleteStmt::build(r).map(|n| Node::DeleteStmt(Box::new(n))));
        registry.register("IntoClause", |r| IntoClause::build(r).map(|n| Node::IntoClause(Box::new(n))));
        registry.register("ResTarget", |r| ResTarget::build(r).map(|n| Node::ResTarget(Box::new(n))));
        registry.register("SortBy", |r| SortBy::build(r).map(|n| Node::SortBy(Box::new(n))));
        registry.register("WithClause", |r| WithClause::build(r).map(|n| Node::WithClause(Box::new(n))));
        registry.register("CommonTableExpr", |r| CommonTableExpr::build(r).map(|n| Node::CommonTableExpr(Box::new(n))));

        registry.register("RangeVar", |r| RangeVar::build(r).map(Node::RangeVar));
        registry.register("RangeSubselect", |r| RangeSubselect::build(r).map(|n| Node::RangeSubselect(Box::new(n))));
        registry.register("RangeFunction", |r| RangeFunction::build(r).map(|n| Node::RangeFunction(Box::new(n))));
        registry.register("JoinExpr", |r| JoinExpr::build(r).map(|n| Node::JoinExpr(Box::new(n))));
        registry.register("Alias", |r| Alias::build(r).map(Node::Alias));

        registry.register("BoolExpr", |r| BoolExpr::build(r).map(Node::BoolExpr));
        registry.register("SubLink", |r| SubLink::build(r).map(|n| Node::SubLink(Box::new(n))));
        registry.register("CaseExpr", |r| CaseExpr::build(r).map(|n| Node::CaseExpr(Box::new(n))));
        registry.register("CaseWhen", |r| CaseWhen::build(r).map(|n| Node::CaseWhen(Box::new(n))));
        registry.register("NullTest", |r| NullTest::build(r).map(|n| Node::NullTest(Box::new(n))));
        registry.register("BooleanTest", |r| BooleanTest::build(r).map(|n| Node::BooleanTest(Box::new(n))));
        registry.register("RowExpr", |r| RowExpr::build(r).map(Node::RowExpr));
        registry.register("SetToDefault", |r| SetToDefault::build(r).map(Node::SetToDefault));
        registry.register("A_Expr", |r| AExpr::build(r).map(|n| Node::AExpr(Box::new(n))));
        registry.register("FuncCall", |r| FuncCall::build(r).map(|n| Node::FuncCall(Box::new(n))));
        registry.register("TypeCast", |r| TypeCast::build(r).map(|n| Node::TypeCast(Box::new(n))));
        registry.register("TypeName", |r| TypeName::build(r).map(Node::TypeName));
        registry.register("ColumnRef", |r| ColumnRef::build(r).map(Node::ColumnRef));
        registry.register("ParamRef", |r| ParamRef::build(r).map(Node::ParamRef));
        registry.register("A_Const", |r| AConst::build(r).map(Node::AConst));
        registry.register("A_Star", |_| Ok(Node::AStar));
        registry.register("CoalesceExpr", |r| CoalesceExpr::build(r).map(|n| Node::CoalesceExpr(Box::new(n))));
        registry.register("MinMaxExpr", |r| MinMaxExpr::build(r).map(|n| Node::MinMaxExpr(Box::new(n))));
        registry.register("NullIfExpr", |r| NullIfExpr::build(r).map(|n| Node::NullIfExpr(Box::new(n))));
        registry.register("A_ArrayExpr", |r| AArrayExpr::build(r).map(Node::AArrayExpr));
        registry.register("A_Indirection", |r| AIndirection::build(r).map(|n| Node::AIndirection(Box::new(n))));
        registry.register("A_Indices", |r| AIndices::build(r).map(|n| Node::AIndices(Box::new(n))));
        registry.register("CollateClause", |r| CollateClause::build(r).map(|n| Node::CollateClause(Box::new(n))));
        registry.register("SQLValueFunction", |r| SqlValueFunction::build(r).map(Node::SqlValueFunction));

        registry.register("List", |r| r.children("items").map(Node::List));
        registry.register("String", |r| ScalarValue::build_string(r).map(Node::Scalar));
        registry.register("Integer", |r| ScalarValue::build_integer(r).map(Node::Scalar));
        registry.register("Float", |r| ScalarValue::build_float(r).map(Node::Scalar));
        registry.register("Boolean", |r| ScalarValue::build_boolean(r).map(Node::Scalar));
        registry.register("Null", |_| Ok(Node::Scalar(ScalarValue::Null)));

        registry
    }
}
