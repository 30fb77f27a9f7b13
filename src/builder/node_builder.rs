use serde_json::{Map, Value};
use tracing::{debug, trace};

use crate::{
    builder::{BuildError, BuilderConfig, NodeRegistry, RawRecord},
    nodes::{Node, ScalarValue},
};

const ROOT: &str = "<root>";

/// Turns raw parser output into a typed [`Node`] tree.
#[derive(Debug, Clone, Default)]
pub struct NodeBuilder {
    config: BuilderConfig,
}

impl NodeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: BuilderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &BuilderConfig {
        &self.config
    }

    /// Builds one record. `null` yields `None`.
    pub fn build(&self, raw: &Value) -> Result<Option<Node>, BuildError> {
        match raw {
            Value::Null => Ok(None),
            _ => self.build_record(raw, 1, ROOT, "").map(Some),
        }
    }

    /// Parses JSON text and builds the record it contains.
    pub fn build_str(&self, text: &str) -> Result<Option<Node>, BuildError> {
        let raw: Value = serde_json::from_str(text).map_err(|e| BuildError::InvalidJson(e.to_string()))?;
        self.build(&raw)
    }

    /// Builds every statement of a parse result.
    ///
    /// Accepts either a bare array of statement records or an object carrying
    /// a `stmts` array whose entries are untagged `RawStmt` bodies.
    pub fn build_statements(&self, raw: &Value) -> Result<Vec<Node>, BuildError> {
        match raw {
            Value::Array(items) => self.build_items(items, 1, ROOT, ""),
            Value::Object(map) if map.contains_key("stmts") => {
                let Some(Value::Array(stmts)) = map.get("stmts") else {
                    return BuildError::malformed(ROOT, "stmts", "array").err();
                };
                let mut out = Vec::with_capacity(stmts.len());
                for stmt in stmts {
                    match stmt {
                        Value::Object(fields) if fields.contains_key("stmt") => {
                            out.push(self.build_fields("RawStmt", fields, 1)?);
                        }
                        _ => out.push(self.build_record(stmt, 1, ROOT, "stmts")?),
                    }
                }
                Ok(out)
            }
            _ => self.build(raw).map(|node| node.into_iter().collect()),
        }
    }

    pub(crate) fn build_record(&self, raw: &Value, depth: usize, parent: &str, field: &str) -> Result<Node, BuildError> {
        let Value::Object(map) = raw else {
            return BuildError::malformed(parent, field, "record").err();
        };
        let mut entries = map.iter();
        let (Some((kind, body)), None) = (entries.next(), entries.next()) else {
            return BuildError::malformed(parent, field, "single-tag record").err();
        };
        let Value::Object(fields) = body else {
            return BuildError::malformed(kind, "", "field map").err();
        };
        self.build_fields(kind, fields, depth)
    }

    pub(crate) fn build_fields(&self, kind: &str, fields: &Map<String, Value>, depth: usize) -> Result<Node, BuildError> {
        if depth > self.config.max_depth {
            debug!(kind, depth, limit = self.config.max_depth, "parse tree too deep");
            return BuildError::DepthLimitExceeded { limit: self.config.max_depth }.err();
        }

        let Some(constructor) = NodeRegistry::global().lookup(kind) else {
            debug!(kind, depth, "unrecognized node kind");
            return BuildError::UnrecognizedNodeKind { kind: kind.to_string() }.err();
        };

        trace!(kind, depth, "building node");
        constructor(&RawRecord::new(kind, fields, self, depth))
    }

    pub(crate) fn build_items(&self, items: &[Value], depth: usize, parent: &str, field: &str) -> Result<Vec<Node>, BuildError> {
        let mut out = Vec::with_capacity(items.len());
        for item in items {
            let node = match item {
                Value::Object(_) => self.build_record(item, depth, parent, field)?,
                Value::Array(nested) => {
                    if depth > self.config.max_depth {
                        return BuildError::DepthLimitExceeded { limit: self.config.max_depth }.err();
                    }
                    Node::List(self.build_items(nested, depth + 1, parent, field)?)
                }
                Value::String(text) => Node::Scalar(ScalarValue::String(text.clone())),
                Value::Bool(value) => Node::Scalar(ScalarValue::Boolean(*value)),
                Value::Number(n) => match n.as_i64() {
                    Some(i) => Node::Scalar(ScalarValue::Integer(i)),
                    None => n
                        .as_f64()
                        .and_then(|f| ScalarValue::parse_float(&f.to_string()))
                        .map(Node::Scalar)
                        .ok_or_else(|| BuildError::malformed(parent, field, "number"))?,
                },
                Value::Null => return BuildError::malformed(parent, field, "array without null entries").err(),
            };
            out.push(node);
        }
        Ok(out)
    }
}

impl TryFrom<&Value> for Node {
    type Error = BuildError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        NodeBuilder::new()
            .build(value)?
            .ok_or_else(|| BuildError::malformed(ROOT, "", "record"))
    }
}

impl TryFrom<&str> for Node {
    type Error = BuildError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        NodeBuilder::new()
            .build_str(value)?
            .ok_or_else(|| BuildError::malformed(ROOT, "", "record"))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::{
        builder::{BuildError, BuilderConfig, NodeBuilder},
        nodes::{Node, ScalarValue},
    };

    fn nested_bool_expr(levels: usize) -> serde_json::Value {
        let mut raw = json!({ "A_Star": {} });
        for _ in 0..levels {
            raw = json!({ "BoolExpr": { "boolop": 2, "args": [raw] } });
        }
        raw
    }

    #[test]
    fn null_in_null_out() {
        let builder = NodeBuilder::new();
        assert_eq!(builder.build(&serde_json::Value::Null), Ok(None));
        assert_eq!(builder.build_str("null"), Ok(None));
    }

    #[test]
    fn unrecognized_kind_is_reported() {
        let raw = json!({ "BoolExpr": { "args": [{ "MysteryNode": { "location": 3 } }] } });
        let result = NodeBuilder::new().build(&raw);
        assert_eq!(result, Err(BuildError::UnrecognizedNodeKind { kind: "MysteryNode".to_string() }));
    }

    #[test]
    fn record_must_have_exactly_one_tag() {
        let raw = json!({ "RangeVar": { "relname": "a" }, "Alias": { "aliasname": "x" } });
        match NodeBuilder::new().build(&raw) {
            Err(BuildError::MalformedRecord { kind, expected, .. }) => {
                assert_eq!(kind, "<root>");
                assert_eq!(expected, "single-tag record");
            }
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[test]
    fn scalar_where_record_expected_is_malformed() {
        let raw = json!({ "JoinExpr": { "larg": "a", "rarg": { "RangeVar": { "relname": "b" } } } });
        assert_eq!(
            NodeBuilder::new().build(&raw),
            Err(BuildError::malformed("JoinExpr", "larg", "record"))
        );
    }

    #[test]
    fn null_entries_in_arrays_are_rejected() {
        let raw = json!({ "BoolExpr": { "args": [{ "A_Const": { "val": { "Integer": { "ival": 1 } } } }, null] } });
        assert_eq!(
            NodeBuilder::new().build(&raw),
            Err(BuildError::malformed("BoolExpr", "args", "array without null entries"))
        );
    }

    #[test]
    fn depth_limit_is_enforced() {
        let builder = NodeBuilder::with_config(BuilderConfig::with_max_depth(8));
        assert!(builder.build(&nested_bool_expr(7)).is_ok());
        assert_eq!(builder.build(&nested_bool_expr(8)), Err(BuildError::DepthLimitExceeded { limit: 8 }));
    }

    #[test]
    fn invalid_json_text() {
        match NodeBuilder::new().build_str("{ \"RangeVar\": ") {
            Err(BuildError::InvalidJson(_)) => {}
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[test]
    fn statements_from_array_and_stmts_object() {
        let builder = NodeBuilder::new();

        let legacy = json!([
            { "SelectStmt": { "fromClause": [{ "RangeVar": { "relname": "a" } }], "op": 0 } },
            { "RawStmt": { "stmt": { "SelectStmt": { "fromClause": [{ "RangeVar": { "relname": "b" } }] } } } }
        ]);
        let stmts = builder.build_statements(&legacy).expect("Failed to build statements");
        assert_eq!(stmts.len(), 2);
        assert_eq!(stmts[0].kind(), "SelectStmt");
        assert_eq!(stmts[1].kind(), "RawStmt");

        let modern = json!({
            "version": 130003,
            "stmts": [{ "stmt": { "SelectStmt": { "op": "SETOP_NONE" } }, "stmt_len": 8 }]
        });
        let stmts = builder.build_statements(&modern).expect("Failed to build statements");
        match stmts.as_slice() {
            [Node::RawStmt(raw)] => {
                assert_eq!(raw.stmt_len, 8);
                assert_eq!(raw.stmt.kind(), "SelectStmt");
            }
            other => panic!("unexpected statements {:?}", other),
        }
    }

    #[test]
    fn scalars_and_nested_arrays_in_lists() {
        let raw = json!({ "SelectStmt": { "valuesLists": [[1, "two", 2.5]] } });
        let node = NodeBuilder::new().build(&raw).expect("Failed to build").expect("Missing node");
        let Node::SelectStmt(stmt) = node else { panic!() };
        match stmt.values_lists.as_slice() {
            [Node::List(row)] => {
                assert_eq!(row[0], Node::Scalar(ScalarValue::Integer(1)));
                assert_eq!(row[1].as_str(), Some("two"));
                assert_eq!(row[2].kind(), "Float");
            }
            other => panic!("unexpected values {:?}", other),
        }
    }

    #[test]
    fn try_from_text() {
        let node = Node::try_from(r#"{ "RangeVar": { "relname": "people", "location": 14 } }"#)
            .expect("Failed to build");
        assert_eq!(node.to_string(), "<RangeVar (people)>");
    }
}
