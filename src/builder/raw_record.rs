use serde_json::{Map, Value};

use crate::{
    builder::{BuildError, NodeBuilder},
    nodes::Node,
};

/// Location value the parser uses when a node has no source position.
pub const UNKNOWN_LOCATION: i64 = -1;

/// An enumerated field that the parser may encode either as an integer or as
/// its symbolic C name.
///
/// The parser omits zero-valued fields from its output, so an absent field is
/// read as code `0`.
pub trait RawEnum: Sized {
    fn from_code(code: i64) -> Option<Self>;
    fn from_symbol(symbol: &str) -> Option<Self>;
}

/// Field accessors over one tagged record of the raw parse tree.
///
/// Accessors treat an absent field and an explicit JSON `null` the same way
/// and report a `MalformedRecord` naming this record's kind and the field
/// whenever a value has the wrong shape.
pub struct RawRecord<'a> {
    pub kind: &'a str,
    fields: &'a Map<String, Value>,
    builder: &'a NodeBuilder,
    depth: usize,
}

impl<'a> RawRecord<'a> {
    pub(crate) fn new(kind: &'a str, fields: &'a Map<String, Value>, builder: &'a NodeBuilder, depth: usize) -> Self {
        Self { kind, fields, builder, depth }
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn has(&self, field: &str) -> bool {
        self.get(field).is_some()
    }

    fn get(&self, field: &str) -> Option<&'a Value> {
        match self.fields.get(field) {
            None | Some(Value::Null) => None,
            Some(value) => Some(value),
        }
    }

    fn malformed(&self, field: &str, expected: &'static str) -> BuildError {
        BuildError::malformed(self.kind, field, expected)
    }

    pub fn string(&self, field: &str) -> Result<Option<String>, BuildError> {
        match self.get(field) {
            None => Ok(None),
            Some(Value::String(text)) => Ok(Some(text.clone())),
            Some(_) => self.malformed(field, "string").err(),
        }
    }

    pub fn required_string(&self, field: &str) -> Result<String, BuildError> {
        self.string(field)?.ok_or_else(|| self.malformed(field, "string"))
    }

    pub fn int(&self, field: &str) -> Result<Option<i64>, BuildError> {
        match self.get(field) {
            None => Ok(None),
            Some(Value::Number(n)) => n.as_i64().map(Some).ok_or_else(|| self.malformed(field, "integer")),
            Some(_) => self.malformed(field, "integer").err(),
        }
    }

    pub fn location(&self) -> Result<i64, BuildError> {
        Ok(self.int("location")?.unwrap_or(UNKNOWN_LOCATION))
    }

    /// Boolean field; the parser leaves `false` out entirely.
    pub fn flag(&self, field: &str) -> Result<bool, BuildError> {
        match self.get(field) {
            None => Ok(false),
            Some(Value::Bool(value)) => Ok(*value),
            Some(_) => self.malformed(field, "boolean").err(),
        }
    }

    pub fn enumeration<E: RawEnum>(&self, field: &str) -> Result<E, BuildError> {
        let parsed = match self.get(field) {
            None => E::from_code(0),
            Some(Value::Number(n)) => n.as_i64().and_then(E::from_code),
            Some(Value::String(symbol)) => E::from_symbol(symbol),
            Some(_) => None,
        };
        parsed.ok_or_else(|| self.malformed(field, "known enum code"))
    }

    /// A single nested record.
    pub fn child(&self, field: &str) -> Result<Option<Box<Node>>, BuildError> {
        match self.get(field) {
            None => Ok(None),
            Some(value @ Value::Object(_)) => {
                let node = self.builder.build_record(value, self.depth + 1, self.kind, field)?;
                Ok(Some(Box::new(node)))
            }
            Some(_) => self.malformed(field, "record").err(),
        }
    }

    /// A nested record whose tag is implied by the field rather than spelled
    /// out, as in `{"ival": {"ival": 1}}`.
    pub fn inline_record(&self, field: &str, kind: &'static str) -> Result<Node, BuildError> {
        match self.get(field) {
            Some(Value::Object(fields)) => self.builder.build_fields(kind, fields, self.depth + 1),
            _ => self.malformed(field, "record").err(),
        }
    }

    pub fn required_child(&self, field: &str) -> Result<Box<Node>, BuildError> {
        self.child(field)?.ok_or_else(|| self.malformed(field, "record"))
    }

    /// A nested record that must be a `SelectStmt`.
    pub fn select_child(&self, field: &str) -> Result<Box<Node>, BuildError> {
        let node = self.required_child(field)?;
        if matches!(*node, Node::SelectStmt(_)) {
            Ok(node)
        } else {
            self.malformed(field, "SelectStmt record").err()
        }
    }

    pub fn optional_select_child(&self, field: &str) -> Result<Option<Box<Node>>, BuildError> {
        if self.has(field) {
            self.select_child(field).map(Some)
        } else {
            Ok(None)
        }
    }

    /// An ordered sequence of nested items; absent means empty.
    pub fn children(&self, field: &str) -> Result<Vec<Node>, BuildError> {
        match self.get(field) {
            None => Ok(vec![]),
            Some(Value::Array(items)) => self.builder.build_items(items, self.depth + 1, self.kind, field),
            Some(_) => self.malformed(field, "array").err(),
        }
    }

    /// An array of sub-lists whose slots may be left empty, either as `null`
    /// or as `{}`. Sub-lists are bare arrays or `List` records; empty slots
    /// are skipped.
    pub fn sparse_lists(&self, field: &str) -> Result<Vec<Vec<Node>>, BuildError> {
        let lists = match self.get(field) {
            None => return Ok(vec![]),
            Some(Value::Array(lists)) => lists,
            Some(_) => return self.malformed(field, "array").err(),
        };

        let mut out = Vec::with_capacity(lists.len());
        for list in lists {
            let items: &[Value] = match list {
                Value::Array(items) => items,
                Value::Object(map) => match map.get("List") {
                    Some(Value::Object(body)) => match body.get("items") {
                        None | Some(Value::Null) => &[],
                        Some(Value::Array(items)) => items,
                        Some(_) => return self.malformed(field, "list of records").err(),
                    },
                    _ => return self.malformed(field, "list of records").err(),
                },
                _ => return self.malformed(field, "list of records").err(),
            };

            let mut nodes = Vec::with_capacity(items.len());
            for item in items {
                match item {
                    Value::Null => {}
                    Value::Object(slot) if slot.is_empty() => {}
                    _ => nodes.push(self.builder.build_record(item, self.depth + 2, self.kind, field)?),
                }
            }
            out.push(nodes);
        }
        Ok(out)
    }
}
