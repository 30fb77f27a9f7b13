use crate::{builder::{BuildError, RawRecord}, nodes::{dotted_names, Node}};

/// `arg::type_name` / `CAST(arg AS type_name)`
#[derive(Debug, Clone, PartialEq)]
pub struct TypeCast {
    pub arg: Option<Box<Node>>,
    pub type_name: Option<Box<Node>>,
    pub location: i64,
}

impl TypeCast {
    pub fn build(record: &RawRecord) -> Result<Self, BuildError> {
        Ok(Self {
            arg: record.child("arg")?,
            type_name: record.child("typeName")?,
            location: record.location()?,
        })
    }

    pub fn children(&self) -> Vec<&Node> {
        self.arg.as_deref().into_iter().chain(self.type_name.as_deref()).collect()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TypeName {
    pub names: Vec<Node>,
    pub typmods: Vec<Node>,
    pub array_bounds: Vec<Node>,
    pub setof: bool,
    pub location: i64,
}

impl TypeName {
    pub fn build(record: &RawRecord) -> Result<Self, BuildError> {
        Ok(Self {
            names: record.children("names")?,
            typmods: record.children("typmods")?,
            array_bounds: record.children("arrayBounds")?,
            setof: record.flag("setof")?,
            location: record.location()?,
        })
    }

    pub fn name(&self) -> String {
        dotted_names(&self.names)
    }

    pub fn children(&self) -> Vec<&Node> {
        self.names.iter().chain(self.typmods.iter()).chain(self.array_bounds.iter()).collect()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::{builder::NodeBuilder, nodes::Node};

    #[test]
    fn test_cast_to_array_type() {
        let raw = json!({ "TypeCast": {
            "arg": { "A_Const": { "sval": { "sval": "{1,2}" } } },
            "typeName": { "TypeName": {
                "names": [{ "String": { "sval": "pg_catalog" } }, { "String": { "sval": "int4" } }],
                "arrayBounds": [{ "Integer": { "ival": -1 } }]
            }}
        }});

        match NodeBuilder::new().build(&raw).expect("Failed to build cast") {
            Some(Node::TypeCast(cast)) => match cast.type_name.as_deref() {
                Some(Node::TypeName(type_name)) => {
                    assert_eq!(type_name.name(), "pg_catalog.int4");
                    assert_eq!(type_name.array_bounds.len(), 1);
                    assert!(!type_name.setof);
                }
                _ => panic!(),
            },
            _ => panic!(),
        }
    }
}
