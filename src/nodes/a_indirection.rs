use crate::{builder::{BuildError, RawRecord}, nodes::Node};

/// Subscripts or field selection applied to an expression: `(expr)[1].name`.
#[derive(Debug, Clone, PartialEq)]
pub struct AIndirection {
    pub arg: Box<Node>,
    /// `A_Indices`, `String` or `A_Star` entries
    pub indirection: Vec<Node>,
}

impl AIndirection {
    pub fn build(record: &RawRecord) -> Result<Self, BuildError> {
        Ok(Self {
            arg: record.required_child("arg")?,
            indirection: record.children("indirection")?,
        })
    }

    pub fn children(&self) -> Vec<&Node> {
        let mut out = vec![self.arg.as_ref()];
        out.extend(self.indirection.iter());
        out
    }
}

/// `[uidx]` or `[lidx:uidx]`
#[derive(Debug, Clone, PartialEq)]
pub struct AIndices {
    pub is_slice: bool,
    pub lidx: Option<Box<Node>>,
    pub uidx: Option<Box<Node>>,
}

impl AIndices {
    pub fn build(record: &RawRecord) -> Result<Self, BuildError> {
        Ok(Self {
            is_slice: record.flag("is_slice")?,
            lidx: record.child("lidx")?,
            uidx: record.child("uidx")?,
        })
    }

    pub fn children(&self) -> Vec<&Node> {
        self.lidx.as_deref().into_iter().chain(self.uidx.as_deref()).collect()
    }
}
