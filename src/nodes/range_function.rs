use crate::{builder::{BuildError, RawRecord}, nodes::Node};

/// Function call in a FROM clause: `[LATERAL] f(...) [WITH ORDINALITY] alias`
/// or `ROWS FROM (f(...), g(...))`.
#[derive(Debug, Clone, PartialEq)]
pub struct RangeFunction {
    pub lateral: bool,
    pub ordinality: bool,
    pub is_rowsfrom: bool,
    /// one entry per function: the call, then its column definitions if any
    pub functions: Vec<Vec<Node>>,
    pub alias: Option<Box<Node>>,
    pub coldeflist: Vec<Node>,
}

impl RangeFunction {
    pub fn build(record: &RawRecord) -> Result<Self, BuildError> {
        Ok(Self {
            lateral: record.flag("lateral")?,
            ordinality: record.flag("ordinality")?,
            is_rowsfrom: record.flag("is_rowsfrom")?,
            functions: record.sparse_lists("functions")?,
            alias: record.child("alias")?,
            coldeflist: record.children("coldeflist")?,
        })
    }

    pub fn children(&self) -> Vec<&Node> {
        let mut out: Vec<&Node> = self.functions.iter().flatten().collect();
        out.extend(self.alias.as_deref());
        out.extend(self.coldeflist.iter());
        out
    }
}
