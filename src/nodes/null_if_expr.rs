use crate::{builder::{BuildError, RawRecord}, nodes::Node};

/// `NULLIF(a, b)` after operator lookup. The raw grammar output spells this
/// as an `A_Expr` of kind `NullIf`; this form appears in rewritten trees.
#[derive(Debug, Clone, PartialEq)]
pub struct NullIfExpr {
    pub opno: Option<i64>,
    pub opresulttype: Option<i64>,
    pub opcollid: Option<i64>,
    pub inputcollid: Option<i64>,
    pub args: Vec<Node>,
    pub location: i64,
}

impl NullIfExpr {
    pub fn build(record: &RawRecord) -> Result<Self, BuildError> {
        Ok(Self {
            opno: record.int("opno")?,
            opresulttype: record.int("opresulttype")?,
            opcollid: record.int("opcollid")?,
            inputcollid: record.int("inputcollid")?,
            args: record.children("args")?,
            location: record.location()?,
        })
    }

    pub fn children(&self) -> Vec<&Node> {
        self.args.iter().collect()
    }
}
