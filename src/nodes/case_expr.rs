use crate::{builder::{BuildError, RawRecord}, nodes::Node};

/// `CASE [arg] WHEN ... THEN ... [ELSE defresult] END`
#[derive(Debug, Clone, PartialEq)]
pub struct CaseExpr {
    pub casetype: Option<i64>,
    pub casecollid: Option<i64>,
    pub arg: Option<Box<Node>>,
    /// `CaseWhen` branches, in source order
    pub args: Vec<Node>,
    pub defresult: Option<Box<Node>>,
    pub location: i64,
}

impl CaseExpr {
    pub fn build(record: &RawRecord) -> Result<Self, BuildError> {
        Ok(Self {
            casetype: record.int("casetype")?,
            casecollid: record.int("casecollid")?,
            arg: record.child("arg")?,
            args: record.children("args")?,
            defresult: record.child("defresult")?,
            location: record.location()?,
        })
    }

    pub fn children(&self) -> Vec<&Node> {
        let mut out: Vec<&Node> = self.arg.as_deref().into_iter().collect();
        out.extend(self.args.iter());
        out.extend(self.defresult.as_deref());
        out
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CaseWhen {
    pub expr: Option<Box<Node>>,
    pub result: Option<Box<Node>>,
    pub location: i64,
}

impl CaseWhen {
    pub fn build(record: &RawRecord) -> Result<Self, BuildError> {
        Ok(Self {
            expr: record.child("expr")?,
            result: record.child("result")?,
            location: record.location()?,
        })
    }

    pub fn children(&self) -> Vec<&Node> {
        self.expr.as_deref().into_iter().chain(self.result.as_deref()).collect()
    }
}
