use crate::{builder::{BuildError, RawRecord}, nodes::{dotted_names, Node}};

/// Function or aggregate call before name resolution.
#[derive(Debug, Clone, PartialEq)]
pub struct FuncCall {
    pub funcname: Vec<Node>,
    pub args: Vec<Node>,
    pub agg_order: Vec<Node>,
    pub agg_filter: Option<Box<Node>>,
    pub agg_star: bool,
    pub agg_distinct: bool,
    pub func_variadic: bool,
    pub location: i64,
}

impl FuncCall {
    pub fn build(record: &RawRecord) -> Result<Self, BuildError> {
        Ok(Self {
            funcname: record.children("funcname")?,
            args: record.children("args")?,
            agg_order: record.children("agg_order")?,
            agg_filter: record.child("agg_filter")?,
            agg_star: record.flag("agg_star")?,
            agg_distinct: record.flag("agg_distinct")?,
            func_variadic: record.flag("func_variadic")?,
            location: record.location()?,
        })
    }

    pub fn name(&self) -> String {
        dotted_names(&self.funcname)
    }

    pub fn children(&self) -> Vec<&Node> {
        let mut out: Vec<&Node> = self.funcname.iter().collect();
        out.extend(self.args.iter());
        out.extend(self.agg_order.iter());
        out.extend(self.agg_filter.as_deref());
        out
    }
}
