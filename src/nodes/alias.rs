use crate::{builder::{BuildError, RawRecord}, nodes::Node};

/// `AS name (col, ...)` attached to a range entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Alias {
    pub aliasname: String,
    pub colnames: Vec<Node>,
}

impl Alias {
    pub fn build(record: &RawRecord) -> Result<Self, BuildError> {
        Ok(Self {
            aliasname: record.string("aliasname")?.unwrap_or_default(),
            colnames: record.children("colnames")?,
        })
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.colnames.iter().filter_map(Node::as_str).collect()
    }

    pub fn children(&self) -> Vec<&Node> {
        self.colnames.iter().collect()
    }
}

impl std::fmt::Display for Alias {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.colnames.is_empty() {
            write!(f, "{}", self.aliasname)
        } else {
            write!(f, "{}({})", self.aliasname, self.column_names().join(", "))
        }
    }
}
