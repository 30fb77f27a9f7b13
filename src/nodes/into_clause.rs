use crate::{builder::{BuildError, RawEnum, RawRecord}, nodes::Node};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnCommitAction {
    Noop,
    PreserveRows,
    DeleteRows,
    Drop,
}

impl RawEnum for OnCommitAction {
    fn from_code(code: i64) -> Option<Self> {
        Some(match code {
            0 => OnCommitAction::Noop,
            1 => OnCommitAction::PreserveRows,
            2 => OnCommitAction::DeleteRows,
            3 => OnCommitAction::Drop,
            _ => return None,
        })
    }

    fn from_symbol(symbol: &str) -> Option<Self> {
        Some(match symbol {
            "ONCOMMIT_NOOP" => OnCommitAction::Noop,
            "ONCOMMIT_PRESERVE_ROWS" => OnCommitAction::PreserveRows,
            "ONCOMMIT_DELETE_ROWS" => OnCommitAction::DeleteRows,
            "ONCOMMIT_DROP" => OnCommitAction::Drop,
            _ => return None,
        })
    }
}

/// Target of `SELECT ... INTO` / `CREATE TABLE ... AS`.
#[derive(Debug, Clone, PartialEq)]
pub struct IntoClause {
    pub rel: Option<Box<Node>>,
    pub col_names: Vec<Node>,
    pub options: Vec<Node>,
    pub on_commit: OnCommitAction,
    pub table_space_name: Option<String>,
    pub skip_data: bool,
}

impl IntoClause {
    pub fn build(record: &RawRecord) -> Result<Self, BuildError> {
        Ok(Self {
            rel: record.child("rel")?,
            col_names: record.children("colNames")?,
            options: record.children("options")?,
            on_commit: record.enumeration("onCommit")?,
            table_space_name: record.string("tableSpaceName")?,
            skip_data: record.flag("skipData")?,
        })
    }

    pub fn children(&self) -> Vec<&Node> {
        let mut out: Vec<&Node> = self.rel.as_deref().into_iter().collect();
        out.extend(self.col_names.iter());
        out.extend(self.options.iter());
        out
    }
}
