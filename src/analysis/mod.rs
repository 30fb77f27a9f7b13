pub mod analysis_error;
pub use analysis_error::*;

pub mod nullability;
pub use nullability::*;

pub mod table_resolver;
pub use table_resolver::*;

pub mod nullability_resolver;
pub use nullability_resolver::*;

use indexmap::IndexSet;
use tracing::debug;

use crate::nodes::Node;

impl Node {
    /// Base tables this subtree reads from.
    pub fn tables(&self) -> IndexSet<String> {
        let tables = TableResolver::tables(self);
        debug!(kind = self.kind(), count = tables.len(), "resolved tables");
        tables
    }

    pub fn nullability(&self) -> Result<Nullability, AnalysisError> {
        debug!(kind = self.kind(), "inferring nullability");
        NullabilityResolver::nullability(self)
    }

    /// Properties of a nested query; only defined for `SelectStmt`.
    pub fn query_nullability(&self) -> Result<QueryNullability, AnalysisError> {
        debug!(kind = self.kind(), "inferring query nullability");
        NullabilityResolver::query_nullability(self)
    }
}
