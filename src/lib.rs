pub mod nodes;
pub use nodes::{Node, ScalarValue};

pub mod builder;
pub use builder::{BuildError, BuilderConfig, NodeBuilder};

pub mod analysis;
pub use analysis::{AnalysisError, Nullability, QueryNullability};
