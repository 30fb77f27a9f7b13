use serde::{Deserialize, Serialize};

/// Default nesting bound for raw parse trees.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Settings applied while building a node tree.
///
/// `max_depth` bounds how deeply records may nest. Every analysis recurses at
/// most as deep as the tree it runs on, so this one bound also protects the
/// nullability pass from exhausting the stack.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuilderConfig {
    /// Maximum number of nested records, root included
    pub max_depth: usize,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self { max_depth: DEFAULT_MAX_DEPTH }
    }
}

impl BuilderConfig {
    /// Create default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Convenience: configuration with an explicit depth bound.
    pub fn with_max_depth(max_depth: usize) -> Self {
        Self { max_depth }
    }
}

#[cfg(test)]
mod tests {
    use crate::builder::{BuilderConfig, DEFAULT_MAX_DEPTH};

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: BuilderConfig = serde_json::from_str("{}").expect("Failed to read config");
        assert_eq!(config.max_depth, DEFAULT_MAX_DEPTH);

        let config: BuilderConfig = serde_json::from_str(r#"{ "max_depth": 12 }"#).expect("Failed to read config");
        assert_eq!(config, BuilderConfig::with_max_depth(12));
    }
}
