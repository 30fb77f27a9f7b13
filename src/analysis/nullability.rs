use serde::{Deserialize, Serialize};

/// Result of nullability inference for one node.
///
/// Kinds with a rule of their own produce `Known`. Every other kind produces
/// `Nested` with one entry per child, in child order, left unreduced so
/// callers can still see where a nullable value came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Nullability {
    Known(bool),
    Nested(Vec<Nullability>),
}

impl Nullability {
    /// Collapses the result to a single answer: a nested collection holds
    /// when any of its entries holds.
    pub fn holds(&self) -> bool {
        match self {
            Nullability::Known(value) => *value,
            Nullability::Nested(items) => items.iter().any(Nullability::holds),
        }
    }
}

impl From<bool> for Nullability {
    fn from(value: bool) -> Self {
        Nullability::Known(value)
    }
}

/// Properties of a nested query.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryNullability {
    /// some produced value may be NULL
    pub nullable_results: bool,
    /// the row source may be empty or carry NULLs
    pub nullable_contents: bool,
}

impl QueryNullability {
    pub fn holds(&self) -> bool {
        self.nullable_results || self.nullable_contents
    }

    pub fn union(self, other: Self) -> Self {
        Self {
            nullable_results: self.nullable_results || other.nullable_results,
            nullable_contents: self.nullable_contents || other.nullable_contents,
        }
    }

    pub fn intersect(self, other: Self) -> Self {
        Self {
            nullable_results: self.nullable_results && other.nullable_results,
            nullable_contents: self.nullable_contents && other.nullable_contents,
        }
    }
}
