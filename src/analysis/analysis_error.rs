use std::fmt::Display;

#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisError {
    /// The analysis has no rule for this node, such as a `ROWCOMPARE`
    /// sub-link or query properties asked of something that is not a query.
    UndefinedReduction { kind: &'static str, detail: String },
}

impl AnalysisError {
    pub fn undefined(kind: &'static str, detail: impl Into<String>) -> Self {
        AnalysisError::UndefinedReduction { kind, detail: detail.into() }
    }

    pub fn err<T>(self) -> Result<T, AnalysisError> {
        Err(self)
    }
}

impl Display for AnalysisError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AnalysisError::UndefinedReduction { kind, detail } => {
                write!(f, "AnalysisError: undefined reduction for {}: {}", kind, detail)
            }
        }
    }
}

impl std::error::Error for AnalysisError {}
