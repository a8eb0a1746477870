use thiserror::Error;

#[derive(Debug, Error)]
pub enum PatternError {
    #[error("invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

impl PatternError {
    pub fn pattern(&self) -> &str {
        match self {
            PatternError::InvalidPattern { pattern, .. } => pattern,
        }
    }
}
