//! Table construction errors
//!
//! Construction is the only fallible operation in this crate; once built,
//! the table is immutable data with no failure modes.
use crate::category::Category;

/// Errors raised while building the token pattern table
#[derive(Debug, Clone, thiserror::Error)]
pub enum GrammarError {
    #[error("word '{word}' appears in both the keyword and variable vocabularies")]
    DuplicateWord { word: String },

    #[error("invalid pattern for category '{category}'")]
    InvalidPattern {
        category: Category,
        #[source]
        source: regex::Error,
    },
}
