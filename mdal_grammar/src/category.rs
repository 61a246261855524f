//! Token categories for mdAL syntax highlighting
//!
//! The category names come from the host highlighting engine's fixed
//! vocabulary: `variable` labels the primitive type names of mdAL rather
//! than making a semantic claim that they behave as variables.
use serde::{Deserialize, Serialize};
use std::fmt;

/// Highlighting category assigned to a scanned span of mdAL source.
///
/// The declaration order is the table order: when a span could match more
/// than one rule, the earlier category wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Line comment (`//` to end of line)
    Comment,
    /// Structural language keyword (`solution`, `field`, `cardPage`, ...)
    Keyword,
    /// Primitive type name or boolean literal (`Text`, `Integer`, `true`, ...)
    Variable,
    /// Single structural symbol (`(){}[],;`)
    Punctuation,
}

impl Category {
    /// All categories in table order (first-match priority order)
    pub const ALL: [Category; 4] = [
        Category::Comment,
        Category::Keyword,
        Category::Variable,
        Category::Punctuation,
    ];

    /// Get the category name as it appears in the grammar table
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Comment => "comment",
            Self::Keyword => "keyword",
            Self::Variable => "variable",
            Self::Punctuation => "punctuation",
        }
    }

    /// Parse a category from its table name
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "comment" => Some(Self::Comment),
            "keyword" => Some(Self::Keyword),
            "variable" => Some(Self::Variable),
            "punctuation" => Some(Self::Punctuation),
            _ => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
