// Internal modules
pub mod scanner;
pub mod span;

// Re-export key types for library consumers
pub use scanner::{HighlightMetrics, Highlighter, SpannedToken, Token};
pub use span::{Position, Span, Spanned};
