// Internal modules
pub mod category;
pub mod error;
pub mod table;
pub mod vocabulary;

// Re-export key types for library consumers
pub use category::Category;
pub use error::GrammarError;
pub use table::{mdal_table, TokenRule, TokenTable};
