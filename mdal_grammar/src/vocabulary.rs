//! mdAL vocabulary - the literal words and symbols behind the pattern table
//!
//! Keywords are the structural words of the language (object kinds, page
//! kinds, field declarations). The variable vocabulary holds the primitive
//! type names and boolean literals. The two lists must stay disjoint; the
//! table constructor enforces this.
use crate::category::Category;

/// Structural mdAL keywords, in grammar order
pub const KEYWORDS: &[&str] = &[
    "solution",
    "master",
    "supplemental",
    "document",
    "header",
    "line",
    "ledgerEntry",
    "field",
    "fields",
    "template",
    "include",
    "group",
    "cardPage",
    "documentPage",
    "listPartPage",
    "listPage",
];

/// Primitive type names and boolean literals, highlighted as `variable`
pub const VARIABLES: &[&str] = &[
    "true",
    "false",
    "Boolean",
    "Integer",
    "BigInteger",
    "Decimal",
    "Code",
    "Text",
    "Date",
    "Time",
    "DateTime",
    "Guid",
    "Blob",
    "Enum",
    "Option",
    "Media",
    "MediaSet",
    "DateFormula",
    "RecordId",
    "TableFilter",
];

/// Structural symbols highlighted as `punctuation`
pub const PUNCTUATION: &[char] = &['(', ')', '{', '}', '[', ']', ',', ';'];

/// Line comment marker (`//` to end of line)
pub const COMMENT_MARKER: &str = "//";

/// Check if a word is a structural keyword (exact case)
pub fn is_keyword(word: &str) -> bool {
    KEYWORDS.contains(&word)
}

/// Check if a word is a type name or boolean literal (exact case)
pub fn is_variable(word: &str) -> bool {
    VARIABLES.contains(&word)
}

/// Check if a character is a structural punctuation symbol
pub fn is_punctuation(ch: char) -> bool {
    PUNCTUATION.contains(&ch)
}

/// Classify a standalone word against the vocabularies.
///
/// Keyword wins over variable, matching the table order; returns `None` for
/// words outside both vocabularies (plain text to a highlighter).
pub fn classify_word(word: &str) -> Option<Category> {
    if is_keyword(word) {
        Some(Category::Keyword)
    } else if is_variable(word) {
        Some(Category::Variable)
    } else {
        None
    }
}
