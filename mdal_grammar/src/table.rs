//! The mdAL token pattern table
//!
//! An ordered, immutable mapping from token category to matching rule. The
//! table performs no tokenization itself; a host engine scans source text
//! left to right and, at each position, applies the category of the first
//! rule that matches there. Table order is load-bearing: comment must be
//! tried before punctuation so that symbols inside a comment are not
//! tokenized on their own.
use crate::category::Category;
use crate::error::GrammarError;
use crate::vocabulary::{COMMENT_MARKER, KEYWORDS, PUNCTUATION, VARIABLES};
use once_cell::sync::Lazy;
use regex::Regex;

/// One entry in the token pattern table: a category and its compiled matcher
#[derive(Debug, Clone)]
pub struct TokenRule {
    category: Category,
    pattern: String,
    regex: Regex,
}

impl TokenRule {
    fn new(category: Category, pattern: String) -> Result<Self, GrammarError> {
        let regex = Regex::new(&pattern)
            .map_err(|source| GrammarError::InvalidPattern { category, source })?;
        Ok(Self {
            category,
            pattern,
            regex,
        })
    }

    /// The category this rule assigns to matched spans
    pub fn category(&self) -> Category {
        self.category
    }

    /// The pattern source text
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Match this rule at exactly `pos` in `text`.
    ///
    /// The match is evaluated against the full text rather than a slice so
    /// that word boundaries see the character preceding `pos`: `true` inside
    /// `xtrue` must not match. Returns the longest valid match starting at
    /// `pos`, or `None`.
    pub fn find_at<'t>(&self, text: &'t str, pos: usize) -> Option<regex::Match<'t>> {
        self.regex.find_at(text, pos).filter(|m| m.start() == pos)
    }

    /// Check whether a standalone string is matched in full by this rule
    pub fn matches_exactly(&self, text: &str) -> bool {
        self.find_at(text, 0).map_or(false, |m| m.end() == text.len())
    }
}

/// The ordered token pattern table: exactly four rules, immutable once built
#[derive(Debug, Clone)]
pub struct TokenTable {
    rules: [TokenRule; 4],
}

impl TokenTable {
    /// Build the mdAL table from the vocabulary module.
    ///
    /// Patterns are derived from the vocabulary slices so the table cannot
    /// drift from them. Fails fast if a word appears in both the keyword and
    /// variable vocabularies.
    pub fn mdal() -> Result<Self, GrammarError> {
        validate_disjoint(KEYWORDS, VARIABLES)?;

        let comment = format!("{}.+", regex::escape(COMMENT_MARKER));
        let keyword = word_alternation(KEYWORDS);
        let variable = word_alternation(VARIABLES);
        let punctuation = format!(
            "[{}]",
            PUNCTUATION
                .iter()
                .map(|ch| regex::escape(&ch.to_string()))
                .collect::<String>()
        );

        Ok(Self {
            rules: [
                TokenRule::new(Category::Comment, comment)?,
                TokenRule::new(Category::Keyword, keyword)?,
                TokenRule::new(Category::Variable, variable)?,
                TokenRule::new(Category::Punctuation, punctuation)?,
            ],
        })
    }

    /// The rules in priority order
    pub fn rules(&self) -> &[TokenRule] {
        &self.rules
    }

    /// The categories in priority order
    pub fn categories(&self) -> impl Iterator<Item = Category> + '_ {
        self.rules.iter().map(|rule| rule.category)
    }

    /// Look up the rule for a category
    pub fn rule(&self, category: Category) -> &TokenRule {
        // One rule per category, stored in Category::ALL declaration order
        &self.rules[category as usize]
    }
}

/// Whole-word, case-sensitive alternation over a vocabulary list
fn word_alternation(words: &[&str]) -> String {
    format!(r"\b(?:{})\b", words.join("|"))
}

fn validate_disjoint(keywords: &[&str], variables: &[&str]) -> Result<(), GrammarError> {
    for word in keywords {
        if variables.contains(word) {
            return Err(GrammarError::DuplicateWord {
                word: (*word).to_string(),
            });
        }
    }
    Ok(())
}

static MDAL_TABLE: Lazy<TokenTable> =
    Lazy::new(|| TokenTable::mdal().expect("built-in mdAL vocabulary is valid"));

/// The process-wide mdAL token table.
///
/// Built once on first access; immutable and safe to share across threads
/// without synchronization.
pub fn mdal_table() -> &'static TokenTable {
    &MDAL_TABLE
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_table_has_four_rules_in_order() {
        let table = mdal_table();
        let categories: Vec<Category> = table.categories().collect();
        assert_eq!(categories, Category::ALL);
        assert_eq!(table.rules().len(), 4);
    }

    #[test]
    fn test_every_keyword_matches_keyword_rule() {
        let rule = mdal_table().rule(Category::Keyword);
        for word in KEYWORDS {
            assert!(
                rule.matches_exactly(word),
                "keyword '{}' not matched in full",
                word
            );
        }
    }

    #[test]
    fn test_every_variable_matches_variable_rule() {
        let rule = mdal_table().rule(Category::Variable);
        for word in VARIABLES {
            assert!(
                rule.matches_exactly(word),
                "variable '{}' not matched in full",
                word
            );
        }
    }

    #[test]
    fn test_punctuation_rule_matches_each_symbol() {
        let rule = mdal_table().rule(Category::Punctuation);
        for ch in PUNCTUATION {
            assert!(rule.matches_exactly(&ch.to_string()));
        }
        assert!(!rule.matches_exactly("."));
        assert!(!rule.matches_exactly(":"));
    }

    #[test]
    fn test_comment_rule_runs_to_end_of_line() {
        let rule = mdal_table().rule(Category::Comment);
        let m = rule.find_at("// hello world", 0).unwrap();
        assert_eq!(m.as_str(), "// hello world");

        // Stops at the newline
        let m = rule.find_at("// first\nfield", 0).unwrap();
        assert_eq!(m.as_str(), "// first");
    }

    #[test]
    fn test_word_rules_respect_boundaries() {
        let keyword = mdal_table().rule(Category::Keyword);
        let variable = mdal_table().rule(Category::Variable);

        // No match inside a longer identifier, even mid-text
        assert!(variable.find_at("xtrue", 1).is_none());
        assert!(keyword.find_at("fieldName", 0).is_none());

        // Longest vocabulary word wins over its prefix
        let m = keyword.find_at("fields ", 0).unwrap();
        assert_eq!(m.as_str(), "fields");
        let m = keyword.find_at("documentPage{", 0).unwrap();
        assert_eq!(m.as_str(), "documentPage");
    }

    #[test]
    fn test_disjointness_violation_is_rejected() {
        let result = validate_disjoint(&["field", "Text"], &["Text", "true"]);
        assert_matches!(
            result,
            Err(GrammarError::DuplicateWord { word }) if word == "Text"
        );
    }
}
