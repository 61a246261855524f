//! Reference highlighting engine for the mdAL token pattern table
//!
//! Implements the host-engine contract the table is declared for: scan
//! source text left to right, at each position try the rules in table
//! order, assign the first matching rule's category to the longest valid
//! match, then resume after the matched span. Positions where no rule
//! matches are plain text and produce no token.
use crate::span::{Position, Span, Spanned};
use log::{debug, trace};
use mdal_grammar::{mdal_table, Category, TokenRule, TokenTable};
use serde::Serialize;

/// A classified span of mdAL source text
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    /// Highlighting category from the table
    pub category: Category,
    /// The matched text
    pub text: String,
}

/// A token with its source location
pub type SpannedToken = Spanned<Token>;

/// Per-scan highlighting metrics
#[derive(Debug, Default, Clone)]
pub struct HighlightMetrics {
    pub comment_tokens: usize,
    pub keyword_tokens: usize,
    pub variable_tokens: usize,
    pub punctuation_tokens: usize,
    /// Bytes of source that matched no rule
    pub plain_bytes: usize,
}

impl HighlightMetrics {
    fn record_token(&mut self, category: Category) {
        match category {
            Category::Comment => self.comment_tokens += 1,
            Category::Keyword => self.keyword_tokens += 1,
            Category::Variable => self.variable_tokens += 1,
            Category::Punctuation => self.punctuation_tokens += 1,
        }
    }

    /// Total classified tokens across all categories
    pub fn total_tokens(&self) -> usize {
        self.comment_tokens + self.keyword_tokens + self.variable_tokens + self.punctuation_tokens
    }
}

/// First-match-wins scanner over an mdAL token table
pub struct Highlighter<'g> {
    table: &'g TokenTable,
    metrics: HighlightMetrics,
}

impl Highlighter<'static> {
    /// Create a highlighter over the process-wide mdAL table
    pub fn new() -> Self {
        Self::with_table(mdal_table())
    }
}

impl<'g> Highlighter<'g> {
    /// Create a highlighter over a specific table
    pub fn with_table(table: &'g TokenTable) -> Self {
        Self {
            table,
            metrics: HighlightMetrics::default(),
        }
    }

    /// Scan `source` and return its classified tokens in source order.
    ///
    /// Unmatched plain text (identifiers outside the vocabularies, string
    /// contents, numbers, whitespace) is skipped without producing tokens.
    pub fn highlight(&mut self, source: &str) -> Vec<SpannedToken> {
        self.metrics = HighlightMetrics::default();

        debug!(
            "starting highlight scan: {} bytes, {} rules",
            source.len(),
            self.table.rules().len()
        );

        let mut tokens = Vec::new();
        let mut pos = Position::start();

        while pos.offset < source.len() {
            match self.match_rule(source, pos.offset) {
                Some((category, matched)) => {
                    let end = pos.advance_str(matched);
                    let span = Span::new(pos, end);
                    trace!("{} token '{}' at {}", category, matched, span);

                    self.metrics.record_token(category);
                    tokens.push(Spanned::new(
                        Token {
                            category,
                            text: matched.to_string(),
                        },
                        span,
                    ));
                    pos = end;
                }
                None => {
                    // Plain text: no token, advance one character
                    let Some(ch) = source[pos.offset..].chars().next() else {
                        break;
                    };
                    self.metrics.plain_bytes += ch.len_utf8();
                    pos = pos.advance(ch);
                }
            }
        }

        debug!(
            "highlight scan complete: {} tokens ({} comment, {} keyword, {} variable, {} punctuation), {} plain bytes",
            self.metrics.total_tokens(),
            self.metrics.comment_tokens,
            self.metrics.keyword_tokens,
            self.metrics.variable_tokens,
            self.metrics.punctuation_tokens,
            self.metrics.plain_bytes
        );

        tokens
    }

    /// Get metrics from the most recent scan
    pub fn metrics(&self) -> &HighlightMetrics {
        &self.metrics
    }

    /// Try the rules in table order at `offset`; first match wins
    fn match_rule<'t>(&self, source: &'t str, offset: usize) -> Option<(Category, &'t str)> {
        self.table
            .rules()
            .iter()
            .find_map(|rule: &TokenRule| {
                rule.find_at(source, offset)
                    .map(|m| (rule.category(), m.as_str()))
            })
    }
}

impl Default for Highlighter<'static> {
    fn default() -> Self {
        Self::new()
    }
}
