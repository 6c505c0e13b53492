use super::super::domain::Idea;
use serde::Serialize;

/// One window into the filtered, sorted result set.
///
/// `total_items` and `total_pages` describe the pre-slice sequence so the
/// consumer can render pagination controls without a second query.
#[derive(Debug, Clone, Serialize)]
pub struct Page {
    pub items: Vec<Idea>,
    pub total_items: usize,
    pub total_pages: usize,
}

/// Headline statistics over the full, unfiltered collection.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogSummary {
    pub total_ideas: usize,
    pub high_score_ideas: usize,
    pub average_score: u8,
    pub niches: Vec<String>,
}
