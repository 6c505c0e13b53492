mod filters;
mod views;

pub use filters::{
    AiFilter, QueryParams, SortDirection, SortKey, DEFAULT_PAGE_SIZE, MRR_FLOOR,
};
pub use views::{CatalogSummary, Page};

pub(crate) use filters::is_ai_related;

use super::domain::Idea;
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use std::cmp::Ordering;
use std::collections::BTreeSet;

/// Score at or above which an idea counts toward the high-score tally.
pub const HIGH_SCORE_THRESHOLD: u8 = 80;

/// The in-memory catalog: owns the full idea collection and recomputes
/// filtered, sorted, paginated views on demand.
///
/// Construct one instance per dataset load; there is no hidden global
/// state, so tests and tools can hold several independent catalogs.
pub struct IdeaCatalog {
    ideas: Vec<Idea>,
}

impl IdeaCatalog {
    /// Build a catalog over an already-loaded collection, precomputing the
    /// AI-relatedness flag for every record.
    pub fn new(mut ideas: Vec<Idea>) -> Self {
        for idea in &mut ideas {
            idea.ai_related = is_ai_related(&idea.niche, &idea.rationale);
        }
        Self { ideas }
    }

    /// The full, unfiltered collection.
    pub fn ideas(&self) -> &[Idea] {
        &self.ideas
    }

    /// Look up a single record by id.
    pub fn get(&self, id: &str) -> Option<&Idea> {
        self.ideas.iter().find(|idea| idea.id == id)
    }

    /// Every idea satisfying all active filters plus the fixed MRR floor.
    /// Relative order is unspecified until [`Self::sort`] runs.
    pub fn filter(&self, params: &QueryParams) -> Vec<&Idea> {
        self.ideas.iter().filter(|idea| params.matches(idea)).collect()
    }

    /// Stable sort of a filtered sequence. Niche compares
    /// case-insensitively; a missing or unparseable date-added sorts as
    /// epoch zero, i.e. first in ascending order.
    pub fn sort<'a>(
        mut ideas: Vec<&'a Idea>,
        key: SortKey,
        direction: SortDirection,
    ) -> Vec<&'a Idea> {
        ideas.sort_by(|a, b| {
            let ordering = match key {
                SortKey::Score => a.score.cmp(&b.score),
                SortKey::Mrr => a.mrr.total_cmp(&b.mrr),
                SortKey::MvpWeeks => a.mvp_weeks.total_cmp(&b.mvp_weeks),
                SortKey::Niche => compare_niches(&a.niche, &b.niche),
                SortKey::DateAdded => added_or_epoch(a).cmp(&added_or_epoch(b)),
            };
            match direction {
                SortDirection::Ascending => ordering,
                SortDirection::Descending => ordering.reverse(),
            }
        });
        ideas
    }

    /// Slice one 1-based page out of a sorted sequence. An out-of-range
    /// page (including page 0) yields empty items with the totals intact;
    /// resetting to a valid page is the caller's job.
    pub fn paginate(ideas: &[&Idea], page: usize, page_size: usize) -> Page {
        let total_items = ideas.len();
        if page_size == 0 {
            return Page {
                items: Vec::new(),
                total_items,
                total_pages: 0,
            };
        }
        let total_pages = total_items.div_ceil(page_size);
        let start = page.saturating_sub(1).saturating_mul(page_size);
        let items = if page == 0 || start >= total_items {
            Vec::new()
        } else {
            let end = (start + page_size).min(total_items);
            ideas[start..end].iter().map(|idea| (*idea).clone()).collect()
        };
        Page {
            items,
            total_items,
            total_pages,
        }
    }

    /// The filter -> sort -> paginate composite most consumers want.
    pub fn page(&self, params: &QueryParams) -> Page {
        let filtered = self.filter(params);
        let sorted = Self::sort(filtered, params.sort_key, params.sort_direction);
        Self::paginate(&sorted, params.page, params.page_size)
    }

    pub fn total_count(&self) -> usize {
        self.ideas.len()
    }

    /// Ideas scoring at or above [`HIGH_SCORE_THRESHOLD`].
    pub fn high_score_count(&self) -> usize {
        self.ideas
            .iter()
            .filter(|idea| idea.score >= HIGH_SCORE_THRESHOLD)
            .count()
    }

    /// Rounded mean score over the full collection; 0 for an empty
    /// catalog rather than a division by zero.
    pub fn average_score(&self) -> u8 {
        if self.ideas.is_empty() {
            return 0;
        }
        let sum: u32 = self.ideas.iter().map(|idea| u32::from(idea.score)).sum();
        (sum as f64 / self.ideas.len() as f64).round() as u8
    }

    /// Sorted, deduplicated niche values for filter-control population.
    pub fn distinct_niches(&self) -> Vec<String> {
        self.ideas
            .iter()
            .map(|idea| idea.niche.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Headline statistics bundled for the dashboard and CLI.
    pub fn summary(&self) -> CatalogSummary {
        CatalogSummary {
            total_ideas: self.total_count(),
            high_score_ideas: self.high_score_count(),
            average_score: self.average_score(),
            niches: self.distinct_niches(),
        }
    }
}

fn compare_niches(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

fn added_or_epoch(idea: &Idea) -> NaiveDateTime {
    idea.date_added
        .as_deref()
        .and_then(parse_date_added)
        .unwrap_or(NaiveDateTime::UNIX_EPOCH)
}

fn parse_date_added(value: &str) -> Option<NaiveDateTime> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.naive_utc());
    }

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0);
    }

    None
}
