use super::super::domain::{ChanceLevel, Competition, Complexity, Idea};

/// Fixed revenue floor applied to every query; records below it never
/// surface regardless of the other filter settings.
pub const MRR_FLOOR: f64 = 100.0;

/// Page size used when neither the caller nor the environment sets one.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Substrings marking an idea as AI-related. Matched against the
/// lower-cased niche+rationale text; several entries carry significant
/// whitespace so that bare "ai"/"ml"/"smart" tokens only match as words.
const AI_KEYWORDS: [&str; 13] = [
    "ai ",
    "artificial intelligence",
    "machine learning",
    "ml ",
    "chatbot",
    "gpt",
    "llm",
    "ai-",
    "automation",
    "intelligent",
    "smart ",
    "neural",
    "deep learning",
];

/// Classify an idea from its current text. The catalog precomputes this
/// once per record at construction; maintenance passes that rewrite the
/// rationale rebuild the catalog and pick up the new classification.
pub(crate) fn is_ai_related(niche: &str, rationale: &str) -> bool {
    // Trailing space lets the "ai " and "smart " keywords match a terminal
    // token.
    let haystack = format!("{niche} {rationale} ").to_lowercase();
    AI_KEYWORDS.iter().any(|keyword| haystack.contains(keyword))
}

/// AI-relatedness filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AiFilter {
    #[default]
    All,
    AiOnly,
    NonAi,
}

/// Sort key for the listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    Score,
    Mrr,
    MvpWeeks,
    Niche,
    DateAdded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    Ascending,
    #[default]
    Descending,
}

/// Caller-owned query state: filters, sort, and pagination window.
///
/// `None`/empty means "All" for the respective filter. Values are plain
/// data; the catalog never mutates them.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryParams {
    pub search: String,
    pub niches: Vec<String>,
    pub competition: Option<Competition>,
    pub complexity: Option<Complexity>,
    pub chance: Option<ChanceLevel>,
    pub ai: AiFilter,
    pub sort_key: SortKey,
    pub sort_direction: SortDirection,
    /// 1-based; an out-of-range page yields an empty slice and the caller
    /// resets to page 1.
    pub page: usize,
    pub page_size: usize,
}

impl Default for QueryParams {
    fn default() -> Self {
        Self {
            search: String::new(),
            niches: Vec::new(),
            competition: None,
            complexity: None,
            chance: None,
            ai: AiFilter::All,
            sort_key: SortKey::default(),
            sort_direction: SortDirection::default(),
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl QueryParams {
    /// True iff any filter differs from its default "All"/empty state.
    /// Sort and pagination settings are not filters.
    pub fn has_active_filters(&self) -> bool {
        !self.search.is_empty()
            || !self.niches.is_empty()
            || self.competition.is_some()
            || self.complexity.is_some()
            || self.chance.is_some()
            || self.ai != AiFilter::All
    }

    pub(crate) fn matches(&self, idea: &Idea) -> bool {
        idea.mrr >= MRR_FLOOR
            && self.matches_search(idea)
            && (self.niches.is_empty() || self.niches.iter().any(|niche| *niche == idea.niche))
            && self.competition.map_or(true, |filter| idea.competition == Some(filter))
            && self.complexity.map_or(true, |filter| idea.complexity == Some(filter))
            && self.chance.map_or(true, |filter| idea.one_k_mrr_chance == Some(filter))
            && match self.ai {
                AiFilter::All => true,
                AiFilter::AiOnly => idea.ai_related,
                AiFilter::NonAi => !idea.ai_related,
            }
    }

    fn matches_search(&self, idea: &Idea) -> bool {
        if self.search.is_empty() {
            return true;
        }
        let needle = self.search.to_lowercase();
        let mut fields = [
            Some(idea.niche.as_str()),
            Some(idea.rationale.as_str()),
            idea.target_user.as_deref(),
            idea.acquisition_channel.as_deref(),
        ]
        .into_iter()
        .flatten();
        fields.any(|field| field.to_lowercase().contains(&needle))
    }
}
