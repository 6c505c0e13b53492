//! Startup idea catalog: domain model, deterministic scoring, and the
//! in-memory query layer.
//!
//! The catalog is loaded once from a flat JSON array ([`dataset`]), scored
//! and re-scored by the pure [`scoring`] engine, browsed through
//! [`query::IdeaCatalog`], and cleaned up by the batch operations in
//! [`maintenance`].

pub mod dataset;
pub mod domain;
pub mod maintenance;
pub mod query;
pub mod scoring;

#[cfg(test)]
mod tests;

pub use dataset::{DatasetError, IdeaDataset};
pub use domain::{
    CanonicalLabel, ChanceLevel, Competition, Complexity, Idea, MarketProof, MarketingEase,
    NetworkEffects, Passiveness, PlatformDependency,
};
pub use maintenance::{dedup, recalculate, renumber, DedupKey, DedupOutcome, RecalcOutcome};
pub use query::{
    AiFilter, CatalogSummary, IdeaCatalog, Page, QueryParams, SortDirection, SortKey,
};
pub use scoring::{ScoreBreakdown, ScoreCategory, ScoreComponent, ScoringEngine};
