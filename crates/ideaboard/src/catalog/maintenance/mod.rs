//! Batch operations run against the persisted collection: score
//! recalculation and duplicate removal. Both are pure over the in-memory
//! list and idempotent against an already-clean collection; the CLI wires
//! them to the dataset file.

use super::dataset::normalizer::{normalize_key, normalize_url};
use super::domain::Idea;
use super::scoring::ScoringEngine;
use std::collections::HashSet;

/// Outcome of a recalculation sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecalcOutcome {
    pub scanned: usize,
    pub updated: usize,
}

/// Recompute every record's score and rationale from its raw attributes.
/// Records whose stored values already match are left untouched, so a
/// second run over the same collection reports zero updates.
pub fn recalculate(ideas: &mut [Idea]) -> RecalcOutcome {
    let mut updated = 0;
    for idea in ideas.iter_mut() {
        let score = ScoringEngine::score(idea);
        let rationale = ScoringEngine::rationale(idea);
        if idea.score != score || idea.rationale != rationale {
            tracing::debug!(id = %idea.id, old = idea.score, new = score, "rescored idea");
            idea.score = score;
            idea.rationale = rationale;
            updated += 1;
        }
    }
    RecalcOutcome {
        scanned: ideas.len(),
        updated,
    }
}

/// Which attributes identify a duplicate record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DedupKey {
    Url,
    NameAndUrl,
}

/// Outcome of a dedup pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DedupOutcome {
    pub scanned: usize,
    pub removed: usize,
}

/// Drop every record whose key was already seen, keeping the first
/// occurrence, then renumber ids sequentially from 1.
pub fn dedup(ideas: &mut Vec<Idea>, key: DedupKey) -> DedupOutcome {
    let scanned = ideas.len();
    let mut seen = HashSet::new();
    ideas.retain(|idea| {
        let dedup_key = match key {
            DedupKey::Url => normalize_url(&idea.url),
            DedupKey::NameAndUrl => {
                format!("{}|{}", normalize_key(&idea.name), normalize_url(&idea.url))
            }
        };
        seen.insert(dedup_key)
    });
    renumber(ideas);
    DedupOutcome {
        scanned,
        removed: scanned - ideas.len(),
    }
}

/// Reissue ids as "1".."n" in current order. Only maintenance tooling may
/// touch ids; the engine and query layer treat them as opaque.
pub fn renumber(ideas: &mut [Idea]) {
    for (index, idea) in ideas.iter_mut().enumerate() {
        idea.id = (index + 1).to_string();
    }
}
