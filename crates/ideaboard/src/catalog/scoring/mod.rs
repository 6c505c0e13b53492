mod rules;

use super::domain::{CanonicalLabel, Competition, Idea, MarketProof};
use serde::Serialize;

/// Upper bound of the total score; the six category caps sum to exactly
/// this value, so the clamp in [`ScoringEngine::breakdown`] is defensive.
pub const MAX_SCORE: u8 = 100;

/// Stateless engine mapping one idea's raw attributes to a 0-100 score.
///
/// Pure and total: unknown or missing categorical values contribute
/// nothing to their category, numeric fields fall through fixed threshold
/// tables, and no input can fail. Results depend on nothing but the record
/// itself.
pub struct ScoringEngine;

impl ScoringEngine {
    /// Total score in `[0, MAX_SCORE]`.
    pub fn score(idea: &Idea) -> u8 {
        Self::breakdown(idea).total
    }

    /// Per-category sub-scores; `total` always equals [`Self::score`].
    pub fn breakdown(idea: &Idea) -> ScoreBreakdown {
        let revenue = rules::revenue_score(idea);
        let market = rules::market_score(idea);
        let execution = rules::execution_score(idea);
        let speed = rules::speed_score(idea);
        let growth = rules::growth_score(idea);
        let operational = rules::operational_score(idea);

        let raw: u16 = [revenue, market, execution, speed, growth, operational]
            .iter()
            .map(|points| u16::from(*points))
            .sum();

        ScoreBreakdown {
            revenue,
            market,
            execution,
            speed,
            growth,
            operational,
            total: raw.min(u16::from(MAX_SCORE)) as u8,
        }
    }

    /// One component per category with points and a human-readable note,
    /// the audit trail detail views and rationale generation run on.
    pub fn components(idea: &Idea) -> Vec<ScoreComponent> {
        rules::component_trail(idea)
    }

    /// Deterministic justification for the current score. Maintenance
    /// tooling regenerates this whenever the score is recomputed.
    pub fn rationale(idea: &Idea) -> String {
        let breakdown = Self::breakdown(idea);
        let mut highlights: Vec<String> = Vec::new();
        let mut cautions: Vec<String> = Vec::new();

        match idea.market_proof {
            Some(MarketProof::Yes) => {
                highlights.push("proven demand from comparable products".to_string());
            }
            _ => cautions.push("no validated comparable yet".to_string()),
        }
        match idea.competition {
            Some(Competition::Low) => highlights.push("low competitive pressure".to_string()),
            Some(Competition::High) => cautions.push("crowded market".to_string()),
            _ => {}
        }
        if breakdown.revenue >= 18 {
            highlights.push(format!("${:.0}/mo revenue benchmark", idea.mrr));
        } else if breakdown.revenue <= 6 {
            cautions.push("thin revenue evidence".to_string());
        }
        if breakdown.execution >= 14 {
            highlights.push("light build with little platform risk".to_string());
        } else if breakdown.execution <= 6 {
            cautions.push("heavy build or platform exposure".to_string());
        }
        if breakdown.speed >= 11 {
            highlights.push("quick path to a first release".to_string());
        }
        if breakdown.operational >= 8 {
            highlights.push("low upkeep once launched".to_string());
        } else if breakdown.operational <= 3 {
            cautions.push("hands-on to operate".to_string());
        }

        let mut rationale = format!("Scores {}/{MAX_SCORE}.", breakdown.total);
        if !highlights.is_empty() {
            rationale.push_str(&format!(" Strengths: {}.", highlights.join(", ")));
        }
        if !cautions.is_empty() {
            rationale.push_str(&format!(" Watch-outs: {}.", cautions.join(", ")));
        }
        rationale
    }
}

/// The six scoring categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ScoreCategory {
    Revenue,
    Market,
    Execution,
    Speed,
    Growth,
    Operational,
}

impl ScoreCategory {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Revenue => "Revenue",
            Self::Market => "Market",
            Self::Execution => "Execution",
            Self::Speed => "Speed",
            Self::Growth => "Growth",
            Self::Operational => "Operational",
        }
    }

    /// Category cap; the caps sum to [`MAX_SCORE`].
    pub const fn cap(self) -> u8 {
        match self {
            Self::Revenue => 25,
            Self::Market => 20,
            Self::Execution => 20,
            Self::Speed => 15,
            Self::Growth => 10,
            Self::Operational => 10,
        }
    }
}

/// Discrete contribution to a score, allowing transparent audits.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreComponent {
    pub category: ScoreCategory,
    pub points: u8,
    pub notes: String,
}

/// Per-category sub-scores plus the clamped total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoreBreakdown {
    pub revenue: u8,
    pub market: u8,
    pub execution: u8,
    pub speed: u8,
    pub growth: u8,
    pub operational: u8,
    pub total: u8,
}

pub(crate) fn label_or<T: CanonicalLabel>(value: Option<T>, fallback: &'static str) -> &'static str {
    value.map(CanonicalLabel::label).unwrap_or(fallback)
}
