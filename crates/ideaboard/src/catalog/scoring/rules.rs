use super::super::domain::{
    ChanceLevel, Competition, Idea, MarketProof, MarketingEase, NetworkEffects, Passiveness,
    PlatformDependency,
};
use super::{label_or, ScoreCategory, ScoreComponent};

/// Revenue (cap 25): MRR step function plus the revenue-potential bonus.
pub(crate) fn revenue_score(idea: &Idea) -> u8 {
    mrr_points(idea.mrr) + potential_points(idea.revenue_potential)
}

/// Market (cap 20): proof of demand plus competitive pressure.
pub(crate) fn market_score(idea: &Idea) -> u8 {
    let proof = match idea.market_proof {
        Some(MarketProof::Yes) => 10,
        _ => 0,
    };
    let competition = match idea.competition {
        Some(Competition::Low) => 10,
        Some(Competition::Medium) => 6,
        Some(Competition::High) => 2,
        None => 0,
    };
    proof + competition
}

/// Execution (cap 20): inverted complexity scale plus platform risk.
pub(crate) fn execution_score(idea: &Idea) -> u8 {
    let complexity = match idea.complexity.map(|value| value.level()) {
        Some(1) => 15,
        Some(2) => 12,
        Some(3) => 9,
        Some(4) => 6,
        Some(5) => 3,
        _ => 0,
    };
    let platform = match idea.platform_dependency {
        Some(PlatformDependency::None) => 5,
        Some(PlatformDependency::Low) => 4,
        Some(PlatformDependency::Medium) => 2,
        Some(PlatformDependency::High) | None => 0,
    };
    complexity + platform
}

/// Speed (cap 15): MVP build time plus time to first dollar. An absent
/// first-dollar figure contributes nothing rather than the bottom bucket.
pub(crate) fn speed_score(idea: &Idea) -> u8 {
    mvp_points(idea.mvp_weeks) + idea.first_dollar_days.map_or(0, first_dollar_points)
}

/// Growth (cap 10): marketing ease plus network effects.
pub(crate) fn growth_score(idea: &Idea) -> u8 {
    let marketing = match idea.marketing_ease {
        Some(MarketingEase::Easy) => 5,
        Some(MarketingEase::Medium) => 3,
        Some(MarketingEase::Hard) => 1,
        None => 0,
    };
    let network = match idea.network_effects {
        Some(NetworkEffects::Strong) => 5,
        Some(NetworkEffects::Weak) => 3,
        Some(NetworkEffects::None) | None => 0,
    };
    marketing + network
}

/// Operational (cap 10): passiveness grade plus monthly upkeep hours.
pub(crate) fn operational_score(idea: &Idea) -> u8 {
    let passiveness = match idea.passiveness {
        Some(Passiveness::VeryHigh) => 5,
        Some(Passiveness::High) => 4,
        Some(Passiveness::Medium) => 3,
        Some(Passiveness::Low) => 2,
        Some(Passiveness::VeryLow) => 1,
        None => 0,
    };
    passiveness + maintenance_points(idea.maintenance_hours)
}

fn mrr_points(mrr: f64) -> u8 {
    if mrr >= 50_000.0 {
        15
    } else if mrr >= 20_000.0 {
        13
    } else if mrr >= 10_000.0 {
        11
    } else if mrr >= 5_000.0 {
        9
    } else if mrr >= 2_000.0 {
        7
    } else if mrr >= 1_000.0 {
        5
    } else if mrr >= 500.0 {
        3
    } else if mrr >= 100.0 {
        1
    } else {
        0
    }
}

fn potential_points(potential: Option<ChanceLevel>) -> u8 {
    match potential {
        Some(ChanceLevel::High) => 10,
        Some(ChanceLevel::Medium) => 6,
        Some(ChanceLevel::Low) => 2,
        None => 0,
    }
}

fn mvp_points(mvp_weeks: f64) -> u8 {
    if mvp_weeks <= 2.0 {
        10
    } else if mvp_weeks <= 4.0 {
        8
    } else if mvp_weeks <= 8.0 {
        6
    } else if mvp_weeks <= 12.0 {
        4
    } else {
        2
    }
}

fn first_dollar_points(days: f64) -> u8 {
    if days <= 7.0 {
        5
    } else if days <= 14.0 {
        4
    } else if days <= 21.0 {
        3
    } else if days <= 30.0 {
        2
    } else {
        1
    }
}

fn maintenance_points(hours: f64) -> u8 {
    if hours <= 5.0 {
        5
    } else if hours <= 10.0 {
        4
    } else if hours <= 20.0 {
        3
    } else if hours <= 40.0 {
        2
    } else {
        1
    }
}

pub(crate) fn component_trail(idea: &Idea) -> Vec<ScoreComponent> {
    let first_dollar = idea
        .first_dollar_days
        .map(|days| format!("{days:.0} days to first dollar"))
        .unwrap_or_else(|| "first-dollar timing unknown".to_string());

    vec![
        ScoreComponent {
            category: ScoreCategory::Revenue,
            points: revenue_score(idea),
            notes: format!(
                "${:.0}/mo recurring revenue, {} ceiling",
                idea.mrr,
                label_or(idea.revenue_potential, "unrated")
            ),
        },
        ScoreComponent {
            category: ScoreCategory::Market,
            points: market_score(idea),
            notes: format!(
                "market proof {}, competition {}",
                label_or(idea.market_proof, "unknown"),
                label_or(idea.competition, "unknown")
            ),
        },
        ScoreComponent {
            category: ScoreCategory::Execution,
            points: execution_score(idea),
            notes: format!(
                "complexity {}, platform dependency {}",
                label_or(idea.complexity, "unknown"),
                label_or(idea.platform_dependency, "unknown")
            ),
        },
        ScoreComponent {
            category: ScoreCategory::Speed,
            points: speed_score(idea),
            notes: format!("MVP in {:.0} build units, {}", idea.mvp_weeks, first_dollar),
        },
        ScoreComponent {
            category: ScoreCategory::Growth,
            points: growth_score(idea),
            notes: format!(
                "marketing {}, network effects {}",
                label_or(idea.marketing_ease, "unknown"),
                label_or(idea.network_effects, "unknown")
            ),
        },
        ScoreComponent {
            category: ScoreCategory::Operational,
            points: operational_score(idea),
            notes: format!(
                "passiveness {}, {:.0} upkeep hours/month",
                label_or(idea.passiveness, "unknown"),
                idea.maintenance_hours
            ),
        },
    ]
}
