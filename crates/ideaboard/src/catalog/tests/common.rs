use crate::catalog::domain::{
    ChanceLevel, Competition, Complexity, Idea, MarketProof, MarketingEase, NetworkEffects,
    Passiveness, PlatformDependency,
};

/// Baseline record with mid-range attributes; tests mutate what they need.
pub(super) fn idea(id: &str, niche: &str, mrr: f64) -> Idea {
    Idea {
        id: id.to_string(),
        name: format!("Idea {id}"),
        url: format!("https://example.com/ideas/{id}"),
        niche: niche.to_string(),
        mrr,
        complexity: Some(Complexity::Medium),
        mvp_weeks: 6.0,
        first_dollar_days: None,
        competition: Some(Competition::Medium),
        platform_dependency: Some(PlatformDependency::Low),
        one_k_mrr_chance: Some(ChanceLevel::Medium),
        market_proof: Some(MarketProof::Yes),
        revenue_potential: Some(ChanceLevel::Medium),
        passiveness: Some(Passiveness::High),
        maintenance_hours: 8.0,
        marketing_ease: None,
        network_effects: None,
        target_user: Some("indie developers".to_string()),
        acquisition_channel: Some("SEO".to_string()),
        date_added: Some("2025-03-01".to_string()),
        score: 0,
        rationale: String::new(),
        ai_related: false,
    }
}

/// Record hitting every top bucket; scores exactly 100.
pub(super) fn perfect_idea() -> Idea {
    let mut perfect = idea("max", "saas", 50_000.0);
    perfect.complexity = Some(Complexity::VeryLow);
    perfect.mvp_weeks = 2.0;
    perfect.first_dollar_days = Some(7.0);
    perfect.competition = Some(Competition::Low);
    perfect.platform_dependency = Some(PlatformDependency::None);
    perfect.one_k_mrr_chance = Some(ChanceLevel::High);
    perfect.market_proof = Some(MarketProof::Yes);
    perfect.revenue_potential = Some(ChanceLevel::High);
    perfect.passiveness = Some(Passiveness::VeryHigh);
    perfect.maintenance_hours = 5.0;
    perfect.marketing_ease = Some(MarketingEase::Easy);
    perfect.network_effects = Some(NetworkEffects::Strong);
    perfect
}

/// Record with nothing recognized and every numeric at its worst end.
pub(super) fn floor_idea() -> Idea {
    let mut floor = idea("min", "misc", 0.0);
    floor.complexity = None;
    floor.mvp_weeks = 999.0;
    floor.first_dollar_days = Some(999.0);
    floor.competition = None;
    floor.platform_dependency = None;
    floor.one_k_mrr_chance = None;
    floor.market_proof = None;
    floor.revenue_potential = None;
    floor.passiveness = None;
    floor.maintenance_hours = 999.0;
    floor.marketing_ease = None;
    floor.network_effects = None;
    floor
}

/// The worked scenario from the scoring rubric: expected total 60.
pub(super) fn scenario_idea() -> Idea {
    let mut scenario = idea("scenario", "newsletters", 2_000.0);
    scenario.complexity = Some(Complexity::Medium);
    scenario.mvp_weeks = 6.0;
    scenario.competition = Some(Competition::Low);
    scenario.platform_dependency = Some(PlatformDependency::Low);
    scenario.market_proof = Some(MarketProof::Yes);
    scenario.revenue_potential = Some(ChanceLevel::Medium);
    scenario.passiveness = Some(Passiveness::High);
    scenario.maintenance_hours = 8.0;
    scenario.first_dollar_days = None;
    scenario.marketing_ease = None;
    scenario.network_effects = None;
    scenario
}
