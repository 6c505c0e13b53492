use ideaboard::catalog::{
    recalculate, ChanceLevel, Competition, Complexity, IdeaCatalog, IdeaDataset, MarketProof,
    Passiveness, QueryParams, ScoringEngine, SortDirection, SortKey,
};

const DATASET: &str = r#"[
    {
        "id": "1",
        "name": "Churn Radar",
        "url": "https://example.com/churn-radar",
        "niche": "SaaS Analytics",
        "mrr": 12000,
        "complexity": 3,
        "mvpWk": 6,
        "firstDollarDays": 21,
        "comp": "Med",
        "platDep": "Low",
        "oneKMrrChance": "h",
        "marketProof": "yes",
        "revenuePotential": "High",
        "passiveness": "B",
        "maintHours": 12,
        "marketingEase": "Medium",
        "networkEffects": "Weak",
        "targetUser": "subscription founders",
        "acquisitionChannel": "content marketing",
        "dateAdded": "2025-02-10",
        "score": 0,
        "rationale": ""
    },
    {
        "id": "2",
        "name": "Inbox Digest",
        "url": "https://example.com/inbox-digest",
        "niche": "Newsletters",
        "mrr": 800,
        "complexity": "Very Low",
        "mvpWk": 2,
        "comp": "L",
        "platDep": "None",
        "oneKMrrChance": "M",
        "marketProof": "Yes",
        "revenuePotential": "Banana",
        "passiveness": "A",
        "maintHours": 3,
        "dateAdded": "2024-11-05",
        "score": 0,
        "rationale": ""
    },
    {
        "id": "3",
        "name": "Support Copilot",
        "url": "https://example.com/support-copilot",
        "niche": "AI Support Tools",
        "mrr": 95,
        "complexity": 4,
        "mvpWk": 10,
        "comp": "High",
        "platDep": "High",
        "oneKMrrChance": "L",
        "marketProof": "No",
        "revenuePotential": "Medium",
        "passiveness": "C",
        "maintHours": 30,
        "score": 0,
        "rationale": ""
    }
]"#;

#[test]
fn dataset_canonicalizes_aliases_at_ingestion() {
    let ideas = IdeaDataset::from_reader(DATASET.as_bytes()).expect("dataset parses");

    assert_eq!(ideas.len(), 3);
    assert_eq!(ideas[0].competition, Some(Competition::Medium));
    assert_eq!(ideas[0].one_k_mrr_chance, Some(ChanceLevel::High));
    assert_eq!(ideas[0].passiveness, Some(Passiveness::High));
    assert_eq!(ideas[1].complexity, Some(Complexity::VeryLow));
    assert_eq!(ideas[1].revenue_potential, None, "unknown label degrades");
    assert_eq!(ideas[1].market_proof, Some(MarketProof::Yes));
    assert_eq!(ideas[2].first_dollar_days, None);
}

#[test]
fn end_to_end_query_over_a_loaded_dataset() {
    let mut ideas = IdeaDataset::from_reader(DATASET.as_bytes()).expect("dataset parses");
    recalculate(&mut ideas);
    let catalog = IdeaCatalog::new(ideas);

    // "Support Copilot" sits under the MRR floor and never surfaces.
    let page = catalog.page(&QueryParams::default());
    assert_eq!(page.total_items, 2);
    assert_eq!(page.total_pages, 1);

    // Scores descend by default.
    let scores: Vec<u8> = page.items.iter().map(|idea| idea.score).collect();
    assert!(scores[0] >= scores[1]);

    // Every surfaced score matches a fresh engine run.
    for idea in &page.items {
        assert_eq!(idea.score, ScoringEngine::score(idea));
        assert_eq!(idea.score, ScoringEngine::breakdown(idea).total);
    }

    let by_niche = IdeaCatalog::sort(
        catalog.filter(&QueryParams::default()),
        SortKey::Niche,
        SortDirection::Ascending,
    );
    assert_eq!(by_niche[0].niche, "Newsletters");
    assert_eq!(by_niche[1].niche, "SaaS Analytics");

    // The sub-floor record still shows up in the aggregates.
    let summary = catalog.summary();
    assert_eq!(summary.total_ideas, 3);
    assert_eq!(
        summary.niches,
        vec!["AI Support Tools", "Newsletters", "SaaS Analytics"]
    );
}

#[test]
fn search_reaches_free_text_fields_after_load() {
    let mut ideas = IdeaDataset::from_reader(DATASET.as_bytes()).expect("dataset parses");
    recalculate(&mut ideas);
    let catalog = IdeaCatalog::new(ideas);

    let params = QueryParams {
        search: "subscription".to_string(),
        ..QueryParams::default()
    };
    let matched = catalog.filter(&params);
    assert_eq!(matched.len(), 1);
    assert_eq!(matched[0].name, "Churn Radar");
}

#[test]
fn csv_export_writes_a_header_and_one_row_per_idea() {
    let ideas = IdeaDataset::from_reader(DATASET.as_bytes()).expect("dataset parses");
    let catalog = IdeaCatalog::new(ideas);
    let filtered = catalog.filter(&QueryParams::default());

    let mut buffer = Vec::new();
    IdeaDataset::export_csv(&mut buffer, &filtered).expect("export succeeds");

    let text = String::from_utf8(buffer).expect("valid utf-8");
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), filtered.len() + 1);
    assert!(lines[0].starts_with("Id,Name,Niche,URL,MRR,Score"));
}
