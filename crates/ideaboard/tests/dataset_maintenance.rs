use ideaboard::catalog::{dedup, recalculate, DedupKey, IdeaDataset, ScoringEngine};

const DIRTY_DATASET: &str = r#"[
    {
        "id": "12",
        "name": "Form Builder",
        "url": "https://example.com/forms",
        "niche": "No-code",
        "mrr": 2500,
        "complexity": 2,
        "mvpWk": 4,
        "comp": "Medium",
        "platDep": "Low",
        "marketProof": "Yes",
        "revenuePotential": "Medium",
        "passiveness": "B",
        "maintHours": 6,
        "score": 97,
        "rationale": "stale"
    },
    {
        "id": "12",
        "name": "Form Builder",
        "url": "https://example.com/forms/",
        "niche": "No-code",
        "mrr": 2500,
        "complexity": 2,
        "mvpWk": 4,
        "comp": "Medium",
        "platDep": "Low",
        "marketProof": "Yes",
        "revenuePotential": "Medium",
        "passiveness": "B",
        "maintHours": 6,
        "score": 97,
        "rationale": "stale"
    },
    {
        "id": "14",
        "name": "Invoice Chaser",
        "url": "https://example.com/invoices",
        "niche": "Fintech",
        "mrr": 1200,
        "complexity": 3,
        "mvpWk": 5,
        "comp": "Low",
        "platDep": "None",
        "marketProof": "Yes",
        "revenuePotential": "High",
        "passiveness": "A",
        "maintHours": 4,
        "score": 0,
        "rationale": ""
    }
]"#;

#[test]
fn maintenance_pass_round_trips_through_the_dataset_file() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("ideas.json");

    let mut ideas = IdeaDataset::from_reader(DIRTY_DATASET.as_bytes()).expect("dataset parses");

    let dedup_outcome = dedup(&mut ideas, DedupKey::Url);
    assert_eq!(dedup_outcome.scanned, 3);
    assert_eq!(dedup_outcome.removed, 1);

    let recalc_outcome = recalculate(&mut ideas);
    assert_eq!(recalc_outcome.scanned, 2);
    assert_eq!(recalc_outcome.updated, 2);

    IdeaDataset::write_to_path(&path, &ideas).expect("dataset writes");
    let reloaded = IdeaDataset::from_path(&path).expect("dataset reloads");

    assert_eq!(reloaded.len(), 2);
    assert_eq!(reloaded[0].id, "1");
    assert_eq!(reloaded[1].id, "2");
    for idea in &reloaded {
        assert_eq!(idea.score, ScoringEngine::score(idea));
        assert_eq!(idea.rationale, ScoringEngine::rationale(idea));
    }
}

#[test]
fn rerunning_maintenance_against_a_clean_file_changes_nothing() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("ideas.json");

    let mut ideas = IdeaDataset::from_reader(DIRTY_DATASET.as_bytes()).expect("dataset parses");
    dedup(&mut ideas, DedupKey::Url);
    recalculate(&mut ideas);
    IdeaDataset::write_to_path(&path, &ideas).expect("dataset writes");

    let mut reloaded = IdeaDataset::from_path(&path).expect("dataset reloads");
    assert_eq!(dedup(&mut reloaded, DedupKey::Url).removed, 0);
    assert_eq!(recalculate(&mut reloaded).updated, 0);

    IdeaDataset::write_to_path(&path, &reloaded).expect("second write");
    let settled = IdeaDataset::from_path(&path).expect("second reload");
    assert_eq!(settled, reloaded);
}

#[test]
fn canonical_labels_survive_the_write_read_cycle() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("ideas.json");

    let ideas = IdeaDataset::from_reader(DIRTY_DATASET.as_bytes()).expect("dataset parses");
    IdeaDataset::write_to_path(&path, &ideas).expect("dataset writes");

    let raw = std::fs::read_to_string(&path).expect("file readable");
    // "B" grades and the rest of the aliases are rewritten canonically.
    assert!(raw.contains("\"passiveness\": \"High\""));
    assert!(!raw.contains("\"passiveness\": \"B\""));

    let reloaded = IdeaDataset::from_path(&path).expect("dataset reloads");
    assert_eq!(reloaded, ideas);
}
