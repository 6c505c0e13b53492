use ideaboard::catalog::{
    CanonicalLabel, ChanceLevel, Competition, Complexity, DedupKey, Idea, IdeaDataset, SortKey,
};
use ideaboard::config::AppConfig;
use ideaboard::error::AppError;
use std::path::{Path, PathBuf};

pub(crate) fn dataset_path(config: &AppConfig, override_path: Option<&PathBuf>) -> PathBuf {
    override_path
        .cloned()
        .unwrap_or_else(|| config.dataset.path.clone())
}

pub(crate) fn load_ideas(path: &Path) -> Result<Vec<Idea>, AppError> {
    IdeaDataset::from_path(path).map_err(AppError::from)
}

pub(crate) fn parse_competition(raw: &str) -> Result<Competition, String> {
    Competition::parse(raw)
        .ok_or_else(|| format!("unknown competition level '{raw}' (expected Low, Medium, or High)"))
}

pub(crate) fn parse_complexity(raw: &str) -> Result<Complexity, String> {
    Complexity::parse(raw)
        .ok_or_else(|| format!("unknown complexity '{raw}' (expected 1-5 or Very Low..Very High)"))
}

pub(crate) fn parse_chance(raw: &str) -> Result<ChanceLevel, String> {
    ChanceLevel::parse(raw)
        .ok_or_else(|| format!("unknown chance level '{raw}' (expected High, Medium, or Low)"))
}

pub(crate) fn parse_sort_key(raw: &str) -> Result<SortKey, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "score" => Ok(SortKey::Score),
        "mrr" => Ok(SortKey::Mrr),
        "mvp" | "mvp-weeks" => Ok(SortKey::MvpWeeks),
        "niche" => Ok(SortKey::Niche),
        "date" | "date-added" => Ok(SortKey::DateAdded),
        _ => Err(format!(
            "unknown sort key '{raw}' (expected score, mrr, mvp, niche, or date)"
        )),
    }
}

pub(crate) fn parse_dedup_key(raw: &str) -> Result<DedupKey, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "url" => Ok(DedupKey::Url),
        "name-url" | "name+url" => Ok(DedupKey::NameAndUrl),
        _ => Err(format!("unknown dedup key '{raw}' (expected url or name-url)")),
    }
}
