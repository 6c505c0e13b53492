pub(crate) mod normalizer;

use super::domain::{CanonicalLabel, Idea};
use serde::Serialize;
use std::collections::HashSet;
use std::io::{Read, Write};
use std::path::Path;

/// Error raised while reading or writing the dataset file. Data-quality
/// problems inside a record are never errors; they are logged and the
/// record degrades per the scoring rules.
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("failed to read idea dataset: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid idea dataset JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("failed to write CSV export: {0}")]
    Csv(#[from] csv::Error),
}

/// Reader/writer for the flat JSON array that is the catalog's source of
/// truth, plus the tabular export consumers pull into spreadsheets.
pub struct IdeaDataset;

impl IdeaDataset {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<Idea>, DatasetError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(std::io::BufReader::new(file))
    }

    /// Parse a collection, canonicalizing categorical aliases as records
    /// deserialize. Duplicate ids and out-of-range numerics are logged for
    /// the maintenance tooling to clean up; only I/O and malformed JSON
    /// fail the load.
    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<Idea>, DatasetError> {
        let ideas: Vec<Idea> = serde_json::from_reader(reader)?;
        audit(&ideas);
        Ok(ideas)
    }

    pub fn write_to_path<P: AsRef<Path>>(path: P, ideas: &[Idea]) -> Result<(), DatasetError> {
        let file = std::fs::File::create(path)?;
        let mut writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, ideas)?;
        writer.flush()?;
        Ok(())
    }

    /// Write one header row plus one row per idea, in the given order.
    pub fn export_csv<W: Write>(writer: W, ideas: &[&Idea]) -> Result<(), DatasetError> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        for idea in ideas {
            csv_writer.serialize(ExportRow::from_idea(idea))?;
        }
        csv_writer.flush()?;
        Ok(())
    }
}

#[derive(Debug, Serialize)]
struct ExportRow<'a> {
    #[serde(rename = "Id")]
    id: &'a str,
    #[serde(rename = "Name")]
    name: &'a str,
    #[serde(rename = "Niche")]
    niche: &'a str,
    #[serde(rename = "URL")]
    url: &'a str,
    #[serde(rename = "MRR")]
    mrr: f64,
    #[serde(rename = "Score")]
    score: u8,
    #[serde(rename = "Complexity")]
    complexity: &'static str,
    #[serde(rename = "Competition")]
    competition: &'static str,
    #[serde(rename = "Date Added")]
    date_added: &'a str,
}

impl<'a> ExportRow<'a> {
    fn from_idea(idea: &'a Idea) -> Self {
        Self {
            id: &idea.id,
            name: &idea.name,
            niche: &idea.niche,
            url: &idea.url,
            mrr: idea.mrr,
            score: idea.score,
            complexity: idea.complexity.map(CanonicalLabel::label).unwrap_or(""),
            competition: idea.competition.map(CanonicalLabel::label).unwrap_or(""),
            date_added: idea.date_added.as_deref().unwrap_or(""),
        }
    }
}

fn audit(ideas: &[Idea]) {
    let mut seen = HashSet::new();
    for idea in ideas {
        if !seen.insert(idea.id.as_str()) {
            tracing::warn!(
                id = %idea.id,
                "duplicate idea id in dataset; run the dedup maintenance pass"
            );
        }
        if idea.mrr < 0.0 || idea.mvp_weeks < 0.0 || idea.maintenance_hours < 0.0 {
            tracing::warn!(id = %idea.id, "negative numeric field in dataset record");
        }
    }
}
