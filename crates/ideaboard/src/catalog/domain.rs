use serde::{Deserialize, Deserializer, Serialize};

/// One startup-opportunity record as stored in the catalog dataset.
///
/// Categorical fields are canonicalized at ingestion: the source data mixes
/// full words ("High"), single-letter codes ("H"), and legacy grade letters
/// ("A".."D") for the same concepts, so each field deserializes leniently
/// and an unrecognized value degrades to `None` instead of failing the
/// load. A `None` categorical contributes nothing to its scoring category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Idea {
    /// Unique within the collection; reissued sequentially by the dedup
    /// maintenance pass, never by the engine or query layer.
    pub id: String,
    #[serde(default)]
    pub name: String,
    /// Source link; primary dedup key.
    pub url: String,
    /// Free-text category, grouped via distinct-value extraction.
    pub niche: String,
    /// Monthly recurring revenue in currency units.
    #[serde(default)]
    pub mrr: f64,
    /// Build difficulty on the canonical 1-5 scale; the dataset may carry
    /// either the number or the word form.
    #[serde(default, deserialize_with = "complexity_lenient")]
    pub complexity: Option<Complexity>,
    /// Abstract build-time units; display unit is the consumer's call.
    #[serde(rename = "mvpWk", default)]
    pub mvp_weeks: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_dollar_days: Option<f64>,
    #[serde(rename = "comp", default, deserialize_with = "label_lenient")]
    pub competition: Option<Competition>,
    #[serde(rename = "platDep", default, deserialize_with = "label_lenient")]
    pub platform_dependency: Option<PlatformDependency>,
    #[serde(default, deserialize_with = "label_lenient")]
    pub one_k_mrr_chance: Option<ChanceLevel>,
    #[serde(default, deserialize_with = "label_lenient")]
    pub market_proof: Option<MarketProof>,
    #[serde(default, deserialize_with = "label_lenient")]
    pub revenue_potential: Option<ChanceLevel>,
    #[serde(default, deserialize_with = "label_lenient")]
    pub passiveness: Option<Passiveness>,
    /// Monthly upkeep hours.
    #[serde(rename = "maintHours", default)]
    pub maintenance_hours: f64,
    #[serde(default, deserialize_with = "label_lenient", skip_serializing_if = "Option::is_none")]
    pub marketing_ease: Option<MarketingEase>,
    #[serde(default, deserialize_with = "label_lenient", skip_serializing_if = "Option::is_none")]
    pub network_effects: Option<NetworkEffects>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_user: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub acquisition_channel: Option<String>,
    /// Optional date string; parsed lazily for sorting, missing or
    /// unparseable values sort as epoch zero.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_added: Option<String>,
    /// Derived 0-100 score; equals the engine output after any mutation of
    /// scoring inputs.
    #[serde(default)]
    pub score: u8,
    /// Human-readable justification, regenerated whenever the score is.
    #[serde(default)]
    pub rationale: String,
    /// Derived at catalog construction from niche and rationale text;
    /// never read from or written to the dataset file.
    #[serde(skip)]
    pub ai_related: bool,
}

/// Canonicalization contract shared by the catalog's categorical fields.
pub trait CanonicalLabel: Sized + Copy {
    /// Parse a raw dataset value, accepting known aliases case-insensitively.
    fn parse(raw: &str) -> Option<Self>;
    /// Canonical display label.
    fn label(self) -> &'static str;
}

/// Build difficulty, canonical numeric 1-5 with a word label for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Complexity {
    #[serde(rename = "Very Low")]
    VeryLow,
    Low,
    Medium,
    High,
    #[serde(rename = "Very High")]
    VeryHigh,
}

impl Complexity {
    pub const fn level(self) -> u8 {
        match self {
            Self::VeryLow => 1,
            Self::Low => 2,
            Self::Medium => 3,
            Self::High => 4,
            Self::VeryHigh => 5,
        }
    }

    pub const fn from_level(level: u8) -> Option<Self> {
        match level {
            1 => Some(Self::VeryLow),
            2 => Some(Self::Low),
            3 => Some(Self::Medium),
            4 => Some(Self::High),
            5 => Some(Self::VeryHigh),
            _ => None,
        }
    }
}

impl CanonicalLabel for Complexity {
    fn parse(raw: &str) -> Option<Self> {
        let value = raw.trim();
        if let Ok(level) = value.parse::<u8>() {
            return Self::from_level(level);
        }
        match value.to_ascii_lowercase().as_str() {
            "very low" => Some(Self::VeryLow),
            "low" => Some(Self::Low),
            "medium" | "med" => Some(Self::Medium),
            "high" => Some(Self::High),
            "very high" => Some(Self::VeryHigh),
            _ => None,
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::VeryLow => "Very Low",
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::VeryHigh => "Very High",
        }
    }
}

/// Competitive intensity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Competition {
    Low,
    Medium,
    High,
}

impl CanonicalLabel for Competition {
    fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "low" | "l" => Some(Self::Low),
            "medium" | "med" | "m" => Some(Self::Medium),
            "high" | "h" => Some(Self::High),
            _ => None,
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

/// Platform dependency risk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PlatformDependency {
    None,
    Low,
    Medium,
    High,
}

impl CanonicalLabel for PlatformDependency {
    fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "none" | "n" => Some(Self::None),
            "low" | "l" => Some(Self::Low),
            "medium" | "med" | "m" => Some(Self::Medium),
            "high" | "h" => Some(Self::High),
            _ => None,
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

/// Three-level likelihood scale shared by the revenue-threshold-chance and
/// revenue-potential fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ChanceLevel {
    High,
    Medium,
    Low,
}

impl CanonicalLabel for ChanceLevel {
    fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "high" | "h" => Some(Self::High),
            "medium" | "med" | "m" => Some(Self::Medium),
            "low" | "l" => Some(Self::Low),
            _ => None,
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }
}

/// Whether comparable validated products exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MarketProof {
    Yes,
    No,
}

impl CanonicalLabel for MarketProof {
    fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "yes" | "y" => Some(Self::Yes),
            "no" | "n" => Some(Self::No),
            _ => None,
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Yes => "Yes",
            Self::No => "No",
        }
    }
}

/// Post-launch hands-on burden, inverted: higher grades mean less work.
/// The legacy data uses grade letters A-D for the top four levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Passiveness {
    #[serde(rename = "Very High")]
    VeryHigh,
    High,
    Medium,
    Low,
    #[serde(rename = "Very Low")]
    VeryLow,
}

impl CanonicalLabel for Passiveness {
    fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "very high" | "a" => Some(Self::VeryHigh),
            "high" | "b" => Some(Self::High),
            "medium" | "med" | "c" => Some(Self::Medium),
            "low" | "d" => Some(Self::Low),
            "very low" => Some(Self::VeryLow),
            _ => None,
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::VeryHigh => "Very High",
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
            Self::VeryLow => "Very Low",
        }
    }
}

/// How easily the idea can be marketed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MarketingEase {
    Easy,
    Medium,
    Hard,
}

impl CanonicalLabel for MarketingEase {
    fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "easy" | "e" => Some(Self::Easy),
            "medium" | "med" | "m" => Some(Self::Medium),
            "hard" | "h" => Some(Self::Hard),
            _ => None,
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        }
    }
}

/// Strength of network effects once users are on board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum NetworkEffects {
    Strong,
    Weak,
    None,
}

impl CanonicalLabel for NetworkEffects {
    fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "strong" | "s" => Some(Self::Strong),
            "weak" | "w" => Some(Self::Weak),
            "none" | "n" => Some(Self::None),
            _ => None,
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Strong => "Strong",
            Self::Weak => "Weak",
            Self::None => "None",
        }
    }
}

fn label_lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: CanonicalLabel,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(T::parse))
}

fn complexity_lenient<'de, D>(deserializer: D) -> Result<Option<Complexity>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Level(f64),
        Label(String),
    }

    let raw = Option::<Raw>::deserialize(deserializer)?;
    Ok(raw.and_then(|raw| match raw {
        Raw::Level(level) if level.fract() == 0.0 && (1.0..=5.0).contains(&level) => {
            Complexity::from_level(level as u8)
        }
        Raw::Level(_) => None,
        Raw::Label(label) => Complexity::parse(&label),
    }))
}
