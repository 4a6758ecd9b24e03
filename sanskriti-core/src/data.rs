//! Static content catalogs for the experience surfaces.
//!
//! All catalogs ship as JSON assets under the web crate's static directory and
//! are embedded here so the core crate can hand out typed data everywhere.
use serde::{Deserialize, Serialize};

const DEFAULT_QUIZ_DATA: &str =
    include_str!("../../sanskriti-web/static/assets/data/quiz.json");
const DEFAULT_ACHIEVEMENT_DATA: &str =
    include_str!("../../sanskriti-web/static/assets/data/achievements.json");
const DEFAULT_REWARDS_DATA: &str =
    include_str!("../../sanskriti-web/static/assets/data/rewards.json");
const DEFAULT_ARTISAN_DATA: &str =
    include_str!("../../sanskriti-web/static/assets/data/artisans.json");
const DEFAULT_MONUMENT_DATA: &str =
    include_str!("../../sanskriti-web/static/assets/data/monuments.json");

/// A single heritage quiz question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub prompt: String,
    pub options: Vec<String>,
    /// Index into `options` of the right answer.
    pub correct: usize,
    /// Shown on the reveal panel after answering.
    #[serde(default)]
    pub fact: String,
}

/// Container for the quiz catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct QuizData {
    pub questions: Vec<QuizQuestion>,
}

impl QuizData {
    /// Load the quiz catalog from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON cannot be parsed.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    #[must_use]
    pub fn load_from_static() -> Self {
        serde_json::from_str(DEFAULT_QUIZ_DATA).unwrap_or_default()
    }
}

/// Catalog definition of one achievement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AchievementDef {
    pub id: String,
    pub title: String,
    pub desc: String,
    /// Progress count required for completion. Always positive.
    pub target: u32,
    /// Culture Coins paid out when the target is reached.
    pub reward_coins: u32,
    /// Progress already made when the session starts.
    #[serde(default)]
    pub start_progress: u32,
}

/// Container for the achievement catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct AchievementData {
    pub achievements: Vec<AchievementDef>,
}

impl AchievementData {
    /// Load the achievement catalog from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON cannot be parsed.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    #[must_use]
    pub fn load_from_static() -> Self {
        serde_json::from_str(DEFAULT_ACHIEVEMENT_DATA).unwrap_or_default()
    }
}

/// A purchasable digital reward.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewardItem {
    pub id: String,
    pub title: String,
    pub desc: String,
    /// Price in Culture Coins.
    pub cost: u32,
    /// certificate, 3d-model, wallpaper or pass; drives the card artwork.
    pub kind: String,
}

fn default_starting_balance() -> u32 {
    155
}

/// Reward shop catalog plus the ledger's starting point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewardsData {
    #[serde(default = "default_starting_balance")]
    pub starting_balance: u32,
    #[serde(default)]
    pub starting_owned: Vec<String>,
    pub items: Vec<RewardItem>,
}

impl Default for RewardsData {
    fn default() -> Self {
        Self {
            starting_balance: default_starting_balance(),
            starting_owned: Vec::new(),
            items: Vec::new(),
        }
    }
}

impl RewardsData {
    /// Load the reward catalog from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON cannot be parsed.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    #[must_use]
    pub fn load_from_static() -> Self {
        serde_json::from_str(DEFAULT_REWARDS_DATA).unwrap_or_default()
    }
}

/// One artisan piece in the showcase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtisanWork {
    pub id: String,
    pub title: String,
    pub artist: String,
    pub desc: String,
    /// Display price, already formatted (e.g. "₹2,500").
    pub price: String,
    pub rating: f32,
    pub category: String,
    #[serde(default)]
    pub in_stock: bool,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub image: String,
}

/// Container for the artisan showcase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ArtisanData {
    pub works: Vec<ArtisanWork>,
}

impl ArtisanData {
    /// Load the artisan catalog from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON cannot be parsed.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    #[must_use]
    pub fn load_from_static() -> Self {
        serde_json::from_str(DEFAULT_ARTISAN_DATA).unwrap_or_default()
    }

    /// Distinct categories in catalog order, for the filter bar.
    #[must_use]
    pub fn categories(&self) -> Vec<String> {
        let mut seen = Vec::new();
        for work in &self.works {
            if !seen.contains(&work.category) {
                seen.push(work.category.clone());
            }
        }
        seen
    }
}

/// A monument featured on the hero carousel and AR surfaces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Monument {
    pub id: String,
    pub name: String,
    pub image: String,
    #[serde(default)]
    pub blurb: String,
    /// External AR viewer link, when one exists for the site.
    #[serde(default)]
    pub ar_url: Option<String>,
}

/// Container for the monument catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct MonumentData {
    pub monuments: Vec<Monument>,
}

impl MonumentData {
    /// Load the monument catalog from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON cannot be parsed.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    #[must_use]
    pub fn load_from_static() -> Self {
        serde_json::from_str(DEFAULT_MONUMENT_DATA).unwrap_or_default()
    }
}
