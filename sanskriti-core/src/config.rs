//! Generation service configuration.
//!
//! The souvenir pipeline talks to one external capability: an image-generation
//! webhook. Everything that varies between deployments of that capability
//! (endpoint, credential, wire encoding, which optional payload fields the
//! surface supports) lives here, supplied at construction time rather than
//! compiled into source.
use serde::{Deserialize, Serialize};

const DEFAULT_GENERATOR_CONFIG: &str =
    include_str!("../../sanskriti-web/static/assets/data/generator.json");

/// How the outbound payload is wire-encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PayloadEncoding {
    Json,
    #[default]
    FormData,
}

/// Which optional payload fields the calling surface supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct FieldSupport {
    #[serde(default)]
    pub style: bool,
    #[serde(default)]
    pub monument: bool,
    #[serde(default)]
    pub include_logo: bool,
}

/// Connection settings for the generation webhook.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    pub endpoint: String,
    /// Bearer credential, when the concrete service needs one. Never embed
    /// literals in source; inject via this config.
    #[serde(default)]
    pub auth_token: Option<String>,
    #[serde(default)]
    pub encoding: PayloadEncoding,
    #[serde(default)]
    pub fields: FieldSupport,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            endpoint: String::new(),
            auth_token: None,
            encoding: PayloadEncoding::default(),
            fields: FieldSupport::default(),
        }
    }
}

impl GeneratorConfig {
    /// Load the generator configuration from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON cannot be parsed.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    #[must_use]
    pub fn load_from_static() -> Self {
        serde_json::from_str(DEFAULT_GENERATOR_CONFIG).unwrap_or_default()
    }
}
