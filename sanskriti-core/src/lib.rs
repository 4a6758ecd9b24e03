//! Sanskriti AR Experience Engine
//!
//! Platform-agnostic core logic for the Sanskriti AR heritage experience.
//! This crate provides the reward ledger, achievement tracking, heritage quiz,
//! and souvenir generation pipeline without UI or browser-specific dependencies.

pub mod achievements;
pub mod config;
pub mod constants;
pub mod data;
pub mod quiz;
pub mod rewards;
pub mod souvenir;
pub mod timeline;

// Re-export commonly used types
pub use achievements::{AchievementEntry, AchievementTracker};
pub use config::{FieldSupport, GeneratorConfig, PayloadEncoding};
pub use data::{
    AchievementData, AchievementDef, ArtisanData, ArtisanWork, Monument, MonumentData, QuizData,
    QuizQuestion, RewardItem, RewardsData,
};
pub use quiz::{AdvanceToken, AnswerOutcome, QuizEngine, QuizPhase};
pub use rewards::{PurchaseError, RewardLedger};
pub use souvenir::{
    GenerationOutcome, PhotoUpload, SouvenirExtras, SouvenirForm, SouvenirPayload,
    SouvenirPipeline, SouvenirStatus, SouvenirTransport, TransportError, ValidationError,
    build_payload, interpret_body, resolve_outcome,
};
pub use timeline::{Era, TimelineView};
