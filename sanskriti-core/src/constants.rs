//! Fixed tuning values for the experience layer.

/// Culture Coins granted for a correct quiz answer.
pub const QUIZ_BONUS_COINS: u32 = 10;

/// How long the answer reveal stays on screen before the next question, in milliseconds.
pub const REVEAL_DWELL_MS: u32 = 3000;

/// Upper bound for an uploaded visitor photo, in bytes.
pub const MAX_PHOTO_BYTES: u64 = 5 * 1024 * 1024;

/// Result reference substituted when the generation service only acknowledges
/// that the workflow started; the real asset is produced out of band.
pub const PLACEHOLDER_IMAGE_URL: &str =
    "https://via.placeholder.com/512x512/f59e0b/ffffff?text=Heritage+Souvenir+Generated";

/// Suffix appended to the visitor name when saving a generated souvenir.
pub const DOWNLOAD_SUFFIX: &str = "_Heritage_Souvenir.png";

/// Acknowledgement message the webhook sends for an async-accepted job.
pub const WORKFLOW_STARTED_MESSAGE: &str = "Workflow was started";

/// Hero carousel rotation period, in milliseconds.
pub const HERO_ROTATE_MS: u32 = 5000;
