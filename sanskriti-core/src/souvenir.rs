//! Souvenir generation pipeline.
//!
//! Collects the visitor's profile fields and an optional photo, submits one
//! request to the external generation service, and tracks the
//! pending/success/failure lifecycle. At most one request per pipeline is in
//! flight: `begin_submit` is only legal outside `Submitting`, so single-flight
//! falls out of the state machine rather than a lock.
use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

use crate::config::GeneratorConfig;
use crate::constants::{
    DOWNLOAD_SUFFIX, MAX_PHOTO_BYTES, PLACEHOLDER_IMAGE_URL, WORKFLOW_STARTED_MESSAGE,
};

/// A field or photo problem, surfaced to the visitor immediately and never
/// propagated further. No state mutates when one of these is returned.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("name is required")]
    MissingName,
    #[error("age is required")]
    MissingAge,
    #[error("age must be a number")]
    AgeNotNumeric,
    #[error("photo must be smaller than 5 MB")]
    PhotoTooLarge,
    #[error("uploaded file is not an image")]
    PhotoNotImage,
    #[error("a souvenir request is already active")]
    AlreadyActive,
}

/// A failed exchange with the generation service. Terminal for the attempt;
/// resubmission is always user-initiated.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TransportError {
    #[error("generation service returned HTTP {status} {status_text}")]
    Http { status: u16, status_text: String },
    #[error("network error: {0}")]
    Network(String),
    #[error("unexpected response from generation service")]
    UnexpectedResponse,
}

/// Metadata for a photo the visitor attached. The raw bytes stay with the
/// platform layer; only size and type matter for validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoUpload {
    pub file_name: String,
    pub size_bytes: u64,
    pub mime_type: String,
}

/// The visitor-supplied profile fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SouvenirForm {
    pub name: String,
    pub age: String,
    pub email: String,
    pub phone: String,
    photo: Option<PhotoUpload>,
}

impl SouvenirForm {
    /// The attached photo, if any.
    #[must_use]
    pub const fn photo(&self) -> Option<&PhotoUpload> {
        self.photo.as_ref()
    }

    /// Attach a photo, validating it at assignment time.
    ///
    /// # Errors
    ///
    /// Rejects files over the size cap or without an `image/` MIME type;
    /// the previous photo (if any) is kept in that case.
    pub fn attach_photo(&mut self, photo: PhotoUpload) -> Result<(), ValidationError> {
        if photo.size_bytes > MAX_PHOTO_BYTES {
            return Err(ValidationError::PhotoTooLarge);
        }
        if !photo.mime_type.starts_with("image/") {
            return Err(ValidationError::PhotoNotImage);
        }
        self.photo = Some(photo);
        Ok(())
    }

    /// Remove the attached photo.
    pub fn clear_photo(&mut self) {
        self.photo = None;
    }

    fn check_required(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::MissingName);
        }
        let age = self.age.trim();
        if age.is_empty() {
            return Err(ValidationError::MissingAge);
        }
        if age.parse::<u32>().is_err() {
            return Err(ValidationError::AgeNotNumeric);
        }
        Ok(())
    }
}

/// Lifecycle of one souvenir request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SouvenirStatus {
    #[default]
    Idle,
    Submitting,
    Succeeded(String),
    Failed(String),
}

/// Optional flourishes a richer surface may add to the payload. Whether they
/// actually go out on the wire is decided by the configured [`FieldSupport`].
///
/// [`FieldSupport`]: crate::config::FieldSupport
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SouvenirExtras {
    pub style: Option<String>,
    pub monument: Option<String>,
    pub include_logo: Option<bool>,
}

/// The outbound request body for the generation service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SouvenirPayload {
    pub user_name: String,
    pub age: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_base64: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monument: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_logo: Option<bool>,
}

impl SouvenirPayload {
    /// The payload flattened to key/value pairs for multipart form encoding.
    /// The webhook expects a leading `status` marker field.
    #[must_use]
    pub fn form_entries(&self) -> Vec<(&'static str, String)> {
        let mut entries = vec![
            ("status", "success".to_string()),
            ("user_name", self.user_name.clone()),
            ("age", self.age.clone()),
        ];
        if let Some(email) = &self.email {
            entries.push(("email", email.clone()));
        }
        if let Some(phone) = &self.phone {
            entries.push(("phone", phone.clone()));
        }
        if let Some(photo) = &self.photo_base64 {
            entries.push(("photo_base64", photo.clone()));
        }
        if let Some(style) = &self.style {
            entries.push(("style", style.clone()));
        }
        if let Some(monument) = &self.monument {
            entries.push(("monument", monument.clone()));
        }
        if let Some(include_logo) = self.include_logo {
            entries.push(("include_logo", include_logo.to_string()));
        }
        entries
    }
}

/// What a successful exchange with the generation service produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationOutcome {
    /// The service returned the finished asset directly.
    Image(String),
    /// The service only acknowledged the job; the asset arrives out of band.
    Accepted,
}

/// The single request/response exchange with the generation service.
/// Implementations live with the platform layer; variants of the service
/// become configuration rather than new pipelines.
#[async_trait(?Send)]
pub trait SouvenirTransport {
    /// Perform one POST exchange. No retry, no backoff.
    async fn submit(
        &self,
        cfg: &GeneratorConfig,
        payload: &SouvenirPayload,
    ) -> Result<GenerationOutcome, TransportError>;
}

fn none_if_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Assemble the outbound payload from the form, the configured field support,
/// and the photo already encoded as a data URI by the platform layer.
#[must_use]
pub fn build_payload(
    form: &SouvenirForm,
    cfg: &GeneratorConfig,
    photo_data_url: Option<String>,
    extras: &SouvenirExtras,
) -> SouvenirPayload {
    SouvenirPayload {
        user_name: form.name.trim().to_string(),
        age: form.age.trim().to_string(),
        email: none_if_empty(&form.email),
        phone: none_if_empty(&form.phone),
        photo_base64: photo_data_url,
        style: cfg.fields.style.then(|| extras.style.clone()).flatten(),
        monument: cfg
            .fields
            .monument
            .then(|| extras.monument.clone())
            .flatten(),
        include_logo: cfg.fields.include_logo.then_some(extras.include_logo).flatten(),
    }
}

/// Interpret a 2xx response body from the generation service.
///
/// # Errors
///
/// Returns [`TransportError::UnexpectedResponse`] when the body matches
/// neither recognized shape.
pub fn interpret_body(body: &str) -> Result<GenerationOutcome, TransportError> {
    let value: serde_json::Value =
        serde_json::from_str(body).map_err(|_| TransportError::UnexpectedResponse)?;
    if let Some(url) = value.get("image_url").and_then(serde_json::Value::as_str) {
        return Ok(GenerationOutcome::Image(url.to_string()));
    }
    if value.get("message").and_then(serde_json::Value::as_str) == Some(WORKFLOW_STARTED_MESSAGE) {
        return Ok(GenerationOutcome::Accepted);
    }
    Err(TransportError::UnexpectedResponse)
}

/// Resolve an outcome to the result reference the UI renders.
#[must_use]
pub fn resolve_outcome(outcome: GenerationOutcome) -> String {
    match outcome {
        GenerationOutcome::Image(url) => url,
        GenerationOutcome::Accepted => PLACEHOLDER_IMAGE_URL.to_string(),
    }
}

/// The souvenir request state machine.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SouvenirPipeline {
    form: SouvenirForm,
    status: SouvenirStatus,
}

impl SouvenirPipeline {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn form(&self) -> &SouvenirForm {
        &self.form
    }

    /// Field edits are free outside `Submitting`; the UI disables inputs
    /// while a request is in flight.
    pub fn form_mut(&mut self) -> &mut SouvenirForm {
        &mut self.form
    }

    #[must_use]
    pub const fn status(&self) -> &SouvenirStatus {
        &self.status
    }

    #[must_use]
    pub const fn is_submitting(&self) -> bool {
        matches!(self.status, SouvenirStatus::Submitting)
    }

    /// Start a submission.
    ///
    /// Legal only from `Idle` or `Failed`, and only with a non-empty name and
    /// a non-empty numeric age.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] and changes nothing when the guard or a
    /// required field fails.
    pub fn begin_submit(&mut self) -> Result<(), ValidationError> {
        if !matches!(self.status, SouvenirStatus::Idle | SouvenirStatus::Failed(_)) {
            return Err(ValidationError::AlreadyActive);
        }
        self.form.check_required()?;
        self.status = SouvenirStatus::Submitting;
        Ok(())
    }

    /// Record the result reference once the exchange succeeds.
    pub fn settle_success(&mut self, image_url: String) {
        debug_assert!(self.is_submitting(), "settle without an active submission");
        self.status = SouvenirStatus::Succeeded(image_url);
    }

    /// Record a terminal failure for this attempt.
    pub fn settle_failure(&mut self, reason: String) {
        debug_assert!(self.is_submitting(), "settle without an active submission");
        self.status = SouvenirStatus::Failed(reason);
    }

    /// Clear everything and return to `Idle`. Legal from any state; this is
    /// the "create another" action.
    pub fn reset(&mut self) {
        self.form = SouvenirForm::default();
        self.status = SouvenirStatus::Idle;
    }

    /// Filename for saving the generated souvenir locally: the visitor name
    /// with whitespace collapsed to underscores plus a fixed suffix.
    #[must_use]
    pub fn download_file_name(&self) -> String {
        let stem: Vec<&str> = self.form.name.split_whitespace().collect();
        format!("{}{DOWNLOAD_SUFFIX}", stem.join("_"))
    }

    /// Drive one full submission through a transport: validate, send, settle.
    ///
    /// The photo, when present, must already be encoded as a data URI by the
    /// platform layer. Transport failures settle the pipeline as `Failed`
    /// rather than bubbling out; there is no retry.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] when the submission is not allowed to
    /// start; no request is made and no state changes in that case.
    pub async fn submit_with<T: SouvenirTransport>(
        &mut self,
        transport: &T,
        cfg: &GeneratorConfig,
        photo_data_url: Option<String>,
        extras: &SouvenirExtras,
    ) -> Result<(), ValidationError> {
        self.begin_submit()?;
        let payload = build_payload(&self.form, cfg, photo_data_url, extras);
        match transport.submit(cfg, &payload).await {
            Ok(outcome) => self.settle_success(resolve_outcome(outcome)),
            Err(err) => self.settle_failure(err.to_string()),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn photo(size_bytes: u64, mime_type: &str) -> PhotoUpload {
        PhotoUpload {
            file_name: "me.png".into(),
            size_bytes,
            mime_type: mime_type.into(),
        }
    }

    #[test]
    fn oversized_photo_is_rejected_without_mutation() {
        let mut form = SouvenirForm::default();
        let err = form.attach_photo(photo(MAX_PHOTO_BYTES + 1, "image/png"));
        assert_eq!(err, Err(ValidationError::PhotoTooLarge));
        assert!(form.photo().is_none());
    }

    #[test]
    fn non_image_mime_is_rejected() {
        let mut form = SouvenirForm::default();
        let err = form.attach_photo(photo(1024, "application/pdf"));
        assert_eq!(err, Err(ValidationError::PhotoNotImage));
        assert!(form.photo().is_none());
    }

    #[test]
    fn valid_photo_is_stored() {
        let mut form = SouvenirForm::default();
        form.attach_photo(photo(1024, "image/jpeg")).unwrap();
        assert_eq!(form.photo().unwrap().mime_type, "image/jpeg");
    }

    #[test]
    fn begin_submit_requires_name_and_numeric_age() {
        let mut pipeline = SouvenirPipeline::new();
        assert_eq!(pipeline.begin_submit(), Err(ValidationError::MissingName));

        pipeline.form_mut().name = "Asha".into();
        assert_eq!(pipeline.begin_submit(), Err(ValidationError::MissingAge));

        pipeline.form_mut().age = "twenty".into();
        assert_eq!(pipeline.begin_submit(), Err(ValidationError::AgeNotNumeric));
        assert_eq!(*pipeline.status(), SouvenirStatus::Idle);

        pipeline.form_mut().age = "29".into();
        pipeline.begin_submit().unwrap();
        assert!(pipeline.is_submitting());
    }

    #[test]
    fn begin_submit_is_refused_while_in_flight() {
        let mut pipeline = SouvenirPipeline::new();
        pipeline.form_mut().name = "Asha".into();
        pipeline.form_mut().age = "29".into();
        pipeline.begin_submit().unwrap();
        assert_eq!(pipeline.begin_submit(), Err(ValidationError::AlreadyActive));
    }

    #[test]
    fn failed_attempt_can_be_resubmitted() {
        let mut pipeline = SouvenirPipeline::new();
        pipeline.form_mut().name = "Asha".into();
        pipeline.form_mut().age = "29".into();
        pipeline.begin_submit().unwrap();
        pipeline.settle_failure("HTTP 500".into());
        assert!(pipeline.begin_submit().is_ok());
    }

    #[test]
    fn reset_clears_fields_and_status() {
        let mut pipeline = SouvenirPipeline::new();
        pipeline.form_mut().name = "Asha".into();
        pipeline.form_mut().age = "29".into();
        pipeline.begin_submit().unwrap();
        pipeline.settle_success("https://x/y.png".into());
        pipeline.reset();
        assert_eq!(*pipeline.status(), SouvenirStatus::Idle);
        assert!(pipeline.form().name.is_empty());
        assert!(pipeline.form().photo().is_none());
    }

    #[test]
    fn download_file_name_collapses_whitespace() {
        let mut pipeline = SouvenirPipeline::new();
        pipeline.form_mut().name = "Asha  Rani Das".into();
        assert_eq!(
            pipeline.download_file_name(),
            "Asha_Rani_Das_Heritage_Souvenir.png"
        );
    }

    #[test]
    fn payload_omits_empty_optionals_and_unsupported_extras() {
        let mut form = SouvenirForm::default();
        form.name = " Asha ".into();
        form.age = "29".into();
        let cfg = GeneratorConfig::default();
        let extras = SouvenirExtras {
            monument: Some("Konark Sun Temple".into()),
            ..SouvenirExtras::default()
        };
        let payload = build_payload(&form, &cfg, None, &extras);
        assert_eq!(payload.user_name, "Asha");
        assert!(payload.email.is_none());
        // Monument support is off in the default config.
        assert!(payload.monument.is_none());

        let json = serde_json::to_value(&payload).unwrap();
        assert!(json.get("email").is_none());
        assert!(json.get("photo_base64").is_none());
    }

    #[test]
    fn payload_carries_supported_extras() {
        let mut form = SouvenirForm::default();
        form.name = "Asha".into();
        form.age = "29".into();
        form.email = "asha@example.test".into();
        let mut cfg = GeneratorConfig::default();
        cfg.fields.monument = true;
        cfg.fields.include_logo = true;
        let extras = SouvenirExtras {
            monument: Some("Konark Sun Temple".into()),
            include_logo: Some(true),
            ..SouvenirExtras::default()
        };
        let payload = build_payload(&form, &cfg, Some("data:image/png;base64,AAAA".into()), &extras);
        assert_eq!(payload.monument.as_deref(), Some("Konark Sun Temple"));
        assert_eq!(payload.include_logo, Some(true));

        let entries = payload.form_entries();
        assert_eq!(entries[0], ("status", "success".to_string()));
        assert!(entries.iter().any(|(k, _)| *k == "photo_base64"));
        assert!(entries.iter().any(|(k, v)| *k == "include_logo" && v == "true"));
    }

    #[test]
    fn response_with_image_url_is_adopted() {
        let outcome = interpret_body(r#"{ "image_url": "https://x/y.png" }"#).unwrap();
        assert_eq!(outcome, GenerationOutcome::Image("https://x/y.png".into()));
    }

    #[test]
    fn workflow_started_maps_to_placeholder() {
        let outcome = interpret_body(r#"{ "message": "Workflow was started" }"#).unwrap();
        assert_eq!(resolve_outcome(outcome), PLACEHOLDER_IMAGE_URL);
    }

    #[test]
    fn unrecognized_bodies_are_failures() {
        assert_eq!(
            interpret_body(r#"{ "message": "queued" }"#),
            Err(TransportError::UnexpectedResponse)
        );
        assert_eq!(
            interpret_body("not json"),
            Err(TransportError::UnexpectedResponse)
        );
    }
}
