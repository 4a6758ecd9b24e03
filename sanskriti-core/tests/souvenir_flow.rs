//! End-to-end exercises of the souvenir pipeline against a recording transport.
use std::cell::RefCell;

use async_trait::async_trait;
use futures::executor::block_on;
use sanskriti_core::config::GeneratorConfig;
use sanskriti_core::constants::PLACEHOLDER_IMAGE_URL;
use sanskriti_core::souvenir::{
    GenerationOutcome, SouvenirExtras, SouvenirPayload, SouvenirPipeline, SouvenirStatus,
    SouvenirTransport, TransportError, interpret_body,
};

/// Counts exchanges and replays a canned response.
struct RecordingTransport {
    calls: RefCell<u32>,
    response: Result<GenerationOutcome, TransportError>,
    last_payload: RefCell<Option<SouvenirPayload>>,
}

impl RecordingTransport {
    fn new(response: Result<GenerationOutcome, TransportError>) -> Self {
        Self {
            calls: RefCell::new(0),
            response,
            last_payload: RefCell::new(None),
        }
    }

    fn calls(&self) -> u32 {
        *self.calls.borrow()
    }
}

#[async_trait(?Send)]
impl SouvenirTransport for RecordingTransport {
    async fn submit(
        &self,
        _cfg: &GeneratorConfig,
        payload: &SouvenirPayload,
    ) -> Result<GenerationOutcome, TransportError> {
        *self.calls.borrow_mut() += 1;
        *self.last_payload.borrow_mut() = Some(payload.clone());
        self.response.clone()
    }
}

fn cfg() -> GeneratorConfig {
    GeneratorConfig::from_json(r#"{ "endpoint": "https://example.test/hook" }"#).unwrap()
}

fn filled_pipeline() -> SouvenirPipeline {
    let mut pipeline = SouvenirPipeline::new();
    pipeline.form_mut().name = "Asha".into();
    pipeline.form_mut().age = "29".into();
    pipeline
}

#[test]
fn missing_name_never_reaches_the_network() {
    let transport =
        RecordingTransport::new(Ok(GenerationOutcome::Image("https://x/y.png".into())));
    let mut pipeline = SouvenirPipeline::new();
    pipeline.form_mut().age = "29".into();

    let result = block_on(pipeline.submit_with(
        &transport,
        &cfg(),
        None,
        &SouvenirExtras::default(),
    ));
    assert!(result.is_err());
    assert_eq!(transport.calls(), 0);
    assert_eq!(*pipeline.status(), SouvenirStatus::Idle);
}

#[test]
fn direct_image_response_is_adopted_and_named() {
    let transport =
        RecordingTransport::new(Ok(GenerationOutcome::Image("https://x/y.png".into())));
    let mut pipeline = filled_pipeline();

    block_on(pipeline.submit_with(&transport, &cfg(), None, &SouvenirExtras::default())).unwrap();

    assert_eq!(
        *pipeline.status(),
        SouvenirStatus::Succeeded("https://x/y.png".into())
    );
    assert_eq!(pipeline.download_file_name(), "Asha_Heritage_Souvenir.png");
    assert_eq!(transport.calls(), 1);

    let payload = transport.last_payload.borrow().clone().unwrap();
    assert_eq!(payload.user_name, "Asha");
    assert_eq!(payload.age, "29");
    assert!(payload.photo_base64.is_none());
}

#[test]
fn accepted_workflow_substitutes_the_placeholder() {
    let transport = RecordingTransport::new(Ok(GenerationOutcome::Accepted));
    let mut pipeline = filled_pipeline();

    block_on(pipeline.submit_with(&transport, &cfg(), None, &SouvenirExtras::default())).unwrap();

    assert_eq!(
        *pipeline.status(),
        SouvenirStatus::Succeeded(PLACEHOLDER_IMAGE_URL.to_string())
    );
}

#[test]
fn http_failure_settles_with_a_reason() {
    let transport = RecordingTransport::new(Err(TransportError::Http {
        status: 502,
        status_text: "Bad Gateway".into(),
    }));
    let mut pipeline = filled_pipeline();

    block_on(pipeline.submit_with(&transport, &cfg(), None, &SouvenirExtras::default())).unwrap();

    match pipeline.status() {
        SouvenirStatus::Failed(reason) => {
            assert!(!reason.is_empty());
            assert!(reason.contains("502"));
        }
        other => panic!("expected failure, got {other:?}"),
    }
}

#[test]
fn failure_then_resubmission_uses_a_fresh_exchange() {
    let failing = RecordingTransport::new(Err(TransportError::Network("offline".into())));
    let mut pipeline = filled_pipeline();
    block_on(pipeline.submit_with(&failing, &cfg(), None, &SouvenirExtras::default())).unwrap();
    assert!(matches!(pipeline.status(), SouvenirStatus::Failed(_)));

    let succeeding = RecordingTransport::new(Ok(GenerationOutcome::Accepted));
    block_on(pipeline.submit_with(&succeeding, &cfg(), None, &SouvenirExtras::default())).unwrap();
    assert!(matches!(pipeline.status(), SouvenirStatus::Succeeded(_)));
    assert_eq!(failing.calls(), 1);
    assert_eq!(succeeding.calls(), 1);
}

#[test]
fn encoded_photo_travels_in_the_payload() {
    let transport = RecordingTransport::new(Ok(GenerationOutcome::Accepted));
    let mut pipeline = filled_pipeline();

    block_on(pipeline.submit_with(
        &transport,
        &cfg(),
        Some("data:image/png;base64,AAAA".into()),
        &SouvenirExtras::default(),
    ))
    .unwrap();

    let payload = transport.last_payload.borrow().clone().unwrap();
    assert_eq!(
        payload.photo_base64.as_deref(),
        Some("data:image/png;base64,AAAA")
    );
}

#[test]
fn body_interpretation_matches_the_webhook_contract() {
    assert!(matches!(
        interpret_body(r#"{ "image_url": "https://cdn.test/a.png" }"#),
        Ok(GenerationOutcome::Image(_))
    ));
    assert!(matches!(
        interpret_body(r#"{ "message": "Workflow was started" }"#),
        Ok(GenerationOutcome::Accepted)
    ));
    assert!(interpret_body(r#"{ "ok": true }"#).is_err());
}
