//! Browser transport for the souvenir generation webhook.
//!
//! One POST exchange over `fetch`, wire-encoded per the configured
//! [`PayloadEncoding`]. No retry, no timeout of its own; the browser's
//! transport behavior applies.
use async_trait::async_trait;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{FormData, Headers, RequestInit, Response};

use sanskriti_core::config::{GeneratorConfig, PayloadEncoding};
use sanskriti_core::souvenir::{
    GenerationOutcome, SouvenirPayload, SouvenirTransport, TransportError, interpret_body,
};

use crate::dom;

/// The production transport: talks to the workflow webhook configured in
/// `generator.json`.
#[derive(Debug, Clone, Copy, Default)]
pub struct WebhookTransport;

fn network_error(err: JsValue) -> TransportError {
    TransportError::Network(dom::js_error_message(&err))
}

#[async_trait(?Send)]
impl SouvenirTransport for WebhookTransport {
    async fn submit(
        &self,
        cfg: &GeneratorConfig,
        payload: &SouvenirPayload,
    ) -> Result<GenerationOutcome, TransportError> {
        let init = RequestInit::new();
        init.set_method("POST");

        let headers = Headers::new().map_err(network_error)?;
        if let Some(token) = &cfg.auth_token {
            headers
                .append("Authorization", &format!("Bearer {token}"))
                .map_err(network_error)?;
        }

        match cfg.encoding {
            PayloadEncoding::Json => {
                let body = serde_json::to_string(payload)
                    .map_err(|err| TransportError::Network(err.to_string()))?;
                headers
                    .append("Content-Type", "application/json")
                    .map_err(network_error)?;
                init.set_body(&JsValue::from_str(&body));
            }
            PayloadEncoding::FormData => {
                // The browser supplies the multipart boundary header itself.
                let form = FormData::new().map_err(network_error)?;
                for (key, value) in payload.form_entries() {
                    form.append_with_str(key, &value).map_err(network_error)?;
                }
                init.set_body(form.as_ref());
            }
        }
        init.set_headers(headers.as_ref());

        let response_value =
            JsFuture::from(dom::window().fetch_with_str_and_init(&cfg.endpoint, &init))
                .await
                .map_err(network_error)?;
        let response: Response = response_value.dyn_into().map_err(network_error)?;

        if !response.ok() {
            return Err(TransportError::Http {
                status: response.status(),
                status_text: response.status_text(),
            });
        }

        let text_value = JsFuture::from(response.text().map_err(network_error)?)
            .await
            .map_err(network_error)?;
        let body = text_value.as_string().unwrap_or_default();
        interpret_body(&body)
    }
}
