//! The souvenir generation surface.
//!
//! Form in, artwork out: collect the visitor's details and optional photo,
//! run the pipeline (validate, encode, POST, settle), then offer a download
//! of the result. All state machine rules live in the core crate; this
//! component only drives it from browser events.
use std::collections::BTreeMap;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use sanskriti_core::config::GeneratorConfig;
use sanskriti_core::souvenir::{
    self, PhotoUpload, SouvenirExtras, SouvenirForm, SouvenirPipeline, SouvenirStatus,
    SouvenirTransport, ValidationError,
};

use crate::a11y;
use crate::dom;
use crate::i18n;
use crate::transport::WebhookTransport;

fn validation_key(err: &ValidationError) -> &'static str {
    match err {
        ValidationError::MissingName
        | ValidationError::MissingAge
        | ValidationError::AgeNotNumeric => "souvenir.need_name_age",
        ValidationError::PhotoTooLarge => "souvenir.photo_too_large",
        ValidationError::PhotoNotImage => "souvenir.photo_not_image",
        ValidationError::AlreadyActive => "souvenir.busy",
    }
}

fn field_editor(
    pipeline: &UseStateHandle<SouvenirPipeline>,
    apply: impl Fn(&mut SouvenirForm, String) + 'static,
) -> Callback<InputEvent> {
    let pipeline = pipeline.clone();
    Callback::from(move |e: InputEvent| {
        if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
            let mut next = (*pipeline).clone();
            apply(next.form_mut(), input.value());
            pipeline.set(next);
        }
    })
}

#[function_component(SouvenirStudio)]
#[allow(clippy::too_many_lines)]
pub fn souvenir_studio() -> Html {
    let pipeline = use_state(SouvenirPipeline::new);
    let photo_file = use_state(|| None::<web_sys::File>);
    let config = use_memo((), |_| GeneratorConfig::load_from_static());

    let on_name = field_editor(&pipeline, |form, value| form.name = value);
    let on_age = field_editor(&pipeline, |form, value| form.age = value);
    let on_email = field_editor(&pipeline, |form, value| form.email = value);
    let on_phone = field_editor(&pipeline, |form, value| form.phone = value);

    let on_photo = {
        let pipeline = pipeline.clone();
        let photo_file = photo_file.clone();
        Callback::from(move |e: Event| {
            let Some(input) = e.target_dyn_into::<HtmlInputElement>() else {
                return;
            };
            let Some(file) = input.files().and_then(|list| list.get(0)) else {
                return;
            };
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let upload = PhotoUpload {
                file_name: file.name(),
                size_bytes: file.size() as u64,
                mime_type: file.type_(),
            };
            let mut next = (*pipeline).clone();
            match next.form_mut().attach_photo(upload) {
                Ok(()) => {
                    photo_file.set(Some(file));
                    a11y::set_status(&i18n::t("souvenir.photo_ok"));
                    pipeline.set(next);
                }
                Err(err) => {
                    a11y::set_status(&i18n::t(validation_key(&err)));
                    input.set_value("");
                }
            }
        })
    };

    let on_generate = {
        let pipeline = pipeline.clone();
        let photo_file = photo_file.clone();
        let config = config.clone();
        Callback::from(move |_| {
            let mut next = (*pipeline).clone();
            if let Err(err) = next.begin_submit() {
                a11y::set_status(&i18n::t(validation_key(&err)));
                return;
            }
            pipeline.set(next.clone());

            let handle = pipeline.clone();
            let file = (*photo_file).clone();
            let config = config.clone();
            spawn_local(async move {
                let mut settled = next;

                let photo_data_url = match file {
                    Some(file) => match dom::read_file_as_data_url(&file).await {
                        Ok(data_url) => Some(data_url),
                        Err(err) => {
                            let reason = dom::js_error_message(&err);
                            log::error!("photo encoding failed: {reason}");
                            settled.settle_failure(reason);
                            handle.set(settled);
                            a11y::set_status(&i18n::t("souvenir.failed"));
                            return;
                        }
                    },
                    None => None,
                };

                let payload = souvenir::build_payload(
                    settled.form(),
                    &config,
                    photo_data_url,
                    &SouvenirExtras::default(),
                );
                match WebhookTransport.submit(&config, &payload).await {
                    Ok(outcome) => {
                        settled.settle_success(souvenir::resolve_outcome(outcome));
                        a11y::set_status(&i18n::t("souvenir.sent"));
                    }
                    Err(err) => {
                        log::error!("souvenir submission failed: {err}");
                        settled.settle_failure(err.to_string());
                        a11y::set_status(&i18n::t("souvenir.failed"));
                    }
                }
                handle.set(settled);
            });
        })
    };

    let on_download = {
        let pipeline = pipeline.clone();
        Callback::from(move |_| {
            if let SouvenirStatus::Succeeded(url) = pipeline.status() {
                if let Err(err) = dom::trigger_download(url, &pipeline.download_file_name()) {
                    dom::console_error(&dom::js_error_message(&err));
                }
            }
        })
    };

    let on_reset = {
        let pipeline = pipeline.clone();
        let photo_file = photo_file.clone();
        Callback::from(move |_| {
            let mut next = (*pipeline).clone();
            next.reset();
            pipeline.set(next);
            photo_file.set(None);
        })
    };

    let form = pipeline.form().clone();
    let loading = pipeline.is_submitting();
    let can_generate =
        !loading && !form.name.trim().is_empty() && !form.age.trim().is_empty();

    let result_view = |url: &str| {
        let ready_sub = {
            let mut vars = BTreeMap::new();
            vars.insert("name", form.name.as_str());
            i18n::tr("souvenir.ready_sub", Some(&vars))
        };
        let years = {
            let mut vars = BTreeMap::new();
            vars.insert("age", form.age.as_str());
            i18n::tr("souvenir.years", Some(&vars))
        };
        html! {
            <div class="souvenir-result">
                <h3>{ i18n::t("souvenir.ready") }</h3>
                <p>{ ready_sub }</p>
                <img src={url.to_string()} alt={i18n::t("souvenir.ready")} class="souvenir-image" />
                <dl class="souvenir-meta">
                    <div>
                        <dt>{ i18n::t("souvenir.visitor") }</dt>
                        <dd>{ form.name.clone() }</dd>
                    </div>
                    <div>
                        <dt>{ i18n::t("souvenir.age_label") }</dt>
                        <dd>{ years }</dd>
                    </div>
                    <div>
                        <dt>{ i18n::t("souvenir.site") }</dt>
                        <dd>{ i18n::t("souvenir.site_value") }</dd>
                    </div>
                </dl>
                <div class="souvenir-actions">
                    <button class="btn-primary" onclick={on_download.clone()}>
                        { i18n::t("souvenir.download") }
                    </button>
                    <button class="btn-secondary" onclick={on_reset.clone()}>
                        { i18n::t("souvenir.again") }
                    </button>
                </div>
                <p class="muted">{ i18n::t("souvenir.thanks") }</p>
            </div>
        }
    };

    let photo_line = form.photo().map(|photo| {
        let mut vars = BTreeMap::new();
        vars.insert("file", photo.file_name.as_str());
        i18n::tr("souvenir.photo_attached", Some(&vars))
    });

    html! {
        <section id="souvenir-studio" class="souvenir-studio">
            <header class="section-header">
                <h2>{ i18n::t("souvenir.title") }</h2>
                <p>{ i18n::t("souvenir.subtitle") }</p>
            </header>

            { match pipeline.status() {
                SouvenirStatus::Succeeded(url) => result_view(url),
                status => {
                    let failure = if let SouvenirStatus::Failed(reason) = status {
                        html! { <p class="error" role="alert">{ format!("{} ({reason})", i18n::t("souvenir.failed")) }</p> }
                    } else {
                        html! {}
                    };
                    html! {
                        <div class="souvenir-form">
                            <h3>{ i18n::t("souvenir.studio") }</h3>
                            <p class="muted">{ i18n::t("souvenir.studio_hint") }</p>
                            { failure }
                            <div class="form-grid">
                                <label>
                                    { i18n::t("souvenir.name") }
                                    <input
                                        value={form.name.clone()}
                                        oninput={on_name}
                                        placeholder={i18n::t("souvenir.name_ph")}
                                        disabled={loading}
                                    />
                                </label>
                                <label>
                                    { i18n::t("souvenir.age") }
                                    <input
                                        type="number"
                                        value={form.age.clone()}
                                        oninput={on_age}
                                        placeholder={i18n::t("souvenir.age_ph")}
                                        disabled={loading}
                                    />
                                </label>
                                <label>
                                    { i18n::t("souvenir.email") }
                                    <input
                                        type="email"
                                        value={form.email.clone()}
                                        oninput={on_email}
                                        placeholder={i18n::t("souvenir.email_ph")}
                                        disabled={loading}
                                    />
                                </label>
                                <label>
                                    { i18n::t("souvenir.phone") }
                                    <input
                                        type="tel"
                                        value={form.phone.clone()}
                                        oninput={on_phone}
                                        placeholder={i18n::t("souvenir.phone_ph")}
                                        disabled={loading}
                                    />
                                </label>
                            </div>
                            <label class="photo-field">
                                { i18n::t("souvenir.photo") }
                                <input
                                    type="file"
                                    accept="image/*"
                                    onchange={on_photo}
                                    disabled={loading}
                                />
                            </label>
                            { if let Some(line) = photo_line {
                                html! { <p class="photo-attached">{ line }</p> }
                            } else {
                                html! {}
                            } }
                            <button
                                class="btn-primary generate"
                                onclick={on_generate}
                                disabled={!can_generate}
                            >
                                { if loading {
                                    i18n::t("souvenir.generating")
                                } else {
                                    i18n::t("souvenir.generate")
                                } }
                            </button>
                        </div>
                    }
                }
            } }
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[test]
    fn studio_renders_the_empty_form() {
        crate::i18n::set_lang("en");
        let html = block_on(LocalServerRenderer::<SouvenirStudio>::new().render());
        assert!(html.contains("Heritage Studio"));
        assert!(html.contains("Generate My Souvenir"));
        // Name and age are empty, so the generate button starts disabled.
        assert!(html.contains("disabled"));
    }

    #[test]
    fn validation_messages_map_to_locale_keys() {
        assert_eq!(
            validation_key(&ValidationError::MissingName),
            "souvenir.need_name_age"
        );
        assert_eq!(
            validation_key(&ValidationError::PhotoTooLarge),
            "souvenir.photo_too_large"
        );
        assert_eq!(
            validation_key(&ValidationError::AlreadyActive),
            "souvenir.busy"
        );
    }
}
