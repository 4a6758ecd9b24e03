//! The AR viewer surface: time slider, narration controls, the Culture Coin
//! badge, and the heritage quiz orb.
use std::collections::BTreeMap;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use sanskriti_core::constants::REVEAL_DWELL_MS;
use sanskriti_core::timeline::{Era, TimelineView};
use sanskriti_core::{MonumentData, QuizData, QuizEngine, RewardLedger};

use crate::a11y;
use crate::components::quiz_card::QuizCard;
use crate::dom;
use crate::i18n;

#[derive(Properties, Clone, PartialEq)]
pub struct ArViewerProps {
    pub ledger: RewardLedger,
    /// `(achievement id, delta, ledger the delta was computed against)`.
    pub on_progress: Callback<(String, u32, RewardLedger)>,
}

#[function_component(ArViewer)]
pub fn ar_viewer(props: &ArViewerProps) -> Html {
    let engine = use_state(|| QuizEngine::new(QuizData::load_from_static().questions));
    let show_quiz = use_state(|| false);
    let muted = use_state(|| false);
    let lang = use_state(i18n::current_lang);
    let slider = use_state(|| 50u8);
    let viewer_image = use_memo((), |_| {
        MonumentData::load_from_static()
            .monuments
            .first()
            .map(|m| m.image.clone())
            .unwrap_or_default()
    });

    let timeline = TimelineView::from_position(*slider);

    let on_slider_input = {
        let slider = slider.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                if let Ok(position) = input.value().parse::<u8>() {
                    slider.set(position.min(100));
                }
            }
        })
    };

    let on_lang_change = {
        let lang = lang.clone();
        Callback::from(move |e: Event| {
            if let Some(select) = e.target_dyn_into::<HtmlSelectElement>() {
                let code = select.value();
                i18n::set_lang(&code);
                lang.set(code);
            }
        })
    };

    let on_toggle_mute = {
        let muted = muted.clone();
        Callback::from(move |_| muted.set(!*muted))
    };

    let on_open_quiz = {
        let show_quiz = show_quiz.clone();
        Callback::from(move |_| show_quiz.set(true))
    };

    let on_answer = {
        let engine = engine.clone();
        let show_quiz = show_quiz.clone();
        let ledger = props.ledger.clone();
        let on_progress = props.on_progress.clone();
        Callback::from(move |index: usize| {
            let mut next_engine = (*engine).clone();
            let mut next_ledger = ledger.clone();
            // A second click during the reveal is ignored by the engine.
            let Some(outcome) = next_engine.submit_answer(index, &mut next_ledger) else {
                return;
            };
            if outcome.correct {
                let coins = outcome.coins_awarded.to_string();
                let mut vars = BTreeMap::new();
                vars.insert("coins", coins.as_str());
                a11y::set_status(&i18n::tr("quiz.earned", Some(&vars)));
                on_progress.emit(("quiz-master".to_string(), 1, next_ledger));
            }

            let mut advanced = next_engine.clone();
            engine.set(next_engine);

            // The dwell, then the next question. A stale token cannot advance
            // a newer question instance.
            let engine = engine.clone();
            let show_quiz = show_quiz.clone();
            spawn_local(async move {
                let _ = dom::sleep_ms(i32::try_from(REVEAL_DWELL_MS).unwrap_or(3000)).await;
                if advanced.advance(outcome.advance) {
                    engine.set(advanced);
                    show_quiz.set(false);
                }
            });
        })
    };

    let balance = props.ledger.balance().to_string();
    let coins_label = {
        let mut vars = BTreeMap::new();
        vars.insert("count", balance.as_str());
        i18n::tr("ar.coins", Some(&vars))
    };
    let era_label = match timeline.era() {
        Era::Ancient => i18n::t("ar.era_ancient"),
        Era::Modern => i18n::t("ar.era_modern"),
    };
    let current_lang = (*lang).clone();

    html! {
        <section id="ar-experience" class="ar-experience">
            <header class="section-header">
                <h2>{ i18n::t("ar.title") }</h2>
                <p>{ i18n::t("ar.subtitle") }</p>
            </header>

            <div class="ar-layout">
                <div class="ar-viewer">
                    <div class="ar-stage">
                        <img
                            src={(*viewer_image).clone()}
                            alt={i18n::t("ar.title")}
                            style={format!("filter: {}", timeline.css_filter())}
                        />
                        <div class="ar-badges">
                            <span class="badge">{ i18n::t("ar.active") }</span>
                            <span class="badge">{ era_label }</span>
                        </div>
                        { if !*show_quiz {
                            html! {
                                <button
                                    class="quiz-orb"
                                    onclick={on_open_quiz}
                                    aria-label={i18n::t("ar.open_quiz")}
                                >
                                    { "🏅" }
                                </button>
                            }
                        } else {
                            html! {}
                        } }
                    </div>

                    <div class="ar-controls">
                        <div class="time-slider">
                            <div class="time-slider-row">
                                <span>{ i18n::t("ar.time_period") }</span>
                                <span class="time-label">{ timeline.century_label() }</span>
                            </div>
                            <input
                                type="range"
                                min="0"
                                max="100"
                                step="1"
                                value={slider.to_string()}
                                oninput={on_slider_input}
                                aria-label={i18n::t("ar.time_period")}
                            />
                            <div class="time-slider-ends">
                                <span>{ i18n::t("ar.present_day") }</span>
                                <span>{ i18n::t("ar.ancient_end") }</span>
                            </div>
                        </div>

                        <div class="ar-audio-row">
                            <button
                                onclick={on_toggle_mute}
                                aria-pressed={muted.to_string()}
                                aria-label={if *muted { i18n::t("ar.unmute") } else { i18n::t("ar.mute") }}
                            >
                                { if *muted { "🔇" } else { "🔊" } }
                            </button>
                            <select
                                value={current_lang.clone()}
                                onchange={on_lang_change}
                                aria-label={i18n::t("ar.language")}
                            >
                                { for i18n::locales().iter().map(|meta| html! {
                                    <option value={meta.code} selected={meta.code == current_lang}>
                                        { meta.name }
                                    </option>
                                }) }
                            </select>
                            <span class="coin-badge">{ coins_label }</span>
                        </div>
                    </div>
                </div>

                <div class="ar-side">
                    { if *show_quiz {
                        html! { <QuizCard engine={(*engine).clone()} on_answer={on_answer} /> }
                    } else {
                        html! {}
                    } }
                    <div class="ar-features">
                        <div class="feature-card">
                            <h4>{ i18n::t("ar.feature_3d_title") }</h4>
                            <p>{ i18n::t("ar.feature_3d_desc") }</p>
                        </div>
                        <div class="feature-card">
                            <h4>{ i18n::t("ar.feature_lang_title") }</h4>
                            <p>{ i18n::t("ar.feature_lang_desc") }</p>
                        </div>
                        <div class="feature-card">
                            <h4>{ i18n::t("ar.feature_timeline_title") }</h4>
                            <p>{ i18n::t("ar.feature_timeline_desc") }</p>
                        </div>
                        <div class="feature-card">
                            <h4>{ i18n::t("ar.feature_game_title") }</h4>
                            <p>{ i18n::t("ar.feature_game_desc") }</p>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
