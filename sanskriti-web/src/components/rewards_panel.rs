//! Achievements and the digital souvenir shop, both backed by the shared
//! Culture Coin ledger.
use std::collections::BTreeMap;
use yew::prelude::*;

use sanskriti_core::{AchievementTracker, RewardLedger, RewardsData};

use crate::a11y;
use crate::dom;
use crate::i18n;

#[derive(Properties, Clone, PartialEq)]
pub struct RewardsPanelProps {
    pub ledger: RewardLedger,
    pub tracker: AchievementTracker,
    pub on_ledger_change: Callback<RewardLedger>,
}

fn kind_glyph(kind: &str) -> &'static str {
    match kind {
        "certificate" => "⭐",
        "3d-model" => "🏛",
        "wallpaper" => "🖼",
        "pass" => "🎫",
        _ => "🎁",
    }
}

#[function_component(RewardsPanel)]
pub fn rewards_panel(props: &RewardsPanelProps) -> Html {
    let items = use_memo((), |_| RewardsData::load_from_static().items);

    html! {
        <section id="rewards" class="rewards">
            <header class="section-header">
                <h2>{ i18n::t("rewards.title") }</h2>
                <p>{ i18n::t("rewards.subtitle") }</p>
            </header>

            <div class="coin-display">
                <span class="coin-amount">{ props.ledger.balance() }</span>
                <span class="coin-label">{ i18n::t("rewards.coins_label") }</span>
            </div>

            <div class="rewards-layout">
                <div class="achievements">
                    <h3>{ i18n::t("rewards.achievements_title") }</h3>
                    { for props.tracker.entries().iter().map(|entry| {
                        let done = entry.progress().to_string();
                        let total = entry.def().target.to_string();
                        let progress_line = {
                            let mut vars = BTreeMap::new();
                            vars.insert("done", done.as_str());
                            vars.insert("total", total.as_str());
                            i18n::tr("rewards.progress", Some(&vars))
                        };
                        let coins = entry.def().reward_coins.to_string();
                        let reward_line = {
                            let mut vars = BTreeMap::new();
                            vars.insert("coins", coins.as_str());
                            i18n::tr("rewards.reward", Some(&vars))
                        };
                        let badge = if entry.completed() {
                            i18n::t("rewards.completed")
                        } else {
                            format!("{}%", entry.pct())
                        };
                        html! {
                            <article class={classes!("achievement", entry.completed().then_some("completed"))}>
                                <div class="achievement-head">
                                    <div>
                                        <h4>{ entry.def().title.clone() }</h4>
                                        <p class="muted">{ entry.def().desc.clone() }</p>
                                    </div>
                                    <span class="badge">{ badge }</span>
                                </div>
                                <div
                                    class="progress-bar"
                                    role="progressbar"
                                    aria-valuemin="0"
                                    aria-valuemax="100"
                                    aria-valuenow={entry.pct().to_string()}
                                >
                                    <div class="progress-fill" style={format!("width:{}%", entry.pct())} />
                                </div>
                                <div class="achievement-foot">
                                    <span class="muted">{ progress_line }</span>
                                    <span class="reward">{ reward_line }</span>
                                </div>
                            </article>
                        }
                    }) }
                </div>

                <div class="shop">
                    <h3>{ i18n::t("rewards.souvenirs_title") }</h3>
                    <div class="shop-grid">
                        { for items.iter().map(|item| {
                            let owned = props.ledger.owns(&item.id);
                            let affordable = props.ledger.balance() >= item.cost;

                            let on_purchase = {
                                let ledger = props.ledger.clone();
                                let on_ledger_change = props.on_ledger_change.clone();
                                let item = item.clone();
                                Callback::from(move |_| {
                                    let mut next = ledger.clone();
                                    match next.purchase(&item.id, item.cost) {
                                        Ok(()) => {
                                            let mut vars = BTreeMap::new();
                                            vars.insert("item", item.title.as_str());
                                            a11y::set_status(&i18n::tr("rewards.purchased", Some(&vars)));
                                            on_ledger_change.emit(next);
                                        }
                                        Err(err) => {
                                            log::warn!("purchase refused: {err}");
                                            let mut vars = BTreeMap::new();
                                            vars.insert("item", item.title.as_str());
                                            a11y::set_status(&i18n::tr("rewards.insufficient", Some(&vars)));
                                        }
                                    }
                                })
                            };

                            let on_download = {
                                let item = item.clone();
                                Callback::from(move |_| {
                                    let href = format!("/static/assets/rewards/{}.png", item.id);
                                    let file_name = format!("{}.png", item.id);
                                    if let Err(err) = dom::trigger_download(&href, &file_name) {
                                        dom::console_error(&dom::js_error_message(&err));
                                        return;
                                    }
                                    let mut vars = BTreeMap::new();
                                    vars.insert("item", item.title.as_str());
                                    a11y::set_status(&i18n::tr("rewards.downloading", Some(&vars)));
                                })
                            };

                            html! {
                                <article class="shop-card">
                                    <div class="shop-art" aria-hidden="true">{ kind_glyph(&item.kind) }</div>
                                    { if owned {
                                        html! { <span class="badge owned">{ i18n::t("rewards.owned") }</span> }
                                    } else {
                                        html! {}
                                    } }
                                    <h4>{ item.title.clone() }</h4>
                                    <p class="muted">{ item.desc.clone() }</p>
                                    <div class="shop-foot">
                                        <span class="cost">{ format!("🪙 {}", item.cost) }</span>
                                        { if owned {
                                            html! {
                                                <button class="btn-secondary" onclick={on_download}>
                                                    { i18n::t("rewards.download") }
                                                </button>
                                            }
                                        } else {
                                            html! {
                                                <button
                                                    class="btn-primary"
                                                    onclick={on_purchase}
                                                    disabled={!affordable}
                                                >
                                                    { i18n::t("rewards.purchase") }
                                                </button>
                                            }
                                        } }
                                    </div>
                                </article>
                            }
                        }) }
                    </div>
                </div>
            </div>
        </section>
    }
}
