//! Artisan showcase: category filter, likes, and stock badges.
use std::collections::BTreeMap;
use std::collections::BTreeSet;
use yew::prelude::*;

use sanskriti_core::ArtisanData;

use crate::a11y;
use crate::i18n;

#[derive(Properties, Clone, PartialEq)]
pub struct ArtisansSectionProps {
    /// Fired when a visitor adds a piece to their enquiry; drives the
    /// Artisan Supporter achievement.
    pub on_enquiry: Callback<()>,
}

#[function_component(ArtisansSection)]
pub fn artisans_section(props: &ArtisansSectionProps) -> Html {
    let catalog = use_memo((), |_| ArtisanData::load_from_static());
    // `None` means the "All" chip is active.
    let selected = use_state(|| None::<String>);
    let liked = use_state(BTreeSet::<String>::new);

    let categories = catalog.categories();

    let works: Vec<_> = catalog
        .works
        .iter()
        .filter(|work| {
            selected
                .as_ref()
                .is_none_or(|category| &work.category == category)
        })
        .cloned()
        .collect();

    html! {
        <section id="artisans" class="artisans">
            <header class="section-header">
                <h2>{ i18n::t("artisans.title") }</h2>
                <p>{ i18n::t("artisans.subtitle") }</p>
            </header>

            <nav class="category-chips" aria-label={i18n::t("artisans.title")}>
                {
                    {
                        let selected = selected.clone();
                        let all_active = selected.is_none();
                        let on_all = Callback::from(move |_| selected.set(None));
                        html! {
                            <button
                                class={classes!("chip", all_active.then_some("active"))}
                                onclick={on_all}
                            >
                                { i18n::t("artisans.all") }
                            </button>
                        }
                    }
                }
                { for categories.iter().map(|category| {
                    let active = selected.as_deref() == Some(category.as_str());
                    let on_pick = {
                        let selected = selected.clone();
                        let category = category.clone();
                        Callback::from(move |_| selected.set(Some(category.clone())))
                    };
                    html! {
                        <button
                            class={classes!("chip", active.then_some("active"))}
                            onclick={on_pick}
                        >
                            { category.clone() }
                        </button>
                    }
                }) }
            </nav>

            <div class="artisan-grid">
                { for works.iter().map(|work| {
                    let is_liked = liked.contains(&work.id);
                    let on_like = {
                        let liked = liked.clone();
                        let id = work.id.clone();
                        Callback::from(move |_| {
                            let mut next = (*liked).clone();
                            if !next.remove(&id) {
                                next.insert(id.clone());
                            }
                            liked.set(next);
                        })
                    };
                    let on_add = {
                        let on_enquiry = props.on_enquiry.clone();
                        let title = work.title.clone();
                        Callback::from(move |_| {
                            let mut vars = BTreeMap::new();
                            vars.insert("item", title.as_str());
                            a11y::set_status(&i18n::tr("artisans.enquiry_sent", Some(&vars)));
                            on_enquiry.emit(());
                        })
                    };
                    let by_line = {
                        let mut vars = BTreeMap::new();
                        vars.insert("artist", work.artist.as_str());
                        i18n::tr("artisans.by", Some(&vars))
                    };

                    html! {
                        <article class="artisan-card">
                            <div class="artisan-art">
                                <img src={work.image.clone()} alt={work.title.clone()} />
                                { if work.featured {
                                    html! { <span class="badge featured">{ i18n::t("artisans.featured") }</span> }
                                } else {
                                    html! {}
                                } }
                                { if !work.in_stock {
                                    html! { <span class="badge sold-out">{ i18n::t("artisans.sold_out") }</span> }
                                } else {
                                    html! {}
                                } }
                                <button
                                    class={classes!("like", is_liked.then_some("liked"))}
                                    onclick={on_like}
                                    aria-pressed={is_liked.to_string()}
                                >
                                    { if is_liked { "♥" } else { "♡" } }
                                </button>
                            </div>
                            <div class="artisan-body">
                                <h4>{ work.title.clone() }</h4>
                                <p class="artist">{ by_line }</p>
                                <p class="muted">{ work.desc.clone() }</p>
                                <div class="artisan-foot">
                                    <span class="price">{ work.price.clone() }</span>
                                    <span class="rating">{ format!("★ {:.1}", work.rating) }</span>
                                    <button
                                        class="btn-primary"
                                        onclick={on_add}
                                        disabled={!work.in_stock}
                                    >
                                        { i18n::t("artisans.add_to_cart") }
                                    </button>
                                </div>
                            </div>
                        </article>
                    }
                }) }
            </div>
        </section>
    }
}
