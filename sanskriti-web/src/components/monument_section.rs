//! Konark Sun Temple spotlight with the external AR viewer link.
use yew::prelude::*;

use sanskriti_core::MonumentData;

use crate::a11y;
use crate::dom;
use crate::i18n;

#[derive(Properties, Clone, PartialEq)]
pub struct MonumentSectionProps {
    /// Fired when the visitor launches the AR view; drives the
    /// Heritage Explorer achievement.
    pub on_visit: Callback<()>,
}

#[function_component(MonumentSection)]
pub fn monument_section(props: &MonumentSectionProps) -> Html {
    let monument = use_memo((), |_| {
        MonumentData::load_from_static()
            .monuments
            .into_iter()
            .find(|m| m.ar_url.is_some())
    });

    let Some(monument) = (*monument).clone() else {
        return html! {};
    };

    let on_launch = {
        let on_visit = props.on_visit.clone();
        let ar_url = monument.ar_url.clone();
        Callback::from(move |_| {
            if let Some(url) = &ar_url {
                dom::open_external(url);
            }
            a11y::set_status(&i18n::t("monument.visited"));
            on_visit.emit(());
        })
    };

    html! {
        <section id="monument" class="monument-spotlight">
            <header class="section-header">
                <h2>{ i18n::t("monument.title") }</h2>
                <p>{ i18n::t("monument.subtitle") }</p>
            </header>
            <article
                class="monument-card"
                style={format!("background-image: url('{}')", monument.image)}
            >
                <span class="badge unesco">{ i18n::t("monument.unesco") }</span>
                <div class="monument-body">
                    <h3>{ monument.name.clone() }</h3>
                    <p>{ monument.blurb.clone() }</p>
                    <button class="btn-primary" onclick={on_launch}>
                        { i18n::t("monument.launch") }
                    </button>
                </div>
            </article>
        </section>
    }
}
