use yew::prelude::*;

use crate::i18n;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <main class="not-found">
            <h1>{ i18n::t("notfound.title") }</h1>
            <p>{ i18n::t("notfound.body") }</p>
            <a href="/">{ i18n::t("notfound.back") }</a>
        </main>
    }
}
