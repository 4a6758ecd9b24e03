use yew::prelude::*;

use crate::i18n;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="site-footer">
            <p class="footer-title">{ i18n::t("app.title") }</p>
            <p>{ i18n::t("footer.tagline") }</p>
            <p class="muted">{ i18n::t("footer.rights") }</p>
        </footer>
    }
}
