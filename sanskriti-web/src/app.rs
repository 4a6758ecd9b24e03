//! Application shell.
use yew::prelude::*;
use yew_router::prelude::*;

use crate::routes::{Route, switch};

/// Top-level component mounted to the DOM.
///
/// Sets up the router context for the entire application; all shared session
/// state lives with the home page.
#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}
