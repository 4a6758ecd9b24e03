use yew::prelude::*;
use yew_router::prelude::*;

use crate::pages::{home::HomePage, not_found::NotFound};

/// Browser routes for the single-page experience.
#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

/// Map a route to its page component.
#[must_use]
pub fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <HomePage /> },
        Route::NotFound => html! { <NotFound /> },
    }
}
