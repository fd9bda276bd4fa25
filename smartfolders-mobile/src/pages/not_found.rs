//! Fallback page for unknown routes

use yew::prelude::*;
use yew_router::prelude::*;

use crate::router::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found-page">
            <h1>{"This screen doesn't exist."}</h1>
            <Link<Route> to={Route::Home} classes={classes!("mobile-button", "primary")}>
                {"Go to home screen"}
            </Link<Route>>
        </div>
    }
}
