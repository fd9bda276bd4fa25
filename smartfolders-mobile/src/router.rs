//! Router configuration for mobile UI

use yew::prelude::*;
use yew_router::prelude::*;

use crate::pages::*;

/// Application routes
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    /// Query string carries `name`, `icon` and `color`
    #[at("/folder/:id")]
    Folder { id: String },
    #[at("/settings")]
    Settings,
    #[not_found]
    #[at("/404")]
    NotFound,
}

/// Switch function to render pages
pub fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <home::Home /> },
        Route::Folder { id } => html! { <folder::FolderDetail folder_id={id} /> },
        Route::Settings => html! { <settings::Settings /> },
        Route::NotFound => html! { <not_found::NotFound /> },
    }
}
