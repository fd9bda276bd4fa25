//! Smart Folders Mobile UI
//!
//! Touch-optimized note-taking interface built with Yew.
//! Folders and notes come from an injected [`NoteStore`]; the
//! app ships with the static sample store.

mod components;
mod context;
mod logging;
mod pages;
mod router;
mod storage;

use smartfolders_common::store::NoteStore;
use yew::prelude::*;
use yew_router::prelude::*;

pub use context::StoreHandle;

use context::AppContext;
use router::{switch, Route};
use storage::ConfigStorage;

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub store: StoreHandle,
}

/// Main mobile application component
#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let config = use_state(ConfigStorage::load);

    let context = AppContext {
        store: props.store.clone(),
        config,
    };

    html! {
        <ContextProvider<AppContext> context={context}>
            <BrowserRouter>
                <div class="mobile-app">
                    <Switch<Route> render={switch} />
                </div>
            </BrowserRouter>
        </ContextProvider<AppContext>>
    }
}

/// Mount the app over `store`
pub fn run_with_store(store: impl NoteStore + 'static) {
    console_error_panic_hook::set_once();

    let config = ConfigStorage::load();
    if let Err(e) = logging::LoggingConfig::new(&config.log_level).init() {
        web_sys::console::warn_1(&format!("logging disabled: {}", e).into());
    }
    tracing::info!("starting Smart Folders");

    yew::Renderer::<App>::with_props(AppProps {
        store: StoreHandle::new(store),
    })
    .render();
}

/// Entry point for WASM
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn run_app() {
    run_with_store(smartfolders_common::store::StaticStore::sample());
}
