//! Home screen: smart folder grid

use smartfolders_common::params::FolderParams;
use smartfolders_common::{AccentColor, FolderSummary, IconTag};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::FolderCard;
use crate::context::use_app_context;
use crate::router::Route;

const NEW_FOLDER_COLOR: &str = "#A7F3D0";

#[function_component(Home)]
pub fn home() -> Html {
    let context = use_app_context();
    let navigator = use_navigator().unwrap();
    let folders = use_memo(context.store.clone(), |store| store.list_folders());

    let open_settings = {
        let navigator = navigator.clone();
        Callback::from(move |_| navigator.push(&Route::Settings))
    };

    let open_folder = {
        let navigator = navigator.clone();
        Callback::from(move |folder: FolderSummary| {
            let route = Route::Folder { id: folder.id.to_string() };
            if let Err(e) = navigator.push_with_query(&route, &FolderParams::from(&folder)) {
                tracing::warn!(error = %e, folder = %folder.id, "navigation failed");
            }
        })
    };

    let start_voice_capture = Callback::from(|_| {
        tracing::info!("voice capture is not available in this build");
    });

    html! {
        <div class="home-page">
            <div class="home-header">
                <h1 class="home-title">{"Smart Folders"}</h1>
                <button class="settings-button" aria-label="Settings" onclick={open_settings}>
                    {"⚙️"}
                </button>
            </div>

            <div class="page-content">
                <div class="folder-grid">
                    {for folders.iter().map(|folder| {
                        let onclick = {
                            let open_folder = open_folder.clone();
                            let folder = folder.clone();
                            Callback::from(move |_: ()| open_folder.emit(folder.clone()))
                        };
                        html! {
                            <div class="folder-grid-item" key={folder.id.to_string()}>
                                <FolderCard
                                    name={folder.name.clone()}
                                    description={folder.description.clone()}
                                    item_count={folder.item_count}
                                    color={folder.color.clone()}
                                    icon={folder.icon}
                                    onclick={Some(onclick)}
                                />
                            </div>
                        }
                    })}
                    <div class="folder-grid-item" key="new-folder">
                        <FolderCard
                            name="New Folder"
                            description="Tap to create"
                            item_count={0}
                            color={AccentColor::parse(NEW_FOLDER_COLOR).unwrap_or_default()}
                            icon={IconTag::Plus}
                        />
                    </div>
                </div>

                <div class="empty-state">
                    <div class="empty-state-icon">{"🧠"}</div>
                    <p class="empty-state-title">{"Start capturing your thoughts"}</p>
                    <p class="empty-state-subtitle">{"Speak or type to begin"}</p>
                </div>
            </div>

            <div class="capture-bar">
                <input class="capture-input" type="text" placeholder="Type your thought..." />
                <button class="mic-button" aria-label="Record" onclick={start_voice_capture}>
                    {"🎙"}
                </button>
            </div>
        </div>
    }
}
