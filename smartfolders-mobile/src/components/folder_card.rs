//! Smart folder card for the home grid

use smartfolders_common::{AccentColor, IconTag};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FolderCardProps {
    pub name: String,
    pub description: String,
    pub item_count: u32,
    pub color: AccentColor,
    pub icon: IconTag,
    #[prop_or_default]
    pub onclick: Option<Callback<()>>,
}

#[function_component(FolderCard)]
pub fn folder_card(props: &FolderCardProps) -> Html {
    let onclick = props.onclick.clone();
    let handle_click = move |_| {
        if let Some(ref callback) = onclick {
            callback.emit(());
        }
    };

    let class = if props.onclick.is_some() {
        "folder-card clickable"
    } else {
        "folder-card"
    };

    html! {
        <div class={class} style={format!("background-color: {};", props.color)} onclick={handle_click}>
            <div class="folder-card-header">
                <span class="folder-card-icon">{props.icon.glyph()}</span>
                <span class="folder-card-title">{&props.name}</span>
            </div>
            <p class="folder-card-description">{&props.description}</p>
            <span class="folder-card-count">{format!("{} items", props.item_count)}</span>
        </div>
    }
}
