//! Move-to-folder destination picker

use smartfolders_common::gesture::SheetConfig;
use smartfolders_common::{FolderId, FolderSummary};
use yew::prelude::*;

use super::BottomSheet;

#[derive(Properties, PartialEq)]
pub struct MoveSheetProps {
    pub visible: bool,
    pub destinations: Vec<FolderSummary>,
    #[prop_or_default]
    pub selected: Option<FolderId>,
    pub on_select: Callback<FolderId>,
    /// Cancel button, close button, backdrop tap and swipe-down
    pub on_cancel: Callback<()>,
    pub on_confirm: Callback<()>,
    #[prop_or_default]
    pub config: SheetConfig,
}

#[function_component(MoveSheet)]
pub fn move_sheet(props: &MoveSheetProps) -> Html {
    let cancel = {
        let on_cancel = props.on_cancel.clone();
        Callback::from(move |_: MouseEvent| on_cancel.emit(()))
    };

    let confirm = {
        let on_confirm = props.on_confirm.clone();
        Callback::from(move |_: MouseEvent| on_confirm.emit(()))
    };

    let folder_rows = props
        .destinations
        .iter()
        .map(|folder| {
            let selected = props.selected.as_ref() == Some(&folder.id);
            let onclick = {
                let on_select = props.on_select.clone();
                let id = folder.id.clone();
                Callback::from(move |_: MouseEvent| on_select.emit(id.clone()))
            };

            html! {
                <button
                    key={folder.id.to_string()}
                    class={classes!("move-folder", selected.then_some("selected"))}
                    onclick={onclick}
                >
                    <span
                        class="move-folder-icon"
                        style={format!("background-color: {}; color: {};", folder.color.with_alpha(0x20), folder.color)}
                    >
                        {folder.icon.glyph()}
                    </span>
                    <span class="move-folder-info">
                        <span class="move-folder-name">{&folder.name}</span>
                        <span class="move-folder-count">{format!("{} items", folder.item_count)}</span>
                    </span>
                </button>
            }
        })
        .collect::<Html>();

    html! {
        <BottomSheet visible={props.visible} on_close={props.on_cancel.clone()} config={props.config.clone()}>
            <div class="move-sheet-header">
                <h2 class="move-sheet-title">{"Move to Folder"}</h2>
                <button class="move-sheet-close" aria-label="Close" onclick={cancel.clone()}>{"✕"}</button>
            </div>
            <p class="move-sheet-subtitle">{"Select a destination folder"}</p>

            <div class="move-folder-list">
                {folder_rows}
            </div>

            <div class="move-sheet-buttons">
                <button class="mobile-button secondary" onclick={cancel}>{"Cancel"}</button>
                <button
                    class="mobile-button primary"
                    disabled={props.selected.is_none()}
                    onclick={confirm}
                >
                    {"Move"}
                </button>
            </div>
        </BottomSheet>
    }
}
