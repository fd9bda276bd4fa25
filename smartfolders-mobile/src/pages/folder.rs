//! Folder detail screen: filtered notes, swipe actions and the move sheet

use smartfolders_common::params::FolderParams;
use smartfolders_common::screen::{MoveFlow, NoteListState};
use smartfolders_common::{folder_stats, FolderId, NoteFilter, NoteId, NoteSummary};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::{FilterChip, Header, InsightCard, MoveSheet, NoteItem, SwipeRow, Toast, ToastMessage};
use crate::context::use_app_context;

#[derive(Properties, PartialEq)]
pub struct FolderDetailProps {
    pub folder_id: String,
}

#[function_component(FolderDetail)]
pub fn folder_detail(props: &FolderDetailProps) -> Html {
    let context = use_app_context();
    let location = use_location();
    let config = (*context.config).clone();

    let folder_id = FolderId::new(props.folder_id.clone());
    let params = location
        .and_then(|location| location.query::<FolderParams>().ok())
        .unwrap_or_default();

    let list = use_state(NoteListState::default);
    let move_flow = use_state(MoveFlow::default);
    let toast = use_state(|| None::<ToastMessage>);

    let loaded = use_memo(
        (context.store.clone(), folder_id.clone()),
        |(store, folder_id)| {
            store.list_notes(folder_id).map_err(|e| {
                tracing::warn!(error = %e, "could not list notes");
                e.to_string()
            })
        },
    );
    let (notes, load_error) = match &*loaded {
        Ok(notes) => (notes.clone(), None),
        Err(message) => (Vec::new(), Some(message.clone())),
    };
    let insight = context.store.insight(&folder_id);

    let resolved = list.resolve(&notes);
    let visible = list.visible(&notes);

    let select_filter = {
        let list = list.clone();
        Callback::from(move |filter: NoteFilter| {
            let mut next = (*list).clone();
            next.set_filter(filter);
            list.set(next);
        })
    };

    let toggle_star = {
        let list = list.clone();
        Callback::from(move |note: NoteId| {
            let mut next = (*list).clone();
            next.toggle_star(&note);
            list.set(next);
        })
    };

    let begin_move = {
        let move_flow = move_flow.clone();
        Callback::from(move |note: NoteId| {
            let mut next = (*move_flow).clone();
            next.begin(note);
            move_flow.set(next);
        })
    };

    let delete_note = {
        let store = context.store.clone();
        let toast = toast.clone();
        Callback::from(move |note: NoteId| match store.delete_note(&note) {
            Ok(()) => toast.set(Some(ToastMessage::success("Note deleted"))),
            Err(e) => {
                tracing::info!(note = %note, error = %e, "delete refused");
                toast.set(Some(ToastMessage::error(e.to_string())));
            }
        })
    };

    let select_destination = {
        let move_flow = move_flow.clone();
        Callback::from(move |destination: FolderId| {
            let mut next = (*move_flow).clone();
            next.select(destination);
            move_flow.set(next);
        })
    };

    let cancel_move = {
        let move_flow = move_flow.clone();
        Callback::from(move |_: ()| {
            let mut next = (*move_flow).clone();
            next.cancel();
            move_flow.set(next);
        })
    };

    let confirm_move = {
        let move_flow = move_flow.clone();
        let store = context.store.clone();
        let toast = toast.clone();
        Callback::from(move |_: ()| {
            let mut next = (*move_flow).clone();
            match next.confirm(&*store) {
                Some(Ok(receipt)) => {
                    tracing::info!(note = %receipt.note_id, to = %receipt.to, "note moved");
                    toast.set(Some(ToastMessage::success(format!(
                        "Note moved to {}",
                        receipt.destination_name
                    ))));
                }
                Some(Err(e)) => toast.set(Some(ToastMessage::error(e.to_string()))),
                None => return,
            }
            move_flow.set(next);
        })
    };

    let dismiss_toast = {
        let toast = toast.clone();
        Callback::from(move |_: ()| toast.set(None))
    };

    let note_row = |note: &NoteSummary| {
        let id = note.id.clone();
        let on_move = {
            let begin_move = begin_move.clone();
            let id = id.clone();
            Callback::from(move |_: ()| begin_move.emit(id.clone()))
        };
        let on_delete = {
            let delete_note = delete_note.clone();
            let id = id.clone();
            Callback::from(move |_: ()| delete_note.emit(id.clone()))
        };
        let on_star = {
            let toggle_star = toggle_star.clone();
            let id = id.clone();
            Callback::from(move |_: ()| toggle_star.emit(id.clone()))
        };

        html! {
            <SwipeRow
                key={id.to_string()}
                on_move={on_move}
                on_delete={Some(on_delete)}
                config={config.swipe.clone()}
            >
                <NoteItem note={note.clone()} on_star={Some(on_star)} />
            </SwipeRow>
        }
    };

    html! {
        <div class="folder-page">
            <Header
                title={params.name().to_string()}
                subtitle={Some(folder_stats(&resolved))}
                show_back={true}
                badge={Some((params.icon(), params.color()))}
            >
                <button class="menu-button" aria-label="More">{"⋮"}</button>
            </Header>

            <div class="page-content">
                <div class="filter-bar">
                    {for NoteFilter::ALL.iter().map(|filter| html! {
                        <FilterChip
                            key={filter.to_string()}
                            filter={*filter}
                            active={list.filter() == *filter}
                            on_select={select_filter.clone()}
                        />
                    })}
                </div>

                {if let Some(insight) = insight {
                    html! { <InsightCard insight={insight} /> }
                } else {
                    html! {}
                }}

                <div class="note-list">
                    {if let Some(message) = load_error {
                        html! {
                            <div class="empty-state error">
                                <p>{message}</p>
                            </div>
                        }
                    } else if visible.is_empty() {
                        html! {
                            <div class="empty-state">
                                <p>{"No notes match this filter"}</p>
                            </div>
                        }
                    } else {
                        visible.iter().map(note_row).collect::<Html>()
                    }}
                </div>
            </div>

            <MoveSheet
                visible={move_flow.is_open()}
                destinations={context.store.move_destinations()}
                selected={move_flow.destination().cloned()}
                on_select={select_destination}
                on_cancel={cancel_move}
                on_confirm={confirm_move}
                config={config.sheet.clone()}
            />

            <Toast message={(*toast).clone()} on_dismiss={dismiss_toast} />
        </div>
    }
}
