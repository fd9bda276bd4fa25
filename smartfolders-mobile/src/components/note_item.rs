//! Note row content

use smartfolders_common::{CaptureKind, NoteSummary};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct NoteItemProps {
    pub note: NoteSummary,
    #[prop_or_default]
    pub on_star: Option<Callback<()>>,
    #[prop_or_default]
    pub on_share: Option<Callback<()>>,
}

fn emit_on_click(callback: &Option<Callback<()>>) -> Callback<MouseEvent> {
    let callback = callback.clone();
    Callback::from(move |e: MouseEvent| {
        e.stop_propagation();
        if let Some(ref callback) = callback {
            callback.emit(());
        }
    })
}

#[function_component(NoteItem)]
pub fn note_item(props: &NoteItemProps) -> Html {
    let note = &props.note;

    let icon_class = match note.kind {
        CaptureKind::Voice => "note-icon note-icon-voice",
        CaptureKind::Typed => "note-icon note-icon-typed",
    };

    let star_class = if note.starred {
        "note-action star starred"
    } else {
        "note-action star"
    };

    html! {
        <div class="note-item">
            <div class={icon_class}>{note.kind.glyph()}</div>

            <div class="note-body">
                <span class="note-timestamp">{&note.timestamp}</span>
                <p class="note-content">{&note.content}</p>
            </div>

            <div class="note-actions">
                <button
                    class={star_class}
                    aria-pressed={note.starred.to_string()}
                    onclick={emit_on_click(&props.on_star)}
                >
                    {if note.starred { "★" } else { "☆" }}
                </button>
                <button class="note-action share" onclick={emit_on_click(&props.on_share)}>
                    {"↗"}
                </button>
            </div>
        </div>
    }
}
