//! Filter chip for the note list

use smartfolders_common::NoteFilter;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FilterChipProps {
    pub filter: NoteFilter,
    #[prop_or(false)]
    pub active: bool,
    pub on_select: Callback<NoteFilter>,
}

#[function_component(FilterChip)]
pub fn filter_chip(props: &FilterChipProps) -> Html {
    let onclick = {
        let filter = props.filter;
        let on_select = props.on_select.clone();
        Callback::from(move |_| on_select.emit(filter))
    };

    let class = if props.active {
        "filter-chip active"
    } else {
        "filter-chip"
    };

    html! {
        <button class={class} onclick={onclick}>
            {props.filter.label()}
        </button>
    }
}
