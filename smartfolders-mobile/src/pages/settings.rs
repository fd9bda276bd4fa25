//! Settings page for mobile UI

use smartfolders_common::config::UiConfig;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::{Header, Toast, ToastMessage};
use crate::context::use_app_context;
use crate::storage::ConfigStorage;

#[derive(Properties, PartialEq)]
struct NumberFieldProps {
    label: &'static str,
    value: f64,
    step: &'static str,
    on_change: Callback<f64>,
}

#[function_component(NumberField)]
fn number_field(props: &NumberFieldProps) -> Html {
    let onchange = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            if let Ok(value) = input.value().trim().parse::<f64>() {
                on_change.emit(value);
            }
        })
    };

    html! {
        <label class="settings-field">
            <span class="label">{props.label}</span>
            <input
                type="number"
                step={props.step}
                value={props.value.to_string()}
                onchange={onchange}
            />
        </label>
    }
}

#[function_component(Settings)]
pub fn settings() -> Html {
    let context = use_app_context();
    let draft = use_state(|| (*context.config).clone());
    let toast = use_state(|| None::<ToastMessage>);

    let edit = |apply: fn(&mut UiConfig, f64)| {
        let draft = draft.clone();
        Callback::from(move |value: f64| {
            let mut next = (*draft).clone();
            apply(&mut next, value);
            draft.set(next);
        })
    };

    let save = {
        let draft = draft.clone();
        let config = context.config.clone();
        let toast = toast.clone();
        Callback::from(move |_| match ConfigStorage::save(&draft) {
            Ok(()) => {
                config.set((*draft).clone());
                toast.set(Some(ToastMessage::success("Preferences saved")));
            }
            Err(message) => toast.set(Some(ToastMessage::error(message))),
        })
    };

    let reset = {
        let draft = draft.clone();
        let config = context.config.clone();
        let toast = toast.clone();
        Callback::from(move |_| {
            ConfigStorage::clear();
            config.set(UiConfig::default());
            draft.set(UiConfig::default());
            toast.set(Some(ToastMessage::success("Preferences reset")));
        })
    };

    let dismiss_toast = {
        let toast = toast.clone();
        Callback::from(move |_: ()| toast.set(None))
    };

    html! {
        <div class="settings-page">
            <Header title="Settings" show_back={true} />
            <div class="page-content">
                <div class="settings-section">
                    <h2>{"Note rows"}</h2>
                    <NumberField
                        label="Action button width"
                        value={draft.swipe.action_width}
                        step="1"
                        on_change={edit(|config, value| config.swipe.action_width = value)}
                    />
                    <NumberField
                        label="Reveal threshold (share of panel)"
                        value={draft.swipe.reveal_fraction}
                        step="0.05"
                        on_change={edit(|config, value| config.swipe.reveal_fraction = value)}
                    />
                </div>

                <div class="settings-section">
                    <h2>{"Sheets"}</h2>
                    <NumberField
                        label="Swipe-down distance to close"
                        value={draft.sheet.dismiss_distance}
                        step="1"
                        on_change={edit(|config, value| config.sheet.dismiss_distance = value)}
                    />
                </div>

                <div class="settings-section">
                    <button class="mobile-button primary" onclick={save}>{"Save"}</button>
                    <button class="mobile-button secondary" onclick={reset}>{"Reset to defaults"}</button>
                </div>

                <div class="settings-section">
                    <h2>{"About"}</h2>
                    <p>{"Smart Folders v0.1.0"}</p>
                    <p>{"Built with Rust + Yew"}</p>
                </div>
            </div>

            <Toast message={(*toast).clone()} on_dismiss={dismiss_toast} />
        </div>
    }
}
