//! Transient notification

use gloo_timers::callback::Timeout;
use yew::prelude::*;

const TOAST_MS: u32 = 2500;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastMessage {
    pub kind: ToastKind,
    pub text: String,
}

impl ToastMessage {
    pub fn success(text: impl Into<String>) -> Self {
        Self { kind: ToastKind::Success, text: text.into() }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self { kind: ToastKind::Error, text: text.into() }
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastProps {
    pub message: Option<ToastMessage>,
    pub on_dismiss: Callback<()>,
}

#[function_component(Toast)]
pub fn toast(props: &ToastProps) -> Html {
    {
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with(props.message.clone(), move |message| {
            // dropping the timeout cancels it when the message changes
            let timeout = message
                .as_ref()
                .map(|_| Timeout::new(TOAST_MS, move || on_dismiss.emit(())));
            move || drop(timeout)
        });
    }

    match props.message {
        Some(ref message) => {
            let class = match message.kind {
                ToastKind::Success => "toast toast-success",
                ToastKind::Error => "toast toast-error",
            };
            html! {
                <div class={class} role="status">{&message.text}</div>
            }
        }
        None => html! {},
    }
}
