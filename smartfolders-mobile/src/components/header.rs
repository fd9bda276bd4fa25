//! Screen header with back button

use smartfolders_common::{AccentColor, IconTag};
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub title: String,
    #[prop_or_default]
    pub subtitle: Option<String>,
    #[prop_or(false)]
    pub show_back: bool,
    /// Folder glyph on its accent color, shown before the title
    #[prop_or_default]
    pub badge: Option<(IconTag, AccentColor)>,
    /// Trailing buttons
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let navigator = use_navigator();

    let go_back = {
        let navigator = navigator.clone();
        Callback::from(move |_| {
            if let Some(nav) = &navigator {
                nav.back();
            }
        })
    };

    html! {
        <header class="mobile-header">
            {if props.show_back {
                html! {
                    <button class="back-button" onclick={go_back}>
                        {"‹"}
                    </button>
                }
            } else {
                html! {}
            }}

            <div class="header-center">
                {if let Some((icon, ref color)) = props.badge {
                    html! {
                        <div class="header-badge" style={format!("background-color: {};", color)}>
                            {icon.glyph()}
                        </div>
                    }
                } else {
                    html! {}
                }}
                <div>
                    <h1 class="header-title">{&props.title}</h1>
                    {if let Some(ref subtitle) = props.subtitle {
                        html! { <p class="header-subtitle">{subtitle}</p> }
                    } else {
                        html! {}
                    }}
                </div>
            </div>

            <div class="header-trailing">
                {props.children.clone()}
            </div>
        </header>
    }
}
