//! Swipeable list row revealing Move and Delete actions

use smartfolders_common::gesture::{RowAction, SwipeConfig, SwipeState};
use web_sys::TouchEvent;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SwipeRowProps {
    #[prop_or_default]
    pub children: Children,
    pub on_move: Callback<()>,
    #[prop_or_default]
    pub on_delete: Option<Callback<()>>,
    #[prop_or_default]
    pub config: SwipeConfig,
}

fn first_touch(e: &TouchEvent) -> Option<(f64, f64)> {
    e.touches()
        .get(0)
        .map(|touch| (f64::from(touch.client_x()), f64::from(touch.client_y())))
}

#[function_component(SwipeRow)]
pub fn swipe_row(props: &SwipeRowProps) -> Html {
    let state = use_mut_ref(|| SwipeState::new(props.config.clone()));
    let redraw = use_force_update();

    // thresholds changed in settings
    {
        let state = state.clone();
        use_effect_with(props.config.clone(), move |config| {
            if state.borrow().config() != config {
                *state.borrow_mut() = SwipeState::new(config.clone());
            }
            || ()
        });
    }

    let on_touch_start = {
        let state = state.clone();
        Callback::from(move |e: TouchEvent| {
            if let Some((x, y)) = first_touch(&e) {
                state.borrow_mut().touch_start(x, y);
            }
        })
    };

    let on_touch_move = {
        let state = state.clone();
        let redraw = redraw.clone();
        Callback::from(move |e: TouchEvent| {
            if let Some((x, y)) = first_touch(&e) {
                if state.borrow_mut().touch_move(x, y) {
                    redraw.force_update();
                }
            }
        })
    };

    let on_touch_end = {
        let state = state.clone();
        let redraw = redraw.clone();
        Callback::from(move |_: TouchEvent| {
            state.borrow_mut().touch_end();
            redraw.force_update();
        })
    };

    let on_touch_cancel = {
        let state = state.clone();
        let redraw = redraw.clone();
        Callback::from(move |_: TouchEvent| {
            state.borrow_mut().touch_cancel();
            redraw.force_update();
        })
    };

    let action_button = |action: RowAction, class: &'static str| {
        let state = state.clone();
        let redraw = redraw.clone();
        let callback = match action {
            RowAction::Move => Some(props.on_move.clone()),
            RowAction::Delete => props.on_delete.clone(),
        };
        let onclick = Callback::from(move |_: MouseEvent| {
            state.borrow_mut().invoke(action);
            redraw.force_update();
            if let Some(ref callback) = callback {
                callback.emit(());
            }
        });

        html! {
            <button
                class={classes!("swipe-action", class)}
                style={format!("width: {}px;", props.config.action_width)}
                onclick={onclick}
            >
                {action.label()}
            </button>
        }
    };

    let current = state.borrow();
    let transition = if current.is_dragging() {
        "none".to_string()
    } else {
        format!("transform {}ms ease-out", current.config().settle_ms)
    };
    let style = format!(
        "transform: translateX({}px); transition: {}; touch-action: pan-y;",
        -current.offset(),
        transition
    );

    html! {
        <div class="swipe-row">
            <div
                class="swipe-actions"
                style={format!("width: {}px;", current.config().panel_width())}
            >
                {action_button(RowAction::Move, "swipe-action-move")}
                {action_button(RowAction::Delete, "swipe-action-delete")}
            </div>

            <div
                class="swipe-content"
                style={style}
                ontouchstart={on_touch_start}
                ontouchmove={on_touch_move}
                ontouchend={on_touch_end}
                ontouchcancel={on_touch_cancel}
            >
                {props.children.clone()}
            </div>
        </div>
    }
}
