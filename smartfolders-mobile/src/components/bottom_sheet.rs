//! Bottom sheet modal with backdrop and drag-to-dismiss

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use smartfolders_common::gesture::{SheetConfig, SheetEvent, SheetState};
use web_sys::TouchEvent;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct BottomSheetProps {
    pub visible: bool,
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub children: Children,
    /// Extra inline style for the sheet surface
    #[prop_or_default]
    pub style: Option<AttrValue>,
    #[prop_or_default]
    pub config: SheetConfig,
}

fn touch_y(e: &TouchEvent) -> Option<f64> {
    e.touches().get(0).map(|touch| f64::from(touch.client_y()))
}

type ExitTimer = Rc<RefCell<Option<Timeout>>>;

/// Unmount the sheet once the exit animation has played.
/// Replacing the slot drops (and cancels) any earlier exit timer.
fn schedule_exit(state: &Rc<RefCell<SheetState>>, timer: &ExitTimer, redraw: &UseForceUpdateHandle) {
    let (exit_ms, ticket) = {
        let state = state.borrow();
        (state.config().exit_ms, state.exit_ticket())
    };
    let state = state.clone();
    let redraw = redraw.clone();
    *timer.borrow_mut() = Some(Timeout::new(exit_ms, move || {
        state.borrow_mut().finish_exit_of(ticket);
        redraw.force_update();
    }));
}

#[function_component(BottomSheet)]
pub fn bottom_sheet(props: &BottomSheetProps) -> Html {
    let state = use_mut_ref(|| SheetState::new(props.config.clone()));
    let exit_timer: ExitTimer = use_mut_ref(|| None);
    let redraw = use_force_update();

    // Owner-driven visibility; closing from here never calls `on_close`
    {
        let state = state.clone();
        let exit_timer = exit_timer.clone();
        let redraw = redraw.clone();
        let config = props.config.clone();
        use_effect_with(props.visible, move |visible| {
            if !state.borrow().is_presented() && state.borrow().config() != &config {
                *state.borrow_mut() = SheetState::new(config);
            }

            let was_dismissing = state.borrow().is_dismissing();
            state.borrow_mut().sync_visibility(*visible);
            if state.borrow().is_dismissing() && !was_dismissing {
                schedule_exit(&state, &exit_timer, &redraw);
            }
            redraw.force_update();
            || ()
        });
    }

    let handle_event = {
        let state = state.clone();
        let exit_timer = exit_timer.clone();
        let redraw = redraw.clone();
        let on_close = props.on_close.clone();
        move |event: Option<SheetEvent>| {
            if let Some(SheetEvent::CloseRequested(reason)) = event {
                tracing::debug!(?reason, "sheet close requested");
                schedule_exit(&state, &exit_timer, &redraw);
                on_close.emit(());
            }
            redraw.force_update();
        }
    };

    let on_backdrop = {
        let state = state.clone();
        let handle_event = handle_event.clone();
        Callback::from(move |_: MouseEvent| {
            let event = state.borrow_mut().backdrop_tap();
            handle_event(event);
        })
    };

    let on_touch_start = {
        let state = state.clone();
        Callback::from(move |e: TouchEvent| {
            if let Some(y) = touch_y(&e) {
                state.borrow_mut().touch_start(y);
            }
        })
    };

    let on_touch_move = {
        let state = state.clone();
        let redraw = redraw.clone();
        Callback::from(move |e: TouchEvent| {
            if let Some(y) = touch_y(&e) {
                state.borrow_mut().touch_move(y);
                redraw.force_update();
            }
        })
    };

    let on_touch_end = {
        let state = state.clone();
        let handle_event = handle_event.clone();
        Callback::from(move |_: TouchEvent| {
            let event = state.borrow_mut().touch_end();
            handle_event(event);
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

    let current = state.borrow();
    if !current.is_presented() {
        return html! {};
    }

    let config = current.config();
    let dismissing = current.is_dismissing();

    let backdrop_style = format!(
        "opacity: {}; transition: opacity {}ms;",
        if dismissing { 0.0 } else { config.backdrop_opacity },
        if dismissing { config.exit_ms } else { config.enter_ms },
    );

    let transform = if dismissing {
        "translateY(100%)".to_string()
    } else {
        format!("translateY({}px)", current.offset())
    };
    let transition = if current.is_tracking() {
        "none".to_string()
    } else if dismissing {
        format!("transform {}ms ease-in", config.exit_ms)
    } else {
        "transform 200ms ease-out".to_string()
    };
    let mut sheet_style = format!(
        "transform: {}; transition: {}; animation-duration: {}ms;",
        transform, transition, config.enter_ms
    );
    if let Some(ref extra) = props.style {
        sheet_style.push(' ');
        sheet_style.push_str(extra);
    }

    html! {
        <div class="sheet-root">
            <div class="sheet-backdrop" style={backdrop_style} onclick={on_backdrop}></div>
            <div
                class={classes!("sheet", (!dismissing).then_some("sheet-enter"))}
                style={sheet_style}
                ontouchstart={on_touch_start}
                ontouchmove={on_touch_move}
                ontouchend={on_touch_end}
                ontouchcancel={on_touch_cancel}
            >
                <div class="sheet-handle"></div>
                {props.children.clone()}
            </div>
        </div>
    }
}
