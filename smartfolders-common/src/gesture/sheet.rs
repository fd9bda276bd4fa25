//! Bottom sheet presentation and drag-to-dismiss

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SheetConfig {
    pub dismiss_distance: f64, // downward travel that commits a dismissal
    pub drag_activation: f64,  // downward travel before the sheet claims the touch
    pub enter_ms: u32,
    pub exit_ms: u32,
    pub backdrop_opacity: f64,
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self {
            dismiss_distance: 50.0,
            drag_activation: 5.0,
            enter_ms: 400,
            exit_ms: 300,
            backdrop_opacity: 0.5,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SheetPhase {
    /// Not presented
    Closed,
    /// Presented and at rest
    Idle,
    /// Finger down inside the sheet
    Tracking { start_y: f64 },
    /// Exit animation running; the close request has been emitted
    Dismissing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseReason {
    Backdrop,
    Swipe,
    Programmatic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetEvent {
    /// Fire the owner's close callback
    CloseRequested(CloseReason),
    /// Drag released short of the threshold
    SnappedBack,
}

/// Per-sheet gesture state
///
/// Every path into `Dismissing` goes through one transition that emits a
/// single [`SheetEvent::CloseRequested`]; requests made while closed or
/// already dismissing are ignored.
#[derive(Debug, Clone, PartialEq)]
pub struct SheetState {
    config: SheetConfig,
    phase: SheetPhase,
    offset: f64,
    exit_ticket: u32, // bumped on every entry into `Dismissing`
}

impl SheetState {
    pub fn new(config: SheetConfig) -> Self {
        Self {
            config,
            phase: SheetPhase::Closed,
            offset: 0.0,
            exit_ticket: 0,
        }
    }

    pub fn config(&self) -> &SheetConfig {
        &self.config
    }

    pub fn phase(&self) -> SheetPhase {
        self.phase
    }

    /// Downward displacement from the open position
    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Whether the sheet should be in the tree at all
    pub fn is_presented(&self) -> bool {
        self.phase != SheetPhase::Closed
    }

    pub fn is_dismissing(&self) -> bool {
        self.phase == SheetPhase::Dismissing
    }

    pub fn is_tracking(&self) -> bool {
        matches!(self.phase, SheetPhase::Tracking { .. })
    }

    pub fn present(&mut self) {
        if matches!(self.phase, SheetPhase::Closed | SheetPhase::Dismissing) {
            tracing::debug!("sheet presented");
            self.phase = SheetPhase::Idle;
            self.offset = 0.0;
        }
    }

    /// Follow the owner's visibility flag; never emits a close request
    pub fn sync_visibility(&mut self, visible: bool) {
        if visible {
            self.present();
        } else if !matches!(self.phase, SheetPhase::Closed | SheetPhase::Dismissing) {
            self.begin_dismiss();
        }
    }

    pub fn touch_start(&mut self, y: f64) {
        if self.phase == SheetPhase::Idle {
            self.phase = SheetPhase::Tracking { start_y: y };
            self.offset = 0.0;
        }
    }

    /// Feed a move; returns true once the sheet owns the drag
    pub fn touch_move(&mut self, y: f64) -> bool {
        match self.phase {
            SheetPhase::Tracking { start_y } => {
                let dy = y - start_y;
                // no overshoot above the open position
                self.offset = dy.max(0.0);
                dy > self.config.drag_activation
            }
            _ => false,
        }
    }

    pub fn touch_end(&mut self) -> Option<SheetEvent> {
        if !self.is_tracking() {
            return None;
        }

        if self.offset >= self.config.dismiss_distance {
            self.request_close(CloseReason::Swipe)
        } else {
            tracing::debug!(offset = self.offset, "sheet drag released short");
            self.phase = SheetPhase::Idle;
            self.offset = 0.0;
            Some(SheetEvent::SnappedBack)
        }
    }

    pub fn touch_cancel(&mut self) {
        if self.is_tracking() {
            self.phase = SheetPhase::Idle;
            self.offset = 0.0;
        }
    }

    pub fn backdrop_tap(&mut self) -> Option<SheetEvent> {
        self.request_close(CloseReason::Backdrop)
    }

    pub fn close(&mut self) -> Option<SheetEvent> {
        self.request_close(CloseReason::Programmatic)
    }

    /// Identifies the current dismissal, for timers that finish it later
    pub fn exit_ticket(&self) -> u32 {
        self.exit_ticket
    }

    /// Exit animation finished
    pub fn finish_exit(&mut self) {
        self.finish_exit_of(self.exit_ticket);
    }

    /// Finish the dismissal `ticket`; stale tickets from an earlier close are ignored
    pub fn finish_exit_of(&mut self, ticket: u32) {
        if self.phase == SheetPhase::Dismissing && ticket == self.exit_ticket {
            self.phase = SheetPhase::Closed;
            self.offset = 0.0;
        }
    }

    fn begin_dismiss(&mut self) {
        self.phase = SheetPhase::Dismissing;
        self.exit_ticket = self.exit_ticket.wrapping_add(1);
    }

    fn request_close(&mut self, reason: CloseReason) -> Option<SheetEvent> {
        match self.phase {
            SheetPhase::Closed | SheetPhase::Dismissing => None,
            SheetPhase::Idle | SheetPhase::Tracking { .. } => {
                tracing::debug!(?reason, offset = self.offset, "sheet dismissing");
                self.begin_dismiss();
                Some(SheetEvent::CloseRequested(reason))
            }
        }
    }
}

impl Default for SheetState {
    fn default() -> Self {
        Self::new(SheetConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn presented() -> SheetState {
        let mut state = SheetState::default();
        state.present();
        state
    }

    fn drag(state: &mut SheetState, dy: f64) -> Option<SheetEvent> {
        state.touch_start(500.0);
        state.touch_move(500.0 + dy);
        state.touch_end()
    }

    #[test]
    fn test_starts_closed() {
        let state = SheetState::default();
        assert_eq!(state.phase(), SheetPhase::Closed);
        assert!(!state.is_presented());
    }

    #[test]
    fn test_swipe_past_threshold_dismisses() {
        let mut state = presented();
        assert_eq!(drag(&mut state, 60.0), Some(SheetEvent::CloseRequested(CloseReason::Swipe)));
        assert!(state.is_dismissing());

        state.finish_exit();
        assert_eq!(state.phase(), SheetPhase::Closed);
    }

    #[test]
    fn test_exact_threshold_dismisses() {
        let mut state = presented();
        assert_eq!(drag(&mut state, 50.0), Some(SheetEvent::CloseRequested(CloseReason::Swipe)));
    }

    #[test]
    fn test_short_drag_snaps_back() {
        let mut state = presented();
        assert_eq!(drag(&mut state, 49.0), Some(SheetEvent::SnappedBack));
        assert_eq!(state.phase(), SheetPhase::Idle);
        assert_eq!(state.offset(), 0.0);
    }

    #[test]
    fn test_upward_drag_is_clamped() {
        let mut state = presented();
        state.touch_start(500.0);
        assert!(!state.touch_move(100.0));
        assert_eq!(state.offset(), 0.0);
        assert_eq!(state.touch_end(), Some(SheetEvent::SnappedBack));
    }

    #[test]
    fn test_drag_claims_after_activation() {
        let mut state = presented();
        state.touch_start(500.0);
        assert!(!state.touch_move(504.0));
        assert_eq!(state.offset(), 4.0);
        assert!(state.touch_move(510.0));
    }

    #[test]
    fn test_down_then_up_does_not_dismiss() {
        let mut state = presented();
        state.touch_start(500.0);
        state.touch_move(580.0);
        state.touch_move(520.0);
        assert_eq!(state.touch_end(), Some(SheetEvent::SnappedBack));
    }

    #[test]
    fn test_backdrop_tap_bypasses_drag() {
        let mut state = presented();
        assert_eq!(state.backdrop_tap(), Some(SheetEvent::CloseRequested(CloseReason::Backdrop)));
        assert_eq!(state.backdrop_tap(), None);
        assert_eq!(state.close(), None);
    }

    #[test]
    fn test_backdrop_tap_during_drag() {
        let mut state = presented();
        state.touch_start(500.0);
        state.touch_move(530.0);
        assert_eq!(state.backdrop_tap(), Some(SheetEvent::CloseRequested(CloseReason::Backdrop)));
        // the release that follows must not fire again
        assert_eq!(state.touch_end(), None);
    }

    #[test]
    fn test_close_when_closed_is_noop() {
        let mut state = SheetState::default();
        assert_eq!(state.close(), None);
        assert_eq!(state.backdrop_tap(), None);
        assert_eq!(state.touch_end(), None);
        assert_eq!(state.phase(), SheetPhase::Closed);
    }

    #[test]
    fn test_touches_ignored_while_dismissing() {
        let mut state = presented();
        state.close();
        state.touch_start(500.0);
        assert!(!state.touch_move(700.0));
        assert_eq!(state.touch_end(), None);
        assert!(state.is_dismissing());
    }

    #[test]
    fn test_sync_visibility_does_not_emit() {
        let mut state = SheetState::default();
        state.sync_visibility(true);
        assert_eq!(state.phase(), SheetPhase::Idle);

        state.sync_visibility(false);
        assert!(state.is_dismissing());
        assert_eq!(state.close(), None);

        state.finish_exit();
        assert!(!state.is_presented());
    }

    #[test]
    fn test_present_again_after_dismissal() {
        let mut state = presented();
        state.close();
        state.present();
        assert_eq!(state.phase(), SheetPhase::Idle);
        assert_eq!(state.close(), Some(SheetEvent::CloseRequested(CloseReason::Programmatic)));
    }

    #[test]
    fn test_stale_exit_does_not_cut_short_a_later_dismissal() {
        let mut state = presented();
        state.close();
        let first = state.exit_ticket();

        state.present();
        state.close();
        let second = state.exit_ticket();
        assert_ne!(first, second);

        state.finish_exit_of(first);
        assert!(state.is_dismissing());

        state.finish_exit_of(second);
        assert!(!state.is_presented());
    }

    #[test]
    fn test_close_fires_once_for_every_distance() {
        let threshold = SheetConfig::default().dismiss_distance;
        let mut dy = -100.0;
        while dy <= 200.0 {
            let mut state = presented();
            let event = drag(&mut state, dy);

            if dy >= threshold {
                assert_eq!(event, Some(SheetEvent::CloseRequested(CloseReason::Swipe)), "dy {}", dy);
                assert_eq!(state.close(), None, "dy {}", dy);
                assert_eq!(state.backdrop_tap(), None, "dy {}", dy);
            } else {
                assert_eq!(event, Some(SheetEvent::SnappedBack), "dy {}", dy);
                assert_eq!(state.phase(), SheetPhase::Idle, "dy {}", dy);
            }
            dy += 5.0;
        }
    }
}
