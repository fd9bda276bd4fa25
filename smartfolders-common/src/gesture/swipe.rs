//! Swipe-to-reveal row actions

use serde::{Deserialize, Serialize};

/// Geometry and thresholds of a swipe row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SwipeConfig {
    pub action_width: f64,        // width of one trailing button
    pub action_count: u32,        // buttons in the trailing panel
    pub activation_distance: f64, // horizontal travel before the row claims the touch
    pub reveal_fraction: f64,     // share of the panel that commits a reveal
    pub settle_ms: u32,           // settle animation length
}

impl Default for SwipeConfig {
    fn default() -> Self {
        Self {
            action_width: 88.0,
            action_count: 2,
            activation_distance: 10.0,
            reveal_fraction: 0.5,
            settle_ms: 200,
        }
    }
}

impl SwipeConfig {
    pub fn panel_width(&self) -> f64 {
        self.action_width * f64::from(self.action_count)
    }

    pub fn reveal_threshold(&self) -> f64 {
        self.panel_width() * self.reveal_fraction
    }
}

/// Trailing row actions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RowAction {
    Move,
    Delete,
}

impl RowAction {
    pub fn label(self) -> &'static str {
        match self {
            Self::Move => "Move",
            Self::Delete => "Delete",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SwipePhase {
    Closed,
    /// Finger down, direction not decided yet
    Pending { x: f64, y: f64, base: f64 },
    /// Horizontal drag owned by the row
    Tracking { x: f64, base: f64 },
    /// Vertical drag, left to the list scroller until release
    Scrolling { base: f64 },
    Open,
}

/// Resting position chosen on release
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeSettle {
    Open,
    Closed,
}

/// Per-row gesture state
///
/// `offset` is the revealed width of the action panel, from `0` (closed) to
/// `panel_width` (fully revealed).
#[derive(Debug, Clone, PartialEq)]
pub struct SwipeState {
    config: SwipeConfig,
    phase: SwipePhase,
    offset: f64,
}

impl SwipeState {
    pub fn new(config: SwipeConfig) -> Self {
        Self {
            config,
            phase: SwipePhase::Closed,
            offset: 0.0,
        }
    }

    pub fn config(&self) -> &SwipeConfig {
        &self.config
    }

    pub fn phase(&self) -> SwipePhase {
        self.phase
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn is_open(&self) -> bool {
        self.phase == SwipePhase::Open
    }

    /// True while the finger drives the offset (no settle animation)
    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, SwipePhase::Tracking { .. })
    }

    pub fn touch_start(&mut self, x: f64, y: f64) {
        self.phase = SwipePhase::Pending {
            x,
            y,
            base: self.resting_offset(),
        };
    }

    /// Feed a move; returns true when the row owns the gesture
    pub fn touch_move(&mut self, x: f64, y: f64) -> bool {
        match self.phase {
            SwipePhase::Pending { x: x0, y: y0, base } => {
                let dx = x - x0;
                let dy = y - y0;
                let slop = self.config.activation_distance;
                // travel that already commits a reveal claims the row even inside the slop
                let claims = dx.abs() > slop || dx.abs() >= self.config.reveal_threshold();

                if claims && dx.abs() > dy.abs() {
                    tracing::debug!(dx, "swipe row claimed horizontal drag");
                    self.phase = SwipePhase::Tracking { x: x0, base };
                    self.track(x);
                    true
                } else if dy.abs() > slop {
                    self.phase = SwipePhase::Scrolling { base };
                    false
                } else {
                    false
                }
            }
            SwipePhase::Tracking { .. } => {
                self.track(x);
                true
            }
            _ => false,
        }
    }

    fn track(&mut self, x: f64) {
        if let SwipePhase::Tracking { x: x0, base } = self.phase {
            // leftward travel reveals the panel
            let revealed = base - (x - x0);
            self.offset = revealed.clamp(0.0, self.config.panel_width());
        }
    }

    /// Release the finger and settle fully open or fully closed
    pub fn touch_end(&mut self) -> SwipeSettle {
        match self.phase {
            SwipePhase::Tracking { .. } => {
                let settle = if self.offset >= self.config.reveal_threshold() {
                    SwipeSettle::Open
                } else {
                    SwipeSettle::Closed
                };
                tracing::debug!(offset = self.offset, ?settle, "swipe row released");
                self.settle(settle);
                settle
            }
            SwipePhase::Pending { base, .. } | SwipePhase::Scrolling { base } => {
                let settle = Self::settle_for_base(base);
                self.settle(settle);
                settle
            }
            SwipePhase::Open => SwipeSettle::Open,
            SwipePhase::Closed => SwipeSettle::Closed,
        }
    }

    /// The touch was taken away (e.g. by the browser); restore the resting position
    pub fn touch_cancel(&mut self) {
        let base = match self.phase {
            SwipePhase::Pending { base, .. }
            | SwipePhase::Tracking { base, .. }
            | SwipePhase::Scrolling { base } => base,
            _ => return,
        };
        self.settle(Self::settle_for_base(base));
    }

    pub fn open(&mut self) {
        self.settle(SwipeSettle::Open);
    }

    pub fn close(&mut self) {
        self.settle(SwipeSettle::Closed);
    }

    /// Tap on a revealed action: the row closes and hands the action back
    pub fn invoke(&mut self, action: RowAction) -> RowAction {
        tracing::debug!(action = action.label(), "swipe row action");
        self.close();
        action
    }

    fn settle(&mut self, settle: SwipeSettle) {
        match settle {
            SwipeSettle::Open => {
                self.phase = SwipePhase::Open;
                self.offset = self.config.panel_width();
            }
            SwipeSettle::Closed => {
                self.phase = SwipePhase::Closed;
                self.offset = 0.0;
            }
        }
    }

    fn resting_offset(&self) -> f64 {
        if self.is_open() {
            self.config.panel_width()
        } else {
            0.0
        }
    }

    fn settle_for_base(base: f64) -> SwipeSettle {
        if base > 0.0 {
            SwipeSettle::Open
        } else {
            SwipeSettle::Closed
        }
    }
}

impl Default for SwipeState {
    fn default() -> Self {
        Self::new(SwipeConfig::default())
    }
}
