//! Touch gesture state machines
//!
//! Both machines are plain values driven by touch coordinates in logical
//! pixels. Views own one instance per widget and render from its offset.

pub mod sheet;
pub mod swipe;

pub use sheet::{CloseReason, SheetConfig, SheetEvent, SheetPhase, SheetState};
pub use swipe::{RowAction, SwipeConfig, SwipePhase, SwipeSettle, SwipeState};
