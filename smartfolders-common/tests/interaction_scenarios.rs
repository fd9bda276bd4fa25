//! Interaction Scenario Tests
//! End-to-end flows across the gesture machines, filters and the store

use smartfolders_common::gesture::{
    CloseReason, RowAction, SheetConfig, SheetEvent, SheetPhase, SheetState, SwipeConfig,
    SwipePhase, SwipeSettle, SwipeState,
};
use smartfolders_common::screen::{MoveFlow, NoteListState};
use smartfolders_common::store::{NoteStore, StaticStore};
use smartfolders_common::{CaptureKind, FolderId, NoteFilter, NoteId};

// ============== Filter Tests ==============

#[test]
fn test_voice_filter_on_sample_folder() {
    let store = StaticStore::sample();
    let notes = store.list_notes(&FolderId::new("1")).unwrap();

    assert_eq!(notes.len(), 6);
    assert_eq!(notes.iter().filter(|n| n.kind == CaptureKind::Voice).count(), 4);
    assert_eq!(notes.iter().filter(|n| n.kind == CaptureKind::Typed).count(), 2);
    assert_eq!(notes.iter().filter(|n| n.starred).count(), 2);

    let voice: Vec<&str> = NoteFilter::Voice
        .apply(&notes)
        .iter()
        .map(|n| n.id.as_str())
        .collect();
    assert_eq!(voice, vec!["1", "2", "4", "6"]);
}

#[test]
fn test_reapplying_filter_changes_nothing() {
    let store = StaticStore::sample();
    let notes = store.list_notes(&FolderId::new("1")).unwrap();

    let mut list = NoteListState::default();
    list.set_filter(NoteFilter::Typed);
    let first = list.visible(&notes);
    list.set_filter(NoteFilter::Typed);
    let second = list.visible(&notes);
    assert_eq!(first, second);
}

// ============== Bottom Sheet Tests ==============

#[test]
fn test_sheet_drag_down_sixty_closes_once() {
    let mut sheet = SheetState::new(SheetConfig::default());
    sheet.present();

    let mut close_calls = 0;
    let mut handle = |event: Option<SheetEvent>| {
        if let Some(SheetEvent::CloseRequested(_)) = event {
            close_calls += 1;
        }
    };

    sheet.touch_start(400.0);
    sheet.touch_move(430.0);
    sheet.touch_move(460.0);
    handle(sheet.touch_end());
    handle(sheet.backdrop_tap());
    handle(sheet.close());

    assert_eq!(close_calls, 1);
    assert_eq!(sheet.phase(), SheetPhase::Dismissing);
    sheet.finish_exit();
    assert!(!sheet.is_presented());
}

#[test]
fn test_upward_drag_never_dismisses() {
    let mut magnitude = 0.0;
    while magnitude <= 1000.0 {
        let mut sheet = SheetState::default();
        sheet.present();
        sheet.touch_start(800.0);
        sheet.touch_move(800.0 - magnitude);
        assert_eq!(sheet.touch_end(), Some(SheetEvent::SnappedBack));
        assert_eq!(sheet.phase(), SheetPhase::Idle);
        magnitude += 50.0;
    }
}

#[test]
fn test_closing_closed_sheet_is_noop() {
    let mut sheet = SheetState::default();
    assert_eq!(sheet.close(), None);

    sheet.present();
    assert_eq!(sheet.close(), Some(SheetEvent::CloseRequested(CloseReason::Programmatic)));
    sheet.finish_exit();
    assert_eq!(sheet.close(), None);
}

// ============== Swipe Row Tests ==============

#[test]
fn test_swipe_exact_threshold_then_move() {
    let config = SwipeConfig::default();
    let threshold = config.reveal_threshold();
    let mut row = SwipeState::new(config.clone());

    row.touch_start(300.0, 50.0);
    assert!(row.touch_move(300.0 - threshold, 50.0));
    assert_eq!(row.touch_end(), SwipeSettle::Open);
    assert_eq!(row.offset(), config.panel_width());

    assert_eq!(row.invoke(RowAction::Move), RowAction::Move);
    assert_eq!(row.phase(), SwipePhase::Closed);
    assert_eq!(row.offset(), 0.0);
}

#[test]
fn test_rows_are_independent() {
    let mut first = SwipeState::default();
    let mut second = SwipeState::default();
    first.open();
    second.open();
    assert!(first.is_open() && second.is_open());

    first.close();
    assert!(second.is_open());
}

// ============== Move Flow Tests ==============

#[test]
fn test_swipe_move_into_sheet_flow() {
    let store = StaticStore::sample();
    let mut row = SwipeState::default();
    let mut sheet = SheetState::default();
    let mut flow = MoveFlow::default();

    row.open();
    if row.invoke(RowAction::Move) == RowAction::Move {
        flow.begin(NoteId::new("4"));
        sheet.present();
    }
    assert!(!row.is_open());
    assert!(sheet.is_presented());

    let destinations = store.move_destinations();
    flow.select(destinations[2].id.clone());
    let receipt = flow.confirm(&store).unwrap().unwrap();
    assert_eq!(receipt.destination_name, "Projects");

    assert_eq!(sheet.close(), Some(SheetEvent::CloseRequested(CloseReason::Programmatic)));
    assert!(!flow.is_open());
}
