//! Reusable mobile UI components

pub mod bottom_sheet;
pub mod filter_chip;
pub mod folder_card;
pub mod header;
pub mod insight_card;
pub mod move_sheet;
pub mod note_item;
pub mod swipe_row;
pub mod toast;

pub use bottom_sheet::BottomSheet;
pub use filter_chip::FilterChip;
pub use folder_card::FolderCard;
pub use header::Header;
pub use insight_card::InsightCard;
pub use move_sheet::MoveSheet;
pub use note_item::NoteItem;
pub use swipe_row::SwipeRow;
pub use toast::{Toast, ToastMessage};
