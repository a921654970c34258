//! UI Components for Flashgrid.

pub mod cards;
mod language_switch;
mod page_header;
mod row_selector;
mod scroll_button;
mod sidebar;

pub use cards::{CardGrid, FlashCard};
pub use language_switch::LanguageSwitch;
pub use page_header::PageHeader;
pub use row_selector::RowSelector;
pub use scroll_button::ScrollButton;
pub use sidebar::Sidebar;
