//! Flashcard components

mod card_grid;
mod flash_card;

pub use card_grid::CardGrid;
pub use flash_card::FlashCard;
