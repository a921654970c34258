//! Page components for Flashgrid.

mod deck;

pub use deck::DeckPage;
