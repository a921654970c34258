//! Card Grid Component
//!
//! One deck section: a title over an auto-fill grid of flashcards.

use dioxus::prelude::*;
use flashgrid_core::DeckSection;

use super::FlashCard;

/// Renders a section of the deck.
///
/// `first_index` is the deck-wide index of the section's first card.
#[component]
pub fn CardGrid(section: DeckSection, first_index: usize) -> Element {
    rsx! {
        section { id: "{section.id}", class: "deck-section",
            h2 { class: "deck-section__title", "{section.title}" }

            div { class: "card-grid",
                for (offset, card) in section.cards.iter().enumerate() {
                    {
                        let index = first_index + offset;
                        rsx! {
                            FlashCard { key: "{index}", index, card: card.clone() }
                        }
                    }
                }
            }
        }
    }
}
