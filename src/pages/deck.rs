//! Deck page: header, sidebar and every section of cards.

use dioxus::prelude::*;
use flashgrid_core::{DeckSection, SidebarState};

use crate::components::{CardGrid, PageHeader, Sidebar};

/// Deck-wide index of each section's first card
fn first_indices(sections: &[DeckSection]) -> Vec<usize> {
    sections
        .iter()
        .scan(0, |next, section| {
            let first = *next;
            *next += section.cards.len();
            Some(first)
        })
        .collect()
}

#[component]
pub fn DeckPage(sections: Vec<DeckSection>) -> Element {
    let sidebar = use_signal(SidebarState::default);
    let offsets = first_indices(&sections);

    rsx! {
        PageHeader { sidebar }
        Sidebar { state: sidebar, sections: sections.clone() }

        main { class: "deck",
            for (section, first_index) in sections.iter().zip(offsets) {
                CardGrid {
                    key: "{section.id}",
                    section: section.clone(),
                    first_index,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flashgrid_core::deck::sample_deck;

    #[test]
    fn sections_index_cards_contiguously() {
        let mut sections = sample_deck();
        sections[0].cards.truncate(3);
        assert_eq!(first_indices(&sections), vec![0, 3]);
        assert!(first_indices(&[]).is_empty());
    }
}
