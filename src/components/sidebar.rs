//! Sidebar Component
//!
//! Slide-in drawer listing the deck sections.

use dioxus::prelude::*;
use flashgrid_core::{DeckSection, SidebarState};

use super::ScrollButton;

#[derive(Props, Clone, PartialEq)]
pub struct SidebarProps {
    /// Open/closed state, toggled from the page header
    pub state: Signal<SidebarState>,
    /// Sections to list
    pub sections: Vec<DeckSection>,
}

#[component]
pub fn Sidebar(props: SidebarProps) -> Element {
    let state = *props.state.read();

    rsx! {
        aside {
            id: "sidebar",
            class: if state.is_open() { "sidebar open" } else { "sidebar" },
            "aria-hidden": state.aria_hidden(),

            h2 { "Sections" }

            nav { class: "sidebar-nav",
                for section in props.sections.iter() {
                    ScrollButton {
                        key: "{section.id}",
                        target: section.id.clone(),
                        label: section.title.clone(),
                    }
                }
            }
        }
    }
}
