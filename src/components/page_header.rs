//! Page Header Component
//!
//! Sticky bar with the sidebar toggle, the row selector and both language
//! switches.

use dioxus::prelude::*;
use flashgrid_core::{LanguagePair, SidebarState};

use super::{LanguageSwitch, RowSelector};

#[component]
pub fn PageHeader(sidebar: Signal<SidebarState>) -> Element {
    let mut sidebar = sidebar;

    rsx! {
        header { class: "page-header",
            button {
                id: "toggleSidebar",
                class: "sidebar-toggle",
                onclick: move |_| {
                    let open = sidebar.write().toggle();
                    tracing::debug!(open, "sidebar toggled");
                },
                "☰"
            }

            h1 { class: "page-title", "Flashcards" }

            RowSelector {}

            for pair in LanguagePair::ALL {
                LanguageSwitch { key: "{pair:?}", pair }
            }
        }
    }
}
