//! Language Switch Component
//!
//! Two-button dropdown for one language pair. The main button opens the
//! dropdown, the sub button switches language and swaps the two labels.

use dioxus::prelude::*;
use flashgrid_core::{LanguageDropdown, LanguagePair, DROPDOWN_ARROW};

use crate::bridge;

#[component]
pub fn LanguageSwitch(pair: LanguagePair) -> Element {
    let mut state = use_signal(|| LanguageDropdown::new(pair));

    let prefix = pair.id_prefix();
    let open = state.read().is_open();
    let main_text = state.read().main_text().to_string();
    let sub_label = state.read().sub_label().to_string();

    rsx! {
        div { class: "dropdown",
            button {
                id: "{prefix}-main",
                class: if open { "main-btn open" } else { "main-btn" },
                onclick: move |_| {
                    state.write().toggle_open();
                },
                "{main_text} "
                span { class: "arrow", "{DROPDOWN_ARROW}" }
            }

            button {
                id: "{prefix}-sub",
                class: "sub-btn",
                onclick: move |_| {
                    let on = state.write().choose_sub();
                    tracing::debug!(class = pair.body_class(), on, "language switched");
                    spawn(async move {
                        bridge::set_body_class(pair.body_class(), on).await;
                    });
                },
                "{sub_label}"
            }
        }
    }
}
