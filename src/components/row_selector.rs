//! Row Selector Component
//!
//! `<select>` choosing 4, 5 or 6 cards per row.

use dioxus::prelude::*;
use flashgrid_core::ColumnPreset;

use crate::context::use_page;

#[component]
pub fn RowSelector() -> Element {
    let ctx = use_page();
    let selected = *ctx.selected.read();

    rsx! {
        select {
            id: "rowSelector",
            class: "row-selector",
            value: "{selected}",
            onchange: move |evt: FormEvent| {
                spawn(ctx.select_row(evt.value()));
            },

            for key in ColumnPreset::ALL {
                option {
                    key: "{key}",
                    value: "{key}",
                    selected: key == selected,
                    "{key} per row"
                }
            }
        }
    }
}
