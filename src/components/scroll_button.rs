//! Scroll Button Component

use dioxus::prelude::*;
use flashgrid_core::ScrollTarget;

use crate::bridge;

/// Sidebar button that smooth-scrolls to the element named by its
/// `data-target`. A blank target does nothing.
#[component]
pub fn ScrollButton(target: String, label: String) -> Element {
    let attribute = target.clone();

    rsx! {
        button {
            class: "scroll-btn",
            "data-target": "{target}",
            onclick: move |_| {
                if let Some(target) = ScrollTarget::from_attribute(Some(&attribute)) {
                    spawn(async move {
                        bridge::scroll_into_view(&target).await;
                    });
                }
            },
            "{label}"
        }
    }
}
