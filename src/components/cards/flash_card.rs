//! Flip card
//!
//! Front: media (emoji or thumbnail, with an optional alternate shown for
//! Urdu) over a four-language caption. Back: plural form and a sentence.

use dioxus::prelude::*;
use flashgrid_core::{ClickRole, Flashcard};

use crate::context::use_page;

/// A single flashcard.
///
/// `index` is the card's position across the whole deck; it addresses the
/// card's flip state in the page context.
///
/// # Example
///
/// ```ignore
/// FlashCard { index: 3, card: card.clone() }
/// ```
#[component]
pub fn FlashCard(index: usize, card: Flashcard) -> Element {
    let ctx = use_page();

    let state_classes = ctx
        .flips
        .read()
        .card(index)
        .map(|flip| flip.classes().join(" "))
        .unwrap_or_default();

    let has_alt = card.emoji_alt.is_some() || card.thumb_alt.is_some();
    let media_class = if has_alt { "card-media has-alt" } else { "card-media" };

    // The role comes from the clicked element's own tag and class. Role
    // elements stop the click so the card body does not see it again.
    let flip_on = move |tag: &str, class: &str| {
        let role = ClickRole::classify(tag, class);
        move |evt: MouseEvent| {
            if role.flips_card() {
                evt.stop_propagation();
            }
            ctx.click_card(index, role);
        }
    };

    rsx! {
        div {
            class: "card {state_classes}",
            onclick: flip_on("div", "card"),

            div { class: media_class,
                if let Some(url) = &card.thumb {
                    img {
                        class: "thumb",
                        src: "{url}",
                        alt: "{card.caption.english}",
                        onclick: flip_on("img", "thumb"),
                    }
                } else {
                    span {
                        class: "emoji",
                        onclick: flip_on("span", "emoji"),
                        "{card.emoji}"
                    }
                }

                if let Some(url) = &card.thumb_alt {
                    img {
                        class: "thumb-alt",
                        src: "{url}",
                        alt: "{card.caption.urdu}",
                        onclick: flip_on("img", "thumb-alt"),
                    }
                } else if let Some(emoji) = &card.emoji_alt {
                    span {
                        class: "emoji-alt",
                        onclick: flip_on("span", "emoji-alt"),
                        "{emoji}"
                    }
                }
            }

            figcaption {
                class: "front",
                onclick: flip_on("figcaption", "front"),
                span { class: "lang-en", "{card.caption.english}" }
                span { class: "lang-urd lang-script", "{card.caption.urdu}" }
                span { class: "lang-ar lang-script", "{card.caption.arabic}" }
                span { class: "lang-per lang-script", "{card.caption.persian}" }
            }

            div { class: "back",
                div { class: "plural",
                    span { class: "plural-label", "Plural" }
                    "{card.back.plural}"
                }
                p { class: "sentence", "{card.back.sentence}" }
            }
        }
    }
}
