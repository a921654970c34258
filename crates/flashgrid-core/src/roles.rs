//! Click roles inside a card
//!
//! Only a closed set of card parts flips the card. Everything else on the
//! card is [`ClickRole::Other`].

/// Part of a card that received a click
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClickRole {
    Emoji,
    EmojiAlt,
    Thumb,
    ThumbAlt,
    Caption,
    Other,
}

impl ClickRole {
    /// Classify an element from its tag name and `class` attribute.
    ///
    /// Role classes are checked first, then the `figcaption` tag.
    pub fn classify(tag_name: &str, class_list: &str) -> Self {
        for class in class_list.split_whitespace() {
            let role = match class {
                "emoji" => ClickRole::Emoji,
                "emoji-alt" => ClickRole::EmojiAlt,
                "thumb" => ClickRole::Thumb,
                "thumb-alt" => ClickRole::ThumbAlt,
                _ => continue,
            };
            return role;
        }
        if tag_name.eq_ignore_ascii_case("figcaption") {
            ClickRole::Caption
        } else {
            ClickRole::Other
        }
    }

    pub fn flips_card(&self) -> bool {
        !matches!(self, ClickRole::Other)
    }
}
