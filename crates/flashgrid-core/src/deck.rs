//! Flashcard deck content

use serde::{Deserialize, Serialize};

/// Caption words, one per language
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Caption {
    pub english: String,
    pub urdu: String,
    pub arabic: String,
    pub persian: String,
}

/// Back face content
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CardBack {
    pub plural: String,
    pub sentence: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flashcard {
    pub emoji: String,
    /// Shown instead of `emoji` while the Urdu caption is active
    #[serde(default)]
    pub emoji_alt: Option<String>,
    #[serde(default)]
    pub thumb: Option<String>,
    #[serde(default)]
    pub thumb_alt: Option<String>,
    pub caption: Caption,
    #[serde(default)]
    pub back: CardBack,
}

/// A titled group of cards; its id is also a scroll target
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckSection {
    pub id: String,
    pub title: String,
    pub cards: Vec<Flashcard>,
}

/// Total cards across sections
pub fn card_count(sections: &[DeckSection]) -> usize {
    sections.iter().map(|s| s.cards.len()).sum()
}

fn card(
    emoji: &str,
    [english, urdu, arabic, persian]: [&str; 4],
    plural: &str,
    sentence: &str,
) -> Flashcard {
    Flashcard {
        emoji: emoji.to_string(),
        emoji_alt: None,
        thumb: None,
        thumb_alt: None,
        caption: Caption {
            english: english.to_string(),
            urdu: urdu.to_string(),
            arabic: arabic.to_string(),
            persian: persian.to_string(),
        },
        back: CardBack {
            plural: plural.to_string(),
            sentence: sentence.to_string(),
        },
    }
}

/// Deck used when the config has none
pub fn sample_deck() -> Vec<DeckSection> {
    vec![
        DeckSection {
            id: "animals".to_string(),
            title: "Animals".to_string(),
            cards: vec![
                card("🐈", ["Cat", "بلی", "قطة", "گربه"], "قطط", "The cat sleeps in the sun."),
                card("🐕", ["Dog", "کتا", "كلب", "سگ"], "كلاب", "The dog waits by the door."),
                card("🐦", ["Bird", "پرندہ", "طائر", "پرنده"], "طيور", "A bird sings at dawn."),
                card("🐟", ["Fish", "مچھلی", "سمكة", "ماهی"], "أسماك", "The fish swims in the river."),
            ],
        },
        DeckSection {
            id: "fruits".to_string(),
            title: "Fruits".to_string(),
            cards: vec![
                card("🍎", ["Apple", "سیب", "تفاحة", "سیب"], "تفاح", "She eats an apple every day."),
                card("🍌", ["Banana", "کیلا", "موزة", "موز"], "موز", "The banana is ripe."),
                card("🍇", ["Grapes", "انگور", "عنب", "انگور"], "أعناب", "Grapes grow on vines."),
                card("🍊", ["Orange", "سنگترہ", "برتقالة", "پرتقال"], "برتقال", "He peels an orange."),
            ],
        },
    ]
}
