//! Preset records
//!
//! A preset is the full set of card-grid dimensions for one density
//! (4, 5 or 6 cards per row). [`BasePreset`] holds the reference values
//! at scale 1.0; [`ScaledPreset`] holds every field multiplied by one
//! shared factor and tagged with its unit.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{GridError, GridResult};
use crate::units::{Length, Unit};

/// One dimension of a preset, in publication order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PresetField {
    GridMin,
    Gap,
    Emoji,
    Width,
    Height,
    Radius,
    CaptionPadding,
    CaptionFont,
    CaptionRadius,
    FontBase,
    FontPlural,
    FontLabel,
    FontSmall,
    PluralMarginBottom,
    PluralPaddingBottom,
    PluralBorderWidth,
    SentenceMarginTop,
}

impl PresetField {
    pub const COUNT: usize = 17;

    pub const ALL: [PresetField; Self::COUNT] = [
        PresetField::GridMin,
        PresetField::Gap,
        PresetField::Emoji,
        PresetField::Width,
        PresetField::Height,
        PresetField::Radius,
        PresetField::CaptionPadding,
        PresetField::CaptionFont,
        PresetField::CaptionRadius,
        PresetField::FontBase,
        PresetField::FontPlural,
        PresetField::FontLabel,
        PresetField::FontSmall,
        PresetField::PluralMarginBottom,
        PresetField::PluralPaddingBottom,
        PresetField::PluralBorderWidth,
        PresetField::SentenceMarginTop,
    ];

    /// Custom property the stylesheet reads this field from
    pub fn css_var(&self) -> &'static str {
        match self {
            PresetField::GridMin => "--grid-min",
            PresetField::Gap => "--gap",
            PresetField::Emoji => "--emoji-size",
            PresetField::Width => "--card-width",
            PresetField::Height => "--card-height",
            PresetField::Radius => "--radius",
            PresetField::CaptionPadding => "--caption-padding",
            PresetField::CaptionFont => "--caption-font",
            PresetField::CaptionRadius => "--caption-radius",
            PresetField::FontBase => "--font-base",
            PresetField::FontPlural => "--font-plural",
            PresetField::FontLabel => "--font-label",
            PresetField::FontSmall => "--font-small",
            PresetField::PluralMarginBottom => "--plural-margin-bottom",
            PresetField::PluralPaddingBottom => "--plural-padding-bottom",
            PresetField::PluralBorderWidth => "--plural-border-width",
            PresetField::SentenceMarginTop => "--sentence-margin-top",
        }
    }

    pub fn unit(&self) -> Unit {
        match self {
            PresetField::CaptionFont
            | PresetField::FontBase
            | PresetField::FontPlural
            | PresetField::FontSmall => Unit::Rem,
            PresetField::FontLabel => Unit::Em,
            _ => Unit::Px,
        }
    }

    fn index(&self) -> usize {
        *self as usize
    }
}

/// Reference dimensions of the 4-per-row layout.
///
/// Units are implied by [`PresetField::unit`]. Values never change once the
/// page is running; a config file may replace them at startup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BasePreset {
    pub grid_min: f64,
    pub gap: f64,
    pub emoji: f64,
    pub width: f64,
    pub height: f64,
    pub radius: f64,
    pub caption_padding: f64,
    pub caption_font: f64,
    pub caption_radius: f64,
    pub font_base: f64,
    pub font_plural: f64,
    pub font_label: f64,
    pub font_small: f64,
    pub plural_margin_bottom: f64,
    pub plural_padding_bottom: f64,
    pub plural_border_width: f64,
    pub sentence_margin_top: f64,
}

impl Default for BasePreset {
    fn default() -> Self {
        Self {
            grid_min: 300.0,
            gap: 40.0,
            emoji: 120.0,
            width: 300.0,
            height: 220.0,
            radius: 12.0,
            caption_padding: 20.0,
            caption_font: 2.0,
            caption_radius: 12.0,
            font_base: 1.0,
            font_plural: 1.7,
            font_label: 1.3,
            font_small: 0.825,
            plural_margin_bottom: 30.0,
            plural_padding_bottom: 15.0,
            plural_border_width: 3.0,
            sentence_margin_top: 4.0,
        }
    }
}

impl BasePreset {
    pub fn value(&self, field: PresetField) -> f64 {
        match field {
            PresetField::GridMin => self.grid_min,
            PresetField::Gap => self.gap,
            PresetField::Emoji => self.emoji,
            PresetField::Width => self.width,
            PresetField::Height => self.height,
            PresetField::Radius => self.radius,
            PresetField::CaptionPadding => self.caption_padding,
            PresetField::CaptionFont => self.caption_font,
            PresetField::CaptionRadius => self.caption_radius,
            PresetField::FontBase => self.font_base,
            PresetField::FontPlural => self.font_plural,
            PresetField::FontLabel => self.font_label,
            PresetField::FontSmall => self.font_small,
            PresetField::PluralMarginBottom => self.plural_margin_bottom,
            PresetField::PluralPaddingBottom => self.plural_padding_bottom,
            PresetField::PluralBorderWidth => self.plural_border_width,
            PresetField::SentenceMarginTop => self.sentence_margin_top,
        }
    }

    pub fn length(&self, field: PresetField) -> Length {
        Length::new(self.value(field), field.unit())
    }
}

/// Fully scaled preset ready for publication
#[derive(Debug, Clone, PartialEq)]
pub struct ScaledPreset {
    factor: f64,
    values: [Length; PresetField::COUNT],
}

impl ScaledPreset {
    /// Base record at factor 1.0, values copied verbatim
    pub fn identity(base: &BasePreset) -> Self {
        Self {
            factor: 1.0,
            values: PresetField::ALL.map(|field| base.length(field)),
        }
    }

    /// Every field multiplied by `factor`. Grid minimum and card width take
    /// `card_width` as-is so the published width is exactly the track size.
    pub fn scaled(base: &BasePreset, factor: f64, card_width: f64) -> Self {
        let values = PresetField::ALL.map(|field| match field {
            PresetField::GridMin | PresetField::Width => Length::px(card_width),
            _ => base.length(field).scaled(factor),
        });
        Self { factor, values }
    }

    pub fn factor(&self) -> f64 {
        self.factor
    }

    pub fn get(&self, field: PresetField) -> Length {
        self.values[field.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (PresetField, Length)> + '_ {
        PresetField::ALL.into_iter().map(move |field| (field, self.get(field)))
    }

    /// `(custom property, serialized value)` pairs in publication order
    pub fn declarations(&self) -> Vec<(&'static str, String)> {
        self.iter()
            .map(|(field, length)| (field.css_var(), length.to_string()))
            .collect()
    }

    /// Render as a `:root { ... }` block
    pub fn to_css(&self) -> String {
        let mut css = String::from(":root {\n");
        for (name, value) in self.declarations() {
            css.push_str(&format!("  {}: {};\n", name, value));
        }
        css.push_str("}\n");
        css
    }
}

/// Row-selector options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum ColumnPreset {
    #[default]
    Four,
    Five,
    Six,
}

impl ColumnPreset {
    pub const ALL: [ColumnPreset; 3] = [ColumnPreset::Four, ColumnPreset::Five, ColumnPreset::Six];

    /// Cards added on top of the auto-fit column count
    pub fn extra_cards(&self) -> u32 {
        match self {
            ColumnPreset::Four => 0,
            ColumnPreset::Five => 1,
            ColumnPreset::Six => 2,
        }
    }

    pub fn key(&self) -> u8 {
        match self {
            ColumnPreset::Four => 4,
            ColumnPreset::Five => 5,
            ColumnPreset::Six => 6,
        }
    }
}

impl fmt::Display for ColumnPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl TryFrom<u8> for ColumnPreset {
    type Error = GridError;

    fn try_from(key: u8) -> GridResult<Self> {
        match key {
            4 => Ok(ColumnPreset::Four),
            5 => Ok(ColumnPreset::Five),
            6 => Ok(ColumnPreset::Six),
            other => Err(GridError::UnknownColumnPreset(other.to_string())),
        }
    }
}

impl From<ColumnPreset> for u8 {
    fn from(preset: ColumnPreset) -> u8 {
        preset.key()
    }
}

impl FromStr for ColumnPreset {
    type Err = GridError;

    fn from_str(s: &str) -> GridResult<Self> {
        let key: u8 = s
            .trim()
            .parse()
            .map_err(|_| GridError::UnknownColumnPreset(s.to_string()))?;
        ColumnPreset::try_from(key)
    }
}

/// The three presets computed from one viewport snapshot
#[derive(Debug, Clone, PartialEq)]
pub struct PresetTable {
    pub four: ScaledPreset,
    pub five: ScaledPreset,
    pub six: ScaledPreset,
}

impl PresetTable {
    pub fn get(&self, key: ColumnPreset) -> &ScaledPreset {
        match key {
            ColumnPreset::Four => &self.four,
            ColumnPreset::Five => &self.five,
            ColumnPreset::Six => &self.six,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (ColumnPreset, &ScaledPreset)> + '_ {
        ColumnPreset::ALL.into_iter().map(move |key| (key, self.get(key)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_table_is_complete() {
        for (i, field) in PresetField::ALL.iter().enumerate() {
            assert_eq!(field.index(), i);
            assert!(field.css_var().starts_with("--"));
        }
    }

    #[test]
    fn units_follow_the_stylesheet() {
        assert_eq!(PresetField::CaptionFont.unit(), Unit::Rem);
        assert_eq!(PresetField::FontLabel.unit(), Unit::Em);
        assert_eq!(PresetField::FontSmall.unit(), Unit::Rem);
        assert_eq!(PresetField::Gap.unit(), Unit::Px);
    }

    #[test]
    fn identity_copies_base() {
        let preset = ScaledPreset::identity(&BasePreset::default());
        assert_eq!(preset.factor(), 1.0);
        assert_eq!(preset.get(PresetField::Emoji).to_string(), "120px");
        assert_eq!(preset.get(PresetField::FontSmall).to_string(), "0.825rem");
        assert_eq!(preset.get(PresetField::FontLabel).to_string(), "1.3em");
    }

    #[test]
    fn css_block_lists_every_field() {
        let css = ScaledPreset::identity(&BasePreset::default()).to_css();
        assert!(css.starts_with(":root {"));
        assert!(css.contains("  --grid-min: 300px;\n"));
        assert!(css.contains("  --sentence-margin-top: 4px;\n"));
        assert_eq!(css.lines().count(), PresetField::COUNT + 2);
    }

    #[test]
    fn column_preset_parsing() {
        assert_eq!("5".parse::<ColumnPreset>().unwrap(), ColumnPreset::Five);
        assert_eq!(ColumnPreset::try_from(6).unwrap(), ColumnPreset::Six);
        assert!(matches!(
            "3".parse::<ColumnPreset>(),
            Err(GridError::UnknownColumnPreset(_))
        ));
        assert!("six".parse::<ColumnPreset>().is_err());
    }

    #[test]
    fn column_preset_serde_uses_key() {
        let json = serde_json::to_string(&ColumnPreset::Six).unwrap();
        assert_eq!(json, "6");
        let back: ColumnPreset = serde_json::from_str("5").unwrap();
        assert_eq!(back, ColumnPreset::Five);
        assert!(serde_json::from_str::<ColumnPreset>("9").is_err());
    }

    #[test]
    fn base_preset_partial_override() {
        let base: BasePreset = serde_json::from_str(r#"{ "gap": 24 }"#).unwrap();
        assert_eq!(base.gap, 24.0);
        assert_eq!(base.grid_min, 300.0);
    }
}
