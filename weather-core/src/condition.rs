//! Condition-code lookup.
//!
//! OpenWeather groups its condition ids in blocks of a hundred
//! (2xx thunderstorm, 3xx drizzle, ...). Each block maps to a glyph and a color.

use std::ops::RangeInclusive;

/// Terminal color for a condition, independent of any color crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConditionColor {
    Red,
    Cyan,
    Blue,
    White,
    Yellow,
    Default,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Condition {
    Thunderstorm,
    Drizzle,
    Rain,
    Snow,
    Atmosphere,
    Clear,
    Clouds,
    Unknown,
}

const RANGES: &[(RangeInclusive<u16>, Condition)] = &[
    (200..=299, Condition::Thunderstorm),
    (300..=399, Condition::Drizzle),
    (500..=599, Condition::Rain),
    (600..=699, Condition::Snow),
    (700..=799, Condition::Atmosphere),
    (800..=800, Condition::Clear),
    (801..=899, Condition::Clouds),
];

impl Condition {
    pub fn from_code(code: u16) -> Self {
        RANGES
            .iter()
            .find(|(range, _)| range.contains(&code))
            .map(|(_, condition)| *condition)
            .unwrap_or(Condition::Unknown)
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            Condition::Thunderstorm => "\u{1F329}",
            Condition::Drizzle | Condition::Rain => "\u{1F326}",
            Condition::Snow => "\u{1F328}",
            Condition::Atmosphere => "\u{1F343}",
            Condition::Clear => "\u{1F324}",
            Condition::Clouds => "\u{1F325}",
            Condition::Unknown => "\u{1F308}",
        }
    }

    pub fn color(&self) -> ConditionColor {
        match self {
            Condition::Thunderstorm => ConditionColor::Red,
            Condition::Drizzle => ConditionColor::Cyan,
            Condition::Rain | Condition::Atmosphere => ConditionColor::Blue,
            Condition::Snow | Condition::Clouds => ConditionColor::White,
            Condition::Clear => ConditionColor::Yellow,
            Condition::Unknown => ConditionColor::Default,
        }
    }
}
