//! Group colors and the light/dark decisions derived from them.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Luminance above which the conversation header switches to dark text.
const HEADER_LIGHT_THRESHOLD: f64 = 0.5;

/// Luminance above which the group card badge switches to its light variant.
/// Intentionally separate from [`HEADER_LIGHT_THRESHOLD`].
const BADGE_LIGHT_THRESHOLD: f64 = 0.6;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    #[error("color must start with '#': {0:?}")]
    MissingHash(String),
    #[error("color must have exactly 6 hex digits: {0:?}")]
    InvalidLength(String),
    #[error("color contains a non-hex digit: {0:?}")]
    InvalidDigit(String),
}

/// A `#RRGGBB` color as stored in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor {
    r: u8,
    g: u8,
    b: u8,
}

impl HexColor {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn parse(raw: &str) -> Result<Self, ColorParseError> {
        let digits = raw
            .strip_prefix('#')
            .ok_or_else(|| ColorParseError::MissingHash(raw.to_owned()))?;

        if digits.len() != 6 {
            return Err(ColorParseError::InvalidLength(raw.to_owned()));
        }

        if !digits.bytes().all(|byte| byte.is_ascii_hexdigit()) {
            return Err(ColorParseError::InvalidDigit(raw.to_owned()));
        }

        let channel = |range: std::ops::Range<usize>| {
            digits
                .get(range)
                .and_then(|pair| u8::from_str_radix(pair, 16).ok())
                .ok_or_else(|| ColorParseError::InvalidDigit(raw.to_owned()))
        };

        Ok(Self {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }

    pub fn rgb(&self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }

    /// Perceptual luminance in `0.0..=1.0`.
    pub fn luminance(&self) -> f64 {
        (0.299 * f64::from(self.r) + 0.587 * f64::from(self.g) + 0.114 * f64::from(self.b))
            / 255.0
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl TryFrom<String> for HexColor {
    type Error = ColorParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<HexColor> for String {
    fn from(value: HexColor) -> Self {
        value.to_string()
    }
}

/// Whether a background reads as light or dark.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackgroundTone {
    Light,
    Dark,
}

impl BackgroundTone {
    fn from_luminance(luminance: f64, threshold: f64) -> Self {
        if luminance > threshold {
            Self::Light
        } else {
            Self::Dark
        }
    }
}

/// Tone used to pick the conversation header text color.
pub fn header_text_tone(color: HexColor) -> BackgroundTone {
    BackgroundTone::from_luminance(color.luminance(), HEADER_LIGHT_THRESHOLD)
}

/// Tone used to pick the member badge variant on a group card.
pub fn badge_tone(color: HexColor) -> BackgroundTone {
    BackgroundTone::from_luminance(color.luminance(), BADGE_LIGHT_THRESHOLD)
}
