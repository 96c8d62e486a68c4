//! Typed visual components attached to elements.
//!
//! Each element kind owns a fixed set of optional component slots
//! (`Element::image` / `text` / `button`) — there is no runtime-typed
//! component list to search. Field sets mirror the CUI component types
//! the export format targets.

use crate::wire;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// RGBA color, 4 × f32 in [0.0, 1.0].
///
/// The wire form is the CUI float string `"r g b a"`; serde goes through
/// that form so records and generated code agree.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Fully transparent black — the CUI default for image backgrounds.
    pub const TRANSPARENT: Self = Self::rgba(0.0, 0.0, 0.0, 0.0);

    /// Opaque black — the CUI default for text.
    pub const BLACK: Self = Self::rgba(0.0, 0.0, 0.0, 1.0);
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&wire::format_color(*self))
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        wire::parse_color(&s).map_err(serde::de::Error::custom)
    }
}

/// The game client's four UI fonts, named by their asset file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Font {
    #[serde(rename = "droidsansmono.ttf")]
    DroidSansMono,
    #[serde(rename = "permanentmarker.ttf")]
    PermanentMarker,
    #[serde(rename = "robotocondensed-bold.ttf")]
    RobotoCondensedBold,
    #[default]
    #[serde(rename = "robotocondensed-regular.ttf")]
    RobotoCondensedRegular,
}

impl Font {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::DroidSansMono => "droidsansmono.ttf",
            Self::PermanentMarker => "permanentmarker.ttf",
            Self::RobotoCondensedBold => "robotocondensed-bold.ttf",
            Self::RobotoCondensedRegular => "robotocondensed-regular.ttf",
        }
    }
}

/// Nine-way text alignment within the element rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TextAnchor {
    UpperLeft,
    #[default]
    UpperCenter,
    UpperRight,
    MiddleLeft,
    MiddleCenter,
    MiddleRight,
    LowerLeft,
    LowerCenter,
    LowerRight,
}

impl TextAnchor {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::UpperLeft => "UpperLeft",
            Self::UpperCenter => "UpperCenter",
            Self::UpperRight => "UpperRight",
            Self::MiddleLeft => "MiddleLeft",
            Self::MiddleCenter => "MiddleCenter",
            Self::MiddleRight => "MiddleRight",
            Self::LowerLeft => "LowerLeft",
            Self::LowerCenter => "LowerCenter",
            Self::LowerRight => "LowerRight",
        }
    }
}

/// Overflow policy for text that exceeds its rectangle vertically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum VerticalWrapMode {
    #[default]
    Truncate,
    Overflow,
}

impl VerticalWrapMode {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Truncate => "Truncate",
            Self::Overflow => "Overflow",
        }
    }
}

/// How an image fills its rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImageType {
    Simple,
    Sliced,
    Tiled,
    Filled,
}

impl ImageType {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Simple => "Simple",
            Self::Sliced => "Sliced",
            Self::Tiled => "Tiled",
            Self::Filled => "Filled",
        }
    }
}

/// `UnityEngine.UI.Text` — labels and button captions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TextComponent {
    pub text: String,
    pub font_size: u32,
    pub font: Font,
    pub align: TextAnchor,
    pub color: Color,
    pub vertical_overflow: VerticalWrapMode,
    pub fade_in: f32,
}

impl Default for TextComponent {
    fn default() -> Self {
        Self {
            text: String::new(),
            font_size: 14,
            font: Font::default(),
            align: TextAnchor::default(),
            color: Color::BLACK,
            vertical_overflow: VerticalWrapMode::default(),
            fade_in: 0.0,
        }
    }
}

/// `UnityEngine.UI.Image` — panel backgrounds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ImageComponent {
    pub color: Color,
    pub sprite: Option<String>,
    pub material: Option<String>,
    /// Reference into the server's image library; emitted as `RawImage`.
    pub png: Option<String>,
    pub image_type: Option<ImageType>,
    pub fade_in: Option<f32>,
}

impl Default for ImageComponent {
    fn default() -> Self {
        Self {
            color: Color::TRANSPARENT,
            sprite: None,
            material: None,
            png: None,
            image_type: None,
            fade_in: None,
        }
    }
}

/// `UnityEngine.UI.Button` — click target with an image background.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ButtonComponent {
    /// Console command executed on click.
    pub command: Option<String>,
    /// Name of the UI element to destroy on click.
    pub close: Option<String>,
    pub color: Color,
    pub sprite: Option<String>,
    pub material: Option<String>,
    pub image_type: Option<ImageType>,
    pub fade_in: Option<f32>,
}

impl Default for ButtonComponent {
    fn default() -> Self {
        Self {
            command: None,
            close: None,
            color: Color::TRANSPARENT,
            sprite: None,
            material: None,
            image_type: None,
            fade_in: None,
        }
    }
}
