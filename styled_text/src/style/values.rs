// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::sync::Arc;

/// An sRGB color with straight alpha.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Color {
    /// Red component.
    pub r: u8,
    /// Green component.
    pub g: u8,
    /// Blue component.
    pub b: u8,
    /// Alpha component, `255` is opaque.
    pub a: u8,
}

impl Color {
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::rgba(0, 0, 0, 0);
    /// Opaque black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    /// Opaque white.
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    /// Opaque red.
    pub const RED: Self = Self::rgb(255, 0, 0);
    /// Opaque blue.
    pub const BLUE: Self = Self::rgb(0, 0, 255);
    /// Opaque gray.
    pub const GRAY: Self = Self::rgb(128, 128, 128);
    /// Opaque orange.
    pub const ORANGE: Self = Self::rgb(255, 128, 0);
    /// Opaque brown.
    pub const BROWN: Self = Self::rgb(153, 102, 51);

    /// Creates an opaque color.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    /// Creates a color with alpha.
    #[must_use]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Returns this color with its alpha replaced.
    #[must_use]
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }
}

/// A font request: an optional family, a size in points, a weight and a slant.
///
/// `None` as the family means the platform's system font.
#[derive(Clone, Debug, PartialEq)]
pub struct Font {
    family: Option<Arc<str>>,
    size: f32,
    weight: u16,
    italic: bool,
}

impl Font {
    /// Weight of regular text.
    pub const NORMAL_WEIGHT: u16 = 400;
    /// Weight of bold text.
    pub const BOLD_WEIGHT: u16 = 700;

    /// The system font at `size`.
    #[must_use]
    pub const fn system(size: f32) -> Self {
        Self {
            family: None,
            size,
            weight: Self::NORMAL_WEIGHT,
            italic: false,
        }
    }

    /// The bold system font at `size`.
    #[must_use]
    pub const fn bold_system(size: f32) -> Self {
        Self {
            family: None,
            size,
            weight: Self::BOLD_WEIGHT,
            italic: false,
        }
    }

    /// A named font family at `size`.
    #[must_use]
    pub fn named(family: impl Into<Arc<str>>, size: f32) -> Self {
        Self {
            family: Some(family.into()),
            ..Self::system(size)
        }
    }

    /// Returns this font with a different weight.
    #[must_use]
    pub fn with_weight(mut self, weight: u16) -> Self {
        self.weight = weight;
        self
    }

    /// Returns this font with a different size.
    #[must_use]
    pub fn with_size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    /// Returns this font, slanted or upright.
    #[must_use]
    pub fn italic(mut self, italic: bool) -> Self {
        self.italic = italic;
        self
    }

    /// The family name, `None` for the system font.
    pub fn family(&self) -> Option<&str> {
        self.family.as_deref()
    }

    /// The size in points.
    pub fn size(&self) -> f32 {
        self.size
    }

    /// The weight, `400` regular and `700` bold.
    pub fn weight(&self) -> u16 {
        self.weight
    }

    /// Whether the font is slanted.
    pub fn is_italic(&self) -> bool {
        self.italic
    }
}

/// The value stored under an [`AttributeKey`](super::AttributeKey).
#[derive(Clone, Debug, PartialEq)]
pub enum AttributeValue {
    /// A flag such as underline on/off.
    Bool(bool),
    /// A scalar such as kerning or a baseline offset, in points.
    Number(f32),
    /// A color.
    Color(Color),
    /// A font.
    Font(Font),
    /// Text such as a link target.
    Text(Arc<str>),
}

impl AttributeValue {
    /// The flag, if this is a [`AttributeValue::Bool`].
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(value) => Some(*value),
            _ => None,
        }
    }

    /// The scalar, if this is a [`AttributeValue::Number`].
    pub fn as_number(&self) -> Option<f32> {
        match self {
            Self::Number(value) => Some(*value),
            _ => None,
        }
    }

    /// The color, if this is a [`AttributeValue::Color`].
    pub fn as_color(&self) -> Option<Color> {
        match self {
            Self::Color(value) => Some(*value),
            _ => None,
        }
    }

    /// The font, if this is a [`AttributeValue::Font`].
    pub fn as_font(&self) -> Option<&Font> {
        match self {
            Self::Font(value) => Some(value),
            _ => None,
        }
    }

    /// The text, if this is a [`AttributeValue::Text`].
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value),
            _ => None,
        }
    }
}

impl From<bool> for AttributeValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f32> for AttributeValue {
    fn from(value: f32) -> Self {
        Self::Number(value)
    }
}

impl From<Color> for AttributeValue {
    fn from(value: Color) -> Self {
        Self::Color(value)
    }
}

impl From<Font> for AttributeValue {
    fn from(value: Font) -> Self {
        Self::Font(value)
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        Self::Text(value.into())
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        Self::Text(value.into())
    }
}

impl From<Arc<str>> for AttributeValue {
    fn from(value: Arc<str>) -> Self {
        Self::Text(value)
    }
}
