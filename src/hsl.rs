//! Model a color with the HSL notation.

use crate::color::{check_component, Component, Model, Space};
use crate::error::ColorError;

/// A color specified with the HSL notation: hue in degrees in `0..=359`,
/// saturation and lightness as percentages in `0..=100`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hsl {
    /// The hue component of the color, in degrees.
    pub hue: Component,
    /// The saturation component of the color, as a percentage.
    pub saturation: Component,
    /// The lightness component of the color, as a percentage.
    pub lightness: Component,
}

impl Hsl {
    /// Create a new HSL color. Components are checked by the conversion
    /// entry points, not here.
    pub const fn new(hue: Component, saturation: Component, lightness: Component) -> Self {
        Self {
            hue,
            saturation,
            lightness,
        }
    }
}

impl Model for Hsl {
    const SPACE: Space = Space::Hsl;

    fn validate(&self) -> Result<(), ColorError> {
        check_component(Self::SPACE, "hue", self.hue, 359)?;
        check_component(Self::SPACE, "saturation", self.saturation, 100)?;
        check_component(Self::SPACE, "lightness", self.lightness, 100)?;
        Ok(())
    }
}
