//! Model a color with the HSV notation.

use crate::color::{check_component, Component, Model, Space};
use crate::error::ColorError;

/// A color specified with the HSV notation: hue in degrees in `0..=359`,
/// saturation and value (brightness) as percentages in `0..=100`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hsv {
    /// The hue component of the color, in degrees.
    pub hue: Component,
    /// The saturation component of the color, as a percentage.
    pub saturation: Component,
    /// The value component of the color, as a percentage.
    pub value: Component,
}

impl Hsv {
    /// Create a new HSV color. Components are checked by the conversion
    /// entry points, not here.
    pub const fn new(hue: Component, saturation: Component, value: Component) -> Self {
        Self {
            hue,
            saturation,
            value,
        }
    }
}

impl Model for Hsv {
    const SPACE: Space = Space::Hsv;

    fn validate(&self) -> Result<(), ColorError> {
        check_component(Self::SPACE, "hue", self.hue, 359)?;
        check_component(Self::SPACE, "saturation", self.saturation, 100)?;
        check_component(Self::SPACE, "value", self.value, 100)?;
        Ok(())
    }
}
