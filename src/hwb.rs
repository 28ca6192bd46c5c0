//! Model a color with the HWB notation.

use crate::color::{check_component, Component, Model, Space};
use crate::error::ColorError;

/// A color specified with the HWB notation: hue in degrees in `0..=359`,
/// whiteness and blackness as percentages in `0..=100`.
///
/// Whiteness and blackness summing past 100 is a valid (achromatic) color;
/// only the per-field intervals are checked.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hwb {
    /// The hue component of the color, in degrees.
    pub hue: Component,
    /// The whiteness component of the color, as a percentage.
    pub whiteness: Component,
    /// The blackness component of the color, as a percentage.
    pub blackness: Component,
}

impl Hwb {
    /// Create a new HWB color. Components are checked by the conversion
    /// entry points, not here.
    pub const fn new(hue: Component, whiteness: Component, blackness: Component) -> Self {
        Self {
            hue,
            whiteness,
            blackness,
        }
    }
}

impl Model for Hwb {
    const SPACE: Space = Space::Hwb;

    fn validate(&self) -> Result<(), ColorError> {
        check_component(Self::SPACE, "hue", self.hue, 359)?;
        check_component(Self::SPACE, "whiteness", self.whiteness, 100)?;
        check_component(Self::SPACE, "blackness", self.blackness, 100)?;
        Ok(())
    }
}
