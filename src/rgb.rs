//! Model a color with red, green and blue channels.

use crate::color::{check_component, Component, Model, Space};
use crate::error::ColorError;

/// A color as additive red, green and blue channels, each valid in `0..=255`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgb {
    /// The red channel of the color.
    pub red: Component,
    /// The green channel of the color.
    pub green: Component,
    /// The blue channel of the color.
    pub blue: Component,
}

impl Rgb {
    /// Create a new RGB color. Channels are checked by the conversion entry
    /// points, not here.
    pub const fn new(red: Component, green: Component, blue: Component) -> Self {
        Self { red, green, blue }
    }
}

impl Model for Rgb {
    const SPACE: Space = Space::Rgb;

    fn validate(&self) -> Result<(), ColorError> {
        check_component(Self::SPACE, "red", self.red, 255)?;
        check_component(Self::SPACE, "green", self.green, 255)?;
        check_component(Self::SPACE, "blue", self.blue, 255)?;
        Ok(())
    }
}
