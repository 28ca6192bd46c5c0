//! A [`ColorValue`] represents a color that was specified in any of the
//! supported color models, tagged with its [`Space`].

use crate::error::ColorError;
use crate::{Hex, Hsl, Hsv, Hwb, Rgb};
use std::fmt;
use std::str::FromStr;

/// An unsigned integer value that all numeric model components are stored as.
///
/// Wide enough to hold every in-range component (hue tops out at 359) and
/// also the out-of-range values that validation must be able to report.
pub type Component = u16;

/// The color models supported by the conversion engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Space {
    /// Six hexadecimal digits, two per RGB channel.
    Hex,
    /// Additive red/green/blue channels, each in `0..=255`.
    Rgb,
    /// The HSL (hue, saturation, lightness) cylindrical model.
    Hsl,
    /// The HWB (hue, whiteness, blackness) model.
    Hwb,
    /// The HSV (hue, saturation, value) cylindrical model.
    Hsv,
}

impl Space {
    /// All supported models, in canonical order.
    pub const ALL: [Space; 5] = [Space::Hex, Space::Rgb, Space::Hsl, Space::Hwb, Space::Hsv];

    /// The lowercase name of the model.
    pub fn name(&self) -> &'static str {
        match self {
            Space::Hex => "hex",
            Space::Rgb => "rgb",
            Space::Hsl => "hsl",
            Space::Hwb => "hwb",
            Space::Hsv => "hsv",
        }
    }
}

impl fmt::Display for Space {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Space {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hex" => Ok(Space::Hex),
            "rgb" => Ok(Space::Rgb),
            "hsl" => Ok(Space::Hsl),
            "hwb" => Ok(Space::Hwb),
            "hsv" => Ok(Space::Hsv),
            _ => Err(ColorError::UnsupportedModel {
                name: s.to_string(),
            }),
        }
    }
}

/// A trait implemented by every color model type.
pub trait Model {
    /// The space tag for this model.
    const SPACE: Space;

    /// Check every component of the value against the interval its model
    /// allows. Out-of-range input is reported, never clamped.
    fn validate(&self) -> Result<(), ColorError>;
}

/// Check a single component against `0..=max`, naming the channel on failure.
pub(crate) fn check_component(
    space: Space,
    channel: &'static str,
    value: Component,
    max: Component,
) -> Result<(), ColorError> {
    if value > max {
        return Err(ColorError::OutOfRangeChannel {
            space,
            channel,
            value,
            min: 0,
            max,
        });
    }
    Ok(())
}

/// A color payload tagged with the model it is expressed in.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ColorValue {
    /// A hex digit string.
    Hex(Hex),
    /// RGB channels.
    Rgb(Rgb),
    /// An HSL color.
    Hsl(Hsl),
    /// An HWB color.
    Hwb(Hwb),
    /// An HSV color.
    Hsv(Hsv),
}

impl ColorValue {
    /// Return the model the payload is expressed in.
    pub fn space(&self) -> Space {
        match self {
            ColorValue::Hex(_) => Space::Hex,
            ColorValue::Rgb(_) => Space::Rgb,
            ColorValue::Hsl(_) => Space::Hsl,
            ColorValue::Hwb(_) => Space::Hwb,
            ColorValue::Hsv(_) => Space::Hsv,
        }
    }

    /// Check the payload against its model's invariants.
    pub fn validate(&self) -> Result<(), ColorError> {
        match self {
            ColorValue::Hex(hex) => hex.validate(),
            ColorValue::Rgb(rgb) => rgb.validate(),
            ColorValue::Hsl(hsl) => hsl.validate(),
            ColorValue::Hwb(hwb) => hwb.validate(),
            ColorValue::Hsv(hsv) => hsv.validate(),
        }
    }
}

impl From<Hex> for ColorValue {
    fn from(value: Hex) -> Self {
        ColorValue::Hex(value)
    }
}

impl From<Rgb> for ColorValue {
    fn from(value: Rgb) -> Self {
        ColorValue::Rgb(value)
    }
}

impl From<Hsl> for ColorValue {
    fn from(value: Hsl) -> Self {
        ColorValue::Hsl(value)
    }
}

impl From<Hwb> for ColorValue {
    fn from(value: Hwb) -> Self {
        ColorValue::Hwb(value)
    }
}

impl From<Hsv> for ColorValue {
    fn from(value: Hsv) -> Self {
        ColorValue::Hsv(value)
    }
}

/// One color projected into every supported model.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ModelSet {
    /// The color as a hex digit string.
    pub hex: Hex,
    /// The color as RGB channels.
    pub rgb: Rgb,
    /// The color in the HSL model.
    pub hsl: Hsl,
    /// The color in the HWB model.
    pub hwb: Hwb,
    /// The color in the HSV model.
    pub hsv: Hsv,
}
