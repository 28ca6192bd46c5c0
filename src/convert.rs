//! Conversions between the supported color models.
//!
//! Each direct conversion is a pure function validating its input before
//! computing. Models without a direct formula between them are converted by
//! routing through RGB, the hub of the conversion graph.
//!
//! All intermediate math runs on `f64` fractions; rounding back to integer
//! components happens once, at the end of each public function.

use crate::color::{ColorValue, Component, Model, ModelSet, Space};
use crate::error::ColorError;
use crate::{Hex, Hsl, Hsv, Hwb, Rgb};

impl ColorValue {
    /// Convert this color from its current model to the given target model.
    ///
    /// A direct formula is used when one exists; otherwise the color is
    /// normalized to RGB first and converted from there.
    pub fn convert(&self, target: Space) -> Result<ColorValue, ColorError> {
        use Space as S;

        if self.space() == target {
            self.validate()?;
            return Ok(self.clone());
        }

        // Direct conversions.
        match (self, target) {
            (ColorValue::Hex(hex), S::Rgb) => return hex_to_rgb(hex).map(ColorValue::from),
            (ColorValue::Rgb(rgb), S::Hex) => return rgb_to_hex(rgb).map(ColorValue::from),
            (ColorValue::Rgb(rgb), S::Hsl) => return rgb_to_hsl(rgb).map(ColorValue::from),
            (ColorValue::Hsl(hsl), S::Rgb) => return hsl_to_rgb(hsl).map(ColorValue::from),
            (ColorValue::Rgb(rgb), S::Hwb) => return rgb_to_hwb(rgb).map(ColorValue::from),
            (ColorValue::Hwb(hwb), S::Rgb) => return hwb_to_rgb(hwb).map(ColorValue::from),
            (ColorValue::Rgb(rgb), S::Hsv) => return rgb_to_hsv(rgb).map(ColorValue::from),
            (ColorValue::Hsv(hsv), S::Rgb) => return hsv_to_rgb(hsv).map(ColorValue::from),
            _ => {}
        }

        // The rest routes through RGB.
        let rgb = self.to_rgb()?;
        Ok(match target {
            S::Hex => rgb_to_hex(&rgb)?.into(),
            S::Rgb => rgb.into(),
            S::Hsl => rgb_to_hsl(&rgb)?.into(),
            S::Hwb => rgb_to_hwb(&rgb)?.into(),
            S::Hsv => rgb_to_hsv(&rgb)?.into(),
        })
    }

    /// Normalize this color to RGB, the hub model of the conversion graph.
    pub fn to_rgb(&self) -> Result<Rgb, ColorError> {
        match self {
            ColorValue::Hex(hex) => hex_to_rgb(hex),
            ColorValue::Rgb(rgb) => {
                rgb.validate()?;
                Ok(*rgb)
            }
            ColorValue::Hsl(hsl) => hsl_to_rgb(hsl),
            ColorValue::Hwb(hwb) => hwb_to_rgb(hwb),
            ColorValue::Hsv(hsv) => hsv_to_rgb(hsv),
        }
    }

    /// Project this color into all five supported models.
    ///
    /// The color is normalized to RGB exactly once, no matter how many
    /// target models are produced from it.
    pub fn all_models(&self) -> Result<ModelSet, ColorError> {
        let rgb = self.to_rgb()?;
        Ok(ModelSet {
            hex: rgb_to_hex(&rgb)?,
            hsl: rgb_to_hsl(&rgb)?,
            hwb: rgb_to_hwb(&rgb)?,
            hsv: rgb_to_hsv(&rgb)?,
            rgb,
        })
    }
}

/// Convert a hex digit string to RGB channels.
///
/// The digits are split into three 2-digit groups, each parsed as base 16.
pub fn hex_to_rgb(hex: &Hex) -> Result<Rgb, ColorError> {
    hex.validate()?;
    let digits = hex.digits();
    let channel = |i: usize| -> Result<Component, ColorError> {
        u8::from_str_radix(&digits[i..i + 2], 16)
            .map(Component::from)
            .map_err(|_| ColorError::MalformedHex {
                value: hex.as_str().to_string(),
            })
    };
    Ok(Rgb::new(channel(0)?, channel(2)?, channel(4)?))
}

/// Convert RGB channels to a hex digit string, zero-padding each channel to
/// two lowercase digits.
pub fn rgb_to_hex(rgb: &Rgb) -> Result<Hex, ColorError> {
    rgb.validate()?;
    Ok(Hex::new(format!(
        "#{:02x}{:02x}{:02x}",
        rgb.red, rgb.green, rgb.blue
    )))
}

/// Convert RGB channels to the HSL notation.
pub fn rgb_to_hsl(rgb: &Rgb) -> Result<Hsl, ColorError> {
    rgb.validate()?;
    let (hue, saturation, lightness) = util::rgb_to_hsl(
        to_fraction(rgb.red),
        to_fraction(rgb.green),
        to_fraction(rgb.blue),
    );
    Ok(Hsl::new(
        to_hue(hue),
        to_percent(saturation),
        to_percent(lightness),
    ))
}

/// Convert a color in the HSL notation to RGB channels.
pub fn hsl_to_rgb(hsl: &Hsl) -> Result<Rgb, ColorError> {
    hsl.validate()?;
    let (red, green, blue) = util::hsl_to_rgb(
        f64::from(hsl.hue),
        f64::from(hsl.saturation) / 100.0,
        f64::from(hsl.lightness) / 100.0,
    );
    Ok(Rgb::new(to_channel(red), to_channel(green), to_channel(blue)))
}

/// Convert RGB channels to the HWB notation.
pub fn rgb_to_hwb(rgb: &Rgb) -> Result<Hwb, ColorError> {
    rgb.validate()?;
    let (hue, whiteness, blackness) = util::rgb_to_hwb(
        to_fraction(rgb.red),
        to_fraction(rgb.green),
        to_fraction(rgb.blue),
    );
    Ok(Hwb::new(
        to_hue(hue),
        to_percent(whiteness),
        to_percent(blackness),
    ))
}

/// Convert a color in the HWB notation to RGB channels.
pub fn hwb_to_rgb(hwb: &Hwb) -> Result<Rgb, ColorError> {
    hwb.validate()?;
    let (red, green, blue) = util::hwb_to_rgb(
        f64::from(hwb.hue),
        f64::from(hwb.whiteness) / 100.0,
        f64::from(hwb.blackness) / 100.0,
    );
    Ok(Rgb::new(to_channel(red), to_channel(green), to_channel(blue)))
}

/// Convert RGB channels to the HSV notation.
pub fn rgb_to_hsv(rgb: &Rgb) -> Result<Hsv, ColorError> {
    rgb.validate()?;
    let (hue, saturation, value) = util::rgb_to_hsv(
        to_fraction(rgb.red),
        to_fraction(rgb.green),
        to_fraction(rgb.blue),
    );
    Ok(Hsv::new(
        to_hue(hue),
        to_percent(saturation),
        to_percent(value),
    ))
}

/// Convert a color in the HSV notation to RGB channels.
pub fn hsv_to_rgb(hsv: &Hsv) -> Result<Rgb, ColorError> {
    hsv.validate()?;
    let (red, green, blue) = util::hsv_to_rgb(
        f64::from(hsv.hue),
        f64::from(hsv.saturation) / 100.0,
        f64::from(hsv.value) / 100.0,
    );
    Ok(Rgb::new(to_channel(red), to_channel(green), to_channel(blue)))
}

/// The fraction in `0.0..=1.0` an RGB channel represents.
fn to_fraction(channel: Component) -> f64 {
    f64::from(channel) / 255.0
}

/// Round a fraction in `0.0..=1.0` to an integer channel in `0..=255`.
fn to_channel(fraction: f64) -> Component {
    (fraction * 255.0).round() as Component
}

/// Round a fraction in `0.0..=1.0` to an integer percentage in `0..=100`.
fn to_percent(fraction: f64) -> Component {
    (fraction * 100.0).round() as Component
}

/// Round a hue in degrees to an integer in `0..=359`.
fn to_hue(degrees: f64) -> Component {
    (degrees.round() as Component) % 360
}

mod util {
    //! The shared conversion math, on normalized components: RGB channels and
    //! percentages as `f64` fractions in `0.0..=1.0`, hue in degrees in
    //! `0.0..360.0`.

    /// Calculate the hue in degrees from normalized RGB components and return
    /// it along with the min and max component values.
    pub fn rgb_to_hue_with_min_max(red: f64, green: f64, blue: f64) -> (f64, f64, f64) {
        let max = red.max(green).max(blue);
        let min = red.min(green).min(blue);

        let delta = max - min;

        // Achromatic colors have no meaningful hue; zero by convention.
        let hue = if delta != 0.0 {
            60.0 * if max == red {
                (green - blue) / delta + if green < blue { 6.0 } else { 0.0 }
            } else if max == green {
                (blue - red) / delta + 2.0
            } else {
                (red - green) / delta + 4.0
            }
        } else {
            0.0
        };

        (hue, min, max)
    }

    /// Convert normalized RGB to HSL.
    pub fn rgb_to_hsl(red: f64, green: f64, blue: f64) -> (f64, f64, f64) {
        let (hue, min, max) = rgb_to_hue_with_min_max(red, green, blue);

        let lightness = (max + min) / 2.0;
        let delta = max - min;

        // delta == 0 is the achromatic case; the branch also guards the
        // division when lightness sits at either extreme.
        let saturation = if delta == 0.0 {
            0.0
        } else if lightness > 0.5 {
            delta / (2.0 - max - min)
        } else {
            delta / (max + min)
        };

        (hue, saturation, lightness)
    }

    /// Convert HSL to normalized RGB.
    /// <https://drafts.csswg.org/css-color-4/#hsl-to-rgb>
    pub fn hsl_to_rgb(hue: f64, saturation: f64, lightness: f64) -> (f64, f64, f64) {
        if saturation <= 0.0 {
            return (lightness, lightness, lightness);
        }

        let f = |n: f64| {
            let k = (n + hue / 30.0) % 12.0;
            let a = saturation * lightness.min(1.0 - lightness);
            lightness - a * (k - 3.0).min(9.0 - k).clamp(-1.0, 1.0)
        };

        (f(0.0), f(8.0), f(4.0))
    }

    /// Convert normalized RGB to HWB.
    pub fn rgb_to_hwb(red: f64, green: f64, blue: f64) -> (f64, f64, f64) {
        let (hue, min, max) = rgb_to_hue_with_min_max(red, green, blue);

        let whiteness = min;
        let blackness = 1.0 - max;

        (hue, whiteness, blackness)
    }

    /// Convert HWB to normalized RGB.
    /// <https://drafts.csswg.org/css-color-4/#hwb-to-rgb>
    pub fn hwb_to_rgb(hue: f64, whiteness: f64, blackness: f64) -> (f64, f64, f64) {
        if whiteness + blackness >= 1.0 {
            let gray = whiteness / (whiteness + blackness);
            return (gray, gray, gray);
        }

        let (red, green, blue) = hsl_to_rgb(hue, 1.0, 0.5);
        let blend = |v: f64| v * (1.0 - whiteness - blackness) + whiteness;
        (blend(red), blend(green), blend(blue))
    }

    /// Convert normalized RGB to HSV.
    pub fn rgb_to_hsv(red: f64, green: f64, blue: f64) -> (f64, f64, f64) {
        let (hue, min, max) = rgb_to_hue_with_min_max(red, green, blue);

        // max == 0 is black; saturation is zero rather than a division by it.
        let saturation = if max == 0.0 { 0.0 } else { 1.0 - min / max };

        (hue, saturation, max)
    }

    /// Convert HSV to normalized RGB using the six hue sectors.
    pub fn hsv_to_rgb(hue: f64, saturation: f64, value: f64) -> (f64, f64, f64) {
        let hue = hue.rem_euclid(360.0) / 60.0;
        let sector = hue.floor();
        let offset = hue - sector;

        let low = value * (1.0 - saturation);
        let falling = value * (1.0 - offset * saturation);
        let rising = value * (1.0 - (1.0 - offset) * saturation);

        match sector as u8 {
            0 => (value, rising, low),
            1 => (falling, value, low),
            2 => (low, value, rising),
            3 => (low, falling, value),
            4 => (rising, low, value),
            _ => (value, low, falling),
        }
    }
}
