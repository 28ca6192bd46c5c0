//! polychrome converts colors between the five supported models: HEX, RGB,
//! HSL, HWB and HSV.
//!
//! Every conversion is a pure function of its input. RGB is the hub of the
//! conversion graph: models without a direct formula between them are routed
//! through RGB.
//!
//! ```rust
//! use polychrome::{ColorValue, Rgb, Space};
//!
//! let teal = ColorValue::from(Rgb::new(64, 98, 115));
//! let hsl = teal.convert(Space::Hsl)?;
//! assert_eq!(hsl.space(), Space::Hsl);
//!
//! let all = teal.all_models()?;
//! assert_eq!(all.hex.to_string(), "#406273");
//! # Ok::<(), polychrome::ColorError>(())
//! ```

#![deny(missing_docs)]

mod color;
mod convert;
mod error;
mod hex;
mod hsl;
mod hsv;
mod hwb;
mod rgb;

pub use color::{ColorValue, Component, Model, ModelSet, Space};
pub use convert::{
    hex_to_rgb, hsl_to_rgb, hsv_to_rgb, hwb_to_rgb, rgb_to_hex, rgb_to_hsl, rgb_to_hsv, rgb_to_hwb,
};
pub use error::ColorError;
pub use hex::Hex;
pub use hsl::Hsl;
pub use hsv::Hsv;
pub use hwb::Hwb;
pub use rgb::Rgb;
