//! Model a color as a string of hexadecimal digits.

use crate::color::{Model, Space};
use crate::error::ColorError;
use std::fmt;

/// A color encoded as six hexadecimal digits, two per RGB channel, with an
/// optional leading `#`.
///
/// The payload is stored as supplied; [`Hex::validate`] checks its shape.
/// Values produced by the engine are canonical: lowercase and `#`-prefixed.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Hex(String);

impl Hex {
    /// Create a new hex payload from any string-like value.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// The digits of the payload, with the optional leading `#` stripped.
    pub fn digits(&self) -> &str {
        self.0.strip_prefix('#').unwrap_or(&self.0)
    }

    /// The payload exactly as supplied.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Model for Hex {
    const SPACE: Space = Space::Hex;

    fn validate(&self) -> Result<(), ColorError> {
        let digits = self.digits();
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorError::MalformedHex {
                value: self.0.clone(),
            });
        }
        Ok(())
    }
}

/// Hex payloads compare by their digits, ignoring case and the optional `#`.
impl PartialEq for Hex {
    fn eq(&self, other: &Self) -> bool {
        self.digits().eq_ignore_ascii_case(other.digits())
    }
}

impl Eq for Hex {}

impl fmt::Display for Hex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
