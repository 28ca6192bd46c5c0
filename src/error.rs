//! Error types for the conversion engine.

use crate::color::{Component, Space};
use thiserror::Error;

/// Errors produced by conversion operations.
///
/// Every failure is returned as a value from the operation that detected it;
/// no conversion clamps, logs or otherwise repairs invalid input.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ColorError {
    /// A hex payload did not contain exactly six hexadecimal digits after
    /// stripping an optional leading `#`.
    #[error("malformed hex color `{value}`: expected exactly 6 hexadecimal digits after an optional `#`")]
    MalformedHex {
        /// The rejected payload, as supplied.
        value: String,
    },

    /// A numeric component was outside the interval its model allows.
    #[error("{space} `{channel}` channel out of range: {value} is not within {min}..={max}")]
    OutOfRangeChannel {
        /// The model the component belongs to.
        space: Space,
        /// The name of the offending field.
        channel: &'static str,
        /// The rejected value.
        value: Component,
        /// The lower bound of the valid interval.
        min: Component,
        /// The upper bound of the valid interval.
        max: Component,
    },

    /// A model name did not match any of the five supported models.
    #[error("unsupported color model `{name}`")]
    UnsupportedModel {
        /// The rejected model name.
        name: String,
    },
}
