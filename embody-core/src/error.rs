//! The error taxonomy shared by every layer of the EmBody codec.

use snafu::Snafu;

/// Errors that can occur while decoding or encoding EmBody protocol data.
#[derive(Debug, Snafu, PartialEq, Eq)]
#[snafu(context(suffix(false)), visibility(pub))]
#[non_exhaustive]
pub enum Error {
    /// The input ended before a field could be fully read.
    #[snafu(display("unexpected end of input: needed {needed} more byte(s)"))]
    Truncated {
        /// How many additional bytes would have been required to finish the read.
        needed: usize,
    },

    /// A frame's length header was out of range, or inconsistent with its body layout.
    #[snafu(display("invalid frame length: {reason}"))]
    InvalidLength {
        /// Human-readable explanation of why the length was rejected.
        reason: String,
    },

    /// The computed CRC did not match the trailing CRC field.
    #[snafu(display("CRC mismatch: expected {expected:#06x}, computed {computed:#06x}"))]
    CrcMismatch {
        /// The CRC carried in the frame.
        expected: u16,
        /// The CRC computed over the frame's preceding bytes.
        computed: u16,
    },

    /// The frame's type code has no known message variant.
    #[snafu(display("unknown message type code {code:#04x}"))]
    UnknownMessageType {
        /// The unrecognized type code.
        code: u8,
    },

    /// An attribute id has no entry in the attribute registry.
    #[snafu(display("unknown attribute id {id:#04x}"))]
    UnknownAttribute {
        /// The unrecognized attribute id.
        id: u8,
    },

    /// An enum code fell outside the set of values declared for that enum.
    #[snafu(display("unknown value {code} for enum `{enum_name}`"))]
    UnknownEnumValue {
        /// The name of the enum whose code was rejected.
        enum_name: &'static str,
        /// The unrecognized code.
        code: u8,
    },

    /// A message body had bytes left over after every declared field was consumed.
    #[snafu(display("{extra} trailing byte(s) after decoding message body"))]
    TrailingGarbage {
        /// The number of bytes left unconsumed.
        extra: usize,
    },

    /// A value given to an encoder cannot be represented in its wire field.
    #[snafu(display("value out of range: {reason}"), context(name(RangeError)))]
    RangeError {
        /// Human-readable explanation of why the value was rejected.
        reason: String,
    },

    /// An `AttributeValue` variant does not match the shape its attribute id declares.
    #[snafu(display(
        "attribute {id:#04x} expects a {expected} value, got a {found} value"
    ))]
    AttributeKindMismatch {
        /// The attribute id whose descriptor was violated.
        id: u8,
        /// The shape the attribute registry declares for `id`.
        expected: &'static str,
        /// The shape of the value actually supplied.
        found: &'static str,
    },
}

/// A specialized [`Result`](std::result::Result) for EmBody codec operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;
