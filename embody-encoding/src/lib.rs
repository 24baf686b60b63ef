//! Primitive scalar and scaled-value encoding for the EmBody/HyperSension protocol.
//!
//! This crate bridges [`embody_core::AttributeValue`] and its component
//! shapes to bytes on a big-endian, fixed-width wire. It knows nothing about
//! attribute ids or message layout; the attribute registry in
//! `embody-dictionary` and the message codecs in `embody-parser` are the
//! callers that decide which of these functions applies where.

pub mod raw_int;
pub mod scalar;
pub mod scaled;

pub use raw_int::{read_raw_int, write_raw_int};
pub use scalar::{decode_accel, decode_enum, decode_pulse_rate, encode_accel, encode_enum, encode_pulse_rate, plain_width};
pub use scaled::{decode_scaled, encode_scaled};
