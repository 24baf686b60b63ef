//! Core data model for the EmBody/HyperSension wearable-device protocol.
//!
//! This crate defines the protocol's vocabulary — the message types, the
//! attribute value shapes, the bounded enumerations, and the byte-cursor
//! primitives everything else is built from — without knowing how to turn
//! any of it into bytes. That is the job of `embody-encoding` (scalar
//! encoding), `embody-dictionary` (the attribute and enum registries) and
//! `embody-parser` (framing and message dispatch).

pub mod attribute;
pub mod crc;
pub mod cursor;
pub mod enums;
pub mod error;
pub mod file_entry;
pub mod message;
pub mod units;

pub use attribute::{AccelSample, AttributeValue, PulseRateSample, ScaledValue};
pub use cursor::{Cursor, CursorMut};
pub use error::{Error, Result};
pub use file_entry::{FileEntry, FILE_NAME_WIDTH};
pub use message::{FileEntries, Message};
pub use units::Unit;

/// The largest frame this crate's own `decode_frame`/`encode_message` callers
/// are expected to honor.
///
/// This is a policy limit, not a protocol one: nothing in the wire format
/// bounds a frame's length below the 16-bit length field's own range. Hosts
/// with tighter memory budgets than the `u16::MAX` worst case should enforce
/// their own ceiling before calling into the parser; `MAX_FRAME` is the
/// value this workspace's own parser and tests use.
pub const MAX_FRAME: usize = 4096;
