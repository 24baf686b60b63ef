//! Frame and message-body codecs for the EmBody/HyperSension protocol.
//!
//! This crate turns the primitives in `embody-core`, the scalar codecs in
//! `embody-encoding` and the attribute/enum registries in
//! `embody-dictionary` into the two operations that actually see raw bytes
//! off the wire: [`decode_frame`] and [`encode_message`].

pub mod dispatch;
pub mod fixed_name;
pub mod frame;
pub mod messages;

pub use frame::{decode_frame, encode_message, DecodeOutcome, MIN_FRAME};
