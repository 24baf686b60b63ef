//! EmBody/HyperSension wearable-device protocol codec.
//!
//! This crate is a thin facade over the workspace's layered codec crates,
//! re-exporting the pieces most callers need without requiring a direct
//! dependency on each one individually — the same shape as depending on
//! `embody-core`, `embody-dictionary`, `embody-encoding` and
//! `embody-parser` piecemeal, just collected in one place.
//!
//! ```
//! use embody::{encode_message, decode_frame, DecodeOutcome};
//! use embody::Message;
//!
//! let frame = encode_message(&Message::Heartbeat).unwrap();
//! assert_eq!(decode_frame(&frame), DecodeOutcome::Frame(Message::Heartbeat, frame.len()));
//! ```

pub use embody_core as core;
pub use embody_dictionary as dictionary;
pub use embody_encoding as encoding;
pub use embody_parser as parser;

pub use embody_core::{AttributeValue, Error, Message, Result, Unit, MAX_FRAME};
pub use embody_dictionary::{decode_attribute, encode_attribute};
pub use embody_parser::{decode_frame, encode_message, DecodeOutcome};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn facade_round_trips_a_heartbeat() {
        let frame = encode_message(&Message::Heartbeat).unwrap();
        assert_eq!(
            decode_frame(&frame),
            DecodeOutcome::Frame(Message::Heartbeat, frame.len())
        );
    }

    #[test]
    fn facade_exposes_the_attribute_codec() {
        let bytes = encode_attribute(0xA1, &AttributeValue::Scaled(embody_core::ScaledValue {
            raw: 85,
            physical: 85.0,
            unit: Unit::Percent,
        }))
        .unwrap();
        let (value, consumed) = decode_attribute(0xA1, &bytes).unwrap();
        assert_eq!(consumed, 1);
        assert_eq!(value, AttributeValue::Scaled(embody_core::ScaledValue {
            raw: 85,
            physical: 85.0,
            unit: Unit::Percent,
        }));
    }
}
