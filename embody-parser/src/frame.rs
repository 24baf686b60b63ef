//! The outer frame envelope: header, body, and trailing CRC.

use embody_core::crc::crc16_xmodem;
use embody_core::error::{Error, InvalidLength};
use embody_core::{Message, MAX_FRAME};

use crate::dispatch;

/// The minimum legal frame length: a 3-byte header plus a 2-byte CRC, no body.
pub const MIN_FRAME: usize = 5;

/// The outcome of attempting to decode one frame from the front of a buffer.
#[derive(Debug, PartialEq)]
pub enum DecodeOutcome {
    /// At least this many more bytes are required before another attempt can succeed.
    Need(usize),
    /// A complete, CRC-valid frame was decoded; the caller should drop `consumed`
    /// bytes from the front of its buffer.
    Frame(Message, usize),
    /// Framing or dispatch failed; the caller should still drop `consumed`
    /// bytes to resynchronize with the stream.
    Err(Error, usize),
}

/// Attempts to decode a single frame from the front of `bytes`.
///
/// `bytes` may hold zero, one, or more frames' worth of data; only the first
/// frame is decoded. See [`DecodeOutcome`] for how callers should advance
/// their buffer afterward.
pub fn decode_frame(bytes: &[u8]) -> DecodeOutcome {
    // The 1-byte type code plus the 2-byte length field must be present
    // before the total frame length is even knowable.
    if bytes.len() < 3 {
        return DecodeOutcome::Need(3 - bytes.len());
    }
    let type_code = bytes[0];
    let length = u16::from_be_bytes([bytes[1], bytes[2]]) as usize;
    if length < MIN_FRAME || length > MAX_FRAME {
        tracing::warn!(length, "rejecting frame with out-of-range length");
        let err = InvalidLength {
            reason: format!("frame length {length} is outside [{MIN_FRAME}, {MAX_FRAME}]"),
        }
        .build();
        return DecodeOutcome::Err(err, 3);
    }
    if bytes.len() < length {
        return DecodeOutcome::Need(length - bytes.len());
    }

    let frame = &bytes[..length];
    let (header_and_body, crc_field) = frame.split_at(length - 2);
    let expected = u16::from_be_bytes([crc_field[0], crc_field[1]]);
    let computed = crc16_xmodem(header_and_body);
    if computed != expected {
        tracing::warn!(expected, computed, "frame CRC mismatch");
        let err = embody_core::error::CrcMismatch { expected, computed }.build();
        return DecodeOutcome::Err(err, length);
    }

    let body = &header_and_body[3..];
    match dispatch::decode_body(type_code, body) {
        Ok(msg) => DecodeOutcome::Frame(msg, length),
        Err(e) => DecodeOutcome::Err(e, length),
    }
}

/// Encodes a message as one complete frame: header, body, and CRC.
pub fn encode_message(msg: &Message) -> embody_core::Result<Vec<u8>> {
    let body = dispatch::encode_body(msg)?;
    let length = 3 + body.len() + 2;
    if length > MAX_FRAME {
        return InvalidLength {
            reason: format!("encoded frame of {length} bytes exceeds MAX_FRAME ({MAX_FRAME})"),
        }
        .fail();
    }
    let mut bytes = Vec::with_capacity(length);
    bytes.push(dispatch::type_code(msg));
    bytes.extend_from_slice(&(length as u16).to_be_bytes());
    bytes.extend_from_slice(&body);
    let crc = crc16_xmodem(&bytes);
    bytes.extend_from_slice(&crc.to_be_bytes());
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heartbeat_golden_bytes() {
        let encoded = encode_message(&Message::Heartbeat).unwrap();
        let crc = crc16_xmodem(&[0x01, 0x00, 0x05]);
        assert_eq!(encoded, vec![0x01, 0x00, 0x05, (crc >> 8) as u8, crc as u8]);
        assert_eq!(
            decode_frame(&encoded),
            DecodeOutcome::Frame(Message::Heartbeat, 5)
        );
    }

    #[test]
    fn nack_with_zeroed_crc_is_rejected_but_consumed() {
        let mut encoded = encode_message(&Message::NackResponse(
            embody_core::message::NackResponse { error_code: 0x02 },
        ))
        .unwrap();
        assert_eq!(encoded.len(), 6);
        let last = encoded.len() - 1;
        encoded[last] = 0;
        match decode_frame(&encoded) {
            DecodeOutcome::Err(Error::CrcMismatch { .. }, consumed) => assert_eq!(consumed, 6),
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[test]
    fn truncated_frame_reports_need() {
        let encoded = encode_message(&Message::SensorData(embody_core::message::SensorData {
            timestamp: 1,
            accel: embody_core::attribute::AccelSample { x: 1, y: 2, z: 3 },
        }))
        .unwrap();
        assert_eq!(encoded.len(), 17);
        assert_eq!(decode_frame(&encoded[..3]), DecodeOutcome::Need(14));
        assert!(matches!(decode_frame(&encoded), DecodeOutcome::Frame(_, 17)));
    }

    #[test]
    fn unknown_type_code_with_valid_crc_is_reported_and_consumed() {
        let body: &[u8] = &[];
        let length: u16 = 5;
        let mut bytes = vec![0xFE, (length >> 8) as u8, length as u8];
        bytes.extend_from_slice(body);
        let crc = crc16_xmodem(&bytes);
        bytes.extend_from_slice(&crc.to_be_bytes());
        match decode_frame(&bytes) {
            DecodeOutcome::Err(Error::UnknownMessageType { code: 0xFE }, 5) => {}
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[test]
    fn garbage_prefix_does_not_affect_the_frame_that_follows() {
        let encoded = encode_message(&Message::Heartbeat).unwrap();
        let mut buf = vec![0xDE, 0xAD, 0xBE, 0xEF];
        buf.extend_from_slice(&encoded);
        // The caller is expected to drop bytes reported as `consumed` by a
        // prior failed attempt; once the garbage is gone, decoding the
        // remainder matches decoding the frame alone.
        assert_eq!(decode_frame(&buf[4..]), decode_frame(&encoded));
    }

    #[test]
    fn single_bit_flip_in_the_body_is_caught_by_the_crc() {
        let mut encoded = encode_message(&Message::SensorData(embody_core::message::SensorData {
            timestamp: 42,
            accel: embody_core::attribute::AccelSample { x: 1, y: 2, z: 3 },
        }))
        .unwrap();
        encoded[5] ^= 0x01;
        assert!(matches!(decode_frame(&encoded), DecodeOutcome::Err(_, _)));
    }
}
