//! Building blocks for the non-scaled [`AttributeValue`] shapes.
//!
//! Each function reads or writes exactly the bytes its shape occupies on the
//! wire; which function applies to a given attribute id is decided by the
//! attribute registry in `embody-dictionary`, not by this crate.

use embody_core::attribute::{AccelSample, AttributeValue, PulseRateSample};
use embody_core::cursor::{Cursor, CursorMut};
use embody_core::enums::EnumCodec;
use embody_core::error::Result;

/// Reads a three-axis accelerometer sample: three signed 16-bit fields.
pub fn decode_accel(cur: &mut Cursor<'_>) -> Result<AccelSample> {
    Ok(AccelSample {
        x: cur.read_i16()?,
        y: cur.read_i16()?,
        z: cur.read_i16()?,
    })
}

/// Writes a three-axis accelerometer sample.
pub fn encode_accel(cur: &mut CursorMut, value: &AccelSample) {
    cur.write_i16(value.x);
    cur.write_i16(value.y);
    cur.write_i16(value.z);
}

/// Reads an aggregated pulse-rate reading: a BPM byte and a confidence byte.
pub fn decode_pulse_rate(cur: &mut Cursor<'_>) -> Result<PulseRateSample> {
    Ok(PulseRateSample {
        bpm: cur.read_u8()?,
        confidence: cur.read_u8()?,
    })
}

/// Writes an aggregated pulse-rate reading.
pub fn encode_pulse_rate(cur: &mut CursorMut, value: &PulseRateSample) {
    cur.write_u8(value.bpm);
    cur.write_u8(value.confidence);
}

/// Reads a single-byte bounded enumeration.
pub fn decode_enum<E: EnumCodec>(cur: &mut Cursor<'_>) -> Result<E> {
    E::from_code(cur.read_u8()?)
}

/// Writes a single-byte bounded enumeration.
pub fn encode_enum<E: EnumCodec>(cur: &mut CursorMut, value: E) {
    cur.write_u8(value.to_code());
}

/// The number of bytes on the wire occupied by a plain, unscaled
/// [`AttributeValue`] variant (everything except [`AttributeValue::Scaled`],
/// which the attribute registry sizes from its own descriptor).
pub fn plain_width(value: &AttributeValue) -> usize {
    match value {
        AttributeValue::U8(_) | AttributeValue::I8(_) => 1,
        AttributeValue::U16(_) | AttributeValue::I16(_) => 2,
        AttributeValue::U32(_) | AttributeValue::I32(_) | AttributeValue::F32(_) => 4,
        AttributeValue::U64(_) | AttributeValue::I64(_) => 8,
        AttributeValue::Accel(_) => 6,
        AttributeValue::PulseRate(_) => 2,
        AttributeValue::ChargeState(_)
        | AttributeValue::BlePairingState(_)
        | AttributeValue::FileKind(_)
        | AttributeValue::ReportingTriggerMode(_) => 1,
        AttributeValue::Scaled(_) => 0,
        _ => unreachable!("AttributeValue has no other variants"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embody_core::enums::ChargeState;

    #[test]
    fn accel_sample_round_trips() {
        let sample = AccelSample {
            x: -100,
            y: 0,
            z: 32000,
        };
        let mut w = CursorMut::default();
        encode_accel(&mut w, &sample);
        let bytes = w.into_bytes();
        assert_eq!(bytes.len(), 6);
        let mut c = Cursor::new(&bytes);
        assert_eq!(decode_accel(&mut c).unwrap(), sample);
    }

    #[test]
    fn pulse_rate_sample_round_trips() {
        let sample = PulseRateSample {
            bpm: 72,
            confidence: 90,
        };
        let mut w = CursorMut::default();
        encode_pulse_rate(&mut w, &sample);
        let mut c = Cursor::new(&w.into_bytes());
        assert_eq!(decode_pulse_rate(&mut c).unwrap(), sample);
    }

    #[test]
    fn enum_round_trips_through_generic_helpers() {
        let mut w = CursorMut::default();
        encode_enum(&mut w, ChargeState::Charging);
        let bytes = w.into_bytes();
        assert_eq!(bytes, [1]);
        let mut c = Cursor::new(&bytes);
        let decoded: ChargeState = decode_enum(&mut c).unwrap();
        assert_eq!(decoded, ChargeState::Charging);
    }
}
