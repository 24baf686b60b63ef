//! The attribute registry: the single source of truth for what shape an
//! attribute id's value takes on the wire.

use std::collections::HashMap;

use embody_core::attribute::AttributeValue;
use embody_core::cursor::{Cursor, CursorMut};
use embody_core::enums::{BlePairingState, ChargeState, FileKind, ReportingTriggerMode};
use embody_core::error::{AttributeKindMismatch, Result, UnknownAttribute};
use embody_core::units::Unit;
use embody_encoding::{
    decode_accel, decode_enum, decode_pulse_rate, decode_scaled, encode_accel, encode_enum,
    encode_pulse_rate, encode_scaled,
};
use once_cell::sync::Lazy;

/// What shape an attribute's value takes, and (for scaled values) how its
/// wire integer maps to a physical quantity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AttributeKind {
    U8,
    U16,
    U32,
    U64,
    I8,
    I16,
    I32,
    I64,
    F32,
    /// A fixed-point integer of `raw_width` bytes mapped to `offset + raw * factor`.
    Scaled {
        raw_width: u8,
        signed: bool,
        factor: f64,
        offset: f64,
        unit: Unit,
    },
    Accel,
    PulseRate,
    ChargeState,
    BlePairingState,
    FileKind,
    ReportingTriggerMode,
}

impl AttributeKind {
    /// The number of bytes this kind occupies on the wire.
    pub fn width(self) -> u8 {
        match self {
            AttributeKind::U8
            | AttributeKind::I8
            | AttributeKind::ChargeState
            | AttributeKind::BlePairingState
            | AttributeKind::FileKind
            | AttributeKind::ReportingTriggerMode => 1,
            AttributeKind::U16 | AttributeKind::I16 | AttributeKind::PulseRate => 2,
            AttributeKind::U32 | AttributeKind::I32 | AttributeKind::F32 => 4,
            AttributeKind::U64 | AttributeKind::I64 => 8,
            AttributeKind::Accel => 6,
            AttributeKind::Scaled { raw_width, .. } => raw_width,
        }
    }

    /// The human-readable tag used in [`embody_core::Error::AttributeKindMismatch`].
    fn tag(self) -> &'static str {
        match self {
            AttributeKind::U8 => "u8",
            AttributeKind::U16 => "u16",
            AttributeKind::U32 => "u32",
            AttributeKind::U64 => "u64",
            AttributeKind::I8 => "i8",
            AttributeKind::I16 => "i16",
            AttributeKind::I32 => "i32",
            AttributeKind::I64 => "i64",
            AttributeKind::F32 => "f32",
            AttributeKind::Scaled { .. } => "scaled",
            AttributeKind::Accel => "accel",
            AttributeKind::PulseRate => "pulse_rate",
            AttributeKind::ChargeState => "charge_state",
            AttributeKind::BlePairingState => "ble_pairing_state",
            AttributeKind::FileKind => "file_kind",
            AttributeKind::ReportingTriggerMode => "reporting_trigger_mode",
        }
    }
}

/// A single entry in the attribute registry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AttributeDescriptor {
    /// The attribute id, as carried on the wire.
    pub id: u8,
    /// A human-readable name, used only in diagnostics.
    pub name: &'static str,
    /// The value's shape.
    pub kind: AttributeKind,
}

macro_rules! scaled {
    ($width:expr, $signed:expr, $factor:expr, $offset:expr, $unit:expr) => {
        AttributeKind::Scaled {
            raw_width: $width,
            signed: $signed,
            factor: $factor,
            offset: $offset,
            unit: $unit,
        }
    };
}

const ATTRIBUTES: &[AttributeDescriptor] = &[
    AttributeDescriptor { id: 0xA0, name: "device_id", kind: AttributeKind::U32 },
    AttributeDescriptor { id: 0xA1, name: "battery_level", kind: scaled!(1, false, 1.0, 0.0, Unit::Percent) },
    AttributeDescriptor { id: 0xA2, name: "battery_voltage_mv", kind: scaled!(2, false, 1.0, 0.0, Unit::Millivolt) },
    AttributeDescriptor { id: 0xA3, name: "charge_state", kind: AttributeKind::ChargeState },
    AttributeDescriptor { id: 0xA4, name: "charge_cycle_count", kind: AttributeKind::U16 },
    AttributeDescriptor { id: 0xA5, name: "skin_temperature", kind: scaled!(2, true, 0.01, 0.0, Unit::CentiCelsius) },
    AttributeDescriptor { id: 0xA6, name: "ble_pairing_state", kind: AttributeKind::BlePairingState },
    AttributeDescriptor { id: 0xA7, name: "ble_mac_address", kind: AttributeKind::U64 },
    AttributeDescriptor { id: 0xA8, name: "last_accel_sample", kind: AttributeKind::Accel },
    AttributeDescriptor { id: 0xA9, name: "accel_output_data_rate_hz", kind: AttributeKind::U8 },
    AttributeDescriptor { id: 0xAA, name: "magnetometer_field", kind: scaled!(4, true, 1.0, 0.0, Unit::Milligauss) },
    AttributeDescriptor { id: 0xAB, name: "aggregated_pulse_rate", kind: AttributeKind::PulseRate },
    AttributeDescriptor { id: 0xAC, name: "raw_pulse_sensor_gain", kind: AttributeKind::I8 },
    AttributeDescriptor { id: 0xAD, name: "reporting_trigger_mode", kind: AttributeKind::ReportingTriggerMode },
    AttributeDescriptor { id: 0xAE, name: "reporting_interval_ms", kind: AttributeKind::U16 },
    AttributeDescriptor { id: 0xAF, name: "firmware_version", kind: AttributeKind::U32 },
    AttributeDescriptor { id: 0xB0, name: "serial_number", kind: AttributeKind::U64 },
    AttributeDescriptor { id: 0xB1, name: "storage_free_bytes", kind: AttributeKind::U32 },
    AttributeDescriptor { id: 0xB2, name: "storage_capacity_bytes", kind: AttributeKind::U32 },
    AttributeDescriptor { id: 0xB3, name: "accumulated_charge_uah", kind: scaled!(4, true, 1.0, 0.0, Unit::MicroampereHour) },
    AttributeDescriptor { id: 0xB4, name: "default_file_kind", kind: AttributeKind::FileKind },
];

static REGISTRY: Lazy<HashMap<u8, &'static AttributeDescriptor>> = Lazy::new(|| {
    ATTRIBUTES.iter().map(|d| (d.id, d)).collect()
});

/// Looks up an attribute's descriptor by id.
pub fn lookup(id: u8) -> Result<&'static AttributeDescriptor> {
    match REGISTRY.get(&id).copied() {
        Some(descriptor) => Ok(descriptor),
        None => UnknownAttribute { id }.fail(),
    }
}

/// Every registered attribute, in ascending id order.
pub fn all() -> impl Iterator<Item = &'static AttributeDescriptor> {
    ATTRIBUTES.iter()
}

/// Decodes an attribute's value from its wire bytes, returning the value and
/// how many bytes of `bytes` it consumed.
pub fn decode_attribute(id: u8, bytes: &[u8]) -> Result<(AttributeValue, usize)> {
    let descriptor = lookup(id)?;
    let mut cur = Cursor::new(bytes);
    let value = match descriptor.kind {
        AttributeKind::U8 => AttributeValue::U8(cur.read_u8()?),
        AttributeKind::U16 => AttributeValue::U16(cur.read_u16()?),
        AttributeKind::U32 => AttributeValue::U32(cur.read_u32()?),
        AttributeKind::U64 => AttributeValue::U64(cur.read_u64()?),
        AttributeKind::I8 => AttributeValue::I8(cur.read_i8()?),
        AttributeKind::I16 => AttributeValue::I16(cur.read_i16()?),
        AttributeKind::I32 => AttributeValue::I32(cur.read_i32()?),
        AttributeKind::I64 => AttributeValue::I64(cur.read_i64()?),
        AttributeKind::F32 => AttributeValue::F32(cur.read_f32()?),
        AttributeKind::Scaled { raw_width, signed, factor, offset, unit } => {
            AttributeValue::Scaled(decode_scaled(&mut cur, raw_width, signed, factor, offset, unit)?)
        }
        AttributeKind::Accel => AttributeValue::Accel(decode_accel(&mut cur)?),
        AttributeKind::PulseRate => AttributeValue::PulseRate(decode_pulse_rate(&mut cur)?),
        AttributeKind::ChargeState => AttributeValue::ChargeState(decode_enum::<ChargeState>(&mut cur)?),
        AttributeKind::BlePairingState => {
            AttributeValue::BlePairingState(decode_enum::<BlePairingState>(&mut cur)?)
        }
        AttributeKind::FileKind => AttributeValue::FileKind(decode_enum::<FileKind>(&mut cur)?),
        AttributeKind::ReportingTriggerMode => {
            AttributeValue::ReportingTriggerMode(decode_enum::<ReportingTriggerMode>(&mut cur)?)
        }
    };
    Ok((value, cur.position()))
}

/// Encodes an attribute's value, failing if `value`'s shape does not match
/// the registry's declared kind for `id`.
pub fn encode_attribute(id: u8, value: &AttributeValue) -> Result<Vec<u8>> {
    let descriptor = lookup(id)?;
    let mismatch = || AttributeKindMismatch {
        id,
        expected: descriptor.kind.tag(),
        found: value.kind_name(),
    };
    let mut cur = CursorMut::with_capacity(descriptor.kind.width() as usize);
    match (descriptor.kind, value) {
        (AttributeKind::U8, AttributeValue::U8(v)) => cur.write_u8(*v),
        (AttributeKind::U16, AttributeValue::U16(v)) => cur.write_u16(*v),
        (AttributeKind::U32, AttributeValue::U32(v)) => cur.write_u32(*v),
        (AttributeKind::U64, AttributeValue::U64(v)) => cur.write_u64(*v),
        (AttributeKind::I8, AttributeValue::I8(v)) => cur.write_i8(*v),
        (AttributeKind::I16, AttributeValue::I16(v)) => cur.write_i16(*v),
        (AttributeKind::I32, AttributeValue::I32(v)) => cur.write_i32(*v),
        (AttributeKind::I64, AttributeValue::I64(v)) => cur.write_i64(*v),
        (AttributeKind::F32, AttributeValue::F32(v)) => cur.write_f32(*v),
        (AttributeKind::Scaled { raw_width, signed, .. }, AttributeValue::Scaled(v)) => {
            encode_scaled(&mut cur, raw_width, signed, v)?
        }
        (AttributeKind::Accel, AttributeValue::Accel(v)) => encode_accel(&mut cur, v),
        (AttributeKind::PulseRate, AttributeValue::PulseRate(v)) => encode_pulse_rate(&mut cur, v),
        (AttributeKind::ChargeState, AttributeValue::ChargeState(v)) => encode_enum(&mut cur, *v),
        (AttributeKind::BlePairingState, AttributeValue::BlePairingState(v)) => {
            encode_enum(&mut cur, *v)
        }
        (AttributeKind::FileKind, AttributeValue::FileKind(v)) => encode_enum(&mut cur, *v),
        (AttributeKind::ReportingTriggerMode, AttributeValue::ReportingTriggerMode(v)) => {
            encode_enum(&mut cur, *v)
        }
        _ => return mismatch().fail(),
    }
    Ok(cur.into_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn battery_level_scenario_matches_spec_example() {
        let (value, consumed) = decode_attribute(0xA1, &[73]).unwrap();
        assert_eq!(consumed, 1);
        match value {
            AttributeValue::Scaled(s) => {
                assert_eq!(s.raw, 73);
                assert_eq!(s.physical, 73.0);
                assert_eq!(s.unit, Unit::Percent);
            }
            other => panic!("unexpected value: {other:?}"),
        }
        assert_eq!(encode_attribute(0xA1, &value).unwrap(), vec![73]);
    }

    #[test]
    fn unknown_attribute_id_is_reported() {
        assert!(lookup(0xFF).is_err());
        assert!(decode_attribute(0xFF, &[0]).is_err());
    }

    #[test]
    fn kind_mismatch_is_rejected_rather_than_silently_coerced() {
        let err = encode_attribute(0xA3, &AttributeValue::U8(1)).unwrap_err();
        assert!(matches!(
            err,
            embody_core::Error::AttributeKindMismatch { id: 0xA3, .. }
        ));
    }

    #[test]
    fn every_registered_attribute_round_trips_a_representative_value() {
        for descriptor in all() {
            // Enum-shaped attributes only accept their declared codes; every
            // other shape is happy with an arbitrary fill byte.
            let fill = match descriptor.kind {
                AttributeKind::ChargeState
                | AttributeKind::BlePairingState
                | AttributeKind::FileKind
                | AttributeKind::ReportingTriggerMode => 0x00,
                _ => 0x2A,
            };
            let sample_bytes = vec![fill; descriptor.kind.width() as usize];
            let (value, consumed) = decode_attribute(descriptor.id, &sample_bytes).unwrap();
            assert_eq!(consumed, descriptor.kind.width() as usize);
            let encoded = encode_attribute(descriptor.id, &value).unwrap();
            assert_eq!(encoded, sample_bytes, "attribute {}", descriptor.name);
        }
    }
}
