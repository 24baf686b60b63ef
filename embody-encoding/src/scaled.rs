//! Conversion between a scaled attribute's wire integer and its physical value.
//!
//! The wire carries a plain signed or unsigned integer of some declared
//! width; the physical quantity it represents is `offset + raw * factor`.
//! [`ScaledValue`] keeps both forms so that decoding a value and
//! re-encoding it is a raw integer write-back, never a re-quantization of
//! the floating-point `physical` field.

use embody_core::attribute::ScaledValue;
use embody_core::cursor::{Cursor, CursorMut};
use embody_core::error::Result;
use embody_core::units::Unit;

use crate::raw_int::{read_raw_int, write_raw_int};

/// Reads a scaled value of the given `width`/`signed`ness, `factor` and
/// `offset`, tagging it with `unit`.
pub fn decode_scaled(
    cur: &mut Cursor<'_>,
    width: u8,
    signed: bool,
    factor: f64,
    offset: f64,
    unit: Unit,
) -> Result<ScaledValue> {
    let raw = read_raw_int(cur, width, signed)?;
    let physical = offset + raw as f64 * factor;
    Ok(ScaledValue {
        raw,
        physical,
        unit,
    })
}

/// Writes a scaled value's raw integer back out at the given `width`/`signed`ness.
///
/// `factor` and `offset` are not consulted: the point of keeping `raw`
/// alongside `physical` is that re-encoding never has to invert the scaling
/// relation, so a round trip through [`decode_scaled`] is exact.
pub fn encode_scaled(cur: &mut CursorMut, width: u8, signed: bool, value: &ScaledValue) -> Result<()> {
    write_raw_int(cur, width, signed, value.raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn battery_level_scenario_round_trips_exactly() {
        // attribute 0xA1, BatteryLevel: u8 raw, factor 1.0, offset 0.0, percent.
        let bytes = [73u8];
        let mut c = Cursor::new(&bytes);
        let value = decode_scaled(&mut c, 1, false, 1.0, 0.0, Unit::Percent).unwrap();
        assert_eq!(value.raw, 73);
        assert_eq!(value.physical, 73.0);

        let mut w = CursorMut::default();
        encode_scaled(&mut w, 1, false, &value).unwrap();
        assert_eq!(w.into_bytes(), bytes);
    }

    #[test]
    fn negative_offset_and_fractional_factor_compute_correctly() {
        // e.g. centi-Celsius: raw i16, factor 0.01, offset -273.0
        let bytes = [0x13, 0x88u8]; // 5000
        let mut c = Cursor::new(&bytes);
        let value = decode_scaled(&mut c, 2, true, 0.01, -273.0, Unit::CentiCelsius).unwrap();
        assert_eq!(value.raw, 5000);
        assert!((value.physical - (-223.0)).abs() < 1e-9);
    }
}
