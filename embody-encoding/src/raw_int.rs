//! Width-generic integer reads and writes.
//!
//! Attribute widths are only known at runtime (they come from the attribute
//! registry), so the per-width `Cursor`/`CursorMut` methods are collapsed
//! here into a single pair of functions keyed on `(width, signed)`.

use embody_core::cursor::{Cursor, CursorMut};
use embody_core::error::{InvalidLength, RangeError, Result};

/// Reads a `width`-byte integer, sign-extending to `i64` when `signed`.
///
/// `width` must be one of 1, 2, 4 or 8; anything else is an
/// [`embody_core::Error::InvalidLength`], since it cannot come from a
/// well-formed attribute descriptor.
pub fn read_raw_int(cur: &mut Cursor<'_>, width: u8, signed: bool) -> Result<i64> {
    match (width, signed) {
        (1, false) => Ok(cur.read_u8()? as i64),
        (1, true) => Ok(cur.read_i8()? as i64),
        (2, false) => Ok(cur.read_u16()? as i64),
        (2, true) => Ok(cur.read_i16()? as i64),
        (4, false) => Ok(cur.read_u32()? as i64),
        (4, true) => Ok(cur.read_i32()? as i64),
        (8, false) => Ok(cur.read_u64()? as i64),
        (8, true) => cur.read_i64(),
        (other, _) => InvalidLength {
            reason: format!("unsupported integer width {other}"),
        }
        .fail(),
    }
}

/// The inclusive range of values a `width`-byte integer of the given
/// signedness can represent, as `i64`.
///
/// `(8, false)` is bounded above by `i64::MAX` rather than `u64::MAX`
/// because `raw` itself is carried as `i64`: a value that doesn't fit in
/// `i64` could never have reached this function in the first place.
fn representable_range(width: u8, signed: bool) -> Option<(i64, i64)> {
    match (width, signed) {
        (1, false) => Some((0, u8::MAX as i64)),
        (1, true) => Some((i8::MIN as i64, i8::MAX as i64)),
        (2, false) => Some((0, u16::MAX as i64)),
        (2, true) => Some((i16::MIN as i64, i16::MAX as i64)),
        (4, false) => Some((0, u32::MAX as i64)),
        (4, true) => Some((i32::MIN as i64, i32::MAX as i64)),
        (8, false) => Some((0, i64::MAX)),
        (8, true) => Some((i64::MIN, i64::MAX)),
        _ => None,
    }
}

/// Writes `raw` as a `width`-byte integer.
///
/// Fails with [`embody_core::Error::RangeError`] if `raw` does not fit in
/// `width` bytes of the given signedness, per the encoder's contract: a
/// value outside its field's representable range is rejected rather than
/// silently truncated.
pub fn write_raw_int(cur: &mut CursorMut, width: u8, signed: bool, raw: i64) -> Result<()> {
    if let Some((min, max)) = representable_range(width, signed) {
        if raw < min || raw > max {
            return RangeError {
                reason: format!(
                    "value {raw} does not fit in a {}{}-bit field",
                    if signed { "signed " } else { "unsigned " },
                    width as u32 * 8
                ),
            }
            .fail();
        }
    }
    match (width, signed) {
        (1, false) => cur.write_u8(raw as u8),
        (1, true) => cur.write_i8(raw as i8),
        (2, false) => cur.write_u16(raw as u16),
        (2, true) => cur.write_i16(raw as i16),
        (4, false) => cur.write_u32(raw as u32),
        (4, true) => cur.write_i32(raw as i32),
        (8, false) => cur.write_u64(raw as u64),
        (8, true) => cur.write_i64(raw),
        (other, _) => {
            return InvalidLength {
                reason: format!("unsupported integer width {other}"),
            }
            .fail()
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_every_supported_width_and_signedness() {
        let cases: &[(u8, bool, i64)] = &[
            (1, false, 200),
            (1, true, -100),
            (2, false, 60000),
            (2, true, -30000),
            (4, false, 4_000_000_000),
            (4, true, -2_000_000_000),
            (8, false, 10_000_000_000),
            (8, true, -10_000_000_000),
        ];
        for &(width, signed, value) in cases {
            let mut w = CursorMut::default();
            write_raw_int(&mut w, width, signed, value).unwrap();
            let bytes = w.into_bytes();
            assert_eq!(bytes.len(), width as usize);
            let mut c = Cursor::new(&bytes);
            assert_eq!(read_raw_int(&mut c, width, signed).unwrap(), value);
        }
    }

    #[test]
    fn rejects_unsupported_widths() {
        let mut w = CursorMut::default();
        assert!(write_raw_int(&mut w, 3, false, 0).is_err());
        let bytes = [0u8; 3];
        let mut c = Cursor::new(&bytes);
        assert!(read_raw_int(&mut c, 3, false).is_err());
    }

    #[test]
    fn rejects_out_of_range_values_instead_of_truncating() {
        let mut w = CursorMut::default();
        let err = write_raw_int(&mut w, 1, false, 300).unwrap_err();
        assert!(matches!(err, embody_core::Error::RangeError { .. }));
        assert!(w.is_empty(), "a rejected write must not emit partial bytes");

        assert!(write_raw_int(&mut CursorMut::default(), 1, true, 200).is_err());
        assert!(write_raw_int(&mut CursorMut::default(), 2, false, -1).is_err());
        assert!(write_raw_int(&mut CursorMut::default(), 2, true, 40_000).is_err());
        assert!(write_raw_int(&mut CursorMut::default(), 4, false, -1).is_err());
        assert!(write_raw_int(&mut CursorMut::default(), 8, false, -1).is_err());
    }
}
