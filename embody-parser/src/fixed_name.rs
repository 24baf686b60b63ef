//! Fixed-width, null-padded ASCII name fields, as used by file operations.

use embody_core::error::{RangeError, Result, Truncated};
use embody_core::file_entry::FILE_NAME_WIDTH;

/// Reads a [`FILE_NAME_WIDTH`]-byte name field, trimming at the first null byte.
///
/// A null terminator must actually be present: a field with no null byte
/// among its `FILE_NAME_WIDTH` bytes has no room left for one and could
/// never be produced by [`write_fixed_name`], matching the stricter
/// `name.len() >= FILE_NAME_WIDTH` rejection in
/// [`embody_core::file_entry::FileEntry::new`].
pub fn read_fixed_name(bytes: &[u8]) -> Result<String> {
    if bytes.len() < FILE_NAME_WIDTH {
        return Truncated {
            needed: FILE_NAME_WIDTH - bytes.len(),
        }
        .fail();
    }
    let field = &bytes[..FILE_NAME_WIDTH];
    let end = match field.iter().position(|&b| b == 0) {
        Some(end) => end,
        None => {
            return RangeError {
                reason: format!(
                    "file name field has no null terminator within {FILE_NAME_WIDTH} bytes"
                ),
            }
            .fail()
        }
    };
    let name = std::str::from_utf8(&field[..end])
        .map_err(|_| ())
        .and_then(|s| if s.is_ascii() { Ok(s) } else { Err(()) });
    match name {
        Ok(s) => Ok(s.to_string()),
        Err(()) => RangeError {
            reason: "file name field is not valid null-padded ASCII".to_string(),
        }
        .fail(),
    }
}

/// Writes `name` into a [`FILE_NAME_WIDTH`]-byte null-padded field.
pub fn write_fixed_name(name: &str, out: &mut Vec<u8>) -> Result<()> {
    if !name.is_ascii() || name.len() >= FILE_NAME_WIDTH {
        return RangeError {
            reason: format!(
                "file name {name:?} must be ASCII and shorter than {FILE_NAME_WIDTH} bytes"
            ),
        }
        .fail();
    }
    let start = out.len();
    out.extend_from_slice(name.as_bytes());
    out.resize(start + FILE_NAME_WIDTH, 0);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_at_first_null() {
        let mut field = vec![b'a', b'b', 0];
        field.resize(FILE_NAME_WIDTH, 0);
        assert_eq!(read_fixed_name(&field).unwrap(), "ab");
    }

    #[test]
    fn round_trips_a_full_width_name() {
        let name = "a".repeat(FILE_NAME_WIDTH - 1);
        let mut out = Vec::new();
        write_fixed_name(&name, &mut out).unwrap();
        assert_eq!(out.len(), FILE_NAME_WIDTH);
        assert_eq!(read_fixed_name(&out).unwrap(), name);
    }

    #[test]
    fn rejects_a_name_with_no_room_for_the_terminator() {
        let name = "a".repeat(FILE_NAME_WIDTH);
        let mut out = Vec::new();
        assert!(write_fixed_name(&name, &mut out).is_err());
    }

    #[test]
    fn rejects_a_field_with_no_null_terminator_on_read() {
        let field = vec![b'a'; FILE_NAME_WIDTH];
        assert!(read_fixed_name(&field).is_err());
    }
}
