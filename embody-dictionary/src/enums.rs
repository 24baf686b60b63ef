//! A descriptive registry over the bounded enumerations defined in
//! `embody-core`, for tooling that wants to enumerate known values rather
//! than decode a specific one (e.g. a diagnostic dump of a captured frame).

use embody_core::enums::{
    BlePairingState, ChargeState, EnumCodec, FileKind, FirmwareUpdateState, ReportingTriggerMode,
};

/// The name and wire codes of one bounded enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnumDescriptor {
    /// The enum's name, matching [`EnumCodec::NAME`].
    pub name: &'static str,
    /// Every valid wire code for this enum, in ascending order.
    pub codes: &'static [u8],
}

macro_rules! describe {
    ($enum_ty:ty, $codes:expr) => {
        EnumDescriptor {
            name: <$enum_ty as EnumCodec>::NAME,
            codes: $codes,
        }
    };
}

/// Every bounded enumeration known to this protocol version.
pub const ENUMS: &[EnumDescriptor] = &[
    describe!(FirmwareUpdateState, &[0, 1, 2, 3, 4, 5]),
    describe!(ChargeState, &[0, 1, 2, 3]),
    describe!(BlePairingState, &[0, 1, 2, 3, 4]),
    describe!(FileKind, &[0, 1, 2, 3]),
    describe!(ReportingTriggerMode, &[0, 1, 2, 3]),
];

/// Looks up an enum's descriptor by its [`EnumCodec::NAME`].
pub fn lookup(name: &str) -> Option<&'static EnumDescriptor> {
    ENUMS.iter().find(|d| d.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_enum_descriptor_matches_its_codec_variant_count() {
        assert_eq!(lookup("ChargeState").unwrap().codes.len(), ChargeState::VARIANTS.len());
        assert_eq!(
            lookup("FirmwareUpdateState").unwrap().codes.len(),
            FirmwareUpdateState::VARIANTS.len()
        );
    }

    #[test]
    fn unknown_enum_name_is_none() {
        assert!(lookup("NotARealEnum").is_none());
    }
}
