//! Bounded enumerations carried by messages and attributes.
//!
//! Each enum is a plain `#[repr(u8)]` Rust enum with a `TryFrom<u8>` and a
//! `From<Enum> for u8`, rather than a derive macro or runtime lookup table:
//! the set of codes is small and fixed by the protocol, so an exhaustive
//! `match` is the simplest correct implementation.

use crate::error::{Result, UnknownEnumValue};

/// A bounded enumeration whose wire representation is a single byte.
///
/// The [`embody-dictionary`](../embody_dictionary/index.html) crate's enum
/// registry uses this trait to run the same decode/encode/totality checks
/// uniformly over every enum defined here.
pub trait EnumCodec: Sized + Copy + 'static {
    /// The name reported in [`crate::error::Error::UnknownEnumValue`].
    const NAME: &'static str;

    /// Every declared variant, in ascending code order.
    const VARIANTS: &'static [Self];

    /// Decodes a wire code into a variant.
    fn from_code(code: u8) -> Result<Self>;

    /// Encodes a variant back into its wire code.
    fn to_code(self) -> u8;
}

macro_rules! bounded_enum {
    (
        $(#[$meta:meta])*
        $name:ident { $($variant:ident = $code:expr),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[repr(u8)]
        pub enum $name {
            $($variant = $code),+
        }

        impl EnumCodec for $name {
            const NAME: &'static str = stringify!($name);
            const VARIANTS: &'static [Self] = &[$(Self::$variant),+];

            fn from_code(code: u8) -> Result<Self> {
                match code {
                    $($code => Ok(Self::$variant),)+
                    other => UnknownEnumValue {
                        enum_name: Self::NAME,
                        code: other,
                    }
                    .fail(),
                }
            }

            fn to_code(self) -> u8 {
                self as u8
            }
        }
    };
}

bounded_enum! {
    /// Progress of an in-flight firmware update.
    FirmwareUpdateState {
        Idle = 0,
        Downloading = 1,
        Verifying = 2,
        Applying = 3,
        Rebooting = 4,
        Failed = 5,
    }
}

bounded_enum! {
    /// Battery charge state.
    ChargeState {
        Discharging = 0,
        Charging = 1,
        Full = 2,
        Fault = 3,
    }
}

bounded_enum! {
    /// BLE pairing state machine position.
    BlePairingState {
        Unpaired = 0,
        Advertising = 1,
        Pairing = 2,
        Paired = 3,
        Bonded = 4,
    }
}

bounded_enum! {
    /// The kind of file a [`crate::file_entry::FileEntry`] or file operation refers to.
    FileKind {
        Log = 0,
        Config = 1,
        Firmware = 2,
        Recording = 3,
    }
}

bounded_enum! {
    /// When an attribute's device-driven reporting is triggered.
    ReportingTriggerMode {
        Off = 0,
        OnChange = 1,
        Periodic = 2,
        Both = 3,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_totality<E: EnumCodec + std::fmt::Debug + PartialEq>() {
        for &variant in E::VARIANTS {
            let code = variant.to_code();
            assert_eq!(E::from_code(code).unwrap(), variant);
        }
        // The full declared range is contiguous from 0, so one past the
        // last variant is guaranteed to be unknown.
        let bad_code = E::VARIANTS.len() as u8;
        assert!(E::from_code(bad_code).is_err());
    }

    #[test]
    fn every_enum_round_trips_and_rejects_unknown_codes() {
        assert_totality::<FirmwareUpdateState>();
        assert_totality::<ChargeState>();
        assert_totality::<BlePairingState>();
        assert_totality::<FileKind>();
        assert_totality::<ReportingTriggerMode>();
    }

    #[test]
    fn unknown_code_reports_enum_name() {
        let err = ChargeState::from_code(0xFF).unwrap_err();
        match err {
            crate::error::Error::UnknownEnumValue { enum_name, code } => {
                assert_eq!(enum_name, "ChargeState");
                assert_eq!(code, 0xFF);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
