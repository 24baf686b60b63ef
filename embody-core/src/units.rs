//! Physical units carried alongside scaled attribute values.

/// The physical unit a [`ScaledValue`](crate::attribute::ScaledValue) is expressed in.
///
/// This is metadata only: the attribute registry is what ties a unit to a
/// particular attribute id, width and scaling factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Unit {
    /// No physical unit; a dimensionless count or index.
    None,
    /// Percent (0-100), typically for battery or charge levels.
    Percent,
    /// Millivolts.
    Millivolt,
    /// Milligauss, for magnetometer readings.
    Milligauss,
    /// Microampere-hours, for accumulated battery charge.
    MicroampereHour,
    /// Hundredths of a degree Celsius.
    CentiCelsius,
    /// Beats per minute.
    Bpm,
}

impl Unit {
    /// A short, human-readable label for the unit, as used in diagnostics.
    pub fn label(self) -> &'static str {
        match self {
            Unit::None => "",
            Unit::Percent => "%",
            Unit::Millivolt => "mV",
            Unit::Milligauss => "mG",
            Unit::MicroampereHour => "uAh",
            Unit::CentiCelsius => "0.01\u{00b0}C",
            Unit::Bpm => "bpm",
        }
    }
}
