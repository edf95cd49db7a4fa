//! CloudWatch metric units.

use std::fmt;

/// The fixed set of unit strings CloudWatch accepts in a metric definition.
///
/// The wire format carries units as literal strings; this enum is the
/// canonical list. The log model stores whatever string the caller
/// supplied, and the validator rejects anything that does not parse back
/// through [`Unit::try_from_str`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unit {
    Seconds,
    Microseconds,
    Milliseconds,
    Bytes,
    Kilobytes,
    Megabytes,
    Gigabytes,
    Terabytes,
    Bits,
    Kilobits,
    Megabits,
    Gigabits,
    Terabits,
    Percent,
    Count,
    BytesPerSecond,
    KilobytesPerSecond,
    MegabytesPerSecond,
    GigabytesPerSecond,
    TerabytesPerSecond,
    BitsPerSecond,
    KilobitsPerSecond,
    MegabitsPerSecond,
    GigabitsPerSecond,
    TerabitsPerSecond,
    CountPerSecond,
    None,
}

impl Unit {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Seconds => "Seconds",
            Self::Microseconds => "Microseconds",
            Self::Milliseconds => "Milliseconds",
            Self::Bytes => "Bytes",
            Self::Kilobytes => "Kilobytes",
            Self::Megabytes => "Megabytes",
            Self::Gigabytes => "Gigabytes",
            Self::Terabytes => "Terabytes",
            Self::Bits => "Bits",
            Self::Kilobits => "Kilobits",
            Self::Megabits => "Megabits",
            Self::Gigabits => "Gigabits",
            Self::Terabits => "Terabits",
            Self::Percent => "Percent",
            Self::Count => "Count",
            Self::BytesPerSecond => "Bytes/Second",
            Self::KilobytesPerSecond => "Kilobytes/Second",
            Self::MegabytesPerSecond => "Megabytes/Second",
            Self::GigabytesPerSecond => "Gigabytes/Second",
            Self::TerabytesPerSecond => "Terabytes/Second",
            Self::BitsPerSecond => "Bits/Second",
            Self::KilobitsPerSecond => "Kilobits/Second",
            Self::MegabitsPerSecond => "Megabits/Second",
            Self::GigabitsPerSecond => "Gigabits/Second",
            Self::TerabitsPerSecond => "Terabits/Second",
            Self::CountPerSecond => "Count/Second",
            Self::None => "None",
        }
    }

    /// Parse an exact, case-sensitive unit string. Returns `None` for
    /// anything outside the fixed enumeration.
    pub fn try_from_str(s: &str) -> Option<Self> {
        Some(match s {
            "Seconds" => Self::Seconds,
            "Microseconds" => Self::Microseconds,
            "Milliseconds" => Self::Milliseconds,
            "Bytes" => Self::Bytes,
            "Kilobytes" => Self::Kilobytes,
            "Megabytes" => Self::Megabytes,
            "Gigabytes" => Self::Gigabytes,
            "Terabytes" => Self::Terabytes,
            "Bits" => Self::Bits,
            "Kilobits" => Self::Kilobits,
            "Megabits" => Self::Megabits,
            "Gigabits" => Self::Gigabits,
            "Terabits" => Self::Terabits,
            "Percent" => Self::Percent,
            "Count" => Self::Count,
            "Bytes/Second" => Self::BytesPerSecond,
            "Kilobytes/Second" => Self::KilobytesPerSecond,
            "Megabytes/Second" => Self::MegabytesPerSecond,
            "Gigabytes/Second" => Self::GigabytesPerSecond,
            "Terabytes/Second" => Self::TerabytesPerSecond,
            "Bits/Second" => Self::BitsPerSecond,
            "Kilobits/Second" => Self::KilobitsPerSecond,
            "Megabits/Second" => Self::MegabitsPerSecond,
            "Gigabits/Second" => Self::GigabitsPerSecond,
            "Terabits/Second" => Self::TerabitsPerSecond,
            "Count/Second" => Self::CountPerSecond,
            "None" => Self::None,
            _ => return Option::None,
        })
    }

    /// All units, in wire-format order.
    pub fn all() -> &'static [Unit] {
        &[
            Self::Seconds,
            Self::Microseconds,
            Self::Milliseconds,
            Self::Bytes,
            Self::Kilobytes,
            Self::Megabytes,
            Self::Gigabytes,
            Self::Terabytes,
            Self::Bits,
            Self::Kilobits,
            Self::Megabits,
            Self::Gigabits,
            Self::Terabits,
            Self::Percent,
            Self::Count,
            Self::BytesPerSecond,
            Self::KilobytesPerSecond,
            Self::MegabytesPerSecond,
            Self::GigabytesPerSecond,
            Self::TerabytesPerSecond,
            Self::BitsPerSecond,
            Self::KilobitsPerSecond,
            Self::MegabitsPerSecond,
            Self::GigabitsPerSecond,
            Self::TerabitsPerSecond,
            Self::CountPerSecond,
            Self::None,
        ]
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<Unit> for String {
    fn from(unit: Unit) -> Self {
        unit.as_str().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_all_units() {
        for unit in Unit::all() {
            assert_eq!(Unit::try_from_str(unit.as_str()), Some(*unit));
        }
    }

    #[test]
    fn test_case_sensitive() {
        assert_eq!(Unit::try_from_str("Count"), Some(Unit::Count));
        assert_eq!(Unit::try_from_str("count"), Option::None);
        assert_eq!(Unit::try_from_str("COUNT"), Option::None);
    }

    #[test]
    fn test_unknown_rejected() {
        assert_eq!(Unit::try_from_str("InvalidUnit"), Option::None);
        assert_eq!(Unit::try_from_str(""), Option::None);
        assert_eq!(Unit::try_from_str("Bytes/Sec"), Option::None);
    }

    #[test]
    fn test_display_matches_wire_string() {
        assert_eq!(Unit::Milliseconds.to_string(), "Milliseconds");
        assert_eq!(Unit::BytesPerSecond.to_string(), "Bytes/Second");
        assert_eq!(String::from(Unit::None), "None");
    }

    #[test]
    fn test_enumeration_is_complete() {
        assert_eq!(Unit::all().len(), 27);
    }
}
