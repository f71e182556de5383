//! Structured form of a parsed track position label.

use std::{fmt, str::FromStr};

use crate::{SLOTS_PER_SIDE, Unparseable, UnparseableReason};

/// One face of a vinyl release, `A` through `Z`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "char", into = "char")
)]
pub struct Side(u8);

impl Side {
    /// The first side of a release.
    pub const A: Self = Self(0);
    /// The second side of a release.
    pub const B: Self = Self(1);

    /// Returns the side for an ASCII letter in either case.
    #[must_use]
    pub const fn from_ascii_letter(letter: u8) -> Option<Self> {
        if letter.is_ascii_alphabetic() {
            Some(Self(letter.to_ascii_uppercase() - b'A'))
        } else {
            None
        }
    }

    /// Zero-based position of the side letter in the alphabet.
    #[must_use]
    pub const fn ordinal(self) -> u32 {
        self.0 as u32
    }

    #[must_use]
    pub const fn letter(self) -> char {
        (b'A' + self.0) as char
    }
}

impl TryFrom<char> for Side {
    type Error = Unparseable;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        u8::try_from(value)
            .ok()
            .and_then(Self::from_ascii_letter)
            .ok_or(Unparseable::new(UnparseableReason::InvalidCharacter))
    }
}

impl From<Side> for char {
    fn from(value: Side) -> Self {
        value.letter()
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// The shape a label was recognized as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LabelForm {
    /// `B5`
    SidePrefix,
    /// `5B`
    SideSuffix,
    /// `5`
    Numeric,
}

/// A track position as printed on a release, e.g. `B5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawVinylPosition")
)]
pub struct VinylPosition {
    side: Option<Side>,
    position: u32,
    form: LabelForm,
}

/// Unchecked wire form of [`VinylPosition`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawVinylPosition {
    side: Option<Side>,
    position: u32,
    form: LabelForm,
}

#[cfg(feature = "serde")]
impl TryFrom<RawVinylPosition> for VinylPosition {
    type Error = Unparseable;

    fn try_from(value: RawVinylPosition) -> Result<Self, Self::Error> {
        match (value.form, value.side) {
            (LabelForm::SidePrefix, Some(side)) => Ok(Self::side_prefix(side, value.position)),
            (LabelForm::SideSuffix, Some(side)) => Ok(Self::side_suffix(side, value.position)),
            (LabelForm::Numeric, None) => Ok(Self::numeric(value.position)),
            // Side forms need a side and numeric labels must not have one.
            _ => Err(Unparseable::new(UnparseableReason::InvalidCharacter)),
        }
    }
}

impl VinylPosition {
    #[must_use]
    pub const fn side_prefix(side: Side, position: u32) -> Self {
        Self {
            side: Some(side),
            position,
            form: LabelForm::SidePrefix,
        }
    }

    #[must_use]
    pub const fn side_suffix(side: Side, position: u32) -> Self {
        Self {
            side: Some(side),
            position,
            form: LabelForm::SideSuffix,
        }
    }

    #[must_use]
    pub const fn numeric(position: u32) -> Self {
        Self {
            side: None,
            position,
            form: LabelForm::Numeric,
        }
    }

    #[must_use]
    pub const fn side(&self) -> Option<Side> {
        self.side
    }

    /// Position on the side, or the whole number for numeric labels.
    #[must_use]
    pub const fn position(&self) -> u32 {
        self.position
    }

    #[must_use]
    pub const fn form(&self) -> LabelForm {
        self.form
    }

    /// Normalized track number: `side * SLOTS_PER_SIDE + position`.
    ///
    /// # Errors
    ///
    /// * If the scaled number does not fit in a `u32`
    pub fn track_number(&self) -> Result<u32, Unparseable> {
        let Some(side) = self.side else {
            return Ok(self.position);
        };

        side.ordinal()
            .checked_mul(SLOTS_PER_SIDE)
            .and_then(|offset| offset.checked_add(self.position))
            .ok_or(Unparseable::new(UnparseableReason::Overflow))
    }
}

impl fmt::Display for VinylPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.form, self.side) {
            (LabelForm::SidePrefix, Some(side)) => write!(f, "{side}{}", self.position),
            (LabelForm::SideSuffix, Some(side)) => write!(f, "{}{side}", self.position),
            _ => write!(f, "{}", self.position),
        }
    }
}

impl FromStr for VinylPosition {
    type Err = Unparseable;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parse_vinyl_position(s)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test_log::test]
    fn test_side_from_ascii_letter_is_case_insensitive() {
        assert_eq!(Side::from_ascii_letter(b'a'), Some(Side::A));
        assert_eq!(Side::from_ascii_letter(b'B'), Some(Side::B));
        assert_eq!(Side::from_ascii_letter(b'z').map(Side::ordinal), Some(25));
        assert_eq!(Side::from_ascii_letter(b'1'), None);
        assert_eq!(Side::from_ascii_letter(b'-'), None);
    }

    #[test_log::test]
    fn test_side_letter_is_upper_case() {
        assert_eq!(Side::from_ascii_letter(b'c').map(Side::letter), Some('C'));
    }

    #[test_log::test]
    fn test_side_try_from_char_rejects_non_ascii_letters() {
        assert_eq!(Side::try_from('d').map(Side::ordinal), Ok(3));
        assert!(Side::try_from('é').is_err());
        assert!(Side::try_from('ı').is_err());
        assert!(Side::try_from('7').is_err());
    }

    #[test_log::test]
    fn test_display_normalizes_case_and_leading_zeros() {
        let prefix: VinylPosition = "b05".parse().unwrap();
        let suffix: VinylPosition = " 3c ".parse().unwrap();
        let numeric: VinylPosition = "007".parse().unwrap();

        assert_eq!(prefix.to_string(), "B5");
        assert_eq!(suffix.to_string(), "3C");
        assert_eq!(numeric.to_string(), "7");
    }

    #[test_log::test]
    fn test_structured_fields() {
        let position: VinylPosition = "2B".parse().unwrap();

        assert_eq!(position.side(), Some(Side::B));
        assert_eq!(position.position(), 2);
        assert_eq!(position.form(), LabelForm::SideSuffix);
        assert_eq!(position.track_number(), Ok(22));
    }

    #[test_log::test]
    fn test_numeric_is_unscaled() {
        assert_eq!(VinylPosition::numeric(u32::MAX).track_number(), Ok(u32::MAX));
    }

    #[test_log::test]
    fn test_scaled_overflow_is_rejected() {
        let position = VinylPosition::side_prefix(Side::B, u32::MAX);

        assert_eq!(
            position.track_number().map_err(|e| e.reason()),
            Err(UnparseableReason::Overflow)
        );
    }

    #[cfg(feature = "serde")]
    #[test_log::test]
    fn test_serde_round_trip() {
        let position = VinylPosition::side_prefix(Side::B, 5);
        let json = serde_json::to_string(&position).unwrap();
        let deserialized: VinylPosition = serde_json::from_str(&json).unwrap();

        assert_eq!(json, r#"{"side":"B","position":5,"form":"SidePrefix"}"#);
        assert_eq!(position, deserialized);
    }

    #[cfg(feature = "serde")]
    #[test_log::test]
    fn test_serde_round_trip_every_form() {
        for position in [
            VinylPosition::side_prefix(Side::A, 1),
            VinylPosition::side_suffix(Side::B, 2),
            VinylPosition::numeric(15),
        ] {
            let json = serde_json::to_string(&position).unwrap();
            let deserialized: VinylPosition = serde_json::from_str(&json).unwrap();

            assert_eq!(deserialized, position, "json {json}");
        }
    }

    #[cfg(feature = "serde")]
    #[test_log::test]
    fn test_serde_rejects_form_and_side_mismatch() {
        for json in [
            r#"{"side":"B","position":5,"form":"Numeric"}"#,
            r#"{"side":null,"position":5,"form":"SidePrefix"}"#,
            r#"{"side":null,"position":5,"form":"SideSuffix"}"#,
        ] {
            assert!(
                serde_json::from_str::<VinylPosition>(json).is_err(),
                "expected {json} to be rejected"
            );
        }
    }

    #[cfg(feature = "serde")]
    #[test_log::test]
    fn test_deserialized_position_agrees_with_display() {
        let position: VinylPosition =
            serde_json::from_str(r#"{"side":"B","position":5,"form":"SideSuffix"}"#).unwrap();
        let reparsed: VinylPosition = position.to_string().parse().unwrap();

        assert_eq!(position.to_string(), "5B");
        assert_eq!(reparsed, position);
        assert_eq!(reparsed.track_number(), position.track_number());
    }

    #[cfg(feature = "serde")]
    #[test_log::test]
    fn test_serde_rejects_invalid_side() {
        assert!(serde_json::from_str::<Side>(r#""?""#).is_err());
    }
}
