//! Vinyl-style track number parsing for `MoosicBox`.
//!
//! Audio files ripped from vinyl frequently carry a track position label such
//! as `A1`, `B05` or `2B` instead of (or alongside) a plain integer track
//! number. This crate turns those labels into a single integer that sorts the
//! tracks of a release in side-major order.
//!
//! ```rust
//! use moosicbox_track_number::parse_track_number;
//!
//! assert_eq!(parse_track_number("A1"), Ok(1));
//! assert_eq!(parse_track_number("B05"), Ok(25));
//! assert_eq!(parse_track_number("2b"), Ok(22));
//! assert_eq!(parse_track_number("15"), Ok(15));
//! assert!(parse_track_number("A1B").is_err());
//! ```
//!
//! All classification is ASCII-only, so the result never depends on the
//! locale the process runs under.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

pub mod position;
pub mod resolve;

pub use position::{LabelForm, Side, VinylPosition};
use thiserror::Error;

/// Number of track slots reserved for each side of a release.
///
/// A side designator is scaled by this value, so side `B` starts at 20, side
/// `C` at 40 and so on. Sides with 20 or more tracks collide with the
/// numbering of the following side; the value is kept fixed so existing
/// orderings remain stable.
pub const SLOTS_PER_SIDE: u32 = 20;

/// Diagnostic detail for why a label was rejected.
///
/// Every rejection is the same [`Unparseable`] outcome; the reason only exists
/// so callers can say something useful in their logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UnparseableReason {
    /// The label was absent, empty, or only whitespace.
    Empty,
    /// The label contained no ASCII digits.
    NoDigits,
    /// The label had letters or symbols outside a single leading or trailing
    /// side slot.
    InvalidCharacter,
    /// The digit run or the scaled track number does not fit in a `u32`.
    Overflow,
}

impl std::fmt::Display for UnparseableReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Empty => "empty label",
            Self::NoDigits => "no digits",
            Self::InvalidCharacter => "invalid character",
            Self::Overflow => "number too large",
        })
    }
}

/// The label does not encode a recognizable vinyl or numeric track position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[error("Unparseable track label: {reason}")]
pub struct Unparseable {
    reason: UnparseableReason,
}

impl Unparseable {
    #[must_use]
    pub(crate) const fn new(reason: UnparseableReason) -> Self {
        Self { reason }
    }

    #[must_use]
    pub const fn reason(&self) -> UnparseableReason {
        self.reason
    }
}

/// Parses a track position label into a normalized track number.
///
/// Side-prefixed (`B5`) and side-suffixed (`5B`) labels are scaled by
/// [`SLOTS_PER_SIDE`]; bare numbers are returned as-is.
///
/// # Errors
///
/// * If the label is empty or whitespace only
/// * If the label matches none of the side-prefix, side-suffix or bare numeric forms
/// * If the resulting number does not fit in a `u32`
pub fn parse_track_number(label: &str) -> Result<u32, Unparseable> {
    parse_vinyl_position(label)?.track_number()
}

/// Same as [`parse_track_number`], treating a missing label as unparseable.
///
/// # Errors
///
/// * If the label is `None`
/// * If [`parse_track_number`] fails
pub fn parse_track_number_opt(label: Option<&str>) -> Result<u32, Unparseable> {
    label.map_or(
        Err(Unparseable::new(UnparseableReason::Empty)),
        parse_track_number,
    )
}

type Rule = fn(&[u8]) -> Option<Result<VinylPosition, Unparseable>>;

/// Matching rules in precedence order. A rule returns `None` when the label
/// does not have its shape; once a rule claims the label its result is final.
const RULES: [Rule; 3] = [side_prefix, side_suffix, bare_numeric];

/// Parses a track position label into its structured form.
///
/// # Errors
///
/// * If the label is empty or whitespace only
/// * If the label matches none of the side-prefix, side-suffix or bare numeric forms
/// * If the digit run does not fit in a `u32`
pub fn parse_vinyl_position(label: &str) -> Result<VinylPosition, Unparseable> {
    parse_with_rules(label, &RULES)
}

fn parse_with_rules(label: &str, rules: &[Rule]) -> Result<VinylPosition, Unparseable> {
    // Multi-byte UTF-8 sequences never contain ASCII bytes, so classifying
    // bytes is safe for any input.
    let bytes = label.trim().as_bytes();

    if bytes.is_empty() {
        return Err(Unparseable::new(UnparseableReason::Empty));
    }

    rules
        .iter()
        .find_map(|rule| rule(bytes))
        .unwrap_or_else(|| Err(Unparseable::new(rejection_reason(bytes))))
}

/// `<letter><digits>`
fn side_prefix(bytes: &[u8]) -> Option<Result<VinylPosition, Unparseable>> {
    let (&letter, digits) = bytes.split_first()?;
    let side = Side::from_ascii_letter(letter)?;

    is_digit_run(digits).then(|| {
        parse_digits(digits).map(|position| VinylPosition::side_prefix(side, position))
    })
}

/// `<digits><letter>`
fn side_suffix(bytes: &[u8]) -> Option<Result<VinylPosition, Unparseable>> {
    let (&letter, digits) = bytes.split_last()?;
    let side = Side::from_ascii_letter(letter)?;

    is_digit_run(digits).then(|| {
        parse_digits(digits).map(|position| VinylPosition::side_suffix(side, position))
    })
}

fn bare_numeric(bytes: &[u8]) -> Option<Result<VinylPosition, Unparseable>> {
    is_digit_run(bytes).then(|| parse_digits(bytes).map(VinylPosition::numeric))
}

fn is_digit_run(bytes: &[u8]) -> bool {
    !bytes.is_empty() && bytes.iter().all(u8::is_ascii_digit)
}

fn parse_digits(digits: &[u8]) -> Result<u32, Unparseable> {
    digits.iter().try_fold(0_u32, |value, digit| {
        value
            .checked_mul(10)
            .and_then(|value| value.checked_add(u32::from(digit - b'0')))
            .ok_or(Unparseable::new(UnparseableReason::Overflow))
    })
}

fn rejection_reason(bytes: &[u8]) -> UnparseableReason {
    if bytes.iter().any(u8::is_ascii_digit) {
        UnparseableReason::InvalidCharacter
    } else {
        UnparseableReason::NoDigits
    }
}
