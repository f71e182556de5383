//! Helpers for callers that pick a track number out of audio metadata and
//! order the tracks of an album by it.
//!
//! The parser itself never logs; rejected labels are reported here at `debug`
//! level so a library scan can show which fields were tried.

use crate::parse_track_number;

/// A metadata field that may hold a track position label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrackLabelField<'a> {
    pub name: &'a str,
    pub value: Option<&'a str>,
}

impl<'a> TrackLabelField<'a> {
    #[must_use]
    pub const fn new(name: &'a str, value: Option<&'a str>) -> Self {
        Self { name, value }
    }
}

/// Picks the track number for a file.
///
/// A conventional integer track number always wins. Otherwise each field is
/// tried in the given order and the first label that parses is used. `None`
/// means there is no order hint for the track.
#[must_use]
pub fn resolve_track_number(
    conventional: Option<u32>,
    fields: &[TrackLabelField<'_>],
) -> Option<u32> {
    if let Some(number) = conventional {
        log::trace!("resolve_track_number: using conventional track number {number}");
        return Some(number);
    }

    for field in fields {
        let Some(value) = field.value else {
            log::trace!("resolve_track_number: field {} is absent", field.name);
            continue;
        };

        match parse_track_number(value) {
            Ok(number) => {
                log::debug!(
                    "resolve_track_number: {}={value:?} -> {number}",
                    field.name
                );
                return Some(number);
            }
            Err(e) => {
                log::debug!(
                    "resolve_track_number: rejected {}={value:?}: {e}",
                    field.name
                );
            }
        }
    }

    log::debug!(
        "resolve_track_number: no usable label in {} field(s)",
        fields.len()
    );

    None
}

/// Sort key for a label. Unparseable labels sort after every parseable one.
#[must_use]
pub fn track_sort_key(label: &str) -> (bool, u32) {
    parse_track_number(label).map_or((true, 0), |number| (false, number))
}

/// Stable sort of `items` by the normalized track number of their label.
///
/// Items whose label cannot be parsed keep their relative order and are moved
/// to the end.
pub fn sort_by_track_label<T>(items: &mut [T], label: impl Fn(&T) -> &str) {
    items.sort_by_cached_key(|item| track_sort_key(label(item)));
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test_log::test]
    fn test_conventional_number_wins() {
        let fields = [TrackLabelField::new("TRACK_POSITION", Some("B2"))];

        assert_eq!(resolve_track_number(Some(3), &fields), Some(3));
    }

    #[test_log::test]
    fn test_falls_back_to_first_parseable_field() {
        let fields = [
            TrackLabelField::new("VINYL_POSITION", None),
            TrackLabelField::new("TRACK_POSITION", Some("side two")),
            TrackLabelField::new("TRACKNUMBER", Some("2B")),
            TrackLabelField::new("POSITION", Some("A1")),
        ];

        assert_eq!(resolve_track_number(None, &fields), Some(22));
    }

    #[test_log::test]
    fn test_no_usable_field_is_no_hint() {
        let fields = [
            TrackLabelField::new("TRACK_POSITION", Some("")),
            TrackLabelField::new("TRACKNUMBER", Some("A1B")),
        ];

        assert_eq!(resolve_track_number(None, &fields), None);
        assert_eq!(resolve_track_number(None, &[]), None);
    }

    #[test_log::test]
    fn test_zero_is_a_valid_track_number() {
        let fields = [TrackLabelField::new("TRACKNUMBER", Some("0"))];

        assert_eq!(resolve_track_number(None, &fields), Some(0));
    }

    #[test_log::test]
    fn test_sort_key_places_unparseable_last() {
        assert!(track_sort_key("Z19") < track_sort_key("???"));
        assert!(track_sort_key("A1") < track_sort_key("B1"));
    }
}
