use chrono::{DateTime, Datelike, Utc};

/// Wire format for instants handed across the bridge. Second precision with
/// a literal `Z`, as produced by the Android `DateUtil` helper.
pub const BRIDGE_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

pub fn format_timestamp(instant: &DateTime<Utc>) -> String {
    instant.format(BRIDGE_TIMESTAMP_FORMAT).to_string()
}

/// Converts the millisecond epoch values AppAuth stores for token expiry.
pub fn instant_from_epoch_millis(millis: i64) -> Option<DateTime<Utc>> {
    DateTime::<Utc>::from_timestamp_millis(millis).filter(has_four_digit_year)
}

/// Converts the second epoch values used by dynamic client registration.
pub fn instant_from_epoch_secs(secs: i64) -> Option<DateTime<Utc>> {
    DateTime::<Utc>::from_timestamp(secs, 0).filter(has_four_digit_year)
}

// `%Y` signs years outside 0000..=9999, which the bridge format cannot carry.
fn has_four_digit_year(instant: &DateTime<Utc>) -> bool {
    (0..=9999).contains(&instant.year())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_epoch_plus_one_hour() {
        let instant = instant_from_epoch_secs(3600).expect("valid instant");
        assert_eq!(format_timestamp(&instant), "1970-01-01T01:00:00Z");
    }

    #[test]
    fn truncates_sub_second_precision() {
        let instant = instant_from_epoch_millis(1_700_000_000_999).expect("valid instant");
        assert_eq!(format_timestamp(&instant), "2023-11-14T22:13:20Z");
    }

    #[test]
    fn millis_and_secs_agree_on_whole_seconds() {
        assert_eq!(
            instant_from_epoch_millis(86_400_000),
            instant_from_epoch_secs(86_400)
        );
    }

    #[test]
    fn years_outside_four_digits_are_rejected() {
        assert!(instant_from_epoch_millis(253_402_300_800_000).is_none());
        assert!(instant_from_epoch_secs(253_402_300_800).is_none());
        assert_eq!(
            instant_from_epoch_secs(253_402_300_799).map(|instant| format_timestamp(&instant)),
            Some("9999-12-31T23:59:59Z".to_string())
        );
        assert!(instant_from_epoch_secs(-62_167_219_201).is_none());
        assert_eq!(
            instant_from_epoch_secs(-62_167_219_200).map(|instant| format_timestamp(&instant)),
            Some("0000-01-01T00:00:00Z".to_string())
        );
    }

    #[test]
    fn out_of_range_values_are_rejected() {
        assert!(instant_from_epoch_secs(i64::MAX).is_none());
        assert!(instant_from_epoch_millis(i64::MAX).is_none());
    }
}
