//! Resolving the configured timezone for date display.

use time::{OffsetDateTime, UtcOffset};
use time_tz::{Offset, TimeZone};

/// Look up the current UTC offset for a canonical timezone name such as
/// "Asia/Jakarta". Returns `None` for names the timezone database does not
/// know.
pub fn get_local_offset(canonical_timezone: &str) -> Option<UtcOffset> {
    time_tz::timezones::get_by_name(canonical_timezone)
        .map(|timezone| timezone.get_offset_utc(&OffsetDateTime::now_utc()).to_utc())
}

#[cfg(test)]
mod tests {
    use super::get_local_offset;

    #[test]
    fn jakarta_is_utc_plus_seven() {
        let offset = get_local_offset("Asia/Jakarta").expect("timezone should exist");

        assert_eq!(offset.whole_hours(), 7);
    }

    #[test]
    fn unknown_timezone_is_none() {
        assert_eq!(get_local_offset("Bumi/Datar"), None);
    }
}
