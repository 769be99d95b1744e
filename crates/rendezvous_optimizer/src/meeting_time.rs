use jiff::{
    Timestamp, Zoned,
    civil::{DateTime, Weekday},
    tz::TimeZone,
};
use serde::{Deserialize, Deserializer};

pub const DEFAULT_MEETING_WEEKDAY: Weekday = Weekday::Monday;
pub const DEFAULT_MEETING_HOUR: i8 = 19;

/// The next Monday at 19:00 in `now`'s time zone, strictly after today.
///
/// On a Monday this is a week ahead.
pub fn next_meeting_time(now: &Zoned) -> Result<Zoned, jiff::Error> {
    now.date()
        .nth_weekday(1, DEFAULT_MEETING_WEEKDAY)?
        .at(DEFAULT_MEETING_HOUR, 0, 0, 0)
        .to_zoned(now.time_zone().clone())
}

/// Reads an RFC 3339 instant, a zoned datetime such as
/// `2024-03-04T19:00:00[Europe/London]`, or a civil datetime taken in the
/// system time zone.
pub fn parse_meeting_time(input: &str) -> Result<Timestamp, jiff::Error> {
    if let Ok(timestamp) = input.parse::<Timestamp>() {
        return Ok(timestamp);
    }

    if let Ok(zoned) = input.parse::<Zoned>() {
        return Ok(zoned.timestamp());
    }

    Ok(input
        .parse::<DateTime>()?
        .to_zoned(TimeZone::system())?
        .timestamp())
}

/// Serde adapter for an optional meeting time in any form
/// [`parse_meeting_time`] accepts.
pub fn deserialize_meeting_time<'de, D>(deserializer: D) -> Result<Option<Timestamp>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer)?
        .map(|value| parse_meeting_time(&value).map_err(serde::de::Error::custom))
        .transpose()
}
