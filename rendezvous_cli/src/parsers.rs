use jiff::{SpanRelativeTo, Timestamp};
use rendezvous_optimizer::meeting_time::parse_meeting_time;

pub fn parse_duration(input: &str) -> Result<jiff::SignedDuration, String> {
    if let Ok(duration) = input.parse::<jiff::SignedDuration>() {
        return Ok(duration);
    }

    if let Ok(duration) = input
        .parse::<jiff::Span>()
        .and_then(|span| span.to_duration(SpanRelativeTo::days_are_24_hours()))
    {
        return Ok(duration);
    }

    if let Ok(seconds) = input.parse::<i64>() {
        return Ok(jiff::SignedDuration::from_secs(seconds.abs()));
    }

    Err(String::from("Invalid duration"))
}

/// Same forms as the `meeting_datetime` field of an optimize request.
pub fn parse_timestamp(input: &str) -> Result<Timestamp, String> {
    parse_meeting_time(input).map_err(|err| format!("Invalid meeting time {}: {}", input, err))
}
