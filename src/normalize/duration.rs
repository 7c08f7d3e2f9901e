use once_cell::sync::Lazy;
use regex::Regex;

// Hour and minute components are independent and each optional. Seconds
// are matched so a well-formed duration is consumed, but never round into
// the minute total.
static ISO_DURATION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"PT(?:(\d+)H)?(?:(\d+)M)?(?:(\d+)S)?").expect("valid regex"));

/// Convert an ISO-8601 duration like `PT1H30M` to whole minutes.
/// Absent or non-matching input is 0 minutes.
pub fn parse_iso_minutes(value: Option<&str>) -> u32 {
    let text = match value {
        Some(text) => text,
        None => return 0,
    };
    let caps = match ISO_DURATION_RE.captures(text) {
        Some(caps) => caps,
        None => return 0,
    };

    let hours = caps
        .get(1)
        .and_then(|m| m.as_str().parse::<u32>().ok())
        .unwrap_or(0);
    let minutes = caps
        .get(2)
        .and_then(|m| m.as_str().parse::<u32>().ok())
        .unwrap_or(0);

    hours * 60 + minutes
}
