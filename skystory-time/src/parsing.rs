use crate::{TimeError, TimeResult};

#[derive(Debug, Clone, PartialEq)]
pub struct ParsedDateTime {
    pub year: i32,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: f64,
}

/// Parses a UTC timestamp such as `2024-03-20T21:30:00Z`.
///
/// Accepts `T` or a space between date and time, an optional fractional
/// second, and an optional `Z` or `+00:00` suffix. A bare `YYYY-MM-DD` means
/// midnight. Other UTC offsets are rejected rather than silently applied.
pub fn parse_iso8601(s: &str) -> TimeResult<ParsedDateTime> {
    let s = s.trim();

    const MAX_ISO8601_LENGTH: usize = 35;
    if s.len() > MAX_ISO8601_LENGTH {
        return Err(TimeError::ParseError("Input too long".to_string()));
    }

    let s = s
        .strip_suffix('Z')
        .or_else(|| s.strip_suffix("+00:00"))
        .unwrap_or(s);

    let (date_part, time_part) = match s.find(['T', ' ']) {
        Some(pos) => (&s[..pos], Some(&s[pos + 1..])),
        None => (s, None),
    };

    let date: Vec<&str> = date_part.split('-').collect();
    if date.len() != 3 || date[0].len() != 4 {
        return Err(TimeError::ParseError(format!(
            "Invalid date format: '{}'. Expected YYYY-MM-DD",
            date_part
        )));
    }
    let year: i32 = parse_field(date[0], "year")?;
    let month: u8 = parse_field(date[1], "month")?;
    let day: u8 = parse_field(date[2], "day")?;

    let (hour, minute, second) = match time_part {
        None => (0, 0, 0.0),
        Some(t) => {
            if t.contains(['+', '-']) {
                return Err(TimeError::ParseError(format!(
                    "Only UTC timestamps are supported: '{}'",
                    t
                )));
            }
            let parts: Vec<&str> = t.split(':').collect();
            if parts.len() < 2 || parts.len() > 3 {
                return Err(TimeError::ParseError(format!(
                    "Invalid time format: '{}'. Expected HH:MM[:SS[.fff]]",
                    t
                )));
            }
            let hour: u8 = parse_field(parts[0], "hour")?;
            let minute: u8 = parse_field(parts[1], "minute")?;
            let second: f64 = match parts.get(2) {
                Some(sec) => parse_field(sec, "second")?,
                None => 0.0,
            };
            (hour, minute, second)
        }
    };

    Ok(ParsedDateTime {
        year,
        month,
        day,
        hour,
        minute,
        second,
    })
}

fn parse_field<T: std::str::FromStr>(s: &str, what: &str) -> TimeResult<T> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit() || b == b'.') {
        return Err(TimeError::ParseError(format!("Invalid {}: '{}'", what, s)));
    }
    s.parse()
        .map_err(|_| TimeError::ParseError(format!("Invalid {}: '{}'", what, s)))
}
