//! Timestamp pattern rendering
//!
//! A pattern is free text with `{Token}` or `{Token:width}` placeholders,
//! e.g. `{FullYear}-{Month:2}-{Date:2} {toLocaleTimeString}`. Numeric tokens
//! are zero-padded to `width`, up to [`MAX_PAD_WIDTH`]. Unknown tokens,
//! wider pads and stray braces are copied through unchanged.
//!
//! The getter tokens read the instant in whatever zone it carries; loggers
//! pass local time. `toISOString` and `toUTCString` always render UTC.
//!
//! | Token                | Value                                   |
//! |----------------------|-----------------------------------------|
//! | `FullYear`           | four digit year                         |
//! | `Month`              | month, 1-based                          |
//! | `Date`               | day of month                            |
//! | `Day`                | weekday, Sunday = 0                     |
//! | `Hours`              | hour, 24h clock                         |
//! | `Minutes`            | minutes                                 |
//! | `Seconds`            | seconds                                 |
//! | `Milliseconds`       | milliseconds                            |
//! | `toLocaleTimeString` | `HH:MM:SS`                              |
//! | `toISOString`        | `2025-01-08T10:30:45.123Z`              |
//! | `toUTCString`        | `Wed, 08 Jan 2025 10:30:45 GMT`         |

use chrono::{DateTime, Datelike, TimeZone, Timelike, Utc};
use std::fmt;

/// Default template used by new loggers
pub const DEFAULT_PATTERN: &str = "{FullYear}-{Month:2}-{Date:2} {toLocaleTimeString}";

/// Widest zero padding a token accepts
pub const MAX_PAD_WIDTH: usize = 64;

/// Render `pattern` for the given instant
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use devnull::core::pattern;
///
/// let at = Utc.with_ymd_and_hms(2025, 1, 8, 9, 5, 3).unwrap();
/// assert_eq!(pattern::render("{FullYear}-{Month:2}-{Date:2}", &at), "2025-01-08");
/// assert_eq!(pattern::render("{Hours}h", &at), "9h");
/// ```
#[must_use]
pub fn render<Tz>(pattern: &str, at: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    let mut out = String::with_capacity(pattern.len() + 16);
    let mut rest = pattern;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];

        let Some(close) = after.find('}') else {
            out.push_str(&rest[open..]);
            return out;
        };

        let inner = &after[..close];
        match token(inner, at) {
            Some(value) => out.push_str(&value),
            None => {
                out.push('{');
                out.push_str(inner);
                out.push('}');
            }
        }
        rest = &after[close + 1..];
    }

    out.push_str(rest);
    out
}

fn token<Tz>(inner: &str, at: &DateTime<Tz>) -> Option<String>
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    let (name, width) = match inner.split_once(':') {
        Some((name, width)) => {
            let width = width.parse::<usize>().ok().filter(|w| *w <= MAX_PAD_WIDTH)?;
            (name, Some(width))
        }
        None => (inner, None),
    };

    let number: i64 = match name {
        "FullYear" => i64::from(at.year()),
        "Month" => i64::from(at.month()),
        "Date" => i64::from(at.day()),
        "Day" => i64::from(at.weekday().num_days_from_sunday()),
        "Hours" => i64::from(at.hour()),
        "Minutes" => i64::from(at.minute()),
        "Seconds" => i64::from(at.second()),
        "Milliseconds" => i64::from(at.timestamp_subsec_millis()),
        "toLocaleTimeString" => return Some(at.format("%H:%M:%S").to_string()),
        "toISOString" => {
            let utc = at.with_timezone(&Utc);
            return Some(utc.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string());
        }
        "toUTCString" => {
            let utc = at.with_timezone(&Utc);
            return Some(utc.format("%a, %d %b %Y %H:%M:%S GMT").to_string());
        }
        _ => return None,
    };

    Some(match width {
        Some(width) => format!("{:0width$}", number, width = width),
        None => number.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    fn fixed_datetime() -> DateTime<Utc> {
        // 2025-01-08 (a Wednesday) 09:05:03.042 UTC
        Utc.with_ymd_and_hms(2025, 1, 8, 9, 5, 3)
            .single()
            .expect("valid datetime")
            + chrono::Duration::milliseconds(42)
    }

    #[test]
    fn test_default_pattern() {
        assert_eq!(render(DEFAULT_PATTERN, &fixed_datetime()), "2025-01-08 09:05:03");
    }

    #[test]
    fn test_padding() {
        let at = fixed_datetime();
        assert_eq!(render("{Minutes}", &at), "5");
        assert_eq!(render("{Minutes:2}", &at), "05");
        assert_eq!(render("{Milliseconds:3}", &at), "042");
        assert_eq!(render("{Day}", &at), "3");
    }

    #[test]
    fn test_iso_and_utc_strings() {
        let at = fixed_datetime();
        assert_eq!(render("{toISOString}", &at), "2025-01-08T09:05:03.042Z");
        assert_eq!(render("{toUTCString}", &at), "Wed, 08 Jan 2025 09:05:03 GMT");
    }

    #[test]
    fn test_unknown_tokens_pass_through() {
        let at = fixed_datetime();
        assert_eq!(render("pew pew", &at), "pew pew");
        assert_eq!(render("{Nope} {FullYear}", &at), "{Nope} 2025");
        assert_eq!(render("{Month:x}", &at), "{Month:x}");
        assert_eq!(render("open {FullYear", &at), "open {FullYear");
        assert_eq!(render("", &at), "");
    }

    #[test]
    fn test_oversized_width_is_kept_verbatim() {
        let at = fixed_datetime();
        assert_eq!(render("{FullYear:70000}", &at), "{FullYear:70000}");
        assert_eq!(
            render("{Month:18446744073709551615}", &at),
            "{Month:18446744073709551615}"
        );
        assert_eq!(render("{Month:99999999999999999999}", &at), "{Month:99999999999999999999}");

        let widest = render(&format!("{{Date:{}}}", MAX_PAD_WIDTH), &at);
        assert_eq!(widest.len(), MAX_PAD_WIDTH);
        assert!(widest.ends_with("08"));
    }

    #[test]
    fn test_getters_follow_zone_but_iso_stays_utc() {
        let at = fixed_datetime().with_timezone(&FixedOffset::east_opt(5 * 3600).unwrap());

        assert_eq!(render("{Hours:2}:{Minutes:2}", &at), "14:05");
        assert_eq!(render("{toLocaleTimeString}", &at), "14:05:03");
        assert_eq!(render("{toISOString}", &at), "2025-01-08T09:05:03.042Z");
        assert_eq!(render("{toUTCString}", &at), "Wed, 08 Jan 2025 09:05:03 GMT");
    }
}
