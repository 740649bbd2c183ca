//! Date time values and string parsing.
//!
//! A Date's internal slot is a time value: milliseconds since the Unix epoch,
//! or NaN for an Invalid Date.

use chrono::{FixedOffset, NaiveDate, NaiveDateTime, TimeZone, Utc};

/// Largest magnitude of a valid time value (±100,000,000 days)
pub const MAX_TIME_VALUE: f64 = 8.64e15;

/// TimeClip: NaN for non-finite or out-of-range values, else truncated.
pub fn time_clip(ms: f64) -> f64 {
    if !ms.is_finite() || ms.abs() > MAX_TIME_VALUE {
        f64::NAN
    } else {
        // `+ 0.0` folds -0 into +0
        ms.trunc() + 0.0
    }
}

/// Date string parser (`Date.parse`)
pub struct DateParser;

impl DateParser {
    /// Current time in milliseconds (`Date.now()`)
    pub fn now() -> f64 {
        Utc::now().timestamp_millis() as f64
    }

    /// Parse a date string and return milliseconds since epoch.
    ///
    /// Accepts ISO 8601 dates (`2020-10-10`, `2020-10`, `2020`), date-times
    /// separated by `T` or a space with optional fractional seconds and a
    /// `Z` or `±HH:MM` offset, and `MM/DD/YYYY`. Date-times without an
    /// offset are read as UTC. Anything else is NaN.
    ///
    /// # Examples
    ///
    /// ```
    /// use core_types::DateParser;
    ///
    /// assert_eq!(DateParser::parse("1970-01-02"), 86_400_000.0);
    /// assert!(DateParser::parse("20201010").is_nan());
    /// ```
    pub fn parse(s: &str) -> f64 {
        let s = s.trim();
        Self::parse_iso8601(s)
            .or_else(|| Self::parse_slashed(s))
            .map(time_clip)
            .unwrap_or(f64::NAN)
    }

    fn parse_iso8601(s: &str) -> Option<f64> {
        match s.split_once(|c| c == 'T' || c == ' ') {
            Some((date_part, time_part)) => {
                let date = Self::parse_ymd(date_part)?;
                let (clock, offset_seconds) = Self::split_offset(time_part)?;
                let naive = Self::parse_clock(date, clock)?;
                let millis = match offset_seconds {
                    Some(seconds) => FixedOffset::east_opt(seconds)?
                        .from_local_datetime(&naive)
                        .single()?
                        .timestamp_millis(),
                    None => Utc.from_utc_datetime(&naive).timestamp_millis(),
                };
                Some(millis as f64)
            }
            None => {
                let naive = Self::parse_ymd(s)?.and_hms_opt(0, 0, 0)?;
                Some(Utc.from_utc_datetime(&naive).timestamp_millis() as f64)
            }
        }
    }

    /// `YYYY`, `YYYY-MM` or `YYYY-MM-DD`
    fn parse_ymd(s: &str) -> Option<NaiveDate> {
        let mut parts = s.split('-');
        let year_part = parts.next()?;
        if year_part.len() != 4 {
            return None;
        }
        let year = digits(year_part)?;
        let month = parts.next().map(digits).unwrap_or(Some(1))?;
        let day = parts.next().map(digits).unwrap_or(Some(1))?;
        if parts.next().is_some() {
            return None;
        }
        NaiveDate::from_ymd_opt(i32::try_from(year).ok()?, month, day)
    }

    /// Split a trailing `Z` / `±HH:MM` / `±HHMM` offset off the time part.
    fn split_offset(time: &str) -> Option<(&str, Option<i32>)> {
        if let Some(clock) = time.strip_suffix('Z') {
            return Some((clock, Some(0)));
        }
        let Some(idx) = time.rfind(|c| c == '+' || c == '-') else {
            return Some((time, None));
        };
        let (clock, offset) = time.split_at(idx);
        let sign = if offset.starts_with('-') { -1 } else { 1 };
        let offset = &offset[1..];
        let (hours, minutes) = match offset.split_once(':') {
            Some((h, m)) => (h, m),
            None if offset.len() == 4 => (offset.get(..2)?, offset.get(2..)?),
            None => (offset, "0"),
        };
        let (hours, minutes) = (digits(hours)?, digits(minutes)?);
        if hours > 23 || minutes > 59 {
            return None;
        }
        let seconds = i32::try_from(hours * 3600 + minutes * 60).ok()?;
        Some((clock, Some(sign * seconds)))
    }

    /// `HH:MM`, `HH:MM:SS` or `HH:MM:SS.sss`
    fn parse_clock(date: NaiveDate, clock: &str) -> Option<NaiveDateTime> {
        let mut parts = clock.split(':');
        let hours = digits(parts.next()?)?;
        let minutes = digits(parts.next()?)?;
        let (seconds, millis) = match parts.next() {
            Some(sec) => match sec.split_once('.') {
                Some((whole, fraction)) => {
                    if fraction.is_empty() || !fraction.bytes().all(|b| b.is_ascii_digit()) {
                        return None;
                    }
                    let padded = format!("{:0<3}", &fraction[..fraction.len().min(3)]);
                    (digits(whole)?, padded.parse().ok()?)
                }
                None => (digits(sec)?, 0),
            },
            None => (0, 0),
        };
        if parts.next().is_some() {
            return None;
        }
        date.and_hms_milli_opt(hours, minutes, seconds, millis)
    }

    /// `MM/DD/YYYY`, two-digit years map to 1950-2049
    fn parse_slashed(s: &str) -> Option<f64> {
        let parts: Vec<&str> = s.split('/').map(str::trim).collect();
        let [month, day, year] = parts.as_slice() else {
            return None;
        };
        let year = digits(year)?;
        let year = match year {
            0..=49 => 2000 + year,
            50..=99 => 1900 + year,
            _ => year,
        };
        let year = i32::try_from(year).ok()?;
        let naive =
            NaiveDate::from_ymd_opt(year, digits(month)?, digits(day)?)?.and_hms_opt(0, 0, 0)?;
        Some(Utc.from_utc_datetime(&naive).timestamp_millis() as f64)
    }
}

fn digits(s: &str) -> Option<u32> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}
