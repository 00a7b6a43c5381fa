use chrono::{DateTime, Local, NaiveDateTime, Utc};
use chrono_tz::Tz;

use crate::consts::TIMESTAMP_FORMAT;
use crate::error::AppError;

#[derive(Debug, Clone, Copy)]
pub(crate) enum Timezone {
    Local,
    Named(Tz),
}

impl Timezone {
    /// Zone for directory timestamps. Absent, empty or `local` means the machine's zone.
    pub(crate) fn parse(value: Option<&str>) -> Result<Self, AppError> {
        match value.map(str::trim) {
            None | Some("") => Ok(Timezone::Local),
            Some(name) if name.eq_ignore_ascii_case("local") => Ok(Timezone::Local),
            Some(name) if name.eq_ignore_ascii_case("utc") => Ok(Timezone::Named(chrono_tz::UTC)),
            Some(name) => name
                .parse::<Tz>()
                .map(Timezone::Named)
                .map_err(|_| AppError::InvalidTimezone {
                    input: name.to_string(),
                }),
        }
    }

    /// Wall-clock time in this zone for a UTC instant
    pub(crate) fn wall_clock(self, utc: DateTime<Utc>) -> NaiveDateTime {
        match self {
            Timezone::Local => utc.with_timezone(&Local).naive_local(),
            Timezone::Named(tz) => utc.with_timezone(&tz).naive_local(),
        }
    }
}

/// Source of "now" for directory timestamps
#[derive(Debug, Clone, Copy)]
pub(crate) enum Clock {
    System(Timezone),
    #[cfg_attr(not(test), allow(dead_code))]
    Fixed(NaiveDateTime),
}

impl Clock {
    pub(crate) fn now(self) -> NaiveDateTime {
        match self {
            Clock::System(tz) => tz.wall_clock(Utc::now()),
            Clock::Fixed(at) => at,
        }
    }

    /// Current time rendered as `YYYY-MM-DDTHH.MM`
    pub(crate) fn timestamp(self) -> String {
        format_timestamp(self.now())
    }
}

pub(crate) fn format_timestamp(at: NaiveDateTime) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_or_local_uses_machine_zone() {
        for value in [None, Some(""), Some(" Local ")] {
            assert!(matches!(Timezone::parse(value).unwrap(), Timezone::Local));
        }
    }

    #[test]
    fn utc_and_named_zones() {
        assert!(matches!(
            Timezone::parse(Some("UTC")).unwrap(),
            Timezone::Named(chrono_tz::UTC)
        ));
        assert!(matches!(
            Timezone::parse(Some("Europe/Oslo")).unwrap(),
            Timezone::Named(chrono_tz::Europe::Oslo)
        ));
    }

    #[test]
    fn unknown_zone_names_the_input() {
        let err = Timezone::parse(Some("Mars/Olympus")).unwrap_err();
        assert!(matches!(err, AppError::InvalidTimezone { ref input } if input == "Mars/Olympus"));
    }

    #[test]
    fn directory_stamp_uses_zone_wall_clock() {
        let utc = "2026-06-15T12:00:00Z".parse::<DateTime<Utc>>().unwrap();
        let tz = Timezone::parse(Some("America/New_York")).unwrap();
        assert_eq!(format_timestamp(tz.wall_clock(utc)), "2026-06-15T08.00");
    }

    #[test]
    fn fixed_clock_drops_seconds() {
        let at = NaiveDateTime::parse_from_str("2025-01-15 09:30:59", "%Y-%m-%d %H:%M:%S")
            .unwrap();
        assert_eq!(Clock::Fixed(at).timestamp(), "2025-01-15T09.30");
    }
}
