//! Clock display: wall time and a time-of-day greeting.

use chrono::{NaiveDateTime, NaiveTime, Timelike};

/// How hours are rendered on the clock face.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HourFormat {
    /// `1:05` with an AM/PM marker.
    Twelve,
    /// `13:05`.
    #[default]
    TwentyFour,
}

impl HourFormat {
    /// Parses the `hour_format` option (`"12"` or `"24"`).
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "12" => Some(Self::Twelve),
            "24" => Some(Self::TwentyFour),
            _ => None,
        }
    }
}

/// Formats the clock face as `HH:MM` (24h) or `H:MM` (12h).
///
/// ```
/// use chrono::NaiveTime;
/// use flocus::widgets::clock::{format_time, HourFormat};
///
/// let t = NaiveTime::from_hms_opt(13, 5, 0).unwrap();
/// assert_eq!(format_time(t, HourFormat::TwentyFour), "13:05");
/// assert_eq!(format_time(t, HourFormat::Twelve), "1:05");
/// ```
#[must_use]
pub fn format_time(time: NaiveTime, format: HourFormat) -> String {
    match format {
        HourFormat::TwentyFour => format!("{:02}:{:02}", time.hour(), time.minute()),
        HourFormat::Twelve => {
            let (_, hour) = time.hour12();
            format!("{hour}:{:02}", time.minute())
        }
    }
}

/// `AM`/`PM` marker for 12-hour clocks.
#[must_use]
pub fn meridiem(time: NaiveTime, format: HourFormat) -> Option<&'static str> {
    match format {
        HourFormat::TwentyFour => None,
        HourFormat::Twelve => Some(if time.hour12().0 { "PM" } else { "AM" }),
    }
}

/// Greeting for the hour, addressed to `name` when one was given.
#[must_use]
pub fn greeting(hour: u32, name: &str) -> String {
    let salutation = match hour {
        0..=11 => "Good morning",
        12..=17 => "Good afternoon",
        _ => "Good evening",
    };

    let name = name.trim();
    if name.is_empty() {
        salutation.to_string()
    } else {
        format!("{salutation}, {name}")
    }
}

/// Long date line shown under the clock face, e.g. `Saturday, 17 October`.
#[must_use]
pub fn date_line(now: NaiveDateTime) -> String {
    now.format("%A, %-d %B").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn twenty_four_hour_pads_both_fields() {
        assert_eq!(format_time(at(7, 3), HourFormat::TwentyFour), "07:03");
        assert_eq!(format_time(at(0, 0), HourFormat::TwentyFour), "00:00");
    }

    #[test]
    fn twelve_hour_maps_midnight_and_noon() {
        assert_eq!(format_time(at(0, 15), HourFormat::Twelve), "12:15");
        assert_eq!(format_time(at(12, 0), HourFormat::Twelve), "12:00");
        assert_eq!(meridiem(at(0, 15), HourFormat::Twelve), Some("AM"));
        assert_eq!(meridiem(at(12, 0), HourFormat::Twelve), Some("PM"));
        assert_eq!(meridiem(at(12, 0), HourFormat::TwentyFour), None);
    }

    #[test]
    fn greeting_follows_time_of_day() {
        assert_eq!(greeting(6, "Ada"), "Good morning, Ada");
        assert_eq!(greeting(12, "Ada"), "Good afternoon, Ada");
        assert_eq!(greeting(17, "Ada"), "Good afternoon, Ada");
        assert_eq!(greeting(18, "Ada"), "Good evening, Ada");
    }

    #[test]
    fn greeting_without_name_drops_the_comma() {
        assert_eq!(greeting(9, ""), "Good morning");
        assert_eq!(greeting(9, "   "), "Good morning");
    }

    #[test]
    fn parses_hour_format_option() {
        assert_eq!(HourFormat::parse("12"), Some(HourFormat::Twelve));
        assert_eq!(HourFormat::parse(" 24 "), Some(HourFormat::TwentyFour));
        assert_eq!(HourFormat::parse("13"), None);
    }

    #[test]
    fn date_line_spells_out_weekday_and_month() {
        let now = NaiveDate::from_ymd_opt(2026, 10, 17)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap();
        assert_eq!(date_line(now), "Saturday, 17 October");
    }
}
