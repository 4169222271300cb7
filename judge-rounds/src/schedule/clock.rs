use chrono::{Duration, NaiveTime};

use crate::error::ScheduleError;
use super::types::{Round, TimedRound};

/// Minutes between the starts of two consecutive rounds
pub const ROUND_MINUTES: i64 = 10;

const SECONDS_PER_DAY: i64 = 24 * 60 * 60;

/// Parses a 12-hour clock time such as `9:00 AM` or `12:30 pm`
pub fn parse_start_time(input: &str) -> Result<NaiveTime, ScheduleError> {
    NaiveTime::parse_from_str(input.trim(), "%I:%M %p").map_err(|_| ScheduleError::InvalidStartTime {
        input: input.to_string(),
    })
}

/// Formats as `HH:MM AM/PM`, hour 0 shown as 12
pub fn format_clock(time: NaiveTime) -> String {
    time.format("%I:%M %p").to_string()
}

/// Start of round `index` (0-based) and the number of midnights crossed
pub fn round_start(start: NaiveTime, index: usize) -> (NaiveTime, u32) {
    let offset = Duration::minutes(ROUND_MINUTES * index as i64);
    let (time, overflow_secs) = start.overflowing_add_signed(offset);
    (time, (overflow_secs / SECONDS_PER_DAY) as u32)
}

/// Gives every round its start time, 10 minutes apart from `start_time`
pub fn attach_times(rounds: Vec<Round>, start_time: &str) -> Result<Vec<TimedRound>, ScheduleError> {
    let start = parse_start_time(start_time)?;
    Ok(with_start(rounds, start))
}

pub(crate) fn with_start(rounds: Vec<Round>, start: NaiveTime) -> Vec<TimedRound> {
    rounds
        .into_iter()
        .enumerate()
        .map(|(index, round)| {
            let (time, day_offset) = round_start(start, index);
            TimedRound {
                number: round.number,
                pairings: round.pairings,
                start: time,
                day_offset,
                start_label: format_clock(time),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hm(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn empty_rounds(n: u32) -> Vec<Round> {
        (1..=n).map(|number| Round { number, pairings: Vec::new() }).collect()
    }

    #[test]
    fn test_parse_start_time() {
        assert_eq!(parse_start_time("9:00 AM").unwrap(), hm(9, 0));
        assert_eq!(parse_start_time(" 09:30 pm ").unwrap(), hm(21, 30));
        assert_eq!(parse_start_time("12:00 PM").unwrap(), hm(12, 0));
        assert_eq!(parse_start_time("12:15 AM").unwrap(), hm(0, 15));
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for bad in ["", "nine", "13:00 PM", "9:60 AM", "9:00", "0:30 AM"] {
            assert!(
                matches!(parse_start_time(bad), Err(ScheduleError::InvalidStartTime { .. })),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_format_clock() {
        assert_eq!(format_clock(hm(0, 5)), "12:05 AM");
        assert_eq!(format_clock(hm(9, 0)), "09:00 AM");
        assert_eq!(format_clock(hm(12, 40)), "12:40 PM");
        assert_eq!(format_clock(hm(23, 50)), "11:50 PM");
    }

    #[test]
    fn test_attach_times_steps_ten_minutes() {
        let timed = attach_times(empty_rounds(3), "9:00 AM").unwrap();
        let labels: Vec<_> = timed.iter().map(|r| r.start_label.as_str()).collect();
        assert_eq!(labels, vec!["09:00 AM", "09:10 AM", "09:20 AM"]);
        assert!(timed.iter().all(|r| r.day_offset == 0));
    }

    #[test]
    fn test_attach_times_crosses_noon_and_hour() {
        let timed = attach_times(empty_rounds(4), "11:40 AM").unwrap();
        let labels: Vec<_> = timed.iter().map(|r| r.start_label.as_str()).collect();
        assert_eq!(labels, vec!["11:40 AM", "11:50 AM", "12:00 PM", "12:10 PM"]);
    }

    #[test]
    fn test_attach_times_wraps_midnight() {
        let timed = attach_times(empty_rounds(3), "11:50 PM").unwrap();
        assert_eq!(timed[0].start_label, "11:50 PM");
        assert_eq!(timed[1].start_label, "12:00 AM");
        assert_eq!(timed[1].day_offset, 1);
        assert_eq!(timed[2].start_label, "12:10 AM");
    }

    #[test]
    fn test_attach_times_rejects_before_work() {
        assert!(attach_times(empty_rounds(2), "noon").is_err());
    }
}
