use std::fmt;
use wasm_bindgen::JsValue;

const SECS_PER_DAY: u64 = 86_400;

/// Clock time derived from a seconds offset. The anchor the offset is
/// measured from is arbitrary, so only hour/minute/second are exposed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimeOfDay {
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hour, self.minute, self.second)
    }
}

/// Converts a (possibly fractional) count of seconds into a clock time.
/// Offsets of a day or more wrap; negative input clamps to midnight.
pub fn time_of_day(seconds_offset: f64) -> TimeOfDay {
    let total = seconds_offset.max(0.0).floor() as u64;
    let secs = (total % SECS_PER_DAY) as u32;
    TimeOfDay {
        hour: secs / 3600,
        minute: (secs % 3600) / 60,
        second: secs % 60,
    }
}

pub fn format_duration(secs: u64) -> String {
    let h = secs / 3600;
    let m = (secs % 3600) / 60;
    let s = secs % 60;
    if h > 0 {
        format!("{:01}:{:02}:{:02}", h, m, s)
    } else if m > 0 {
        format!("{:02}:{:02}", m, s)
    } else {
        format!("{}s", s)
    }
}

pub fn clog(msg: &str) {
    web_sys::console::log_1(&JsValue::from_str(msg));
}

#[cfg(test)]
mod tests {
    use super::{format_duration, time_of_day, TimeOfDay};

    #[test]
    fn zero_is_midnight() {
        assert_eq!(
            time_of_day(0.0),
            TimeOfDay {
                hour: 0,
                minute: 0,
                second: 0
            }
        );
    }

    #[test]
    fn rolls_over_minutes_and_hours() {
        let t = time_of_day(3661.0);
        assert_eq!((t.hour, t.minute, t.second), (1, 1, 1));
    }

    #[test]
    fn wraps_past_a_full_day() {
        // 25h 1m 1s reads as 1:01:01 on the clock
        let t = time_of_day(90_061.0);
        assert_eq!((t.hour, t.minute, t.second), (1, 1, 1));
    }

    #[test]
    fn truncates_fractional_seconds() {
        assert_eq!(time_of_day(59.9).second, 59);
    }

    #[test]
    fn clamps_negative_offsets() {
        assert_eq!(time_of_day(-5.0), time_of_day(0.0));
    }

    #[test]
    fn repeated_calls_agree() {
        assert_eq!(time_of_day(12_345.6), time_of_day(12_345.6));
    }

    #[test]
    fn displays_zero_padded() {
        assert_eq!(time_of_day(3661.0).to_string(), "01:01:01");
        assert_eq!(time_of_day(0.0).to_string(), "00:00:00");
    }

    #[test]
    fn duration_picks_shortest_form() {
        assert_eq!(format_duration(7), "7s");
        assert_eq!(format_duration(61), "01:01");
        assert_eq!(format_duration(3661), "1:01:01");
    }
}
