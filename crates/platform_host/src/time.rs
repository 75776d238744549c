//! Time helpers shared by the console `time` command and the taskbar clock.

#[cfg(not(target_arch = "wasm32"))]
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

/// Wall-clock time of day, already converted to the user's local timezone where the host allows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ClockTime {
    /// Hour in `0..24`.
    pub hour: u32,
    /// Minute in `0..60`.
    pub minute: u32,
    /// Second in `0..60`.
    pub second: u32,
}

impl ClockTime {
    /// Creates a clock value, wrapping out-of-range components into their valid ranges.
    pub fn new(hour: u32, minute: u32, second: u32) -> Self {
        Self {
            hour: hour % 24,
            minute: minute % 60,
            second: second % 60,
        }
    }

    /// Builds a UTC time of day from a unix timestamp in milliseconds.
    pub fn from_unix_ms(unix_ms: u64) -> Self {
        let seconds_of_day = (unix_ms / 1000) % 86_400;
        Self {
            hour: (seconds_of_day / 3600) as u32,
            minute: ((seconds_of_day % 3600) / 60) as u32,
            second: (seconds_of_day % 60) as u32,
        }
    }

    /// Formats as 24-hour `HH:MM:SS`.
    pub fn hms(self) -> String {
        format!("{:02}:{:02}:{:02}", self.hour, self.minute, self.second)
    }

    /// Formats as 24-hour `HH:MM`.
    pub fn hm(self) -> String {
        format!("{:02}:{:02}", self.hour, self.minute)
    }
}

/// Returns the current unix timestamp in milliseconds.
pub fn unix_time_ms_now() -> u64 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::now().max(0.0) as u64
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as u64
    }
}

/// Returns the current local wall-clock time.
///
/// Browser builds read the local time from `Date`; native builds have no timezone database and
/// report UTC.
pub fn local_clock_time_now() -> ClockTime {
    #[cfg(target_arch = "wasm32")]
    {
        let date = js_sys::Date::new_0();
        ClockTime::new(date.get_hours(), date.get_minutes(), date.get_seconds())
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        ClockTime::from_unix_ms(unix_time_ms_now())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn formats_with_zero_padding() {
        let time = ClockTime::new(7, 5, 9);
        assert_eq!(time.hms(), "07:05:09");
        assert_eq!(time.hm(), "07:05");
    }

    #[test]
    fn unix_ms_is_reduced_to_time_of_day() {
        // 2024-01-01T13:45:30.250Z
        let time = ClockTime::from_unix_ms(1_704_116_730_250);
        assert_eq!(time, ClockTime::new(13, 45, 30));
    }

    #[test]
    fn new_wraps_out_of_range_components() {
        assert_eq!(ClockTime::new(24, 61, 60), ClockTime::new(0, 1, 0));
    }

    #[test]
    fn clock_time_serializes_as_plain_fields() {
        let value = serde_json::to_value(ClockTime::new(1, 2, 3)).expect("serialize");
        assert_eq!(value, serde_json::json!({ "hour": 1, "minute": 2, "second": 3 }));
    }
}
