use crate::error::{CalendarResult, Error};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;

/// Clock time of an event, stored in 24-hour form
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawTimeOfDay")]
pub struct TimeOfDay {
    pub hour: u32,
    pub minute: u32,
}

/// Unchecked wire form, validated through `TimeOfDay::new`
#[derive(Deserialize)]
struct RawTimeOfDay {
    hour: u32,
    minute: u32,
}

impl TryFrom<RawTimeOfDay> for TimeOfDay {
    type Error = Error;

    fn try_from(raw: RawTimeOfDay) -> Result<Self, Self::Error> {
        TimeOfDay::new(raw.hour, raw.minute)
    }
}

/// 12-hour clock marker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Meridiem {
    Am,
    Pm,
}

impl TimeOfDay {
    pub fn new(hour: u32, minute: u32) -> CalendarResult<Self> {
        if hour > 23 || minute > 59 {
            return Err(Error::InvalidTime(format!("{}:{:02}", hour, minute)));
        }
        Ok(Self { hour, minute })
    }

    /// Parse a clock string.
    ///
    /// Accepts `"H:MM AM"` / `"H:MM PM"` with an hour of 1 to 12, or a 24-hour
    /// `"HH:MM"` without a marker. Markers are case-sensitive.
    pub fn parse(text: &str) -> CalendarResult<Self> {
        let invalid = || Error::InvalidTime(text.to_string());
        let trimmed = text.trim();

        let (clock, meridiem) = if let Some(rest) = trimmed.strip_suffix("AM") {
            (rest.trim_end(), Some(Meridiem::Am))
        } else if let Some(rest) = trimmed.strip_suffix("PM") {
            (rest.trim_end(), Some(Meridiem::Pm))
        } else {
            (trimmed, None)
        };

        let (hour, minute) = parse_clock(clock).ok_or_else(invalid)?;
        if minute > 59 {
            return Err(invalid());
        }

        let hour = match meridiem {
            Some(marker) => {
                if !(1..=12).contains(&hour) {
                    return Err(invalid());
                }
                to_24_hour(hour, marker)
            }
            None if hour <= 23 => hour,
            None => return Err(invalid()),
        };

        Ok(Self { hour, minute })
    }

    /// Format as a 24-hour `HH:MM` string
    pub fn to_24h(&self) -> String {
        format!("{:02}:{:02}", self.hour, self.minute)
    }
}

/// Formats as a 12-hour clock string, e.g. `10:30 AM`
impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let marker = if self.hour < 12 { "AM" } else { "PM" };
        let hour = match self.hour % 12 {
            0 => 12,
            h => h,
        };
        f.pad(&format!("{}:{:02} {}", hour, self.minute, marker))
    }
}

/// Split `H:MM` into its two numbers
fn parse_clock(clock: &str) -> Option<(u32, u32)> {
    let parts: Vec<&str> = clock.split(':').collect();
    if parts.len() != 2 || parts[1].len() != 2 {
        return None;
    }
    let hour = parts[0].parse::<u32>().ok()?;
    let minute = parts[1].parse::<u32>().ok()?;
    Some((hour, minute))
}

fn to_24_hour(raw_hour: u32, marker: Meridiem) -> u32 {
    match (marker, raw_hour) {
        (Meridiem::Am, 12) => 0,
        (Meridiem::Pm, h) if h != 12 => h + 12,
        (_, h) => h,
    }
}

/// Resolve the 24-hour bucket of a free-text clock string.
///
/// Takes the leading integer before `:` as the raw hour, adds 12 when the
/// text contains `PM` (unless the hour is 12) and maps `12 ... AM` to 0.
/// Returns None when there is no leading hour or the result is not a valid
/// hour of the day.
pub fn resolve_hour(text: &str) -> Option<u32> {
    let (raw, _) = text.trim().split_once(':')?;
    let raw_hour = raw.trim().parse::<u32>().ok()?;

    let hour = if text.contains("PM") && raw_hour != 12 {
        raw_hour.checked_add(12)?
    } else if text.contains("AM") && raw_hour == 12 {
        0
    } else {
        raw_hour
    };

    (hour <= 23).then_some(hour)
}

/// Hours shown as rows in the day and week grids, inclusive on both ends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourWindow {
    pub start: u32,
    pub end: u32,
}

impl Default for HourWindow {
    /// 8 AM through 7 PM
    fn default() -> Self {
        Self { start: 8, end: 19 }
    }
}

impl HourWindow {
    pub fn new(start: u32, end: u32) -> CalendarResult<Self> {
        if start > end || end > 23 {
            return Err(Error::Config(format!(
                "Invalid hour window {}..={}",
                start, end
            )));
        }
        Ok(Self { start, end })
    }

    pub fn hours(&self) -> RangeInclusive<u32> {
        self.start..=self.end
    }

    pub fn contains(&self, hour: u32) -> bool {
        self.hours().contains(&hour)
    }
}
