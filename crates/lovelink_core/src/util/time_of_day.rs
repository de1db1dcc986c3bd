// Lovelink Rust Source Code File - See repository README for more info.
//
// Copyright 2026 Lovelink Project Developers. All rights reserved.
//
// Licensed under the BSD 3-Clause license. See LICENSE file in the project root
// for full license information.

//! Wall-clock time of day, stored as minutes since midnight. The policy gate
//! compares these against the quiet-hours window; producing one from an
//! actual clock is the caller's job, which keeps this crate clock-free.

use crate::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use std::{fmt, str::FromStr};

const MINUTES_PER_DAY: u16 = 24 * 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay {
  minutes: u16,
}

impl TimeOfDay {
  pub const MIDNIGHT: TimeOfDay = TimeOfDay { minutes: 0 };

  pub fn new(hour: u8, minute: u8) -> Result<Self, ValidationError> {
    if hour > 23 || minute > 59 {
      return Err(ValidationError::InvalidTimeOfDay(format!(
        "{hour:02}:{minute:02}"
      )));
    }
    Ok(Self {
      minutes: hour as u16 * 60 + minute as u16,
    })
  }

  /// Total-wrapping constructor for callers that already hold a minute count,
  /// e.g. one derived from a wall clock.
  pub fn from_minutes_of_day(minutes: u16) -> Self {
    Self {
      minutes: minutes % MINUTES_PER_DAY,
    }
  }

  pub fn hour(&self) -> u8 {
    (self.minutes / 60) as u8
  }

  pub fn minute(&self) -> u8 {
    (self.minutes % 60) as u8
  }

  pub fn minutes_from_midnight(&self) -> u16 {
    self.minutes
  }
}

impl fmt::Display for TimeOfDay {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{:02}:{:02}", self.hour(), self.minute())
  }
}

impl FromStr for TimeOfDay {
  type Err = ValidationError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let invalid = || ValidationError::InvalidTimeOfDay(s.to_owned());
    let (hour_str, minute_str) = s.split_once(':').ok_or_else(invalid)?;
    let hour = hour_str.parse::<u8>().map_err(|_| invalid())?;
    let minute = minute_str.parse::<u8>().map_err(|_| invalid())?;
    TimeOfDay::new(hour, minute).map_err(|_| invalid())
  }
}

// Settings records store quiet hours in the "HH:MM" form users configure, so
// serialize through the string representation rather than the minute count.
impl Serialize for TimeOfDay {
  fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
  where
    S: Serializer,
  {
    serializer.serialize_str(&self.to_string())
  }
}

impl<'de> Deserialize<'de> for TimeOfDay {
  fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
  where
    D: Deserializer<'de>,
  {
    let s = String::deserialize(deserializer)?;
    s.parse().map_err(de::Error::custom)
  }
}

#[cfg(test)]
mod test {
  use super::*;
  use test_case::test_case;

  #[test_case("00:00", 0, 0)]
  #[test_case("07:30", 7, 30)]
  #[test_case("23:59", 23, 59)]
  #[test_case("9:05", 9, 5)]
  fn test_parse(input: &str, hour: u8, minute: u8) {
    let parsed = input.parse::<TimeOfDay>().unwrap();
    assert_eq!(parsed.hour(), hour);
    assert_eq!(parsed.minute(), minute);
  }

  #[test_case("24:00")]
  #[test_case("12:60")]
  #[test_case("noon")]
  #[test_case("12")]
  #[test_case("")]
  fn test_parse_rejects(input: &str) {
    assert!(matches!(
      input.parse::<TimeOfDay>(),
      Err(ValidationError::InvalidTimeOfDay(_))
    ));
  }

  #[test]
  fn test_display_round_trip() {
    let time = TimeOfDay::new(7, 5).unwrap();
    assert_eq!(time.to_string(), "07:05");
    assert_eq!("07:05".parse::<TimeOfDay>().unwrap(), time);
  }

  #[test]
  fn test_serde_string_form() {
    let time = TimeOfDay::new(23, 0).unwrap();
    assert_eq!(serde_json::to_string(&time).unwrap(), "\"23:00\"");
    assert_eq!(
      serde_json::from_str::<TimeOfDay>("\"23:00\"").unwrap(),
      time
    );
  }

  #[test]
  fn test_from_minutes_wraps() {
    assert_eq!(TimeOfDay::from_minutes_of_day(1440), TimeOfDay::MIDNIGHT);
    assert_eq!(TimeOfDay::from_minutes_of_day(1500).hour(), 1);
  }
}
