// Lovelink Rust Source Code File - See repository README for more info.
//
// Copyright 2026 Lovelink Project Developers. All rights reserved.
//
// Licensed under the BSD 3-Clause license. See LICENSE file in the project root
// for full license information.

//! The consent gate. [evaluate] is a pure function over an intent, a
//! [ConsentSettings] record and the caller-supplied clock readings; it never
//! touches storage or the network, and it never mutates anything. Advancing
//! the cooldown timestamp after a successful send is the caller's job.

use crate::{
  errors::PolicyDenial,
  intent::Intent,
  util::time_of_day::TimeOfDay,
};
use derive_builder::Builder;
use getset::{CopyGetters, Getters};
use serde::{Deserialize, Serialize};
use std::time::{Duration, SystemTime};

/// Configured window during which autonomous commands are suppressed. The
/// window is half-open `[start, end)`; `end < start` spans midnight. A window
/// with `start == end` is empty rather than all-day, so a misconfigured
/// record cannot silently suppress everything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, CopyGetters)]
#[getset(get_copy = "pub")]
pub struct QuietHours {
  start: TimeOfDay,
  end: TimeOfDay,
}

impl QuietHours {
  pub fn new(start: TimeOfDay, end: TimeOfDay) -> Self {
    Self { start, end }
  }

  pub fn contains(&self, time: TimeOfDay) -> bool {
    if self.start <= self.end {
      self.start <= time && time < self.end
    } else {
      // Overnight span, e.g. 23:00-07:00.
      time >= self.start || time < self.end
    }
  }
}

/// Per-user consent record. Loaded from the settings store at decision time
/// and passed in by value; the gate never caches one across decisions.
///
/// `max_duration_sec` of 0 means no duration ceiling is configured.
#[derive(
  Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, CopyGetters, Builder,
)]
pub struct ConsentSettings {
  #[getset(get_copy = "pub")]
  #[builder(default)]
  enabled: bool,
  #[getset(get_copy = "pub")]
  #[builder(default)]
  autonomous_allowed: bool,
  #[getset(get_copy = "pub")]
  #[builder(default = "20")]
  max_intensity: u32,
  #[getset(get_copy = "pub")]
  #[builder(default)]
  max_duration_sec: u32,
  #[getset(get_copy = "pub")]
  #[builder(default)]
  cooldown_minutes: u32,
  #[getset(get = "pub")]
  #[builder(default)]
  quiet_hours: Option<QuietHours>,
}

impl Default for ConsentSettings {
  // Everything off until someone explicitly opts in.
  fn default() -> Self {
    Self {
      enabled: false,
      autonomous_allowed: false,
      max_intensity: 20,
      max_duration_sec: 0,
      cooldown_minutes: 0,
      quiet_hours: None,
    }
  }
}

/// Who asked for this command. Autonomous commands are rate-limited and
/// time-gated; commands a human issued directly are not. The distinction is
/// not inferable from the intent shape, so every call site states it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CommandOrigin {
  Direct,
  Autonomous,
}

impl CommandOrigin {
  pub fn is_autonomous(&self) -> bool {
    matches!(self, CommandOrigin::Autonomous)
  }
}

/// Clock readings for one gate decision: the wall-clock time of day for the
/// quiet-hours check and a timestamp for cooldown arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, CopyGetters)]
#[getset(get_copy = "pub")]
pub struct GateTime {
  time_of_day: TimeOfDay,
  timestamp: SystemTime,
}

impl GateTime {
  pub fn new(time_of_day: TimeOfDay, timestamp: SystemTime) -> Self {
    Self {
      time_of_day,
      timestamp,
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GateDecision {
  Allowed,
  Denied(PolicyDenial),
}

impl GateDecision {
  pub fn is_allowed(&self) -> bool {
    matches!(self, GateDecision::Allowed)
  }
}

/// Evaluates an intent against a consent record. Checks short-circuit in a
/// fixed order: master enable, autonomous permission, quiet hours, cooldown,
/// intensity ceiling, duration ceiling. Stop commands bypass the gate
/// entirely; a stop must never be blocked by policy.
pub fn evaluate(
  intent: &Intent,
  settings: &ConsentSettings,
  now: GateTime,
  last_autonomous_at: Option<SystemTime>,
  origin: CommandOrigin,
) -> GateDecision {
  if intent.is_stop() {
    return GateDecision::Allowed;
  }

  if !settings.enabled() {
    return GateDecision::Denied(PolicyDenial::Disabled);
  }

  if origin.is_autonomous() {
    if !settings.autonomous_allowed() {
      return GateDecision::Denied(PolicyDenial::AutonomousNotPermitted);
    }

    if let Some(quiet_hours) = settings.quiet_hours() {
      if quiet_hours.contains(now.time_of_day()) {
        return GateDecision::Denied(PolicyDenial::QuietHours);
      }
    }

    let cooldown = Duration::from_secs(settings.cooldown_minutes() as u64 * 60);
    if !cooldown.is_zero() {
      if let Some(last) = last_autonomous_at {
        // On clock skew (last in the future) treat no time as elapsed; the
        // safe direction is to deny.
        let elapsed = now
          .timestamp()
          .duration_since(last)
          .unwrap_or(Duration::ZERO);
        if elapsed < cooldown {
          return GateDecision::Denied(PolicyDenial::Cooldown);
        }
      }
    }
  }

  if intent.peak_intensity() > settings.max_intensity() {
    return GateDecision::Denied(PolicyDenial::IntensityExceedsLimit);
  }

  let duration = intent.duration_sec();
  if duration != 0 && settings.max_duration_sec() != 0 && duration > settings.max_duration_sec() {
    return GateDecision::Denied(PolicyDenial::DurationExceedsLimit);
  }

  GateDecision::Allowed
}
