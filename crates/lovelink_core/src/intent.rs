// Lovelink Rust Source Code File - See repository README for more info.
//
// Copyright 2026 Lovelink Project Developers. All rights reserved.
//
// Licensed under the BSD 3-Clause license. See LICENSE file in the project root
// for full license information.

//! High-level command intents. An [Intent] says what the caller wants a toy
//! to do; it carries no policy state and has not yet been validated against
//! motor ranges. [crate::encoder::encode] turns an intent into a wire command
//! or fails with a [ValidationError](crate::errors::ValidationError).

use crate::errors::ValidationError;
use enumflags2::{BitFlags, bitflags};
use getset::{CopyGetters, Getters};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum_macros::{Display, EnumString};

/// Motors a Lovense toy can carry. Also used as the pattern feature set and
/// the toy capability set.
#[bitflags]
#[repr(u8)]
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Motor {
  Vibrate,
  Rotate,
  Pump,
}

pub type MotorSet = BitFlags<Motor>;

impl Motor {
  /// Vendor-documented intensity ceiling for this motor type.
  pub fn max_intensity(&self) -> u32 {
    match self {
      Motor::Vibrate | Motor::Rotate => 20,
      Motor::Pump => 3,
    }
  }

  /// Single-character feature code used in pattern rule strings.
  pub fn feature_char(&self) -> char {
    match self {
      Motor::Vibrate => 'v',
      Motor::Rotate => 'r',
      Motor::Pump => 'p',
    }
  }

  /// Action verb used in Function command strings, e.g. `Vibrate:10`.
  pub fn action_verb(&self) -> &'static str {
    match self {
      Motor::Vibrate => "Vibrate",
      Motor::Rotate => "Rotate",
      Motor::Pump => "Pump",
    }
  }
}

/// Renders a feature set in the vendor's `v`/`r`/`p` combination form, always
/// in v-r-p order.
pub fn feature_string(features: MotorSet) -> String {
  [Motor::Vibrate, Motor::Rotate, Motor::Pump]
    .iter()
    .filter(|m| features.contains(**m))
    .map(|m| m.feature_char())
    .collect()
}

/// Which toy a command addresses. The vendor treats an absent/empty toy id as
/// "all connected toys".
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ToySelector {
  #[default]
  All,
  Single(String),
}

impl ToySelector {
  pub fn single(id: &str) -> Self {
    ToySelector::Single(id.to_owned())
  }

  /// Wire form: `None` for all toys, `Some(id)` for a single toy.
  pub fn as_wire_id(&self) -> Option<String> {
    match self {
      ToySelector::All => None,
      ToySelector::Single(id) => Some(id.clone()),
    }
  }
}

/// On/off cycling applied to an otherwise continuous command. Both members
/// must be greater than zero; the encoder rejects anything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, CopyGetters)]
#[getset(get_copy = "pub")]
pub struct LoopTiming {
  running_sec: u32,
  pause_sec: u32,
}

impl LoopTiming {
  pub fn new(running_sec: u32, pause_sec: u32) -> Self {
    Self {
      running_sec,
      pause_sec,
    }
  }
}

/// Single-motor command: run one motor at a fixed intensity, optionally loop
/// cycled, for a bounded or continuous duration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, CopyGetters)]
pub struct MotorIntent {
  #[getset(get_copy = "pub")]
  intensity: u32,
  /// Total running time in seconds; 0 means continuous until stopped.
  #[getset(get_copy = "pub")]
  duration_sec: u32,
  #[getset(get_copy = "pub")]
  loop_timing: Option<LoopTiming>,
  #[getset(get = "pub")]
  toy: ToySelector,
}

impl MotorIntent {
  pub fn new(intensity: u32, duration_sec: u32) -> Self {
    Self {
      intensity,
      duration_sec,
      loop_timing: None,
      toy: ToySelector::All,
    }
  }

  pub fn with_loop(mut self, loop_timing: LoopTiming) -> Self {
    self.loop_timing = Some(loop_timing);
    self
  }

  pub fn with_toy(mut self, toy: ToySelector) -> Self {
    self.toy = toy;
    self
  }
}

/// Caller-specified level sequence played back at a fixed interval across one
/// or more motors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, CopyGetters)]
pub struct PatternIntent {
  #[getset(get = "pub")]
  levels: Vec<u32>,
  #[getset(get_copy = "pub")]
  interval_ms: u32,
  #[getset(get_copy = "pub")]
  duration_sec: u32,
  #[getset(get_copy = "pub")]
  features: MotorSet,
  #[getset(get = "pub")]
  toy: ToySelector,
}

impl PatternIntent {
  pub fn new(levels: &[u32], interval_ms: u32, duration_sec: u32, features: MotorSet) -> Self {
    Self {
      levels: levels.to_vec(),
      interval_ms,
      duration_sec,
      features,
      toy: ToySelector::All,
    }
  }

  pub fn with_toy(mut self, toy: ToySelector) -> Self {
    self.toy = toy;
    self
  }
}

/// The four vendor-authored fixed patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum PresetName {
  Pulse,
  Wave,
  Fireworks,
  Earthquake,
}

impl PresetName {
  /// Parses a vendor preset name, failing with the validation error the
  /// encoder contract requires for unknown names.
  pub fn parse(name: &str) -> Result<Self, ValidationError> {
    Self::from_str(name).map_err(|_| ValidationError::UnknownPreset(name.to_owned()))
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, CopyGetters)]
pub struct PresetIntent {
  #[getset(get_copy = "pub")]
  name: PresetName,
  #[getset(get_copy = "pub")]
  duration_sec: u32,
  #[getset(get = "pub")]
  toy: ToySelector,
}

impl PresetIntent {
  pub fn new(name: PresetName, duration_sec: u32) -> Self {
    Self {
      name,
      duration_sec,
      toy: ToySelector::All,
    }
  }

  pub fn with_toy(mut self, toy: ToySelector) -> Self {
    self.toy = toy;
    self
  }
}

/// Simultaneous multi-motor command. At least one intensity must be nonzero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, CopyGetters)]
pub struct MultiFunctionIntent {
  #[getset(get_copy = "pub")]
  vibrate: u32,
  #[getset(get_copy = "pub")]
  rotate: u32,
  #[getset(get_copy = "pub")]
  pump: u32,
  #[getset(get_copy = "pub")]
  duration_sec: u32,
  #[getset(get_copy = "pub")]
  loop_timing: Option<LoopTiming>,
  #[getset(get = "pub")]
  toy: ToySelector,
}

impl MultiFunctionIntent {
  pub fn new(vibrate: u32, rotate: u32, pump: u32, duration_sec: u32) -> Self {
    Self {
      vibrate,
      rotate,
      pump,
      duration_sec,
      loop_timing: None,
      toy: ToySelector::All,
    }
  }

  pub fn with_loop(mut self, loop_timing: LoopTiming) -> Self {
    self.loop_timing = Some(loop_timing);
    self
  }

  pub fn with_toy(mut self, toy: ToySelector) -> Self {
    self.toy = toy;
    self
  }
}

/// Stop everything. Always valid and always allowed by policy; this is the
/// safety valve.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct StopIntent {
  #[getset(get = "pub")]
  toy: ToySelector,
}

impl StopIntent {
  pub fn new(toy: ToySelector) -> Self {
    Self { toy }
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Intent {
  Vibrate(MotorIntent),
  Rotate(MotorIntent),
  Pump(MotorIntent),
  Pattern(PatternIntent),
  Preset(PresetIntent),
  MultiFunction(MultiFunctionIntent),
  StopAll(StopIntent),
}

impl Intent {
  /// Effective peak intensity across any intensity fields the intent carries.
  /// Presets and stops carry none and resolve to 0.
  pub fn peak_intensity(&self) -> u32 {
    match self {
      Intent::Vibrate(m) | Intent::Rotate(m) | Intent::Pump(m) => m.intensity(),
      Intent::Pattern(p) => p.levels().iter().copied().max().unwrap_or(0),
      Intent::MultiFunction(m) => m.vibrate().max(m.rotate()).max(m.pump()),
      Intent::Preset(_) | Intent::StopAll(_) => 0,
    }
  }

  /// Total running time in seconds; 0 means continuous/unbounded.
  pub fn duration_sec(&self) -> u32 {
    match self {
      Intent::Vibrate(m) | Intent::Rotate(m) | Intent::Pump(m) => m.duration_sec(),
      Intent::Pattern(p) => p.duration_sec(),
      Intent::Preset(p) => p.duration_sec(),
      Intent::MultiFunction(m) => m.duration_sec(),
      Intent::StopAll(_) => 0,
    }
  }

  pub fn toy(&self) -> &ToySelector {
    match self {
      Intent::Vibrate(m) | Intent::Rotate(m) | Intent::Pump(m) => m.toy(),
      Intent::Pattern(p) => p.toy(),
      Intent::Preset(p) => p.toy(),
      Intent::MultiFunction(m) => m.toy(),
      Intent::StopAll(s) => s.toy(),
    }
  }

  pub fn is_stop(&self) -> bool {
    matches!(self, Intent::StopAll(_))
  }

  /// One-line human-readable form for audit records.
  pub fn summary(&self) -> String {
    match self {
      Intent::Vibrate(m) => format!("Vibrate {} for {}s", m.intensity(), m.duration_sec()),
      Intent::Rotate(m) => format!("Rotate {} for {}s", m.intensity(), m.duration_sec()),
      Intent::Pump(m) => format!("Pump {} for {}s", m.intensity(), m.duration_sec()),
      Intent::Pattern(p) => format!(
        "Pattern of {} levels at {}ms on {}",
        p.levels().len(),
        p.interval_ms(),
        feature_string(p.features())
      ),
      Intent::Preset(p) => format!("Preset {} for {}s", p.name(), p.duration_sec()),
      Intent::MultiFunction(m) => format!(
        "MultiFunction v{}/r{}/p{} for {}s",
        m.vibrate(),
        m.rotate(),
        m.pump(),
        m.duration_sec()
      ),
      Intent::StopAll(_) => "StopAll".to_owned(),
    }
  }
}

#[cfg(test)]
mod test {
  use super::*;

  #[test]
  fn test_preset_parse() {
    assert_eq!(PresetName::parse("wave").unwrap(), PresetName::Wave);
    assert_eq!(PresetName::parse("Pulse").unwrap(), PresetName::Pulse);
    assert!(matches!(
      PresetName::parse("heartbeat"),
      Err(ValidationError::UnknownPreset(_))
    ));
    assert_eq!(PresetName::Earthquake.to_string(), "earthquake");
  }

  #[test]
  fn test_feature_string_order() {
    assert_eq!(feature_string(Motor::Vibrate.into()), "v");
    assert_eq!(feature_string(Motor::Pump | Motor::Vibrate), "vp");
    assert_eq!(
      feature_string(Motor::Pump | Motor::Rotate | Motor::Vibrate),
      "vrp"
    );
  }

  #[test]
  fn test_peak_intensity_resolution() {
    assert_eq!(Intent::Vibrate(MotorIntent::new(12, 10)).peak_intensity(), 12);
    assert_eq!(
      Intent::Pattern(PatternIntent::new(&[5, 18, 3], 200, 0, Motor::Vibrate.into()))
        .peak_intensity(),
      18
    );
    assert_eq!(
      Intent::MultiFunction(MultiFunctionIntent::new(4, 9, 2, 0)).peak_intensity(),
      9
    );
    assert_eq!(
      Intent::Preset(PresetIntent::new(PresetName::Wave, 20)).peak_intensity(),
      0
    );
    assert_eq!(Intent::StopAll(StopIntent::default()).peak_intensity(), 0);
  }
}
