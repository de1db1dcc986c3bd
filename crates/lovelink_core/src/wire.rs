// Lovelink Rust Source Code File - See repository README for more info.
//
// Copyright 2026 Lovelink Project Developers. All rights reserved.
//
// Licensed under the BSD 3-Clause license. See LICENSE file in the project root
// for full license information.

//! Wire-level command body. Serializing a [WireCommand] with serde_json
//! yields exactly the JSON the vendor's `/command` endpoints accept, Game
//! Mode and Standard API alike; the transports only add their own envelope
//! fields (token/uid) around it.

use crate::errors::ValidationError;
use getset::{CopyGetters, Getters};
use serde::{Deserialize, Serialize};
use strum_macros::Display;

/// Top-level vendor command discriminator.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WireCommandKind {
  Function,
  Pattern,
  Preset,
}

/// Flat structure mirroring the vendor's JSON command body. Field names on
/// the wire are the vendor's, via serde renames. Constructed only by
/// [crate::encoder::encode]; a `WireCommand` in hand is always complete and
/// valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, CopyGetters)]
pub struct WireCommand {
  #[getset(get_copy = "pub")]
  #[serde(rename = "command")]
  command: WireCommandKind,
  /// Function strings (`Vibrate:10`, `Stop`) or the preset name.
  #[getset(get = "pub")]
  #[serde(rename = "action", skip_serializing_if = "Option::is_none")]
  action: Option<String>,
  /// Pattern playback rule, e.g. `V:1;F:v;S:500#`.
  #[getset(get = "pub")]
  #[serde(rename = "rule", skip_serializing_if = "Option::is_none")]
  rule: Option<String>,
  /// Semicolon-joined pattern levels, e.g. `5;10;15`.
  #[getset(get = "pub")]
  #[serde(rename = "strength", skip_serializing_if = "Option::is_none")]
  strength: Option<String>,
  #[getset(get_copy = "pub")]
  #[serde(rename = "timeSec")]
  time_sec: u32,
  #[getset(get_copy = "pub")]
  #[serde(rename = "loopRunningSec", skip_serializing_if = "Option::is_none")]
  loop_running_sec: Option<u32>,
  #[getset(get_copy = "pub")]
  #[serde(rename = "loopPauseSec", skip_serializing_if = "Option::is_none")]
  loop_pause_sec: Option<u32>,
  #[getset(get = "pub")]
  #[serde(rename = "toy", skip_serializing_if = "Option::is_none")]
  toy: Option<String>,
  #[getset(get_copy = "pub")]
  #[serde(rename = "apiVer")]
  api_ver: u8,
}

impl WireCommand {
  pub(crate) fn function(
    action: String,
    time_sec: u32,
    loop_running_sec: Option<u32>,
    loop_pause_sec: Option<u32>,
    toy: Option<String>,
  ) -> Self {
    Self {
      command: WireCommandKind::Function,
      action: Some(action),
      rule: None,
      strength: None,
      time_sec,
      loop_running_sec,
      loop_pause_sec,
      toy,
      api_ver: 1,
    }
  }

  pub(crate) fn pattern(rule: String, strength: String, time_sec: u32, toy: Option<String>) -> Self {
    Self {
      command: WireCommandKind::Pattern,
      action: None,
      rule: Some(rule),
      strength: Some(strength),
      time_sec,
      loop_running_sec: None,
      loop_pause_sec: None,
      toy,
      // Pattern commands are only defined from protocol version 2 up.
      api_ver: 2,
    }
  }

  pub(crate) fn preset(name: String, time_sec: u32, toy: Option<String>) -> Self {
    Self {
      command: WireCommandKind::Preset,
      action: Some(name),
      rule: None,
      strength: None,
      time_sec,
      loop_running_sec: None,
      loop_pause_sec: None,
      toy,
      api_ver: 1,
    }
  }

  /// Joins pattern levels into the vendor's `strength` string form.
  pub fn join_strength(levels: &[u32]) -> String {
    levels
      .iter()
      .map(|l| l.to_string())
      .collect::<Vec<_>>()
      .join(";")
  }

  /// Inverse of [WireCommand::join_strength]. The encode/parse pair must be
  /// lossless for every valid level sequence.
  pub fn parse_strength(strength: &str) -> Result<Vec<u32>, ValidationError> {
    strength
      .split(';')
      .map(|part| {
        part
          .parse::<u32>()
          .map_err(|_| ValidationError::InvalidStrengthString(strength.to_owned()))
      })
      .collect()
  }
}
