// Lovelink Rust Source Code File - See repository README for more info.
//
// Copyright 2026 Lovelink Project Developers. All rights reserved.
//
// Licensed under the BSD 3-Clause license. See LICENSE file in the project root
// for full license information.

//! Intent to wire-command translation. Encoding either produces a complete,
//! valid [WireCommand] or fails with a specific [ValidationError]; there is
//! no partial output and nothing is clamped silently.

use crate::{
  errors::ValidationError,
  intent::{
    Intent,
    LoopTiming,
    Motor,
    MotorIntent,
    MotorSet,
    MultiFunctionIntent,
    PatternIntent,
    feature_string,
  },
  wire::WireCommand,
};

pub const PATTERN_MAX_LEVELS: usize = 50;
pub const PATTERN_MIN_INTERVAL_MS: u32 = 100;

fn check_intensity(motor: Motor, value: u32) -> Result<u32, ValidationError> {
  let max = motor.max_intensity();
  if value > max {
    Err(ValidationError::IntensityOutOfRange(motor, value, max))
  } else {
    Ok(value)
  }
}

/// Loop timing only applies to bounded runs. A continuous command (duration
/// 0) runs until stopped, so cycling has nothing to count against and the
/// loop fields are dropped rather than rejected.
fn check_loop(
  loop_timing: Option<LoopTiming>,
  duration_sec: u32,
) -> Result<(Option<u32>, Option<u32>), ValidationError> {
  match loop_timing {
    Some(_) if duration_sec == 0 => Ok((None, None)),
    Some(timing) => {
      if timing.running_sec() == 0 || timing.pause_sec() == 0 {
        Err(ValidationError::InvalidLoopTiming)
      } else {
        Ok((Some(timing.running_sec()), Some(timing.pause_sec())))
      }
    }
    None => Ok((None, None)),
  }
}

fn encode_motor(motor: Motor, intent: &MotorIntent) -> Result<WireCommand, ValidationError> {
  check_intensity(motor, intent.intensity())?;
  let (loop_running, loop_pause) = check_loop(intent.loop_timing(), intent.duration_sec())?;
  Ok(WireCommand::function(
    format!("{}:{}", motor.action_verb(), intent.intensity()),
    intent.duration_sec(),
    loop_running,
    loop_pause,
    intent.toy().as_wire_id(),
  ))
}

fn encode_pattern(intent: &PatternIntent) -> Result<WireCommand, ValidationError> {
  let features = intent.features();
  if features.is_empty() {
    return Err(ValidationError::EmptyFeatureSet);
  }
  if intent.levels().is_empty() {
    return Err(ValidationError::EmptyPattern);
  }
  if intent.levels().len() > PATTERN_MAX_LEVELS {
    return Err(ValidationError::PatternTooLong(
      intent.levels().len(),
      PATTERN_MAX_LEVELS,
    ));
  }
  if intent.interval_ms() < PATTERN_MIN_INTERVAL_MS {
    return Err(ValidationError::IntervalTooShort(
      intent.interval_ms(),
      PATTERN_MIN_INTERVAL_MS,
    ));
  }
  // A sequence that only drives the pump is bounded by the pump range;
  // anything driving a vibrate/rotate character gets the full 0-20.
  let level_max = if features == MotorSet::from(Motor::Pump) {
    Motor::Pump.max_intensity()
  } else {
    Motor::Vibrate.max_intensity()
  };
  for level in intent.levels() {
    if *level > level_max {
      return Err(ValidationError::PatternLevelOutOfRange(
        *level,
        level_max,
        feature_string(features),
      ));
    }
  }
  let rule = format!(
    "V:1;F:{};S:{}#",
    feature_string(features),
    intent.interval_ms()
  );
  Ok(WireCommand::pattern(
    rule,
    WireCommand::join_strength(intent.levels()),
    intent.duration_sec(),
    intent.toy().as_wire_id(),
  ))
}

fn encode_multi_function(intent: &MultiFunctionIntent) -> Result<WireCommand, ValidationError> {
  if intent.vibrate() == 0 && intent.rotate() == 0 && intent.pump() == 0 {
    return Err(ValidationError::NoActiveFunction);
  }
  let mut parts = Vec::new();
  for (motor, value) in [
    (Motor::Vibrate, intent.vibrate()),
    (Motor::Rotate, intent.rotate()),
    (Motor::Pump, intent.pump()),
  ] {
    check_intensity(motor, value)?;
    if value > 0 {
      parts.push(format!("{}:{}", motor.action_verb(), value));
    }
  }
  let (loop_running, loop_pause) = check_loop(intent.loop_timing(), intent.duration_sec())?;
  Ok(WireCommand::function(
    parts.join(","),
    intent.duration_sec(),
    loop_running,
    loop_pause,
    intent.toy().as_wire_id(),
  ))
}

/// Translates a high-level intent into the vendor's wire command body.
pub fn encode(intent: &Intent) -> Result<WireCommand, ValidationError> {
  let command = match intent {
    Intent::Vibrate(m) => encode_motor(Motor::Vibrate, m)?,
    Intent::Rotate(m) => encode_motor(Motor::Rotate, m)?,
    Intent::Pump(m) => encode_motor(Motor::Pump, m)?,
    Intent::Pattern(p) => encode_pattern(p)?,
    Intent::Preset(p) => WireCommand::preset(
      p.name().to_string(),
      p.duration_sec(),
      p.toy().as_wire_id(),
    ),
    Intent::MultiFunction(m) => encode_multi_function(m)?,
    Intent::StopAll(s) => WireCommand::function("Stop".to_owned(), 0, None, None, s.toy().as_wire_id()),
  };
  trace!("Encoded {} as {:?}", intent.summary(), command);
  Ok(command)
}
