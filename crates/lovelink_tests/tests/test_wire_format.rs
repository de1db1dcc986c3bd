// Lovelink Rust Source Code File - See repository README for more info.
//
// Copyright 2026 Lovelink Project Developers. All rights reserved.
//
// Licensed under the BSD 3-Clause license. See LICENSE file in the project root
// for full license information.

//! Vendor wire format checks from the intent level down to JSON bytes. The
//! expected bodies here match the vendor's documented `/command` payloads; if
//! one of these fails, real hardware stops responding, so keep them literal.

use lovelink_core::{
  Intent,
  LoopTiming,
  Motor,
  MotorIntent,
  MultiFunctionIntent,
  PatternIntent,
  PresetIntent,
  PresetName,
  StopIntent,
  ToySelector,
  encode,
};
use serde_json::json;
use test_case::test_case;

fn encode_to_json(intent: &Intent) -> serde_json::Value {
  serde_json::to_value(encode(intent).unwrap()).unwrap()
}

#[test_case(Intent::Vibrate(MotorIntent::new(10, 20)), "Vibrate:10")]
#[test_case(Intent::Rotate(MotorIntent::new(6, 20)), "Rotate:6")]
#[test_case(Intent::Pump(MotorIntent::new(2, 20)), "Pump:2")]
fn test_motor_action_verbs(intent: Intent, action: &str) {
  assert_eq!(encode_to_json(&intent)["action"], json!(action));
}

#[test]
fn test_vibrate_body() {
  assert_eq!(
    encode_to_json(&Intent::Vibrate(MotorIntent::new(10, 20))),
    json!({
      "command": "Function",
      "action": "Vibrate:10",
      "timeSec": 20,
      "apiVer": 1
    })
  );
}

#[test]
fn test_looped_vibrate_body() {
  assert_eq!(
    encode_to_json(&Intent::Vibrate(
      MotorIntent::new(16, 20).with_loop(LoopTiming::new(9, 4))
    )),
    json!({
      "command": "Function",
      "action": "Vibrate:16",
      "timeSec": 20,
      "loopRunningSec": 9,
      "loopPauseSec": 4,
      "apiVer": 1
    })
  );
}

#[test]
fn test_targeted_multi_function_body() {
  assert_eq!(
    encode_to_json(&Intent::MultiFunction(
      MultiFunctionIntent::new(12, 6, 0, 30).with_toy(ToySelector::single("ff001122"))
    )),
    json!({
      "command": "Function",
      "action": "Vibrate:12,Rotate:6",
      "timeSec": 30,
      "toy": "ff001122",
      "apiVer": 1
    })
  );
}

#[test]
fn test_pattern_body() {
  assert_eq!(
    encode_to_json(&Intent::Pattern(PatternIntent::new(
      &[20, 10, 5, 0],
      500,
      180,
      Motor::Vibrate.into()
    ))),
    json!({
      "command": "Pattern",
      "rule": "V:1;F:v;S:500#",
      "strength": "20;10;5;0",
      "timeSec": 180,
      "apiVer": 2
    })
  );
}

#[test]
fn test_preset_body() {
  assert_eq!(
    encode_to_json(&Intent::Preset(PresetIntent::new(PresetName::Pulse, 60))),
    json!({
      "command": "Preset",
      "action": "pulse",
      "timeSec": 60,
      "apiVer": 1
    })
  );
}

#[test]
fn test_stop_body() {
  assert_eq!(
    encode_to_json(&Intent::StopAll(StopIntent::default())),
    json!({
      "command": "Function",
      "action": "Stop",
      "timeSec": 0,
      "apiVer": 1
    })
  );
}
