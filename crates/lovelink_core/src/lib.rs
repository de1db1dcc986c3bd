// Lovelink Rust Source Code File - See repository README for more info.
//
// Copyright 2026 Lovelink Project Developers. All rights reserved.
//
// Licensed under the BSD 3-Clause license. See LICENSE file in the project root
// for full license information.

//! Core decision logic for consent-gated Lovense toy control.
//!
//! This crate contains the two pieces every caller has to get exactly right:
//! the [policy gate](policy::evaluate), which decides whether a command may be
//! attempted at all, and the [command encoder](encoder::encode), which turns a
//! validated [Intent](intent::Intent) into the vendor's wire-level JSON body.
//! Both are pure functions of their inputs; persistence, wall clocks and HTTP
//! live in the crates layered on top of this one.

#[macro_use]
extern crate log;

pub mod encoder;
pub mod errors;
pub mod intent;
pub mod policy;
pub mod transport;
pub mod util;
pub mod wire;

pub use encoder::encode;
pub use errors::{LovelinkError, LovelinkResult, PolicyDenial, TransportError, ValidationError};
pub use intent::{
  Intent,
  LoopTiming,
  Motor,
  MotorIntent,
  MotorSet,
  MultiFunctionIntent,
  PatternIntent,
  PresetIntent,
  PresetName,
  StopIntent,
  ToySelector,
};
pub use policy::{
  CommandOrigin,
  ConsentSettings,
  ConsentSettingsBuilder,
  GateDecision,
  GateTime,
  QuietHours,
  evaluate,
};
pub use transport::{CommandTransport, ToyStatus};
pub use util::time_of_day::TimeOfDay;
pub use wire::{WireCommand, WireCommandKind};
