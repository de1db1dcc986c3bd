// Lovelink Rust Source Code File - See repository README for more info.
//
// Copyright 2026 Lovelink Project Developers. All rights reserved.
//
// Licensed under the BSD 3-Clause license. See LICENSE file in the project root
// for full license information.

//! Orchestration layer. The [Controller] wires the pure core (gate +
//! encoder) to a transport, a settings store and an audit sink, and owns the
//! one piece of mutable state in the system: the last-autonomous-command
//! timestamp that backs the cooldown check.

#[macro_use]
extern crate log;

mod audit;
mod controller;
mod mood;
mod settings;

pub use audit::{InMemoryInteractionSink, InteractionOutcome, InteractionRecord, InteractionSink};
pub use controller::Controller;
pub use mood::{MoodTag, intent_for_mood, parse_mood};
pub use settings::{InMemorySettingsStore, SettingsStore};
