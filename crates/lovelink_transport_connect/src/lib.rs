// Lovelink Rust Source Code File - See repository README for more info.
//
// Copyright 2026 Lovelink Project Developers. All rights reserved.
//
// Licensed under the BSD 3-Clause license. See LICENSE file in the project root
// for full license information.

//! Game Mode transport: talks to the local HTTP bridge the Lovense Remote /
//! Lovense Connect app exposes on the LAN when Game Mode is enabled.

#[macro_use]
extern crate log;

mod game_mode;

pub use game_mode::{GameModeHost, GameModeTransport};
