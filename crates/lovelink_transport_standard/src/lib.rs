// Lovelink Rust Source Code File - See repository README for more info.
//
// Copyright 2026 Lovelink Project Developers. All rights reserved.
//
// Licensed under the BSD 3-Clause license. See LICENSE file in the project root
// for full license information.

//! Standard API transport: the vendor's cloud control path. Requires a
//! developer token; the user pairs by scanning a QR code with the Remote app,
//! which then POSTs a callback describing its reachable ports and toys.

#[macro_use]
extern crate log;

mod callback;
mod standard_api;

pub use callback::{CallbackPayload, CallbackSession, CallbackToyInfo};
pub use standard_api::{StandardApiConfig, StandardApiTransport};
