// Lovelink Rust Source Code File - See repository README for more info.
//
// Copyright 2026 Lovelink Project Developers. All rights reserved.
//
// Licensed under the BSD 3-Clause license. See LICENSE file in the project root
// for full license information.

//! Transport seam. The core produces a ready-to-send [WireCommand] before any
//! I/O happens; a [CommandTransport] implementation (Game Mode bridge or
//! Standard API) performs the actual HTTP call and reports back. The two
//! deployments are interchangeable behind this trait; the deployer picks one.

use crate::{errors::TransportError, intent::MotorSet, wire::WireCommand};
use async_trait::async_trait;
use getset::{CopyGetters, Getters};
use serde::{Deserialize, Serialize};

/// Point-in-time toy state as reported by the vendor endpoint. Queried on
/// demand and never cached by the core.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, CopyGetters)]
pub struct ToyStatus {
  #[getset(get = "pub")]
  id: String,
  #[getset(get = "pub")]
  display_name: String,
  #[getset(get_copy = "pub")]
  connected: bool,
  #[getset(get_copy = "pub")]
  battery_percent: u8,
  #[getset(get_copy = "pub")]
  capabilities: MotorSet,
}

impl ToyStatus {
  pub fn new(
    id: &str,
    display_name: &str,
    connected: bool,
    battery_percent: u8,
    capabilities: MotorSet,
  ) -> Self {
    Self {
      id: id.to_owned(),
      display_name: display_name.to_owned(),
      connected,
      battery_percent: battery_percent.min(100),
      capabilities,
    }
  }
}

#[async_trait]
pub trait CommandTransport: Send + Sync {
  fn name(&self) -> &'static str;

  /// Sends one encoded command. `Ok(())` is the signal the caller uses to
  /// advance the autonomous cooldown timestamp; implementations must not
  /// report success for anything the vendor rejected.
  async fn send_command(&self, command: &WireCommand) -> Result<(), TransportError>;

  async fn toy_status(&self) -> Result<Vec<ToyStatus>, TransportError>;
}
