// Lovelink Rust Source Code File - See repository README for more info.
//
// Copyright 2026 Lovelink Project Developers. All rights reserved.
//
// Licensed under the BSD 3-Clause license. See LICENSE file in the project root
// for full license information.

use async_trait::async_trait;
use lovelink_core::{
  errors::TransportError,
  intent::Motor,
  transport::{CommandTransport, ToyStatus},
  wire::WireCommand,
};
use std::sync::Arc;
use tokio::sync::Mutex;

/// Transport double that records every command body it receives and replays
/// scripted failures, oldest first. With no scripted outcome queued, a send
/// succeeds.
#[derive(Default)]
pub struct RecordingTransport {
  sent: Mutex<Vec<WireCommand>>,
  scripted_failures: Mutex<Vec<TransportError>>,
  toys: Mutex<Vec<ToyStatus>>,
}

impl RecordingTransport {
  pub fn new() -> Arc<Self> {
    Arc::new(Self::default())
  }

  pub async fn sent(&self) -> Vec<WireCommand> {
    self.sent.lock().await.clone()
  }

  pub async fn script_failure(&self, error: TransportError) {
    self.scripted_failures.lock().await.push(error);
  }

  pub async fn set_toys(&self, toys: Vec<ToyStatus>) {
    *self.toys.lock().await = toys;
  }
}

#[async_trait]
impl CommandTransport for RecordingTransport {
  fn name(&self) -> &'static str {
    "recording"
  }

  async fn send_command(&self, command: &WireCommand) -> Result<(), TransportError> {
    let mut scripted = self.scripted_failures.lock().await;
    if !scripted.is_empty() {
      return Err(scripted.remove(0));
    }
    drop(scripted);
    self.sent.lock().await.push(command.clone());
    Ok(())
  }

  async fn toy_status(&self) -> Result<Vec<ToyStatus>, TransportError> {
    Ok(self.toys.lock().await.clone())
  }
}

pub fn connected_toy(id: &str, name: &str) -> ToyStatus {
  ToyStatus::new(id, name, true, 80, Motor::Vibrate.into())
}
