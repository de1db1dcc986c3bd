// Lovelink Rust Source Code File - See repository README for more info.
//
// Copyright 2026 Lovelink Project Developers. All rights reserved.
//
// Licensed under the BSD 3-Clause license. See LICENSE file in the project root
// for full license information.

use crate::{
  audit::{InteractionOutcome, InteractionRecord, InteractionSink},
  settings::SettingsStore,
};
use chrono::{Local, Timelike};
use lovelink_core::{
  encode,
  errors::{LovelinkResult, TransportError},
  evaluate,
  intent::{Intent, StopIntent, ToySelector},
  policy::{CommandOrigin, ConsentSettings, GateDecision, GateTime},
  transport::{CommandTransport, ToyStatus},
  util::time_of_day::TimeOfDay,
};
use std::{sync::Arc, time::SystemTime};
use tokio::sync::Mutex;

fn gate_time_now() -> GateTime {
  let local = Local::now();
  let time_of_day =
    TimeOfDay::from_minutes_of_day((local.hour() * 60 + local.minute()) as u16);
  GateTime::new(time_of_day, SystemTime::now())
}

/// Runs the gate, encoder, transport and audit sink in sequence for each
/// issued intent.
///
/// Owns the last-autonomous-command timestamp. The timestamp is read under a
/// lock held across the transport call, so two autonomous commands can never
/// both pass the cooldown check against a stale value, and it only advances
/// when the transport reports success.
pub struct Controller {
  transport: Arc<dyn CommandTransport>,
  settings: Arc<dyn SettingsStore>,
  sink: Arc<dyn InteractionSink>,
  last_autonomous: Mutex<Option<SystemTime>>,
}

impl Controller {
  pub fn new(
    transport: Arc<dyn CommandTransport>,
    settings: Arc<dyn SettingsStore>,
    sink: Arc<dyn InteractionSink>,
  ) -> Self {
    Self {
      transport,
      settings,
      sink,
      last_autonomous: Mutex::new(None),
    }
  }

  /// Issues one intent on behalf of `uid`. Every call produces exactly one
  /// audit record; denials and validation failures return synchronously with
  /// their reason and nothing is sent.
  pub async fn issue(
    &self,
    uid: &str,
    intent: &Intent,
    origin: CommandOrigin,
  ) -> LovelinkResult<()> {
    // A user with no stored record has not consented to anything.
    let settings = self
      .settings
      .get(uid)
      .await
      .unwrap_or_else(ConsentSettings::default);
    let now = gate_time_now();

    let mut last_autonomous = self.last_autonomous.lock().await;

    if let GateDecision::Denied(reason) =
      evaluate(intent, &settings, now, *last_autonomous, origin)
    {
      info!("Denied {} for {}: {}", intent.summary(), uid, reason);
      self
        .sink
        .record(InteractionRecord::new(
          uid,
          intent.summary(),
          origin,
          InteractionOutcome::Denied(reason),
        ))
        .await;
      return Err(reason.into());
    }

    let command = match encode(intent) {
      Ok(command) => command,
      Err(validation_error) => {
        info!(
          "Rejected {} for {}: {}",
          intent.summary(),
          uid,
          validation_error
        );
        self
          .sink
          .record(InteractionRecord::new(
            uid,
            intent.summary(),
            origin,
            InteractionOutcome::Rejected(validation_error.clone()),
          ))
          .await;
        return Err(validation_error.into());
      }
    };

    match self.transport.send_command(&command).await {
      Ok(()) => {
        if origin.is_autonomous() {
          *last_autonomous = Some(now.timestamp());
        }
        drop(last_autonomous);
        self
          .sink
          .record(InteractionRecord::new(
            uid,
            intent.summary(),
            origin,
            InteractionOutcome::Allowed,
          ))
          .await;
        Ok(())
      }
      Err(transport_error) => {
        drop(last_autonomous);
        error!(
          "Transport {} failed for {}: {}",
          self.transport.name(),
          uid,
          transport_error
        );
        self
          .sink
          .record(InteractionRecord::new(
            uid,
            intent.summary(),
            origin,
            InteractionOutcome::TransportFailed(transport_error.clone()),
          ))
          .await;
        Err(transport_error.into())
      }
    }
  }

  /// The safety valve. Routed through [Controller::issue] like everything
  /// else, but a stop is always allowed by the gate and always valid at
  /// encode, so the only way it fails is the transport itself.
  pub async fn stop_all(&self, uid: &str, toy: ToySelector) -> LovelinkResult<()> {
    self
      .issue(uid, &Intent::StopAll(StopIntent::new(toy)), CommandOrigin::Direct)
      .await
  }

  pub async fn toys(&self) -> Result<Vec<ToyStatus>, TransportError> {
    self.transport.toy_status().await
  }

  /// Last timestamp an autonomous command was successfully sent, for callers
  /// that persist it across restarts.
  pub async fn last_autonomous_at(&self) -> Option<SystemTime> {
    *self.last_autonomous.lock().await
  }

  /// Seeds the cooldown timestamp, e.g. from persisted state at startup.
  pub async fn restore_last_autonomous_at(&self, timestamp: Option<SystemTime>) {
    *self.last_autonomous.lock().await = timestamp;
  }
}
