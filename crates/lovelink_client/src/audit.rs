// Lovelink Rust Source Code File - See repository README for more info.
//
// Copyright 2026 Lovelink Project Developers. All rights reserved.
//
// Licensed under the BSD 3-Clause license. See LICENSE file in the project root
// for full license information.

//! Interaction audit trail. One record per gate decision, append-only,
//! written whether the command was allowed, denied, rejected at validation,
//! or lost to the transport. The sink is an external collaborator in real
//! deployments.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use getset::{CopyGetters, Getters};
use lovelink_core::{
  errors::{PolicyDenial, TransportError, ValidationError},
  policy::CommandOrigin,
};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum InteractionOutcome {
  Allowed,
  Rejected(ValidationError),
  Denied(PolicyDenial),
  TransportFailed(TransportError),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, CopyGetters)]
pub struct InteractionRecord {
  #[getset(get_copy = "pub")]
  timestamp: DateTime<Utc>,
  #[getset(get = "pub")]
  uid: String,
  #[getset(get = "pub")]
  intent_summary: String,
  #[getset(get_copy = "pub")]
  origin: CommandOrigin,
  #[getset(get = "pub")]
  outcome: InteractionOutcome,
}

impl InteractionRecord {
  pub fn new(
    uid: &str,
    intent_summary: String,
    origin: CommandOrigin,
    outcome: InteractionOutcome,
  ) -> Self {
    Self {
      timestamp: Utc::now(),
      uid: uid.to_owned(),
      intent_summary,
      origin,
      outcome,
    }
  }
}

#[async_trait]
pub trait InteractionSink: Send + Sync {
  async fn record(&self, record: InteractionRecord);
}

#[derive(Default)]
pub struct InMemoryInteractionSink {
  records: RwLock<Vec<InteractionRecord>>,
}

impl InMemoryInteractionSink {
  pub fn new() -> Self {
    Self::default()
  }

  pub async fn records(&self) -> Vec<InteractionRecord> {
    self.records.read().await.clone()
  }
}

#[async_trait]
impl InteractionSink for InMemoryInteractionSink {
  async fn record(&self, record: InteractionRecord) {
    debug!(
      "Interaction for {}: {} -> {:?}",
      record.uid(),
      record.intent_summary(),
      record.outcome()
    );
    self.records.write().await.push(record);
  }
}

#[cfg(test)]
mod test {
  use super::*;

  #[tokio::test]
  async fn test_records_append_in_order() {
    let sink = InMemoryInteractionSink::new();
    sink
      .record(InteractionRecord::new(
        "user1",
        "Vibrate 5 for 2s".to_owned(),
        CommandOrigin::Direct,
        InteractionOutcome::Allowed,
      ))
      .await;
    sink
      .record(InteractionRecord::new(
        "user1",
        "Vibrate 19 for 2s".to_owned(),
        CommandOrigin::Autonomous,
        InteractionOutcome::Denied(PolicyDenial::IntensityExceedsLimit),
      ))
      .await;
    let records = sink.records().await;
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].outcome(), &InteractionOutcome::Allowed);
    assert_eq!(
      records[1].outcome(),
      &InteractionOutcome::Denied(PolicyDenial::IntensityExceedsLimit)
    );
  }
}
