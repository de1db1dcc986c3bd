// Lovelink Rust Source Code File - See repository README for more info.
//
// Copyright 2026 Lovelink Project Developers. All rights reserved.
//
// Licensed under the BSD 3-Clause license. See LICENSE file in the project root
// for full license information.

mod util;

use lovelink_client::{
  Controller,
  InMemoryInteractionSink,
  InMemorySettingsStore,
  InteractionOutcome,
  SettingsStore,
  intent_for_mood,
  parse_mood,
};
use lovelink_core::{
  CommandOrigin,
  ConsentSettings,
  ConsentSettingsBuilder,
  Intent,
  LovelinkError,
  MotorIntent,
  PolicyDenial,
  PresetIntent,
  PresetName,
  ToySelector,
  TransportError,
  WireCommandKind,
};
use std::{
  sync::Arc,
  time::{Duration, SystemTime},
};
use util::{RecordingTransport, connected_toy};

struct Harness {
  transport: Arc<RecordingTransport>,
  settings: Arc<InMemorySettingsStore>,
  sink: Arc<InMemoryInteractionSink>,
  controller: Controller,
}

fn harness() -> Harness {
  let transport = RecordingTransport::new();
  let settings = Arc::new(InMemorySettingsStore::new());
  let sink = Arc::new(InMemoryInteractionSink::new());
  let controller = Controller::new(transport.clone(), settings.clone(), sink.clone());
  Harness {
    transport,
    settings,
    sink,
    controller,
  }
}

fn opted_in(max_intensity: u32) -> ConsentSettings {
  ConsentSettingsBuilder::default()
    .enabled(true)
    .autonomous_allowed(true)
    .max_intensity(max_intensity)
    .cooldown_minutes(15)
    .build()
    .unwrap()
}

#[tokio::test]
async fn test_intensity_over_limit_denied_and_audited() {
  let h = harness();
  h.settings.update("user1", opted_in(15)).await;
  let result = h
    .controller
    .issue(
      "user1",
      &Intent::Vibrate(MotorIntent::new(18, 10)),
      CommandOrigin::Autonomous,
    )
    .await;
  assert_eq!(
    result,
    Err(LovelinkError::Denied(PolicyDenial::IntensityExceedsLimit))
  );
  assert!(h.transport.sent().await.is_empty());
  let records = h.sink.records().await;
  assert_eq!(records.len(), 1);
  assert_eq!(
    records[0].outcome(),
    &InteractionOutcome::Denied(PolicyDenial::IntensityExceedsLimit)
  );
  assert_eq!(records[0].uid(), "user1");
}

#[tokio::test]
async fn test_preset_flows_through_to_wire() {
  let h = harness();
  h.settings.update("user1", opted_in(15)).await;
  h.controller
    .issue(
      "user1",
      &Intent::Preset(PresetIntent::new(PresetName::Wave, 20)),
      CommandOrigin::Direct,
    )
    .await
    .unwrap();
  let sent = h.transport.sent().await;
  assert_eq!(sent.len(), 1);
  assert_eq!(sent[0].command(), WireCommandKind::Preset);
  assert_eq!(sent[0].action(), &Some("wave".to_owned()));
  assert_eq!(sent[0].time_sec(), 20);
  assert_eq!(sent[0].api_ver(), 1);
}

#[tokio::test]
async fn test_cooldown_enforced_across_successive_autonomous_commands() {
  let h = harness();
  h.settings.update("user1", opted_in(20)).await;
  let intent = Intent::Vibrate(MotorIntent::new(5, 10));

  h.controller
    .issue("user1", &intent, CommandOrigin::Autonomous)
    .await
    .unwrap();
  assert_eq!(
    h.controller
      .issue("user1", &intent, CommandOrigin::Autonomous)
      .await,
    Err(LovelinkError::Denied(PolicyDenial::Cooldown))
  );

  // Direct commands ignore the cooldown entirely.
  h.controller
    .issue("user1", &intent, CommandOrigin::Direct)
    .await
    .unwrap();
  assert_eq!(h.transport.sent().await.len(), 2);
}

#[tokio::test]
async fn test_cooldown_clears_after_configured_interval() {
  let h = harness();
  h.settings.update("user1", opted_in(20)).await;
  // Seed a last-interaction timestamp 16 minutes back against a 15 minute
  // cooldown; the next autonomous command is clear to go.
  h.controller
    .restore_last_autonomous_at(Some(SystemTime::now() - Duration::from_secs(16 * 60)))
    .await;
  h.controller
    .issue(
      "user1",
      &Intent::Vibrate(MotorIntent::new(5, 10)),
      CommandOrigin::Autonomous,
    )
    .await
    .unwrap();
  assert_eq!(h.transport.sent().await.len(), 1);
}

#[tokio::test]
async fn test_transport_failure_keeps_cooldown_clear() {
  let h = harness();
  h.settings.update("user1", opted_in(20)).await;
  h.transport
    .script_failure(TransportError::NetworkError("bridge offline".to_owned()))
    .await;

  let intent = Intent::Vibrate(MotorIntent::new(5, 10));
  let result = h
    .controller
    .issue("user1", &intent, CommandOrigin::Autonomous)
    .await;
  assert!(matches!(result, Err(LovelinkError::Transport(_))));
  assert!(h.controller.last_autonomous_at().await.is_none());

  // The failed attempt must not count against the cooldown; the immediate
  // retry goes through.
  h.controller
    .issue("user1", &intent, CommandOrigin::Autonomous)
    .await
    .unwrap();

  let records = h.sink.records().await;
  assert_eq!(records.len(), 2);
  assert!(matches!(
    records[0].outcome(),
    InteractionOutcome::TransportFailed(_)
  ));
  assert_eq!(records[1].outcome(), &InteractionOutcome::Allowed);
}

#[tokio::test]
async fn test_stop_all_allowed_for_user_without_settings() {
  let h = harness();
  h.controller
    .stop_all("stranger", ToySelector::All)
    .await
    .unwrap();
  let sent = h.transport.sent().await;
  assert_eq!(sent.len(), 1);
  assert_eq!(sent[0].command(), WireCommandKind::Function);
  assert_eq!(sent[0].action(), &Some("Stop".to_owned()));
  assert_eq!(sent[0].time_sec(), 0);
}

#[tokio::test]
async fn test_mood_tag_drives_a_command() {
  let h = harness();
  h.settings.update("user1", opted_in(20)).await;
  let intent = intent_for_mood(parse_mood("teasing"), 30, ToySelector::All);
  h.controller
    .issue("user1", &intent, CommandOrigin::Autonomous)
    .await
    .unwrap();
  let sent = h.transport.sent().await;
  assert_eq!(sent.len(), 1);
  assert_eq!(sent[0].command(), WireCommandKind::Pattern);
  assert_eq!(sent[0].strength(), &Some("10;2;12;2;14;2".to_owned()));
}

#[tokio::test]
async fn test_toy_status_passthrough() {
  let h = harness();
  h.transport
    .set_toys(vec![connected_toy("abc123", "nora")])
    .await;
  let toys = h.controller.toys().await.unwrap();
  assert_eq!(toys.len(), 1);
  assert_eq!(toys[0].id(), "abc123");
  assert!(toys[0].connected());
}
