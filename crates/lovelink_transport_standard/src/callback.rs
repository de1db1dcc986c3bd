// Lovelink Rust Source Code File - See repository README for more info.
//
// Copyright 2026 Lovelink Project Developers. All rights reserved.
//
// Licensed under the BSD 3-Clause license. See LICENSE file in the project root
// for full license information.

//! Pairing callback payloads. After a QR scan the Remote app POSTs one of
//! these to the configured callback URL; it is the only place the Standard
//! API reports toy inventory, so sessions retain it for status queries.

use lovelink_core::{
  intent::{Motor, MotorSet},
  transport::ToyStatus,
};
use serde::{Deserialize, Deserializer};
use serde_aux::prelude::*;
use std::collections::HashMap;

#[derive(Deserialize, Debug, Clone)]
pub struct CallbackToyInfo {
  #[serde(default)]
  pub id: String,
  pub name: String,
  #[serde(rename = "nickName", default)]
  pub nickname: String,
  #[serde(
    rename = "status",
    default,
    deserialize_with = "deserialize_bool_from_anything"
  )]
  pub connected: bool,
  #[serde(default, deserialize_with = "parse_battery")]
  pub battery: i8,
}

fn parse_battery<'de, D>(d: D) -> Result<i8, D::Error>
where
  D: Deserializer<'de>,
{
  Deserialize::deserialize(d).map(|b: Option<_>| b.unwrap_or(0))
}

// Older Remote app versions send `toys` as a JSON string rather than an
// object, so accept either form.
fn toys_from_string_or_map<'de, D>(d: D) -> Result<HashMap<String, CallbackToyInfo>, D::Error>
where
  D: Deserializer<'de>,
{
  #[derive(Deserialize)]
  #[serde(untagged)]
  enum StringOrMap {
    Text(String),
    Map(HashMap<String, CallbackToyInfo>),
  }

  match StringOrMap::deserialize(d)? {
    StringOrMap::Map(map) => Ok(map),
    StringOrMap::Text(text) => {
      serde_json::from_str(&text).map_err(serde::de::Error::custom)
    }
  }
}

/// Body the Remote app POSTs to the callback URL after a QR scan.
#[derive(Deserialize, Debug, Clone)]
pub struct CallbackPayload {
  pub uid: String,
  #[serde(default)]
  pub domain: String,
  #[serde(
    rename = "httpPort",
    default,
    deserialize_with = "deserialize_number_from_string"
  )]
  pub http_port: u16,
  #[serde(
    rename = "httpsPort",
    default,
    deserialize_with = "deserialize_number_from_string"
  )]
  pub https_port: u16,
  #[serde(
    rename = "wsPort",
    default,
    deserialize_with = "deserialize_number_from_string"
  )]
  pub ws_port: u16,
  #[serde(
    rename = "wssPort",
    default,
    deserialize_with = "deserialize_number_from_string"
  )]
  pub wss_port: u16,
  #[serde(default)]
  pub platform: String,
  #[serde(rename = "appVersion", default)]
  pub app_version: String,
  #[serde(default, deserialize_with = "toys_from_string_or_map")]
  pub toys: HashMap<String, CallbackToyInfo>,
}

/// What a transport retains per paired user.
#[derive(Debug, Clone)]
pub struct CallbackSession {
  pub platform: String,
  pub app_version: String,
  pub toys: HashMap<String, CallbackToyInfo>,
}

impl From<CallbackPayload> for CallbackSession {
  fn from(payload: CallbackPayload) -> Self {
    Self {
      platform: payload.platform,
      app_version: payload.app_version,
      toys: payload.toys,
    }
  }
}

impl CallbackSession {
  pub fn toy_statuses(&self) -> Vec<ToyStatus> {
    self
      .toys
      .iter()
      .map(|(id, info)| {
        let display_name = if info.nickname.is_empty() {
          &info.name
        } else {
          &info.nickname
        };
        ToyStatus::new(
          if info.id.is_empty() { id } else { &info.id },
          display_name,
          info.connected,
          info.battery.clamp(0, 100) as u8,
          capabilities_for_model(&info.name),
        )
      })
      .collect()
  }
}

fn capabilities_for_model(model: &str) -> MotorSet {
  match model.to_lowercase().as_str() {
    "nora" => Motor::Vibrate | Motor::Rotate,
    "max" => Motor::Vibrate | Motor::Pump,
    _ => Motor::Vibrate.into(),
  }
}
