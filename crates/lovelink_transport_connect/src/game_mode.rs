// Lovelink Rust Source Code File - See repository README for more info.
//
// Copyright 2026 Lovelink Project Developers. All rights reserved.
//
// Licensed under the BSD 3-Clause license. See LICENSE file in the project root
// for full license information.

use async_trait::async_trait;
use lovelink_core::{
  errors::{TransportError, VendorErrorCode},
  intent::{Motor, MotorSet},
  transport::{CommandTransport, ToyStatus},
  wire::WireCommand,
};
use reqwest::StatusCode;
use serde::{Deserialize, Deserializer};
use serde_aux::prelude::*;
use std::collections::HashMap;

/// Address of a Game Mode bridge on the local network.
///
/// Lovense Connect publishes hosts as `[ip-with-dashes].lovense.club`, a
/// loopback DNS resolver that points back at `[ip]`, used so the app can
/// serve a certificate over secure contexts. That resolution sometimes fails,
/// so a direct-IP form is available as a fallback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameModeHost {
  base_url: String,
}

impl GameModeHost {
  pub fn new(ip: &str, port: u16) -> Self {
    let dashed = ip.replace('.', "-");
    Self {
      base_url: format!("https://{dashed}.lovense.club:{port}"),
    }
  }

  /// Plain-HTTP direct-IP form for networks where the vendor's loopback DNS
  /// does not resolve.
  pub fn direct(ip: &str, port: u16) -> Self {
    Self {
      base_url: format!("http://{ip}:{port}"),
    }
  }

  pub fn base_url(&self) -> &str {
    &self.base_url
  }

  pub fn command_url(&self) -> String {
    format!("{}/command", self.base_url)
  }

  pub fn toys_url(&self) -> String {
    format!("{}/GetToys", self.base_url)
  }
}

#[derive(Deserialize, Debug, Clone)]
pub(crate) struct GameModeToyInfo {
  pub id: String,
  pub name: String,
  #[serde(rename = "nickName", default)]
  pub nickname: String,
  #[serde(rename = "status", deserialize_with = "deserialize_bool_from_anything")]
  pub connected: bool,
  // The Connect app sends null for battery while a toy is reconnecting.
  #[serde(default, deserialize_with = "parse_battery")]
  pub battery: i8,
}

fn parse_battery<'de, D>(d: D) -> Result<i8, D::Error>
where
  D: Deserializer<'de>,
{
  Deserialize::deserialize(d).map(|b: Option<_>| b.unwrap_or(0))
}

#[derive(Deserialize, Debug)]
pub(crate) struct GameModeToyList {
  #[serde(deserialize_with = "deserialize_number_from_string")]
  pub code: u16,
  #[serde(default)]
  pub data: HashMap<String, GameModeToyInfo>,
}

#[derive(Deserialize, Debug)]
pub(crate) struct GameModeReply {
  #[serde(deserialize_with = "deserialize_number_from_string")]
  pub code: u16,
  #[serde(rename = "type", default)]
  pub reply_type: String,
}

/// The bridge reports 200 in-band for success and the documented vendor
/// error codes otherwise.
fn classify_reply_code(code: u16, detail: &str) -> Result<(), TransportError> {
  if code == 200 {
    return Ok(());
  }
  match VendorErrorCode::from_code(code) {
    Some(vendor_code) => Err(TransportError::VendorError(vendor_code, detail.to_owned())),
    None => Err(TransportError::UnknownVendorError(code, detail.to_owned())),
  }
}

/// Capability set by toy model. Every Lovense toy vibrates; rotation and
/// pumping are model-specific.
fn capabilities_for_model(model: &str) -> MotorSet {
  match model.to_lowercase().as_str() {
    "nora" => Motor::Vibrate | Motor::Rotate,
    "max" => Motor::Vibrate | Motor::Pump,
    _ => Motor::Vibrate.into(),
  }
}

fn to_toy_status(info: &GameModeToyInfo) -> ToyStatus {
  let display_name = if info.nickname.is_empty() {
    &info.name
  } else {
    &info.nickname
  };
  ToyStatus::new(
    &info.id,
    display_name,
    info.connected,
    info.battery.clamp(0, 100) as u8,
    capabilities_for_model(&info.name),
  )
}

pub struct GameModeTransport {
  host: GameModeHost,
  client: reqwest::Client,
}

impl GameModeTransport {
  pub fn new(host: GameModeHost) -> Result<Self, TransportError> {
    // The bridge's certificate only validates when the vendor's loopback DNS
    // cooperates; the reference tooling skips verification on the LAN.
    let client = reqwest::Client::builder()
      .danger_accept_invalid_certs(true)
      .build()
      .map_err(|e| TransportError::NetworkError(e.to_string()))?;
    Ok(Self { host, client })
  }

  pub fn host(&self) -> &GameModeHost {
    &self.host
  }
}

#[async_trait]
impl CommandTransport for GameModeTransport {
  fn name(&self) -> &'static str {
    "GameModeTransport"
  }

  async fn send_command(&self, command: &WireCommand) -> Result<(), TransportError> {
    let url = self.host.command_url();
    trace!("Sending Game Mode command to {}: {:?}", url, command);
    let response = self
      .client
      .post(&url)
      .json(command)
      .send()
      .await
      .map_err(|e| TransportError::NetworkError(e.to_string()))?;
    if response.status() != StatusCode::OK {
      error!(
        "Error contacting Game Mode bridge. Status returned: {}",
        response.status()
      );
      return Err(TransportError::HttpError(response.status().to_string()));
    }
    let reply: GameModeReply = response
      .json()
      .await
      .map_err(|e| TransportError::InvalidResponse(e.to_string()))?;
    classify_reply_code(reply.code, &reply.reply_type)
  }

  async fn toy_status(&self) -> Result<Vec<ToyStatus>, TransportError> {
    let url = self.host.toys_url();
    let response = self
      .client
      .get(&url)
      .send()
      .await
      .map_err(|e| TransportError::NetworkError(e.to_string()))?;
    if response.status() != StatusCode::OK {
      return Err(TransportError::HttpError(response.status().to_string()));
    }
    let list: GameModeToyList = response
      .json()
      .await
      .map_err(|e| TransportError::InvalidResponse(e.to_string()))?;
    classify_reply_code(list.code, "GetToys")?;
    Ok(list.data.values().map(to_toy_status).collect())
  }
}
