// Lovelink Rust Source Code File - See repository README for more info.
//
// Copyright 2026 Lovelink Project Developers. All rights reserved.
//
// Licensed under the BSD 3-Clause license. See LICENSE file in the project root
// for full license information.

use crate::callback::{CallbackPayload, CallbackSession};
use async_trait::async_trait;
use dashmap::DashMap;
use getset::Getters;
use lovelink_core::{
  errors::{TransportError, VendorErrorCode},
  transport::{CommandTransport, ToyStatus},
  wire::WireCommand,
};
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

const API_BASE: &str = "https://api.lovense-api.com/api";

/// Credentials and addressing for the vendor's cloud API.
#[derive(Debug, Clone, Getters)]
#[getset(get = "pub")]
pub struct StandardApiConfig {
  developer_token: String,
  uid: String,
  uname: String,
  callback_url: Option<String>,
}

impl StandardApiConfig {
  pub fn new(developer_token: &str, uid: &str) -> Self {
    Self {
      developer_token: developer_token.to_owned(),
      uid: uid.to_owned(),
      uname: uid.to_owned(),
      callback_url: None,
    }
  }

  pub fn with_callback_url(mut self, callback_url: &str) -> Self {
    self.callback_url = Some(callback_url.to_owned());
    self
  }
}

#[derive(Serialize, Debug)]
struct TokenRequest<'a> {
  token: &'a str,
  uid: &'a str,
  uname: &'a str,
}

#[derive(Deserialize, Debug)]
struct TokenData {
  #[serde(rename = "authToken", default)]
  auth_token: String,
}

#[derive(Deserialize, Debug)]
struct TokenReply {
  #[serde(default = "nonzero_code")]
  code: i64,
  #[serde(default)]
  message: Option<String>,
  #[serde(default)]
  data: Option<TokenData>,
}

#[derive(Serialize, Debug)]
struct QrCodeRequest<'a> {
  token: &'a str,
  uid: &'a str,
  uname: &'a str,
  v: u8,
}

#[derive(Deserialize, Debug)]
struct ApiReply {
  #[serde(default)]
  result: bool,
  #[serde(default = "nonzero_code")]
  code: i64,
  #[serde(default)]
  message: Option<String>,
}

fn nonzero_code() -> i64 {
  -1
}

impl ApiReply {
  fn is_success(&self) -> bool {
    self.result || self.code == 0
  }

  fn into_error(self) -> TransportError {
    let detail = self.message.unwrap_or_else(|| "no message".to_owned());
    match u16::try_from(self.code).ok().and_then(VendorErrorCode::from_code) {
      Some(vendor_code) => TransportError::VendorError(vendor_code, detail),
      None => TransportError::InvalidResponse(detail),
    }
  }
}

#[derive(Serialize, Debug)]
struct CommandRequest<'a> {
  token: &'a str,
  uid: &'a str,
  #[serde(flatten)]
  command: &'a WireCommand,
}

/// Remote transport against the vendor cloud. One instance serves one
/// configured user; pairing callbacks for that user (and any others sharing
/// the developer token) are registered on it as they arrive.
pub struct StandardApiTransport {
  config: StandardApiConfig,
  client: reqwest::Client,
  auth_token: RwLock<Option<String>>,
  sessions: DashMap<String, CallbackSession>,
}

impl StandardApiTransport {
  pub fn new(config: StandardApiConfig) -> Self {
    Self {
      config,
      client: reqwest::Client::new(),
      auth_token: RwLock::new(None),
      sessions: DashMap::new(),
    }
  }

  pub fn config(&self) -> &StandardApiConfig {
    &self.config
  }

  async fn post_json<T: Serialize>(
    &self,
    url: &str,
    body: &T,
  ) -> Result<reqwest::Response, TransportError> {
    let response = self
      .client
      .post(url)
      .json(body)
      .send()
      .await
      .map_err(|e| TransportError::NetworkError(e.to_string()))?;
    if response.status() != StatusCode::OK {
      error!(
        "Error contacting Standard API endpoint {}. Status returned: {}",
        url,
        response.status()
      );
      return Err(TransportError::HttpError(response.status().to_string()));
    }
    Ok(response)
  }

  /// Exchanges the developer token for a per-user auth token. Required
  /// before QR generation.
  pub async fn authenticate(&self) -> Result<(), TransportError> {
    let reply: TokenReply = self
      .post_json(
        &format!("{API_BASE}/basicApi/getToken"),
        &TokenRequest {
          token: self.config.developer_token(),
          uid: self.config.uid(),
          uname: self.config.uname(),
        },
      )
      .await?
      .json()
      .await
      .map_err(|e| TransportError::InvalidResponse(e.to_string()))?;

    if reply.code != 0 {
      let detail = reply.message.unwrap_or_else(|| "no message".to_owned());
      error!("Auth token request failed: {}", detail);
      return Err(TransportError::VendorError(
        VendorErrorCode::InvalidToken,
        detail,
      ));
    }
    let token = reply
      .data
      .map(|d| d.auth_token)
      .filter(|t| !t.is_empty())
      .ok_or_else(|| TransportError::InvalidResponse("empty auth token".to_owned()))?;
    info!("Got auth token for user {}", self.config.uid());
    *self.auth_token.write().await = Some(token);
    Ok(())
  }

  pub async fn is_authenticated(&self) -> bool {
    self.auth_token.read().await.is_some()
  }

  /// Requests a pairing QR code URL for the configured user. The user scans
  /// it with the Remote app, which then POSTs a [CallbackPayload] to the
  /// configured callback URL.
  pub async fn qr_code(&self) -> Result<String, TransportError> {
    if !self.is_authenticated().await {
      self.authenticate().await?;
    }
    let reply: ApiReply = self
      .post_json(
        &format!("{API_BASE}/lan/getQrCode"),
        &QrCodeRequest {
          token: self.config.developer_token(),
          uid: self.config.uid(),
          uname: self.config.uname(),
          v: 2,
        },
      )
      .await?
      .json()
      .await
      .map_err(|e| TransportError::InvalidResponse(e.to_string()))?;

    if !reply.is_success() {
      return Err(reply.into_error());
    }
    // On success the message field carries the QR image URL.
    reply
      .message
      .filter(|m| !m.is_empty())
      .ok_or_else(|| TransportError::InvalidResponse("empty QR code URL".to_owned()))
  }

  /// Registers a pairing callback. Toys reported here are the inventory
  /// used for status queries; the Standard API has no live polling endpoint.
  pub fn register_callback(&self, payload: CallbackPayload) {
    info!(
      "User {} connected with {} toys",
      payload.uid,
      payload.toys.len()
    );
    self
      .sessions
      .insert(payload.uid.clone(), CallbackSession::from(payload));
  }

  pub fn session(&self, uid: &str) -> Option<CallbackSession> {
    self.sessions.get(uid).map(|s| s.clone())
  }
}

#[async_trait]
impl CommandTransport for StandardApiTransport {
  fn name(&self) -> &'static str {
    "StandardApiTransport"
  }

  async fn send_command(&self, command: &WireCommand) -> Result<(), TransportError> {
    trace!("Sending Standard API command: {:?}", command);
    let reply: ApiReply = self
      .post_json(
        &format!("{API_BASE}/lan/v2/command"),
        &CommandRequest {
          token: self.config.developer_token(),
          uid: self.config.uid(),
          command,
        },
      )
      .await?
      .json()
      .await
      .map_err(|e| TransportError::InvalidResponse(e.to_string()))?;

    if reply.is_success() {
      Ok(())
    } else {
      Err(reply.into_error())
    }
  }

  async fn toy_status(&self) -> Result<Vec<ToyStatus>, TransportError> {
    self
      .session(self.config.uid())
      .map(|s| s.toy_statuses())
      .ok_or_else(|| TransportError::NoSession(self.config.uid().clone()))
  }
}
