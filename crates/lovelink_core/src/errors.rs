// Lovelink Rust Source Code File - See repository README for more info.
//
// Copyright 2026 Lovelink Project Developers. All rights reserved.
//
// Licensed under the BSD 3-Clause license. See LICENSE file in the project root
// for full license information.

//! Lovelink error structs/enums. Validation and policy failures are local and
//! synchronous; transport failures carry the vendor's numeric code where the
//! vendor supplied one.

use crate::intent::Motor;
use displaydoc::Display;
use serde::{Deserialize, Serialize};
use serde_repr::{Deserialize_repr, Serialize_repr};
use thiserror::Error;

pub type LovelinkResult<T = ()> = Result<T, LovelinkError>;

/// Validation errors occur when an intent is malformed or out of range. They
/// are raised before any command is encoded, and nothing is ever sent to the
/// transport for an intent that fails validation.
#[derive(Debug, Error, Display, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationError {
  /// {0} intensity {1} exceeds maximum of {2}
  IntensityOutOfRange(Motor, u32, u32),
  /// Pattern has no levels
  EmptyPattern,
  /// Pattern has {0} levels, maximum is {1}
  PatternTooLong(usize, usize),
  /// Pattern interval {0}ms is below the {1}ms minimum
  IntervalTooShort(u32, u32),
  /// Pattern level {0} exceeds maximum of {1} for features {2}
  PatternLevelOutOfRange(u32, u32, String),
  /// Pattern drives no features
  EmptyFeatureSet,
  /// Unknown preset: {0}
  UnknownPreset(String),
  /// Multi-function command has no active function
  NoActiveFunction,
  /// Loop timing values must both be greater than zero
  InvalidLoopTiming,
  /// Invalid time of day: {0}
  InvalidTimeOfDay(String),
  /// Invalid strength string: {0}
  InvalidStrengthString(String),
}

/// Policy denials are the consent gate's reasons for refusing a command. The
/// `Display` strings here are stable API; callers surface them verbatim to
/// explain why a command did not execute.
#[derive(Debug, Error, Display, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PolicyDenial {
  /// disabled
  Disabled,
  /// autonomous not permitted
  AutonomousNotPermitted,
  /// quiet hours
  QuietHours,
  /// cooldown
  Cooldown,
  /// intensity exceeds limit
  IntensityExceedsLimit,
  /// duration exceeds limit
  DurationExceedsLimit,
}

impl PolicyDenial {
  /// Quiet hours and cooldown denials clear on their own with time, so a
  /// retry later is meaningful. Limit denials require the caller to change
  /// the request.
  pub fn is_transient(&self) -> bool {
    matches!(self, PolicyDenial::QuietHours | PolicyDenial::Cooldown)
  }
}

/// Error codes the vendor's documented command endpoints can return.
#[derive(
  Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Serialize_repr, Deserialize_repr,
)]
#[repr(u16)]
pub enum VendorErrorCode {
  /// invalid command (400)
  InvalidCommand = 400,
  /// invalid token (401)
  InvalidToken = 401,
  /// permission denied (402)
  PermissionDenied = 402,
  /// invalid parameter (403)
  InvalidParameter = 403,
  /// toy offline or not found (404)
  ToyNotFound = 404,
  /// vendor server error (500)
  ServerError = 500,
  /// socket connection lost (506)
  SocketDisconnected = 506,
}

impl VendorErrorCode {
  pub fn from_code(code: u16) -> Option<Self> {
    match code {
      400 => Some(VendorErrorCode::InvalidCommand),
      401 => Some(VendorErrorCode::InvalidToken),
      402 => Some(VendorErrorCode::PermissionDenied),
      403 => Some(VendorErrorCode::InvalidParameter),
      404 => Some(VendorErrorCode::ToyNotFound),
      500 => Some(VendorErrorCode::ServerError),
      506 => Some(VendorErrorCode::SocketDisconnected),
      _ => None,
    }
  }

  pub fn code(&self) -> u16 {
    *self as u16
  }
}

/// Transport errors occur during or after the network call to the vendor
/// bridge. The core never retries these; it only refuses to advance the
/// cooldown timestamp when one is reported.
#[derive(Debug, Error, Display, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransportError {
  /// Vendor error {0}: {1}
  VendorError(VendorErrorCode, String),
  /// Vendor endpoint returned unrecognized code {0}: {1}
  UnknownVendorError(u16, String),
  /// HTTP error from vendor endpoint: {0}
  HttpError(String),
  /// Network error: {0}
  NetworkError(String),
  /// Invalid response from vendor endpoint: {0}
  InvalidResponse(String),
  /// Not authenticated with the vendor API
  NotAuthenticated,
  /// No paired session for user {0}
  NoSession(String),
}

/// Aggregation enum for the full error taxonomy.
#[derive(Debug, Error, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LovelinkError {
  #[error(transparent)]
  Validation(#[from] ValidationError),
  #[error(transparent)]
  Denied(#[from] PolicyDenial),
  #[error(transparent)]
  Transport(#[from] TransportError),
}
