// Lovelink Rust Source Code File - See repository README for more info.
//
// Copyright 2026 Lovelink Project Developers. All rights reserved.
//
// Licensed under the BSD 3-Clause license. See LICENSE file in the project root
// for full license information.

//! Mood to intent mapping. A lookup table, not an algorithm: each mood tag
//! names fixed pattern/preset parameters. Unrecognized tags fall back to the
//! gentlest mapping rather than failing, so a sloppy caller errs soft.

use lovelink_core::intent::{
  Intent,
  Motor,
  MotorIntent,
  PatternIntent,
  PresetIntent,
  PresetName,
  ToySelector,
};
use std::str::FromStr;
use strum_macros::{Display, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum MoodTag {
  Relaxed,
  Tender,
  Playful,
  Teasing,
  Intense,
}

/// Fallback for tags the closed enum does not know.
const DEFAULT_MOOD: MoodTag = MoodTag::Tender;

pub fn parse_mood(tag: &str) -> MoodTag {
  MoodTag::from_str(tag).unwrap_or_else(|_| {
    debug!("Unrecognized mood tag '{}', using {}", tag, DEFAULT_MOOD);
    DEFAULT_MOOD
  })
}

/// Intent parameters for a mood, bounded by `duration_sec` and addressed to
/// `toy`. The values here stay deliberately below the vibrate ceiling so a
/// mood-driven command can still be cut down by a consent intensity limit
/// rather than the other way around.
pub fn intent_for_mood(mood: MoodTag, duration_sec: u32, toy: ToySelector) -> Intent {
  match mood {
    MoodTag::Relaxed => Intent::Vibrate(MotorIntent::new(4, duration_sec).with_toy(toy)),
    MoodTag::Tender => Intent::Pattern(
      PatternIntent::new(&[2, 4, 6, 4, 2], 800, duration_sec, Motor::Vibrate.into()).with_toy(toy),
    ),
    MoodTag::Playful => {
      Intent::Preset(PresetIntent::new(PresetName::Pulse, duration_sec).with_toy(toy))
    }
    MoodTag::Teasing => Intent::Pattern(
      PatternIntent::new(&[10, 2, 12, 2, 14, 2], 400, duration_sec, Motor::Vibrate.into())
        .with_toy(toy),
    ),
    MoodTag::Intense => {
      Intent::Preset(PresetIntent::new(PresetName::Earthquake, duration_sec).with_toy(toy))
    }
  }
}

#[cfg(test)]
mod test {
  use super::*;
  use lovelink_core::encode;
  use test_case::test_case;

  #[test_case("relaxed", MoodTag::Relaxed)]
  #[test_case("Playful", MoodTag::Playful)]
  #[test_case("INTENSE", MoodTag::Intense)]
  #[test_case("grumpy", MoodTag::Tender ; "unknown tag falls back to default")]
  #[test_case("", MoodTag::Tender ; "empty tag falls back to default")]
  fn test_parse_mood(tag: &str, expected: MoodTag) {
    assert_eq!(parse_mood(tag), expected);
  }

  #[test]
  fn test_every_mood_produces_encodable_intent() {
    for mood in [
      MoodTag::Relaxed,
      MoodTag::Tender,
      MoodTag::Playful,
      MoodTag::Teasing,
      MoodTag::Intense,
    ] {
      let intent = intent_for_mood(mood, 30, ToySelector::All);
      assert!(encode(&intent).is_ok(), "mood {mood} must encode cleanly");
    }
  }

  #[test]
  fn test_mood_intents_stay_moderate() {
    for mood in [MoodTag::Relaxed, MoodTag::Tender, MoodTag::Teasing] {
      let intent = intent_for_mood(mood, 30, ToySelector::All);
      assert!(intent.peak_intensity() <= 14);
    }
  }
}
