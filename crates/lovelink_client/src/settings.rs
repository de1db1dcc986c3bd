// Lovelink Rust Source Code File - See repository README for more info.
//
// Copyright 2026 Lovelink Project Developers. All rights reserved.
//
// Licensed under the BSD 3-Clause license. See LICENSE file in the project root
// for full license information.

//! Consent settings storage. The store is an external collaborator; the
//! in-memory implementation here exists for embedding and tests. Settings
//! are fetched fresh at every decision and never cached across decisions.

use async_trait::async_trait;
use dashmap::DashMap;
use lovelink_core::policy::ConsentSettings;

#[async_trait]
pub trait SettingsStore: Send + Sync {
  /// Current consent record for a user, if one has ever been written.
  async fn get(&self, uid: &str) -> Option<ConsentSettings>;

  /// Replaces the consent record for a user. The only mutation path.
  async fn update(&self, uid: &str, settings: ConsentSettings);
}

#[derive(Default)]
pub struct InMemorySettingsStore {
  settings: DashMap<String, ConsentSettings>,
}

impl InMemorySettingsStore {
  pub fn new() -> Self {
    Self::default()
  }
}

#[async_trait]
impl SettingsStore for InMemorySettingsStore {
  async fn get(&self, uid: &str) -> Option<ConsentSettings> {
    self.settings.get(uid).map(|s| s.clone())
  }

  async fn update(&self, uid: &str, settings: ConsentSettings) {
    debug!("Updating consent settings for {}", uid);
    self.settings.insert(uid.to_owned(), settings);
  }
}

#[cfg(test)]
mod test {
  use super::*;
  use lovelink_core::policy::ConsentSettingsBuilder;

  #[tokio::test]
  async fn test_get_and_update() {
    let store = InMemorySettingsStore::new();
    assert!(store.get("user1").await.is_none());
    let settings = ConsentSettingsBuilder::default()
      .enabled(true)
      .max_intensity(12)
      .build()
      .unwrap();
    store.update("user1", settings.clone()).await;
    assert_eq!(store.get("user1").await, Some(settings));
    assert!(store.get("user2").await.is_none());
  }
}
