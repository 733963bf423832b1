use std::sync::Arc;

use anyhow::{Context, Result};
use shared::domain::UserSession;
use tracing::{debug, warn};

use crate::KeyValueStore;

pub const SESSION_STORAGE_KEY: &str = "userSession";

/// Loads, saves and clears the single persisted [`UserSession`].
#[derive(Clone)]
pub struct SessionStore {
    store: Arc<dyn KeyValueStore>,
}

impl SessionStore {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Returns the stored session, purging it when it cannot be decoded.
    /// Read failures are logged and reported as "no session".
    pub async fn load(&self) -> Option<UserSession> {
        let raw = match self.store.get(SESSION_STORAGE_KEY).await {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(err) => {
                warn!(error = %err, "failed to read persisted session");
                return None;
            }
        };

        match decode_session(&raw) {
            Some(session) => Some(session),
            None => {
                debug!("discarding corrupt persisted session");
                if let Err(err) = self.store.remove(SESSION_STORAGE_KEY).await {
                    warn!(error = %err, "failed to purge corrupt session");
                }
                None
            }
        }
    }

    pub async fn save(&self, session: &UserSession) -> Result<()> {
        let serialized = serde_json::to_string(session).context("failed to encode session")?;
        self.store.set(SESSION_STORAGE_KEY, &serialized).await
    }

    pub async fn clear(&self) -> Result<()> {
        self.store.remove(SESSION_STORAGE_KEY).await
    }
}

fn decode_session(raw: &str) -> Option<UserSession> {
    serde_json::from_str::<UserSession>(raw)
        .ok()
        .filter(|session| !session.email.is_empty())
}

#[cfg(test)]
#[path = "tests/session_tests.rs"]
mod tests;
