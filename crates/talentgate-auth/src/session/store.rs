//! Session subject storage.
//!
//! Sessions live only in the cache, keyed by the session id a token
//! carries, with a TTL equal to the token lifetime. A cache miss is
//! therefore indistinguishable between "expired" and "logged out",
//! which is exactly the property logout relies on.

use std::sync::Arc;
use std::time::Duration;

use uuid::Uuid;

use talentgate_cache::keys;
use talentgate_core::result::AppResult;
use talentgate_core::traits::cache::CacheProvider;
use talentgate_entity::SessionSubject;

/// Session store over an arbitrary cache backend.
#[derive(Debug, Clone)]
pub struct SessionStore {
    cache: Arc<dyn CacheProvider>,
}

impl SessionStore {
    pub fn new(cache: Arc<dyn CacheProvider>) -> Self {
        Self { cache }
    }

    /// Persist a session subject under the given id.
    pub async fn create(
        &self,
        session_id: Uuid,
        subject: &SessionSubject,
        ttl: Duration,
    ) -> AppResult<()> {
        let payload = serde_json::to_string(subject)?;
        self.cache
            .set(&keys::session(session_id), &payload, ttl)
            .await
    }

    /// Look up a session. `Ok(None)` means expired or revoked.
    pub async fn get(&self, session_id: Uuid) -> AppResult<Option<SessionSubject>> {
        match self.cache.get(&keys::session(session_id)).await? {
            Some(payload) => Ok(Some(serde_json::from_str(&payload)?)),
            None => Ok(None),
        }
    }

    /// Revoke a session. Deleting an absent session is not an error.
    pub async fn delete(&self, session_id: Uuid) -> AppResult<()> {
        self.cache.delete(&keys::session(session_id)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use talentgate_cache::memory::MemoryCacheProvider;
    use talentgate_core::config::cache::MemoryCacheConfig;
    use talentgate_entity::UserRole;

    fn store() -> SessionStore {
        SessionStore::new(Arc::new(MemoryCacheProvider::new(
            &MemoryCacheConfig::default(),
        )))
    }

    fn subject() -> SessionSubject {
        SessionSubject {
            user_id: Uuid::new_v4(),
            team_id: Uuid::new_v4(),
            role: UserRole::Admin,
        }
    }

    #[tokio::test]
    async fn create_get_delete() {
        let store = store();
        let id = Uuid::new_v4();
        let subject = subject();

        store
            .create(id, &subject, Duration::from_secs(3600))
            .await
            .unwrap();
        assert_eq!(store.get(id).await.unwrap(), Some(subject));

        store.delete(id).await.unwrap();
        assert_eq!(store.get(id).await.unwrap(), None);

        // Revoking twice is idempotent.
        store.delete(id).await.unwrap();
    }

    #[tokio::test]
    async fn unknown_session_is_a_miss_not_an_error() {
        assert_eq!(store().get(Uuid::new_v4()).await.unwrap(), None);
    }
}
