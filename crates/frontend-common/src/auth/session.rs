//! Session guard and logout over the injected [`SessionStore`]

use crate::config::StorageKeys;
use crate::storage::SessionStore;

/// Outcome of looking for a stored credential
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionStatus {
    Authenticated(String),
    Missing,
}

impl SessionStatus {
    pub fn token(&self) -> Option<&str> {
        match self {
            Self::Authenticated(token) => Some(token),
            Self::Missing => None,
        }
    }
}

/// Look up the credential token. Presence is the only check: the token is
/// never validated locally. An empty value or an unreadable store counts as
/// missing.
pub fn check_session(store: &dyn SessionStore) -> SessionStatus {
    match store.get(StorageKeys::TOKEN) {
        Ok(Some(token)) if !token.is_empty() => SessionStatus::Authenticated(token),
        Ok(_) => SessionStatus::Missing,
        Err(error) => {
            tracing::warn!(%error, "could not read credential token");
            SessionStatus::Missing
        }
    }
}

/// Forget the credential and the cached user. Storage failures are logged
/// and otherwise ignored so the caller can always go on to the login route.
pub fn logout(store: &dyn SessionStore) {
    for key in [StorageKeys::TOKEN, StorageKeys::USER] {
        if let Err(error) = store.remove(key) {
            tracing::warn!(%error, key, "failed to clear session key");
        }
    }
    tracing::info!("session cleared");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{MemorySessionStore, StorageError};

    struct BrokenStore;

    impl SessionStore for BrokenStore {
        fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::Unavailable)
        }

        fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Unavailable)
        }

        fn remove(&self, _key: &str) -> Result<(), StorageError> {
            Err(StorageError::Unavailable)
        }
    }

    #[test]
    fn test_token_present() {
        let store = MemorySessionStore::with_entries([("token", "abc")]);
        assert_eq!(
            check_session(&store),
            SessionStatus::Authenticated("abc".to_string())
        );
    }

    #[test]
    fn test_token_absent_or_empty() {
        assert_eq!(check_session(&MemorySessionStore::new()), SessionStatus::Missing);

        let store = MemorySessionStore::with_entries([("token", "")]);
        assert_eq!(check_session(&store), SessionStatus::Missing);
    }

    #[test]
    fn test_unreadable_store_is_missing() {
        assert_eq!(check_session(&BrokenStore), SessionStatus::Missing);
    }

    #[test]
    fn test_logout_clears_token_and_user() {
        let store = MemorySessionStore::with_entries([
            ("token", "abc"),
            ("user", "{\"name\":\"Ada\"}"),
            ("theme", "dark"),
        ]);

        logout(&store);

        assert!(!store.contains("token"));
        assert!(!store.contains("user"));
        assert!(store.contains("theme"));
    }

    #[test]
    fn test_logout_without_session_is_harmless() {
        let store = MemorySessionStore::new();
        logout(&store);
        logout(&BrokenStore);
        assert_eq!(check_session(&store), SessionStatus::Missing);
    }
}
