//! The session store: single source of truth for route guards

use std::sync::Mutex;

use tokio::sync::watch;

use super::storage::{STORAGE_KEY_CREDENTIAL, STORAGE_KEY_PRINCIPAL, SessionStorage};
use super::{Credential, Principal, Session, SessionState};
use crate::error::{Result, SessionError};

/// A session as found in storage, before it has been validated
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedSession {
    pub credential: Credential,
    pub principal: Principal,
}

type BoxedStorage = Box<dyn SessionStorage>;

/// Holds the current session and mirrors it to persistent storage.
///
/// State starts as [`SessionState::Loading`] and is published through a
/// watch channel so guards can wait for bootstrap to settle it. Every write
/// keeps the credential and principal paired, both in memory and on disk.
pub struct SessionStore {
    storage: Mutex<BoxedStorage>,
    state: watch::Sender<SessionState>,
}

impl SessionStore {
    /// Open a store over the given storage. The store reports `Loading`
    /// until bootstrap settles it.
    pub fn new(storage: impl SessionStorage + 'static) -> Self {
        let (state, _) = watch::channel(SessionState::Loading);
        Self {
            storage: Mutex::new(Box::new(storage)),
            state,
        }
    }

    /// Snapshot of the current state
    pub fn state(&self) -> SessionState {
        self.state.borrow().clone()
    }

    pub fn credential(&self) -> Option<Credential> {
        self.state.borrow().credential().cloned()
    }

    pub fn principal(&self) -> Option<Principal> {
        self.state.borrow().principal().cloned()
    }

    /// Receive every state change
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.state.subscribe()
    }

    /// Wait until the state is no longer `Loading`.
    pub async fn settled(&self) -> SessionState {
        let mut rx = self.subscribe();
        match rx.wait_for(|state| !state.is_loading()).await {
            Ok(state) => state.clone(),
            // The sender lives in `self`, so the channel cannot close under us.
            Err(_) => self.state(),
        }
    }

    /// Where the session is persisted
    pub fn location(&self) -> String {
        self.storage
            .lock()
            .map(|storage| storage.location())
            .unwrap_or_default()
    }

    /// Start a validated session. Both values are written in one storage
    /// transaction; memory only changes once the write succeeded.
    pub fn set(&self, principal: Principal, credential: Credential) -> Result<()> {
        let serialized = serde_json::to_string(&principal)?;
        self.with_storage(|storage| {
            storage.write_all(&[
                (STORAGE_KEY_CREDENTIAL, credential.as_str()),
                (STORAGE_KEY_PRINCIPAL, serialized.as_str()),
            ])
        })?;

        log::debug!("Session set for customer {}", principal.id);
        self.state
            .send_replace(SessionState::Authenticated(Session::new(credential, principal)));
        Ok(())
    }

    /// End the session. Memory is cleared even if storage fails to update.
    pub fn clear(&self) -> Result<()> {
        self.state.send_replace(SessionState::Anonymous);
        self.with_storage(|storage| {
            storage.remove_all(&[STORAGE_KEY_CREDENTIAL, STORAGE_KEY_PRINCIPAL])
        })
    }

    /// Settle as signed out without touching storage (nothing was stored).
    pub(crate) fn settle_anonymous(&self) {
        self.state.send_replace(SessionState::Anonymous);
    }

    /// Read the stored pair without contacting the server.
    ///
    /// `Ok(None)` means nothing is stored. A half-written pair or an
    /// unparseable profile is `SessionError::Corrupt`.
    pub fn persisted(&self) -> Result<Option<PersistedSession>> {
        let (token, profile) = self.with_storage_ref(|storage| {
            Ok((
                storage.read(STORAGE_KEY_CREDENTIAL)?,
                storage.read(STORAGE_KEY_PRINCIPAL)?,
            ))
        })?;

        match (token.and_then(Credential::new), profile) {
            (None, None) => Ok(None),
            (Some(credential), Some(profile)) => {
                let principal: Principal = serde_json::from_str(&profile)
                    .map_err(|e| SessionError::Corrupt(format!("stored profile: {}", e)))?;
                Ok(Some(PersistedSession {
                    credential,
                    principal,
                }))
            }
            (Some(_), None) => {
                Err(SessionError::Corrupt("credential stored without a profile".to_string()).into())
            }
            (None, Some(_)) => {
                Err(SessionError::Corrupt("profile stored without a credential".to_string()).into())
            }
        }
    }

    fn with_storage<T>(&self, f: impl FnOnce(&mut BoxedStorage) -> Result<T>) -> Result<T> {
        let mut storage = self
            .storage
            .lock()
            .map_err(|_| SessionError::Storage("storage lock poisoned".to_string()))?;
        f(&mut storage)
    }

    fn with_storage_ref<T>(&self, f: impl FnOnce(&BoxedStorage) -> Result<T>) -> Result<T> {
        let storage = self
            .storage
            .lock()
            .map_err(|_| SessionError::Storage("storage lock poisoned".to_string()))?;
        f(&storage)
    }
}
