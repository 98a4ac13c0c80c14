//! Session store: who is signed in, whether a sign-in is in flight, and the
//! copy of the identity kept in device storage.
//!
//! Authentication is simulated. [`Authenticator`] waits out a fixed delay and
//! fabricates an identity from the request; the store persists it under the
//! configured storage key as `{id, name, email, isAdmin}`.
//!
//! UI code cannot hold a mutable borrow of the store across an `.await`, so a
//! sign-in is three steps there:
//!
//! ```ignore
//! let authenticator = store.with_mut(|s| { s.begin_login(); s.authenticator() });
//! let outcome = authenticator.authenticate(request).await;
//! store.with_mut(|s| s.complete_login(outcome))
//! ```
//!
//! [`SessionStore::login`] composes the same steps for callers that own the store.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, warn};

use super::config::AppConfig;
use super::storage::KeyValueStore;
use super::timing;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    pub id: String,
    pub name: String,
    pub email: String,
    pub is_admin: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    Password,
    Google,
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Password => f.write_str("password"),
            Self::Google => f.write_str("google"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("email and password are both required")]
    MissingCredentials,

    #[error("`{0}` is not a valid email address")]
    InvalidEmail(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginRequest {
    Password { email: String, password: String },
    Google,
}

impl LoginRequest {
    pub fn password(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self::Password {
            email: email.into(),
            password: password.into(),
        }
    }

    pub fn provider(&self) -> Provider {
        match self {
            Self::Password { .. } => Provider::Password,
            Self::Google => Provider::Google,
        }
    }
}

/// Simulated authentication round-trip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Authenticator {
    delay_ms: u64,
    admin_email: String,
}

impl Authenticator {
    pub fn new(delay_ms: u64, admin_email: impl Into<String>) -> Self {
        Self {
            delay_ms,
            admin_email: admin_email.into(),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.auth_delay_ms, config.admin_email.clone())
    }

    pub async fn authenticate(&self, request: LoginRequest) -> Result<Identity, AuthError> {
        let provider = request.provider();
        let identity = match request {
            LoginRequest::Password { email, password } => {
                // The admin check sees the input as typed; only the stored email is trimmed.
                let is_admin = email == self.admin_email;
                let email = validate_credentials(&email, &password)?;
                timing::sleep_ms(self.delay_ms).await;
                Identity {
                    id: "1".to_string(),
                    name: "Spiritual Seeker".to_string(),
                    email,
                    is_admin,
                }
            }
            LoginRequest::Google => {
                timing::sleep_ms(self.delay_ms).await;
                Identity {
                    id: "2".to_string(),
                    name: "Google User".to_string(),
                    email: "user@gmail.com".to_string(),
                    is_admin: false,
                }
            }
        };
        debug!(%provider, email = %identity.email, "authentication round-trip finished");
        Ok(identity)
    }
}

/// Trims the email and checks that both fields are usable.
fn validate_credentials(email: &str, password: &str) -> Result<String, AuthError> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err(AuthError::MissingCredentials);
    }
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() && !domain.contains('@') => {
            Ok(email.to_string())
        }
        _ => Err(AuthError::InvalidEmail(email.to_string())),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    pub identity: Option<Identity>,
    /// True while a restore or sign-in is in flight.
    pub loading: bool,
    /// False until the startup restore has run once.
    pub restored: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            identity: None,
            loading: true,
            restored: false,
        }
    }
}

pub struct SessionStore<S> {
    state: SessionState,
    storage: S,
    storage_key: String,
    authenticator: Authenticator,
}

impl<S: KeyValueStore> SessionStore<S> {
    pub fn new(storage: S, config: &AppConfig) -> Self {
        Self {
            state: SessionState::default(),
            storage,
            storage_key: config.storage_key.clone(),
            authenticator: Authenticator::from_config(config),
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn identity(&self) -> Option<&Identity> {
        self.state.identity.as_ref()
    }

    pub fn authenticator(&self) -> Authenticator {
        self.authenticator.clone()
    }

    /// Loads the persisted identity, if a well-formed one exists.
    pub fn restore(&mut self) -> Option<&Identity> {
        self.state.loading = true;
        let identity = self.read_persisted();
        if let Some(identity) = identity.as_ref() {
            info!(email = %identity.email, "restored saved session");
        }
        self.state.identity = identity;
        self.state.loading = false;
        self.state.restored = true;
        self.state.identity.as_ref()
    }

    fn read_persisted(&self) -> Option<Identity> {
        let raw = match self.storage.get(&self.storage_key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!("no saved session");
                return None;
            }
            Err(err) => {
                warn!(%err, "could not read saved session");
                return None;
            }
        };

        match serde_json::from_str::<Identity>(&raw) {
            Ok(identity) => Some(identity),
            Err(err) => {
                warn!(%err, "discarding malformed saved session");
                if let Err(err) = self.storage.remove(&self.storage_key) {
                    warn!(%err, "could not remove malformed saved session");
                }
                None
            }
        }
    }

    pub fn begin_login(&mut self) {
        self.state.loading = true;
    }

    /// Applies the outcome of an authentication round-trip started with [`Self::begin_login`].
    pub fn complete_login(
        &mut self,
        outcome: Result<Identity, AuthError>,
    ) -> Result<Identity, AuthError> {
        self.state.loading = false;
        match outcome {
            Ok(identity) => {
                self.persist(&identity);
                info!(email = %identity.email, admin = identity.is_admin, "signed in");
                self.state.identity = Some(identity.clone());
                Ok(identity)
            }
            Err(err) => {
                warn!(%err, "sign-in failed");
                self.state.identity = None;
                Err(err)
            }
        }
    }

    pub async fn login(&mut self, email: &str, password: &str) -> Result<Identity, AuthError> {
        self.sign_in(LoginRequest::password(email, password)).await
    }

    pub async fn login_with_google(&mut self) -> Result<Identity, AuthError> {
        self.sign_in(LoginRequest::Google).await
    }

    async fn sign_in(&mut self, request: LoginRequest) -> Result<Identity, AuthError> {
        self.begin_login();
        let outcome = self.authenticator.authenticate(request).await;
        self.complete_login(outcome)
    }

    pub fn logout(&mut self) {
        if let Some(identity) = self.state.identity.take() {
            info!(email = %identity.email, "signed out");
        }
        self.state.loading = false;
        if let Err(err) = self.storage.remove(&self.storage_key) {
            warn!(%err, "could not remove saved session");
        }
    }

    /// A failed write keeps the in-memory session; only the next launch is affected.
    fn persist(&self, identity: &Identity) {
        let encoded = match serde_json::to_string(identity) {
            Ok(encoded) => encoded,
            Err(err) => {
                warn!(%err, "could not encode session");
                return;
            }
        };
        if let Err(err) = self.storage.set(&self.storage_key, &encoded) {
            warn!(%err, "could not save session");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::storage::MemoryStore;

    fn store_with(memory: &MemoryStore) -> SessionStore<MemoryStore> {
        SessionStore::new(memory.clone(), &AppConfig::instant())
    }

    #[test]
    fn state_starts_loading_before_restore() {
        let state = SessionState::default();
        assert!(state.loading);
        assert!(!state.restored);
        assert!(state.identity.is_none());
    }

    #[test]
    fn restore_without_record_is_absent_and_not_loading() {
        let memory = MemoryStore::new();
        let mut store = store_with(&memory);
        assert!(store.restore().is_none());
        assert!(!store.state().loading);
        assert!(store.state().restored);
    }

    #[test]
    fn restore_reads_well_formed_record() {
        let memory = MemoryStore::new();
        memory
            .set(
                "spiritual-app-user",
                r#"{"id":"1","name":"Spiritual Seeker","email":"a@b.c","isAdmin":true}"#,
            )
            .unwrap();
        let mut store = store_with(&memory);
        let identity = store.restore().cloned().unwrap();
        assert_eq!(identity.email, "a@b.c");
        assert!(identity.is_admin);
    }

    #[test]
    fn restore_with_corrupted_record_is_absent_and_drops_it() {
        let memory = MemoryStore::new();
        memory.set("spiritual-app-user", "{not json").unwrap();
        let mut store = store_with(&memory);
        assert!(store.restore().is_none());
        assert!(!store.state().loading);
        assert!(!memory.contains("spiritual-app-user"));
    }

    #[test]
    fn restore_with_wrong_shape_is_absent() {
        let memory = MemoryStore::new();
        memory
            .set("spiritual-app-user", r#"{"id":"1","name":"x"}"#)
            .unwrap();
        let mut store = store_with(&memory);
        assert!(store.restore().is_none());
    }

    #[tokio::test]
    async fn admin_email_grants_admin() {
        let memory = MemoryStore::new();
        let mut store = store_with(&memory);
        store.restore();
        let identity = store.login("admin@example.com", "x").await.unwrap();
        assert!(identity.is_admin);
        assert_eq!(identity.id, "1");
        assert_eq!(identity.name, "Spiritual Seeker");
        assert!(!store.state().loading);
    }

    #[tokio::test]
    async fn other_emails_are_not_admin() {
        let memory = MemoryStore::new();
        let mut store = store_with(&memory);
        for email in ["seeker@example.com", "admin@example.org", " someone@ashram.in "] {
            let identity = store.login(email, "pw").await.unwrap();
            assert!(!identity.is_admin, "{email} should not be admin");
        }
    }

    #[tokio::test]
    async fn padded_admin_email_is_stored_trimmed_but_not_admin() {
        let memory = MemoryStore::new();
        let mut store = store_with(&memory);
        let identity = store.login(" admin@example.com ", "x").await.unwrap();
        assert_eq!(identity.email, "admin@example.com");
        assert!(!identity.is_admin);
    }

    #[tokio::test]
    async fn login_persists_camel_case_record() {
        let memory = MemoryStore::new();
        let mut store = store_with(&memory);
        store.login("seeker@example.com", "pw").await.unwrap();

        let raw = memory.get("spiritual-app-user").unwrap().unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["isAdmin"], serde_json::json!(false));
        assert_eq!(value["email"], serde_json::json!("seeker@example.com"));
    }

    #[tokio::test]
    async fn failed_login_reports_error_and_stays_absent() {
        let memory = MemoryStore::new();
        let mut store = store_with(&memory);
        store.restore();

        assert_eq!(
            store.login("", "pw").await,
            Err(AuthError::MissingCredentials)
        );
        assert!(matches!(
            store.login("not-an-email", "pw").await,
            Err(AuthError::InvalidEmail(_))
        ));
        assert!(store.identity().is_none());
        assert!(!store.state().loading);
        assert!(!memory.contains("spiritual-app-user"));
    }

    #[tokio::test]
    async fn google_login_is_fixed_non_admin() {
        let memory = MemoryStore::new();
        let mut store = store_with(&memory);
        let identity = store.login_with_google().await.unwrap();
        assert_eq!(identity.id, "2");
        assert_eq!(identity.email, "user@gmail.com");
        assert!(!identity.is_admin);
    }

    #[tokio::test]
    async fn logout_then_restore_is_absent() {
        let memory = MemoryStore::new();
        let mut store = store_with(&memory);
        store.login("admin@example.com", "x").await.unwrap();

        store.logout();
        assert!(store.identity().is_none());
        store.logout();

        let mut relaunched = store_with(&memory);
        assert!(relaunched.restore().is_none());
    }

    #[test]
    fn begin_login_marks_loading_until_completed() {
        let memory = MemoryStore::new();
        let mut store = store_with(&memory);
        store.restore();
        store.begin_login();
        assert!(store.state().loading);
        let _ = store.complete_login(Err(AuthError::MissingCredentials));
        assert!(!store.state().loading);
    }

    #[test]
    fn credentials_validation() {
        assert_eq!(
            validate_credentials("  a@b  ", "pw"),
            Ok("a@b".to_string())
        );
        assert_eq!(
            validate_credentials("a@b", ""),
            Err(AuthError::MissingCredentials)
        );
        assert!(validate_credentials("@b", "pw").is_err());
        assert!(validate_credentials("a@", "pw").is_err());
        assert!(validate_credentials("a@b@c", "pw").is_err());
    }
}
