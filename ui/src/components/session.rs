//! Dioxus glue for the session store: one `Signal` at the root, a copyable
//! handle in context.

use std::rc::Rc;

use dioxus::prelude::*;

use crate::core::composer::Surface;
use crate::core::config::AppConfig;
use crate::core::session::{AuthError, Identity, LoginRequest, SessionStore};
use crate::core::storage::{self, KeyValueStore};

pub type DeviceSessionStore = SessionStore<Rc<dyn KeyValueStore>>;

#[derive(Clone, Copy, PartialEq)]
pub struct SessionHandle {
    store: Signal<DeviceSessionStore>,
}

impl SessionHandle {
    pub fn surface(&self) -> Surface {
        Surface::from_state(self.store.read().state())
    }

    pub fn is_loading(&self) -> bool {
        self.store.read().state().loading
    }

    pub async fn login(self, email: String, password: String) -> Result<Identity, AuthError> {
        self.sign_in(LoginRequest::password(email, password)).await
    }

    pub async fn login_with_google(self) -> Result<Identity, AuthError> {
        self.sign_in(LoginRequest::Google).await
    }

    pub fn logout(self) {
        let mut store = self.store;
        store.with_mut(|store| store.logout());
    }

    // The store is not borrowed across the await.
    async fn sign_in(self, request: LoginRequest) -> Result<Identity, AuthError> {
        let mut store = self.store;
        let authenticator = store.with_mut(|store| {
            store.begin_login();
            store.authenticator()
        });
        let outcome = authenticator.authenticate(request).await;
        store.with_mut(|store| store.complete_login(outcome))
    }
}

/// Creates the session store on device storage and restores the saved
/// identity once the first frame is up.
pub fn use_session_provider(config: &AppConfig) -> SessionHandle {
    let config = config.clone();
    let store = use_signal(move || SessionStore::new(storage::device_store(), &config));
    let handle = use_context_provider(|| SessionHandle { store });

    use_effect(move || {
        let mut store = store;
        store.with_mut(|store| {
            store.restore();
        });
    });

    handle
}

pub fn use_session() -> SessionHandle {
    use_context::<SessionHandle>()
}
