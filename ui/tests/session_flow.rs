//! End-to-end walk through the gate: launch, sign in as admin, open the
//! admin tab, sign out, relaunch.

use ui::core::composer::{transition, Surface, Transition};
use ui::core::config::AppConfig;
use ui::core::navigation::{visible_sections, Section, TabRouter};
use ui::core::session::SessionStore;
use ui::core::storage::{KeyValueStore, MemoryStore};
use ui::pages::admin::forms::{EventDraft, QuoteDraft};

#[tokio::test]
async fn admin_session_round_trip() {
    let config = AppConfig::instant();
    let device = MemoryStore::new();
    let mut store = SessionStore::new(device.clone(), &config);

    assert_eq!(Surface::from_state(store.state()), Surface::Loading);
    store.restore();
    let gated = Surface::from_state(store.state());
    assert_eq!(gated, Surface::Gated);

    let identity = store.login("admin@example.com", "om").await.unwrap();
    let active = Surface::from_state(store.state());
    assert_eq!(transition(&gated, &active), Some(Transition::SignedIn));
    assert_eq!(active.identity(), Some(&identity));
    assert_eq!(
        visible_sections(Some(&identity)).last(),
        Some(&Section::Admin)
    );

    let mut router = TabRouter::default();
    assert_eq!(router.current_page(Some(&identity)), Section::Quotes);
    assert!(router.select("admin"));
    assert_eq!(router.current_page(Some(&identity)), Section::Admin);

    store.logout();
    let signed_out = Surface::from_state(store.state());
    assert_eq!(transition(&active, &signed_out), Some(Transition::SignedOut));
    assert!(!visible_sections(store.identity()).contains(&Section::Admin));
    assert_eq!(router.current_page(store.identity()), Section::Quotes);
    assert!(!device.contains(&config.storage_key));
}

#[tokio::test]
async fn saved_session_survives_relaunch() {
    let config = AppConfig::instant();
    let device = MemoryStore::new();

    let mut first = SessionStore::new(device.clone(), &config);
    first.restore();
    first.login_with_google().await.unwrap();
    assert!(device.get(&config.storage_key).unwrap().is_some());

    let mut relaunched = SessionStore::new(device, &config);
    relaunched.restore();
    match Surface::from_state(relaunched.state()) {
        Surface::Active(identity) => {
            assert_eq!(identity.name, "Google User");
            assert!(!visible_sections(Some(&identity)).contains(&Section::Admin));
        }
        other => panic!("expected an active session, got {other:?}"),
    }
}

#[test]
fn blank_admin_forms_never_validate() {
    assert!(QuoteDraft::default().validate().is_err());
    assert!(EventDraft::default().validate().is_err());
}
