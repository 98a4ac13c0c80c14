//! Application-wide settings shared by every platform shell.

use super::platform;

/// Storage key holding the persisted identity record.
pub const SESSION_STORAGE_KEY: &str = "spiritual-app-user";

/// Email address that is granted the admin panel on sign-in.
pub const ADMIN_EMAIL: &str = "admin@example.com";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub app_name: String,
    pub app_id: String,
    /// Link appended to "share the app" messages when the platform has no page URL of its own.
    pub share_url: String,
    pub storage_key: String,
    pub admin_email: String,
    /// Simulated authentication round-trip.
    pub auth_delay_ms: u64,
    /// Simulated admin publish (quotes and events).
    pub publish_delay_ms: u64,
    /// Simulated push-notification fan-out.
    pub notify_delay_ms: u64,
    /// How long a notice stays on screen before it dismisses itself.
    pub toast_lifetime_ms: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            app_name: "Spiritual Wisdom".to_string(),
            app_id: "app.spiritualwisdom.mobile".to_string(),
            share_url: "https://spiritualwisdom.app".to_string(),
            storage_key: SESSION_STORAGE_KEY.to_string(),
            admin_email: ADMIN_EMAIL.to_string(),
            auth_delay_ms: 1_000,
            publish_delay_ms: 1_000,
            notify_delay_ms: 500,
            toast_lifetime_ms: 4_000,
        }
    }
}

impl AppConfig {
    /// Same settings with every simulated delay removed.
    pub fn instant() -> Self {
        Self {
            auth_delay_ms: 0,
            publish_delay_ms: 0,
            notify_delay_ms: 0,
            ..Self::default()
        }
    }

    /// The URL to hand out when sharing the app: the live page on web, the configured link elsewhere.
    pub fn app_url(&self) -> String {
        platform::current_url().unwrap_or_else(|| self.share_url.clone())
    }
}
