//! Dioxus components shared by every page: the composition root, session and
//! notice plumbing, and the chrome around the pages.

pub mod app;
pub mod bottom_tabs;
pub mod locale;
pub mod session;
pub mod share_card;
pub mod toast;

pub use app::App;
pub use bottom_tabs::BottomTabs;
pub use locale::LocaleSwitcher;
pub use share_card::ShareAppCard;
pub use toast::ToastHost;
