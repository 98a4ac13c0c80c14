//! Top-level surfaces chosen by the composition root.

mod login;
mod shell;

pub use login::LoginView;
pub use shell::{AppShell, Splash};
