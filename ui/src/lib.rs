//! Shared UI crate for Spiritual Wisdom. All cross-platform logic, pages and
//! components live here; the platform crates only launch [`App`].

pub mod components;
pub mod core;
pub mod i18n;
pub mod pages;
pub mod views;

pub use components::App;
