//! Platform-agnostic application core. Nothing in here renders; components
//! drive these types and turn their results into markup and notices.

pub mod capabilities;
pub mod composer;
pub mod config;
pub mod content;
pub mod error;
pub mod navigation;
pub mod platform;
pub mod session;
pub mod share;
pub mod storage;
pub mod timing;
