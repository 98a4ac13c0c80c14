//! Tab pages. Each page keeps its transient state in a plain struct next to
//! the view that renders it.

pub mod admin;
pub mod calendar;
pub mod quotes;
pub mod teacher;
pub mod videos;
