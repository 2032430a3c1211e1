//! Shared UI crate for Counselboard. The data pipeline and the dashboard
//! views live here; `web` and `desktop` are thin launchers around them.

pub mod core;
pub mod dashboard;
pub mod views;
