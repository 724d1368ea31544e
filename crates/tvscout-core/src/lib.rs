pub mod config;
pub mod detail;
pub mod error;
pub mod format;
pub mod notice;
pub mod orchestrator;
pub mod overlay;
pub mod session;
