pub mod empty_state;
pub mod notice;
pub mod overlay;
