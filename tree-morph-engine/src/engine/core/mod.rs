//! Application lifecycle: plugin registration, window configuration, and the
//! loading-to-running state machine.

pub mod app_setup;
pub mod app_state;
pub mod window_config;
