//! Core module - configuration and the script runner
//!
//! - [`Config`] - editor configuration
//! - [`run_script`] - replay actions, then submit

pub mod config;
pub mod runner;

pub use config::Config;
pub use runner::{RunOutput, load_actions, run_script};
