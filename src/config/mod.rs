//! Configuration and constants
//!
//! Runtime settings for a single run live in [`crate::core::settings`];
//! this module only holds fixed names and defaults.

pub mod defaults;
pub mod urls;
