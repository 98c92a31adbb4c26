//! recstat command-line support - configuration, logging and environment checks.
//!
//! Separated from main.rs so the pieces can be tested on their own.

pub mod config;
pub mod helper;
pub mod logging;
