//! Shared types for the recstat daemon status reporter.

mod phase;
mod policy;
mod progress;
mod report;

pub use phase::*;
pub use policy::*;
pub use progress::*;
pub use report::*;
