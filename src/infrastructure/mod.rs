//! Infrastructure layer for time and filesystem interactions.
//!
//! This module holds the environment-facing primitives the rest of the crate
//! receives by injection: the clock driving the debounce timer and the
//! platform paths for configuration and log files.

pub mod clock;
pub mod paths;

pub use clock::{Clock, ManualClock, SystemClock};
pub use paths::{expand_tilde, get_data_dir};
