//! Logging utilities
//!
//! Consistent `info!`/`warn!` lines for the parse and check stages.

pub mod log;

pub use self::log::{
    log_duplicate_record, log_lossy_decode, log_parse_complete, log_parse_start, log_run_complete,
};
