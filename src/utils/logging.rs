//! Conditional logging macros gated by a module-level `ENABLE_LOGS` flag.
//!
//! Every module that logs declares the flag and imports the macros from the
//! crate root:
//! ```ignore
//! const ENABLE_LOGS: bool = true;
//!
//! use crate::{log_debug, log_warn};
//!
//! log_debug!("aligned {} saccade pairs", path.len());
//! ```
//! Flipping the flag to `false` silences a noisy module without touching
//! `RUST_LOG`.

/// Debug-level logging for per-comparison detail (matrix sizes, path lengths).
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {
        if ENABLE_LOGS {
            log::debug!($($arg)*);
        }
    };
}

/// Info-level logging for run-level progress.
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {
        if ENABLE_LOGS {
            log::info!($($arg)*);
        }
    };
}

/// Warn-level logging, e.g. for scenes skipped because a chunk is too short.
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {
        if ENABLE_LOGS {
            log::warn!($($arg)*);
        }
    };
}
