#![deny(missing_docs)]
//! Shared logging utilities for the tip workspace.
//!
//! This crate provides the `tip_*` logging macros used across the codebase
//! and a minimal test initializer for the global logger. Every macro prefixes
//! the sequence number of the message the controller is currently applying.
//! The number is thread-local: lines logged while the controller dispatches
//! (core, effects, surface) share it, while the bridge and terminal-input
//! threads never set one and log `[#0]`.

use std::cell::Cell;

thread_local! {
    /// Sequence number of the message being applied on this thread.
    static MSG_SEQ: Cell<u64> = const { Cell::new(0) };
}

/// Sets the message sequence number for the current thread.
/// The controller calls this once per dispatched message.
pub fn set_msg_seq(seq: u64) {
    MSG_SEQ.with(|v| v.set(seq));
}

/// Retrieves the message sequence number for the current thread.
/// Returns 0 outside the controller loop.
pub fn msg_seq() -> u64 {
    MSG_SEQ.with(|v| v.get())
}

/// Logs a trace-level message using the global logging facade.
#[macro_export]
macro_rules! tip_trace {
    ($($arg:tt)*) => {{
        log::trace!("[#{}] {}", $crate::msg_seq(), format_args!($($arg)*));
    }};
}

/// Logs a debug-level message using the global logging facade.
#[macro_export]
macro_rules! tip_debug {
    ($($arg:tt)*) => {{
        log::debug!("[#{}] {}", $crate::msg_seq(), format_args!($($arg)*));
    }};
}

/// Logs an info-level message using the global logging facade.
#[macro_export]
macro_rules! tip_info {
    ($($arg:tt)*) => {{
        log::info!("[#{}] {}", $crate::msg_seq(), format_args!($($arg)*));
    }};
}

/// Logs a warn-level message using the global logging facade.
#[macro_export]
macro_rules! tip_warn {
    ($($arg:tt)*) => {{
        log::warn!("[#{}] {}", $crate::msg_seq(), format_args!($($arg)*));
    }};
}

/// Logs an error-level message using the global logging facade.
#[macro_export]
macro_rules! tip_error {
    ($($arg:tt)*) => {{
        log::error!("[#{}] {}", $crate::msg_seq(), format_args!($($arg)*));
    }};
}

/// Initializes a simple terminal logger for use in tests.
///
/// This safely no-ops if another logger has already been initialized.
pub fn initialize_for_tests() {
    use simplelog::{ColorChoice, CombinedLogger, Config, TermLogger, TerminalMode};

    let level = if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    // Another test may already own the global logger.
    let _ = CombinedLogger::init(vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]);
}
