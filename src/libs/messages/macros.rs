//! Output macros for application messages.
//!
//! Every macro checks debug mode once per process and routes accordingly:
//!
//! ```text
//! msg_info!(...) ──▶ WORKHOURS_DEBUG set? ──▶ tracing::info!
//!                                      └──▶ println!
//! ```
//!
//! `RUST_LOG` only tunes the tracing filter. It never reroutes command
//! output, so `RUST_LOG=warn` still prints results to stdout.
//!
//! - **`msg_print!`**: plain message
//! - **`msg_success!`**, **`msg_info!`**, **`msg_warning!`**: prefixed messages
//! - **`msg_debug!`**: debug mode only
//! - **`msg_error_anyhow!`** / **`msg_bail_anyhow!`**: build or return an `anyhow::Error`
//!
//! ```rust
//! use workhours::{msg_info, msg_success};
//! use workhours::libs::messages::Message;
//!
//! msg_success!(Message::ConfigSaved);
//! msg_info!(Message::WorkingDaysResult(5), true);
//! ```

use std::ffi::OsString;
use std::sync::OnceLock;

pub const DEBUG_ENV_VAR: &str = "WORKHOURS_DEBUG";

static DEBUG_MODE: OnceLock<bool> = OnceLock::new();

/// Whether output should go through `tracing`. Read once, then cached.
#[doc(hidden)]
pub fn is_debug_mode() -> bool {
    *DEBUG_MODE.get_or_init(|| debug_mode_from(|key| std::env::var_os(key)))
}

/// Debug mode as decided by `lookup`, an environment reader.
pub fn debug_mode_from<F>(lookup: F) -> bool
where
    F: Fn(&str) -> Option<OsString>,
{
    lookup(DEBUG_ENV_VAR).is_some()
}

#[macro_export]
macro_rules! msg_print {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("{}", $msg);
        } else {
            println!("{}", $msg);
        }
    };
    ($msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("\n{}\n", $msg);
        } else {
            println!("\n{}\n", $msg);
        }
    };
}

#[macro_export]
macro_rules! msg_success {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("✅ {}", $msg);
        } else {
            println!("✅ {}", $msg);
        }
    };
    ($msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("\n✅ {}\n", $msg);
        } else {
            println!("\n✅ {}\n", $msg);
        }
    };
}

#[macro_export]
macro_rules! msg_warning {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::warn!("⚠️ {}", $msg);
        } else {
            println!("⚠️ {}", $msg);
        }
    };
}

#[macro_export]
macro_rules! msg_info {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("ℹ️ {}", $msg);
        } else {
            println!("ℹ️ {}", $msg);
        }
    };
    ($msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("\nℹ️ {}\n", $msg);
        } else {
            println!("\nℹ️ {}\n", $msg);
        }
    };
}

#[macro_export]
macro_rules! msg_debug {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::debug!("🔍 {}", $msg);
        }
    };
}

#[macro_export]
macro_rules! msg_error_anyhow {
    ($msg:expr) => {
        anyhow::anyhow!("❌ {}", $msg)
    };
}

#[macro_export]
macro_rules! msg_bail_anyhow {
    ($msg:expr) => {
        anyhow::bail!("❌ {}", $msg)
    };
}
