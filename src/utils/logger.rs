//! Logging macros used across the crate.
//!
//! These forward to `tracing`, so whichever subscriber the application
//! installs decides formatting and filtering.

#[macro_export]
#[doc(hidden)]
macro_rules! log {
    ($($arg:tt)*) => {
        $crate::__tracing::info!($($arg)*)
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! dbg_log {
    ($($arg:tt)*) => {
        $crate::__tracing::debug!($($arg)*)
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! error_log {
    ($($arg:tt)*) => {
        $crate::__tracing::error!($($arg)*)
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! warn_log {
    ($($arg:tt)*) => {
        $crate::__tracing::warn!($($arg)*)
    };
}
