//! Small crate-wide convenience macros.

/// `format!`-style logging to the browser console (stderr on host builds).
///
/// ```rust,ignore
/// console_log!("loaded {} entries", entries.len());
/// ```
#[macro_export]
macro_rules! console_log {
    ($($arg:tt)*) => {
        $crate::logging::log(&format!($($arg)*))
    };
}

/// Warning variant of [`console_log!`].
#[macro_export]
macro_rules! console_warn {
    ($($arg:tt)*) => {
        $crate::logging::warn(&format!($($arg)*))
    };
}

/// Error variant of [`console_log!`].
#[macro_export]
macro_rules! console_error {
    ($($arg:tt)*) => {
        $crate::logging::error(&format!($($arg)*))
    };
}
