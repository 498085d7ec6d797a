/// Development console logging
///
/// The `log!` macro prints informational messages and is compiled out of
/// release builds unless the `console_logging` feature is enabled. Errors go
/// through `leptos::logging::error!` in every build.
///
/// Output goes to the browser console on wasm and to stdout elsewhere, so code
/// that logs can still run under native unit tests.
///
/// # Examples
///
/// ```rust
/// dc_map::log!("Markers built: {}", 12);
/// ```
#[macro_export]
macro_rules! log {
    ($($arg:expr),+ $(,)?) => {
        #[cfg(any(debug_assertions, feature = "console_logging"))]
        {
            leptos::logging::log!($($arg),+);
        }
    };
}

pub use log;
