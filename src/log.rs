//! Optional diagnostics over `esp-println`

/// Print a diagnostic line when the `esp32-log` feature is enabled
macro_rules! trace {
    ($($arg:tt)*) => {
        #[cfg(feature = "esp32-log")]
        esp_println::println!($($arg)*);
    };
}
