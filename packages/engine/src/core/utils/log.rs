//! Console logging macros
//!
//! wasm32: forwards to `web_sys::console` (shows up in the browser devtools)
//! native: stderr in debug builds, silent in release
//!
//! Usage:
//! ```rust
//! use pixelgrid_engine::console_log;
//!
//! let (w, h) = (1920.0, 1080.0);
//! console_log!("Canvas size: {} {}", w, h);
//! ```

/// Log an informational line, `format!` syntax
#[macro_export]
macro_rules! console_log {
    ($($arg:tt)*) => {
        $crate::core::utils::log::log(&format!($($arg)*))
    };
}

/// Log a warning line, `format!` syntax
#[macro_export]
macro_rules! console_warn {
    ($($arg:tt)*) => {
        $crate::core::utils::log::warn(&format!($($arg)*))
    };
}

#[doc(hidden)]
pub fn log(message: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::console::log_1(&wasm_bindgen::JsValue::from_str(message));
    }
    #[cfg(all(not(target_arch = "wasm32"), debug_assertions))]
    {
        eprintln!("{message}");
    }
    #[cfg(all(not(target_arch = "wasm32"), not(debug_assertions)))]
    {
        let _ = message;
    }
}

#[doc(hidden)]
pub fn warn(message: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::console::warn_1(&wasm_bindgen::JsValue::from_str(message));
    }
    #[cfg(all(not(target_arch = "wasm32"), debug_assertions))]
    {
        eprintln!("warning: {message}");
    }
    #[cfg(all(not(target_arch = "wasm32"), not(debug_assertions)))]
    {
        let _ = message;
    }
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_log_macros_accept_format_args() {
        let size = (640.0, 480.0);
        console_log!("Canvas size: {} {}", size.0, size.1);
        console_warn!("rejected config: {}", "grid_size must be >= 1");
    }
}
