//! Logger and panic hook setup

use std::sync::Once;

static INIT: Once = Once::new();

/// Install the logger once, then apply `level` on every call
pub fn init_logging(level: log::LevelFilter) {
    INIT.call_once(|| {
        cfg_if::cfg_if! {
            if #[cfg(target_arch = "wasm32")] {
                std::panic::set_hook(Box::new(console_error_panic_hook::hook));
                // Another module on the page may already own the logger.
                let _ = console_log::init_with_level(log::Level::Trace);
            } else {
                let _ = env_logger::Builder::new()
                    .filter_level(log::LevelFilter::Trace)
                    .try_init();
            }
        }
    });
    log::set_max_level(level);
}
