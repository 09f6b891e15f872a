//! WASM bridge for the chart hook
//! Binds server-rendered chart data to Chart.js through LiveView hook callbacks
//!
//! Page entry module:
//!
//! ```text
//! import Chart from "chart.js/auto";
//! import { Socket } from "phoenix";
//! import { LiveSocket } from "phoenix_live_view";
//! import init, { configure, connectLiveSocket } from "chart-hook-wasm";
//!
//! window.Chart = Chart;
//! await init();
//! configure(JSON.stringify({ logLevel: "debug" }));
//! connectLiveSocket(LiveSocket, Socket);
//! ```

use chart_hook_shared::HookConfig;
use js_sys::{Function, Object};
use wasm_bindgen::prelude::*;

pub mod adapter;
pub mod backend;
pub mod bootstrap;
pub mod chartjs;
pub mod element;
pub mod hook;
pub mod instance_manager;
pub mod logging;
pub mod wrappers;

pub use adapter::{BindingState, ChartBindingAdapter};
pub use backend::{ChartBackend, ChartHandle};
pub use element::HostElement;
pub use hook::ChartHook;

use instance_manager::InstanceManager;
use wrappers::js::to_js_error;

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn start() {
    let level = InstanceManager::with_config(|config| config.level_filter())
        .unwrap_or(log::LevelFilter::Info);
    logging::init_logging(level);
    log::debug!("Chart hook WASM bridge initialized");
}

/// Apply a JSON configuration override to bindings created from now on
#[wasm_bindgen]
pub fn configure(config_json: &str) -> Result<(), JsValue> {
    let config = HookConfig::from_json(config_json).map_err(|e| {
        log::error!("{e}");
        to_js_error(&e)
    })?;
    // Validated by from_json.
    if let Ok(level) = config.level_filter() {
        logging::init_logging(level);
    }
    log::debug!("Hook configuration updated: {config:?}");
    InstanceManager::set_config(config);
    Ok(())
}

/// Hooks object to pass as the LiveSocket `hooks` option
#[wasm_bindgen(js_name = chartHooks)]
pub fn chart_hooks() -> Result<Object, JsValue> {
    InstanceManager::with_config(bootstrap::hooks_object).map_err(|e| to_js_error(&e))
}

/// Create, connect and return the page's LiveSocket
#[wasm_bindgen(js_name = connectLiveSocket)]
pub fn connect_live_socket(live_socket_class: &Function, socket_class: &JsValue) -> Result<JsValue, JsValue> {
    let config = InstanceManager::with_config(HookConfig::clone);
    bootstrap::connect_live_socket(live_socket_class, socket_class, &config).map_err(|e| {
        log::error!("LiveSocket bootstrap failed: {e}");
        to_js_error(&e)
    })
}

/// Number of currently mounted chart bindings
#[wasm_bindgen(js_name = mountedChartCount)]
pub fn mounted_chart_count() -> usize {
    InstanceManager::instance_count()
}
