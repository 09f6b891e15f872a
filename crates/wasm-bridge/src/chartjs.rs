//! Chart.js rendering backend
//!
//! Binds the global `Chart` constructor exposed by `chart.js/auto`. The page
//! entry module is expected to make it available as `window.Chart`.

use chart_hook_shared::{ChartConfiguration, HookError, HookResult};
use serde::Serialize;
use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::backend::{ChartBackend, ChartHandle};
use crate::wrappers::js::js_error_message;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_name = Chart)]
    pub type JsChart;

    #[wasm_bindgen(constructor, js_class = "Chart", catch)]
    fn new(item: &Element, config: &JsValue) -> Result<JsChart, JsValue>;

    #[wasm_bindgen(method, catch, js_class = "Chart")]
    fn destroy(this: &JsChart) -> Result<(), JsValue>;
}

/// Serialize a configuration document into a plain JavaScript object
pub fn config_to_js(config: &ChartConfiguration) -> HookResult<JsValue> {
    let serializer = serde_wasm_bindgen::Serializer::json_compatible();
    config
        .serialize(&serializer)
        .map_err(|e| HookError::JsInterop {
            message: format!("Failed to convert chart configuration: {e}"),
        })
}

/// A Chart.js chart bound to one element
pub struct ChartJsInstance {
    chart: JsChart,
    series_count: usize,
    label_count: usize,
}

impl ChartHandle for ChartJsInstance {
    fn series_count(&self) -> usize {
        self.series_count
    }

    fn label_count(&self) -> usize {
        self.label_count
    }

    fn destroy(self) {
        // A throw must not unwind through the registry borrow.
        if let Err(err) = self.chart.destroy() {
            log::error!("Chart.destroy() threw: {}", js_error_message(&err));
        }
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct ChartJsBackend;

impl ChartBackend for ChartJsBackend {
    type Element = Element;
    type Instance = ChartJsInstance;

    fn create(&mut self, element: &Element, config: &ChartConfiguration) -> HookResult<ChartJsInstance> {
        let js_config = config_to_js(config)?;
        let chart = JsChart::new(element, &js_config).map_err(|err| HookError::Backend {
            message: format!("new Chart() threw: {}", js_error_message(&err)),
        })?;

        Ok(ChartJsInstance {
            chart,
            series_count: config.series_count(),
            label_count: config.label_count(),
        })
    }
}
