//! JavaScript-facing hook object
//!
//! One `ChartHook` is created per mounted element. LiveView calls back into
//! it on `updated` and `destroyed`; the adapter doing the work lives in the
//! [`InstanceManager`] under the hook's id.

use uuid::Uuid;
use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::instance_manager::InstanceManager;

#[wasm_bindgen]
pub struct ChartHook {
    instance_id: Uuid,
    element: Element,
}

#[wasm_bindgen]
impl ChartHook {
    /// Bind to `element` and render its chart
    #[wasm_bindgen(constructor)]
    pub fn new(element: Element) -> ChartHook {
        let instance_id = InstanceManager::create_instance();
        InstanceManager::with_instance_mut(&instance_id, |instance| instance.on_attach(&element));
        ChartHook {
            instance_id,
            element,
        }
    }

    /// Rebuild the chart from the element's current data
    #[wasm_bindgen]
    pub fn updated(&self) {
        let element = &self.element;
        if InstanceManager::with_instance_mut(&self.instance_id, |instance| instance.on_update(element))
            .is_none()
        {
            log::warn!("ChartHook {} updated after destroy; ignoring", self.instance_id);
        }
    }

    /// Tear the chart down and forget the binding
    #[wasm_bindgen]
    pub fn destroyed(&self) {
        if let Some(mut instance) = InstanceManager::remove_instance(&self.instance_id) {
            instance.on_detach(&self.element);
        }
    }

    #[wasm_bindgen(js_name = hasChart)]
    pub fn has_chart(&self) -> bool {
        InstanceManager::with_instance(&self.instance_id, |instance| instance.has_instance())
            .unwrap_or(false)
    }

    /// Serialized error of the last failed render, if any
    #[wasm_bindgen(js_name = lastError)]
    pub fn last_error(&self) -> Option<String> {
        InstanceManager::with_instance(&self.instance_id, |instance| {
            instance.last_error().map(|err| err.to_json())
        })
        .flatten()
    }

    #[wasm_bindgen(js_name = instanceId)]
    pub fn instance_id(&self) -> String {
        self.instance_id.to_string()
    }
}

impl Drop for ChartHook {
    fn drop(&mut self) {
        // Freed from JS without a `destroyed` callback.
        InstanceManager::remove_instance(&self.instance_id);
    }
}
