//! Safe instance management for chart bindings
//! Thread-local storage for the adapters behind mounted hooks

use std::cell::RefCell;
use std::collections::HashMap;
use uuid::Uuid;

use chart_hook_shared::HookConfig;

use crate::adapter::ChartBindingAdapter;
use crate::chartjs::ChartJsBackend;

/// Adapter bound to one mounted hook
pub type ChartInstance = ChartBindingAdapter<ChartJsBackend>;

// Thread-local storage for chart bindings and the active configuration
thread_local! {
    static CHART_INSTANCES: RefCell<HashMap<Uuid, ChartInstance>> = RefCell::new(HashMap::new());
    static ACTIVE_CONFIG: RefCell<HookConfig> = RefCell::new(HookConfig::default());
}

/// Manages chart bindings without global mutable state
pub struct InstanceManager;

impl InstanceManager {
    /// Register a new binding and return its ID
    pub fn create_instance() -> Uuid {
        let id = Uuid::new_v4();
        let instance = Self::with_config(|config| ChartBindingAdapter::new(ChartJsBackend, config));

        CHART_INSTANCES.with(|instances| {
            instances.borrow_mut().insert(id, instance);
        });

        id
    }

    /// Get a reference to a binding
    pub fn with_instance<F, R>(id: &Uuid, f: F) -> Option<R>
    where
        F: FnOnce(&ChartInstance) -> R,
    {
        CHART_INSTANCES.with(|instances| instances.borrow().get(id).map(f))
    }

    /// Get a mutable reference to a binding
    pub fn with_instance_mut<F, R>(id: &Uuid, f: F) -> Option<R>
    where
        F: FnOnce(&mut ChartInstance) -> R,
    {
        CHART_INSTANCES.with(|instances| instances.borrow_mut().get_mut(id).map(f))
    }

    /// Check if a binding exists
    pub fn instance_exists(id: &Uuid) -> bool {
        CHART_INSTANCES.with(|instances| instances.borrow().contains_key(id))
    }

    /// Remove a binding
    pub fn remove_instance(id: &Uuid) -> Option<ChartInstance> {
        CHART_INSTANCES.with(|instances| instances.borrow_mut().remove(id))
    }

    /// Get the number of mounted bindings
    pub fn instance_count() -> usize {
        CHART_INSTANCES.with(|instances| instances.borrow().len())
    }

    /// Drop all bindings, destroying their charts
    pub fn clear_all() {
        // Take the map out first so chart teardown runs without the borrow held.
        let drained = CHART_INSTANCES.with(|instances| std::mem::take(&mut *instances.borrow_mut()));
        drop(drained);
    }

    /// Replace the configuration used by bindings created from now on
    pub fn set_config(config: HookConfig) {
        ACTIVE_CONFIG.with(|active| *active.borrow_mut() = config);
    }

    pub fn with_config<F, R>(f: F) -> R
    where
        F: FnOnce(&HookConfig) -> R,
    {
        ACTIVE_CONFIG.with(|active| f(&active.borrow()))
    }
}
