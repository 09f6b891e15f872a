//! Shared types for the chart hook
//!
//! This crate contains the data model shared by the wasm bridge and its
//! tests: the chart payload read from the host element, the configuration
//! document given to the charting library, hook configuration, and the
//! error taxonomy. Nothing here touches JavaScript.

pub mod chart_config;
pub mod chart_spec;
pub mod errors;
pub mod hook_config;

pub use chart_config::{ChartConfiguration, ChartOptions, ChartType};
pub use chart_spec::{ChartSpec, Dataset};
pub use errors::{HookError, HookResult};
pub use hook_config::{ConfigValidator, HookConfig, PresentationOptions};
