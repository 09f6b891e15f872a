//! Rendering backend seam
//!
//! The adapter never talks to a charting library directly. A backend turns a
//! [`ChartConfiguration`] into a live instance bound to an element, and the
//! instance releases its resources when destroyed.

use chart_hook_shared::{ChartConfiguration, HookResult};

use crate::element::HostElement;

/// A live chart owned by exactly one adapter
pub trait ChartHandle {
    /// Number of series the chart was built with
    fn series_count(&self) -> usize;

    /// Number of x-axis categories the chart was built with
    fn label_count(&self) -> usize;

    /// Release the chart. Consumes the handle so it cannot be used afterwards.
    fn destroy(self);
}

/// Creates chart instances for one kind of host element
pub trait ChartBackend {
    type Element: HostElement + ?Sized;
    type Instance: ChartHandle;

    fn create(
        &mut self,
        element: &Self::Element,
        config: &ChartConfiguration,
    ) -> HookResult<Self::Instance>;
}
