//! Keeps at most one chart alive per host element
//!
//! The view framework drives the adapter through three lifecycle callbacks.
//! Every render starts by destroying the current chart, so a failed update
//! leaves the element without a chart rather than with a stale one.

use chart_hook_shared::{ChartConfiguration, ChartSpec, HookConfig, HookError, PresentationOptions};

use crate::backend::{ChartBackend, ChartHandle};
use crate::element::HostElement;

/// Binding states of a host element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindingState {
    Unattached,
    AttachedWithInstance,
    AttachedWithoutInstance,
}

pub struct ChartBindingAdapter<B: ChartBackend> {
    backend: B,
    data_attribute: String,
    presentation: PresentationOptions,
    attached: bool,
    instance: Option<B::Instance>,
    last_error: Option<HookError>,
    render_count: u64,
}

impl<B: ChartBackend> ChartBindingAdapter<B> {
    pub fn new(backend: B, config: &HookConfig) -> Self {
        Self {
            backend,
            data_attribute: config.data_attribute.clone(),
            presentation: config.presentation.clone(),
            attached: false,
            instance: None,
            last_error: None,
            render_count: 0,
        }
    }

    /// Element was inserted into the page
    pub fn on_attach(&mut self, element: &B::Element) {
        log::info!("ChartHook mounted on #{}", element.element_id());
        if self.attached {
            log::warn!("ChartHook attached twice; rebuilding chart");
        }
        self.attached = true;
        self.render(element);
    }

    /// Server pushed new content into the element
    pub fn on_update(&mut self, element: &B::Element) {
        log::info!("ChartHook updated on #{}", element.element_id());
        if !self.attached {
            log::warn!("ChartHook updated before mount; treating as mount");
            self.attached = true;
        }
        self.render(element);
    }

    /// Element was removed from the page
    pub fn on_detach(&mut self, element: &B::Element) {
        log::info!("ChartHook destroyed on #{}", element.element_id());
        self.dispose();
        self.attached = false;
    }

    pub fn state(&self) -> BindingState {
        match (self.attached, self.instance.is_some()) {
            (false, _) => BindingState::Unattached,
            (true, true) => BindingState::AttachedWithInstance,
            (true, false) => BindingState::AttachedWithoutInstance,
        }
    }

    pub fn has_instance(&self) -> bool {
        self.instance.is_some()
    }

    pub fn instance(&self) -> Option<&B::Instance> {
        self.instance.as_ref()
    }

    /// Error from the most recent render attempt, cleared by a successful one
    pub fn last_error(&self) -> Option<&HookError> {
        self.last_error.as_ref()
    }

    /// Charts created over the adapter's lifetime
    pub fn render_count(&self) -> u64 {
        self.render_count
    }

    /// Attribute the chart payload is read from
    pub fn data_attribute(&self) -> &str {
        &self.data_attribute
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    fn render(&mut self, element: &B::Element) {
        // Release before reacquire, on every path.
        self.dispose();

        match self.build(element) {
            Ok(instance) => {
                log::debug!(
                    "Rendered line chart on #{}: {} labels, {} series",
                    element.element_id(),
                    instance.label_count(),
                    instance.series_count()
                );
                self.instance = Some(instance);
                self.last_error = None;
                self.render_count += 1;
            }
            Err(err) => {
                log::error!(
                    "ChartHook [{}] on #{}: {}",
                    err.kind(),
                    element.element_id(),
                    err
                );
                self.last_error = Some(err);
            }
        }
    }

    fn build(&mut self, element: &B::Element) -> Result<B::Instance, HookError> {
        let raw = element.attribute(&self.data_attribute);
        let spec = ChartSpec::from_attribute(raw.as_deref(), &self.data_attribute)?;
        let config = ChartConfiguration::line(&spec, &self.presentation);
        self.backend.create(element, &config)
    }

    fn dispose(&mut self) {
        if let Some(instance) = self.instance.take() {
            instance.destroy();
        }
    }
}

impl<B: ChartBackend> Drop for ChartBindingAdapter<B> {
    fn drop(&mut self) {
        self.dispose();
    }
}
