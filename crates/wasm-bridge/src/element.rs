//! Host element abstraction
//!
//! The adapter only needs two things from the DOM node it is bound to: a name
//! for log lines and the raw value of one attribute.

/// The DOM node a chart binding is attached to
pub trait HostElement {
    /// Identifier used in log lines, empty when the node has no id
    fn element_id(&self) -> String;

    /// Raw value of `name`, `None` when the attribute is absent
    fn attribute(&self, name: &str) -> Option<String>;
}

impl HostElement for web_sys::Element {
    fn element_id(&self) -> String {
        self.id()
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.get_attribute(name)
    }
}
