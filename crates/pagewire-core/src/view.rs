//! Page mutation capability used by all widget controllers.

/// Handle-based view of the page a controller mutates.
///
/// Controllers never touch the document directly; every mutation goes
/// through this trait, so the same state machines run against the real
/// DOM (WASM) or an in-memory recording page (tests).
///
/// Note: implementations are expected to apply each call synchronously.
/// Controllers rely on the visible representation matching their state
/// by the time a handler returns.
pub trait PageView {
    /// Opaque node handle.
    type Node: Clone + PartialEq;

    /// Check whether `target` is `ancestor` itself or one of its descendants.
    fn contains(&self, ancestor: &Self::Node, target: &Self::Node) -> bool;

    /// Add or remove a class on a node.
    fn set_class(&mut self, node: &Self::Node, class: &str, on: bool);

    /// Show or hide a node.
    fn set_shown(&mut self, node: &Self::Node, shown: bool);

    /// Replace a node's text content.
    fn set_text(&mut self, node: &Self::Node, text: &str);

    /// Write a form field's value.
    fn set_value(&mut self, node: &Self::Node, value: &str);

    /// Point an image node at a new source URL.
    fn set_image_src(&mut self, node: &Self::Node, url: &str);

    /// Detach a node from the page.
    fn remove(&mut self, node: &Self::Node);

    /// Clear the location's query string without adding a history entry.
    fn clear_query(&mut self);
}
