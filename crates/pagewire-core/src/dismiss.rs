//! Outside-click dismissible widgets (modal dialog, profile dropdown).

use crate::view::PageView;

/// How a dismissible widget renders its open flag.
#[derive(Debug, Clone, PartialEq)]
pub enum Appearance {
    /// Toggle a named class on the root (dropdown menus).
    Class(String),
    /// Flip the root's display between shown and hidden (modal dialogs).
    Display,
}

/// Open/closed widget dismissed by clicks outside its subtree.
///
/// The global click handler uses containment, not identity: a click on
/// any descendant of the root (or of the opening trigger, so the click
/// that opens the widget cannot immediately dismiss it) leaves the
/// state untouched.
#[derive(Debug, Clone)]
pub struct Dismissible<N> {
    /// Root of the widget's subtree.
    root: N,
    /// Element whose clicks count as inside even when outside the root.
    trigger: Option<N>,
    appearance: Appearance,
    /// Clear the location's query string on every open -> closed edge.
    clear_query_on_close: bool,
    open: bool,
}

impl<N: Clone + PartialEq> Dismissible<N> {
    /// Create a closed widget over `root`.
    pub fn new(root: N, appearance: Appearance) -> Self {
        Self {
            root,
            trigger: None,
            appearance,
            clear_query_on_close: false,
            open: false,
        }
    }

    /// Treat clicks inside `trigger` as inside the widget.
    pub fn with_trigger(mut self, trigger: N) -> Self {
        self.trigger = Some(trigger);
        self
    }

    /// Clear the location's query string whenever the widget closes.
    pub fn with_query_clear(mut self) -> Self {
        self.clear_query_on_close = true;
        self
    }

    /// Check if the widget is currently open.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Open the widget and apply the visible representation.
    pub fn open<V: PageView<Node = N>>(&mut self, view: &mut V) {
        if self.open {
            return;
        }
        self.open = true;
        self.apply(view);
        log::debug!("dismissible opened");
    }

    /// Close the widget, apply the hidden representation, and clear the
    /// query string if configured.
    pub fn close<V: PageView<Node = N>>(&mut self, view: &mut V) {
        if !self.open {
            return;
        }
        self.open = false;
        self.apply(view);
        if self.clear_query_on_close {
            view.clear_query();
        }
        log::debug!("dismissible closed");
    }

    /// Flip between open and closed.
    pub fn toggle<V: PageView<Node = N>>(&mut self, view: &mut V) {
        if self.open {
            self.close(view);
        } else {
            self.open(view);
        }
    }

    /// Dismiss on a click whose target lies outside the widget.
    ///
    /// Returns true iff this click closed the widget.
    pub fn on_global_click<V: PageView<Node = N>>(&mut self, view: &mut V, target: &N) -> bool {
        if !self.open {
            return false;
        }
        if view.contains(&self.root, target) {
            return false;
        }
        if let Some(trigger) = &self.trigger {
            if view.contains(trigger, target) {
                return false;
            }
        }
        self.close(view);
        true
    }

    /// Repaint the root from the current open flag.
    fn apply<V: PageView<Node = N>>(&self, view: &mut V) {
        match &self.appearance {
            Appearance::Class(class) => view.set_class(&self.root, class, self.open),
            Appearance::Display => view.set_shown(&self.root, self.open),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakePage;

    const ROOT: u32 = 1;
    const CHILD: u32 = 2;
    const TRIGGER: u32 = 3;
    const OUTSIDE: u32 = 9;

    fn page() -> FakePage {
        let mut page = FakePage::new();
        page.add_child(ROOT, CHILD);
        page
    }

    fn modal() -> Dismissible<u32> {
        Dismissible::new(ROOT, Appearance::Display)
            .with_trigger(TRIGGER)
            .with_query_clear()
    }

    #[test]
    fn test_open_shows_root() {
        let mut page = page();
        let mut modal = modal();

        assert!(!modal.is_open());
        modal.open(&mut page);
        assert!(modal.is_open());
        assert!(page.is_shown(ROOT));
    }

    #[test]
    fn test_inside_click_keeps_open() {
        let mut page = page();
        let mut modal = modal();
        modal.open(&mut page);

        assert!(!modal.on_global_click(&mut page, &ROOT));
        assert!(!modal.on_global_click(&mut page, &CHILD));
        assert!(modal.is_open());
        assert!(page.is_shown(ROOT));
    }

    #[test]
    fn test_trigger_click_keeps_open() {
        let mut page = page();
        let mut modal = modal();
        modal.open(&mut page);

        assert!(!modal.on_global_click(&mut page, &TRIGGER));
        assert!(modal.is_open());
    }

    #[test]
    fn test_outside_click_closes_exactly_once() {
        let mut page = page();
        let mut modal = modal();
        modal.open(&mut page);

        assert!(modal.on_global_click(&mut page, &OUTSIDE));
        assert!(!modal.is_open());
        assert!(!page.is_shown(ROOT));
        assert_eq!(page.query_clears(), 1);

        // Widget is already closed; further clicks change nothing.
        assert!(!modal.on_global_click(&mut page, &OUTSIDE));
        assert_eq!(page.query_clears(), 1);
    }

    #[test]
    fn test_outside_click_while_closed_is_noop() {
        let mut page = page();
        let mut modal = modal();

        assert!(!modal.on_global_click(&mut page, &OUTSIDE));
        assert!(!modal.is_open());
        assert_eq!(page.query_clears(), 0);
    }

    #[test]
    fn test_class_appearance_toggles_class() {
        let mut page = page();
        let mut menu = Dismissible::new(ROOT, Appearance::Class("active".to_string()))
            .with_trigger(TRIGGER);

        menu.toggle(&mut page);
        assert!(menu.is_open());
        assert!(page.has_class(ROOT, "active"));

        menu.toggle(&mut page);
        assert!(!menu.is_open());
        assert!(!page.has_class(ROOT, "active"));
    }

    #[test]
    fn test_dropdown_close_never_clears_query() {
        let mut page = page();
        let mut menu = Dismissible::new(ROOT, Appearance::Class("active".to_string()));

        menu.open(&mut page);
        assert!(menu.on_global_click(&mut page, &OUTSIDE));
        assert_eq!(page.query_clears(), 0);
    }

    #[test]
    fn test_reopen_after_dismiss() {
        let mut page = page();
        let mut modal = modal();

        modal.open(&mut page);
        modal.on_global_click(&mut page, &OUTSIDE);
        modal.open(&mut page);
        assert!(modal.is_open());
        assert!(page.is_shown(ROOT));
    }
}
