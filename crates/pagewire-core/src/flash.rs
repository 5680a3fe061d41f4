//! Transient auto-dismiss items (flash messages).

use crate::view::PageView;

/// Delay before a flash message starts hiding, in milliseconds.
pub const FLASH_HIDE_DELAY_MS: u32 = 3000;

/// Class that triggers the hide animation.
pub const HIDE_CLASS: &str = "hide";

/// Lifecycle phase of a flash message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashPhase {
    /// On screen, timer pending.
    Visible,
    /// Hide animation running.
    Hiding,
    /// Detached from the page.
    Removed,
}

/// One-shot controller for a single flash message.
///
/// The adapter owns the delay timer and the animation-completion
/// listener; this type only sequences the phases. Each message is
/// independent: N messages get N controllers and N timers.
#[derive(Debug, Clone)]
pub struct FlashMessage<N> {
    node: N,
    phase: FlashPhase,
}

impl<N: Clone + PartialEq> FlashMessage<N> {
    /// Wrap a visible message node.
    pub fn new(node: N) -> Self {
        Self {
            node,
            phase: FlashPhase::Visible,
        }
    }

    /// Get the current lifecycle phase.
    pub fn phase(&self) -> FlashPhase {
        self.phase
    }

    /// Start the hide animation. No-op unless still visible.
    pub fn begin_hide<V: PageView<Node = N>>(&mut self, view: &mut V) {
        if self.phase != FlashPhase::Visible {
            return;
        }
        self.phase = FlashPhase::Hiding;
        view.set_class(&self.node, HIDE_CLASS, true);
        log::debug!("flash message hiding");
    }

    /// Remove the message once its hide animation has finished.
    ///
    /// Completion events that arrive before the hide started (an entry
    /// animation) or after removal (a repeated event) are no-ops, so
    /// the node is detached at most once.
    pub fn on_animation_end<V: PageView<Node = N>>(&mut self, view: &mut V) {
        if self.phase != FlashPhase::Hiding {
            return;
        }
        self.phase = FlashPhase::Removed;
        view.remove(&self.node);
        log::debug!("flash message removed");
    }
}
