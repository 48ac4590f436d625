//! Fullscreen coordinator: native custom view vs. CSS-simulated fullscreen.
//!
//! DESIGN
//! ======
//! The renderer offers a native fullscreen surface through a show callback
//! that hands over the view and a dismissal handle. That handle is captured
//! in the `NativeCustomView` state and invoked exactly once, whichever way the
//! state is left (renderer hide callback or back gesture). Only one native
//! surface is ever held: a second offer is dismissed on the spot.
//!
//! Simulated fullscreen is purely a page-side styling trick, so its state
//! follows the bridge's `"entered"` / `"exited"` replies.

#[cfg(test)]
#[path = "fullscreen_test.rs"]
mod fullscreen_test;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::bridge::BridgeReply;

/// Host-side identifier of a native fullscreen view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ViewId(pub u64);

/// Callback telling the content its native fullscreen has ended.
pub type DismissFn = Box<dyn FnOnce()>;

/// A captured native fullscreen view.
pub struct NativeView {
    pub id: ViewId,
    dismiss: Option<DismissFn>,
}

impl NativeView {
    #[must_use]
    pub fn new(id: ViewId, dismiss: DismissFn) -> Self {
        Self { id, dismiss: Some(dismiss) }
    }

    fn dismiss(mut self) -> ViewId {
        if let Some(dismiss) = self.dismiss.take() {
            dismiss();
        }
        self.id
    }
}

impl fmt::Debug for NativeView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NativeView")
            .field("id", &self.id)
            .field("dismiss_pending", &self.dismiss.is_some())
            .finish()
    }
}

/// Which fullscreen presentation is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FullscreenMode {
    #[default]
    Normal,
    NativeCustomView,
    SimulatedCssFullscreen,
}

#[derive(Debug, Default)]
enum FullscreenState {
    #[default]
    Normal,
    NativeCustomView(NativeView),
    SimulatedCssFullscreen,
}

/// Outcome of a native show offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShowOutcome {
    /// The view was captured; the host should attach it full-window.
    Presented(ViewId),
    /// A native view was already showing; the offered one was dismissed.
    Rejected(ViewId),
}

/// What a back gesture resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackOutcome {
    /// Native fullscreen was dismissed; the host should detach this view.
    ExitedFullscreen(ViewId),
    /// Navigate the content's history back.
    NavigateBack,
    /// Nothing to go back to; end the session.
    Finish,
}

#[derive(Debug, Default)]
pub struct FullscreenCoordinator {
    state: FullscreenState,
}

impl FullscreenCoordinator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn mode(&self) -> FullscreenMode {
        match self.state {
            FullscreenState::Normal => FullscreenMode::Normal,
            FullscreenState::NativeCustomView(_) => FullscreenMode::NativeCustomView,
            FullscreenState::SimulatedCssFullscreen => FullscreenMode::SimulatedCssFullscreen,
        }
    }

    /// The captured native view, if one is showing.
    #[must_use]
    pub fn native_view(&self) -> Option<ViewId> {
        match &self.state {
            FullscreenState::NativeCustomView(view) => Some(view.id),
            _ => None,
        }
    }

    /// Renderer asked to show a native fullscreen view.
    pub fn show_native(&mut self, view: NativeView) -> ShowOutcome {
        if let FullscreenState::NativeCustomView(current) = &self.state {
            tracing::warn!(current = current.id.0, offered = view.id.0, "native view already showing; dismissing offer");
            return ShowOutcome::Rejected(view.dismiss());
        }
        let id = view.id;
        tracing::info!(view = id.0, from = ?self.mode(), "entering native fullscreen");
        self.state = FullscreenState::NativeCustomView(view);
        ShowOutcome::Presented(id)
    }

    /// Leave native fullscreen, invoking the captured dismissal handle.
    ///
    /// Returns the view the host should detach, or `None` if no native view
    /// was showing.
    pub fn hide_native(&mut self) -> Option<ViewId> {
        match std::mem::take(&mut self.state) {
            FullscreenState::NativeCustomView(view) => {
                let id = view.dismiss();
                tracing::info!(view = id.0, "left native fullscreen");
                Some(id)
            }
            other => {
                self.state = other;
                None
            }
        }
    }

    /// Resolve a back gesture.
    pub fn back(&mut self, can_go_back: bool) -> BackOutcome {
        if let Some(id) = self.hide_native() {
            return BackOutcome::ExitedFullscreen(id);
        }
        if can_go_back { BackOutcome::NavigateBack } else { BackOutcome::Finish }
    }

    /// Whether a `ToggleFullscreen` command should reach the bridge.
    ///
    /// While the native surface is up the page cannot be restyled underneath it.
    #[must_use]
    pub fn accepts_toggle(&self) -> bool {
        !matches!(self.state, FullscreenState::NativeCustomView(_))
    }

    /// Apply a `toggleFullscreenTarget` reply. Returns `true` if the mode changed.
    pub fn apply_toggle_reply(&mut self, reply: BridgeReply) -> bool {
        let next = match (&self.state, reply) {
            (FullscreenState::Normal, BridgeReply::Entered) => FullscreenState::SimulatedCssFullscreen,
            (FullscreenState::SimulatedCssFullscreen, BridgeReply::Exited) => FullscreenState::Normal,
            _ => return false,
        };
        self.state = next;
        tracing::info!(mode = ?self.mode(), "simulated fullscreen toggled");
        true
    }

    /// A new document replaced the page; any simulated marker went with it.
    pub fn on_document_replaced(&mut self) {
        if matches!(self.state, FullscreenState::SimulatedCssFullscreen) {
            self.state = FullscreenState::Normal;
            tracing::debug!("document replaced; simulated fullscreen cleared");
        }
    }
}
