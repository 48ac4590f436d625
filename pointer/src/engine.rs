use serde::Serialize;

use crate::animator::{CursorAnimator, CursorStyle, RenderedCursor};
use crate::bridge::{BridgeCall, BridgeOp, BridgeReply, DocumentId};
use crate::config::{ActivateTarget, PointerConfig};
use crate::fullscreen::{BackOutcome, DismissFn, FullscreenCoordinator, FullscreenMode, NativeView, ShowOutcome, ViewId};
use crate::geometry::{ContentTransform, Point, Viewport};
use crate::keymap::{KeyCommand, KeyEvent};
use crate::pointer::PointerState;

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Actions returned from engine inputs for the host to carry out.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Action {
    /// Navigate the content renderer to a URL.
    LoadUrl { url: String },
    /// Run a bridge script in the current document. The completion value
    /// comes back through `on_bridge_result` tagged with `op` and `document`.
    Evaluate { op: BridgeOp, document: DocumentId, script: String },
    /// The logical pointer moved; the host should keep sampling `tick`
    /// until the glide settles.
    CursorMoved { target: Point },
    /// Attach a native fullscreen view over the whole window.
    PresentCustomView { view: ViewId },
    /// Detach a native fullscreen view.
    RemoveCustomView { view: ViewId },
    /// Navigate the content's history back.
    NavigateBack,
    /// End the session.
    Finish,
}

/// Result of one key event.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct KeyOutcome {
    /// `false` means the host should fall through to its default key handling.
    pub handled: bool,
    pub actions: Vec<Action>,
}

impl KeyOutcome {
    fn unhandled() -> Self {
        Self::default()
    }

    fn handled(actions: Vec<Action>) -> Self {
        Self { handled: true, actions }
    }
}

/// Core engine state: everything that does not need the platform host.
///
/// Separated from `Engine` so it can be driven and inspected in tests.
#[derive(Debug)]
pub struct EngineCore {
    config: PointerConfig,
    viewport: Viewport,
    transform: ContentTransform,
    pointer: PointerState,
    animator: CursorAnimator,
    fullscreen: FullscreenCoordinator,
    document: DocumentId,
}

impl Default for EngineCore {
    fn default() -> Self {
        Self::new(PointerConfig::default())
    }
}

impl EngineCore {
    #[must_use]
    pub fn new(config: PointerConfig) -> Self {
        Self {
            viewport: Viewport::default(),
            transform: ContentTransform::default(),
            pointer: PointerState::new(config.edge_margin_px),
            animator: CursorAnimator::new(config.animation_ms),
            fullscreen: FullscreenCoordinator::new(),
            document: DocumentId::default(),
            config,
        }
    }

    // --- Session ---

    /// Load the configured start page.
    #[must_use]
    pub fn start(&self) -> Vec<Action> {
        tracing::info!(url = %self.config.start_url, "starting session");
        vec![Action::LoadUrl { url: self.config.start_url.clone() }]
    }

    /// A document finished loading. Hides the page's own cursor and drops
    /// simulated fullscreen, since the new document carries no marker.
    pub fn on_page_finished(&mut self) -> Vec<Action> {
        self.document = self.document.next();
        self.fullscreen.on_document_replaced();
        vec![self.evaluate(BridgeCall::HideCursor)]
    }

    /// Wrap a bridge call for the current document.
    fn evaluate(&self, call: BridgeCall) -> Action {
        Action::Evaluate { op: call.op(), document: self.document, script: call.script() }
    }

    // --- Layout ---

    /// The container was measured. The first measured layout centers the
    /// pointer and snaps the cursor there; later ones only re-clamp.
    pub fn on_layout(&mut self, width_px: u32, height_px: u32, now_ms: f64) -> Vec<Action> {
        self.viewport = Viewport::new(width_px, height_px);
        if self.pointer.recenter(self.viewport) {
            let p = self.pointer.position();
            self.animator.snap(p);
            tracing::debug!(width_px, height_px, x = p.x, y = p.y, "pointer centered");
            return vec![Action::CursorMoved { target: p }];
        }
        if self.pointer.fit(self.viewport) {
            let p = self.pointer.position();
            self.animator.retarget(p, now_ms);
            return vec![Action::CursorMoved { target: p }];
        }
        Vec::new()
    }

    /// Set the content's device pixel ratio used to convert container
    /// coordinates before they cross into the page.
    pub fn set_device_pixel_ratio(&mut self, dpr: f64) {
        if !(dpr.is_finite() && dpr > 0.0) {
            tracing::debug!(dpr, "unusable device pixel ratio; using 1.0");
        }
        self.transform = ContentTransform::new(dpr);
    }

    // --- Keys ---

    pub fn on_key(&mut self, event: &KeyEvent, now_ms: f64) -> KeyOutcome {
        let Some(command) = self.config.keymap.map(event) else {
            tracing::debug!(code = ?event.code, action = ?event.action, "key not handled");
            return KeyOutcome::unhandled();
        };
        tracing::debug!(code = ?event.code, repeat = event.repeat_count, ?command, "key command");

        let actions = match command {
            KeyCommand::Move { .. } => {
                let (dx, dy) = command.delta().unwrap_or_default();
                self.move_by(dx, dy, now_ms)
            }
            KeyCommand::Activate => self.activate(),
            KeyCommand::ToggleFullscreen => {
                if self.fullscreen.accepts_toggle() {
                    vec![self.evaluate(BridgeCall::ToggleFullscreen)]
                } else {
                    tracing::debug!("native fullscreen showing; toggle ignored");
                    Vec::new()
                }
            }
            KeyCommand::PlayPause => vec![self.evaluate(BridgeCall::PlayPause)],
            KeyCommand::Play => vec![self.evaluate(BridgeCall::Play)],
            KeyCommand::Pause => vec![self.evaluate(BridgeCall::Pause)],
            KeyCommand::SeekForward(seconds) => vec![self.evaluate(BridgeCall::Seek { seconds })],
            KeyCommand::SeekBackward(seconds) => vec![self.evaluate(BridgeCall::Seek { seconds: -seconds })],
        };
        KeyOutcome::handled(actions)
    }

    fn move_by(&mut self, dx: f64, dy: f64, now_ms: f64) -> Vec<Action> {
        if self.viewport.is_degenerate() {
            return Vec::new();
        }
        let outcome = self.pointer.apply_move(dx, dy, self.viewport);
        self.animator.retarget(outcome.position, now_ms);

        let mut actions = vec![
            Action::CursorMoved { target: outcome.position },
            self.evaluate(BridgeCall::Move(self.transform.container_to_content(outcome.position))),
        ];
        for request in self.config.edge_scroll.requests(&outcome, dx, dy) {
            tracing::debug!(dx = request.dx, dy = request.dy, "edge scroll");
            actions.push(self.evaluate(BridgeCall::ScrollBy(request)));
        }
        actions
    }

    fn activate(&self) -> Vec<Action> {
        if self.viewport.is_degenerate() {
            return Vec::new();
        }
        let call = match self.config.activate_target {
            ActivateTarget::Pointer => BridgeCall::Click(self.transform.container_to_content(self.pointer.position())),
            ActivateTarget::Focused => BridgeCall::ClickFocused,
        };
        vec![self.evaluate(call)]
    }

    // --- Bridge replies ---

    /// Decode a finished bridge evaluation. Toggle replies from the current
    /// document drive the simulated fullscreen state; everything else is
    /// informational.
    pub fn on_bridge_result(&mut self, op: BridgeOp, document: DocumentId, raw: &str) -> BridgeReply {
        let reply = BridgeReply::parse(raw);
        tracing::debug!(?op, document = document.0, ?reply, "bridge reply");
        if op == BridgeOp::ToggleFullscreen {
            if document == self.document {
                self.fullscreen.apply_toggle_reply(reply);
            } else {
                tracing::debug!(document = document.0, current = self.document.0, "stale toggle reply dropped");
            }
        }
        reply
    }

    // --- Fullscreen ---

    /// The renderer offered a native fullscreen view.
    pub fn on_show_custom_view(&mut self, view: ViewId, dismiss: DismissFn) -> Vec<Action> {
        match self.fullscreen.show_native(NativeView::new(view, dismiss)) {
            ShowOutcome::Presented(view) => vec![Action::PresentCustomView { view }],
            ShowOutcome::Rejected(_) => Vec::new(),
        }
    }

    /// The renderer ended native fullscreen on its own.
    pub fn on_hide_custom_view(&mut self) -> Vec<Action> {
        self.fullscreen.hide_native().map(|view| Action::RemoveCustomView { view }).into_iter().collect()
    }

    /// Back gesture: leave native fullscreen first, then history, then the session.
    pub fn on_back(&mut self, can_go_back: bool) -> Vec<Action> {
        let action = match self.fullscreen.back(can_go_back) {
            BackOutcome::ExitedFullscreen(view) => Action::RemoveCustomView { view },
            BackOutcome::NavigateBack => Action::NavigateBack,
            BackOutcome::Finish => Action::Finish,
        };
        vec![action]
    }

    // --- Presentation ---

    /// Rendered cursor at `now_ms`. Call once per frame.
    #[must_use]
    pub fn tick(&self, now_ms: f64) -> RenderedCursor {
        self.animator.sample(now_ms)
    }

    /// Whether the cursor is still gliding at `now_ms`.
    #[must_use]
    pub fn is_animating(&self, now_ms: f64) -> bool {
        self.animator.is_animating(now_ms)
    }

    // --- Queries ---

    #[must_use]
    pub fn pointer(&self) -> Point {
        self.pointer.position()
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn device_pixel_ratio(&self) -> f64 {
        self.transform.dpr()
    }

    /// Generation of the document bridge scripts currently target.
    #[must_use]
    pub fn document(&self) -> DocumentId {
        self.document
    }

    #[must_use]
    pub fn fullscreen_mode(&self) -> FullscreenMode {
        self.fullscreen.mode()
    }

    #[must_use]
    pub fn cursor_style(&self) -> CursorStyle {
        self.config.cursor
    }
}

/// Platform surface the engine drives.
///
/// Implemented by the shell that owns the window and the content renderer.
pub trait Host {
    fn load_url(&mut self, url: &str);
    /// Fire-and-forget script evaluation. The completion value should be
    /// handed back to [`Engine::on_bridge_result`] with the same `op` and
    /// `document`.
    fn evaluate_script(&mut self, op: BridgeOp, document: DocumentId, script: &str);
    fn can_go_back(&self) -> bool;
    fn go_back(&mut self);
    fn present_custom_view(&mut self, view: ViewId);
    fn remove_custom_view(&mut self, view: ViewId);
    fn cursor_moved(&mut self, target: Point);
    fn finish(&mut self);
}

/// The full engine. Wraps `EngineCore` and applies its actions to a host.
pub struct Engine<H: Host> {
    host: H,
    pub core: EngineCore,
}

impl<H: Host> Engine<H> {
    #[must_use]
    pub fn new(host: H, config: PointerConfig) -> Self {
        Self { host, core: EngineCore::new(config) }
    }

    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    #[must_use]
    pub fn into_host(self) -> H {
        self.host
    }

    // --- Delegated inputs ---

    pub fn start(&mut self) {
        let actions = self.core.start();
        self.apply(actions);
    }

    pub fn on_page_finished(&mut self) {
        let actions = self.core.on_page_finished();
        self.apply(actions);
    }

    pub fn on_layout(&mut self, width_px: u32, height_px: u32, now_ms: f64) {
        let actions = self.core.on_layout(width_px, height_px, now_ms);
        self.apply(actions);
    }

    pub fn set_device_pixel_ratio(&mut self, dpr: f64) {
        self.core.set_device_pixel_ratio(dpr);
    }

    /// Returns whether the key was consumed.
    pub fn on_key(&mut self, event: &KeyEvent, now_ms: f64) -> bool {
        let KeyOutcome { handled, actions } = self.core.on_key(event, now_ms);
        self.apply(actions);
        handled
    }

    pub fn on_bridge_result(&mut self, op: BridgeOp, document: DocumentId, raw: &str) -> BridgeReply {
        self.core.on_bridge_result(op, document, raw)
    }

    pub fn on_show_custom_view(&mut self, view: ViewId, dismiss: DismissFn) {
        let actions = self.core.on_show_custom_view(view, dismiss);
        self.apply(actions);
    }

    pub fn on_hide_custom_view(&mut self) {
        let actions = self.core.on_hide_custom_view();
        self.apply(actions);
    }

    /// Back gesture, asking the host whether history is available.
    pub fn on_back(&mut self) {
        let can_go_back = self.host.can_go_back();
        let actions = self.core.on_back(can_go_back);
        self.apply(actions);
    }

    #[must_use]
    pub fn tick(&self, now_ms: f64) -> RenderedCursor {
        self.core.tick(now_ms)
    }

    fn apply(&mut self, actions: Vec<Action>) {
        for action in actions {
            match action {
                Action::LoadUrl { url } => self.host.load_url(&url),
                Action::Evaluate { op, document, script } => self.host.evaluate_script(op, document, &script),
                Action::CursorMoved { target } => self.host.cursor_moved(target),
                Action::PresentCustomView { view } => self.host.present_custom_view(view),
                Action::RemoveCustomView { view } => self.host.remove_custom_view(view),
                Action::NavigateBack => self.host.go_back(),
                Action::Finish => self.host.finish(),
            }
        }
    }
}
