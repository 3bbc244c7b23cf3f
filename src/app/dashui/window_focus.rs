//! Window Focus Management
//!
//! Floating windows implement [`FocusableWindow`] so the root view can open them and bring
//! them to the foreground the same way, whichever menu entry asked for them.

use eframe::egui;

/// Trait for windows that can be brought to the foreground
pub trait FocusableWindow {
    /// Parameters required for the show method
    type ShowParams;

    /// Unique identifier for this window type
    fn window_id(&self) -> &'static str;

    /// Human-readable title, matching the title bar
    fn window_title(&self) -> String;

    /// Whether this window is currently open/visible
    fn is_open(&self) -> bool;

    /// Render the window, using `egui::Order::Foreground` when `bring_to_front` is set.
    fn show_with_focus(
        &mut self,
        ctx: &egui::Context,
        params: Self::ShowParams,
        bring_to_front: bool,
    );
}

/// Tracks which window should be raised on the next frame.
#[derive(Debug, Default)]
pub struct WindowFocusManager {
    bring_to_front_window: Option<String>,
}

impl WindowFocusManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn request_focus(&mut self, window_id: String) {
        self.bring_to_front_window = Some(window_id);
    }

    pub fn should_bring_to_front(&self, window_id: &str) -> bool {
        self.bring_to_front_window.as_deref() == Some(window_id)
    }

    /// Called by the window handler once the request has been applied.
    pub fn clear_bring_to_front(&mut self, window_id: &str) {
        if self.should_bring_to_front(window_id) {
            self.bring_to_front_window = None;
        }
    }

    /// Show `window` if it is open, honouring and then clearing any pending focus request.
    pub fn show_window<W>(&mut self, window: &mut W, ctx: &egui::Context, params: W::ShowParams)
    where
        W: FocusableWindow,
    {
        if !window.is_open() {
            return;
        }
        let window_id = window.window_id();
        let bring_to_front = self.should_bring_to_front(window_id);
        window.show_with_focus(ctx, params, bring_to_front);
        if bring_to_front {
            self.clear_bring_to_front(window_id);
        }
    }

    pub fn apply_focus_order(window: egui::Window<'_>, bring_to_front: bool) -> egui::Window<'_> {
        if bring_to_front {
            window.order(egui::Order::Foreground)
        } else {
            window
        }
    }
}

/// Parameters for windows that don't need additional data
pub type SimpleShowParams = ();
