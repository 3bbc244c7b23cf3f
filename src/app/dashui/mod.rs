//! Desktop user interface for Content Creator.
//!
//! The root view [`app::ContentApp`] owns the session and draws, top to bottom, a menu bar,
//! the central panel with its Editor and History tabs, and a status bar. Floating windows
//! (help and alerts) are drawn last so they sit above the panels.
//!
//! - [`editor_panel`] - style selector, prompt, Generate button, generated content and exports
//! - [`history_panel`] - previews of past generations, newest first
//! - [`menu`] - File and theme menus
//! - [`help_window`] - usage notes and build information
//! - [`window_focus`] - bringing floating windows to the front on request

pub mod app;
pub mod editor_panel;
pub mod help_window;
pub mod history_panel;
pub mod menu;
pub mod window_focus;

pub use app::{ContentApp, ThemeChoice, UiPreferences};
pub use editor_panel::{EditorAction, EditorPanel};
pub use history_panel::HistoryPanel;
