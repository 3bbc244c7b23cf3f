//! Root view of Content Creator
//!
//! The implementation of [`ContentApp`] is split into:
//! - initialization: construction from eframe storage and configuration
//! - theme: Catppuccin theme handling
//! - event_handling: generation requests, generation results and exports
//! - rendering: menu bar, status bar, central panel and floating windows

use super::help_window::HelpWindow;
use super::window_focus::WindowFocusManager;
use crate::app::config::AppConfig;
use crate::app::export::ExportSink;
use crate::app::generation::GenerationPipeline;
use crate::app::notifications::NotificationManager;
use crate::app::session::SessionState;
use eframe::egui;
use std::time::Duration;

mod event_handling;
mod initialization;
mod rendering;
mod theme;

pub use event_handling::{GENERATION_FAILED_MESSAGE, GENERATION_NOTIFICATION_ID};

/// Window title and the heading of the central panel
pub const APP_TITLE: &str = "Content Creator Interface";

/// Repaint interval while a generation is running, so the spinner animates and the result is
/// picked up promptly.
const LOADING_REPAINT_INTERVAL: Duration = Duration::from_millis(50);

#[derive(serde::Deserialize, serde::Serialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ThemeChoice {
    #[default]
    Latte,
    Frappe,
    Macchiato,
    Mocha,
}

impl ThemeChoice {
    pub const ALL: [ThemeChoice; 4] = [
        ThemeChoice::Latte,
        ThemeChoice::Frappe,
        ThemeChoice::Macchiato,
        ThemeChoice::Mocha,
    ];
}

impl std::fmt::Display for ThemeChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ThemeChoice::Latte => write!(f, "Latte"),
            ThemeChoice::Frappe => write!(f, "Frappe"),
            ThemeChoice::Macchiato => write!(f, "Macchiato"),
            ThemeChoice::Mocha => write!(f, "Mocha"),
        }
    }
}

/// What eframe storage keeps between launches. The session always starts empty.
#[derive(serde::Deserialize, serde::Serialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(default)]
pub struct UiPreferences {
    pub theme: ThemeChoice,
}

pub struct ContentApp {
    pub theme: ThemeChoice,
    pub session: SessionState,
    pub notification_manager: NotificationManager,
    pub help_window: HelpWindow,
    config: AppConfig,
    pipeline: GenerationPipeline,
    export_sink: Box<dyn ExportSink>,
    window_focus_manager: WindowFocusManager,
}

impl ContentApp {
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn preferences(&self) -> UiPreferences {
        UiPreferences { theme: self.theme }
    }

    /// Render one frame. Split from [`eframe::App::update`] so the UI can be driven headless.
    pub fn ui(&mut self, ctx: &egui::Context) {
        self.poll_generation();
        if self.session.is_loading() {
            ctx.request_repaint_after(LOADING_REPAINT_INTERVAL);
        }

        self.render_top_menu_bar(ctx);
        self.render_status_bar(ctx);
        self.render_central_panel(ctx);
        self.handle_help_window(ctx);
        self.handle_alert_window(ctx);
    }
}

impl eframe::App for ContentApp {
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, &self.preferences());
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let frame_start = std::time::Instant::now();

        self.ui(ctx);

        let frame_duration = frame_start.elapsed();
        if frame_duration.as_millis() > 16 {
            tracing::warn!(
                "⏱️ SLOW FRAME: {:?} (target: 16ms for 60fps)",
                frame_duration
            );
        }
    }
}
