//! Construction of the root view

use super::{ContentApp, UiPreferences};
use crate::app::config::AppConfig;
use crate::app::dashui::help_window::HelpWindow;
use crate::app::dashui::window_focus::WindowFocusManager;
use crate::app::export::{ExportSink, FileSystemSink};
use crate::app::generation::{ContentProvider, GenerationPipeline, MockContentProvider};
use crate::app::notifications::NotificationManager;
use crate::app::session::SessionState;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

impl ContentApp {
    /// Create the app from the eframe creation context, restoring the persisted theme
    pub fn new(cc: &eframe::CreationContext<'_>, config: AppConfig) -> Self {
        let preferences: UiPreferences = cc
            .storage
            .and_then(|storage| eframe::get_value(storage, eframe::APP_KEY))
            .unwrap_or_default();

        let mut app = Self::from_config(config);
        app.theme = preferences.theme;
        app.apply_theme(&cc.egui_ctx);
        app
    }

    /// Mock provider with the configured latency, exports into the configured directory
    pub fn from_config(config: AppConfig) -> Self {
        let provider = Arc::new(MockContentProvider::new(config.simulated_latency()));
        let sink = Box::new(FileSystemSink::new(config.resolved_export_dir()));
        Self::with_services(config, provider, sink)
    }

    pub fn with_services(
        config: AppConfig,
        provider: Arc<dyn ContentProvider>,
        export_sink: Box<dyn ExportSink>,
    ) -> Self {
        info!(
            "Content creator ready: provider={}, preview_chars={}",
            provider.name(),
            config.preview_chars
        );

        Self {
            theme: Default::default(),
            session: SessionState::new(),
            notification_manager: NotificationManager::new(),
            help_window: HelpWindow::new(),
            config,
            pipeline: GenerationPipeline::new(provider),
            export_sink,
            window_focus_manager: WindowFocusManager::new(),
        }
    }

    /// Convenience for headless use: mock provider without latency, exports into `directory`
    pub fn with_export_dir(directory: impl Into<PathBuf>) -> Self {
        let directory = directory.into();
        let config = AppConfig {
            simulated_latency_ms: 0,
            export_dir: Some(directory.clone()),
            ..AppConfig::default()
        };
        Self::with_services(
            config,
            Arc::new(MockContentProvider::immediate()),
            Box::new(FileSystemSink::new(directory)),
        )
    }
}
