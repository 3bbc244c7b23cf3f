//! Generation requests, generation results and exports

use super::ContentApp;
use crate::app::dashui::editor_panel::EditorAction;
use crate::app::export::{self, ExportError, ExportFormat};
use crate::app::generation::GenerationOutcome;
use crate::app::notifications::{Alert, Notification};
use crate::app::session::ValidationError;
use crate::app::styles;
use crate::{log_error, log_info, log_warn};
use std::path::PathBuf;
use std::time::Duration;

/// Shown when the provider fails. The underlying error only goes to the log.
pub const GENERATION_FAILED_MESSAGE: &str = "Error generating content. Please try again.";

const NOTIFICATION_SOURCE: &str = "Content Creator";

/// Started, completed and failed generations share one status bar slot
pub const GENERATION_NOTIFICATION_ID: &str = "generation";

impl ContentApp {
    pub(super) fn handle_editor_action(&mut self, action: EditorAction) {
        match action {
            EditorAction::Generate => self.request_generation(),
            EditorAction::Export(format) => {
                self.export_current(format);
            }
            EditorAction::None => {}
        }
    }

    /// Validate the session and hand the request to the background pipeline.
    ///
    /// Invalid input raises an alert and leaves the session untouched.
    pub fn request_generation(&mut self) {
        let request = match self.session.begin_generation() {
            Ok(request) => request,
            Err(ValidationError::GenerationInFlight) => {
                log_warn!("Ignoring generate request while a generation is in flight");
                return;
            }
            Err(e) => {
                self.notification_manager
                    .raise_alert(Alert::warning("Missing input", e.to_string()));
                return;
            }
        };

        log_info!(
            "Generating content: style={}, prompt_chars={}",
            request.style,
            request.prompt.chars().count()
        );

        let style = request.style.clone();
        if let Err(e) = self.pipeline.start(request) {
            log_error!("Could not start generation: {}", e);
            self.session.fail_generation();
            self.notification_manager
                .raise_alert(Alert::error("Generation failed", GENERATION_FAILED_MESSAGE));
            return;
        }

        self.notification_manager.add_notification(Notification::new_info(
            GENERATION_NOTIFICATION_ID.to_string(),
            "Generating".to_string(),
            format!("Generating in the {} style", styles::display_name(&style)),
            NOTIFICATION_SOURCE.to_string(),
        ));
    }

    /// Pick up a finished generation, if any. Returns true when an outcome was applied.
    pub fn poll_generation(&mut self) -> bool {
        match self.pipeline.poll() {
            Some(outcome) => {
                self.apply_generation_outcome(outcome);
                true
            }
            None => false,
        }
    }

    /// Block until the in-flight generation finishes, then apply it.
    ///
    /// Returns false if nothing finished within `timeout`.
    pub fn wait_for_generation(&mut self, timeout: Duration) -> bool {
        match self.pipeline.wait(timeout) {
            Some(outcome) => {
                self.apply_generation_outcome(outcome);
                true
            }
            None => false,
        }
    }

    fn apply_generation_outcome(&mut self, outcome: GenerationOutcome) {
        match outcome {
            GenerationOutcome::Completed { request, content } => {
                let elapsed = chrono::Local::now() - request.started_at;
                let item = self.session.complete_generation(request, content);
                log_info!(
                    "Generated {} chars in {} ms for style {}",
                    item.content.chars().count(),
                    elapsed.num_milliseconds(),
                    item.style
                );
                self.notification_manager.add_notification(Notification::new_success(
                    GENERATION_NOTIFICATION_ID.to_string(),
                    "Content generated".to_string(),
                    "Content generated".to_string(),
                    NOTIFICATION_SOURCE.to_string(),
                ));
            }
            GenerationOutcome::Failed { request, error } => {
                log_error!(
                    "Error generating content for style {}: {}",
                    request.style,
                    error
                );
                self.session.fail_generation();
                self.notification_manager.add_notification(Notification::new_error(
                    GENERATION_NOTIFICATION_ID.to_string(),
                    "Generation failed".to_string(),
                    "Last generation failed".to_string(),
                    NOTIFICATION_SOURCE.to_string(),
                ));
                self.notification_manager
                    .raise_alert(Alert::error("Generation failed", GENERATION_FAILED_MESSAGE));
            }
        }
    }

    /// Export the currently displayed content. Returns the written path on success.
    pub fn export_current(&mut self, format: ExportFormat) -> Option<PathBuf> {
        let result = export::export(
            self.session.generated_content(),
            format,
            self.export_sink.as_ref(),
        );

        match result {
            Ok(path) => {
                log_info!("Exported {} to {}", format, path.display());
                self.notification_manager.add_notification(Notification::new_success(
                    format!("export-{}", format),
                    "Export complete".to_string(),
                    format!("Saved {}", path.display()),
                    NOTIFICATION_SOURCE.to_string(),
                ));
                Some(path)
            }
            Err(ExportError::Validation(e)) => {
                self.notification_manager
                    .raise_alert(Alert::warning("Nothing to export", e.to_string()));
                None
            }
            Err(e) => {
                log_error!("Export as {} failed: {}", format, e);
                self.notification_manager
                    .raise_alert(Alert::error("Export failed", e.to_string()));
                None
            }
        }
    }
}
