//! Session state for the Content Creator view.
//!
//! [`SessionState`] is owned by the root view and only mutated on the UI thread. Fields the
//! user edits directly (style selection, prompt, active tab) are public; content, history and
//! the loading flag are private so that they can only change together through
//! [`SessionState::begin_generation`], [`SessionState::complete_generation`] and
//! [`SessionState::fail_generation`].

use super::history::{History, HistoryItem};
use chrono::{DateTime, Local};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveTab {
    #[default]
    Editor,
    History,
}

impl ActiveTab {
    pub fn label(&self) -> &'static str {
        match self {
            ActiveTab::Editor => "Editor",
            ActiveTab::History => "History",
        }
    }
}

/// User input problems. Raised before any state changes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please select a style and enter a prompt")]
    MissingStyleOrPrompt,

    #[error("No content to export")]
    NoContent,

    #[error("Content is already being generated")]
    GenerationInFlight,
}

/// Snapshot of the inputs of one generation, taken when it starts.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    pub style: String,
    pub prompt: String,
    pub started_at: DateTime<Local>,
}

#[derive(Debug, Default)]
pub struct SessionState {
    pub selected_style: Option<String>,
    pub prompt: String,
    pub active_tab: ActiveTab,
    generated_content: Option<String>,
    history: History,
    is_loading: bool,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select_style(&mut self, style_id: impl Into<String>) {
        self.selected_style = Some(style_id.into());
    }

    pub fn set_prompt(&mut self, prompt: impl Into<String>) {
        self.prompt = prompt.into();
    }

    /// Style id, treating an empty string as "nothing selected".
    pub fn style(&self) -> Option<&str> {
        self.selected_style
            .as_deref()
            .filter(|style| !style.is_empty())
    }

    pub fn has_complete_input(&self) -> bool {
        self.style().is_some() && !self.prompt.trim().is_empty()
    }

    /// Whether the Generate button should be enabled.
    pub fn can_generate(&self) -> bool {
        !self.is_loading && self.has_complete_input()
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn generated_content(&self) -> Option<&str> {
        self.generated_content.as_deref()
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Validate the inputs and enter the loading state.
    ///
    /// On error nothing is modified.
    pub fn begin_generation(&mut self) -> Result<GenerationRequest, ValidationError> {
        let style = match self.style() {
            Some(style) if !self.prompt.trim().is_empty() => style.to_string(),
            _ => return Err(ValidationError::MissingStyleOrPrompt),
        };

        if self.is_loading {
            return Err(ValidationError::GenerationInFlight);
        }

        self.is_loading = true;

        Ok(GenerationRequest {
            style,
            prompt: self.prompt.clone(),
            started_at: Local::now(),
        })
    }

    /// Publish generated content and record it in history.
    pub fn complete_generation(
        &mut self,
        request: GenerationRequest,
        content: String,
    ) -> &HistoryItem {
        self.is_loading = false;
        self.generated_content = Some(content.clone());
        self.history.record(HistoryItem::new(
            request.prompt,
            request.style,
            content,
            Local::now(),
        ));
        // just recorded above
        &self.history.items()[0]
    }

    /// Leave the loading state without touching content or history.
    pub fn fail_generation(&mut self) {
        self.is_loading = false;
    }

    /// The content the export buttons operate on.
    pub fn exportable_content(&self) -> Result<&str, ValidationError> {
        self.generated_content()
            .filter(|content| !content.is_empty())
            .ok_or(ValidationError::NoContent)
    }
}
