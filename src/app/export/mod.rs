//! Export of generated content.
//!
//! Formatting ([`format_content`]) is pure; writing the result somewhere is delegated to an
//! [`ExportSink`]. The desktop app uses [`FileSystemSink`] pointed at the configured export
//! directory.

mod sink;

pub use sink::{ExportSink, FileSystemSink};

use crate::app::session::ValidationError;
use std::path::PathBuf;
use thiserror::Error;

/// Base name of every exported file
pub const FILE_STEM: &str = "generated-content";

const HTML_TITLE: &str = "Generated Content";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExportFormat {
    Text,
    Markdown,
    Html,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 3] = [ExportFormat::Text, ExportFormat::Markdown, ExportFormat::Html];

    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Text => "txt",
            ExportFormat::Markdown => "md",
            ExportFormat::Html => "html",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            ExportFormat::Text => "text/plain",
            ExportFormat::Markdown => "text/markdown",
            ExportFormat::Html => "text/html",
        }
    }

    pub fn file_name(&self) -> String {
        format!("{}.{}", FILE_STEM, self.extension())
    }

    /// Button label in the editor panel
    pub fn button_label(&self) -> &'static str {
        match self {
            ExportFormat::Text => "Export as Text",
            ExportFormat::Markdown => "Export as Markdown",
            ExportFormat::Html => "Export as HTML",
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportFormat::Text => write!(f, "text"),
            ExportFormat::Markdown => write!(f, "markdown"),
            ExportFormat::Html => write!(f, "html"),
        }
    }
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A formatted document ready to be saved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedDocument {
    pub format: ExportFormat,
    pub file_name: String,
    pub mime_type: &'static str,
    pub body: String,
}

/// Format `content` for `format`. Text and Markdown pass through unchanged.
pub fn format_content(content: &str, format: ExportFormat) -> String {
    match format {
        ExportFormat::Text | ExportFormat::Markdown => content.to_string(),
        ExportFormat::Html => render_html(content),
    }
}

/// Minimal standalone HTML document with one paragraph per input line.
pub fn render_html(content: &str) -> String {
    let paragraphs: String = content
        .split('\n')
        .map(|line| format!("<p>{}</p>", escape_html(line)))
        .collect();

    format!(
        "<!DOCTYPE html>
<html>
<head>
  <title>{title}</title>
  <style>
    body {{ font-family: Arial, sans-serif; margin: 40px; line-height: 1.6; }}
  </style>
</head>
<body>
  <h1>{title}</h1>
  {paragraphs}
</body>
</html>",
        title = HTML_TITLE,
        paragraphs = paragraphs
    )
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Build the document for `content`, rejecting missing or empty content.
pub fn prepare(content: Option<&str>, format: ExportFormat) -> Result<ExportedDocument, ExportError> {
    let content = content
        .filter(|content| !content.is_empty())
        .ok_or(ValidationError::NoContent)?;

    Ok(ExportedDocument {
        format,
        file_name: format.file_name(),
        mime_type: format.mime_type(),
        body: format_content(content, format),
    })
}

/// Format and save `content`, returning where the file went.
pub fn export(
    content: Option<&str>,
    format: ExportFormat,
    sink: &dyn ExportSink,
) -> Result<PathBuf, ExportError> {
    let document = prepare(content, format)?;
    sink.save(&document)
}
