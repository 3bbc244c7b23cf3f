//! Content Creator - writing-style driven content generation desktop app
//!
//! Content Creator is a small egui desktop application. The user picks a writing-style preset,
//! enters a prompt, and receives generated content. Generated content can be exported as plain
//! text, Markdown, or HTML, and every successful generation is kept in an in-memory history.
//!
//! # Core Features
//!
//! - **Style Presets**: A fixed catalogue of writing personas ([`app::styles`])
//! - **Generation Pipeline**: Background generation behind a pluggable
//!   [`app::generation::ContentProvider`], currently a simulated provider with a fixed latency
//! - **Export Formatter**: Text, Markdown and HTML documents written through an
//!   [`app::export::ExportSink`]
//! - **History**: Newest-first record of past generations with truncated previews
//!
//! # Architecture Overview
//!
//! - **UI Layer** ([`app::dashui`]): egui panels, menu, help window and the root [`ContentApp`]
//! - **Session State** ([`app::session`]): the single state object owned by the root view
//! - **Services**: generation ([`app::generation`]), export ([`app::export`]),
//!   configuration ([`app::config`]) and user notifications ([`app::notifications`])
//!
//! All state transitions happen on the UI thread. The only suspension point is the generation
//! request, which runs on a worker thread and reports back through a channel polled every frame.

#![warn(clippy::all, rust_2018_idioms)]

// Include logging macros first
#[macro_use]
pub mod logging_macros;

pub mod app;
pub use app::ContentApp;
