//! Core application modules for Content Creator.
//!
//! # Module Organization
//!
//! ## Domain
//! - [`styles`] - Static catalogue of writing-style presets
//! - [`history`] - Generation history records and previews
//! - [`session`] - Session state owned by the root view
//!
//! ## Services
//! - [`generation`] - Content providers and the background generation pipeline
//! - [`export`] - Text, Markdown and HTML export formatting and file saving
//! - [`config`] - TOML configuration with environment overrides
//!
//! ## UI and Infrastructure
//! - [`dashui`] - egui user interface
//! - [`notifications`] - Alerts and transient notifications for user feedback

pub mod config;
pub mod dashui;
pub mod export;
pub mod generation;
pub mod history;
pub mod notifications;
pub mod session;
pub mod styles;

pub use dashui::app::ContentApp;
