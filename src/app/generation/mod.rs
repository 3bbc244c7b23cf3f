//! Content generation.
//!
//! - [`provider`] - The [`ContentProvider`] seam and the simulated provider used today
//! - [`pipeline`] - Background execution of a single in-flight generation request

pub mod pipeline;
pub mod provider;

pub use pipeline::{GenerationError, GenerationOutcome, GenerationPipeline};
pub use provider::{placeholder_content, ContentProvider, MockContentProvider, DEFAULT_LATENCY};
