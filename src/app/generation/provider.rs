use async_trait::async_trait;
use std::time::Duration;

/// Default simulated latency of the mock provider
pub const DEFAULT_LATENCY: Duration = Duration::from_millis(1500);

const FILLER_TEXT: &str = "Lorem ipsum dolor sit amet, consectetur adipiscing elit. Sed do eiusmod tempor incididunt ut labore et dolore magna aliqua. Ut enim ad minim veniam, quis nostrud exercitation ullamco laboris nisi ut aliquip ex ea commodo consequat.

Duis aute irure dolor in reprehenderit in voluptate velit esse cillum dolore eu fugiat nulla pariatur. Excepteur sint occaecat cupidatat non proident, sunt in culpa qui officia deserunt mollit anim id est laborum.";

/// Source of generated content.
///
/// Implementations run on the generation worker thread inside a tokio runtime, so they may
/// await network calls freely. Errors are reported to the user as a generation failure.
#[async_trait]
pub trait ContentProvider: Send + Sync {
    /// Short name used in logs
    fn name(&self) -> &str;

    async fn generate(&self, style: &str, prompt: &str) -> anyhow::Result<String>;
}

/// Separates the headline from the filler. The middle line holds six spaces.
const HEADLINE_SEPARATOR: &str = "\n      \n";

/// Placeholder content used until a real backend is wired in.
pub fn placeholder_content(style: &str, prompt: &str) -> String {
    format!(
        "This is generated content for \"{}\" in the {} style.{}{}",
        prompt, style, HEADLINE_SEPARATOR, FILLER_TEXT
    )
}

/// Provider that waits for a fixed latency and returns [`placeholder_content`].
#[derive(Debug, Clone)]
pub struct MockContentProvider {
    latency: Duration,
}

impl Default for MockContentProvider {
    fn default() -> Self {
        Self::new(DEFAULT_LATENCY)
    }
}

impl MockContentProvider {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }

    /// No simulated latency
    pub fn immediate() -> Self {
        Self::new(Duration::ZERO)
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }
}

#[async_trait]
impl ContentProvider for MockContentProvider {
    fn name(&self) -> &str {
        "mock"
    }

    async fn generate(&self, style: &str, prompt: &str) -> anyhow::Result<String> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        Ok(placeholder_content(style, prompt))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_content_embeds_prompt_and_style() {
        let content = placeholder_content("mark-manson", "Why habits fail");
        assert!(content
            .starts_with("This is generated content for \"Why habits fail\" in the mark-manson style."));
        assert!(content.contains("Lorem ipsum dolor sit amet"));
        assert!(content.ends_with("id est laborum."));
    }

    #[test]
    fn test_placeholder_content_line_layout() {
        let content = placeholder_content("s", "p");
        let lines: Vec<&str> = content.split('\n').collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[1], "      ");
        assert_eq!(lines[3], "");
    }

    #[tokio::test]
    async fn test_mock_provider_immediate() {
        let provider = MockContentProvider::immediate();
        assert_eq!(provider.latency(), Duration::ZERO);
        let content = provider
            .generate("tim-ferriss", "P")
            .await
            .expect("mock provider never fails");
        assert_eq!(content, placeholder_content("tim-ferriss", "P"));
    }

    #[tokio::test]
    async fn test_mock_provider_waits_for_latency() {
        let provider = MockContentProvider::new(Duration::from_millis(30));
        let start = std::time::Instant::now();
        provider.generate("s", "p").await.expect("content");
        assert!(start.elapsed() >= Duration::from_millis(30));
    }

    #[test]
    fn test_default_latency() {
        assert_eq!(MockContentProvider::default().latency(), DEFAULT_LATENCY);
    }
}
