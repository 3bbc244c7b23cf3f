#![warn(clippy::all, rust_2018_idioms)]

//! End-to-end generation behaviour of the root view, driven without a window.

use async_trait::async_trait;
use content_creator::app::config::AppConfig;
use content_creator::app::dashui::app::{GENERATION_FAILED_MESSAGE, GENERATION_NOTIFICATION_ID};
use content_creator::app::export::FileSystemSink;
use content_creator::app::generation::{placeholder_content, ContentProvider, MockContentProvider};
use content_creator::app::history::PREVIEW_CHARS;
use content_creator::app::notifications::NotificationType;
use content_creator::ContentApp;
use pretty_assertions::assert_eq;
use std::sync::Arc;
use std::time::Duration;

const WAIT: Duration = Duration::from_secs(5);

struct FailingProvider;

#[async_trait]
impl ContentProvider for FailingProvider {
    fn name(&self) -> &str {
        "failing"
    }

    async fn generate(&self, _style: &str, _prompt: &str) -> anyhow::Result<String> {
        anyhow::bail!("quota exceeded")
    }
}

fn app_with(provider: Arc<dyn ContentProvider>) -> (ContentApp, tempfile::TempDir) {
    let dir = tempfile::tempdir().expect("tempdir");
    let app = ContentApp::with_services(
        AppConfig::default(),
        provider,
        Box::new(FileSystemSink::new(dir.path())),
    );
    (app, dir)
}

fn generate(app: &mut ContentApp, style: &str, prompt: &str) {
    app.session.select_style(style);
    app.session.set_prompt(prompt);
    app.request_generation();
    assert!(app.wait_for_generation(WAIT), "generation did not finish");
}

#[test]
fn test_successful_generation_publishes_content_and_history() {
    let (mut app, _dir) = app_with(Arc::new(MockContentProvider::immediate()));
    let started = chrono::Local::now();

    generate(&mut app, "tim-ferriss", "How to learn fast");

    let expected = placeholder_content("tim-ferriss", "How to learn fast");
    assert_eq!(app.session.generated_content(), Some(expected.as_str()));
    assert!(!app.session.is_loading());

    let history = app.session.history();
    assert_eq!(history.len(), 1);
    let item = history.latest().expect("history item");
    assert_eq!(item.prompt, "How to learn fast");
    assert_eq!(item.style, "tim-ferriss");
    assert_eq!(item.content, expected);
    assert!(item.timestamp >= started);
    assert!(!app.notification_manager.has_pending_alert());
    let status = app
        .notification_manager
        .get_notification(GENERATION_NOTIFICATION_ID)
        .expect("status notification");
    assert_eq!(status.notification_type, NotificationType::Success);
}

#[test]
fn test_history_is_newest_first() {
    let (mut app, _dir) = app_with(Arc::new(MockContentProvider::immediate()));

    generate(&mut app, "tim-ferriss", "first");
    generate(&mut app, "mark-manson", "second");
    generate(&mut app, "david-perell", "third");

    let prompts: Vec<&str> = app
        .session
        .history()
        .iter()
        .map(|item| item.prompt.as_str())
        .collect();
    assert_eq!(prompts, vec!["third", "second", "first"]);
    assert_eq!(
        app.session.generated_content(),
        Some(placeholder_content("david-perell", "third").as_str())
    );
}

#[test]
fn test_missing_input_raises_alert_without_changing_state() {
    let (mut app, _dir) = app_with(Arc::new(MockContentProvider::immediate()));

    app.session.set_prompt("only a prompt");
    app.request_generation();

    assert!(!app.session.is_loading());
    assert!(app.session.history().is_empty());
    assert_eq!(app.session.generated_content(), None);
    let alert = app.notification_manager.current_alert().expect("alert");
    assert_eq!(alert.message, "Please select a style and enter a prompt");
    assert_eq!(alert.severity, NotificationType::Warning);
}

#[test]
fn test_whitespace_prompt_is_rejected() {
    let (mut app, _dir) = app_with(Arc::new(MockContentProvider::immediate()));

    app.session.select_style("shane-parrish");
    app.session.set_prompt("   \n\t ");
    app.request_generation();

    assert!(!app.session.is_loading());
    assert!(app.notification_manager.has_pending_alert());
}

#[test]
fn test_provider_failure_raises_alert_and_records_nothing() {
    let (mut app, _dir) = app_with(Arc::new(FailingProvider));

    generate(&mut app, "tim-ferriss", "lost");

    assert!(!app.session.is_loading());
    assert!(app.session.history().is_empty());
    assert_eq!(app.session.generated_content(), None);
    let alert = app.notification_manager.current_alert().expect("alert");
    assert_eq!(alert.message, GENERATION_FAILED_MESSAGE);
    assert_eq!(alert.severity, NotificationType::Error);
    let status = app
        .notification_manager
        .get_notification(GENERATION_NOTIFICATION_ID)
        .expect("status notification");
    assert_eq!(status.notification_type, NotificationType::Error);

    // The user can try again once the failure is acknowledged
    app.notification_manager.acknowledge_alert();
    assert!(app.session.can_generate());
}

#[test]
fn test_second_request_while_loading_is_ignored() {
    let (mut app, _dir) = app_with(Arc::new(MockContentProvider::new(Duration::from_millis(200))));

    app.session.select_style("tim-ferriss");
    app.session.set_prompt("one");
    app.request_generation();
    assert!(app.session.is_loading());
    assert!(!app.session.can_generate());

    app.session.set_prompt("two");
    app.request_generation();
    assert!(!app.notification_manager.has_pending_alert());

    assert!(app.wait_for_generation(WAIT));
    assert_eq!(app.session.history().len(), 1);
    assert_eq!(app.session.history().items()[0].prompt, "one");
    assert!(!app.wait_for_generation(Duration::from_millis(50)));
}

#[test]
fn test_editing_inputs_after_generation_keeps_displayed_content() {
    let (mut app, _dir) = app_with(Arc::new(MockContentProvider::immediate()));
    generate(&mut app, "tim-ferriss", "original");

    app.session.select_style("mark-manson");
    app.session.set_prompt("something else");

    assert_eq!(
        app.session.generated_content(),
        Some(placeholder_content("tim-ferriss", "original").as_str())
    );
    assert_eq!(app.session.history().len(), 1);
}

#[test]
fn test_history_preview_truncates_long_content() {
    let (mut app, _dir) = app_with(Arc::new(MockContentProvider::immediate()));
    generate(&mut app, "tim-ferriss", "preview");

    let item = app.session.history().latest().expect("history item");
    let preview = item.preview(PREVIEW_CHARS);
    assert!(item.content.chars().count() > PREVIEW_CHARS);
    assert_eq!(preview.chars().count(), PREVIEW_CHARS + 3);
    assert!(preview.ends_with("..."));
    assert!(item.content.starts_with(preview.trim_end_matches("...")));
}
