#![warn(clippy::all, rust_2018_idioms)]

//! Exporting generated content from the root view into a real directory.

use content_creator::app::export::{ExportFormat, FILE_STEM};
use content_creator::app::generation::placeholder_content;
use content_creator::app::notifications::NotificationType;
use content_creator::ContentApp;
use pretty_assertions::assert_eq;
use std::time::Duration;

fn generated_app(dir: &tempfile::TempDir) -> ContentApp {
    let mut app = ContentApp::with_export_dir(dir.path());
    app.session.select_style("tim-ferriss-james-clear");
    app.session.set_prompt("Habits & <systems>");
    app.request_generation();
    assert!(app.wait_for_generation(Duration::from_secs(5)));
    app
}

#[test]
fn test_export_text_writes_content_verbatim() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut app = generated_app(&dir);

    let path = app.export_current(ExportFormat::Text).expect("exported");

    assert_eq!(path, dir.path().join(format!("{}.txt", FILE_STEM)));
    let written = std::fs::read_to_string(&path).expect("read export");
    assert_eq!(
        written,
        placeholder_content("tim-ferriss-james-clear", "Habits & <systems>")
    );
}

#[test]
fn test_export_markdown_matches_text() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut app = generated_app(&dir);

    let text = app.export_current(ExportFormat::Text).expect("text");
    let markdown = app.export_current(ExportFormat::Markdown).expect("markdown");

    assert_eq!(
        markdown.file_name().and_then(|n| n.to_str()),
        Some("generated-content.md")
    );
    assert_eq!(
        std::fs::read_to_string(text).expect("read text"),
        std::fs::read_to_string(markdown).expect("read markdown")
    );
}

#[test]
fn test_export_html_wraps_each_line_in_a_paragraph() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut app = generated_app(&dir);

    let path = app.export_current(ExportFormat::Html).expect("exported");
    let html = std::fs::read_to_string(&path).expect("read export");

    let content = app.session.generated_content().expect("content");
    assert_eq!(html.matches("<p>").count(), content.split('\n').count());
    assert!(html.contains(
        "<p>This is generated content for &quot;Habits &amp; &lt;systems&gt;&quot; in the tim-ferriss-james-clear style.</p><p>      </p>"
    ));
    assert!(html.contains("<h1>Generated Content</h1>"));
}

#[test]
fn test_export_success_adds_notification() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut app = generated_app(&dir);

    app.export_current(ExportFormat::Markdown).expect("exported");

    let exported = app
        .notification_manager
        .get_notification("export-markdown")
        .expect("export notification");
    assert_eq!(exported.notification_type, NotificationType::Success);
    assert!(exported.message.contains("generated-content.md"));
    assert!(!app.notification_manager.has_pending_alert());
}

#[test]
fn test_export_without_content_alerts_and_writes_nothing() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut app = ContentApp::with_export_dir(dir.path());

    for format in ExportFormat::ALL {
        assert_eq!(app.export_current(format), None);
    }

    assert_eq!(app.notification_manager.pending_alert_count(), 3);
    let alert = app.notification_manager.current_alert().expect("alert");
    assert_eq!(alert.message, "No content to export");
    assert_eq!(
        std::fs::read_dir(dir.path()).expect("read dir").count(),
        0
    );
}

#[test]
fn test_export_into_unwritable_location_reports_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    // A regular file where the export directory should be
    let blocker = dir.path().join("not-a-directory");
    std::fs::write(&blocker, "x").expect("write blocker");

    let mut app = ContentApp::with_export_dir(&blocker);
    app.session.select_style("tim-ferriss");
    app.session.set_prompt("anything");
    app.request_generation();
    assert!(app.wait_for_generation(Duration::from_secs(5)));

    assert_eq!(app.export_current(ExportFormat::Text), None);
    let alert = app.notification_manager.current_alert().expect("alert");
    assert_eq!(alert.severity, NotificationType::Error);
    assert_eq!(alert.title, "Export failed");
}
