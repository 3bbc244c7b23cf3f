use egui::Color32;
use std::collections::{HashMap, VecDeque};
use std::time::{Duration, Instant};

pub mod alert_window;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationType {
    Error,
    Warning,
    Info,
    Success,
}

/// Transient message shown in the status bar.
#[derive(Debug, Clone)]
pub struct Notification {
    pub id: String,
    pub title: String,
    pub notification_type: NotificationType,
    pub message: String,
    pub created_at: Instant,
    pub expires_at: Option<Instant>,
    pub source: String, // e.g. "Generation", "Export"
}

impl Notification {
    pub fn new_error(id: String, title: String, message: String, source: String) -> Self {
        Self {
            id,
            title,
            notification_type: NotificationType::Error,
            message,
            created_at: Instant::now(),
            expires_at: None, // Errors don't auto-expire
            source,
        }
    }

    pub fn new_info(id: String, title: String, message: String, source: String) -> Self {
        Self {
            id,
            title,
            notification_type: NotificationType::Info,
            message,
            created_at: Instant::now(),
            expires_at: Some(Instant::now() + Duration::from_secs(10)),
            source,
        }
    }

    pub fn new_success(id: String, title: String, message: String, source: String) -> Self {
        Self {
            id,
            title,
            notification_type: NotificationType::Success,
            message,
            created_at: Instant::now(),
            expires_at: Some(Instant::now() + Duration::from_secs(5)),
            source,
        }
    }

    pub fn is_expired(&self) -> bool {
        if let Some(expires_at) = self.expires_at {
            Instant::now() > expires_at
        } else {
            false
        }
    }

    pub fn get_color(&self) -> Color32 {
        notification_color(self.notification_type)
    }

    pub fn get_icon(&self) -> &'static str {
        notification_icon(self.notification_type)
    }
}

fn notification_color(notification_type: NotificationType) -> Color32 {
    match notification_type {
        NotificationType::Error => Color32::from_rgb(220, 50, 50),
        NotificationType::Warning => Color32::from_rgb(255, 150, 0),
        NotificationType::Info => Color32::from_rgb(70, 130, 200),
        NotificationType::Success => Color32::from_rgb(40, 180, 40),
    }
}

fn notification_icon(notification_type: NotificationType) -> &'static str {
    match notification_type {
        NotificationType::Error => "✗",
        NotificationType::Warning => "⚠",
        NotificationType::Info => "ℹ",
        NotificationType::Success => "✓",
    }
}

/// Message the user must acknowledge before continuing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub title: String,
    pub message: String,
    pub severity: NotificationType,
}

impl Alert {
    pub fn warning(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            severity: NotificationType::Warning,
        }
    }

    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            severity: NotificationType::Error,
        }
    }

    pub fn get_color(&self) -> Color32 {
        notification_color(self.severity)
    }

    pub fn get_icon(&self) -> &'static str {
        notification_icon(self.severity)
    }
}

#[derive(Default)]
pub struct NotificationManager {
    notifications: HashMap<String, Notification>,
    alerts: VecDeque<Alert>,
    /// The front alert has been on screen for at least one full frame
    alert_displayed: bool,
}

impl NotificationManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_notification(&mut self, notification: Notification) {
        self.notifications
            .insert(notification.id.clone(), notification);
    }

    pub fn dismiss_notification(&mut self, id: &str) {
        self.notifications.remove(id);
    }

    pub fn clear_expired(&mut self) {
        self.notifications
            .retain(|_, notification| !notification.is_expired());
    }

    pub fn get_active_notifications(&self) -> Vec<&Notification> {
        let mut notifications: Vec<&Notification> = self.notifications.values().collect();
        notifications.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        notifications
    }

    pub fn get_notification(&self, id: &str) -> Option<&Notification> {
        self.notifications.get(id)
    }

    /// Queue an alert. Alerts are shown one at a time in arrival order.
    pub fn raise_alert(&mut self, alert: Alert) {
        tracing::info!("Alert raised: {} - {}", alert.title, alert.message);
        self.alerts.push_back(alert);
    }

    pub fn current_alert(&self) -> Option<&Alert> {
        self.alerts.front()
    }

    pub fn has_pending_alert(&self) -> bool {
        !self.alerts.is_empty()
    }

    pub fn pending_alert_count(&self) -> usize {
        self.alerts.len()
    }

    pub fn acknowledge_alert(&mut self) -> Option<Alert> {
        self.alert_displayed = false;
        self.alerts.pop_front()
    }

    /// Record that the front alert was drawn this frame.
    pub fn mark_alert_displayed(&mut self) {
        if self.has_pending_alert() {
            self.alert_displayed = true;
        }
    }

    /// Keyboard acknowledgement is only accepted once the alert was visible in an earlier frame,
    /// so the key press that triggered it cannot dismiss it.
    pub fn accepts_keyboard_acknowledge(&self) -> bool {
        self.has_pending_alert() && self.alert_displayed
    }

    pub fn render_status_bar_indicator(&mut self, ui: &mut egui::Ui) {
        self.clear_expired();

        // Collect first to avoid borrowing self while rendering
        let visible: Vec<(String, &'static str, Color32, String, String)> = self
            .get_active_notifications()
            .iter()
            .map(|n| {
                (
                    n.id.clone(),
                    n.get_icon(),
                    n.get_color(),
                    n.message.clone(),
                    format!("{} ({}) - click to dismiss", n.title, n.source),
                )
            })
            .collect();

        if visible.is_empty() {
            return;
        }

        ui.separator();
        for (id, icon, color, message, hover) in visible {
            let clicked = ui
                .colored_label(color, format!("{} {}", icon, message))
                .on_hover_text(hover)
                .clicked();
            if clicked {
                self.dismiss_notification(&id);
            }
        }
    }
}
