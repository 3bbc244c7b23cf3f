use super::NotificationManager;
use egui::{Context, RichText};

/// Centered window for the oldest pending alert.
///
/// The rest of the UI is disabled by the caller while an alert is pending, so the user has to
/// acknowledge it before doing anything else.
pub struct AlertWindow;

impl AlertWindow {
    pub const OK_BUTTON: &'static str = "OK";

    pub fn show(manager: &mut NotificationManager, ctx: &Context) {
        let Some(alert) = manager.current_alert().cloned() else {
            return;
        };

        let mut acknowledged = false;
        let keyboard_ready = manager.accepts_keyboard_acknowledge();

        egui::Window::new(format!("{} {}", alert.get_icon(), alert.title))
            .id(egui::Id::new("alert_window"))
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .order(egui::Order::Foreground)
            .collapsible(false)
            .resizable(false)
            .min_width(320.0)
            .show(ctx, |ui| {
                ui.add_space(5.0);
                ui.label(RichText::new(&alert.message).color(alert.get_color()));
                ui.add_space(10.0);

                ui.horizontal(|ui| {
                    if ui.button(Self::OK_BUTTON).clicked() {
                        acknowledged = true;
                    }
                    if ui.button("Copy to Clipboard").clicked() {
                        ui.ctx()
                            .copy_text(format!("{}\n{}", alert.title, alert.message));
                    }
                });
            });

        if acknowledged || (keyboard_ready && ctx.input(|i| i.key_pressed(egui::Key::Enter))) {
            manager.acknowledge_alert();
        } else {
            manager.mark_alert_displayed();
        }
    }
}
