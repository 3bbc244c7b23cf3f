//! UI rendering for top menu, status bar, central panel, and floating windows

use super::{ContentApp, APP_TITLE};
use crate::app::dashui::editor_panel::{EditorAction, EditorPanel};
use crate::app::dashui::history_panel::HistoryPanel;
use crate::app::dashui::menu;
use crate::app::notifications::alert_window::AlertWindow;
use crate::app::session::ActiveTab;
use crate::trace_info;
use eframe::egui;
use egui::RichText;

impl ContentApp {
    /// Render the top menu bar
    pub(super) fn render_top_menu_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            egui::MenuBar::new().ui(ui, |ui| {
                let menu_action = menu::build_menu(ui, ctx, &mut self.theme);

                match menu_action {
                    menu::MenuAction::ThemeChanged => {
                        trace_info!("Theme changed to {}", self.theme);
                    }
                    menu::MenuAction::ShowHelp => {
                        self.help_window.open = true;
                        self.window_focus_manager
                            .request_focus("help_window".to_string());
                    }
                    menu::MenuAction::ShowEditor => {
                        self.session.active_tab = ActiveTab::Editor;
                    }
                    menu::MenuAction::ShowHistory => {
                        self.session.active_tab = ActiveTab::History;
                    }
                    menu::MenuAction::Quit => {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                        tracing::info!("Quit requested from File menu");
                    }
                    menu::MenuAction::None => {}
                }
            });
        });
    }

    /// Loading state, provider, history size and transient notifications
    pub(super) fn render_status_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar")
            .resizable(false)
            .min_height(0.0)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    if self.session.is_loading() {
                        ui.spinner();
                        ui.label(format!(
                            "Generating with {} provider...",
                            self.pipeline.provider_name()
                        ));
                    } else {
                        ui.label(RichText::new("Ready").weak());
                    }

                    ui.separator();
                    ui.label(format!("History: {}", self.session.history().len()));

                    self.notification_manager.render_status_bar_indicator(ui);

                    if cfg!(debug_assertions) {
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            ui.label(
                                RichText::new(format!(
                                    "Debug Build - {}@{}",
                                    env!("GIT_BRANCH"),
                                    env!("GIT_COMMIT")
                                ))
                                .small()
                                .color(egui::Color32::from_rgb(255, 165, 0)),
                            );
                        });
                    }
                });
            });
    }

    /// Title, tab strip and the active tab. Disabled while an alert waits for acknowledgement.
    pub(super) fn render_central_panel(&mut self, ctx: &egui::Context) {
        let enabled = !self.notification_manager.has_pending_alert();
        let mut action = EditorAction::None;

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_enabled_ui(enabled, |ui| {
                ui.vertical_centered(|ui| {
                    ui.heading(APP_TITLE);
                });
                ui.add_space(10.0);

                ui.horizontal(|ui| {
                    for tab in [ActiveTab::Editor, ActiveTab::History] {
                        ui.selectable_value(&mut self.session.active_tab, tab, tab.label());
                    }
                });
                ui.separator();

                match self.session.active_tab {
                    ActiveTab::Editor => {
                        egui::ScrollArea::vertical()
                            .id_salt("editor_scroll")
                            .auto_shrink([false, false])
                            .show(ui, |ui| {
                                action = EditorPanel::ui(ui, &mut self.session);
                            });
                    }
                    ActiveTab::History => {
                        HistoryPanel::ui(ui, self.session.history(), self.config.preview_chars);
                    }
                }
            });
        });

        self.handle_editor_action(action);
    }

    pub(super) fn handle_help_window(&mut self, ctx: &egui::Context) {
        self.window_focus_manager
            .show_window(&mut self.help_window, ctx, ());
    }

    pub(super) fn handle_alert_window(&mut self, ctx: &egui::Context) {
        AlertWindow::show(&mut self.notification_manager, ctx);
    }
}
