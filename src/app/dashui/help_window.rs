use super::window_focus::{FocusableWindow, SimpleShowParams, WindowFocusManager};
use crate::app::export::ExportFormat;
use crate::app::styles::WRITING_STYLES;
use eframe::egui;
use egui::{Context, RichText, Ui};

#[derive(Default)]
pub struct HelpWindow {
    pub open: bool,
}

impl HelpWindow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show_with_focus(&mut self, ctx: &Context, bring_to_front: bool) {
        if !self.open {
            return;
        }

        let central_panel_size = ctx.available_rect().size();
        let window_width = central_panel_size.x.min(520.0);
        let window_height = central_panel_size.y.min(460.0);

        let mut open = self.open;
        let window = egui::Window::new("Help")
            .open(&mut open)
            .fixed_size([window_width, window_height])
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .resizable(false)
            .collapsible(false);

        WindowFocusManager::apply_focus_order(window, bring_to_front).show(ctx, |ui| {
            self.ui_content(ui);
        });
        self.open = open;
    }

    fn ui_content(&self, ui: &mut Ui) {
        egui::ScrollArea::vertical().show(ui, |ui| {
            ui.add_space(5.0);

            ui.heading("Generating Content");
            ui.add_space(5.0);
            ui.label("1. Choose a writing style on the Editor tab");
            ui.label("2. Describe what you want in the prompt box");
            ui.label("3. Press Generate Content");
            ui.add_space(5.0);
            ui.label("Every successful generation is added to the History tab.");

            ui.add_space(15.0);

            ui.heading("Writing Styles");
            ui.add_space(5.0);
            for style in WRITING_STYLES.iter() {
                ui.horizontal(|ui| {
                    ui.label(RichText::new(style.id).strong());
                    ui.label(format!("- {}", style.name));
                });
            }

            ui.add_space(15.0);

            ui.heading("Exporting");
            ui.add_space(5.0);
            for format in ExportFormat::ALL {
                ui.horizontal(|ui| {
                    ui.label(RichText::new(format.button_label()).strong());
                    ui.label(format!("- saves {}", format.file_name()));
                });
            }
            ui.label("Files are written to the export directory from config.toml (Downloads by default).");

            ui.add_space(15.0);

            ui.label(
                RichText::new(format!(
                    "Version {} ({} @ {})",
                    env!("CARGO_PKG_VERSION"),
                    env!("GIT_BRANCH"),
                    env!("GIT_COMMIT")
                ))
                .weak(),
            );
            ui.add_space(20.0);
        });
    }
}

impl FocusableWindow for HelpWindow {
    type ShowParams = SimpleShowParams;

    fn window_id(&self) -> &'static str {
        "help_window"
    }

    fn window_title(&self) -> String {
        "Help".to_string()
    }

    fn is_open(&self) -> bool {
        self.open
    }

    fn show_with_focus(
        &mut self,
        ctx: &egui::Context,
        _params: Self::ShowParams,
        bring_to_front: bool,
    ) {
        HelpWindow::show_with_focus(self, ctx, bring_to_front);
    }
}
