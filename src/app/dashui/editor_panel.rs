use crate::app::export::ExportFormat;
use crate::app::session::SessionState;
use crate::app::styles::{self, WRITING_STYLES};
use eframe::egui;
use egui::{RichText, Ui};

/// What the user asked for while interacting with the editor this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorAction {
    None,
    Generate,
    Export(ExportFormat),
}

/// Style selector, prompt box, Generate button and the current content.
pub struct EditorPanel;

impl EditorPanel {
    pub const GENERATE_LABEL: &'static str = "Generate Content";
    pub const GENERATING_LABEL: &'static str = "Generating...";
    pub const STYLE_PLACEHOLDER: &'static str = "Choose a writing style";
    pub const PROMPT_HINT: &'static str = "Enter your content prompt here...";

    pub fn ui(ui: &mut Ui, session: &mut SessionState) -> EditorAction {
        let mut action = EditorAction::None;

        ui.label(RichText::new("Select Writing Style").strong());
        let selected_text = session
            .style()
            .map(|id| styles::display_name(id).to_string())
            .unwrap_or_else(|| Self::STYLE_PLACEHOLDER.to_string());
        egui::ComboBox::from_id_salt("writing_style")
            .selected_text(selected_text)
            .width(ui.available_width())
            .show_ui(ui, |ui| {
                for style in WRITING_STYLES.iter() {
                    ui.selectable_value(
                        &mut session.selected_style,
                        Some(style.id.to_string()),
                        style.name,
                    );
                }
            });

        ui.add_space(10.0);

        ui.label(RichText::new("Enter Prompt").strong());
        ui.add(
            egui::TextEdit::multiline(&mut session.prompt)
                .hint_text(Self::PROMPT_HINT)
                .desired_rows(5)
                .desired_width(f32::INFINITY),
        );

        ui.add_space(10.0);

        let label = if session.is_loading() {
            Self::GENERATING_LABEL
        } else {
            Self::GENERATE_LABEL
        };
        ui.horizontal(|ui| {
            let width = (ui.available_width() - 30.0).max(0.0);
            let button = egui::Button::new(label).min_size(egui::vec2(width, 32.0));
            if ui.add_enabled(session.can_generate(), button).clicked() {
                action = EditorAction::Generate;
            }
            if session.is_loading() {
                ui.spinner();
            }
        });

        if let Some(content) = session.generated_content() {
            ui.add_space(20.0);
            ui.heading("Generated Content");
            ui.add_space(5.0);

            egui::Frame::group(ui.style()).show(ui, |ui| {
                ui.set_width(ui.available_width());
                egui::ScrollArea::vertical()
                    .id_salt("generated_content")
                    .max_height(320.0)
                    .show(ui, |ui| {
                        ui.label(content);
                    });
            });

            ui.add_space(10.0);
            ui.horizontal(|ui| {
                for format in ExportFormat::ALL {
                    if ui.button(format.button_label()).clicked() {
                        action = EditorAction::Export(format);
                    }
                }
            });
        }

        action
    }
}
