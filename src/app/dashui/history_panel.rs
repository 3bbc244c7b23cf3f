use crate::app::history::History;
use eframe::egui;
use egui::{RichText, Ui};

/// Read-only list of past generations, newest first.
pub struct HistoryPanel;

impl HistoryPanel {
    pub const EMPTY_MESSAGE: &'static str = "No history yet. Generate some content first.";

    pub fn ui(ui: &mut Ui, history: &History, preview_chars: usize) {
        ui.heading("Generation History");
        ui.add_space(10.0);

        if history.is_empty() {
            ui.label(RichText::new(Self::EMPTY_MESSAGE).weak());
            return;
        }

        egui::ScrollArea::vertical()
            .id_salt("history_list")
            .auto_shrink([false, false])
            .show(ui, |ui| {
                for (index, item) in history.iter().enumerate() {
                    ui.push_id(index, |ui| {
                        egui::Frame::group(ui.style()).show(ui, |ui| {
                            ui.set_width(ui.available_width());

                            ui.horizontal(|ui| {
                                ui.label(RichText::new(format!("Style: {}", item.style)).strong());
                                ui.with_layout(
                                    egui::Layout::right_to_left(egui::Align::Center),
                                    |ui| {
                                        ui.label(RichText::new(item.formatted_timestamp()).weak());
                                    },
                                );
                            });

                            ui.label(RichText::new(format!("Prompt: {}", item.prompt)).small());
                            ui.add_space(4.0);
                            ui.label(item.preview(preview_chars));
                        });
                    });
                    ui.add_space(10.0);
                }
            });
    }
}
