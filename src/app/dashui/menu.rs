use crate::app::dashui::app::ThemeChoice;
use eframe::egui;
use egui::RichText;

#[derive(Debug, PartialEq)]
pub enum MenuAction {
    None,
    ThemeChanged,
    ShowHelp,
    ShowEditor,
    ShowHistory,
    Quit,
}

pub fn build_menu(ui: &mut egui::Ui, ctx: &egui::Context, theme: &mut ThemeChoice) -> MenuAction {
    let mut menu_action = MenuAction::None;
    let original_theme = *theme;

    ui.menu_button("File", |ui| {
        if ui.button("Editor").clicked() {
            menu_action = MenuAction::ShowEditor;
        }
        if ui.button("History").clicked() {
            menu_action = MenuAction::ShowHistory;
        }
        ui.separator();
        if ui.button("Help").clicked() {
            menu_action = MenuAction::ShowHelp;
        }
        ui.separator();
        if ui.button("Quit").clicked() {
            menu_action = MenuAction::Quit;
        }
    });

    ui.menu_button(RichText::new("🎨").size(18.0), |ui| {
        for choice in ThemeChoice::ALL {
            if ui
                .selectable_label(*theme == choice, choice.to_string())
                .clicked()
            {
                choice.apply(ctx);
                *theme = choice;
            }
        }
    });

    if menu_action == MenuAction::None && *theme != original_theme {
        menu_action = MenuAction::ThemeChanged;
    }

    menu_action
}
