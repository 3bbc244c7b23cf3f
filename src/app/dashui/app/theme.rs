//! Catppuccin theme handling

use super::{ContentApp, ThemeChoice};
use eframe::egui;

impl ThemeChoice {
    /// Apply this flavour to the context, with squarer window corners than the Catppuccin default
    pub fn apply(&self, ctx: &egui::Context) {
        match self {
            ThemeChoice::Latte => catppuccin_egui::set_theme(ctx, catppuccin_egui::LATTE),
            ThemeChoice::Frappe => catppuccin_egui::set_theme(ctx, catppuccin_egui::FRAPPE),
            ThemeChoice::Macchiato => catppuccin_egui::set_theme(ctx, catppuccin_egui::MACCHIATO),
            ThemeChoice::Mocha => catppuccin_egui::set_theme(ctx, catppuccin_egui::MOCHA),
        }

        let mut style = (*ctx.style()).clone();
        style.visuals.window_corner_radius = egui::CornerRadius::same(2);
        ctx.set_style(style);
    }
}

impl ContentApp {
    pub(super) fn apply_theme(&self, ctx: &egui::Context) {
        self.theme.apply(ctx);
    }
}
