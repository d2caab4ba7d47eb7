//! Theme application for AuraApp

use eframe::egui::{self, Stroke};

use super::app::AuraApp;
use super::theme::{BG_HIGHLIGHT, BG_PRIMARY, BG_SECONDARY, TEXT_PRIMARY, accent};

impl AuraApp {
    /// Apply the dark theme, tinted by the active presentation theme
    pub(crate) fn apply_theme(&self, ctx: &egui::Context) {
        let accent = accent(self.controller.theme());

        let mut style = (*ctx.style()).clone();
        style.visuals.dark_mode = true;
        style.visuals.panel_fill = BG_PRIMARY;
        style.visuals.window_fill = BG_SECONDARY;
        style.visuals.extreme_bg_color = BG_SECONDARY;
        style.visuals.widgets.noninteractive.bg_fill = BG_SECONDARY;
        style.visuals.widgets.inactive.bg_fill = BG_SECONDARY;
        style.visuals.widgets.hovered.bg_fill = BG_HIGHLIGHT;
        style.visuals.widgets.active.bg_fill = BG_HIGHLIGHT;
        style.visuals.selection.bg_fill = accent;
        style.visuals.selection.stroke = Stroke::new(1.0, TEXT_PRIMARY);
        ctx.set_style(style);
    }
}
