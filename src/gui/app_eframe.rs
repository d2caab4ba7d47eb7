//! eframe::App implementation for AuraApp
//!
//! Contains the main update loop that runs every frame.

use std::time::Duration;

use eframe::egui;

use super::app::AuraApp;

/// Repaint at least this often so player exit is noticed without input
const IDLE_REPAINT: Duration = Duration::from_millis(500);

impl eframe::App for AuraApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Apply fetch results posted by the poll loop and history queries
        self.controller.pump();

        self.apply_theme(ctx);

        if !self.controller.is_authenticated() {
            self.render_login(ctx);
            return;
        }

        let action = self.render_header(ctx);
        if !self.handle_header(action) {
            // Logged out from the header: the login surface takes over next frame
            ctx.request_repaint();
            return;
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| match self.controller.tab() {
                    crate::domain::Tab::Profile => self.render_profile(ui),
                    crate::domain::Tab::Leaderboard => self.render_leaderboard(ui),
                    crate::domain::Tab::History => self.render_history(ui),
                });
        });

        self.render_video(ctx);

        if self.controller.video().is_some() {
            ctx.request_repaint_after(IDLE_REPAINT);
        }
    }
}
