//! Milestone video overlay
//!
//! The video itself plays in an external player; this surface announces the
//! milestone and offers manual start and dismissal.

use eframe::egui::{self, Align2, RichText};

use super::app::AuraApp;
use super::theme::{ACCENT_GOLD, TEXT_DIM, TEXT_MUTED};

impl AuraApp {
    pub(crate) fn render_video(&mut self, ctx: &egui::Context) {
        let Some(milestone) = self.controller.video().cloned() else {
            return;
        };

        let mut play = false;
        let mut close = false;

        egui::Window::new("milestone_video")
            .title_bar(false)
            .collapsible(false)
            .resizable(false)
            .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.set_min_width(360.0);
                ui.vertical_centered(|ui| {
                    ui.label(
                        RichText::new("MILESTONE REACHED")
                            .size(26.0)
                            .strong()
                            .color(ACCENT_GOLD),
                    );
                    ui.add_space(6.0);
                    ui.label(
                        RichText::new(format!("{} tickets", milestone.score))
                            .size(18.0)
                            .color(TEXT_DIM),
                    );
                    ui.add_space(6.0);
                    ui.label(RichText::new(&milestone.video_id).small().color(TEXT_MUTED));
                    ui.add_space(12.0);
                    ui.horizontal(|ui| {
                        play = ui.button("▶ Play").clicked();
                        close = ui.button("✕ Close").clicked();
                    });
                });
            });

        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            close = true;
        }

        if play {
            self.controller.replay_video();
        }
        if close {
            self.controller.dismiss_video();
        }
    }
}
