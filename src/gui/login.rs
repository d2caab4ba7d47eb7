//! Login surface

use eframe::egui::{self, Key, RichText};

use super::app::AuraApp;
use super::theme::{ACCENT_RED, BG_SECONDARY, TEXT_DIM, TEXT_MUTED, accent};

impl AuraApp {
    /// Full-screen login prompt. Enter or the button submits.
    pub(crate) fn render_login(&mut self, ctx: &egui::Context) {
        let accent = accent(self.controller.theme());

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(ui.available_height() * 0.25);
                ui.label(RichText::new("AURA POINTS").size(36.0).strong().color(accent));
                ui.add_space(24.0);

                egui::Frame::NONE
                    .fill(BG_SECONDARY)
                    .corner_radius(8.0)
                    .inner_margin(24.0)
                    .show(ui, |ui| {
                        ui.set_max_width(320.0);
                        ui.label(RichText::new("Agent ID").color(TEXT_DIM));
                        ui.add_space(4.0);

                        let response = ui.add(
                            egui::TextEdit::singleline(&mut self.login_input)
                                .hint_text("e.g. 20269")
                                .desired_width(280.0),
                        );
                        if self.focus_login {
                            response.request_focus();
                            self.focus_login = false;
                        }

                        let enter =
                            response.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter));
                        ui.add_space(12.0);
                        let clicked = ui
                            .add_enabled(
                                !self.login_input.trim().is_empty(),
                                egui::Button::new(RichText::new("ENTER").strong()),
                            )
                            .clicked();

                        if enter || clicked {
                            self.submit_login();
                        }

                        if let Some(notice) = self.controller.notice() {
                            ui.add_space(12.0);
                            ui.label(
                                RichText::new(format!("Session ended: {}", notice))
                                    .small()
                                    .color(ACCENT_RED),
                            );
                        }
                    });

                ui.add_space(12.0);
                ui.label(
                    RichText::new("Your ID is remembered until you log out.")
                        .small()
                        .color(TEXT_MUTED),
                );
            });
        });
    }
}
