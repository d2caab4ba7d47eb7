//! Header bar: tabs, theme toggle, logout

use eframe::egui::{self, RichText};

use super::app::AuraApp;
use super::theme::{BG_SECONDARY, TEXT_DIM, TEXT_MUTED, TEXT_PRIMARY, accent};
use crate::domain::{Tab, Theme};

/// A click in the header, applied after the bar is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum HeaderAction {
    SelectTab(Tab),
    ToggleTheme,
    Logout,
}

impl AuraApp {
    pub(crate) fn render_header(&self, ctx: &egui::Context) -> Option<HeaderAction> {
        let theme = self.controller.theme();
        let accent = accent(theme);
        let mut action = None;

        egui::TopBottomPanel::top("header")
            .frame(egui::Frame::NONE.fill(BG_SECONDARY).inner_margin(8.0))
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(RichText::new("AURA POINTS").strong().color(accent));
                    ui.add_space(24.0);

                    let active = self.controller.tab();
                    for tab in Tab::ALL {
                        let selected = tab == active;
                        let text = RichText::new(tab.title()).strong().color(if selected {
                            TEXT_PRIMARY
                        } else {
                            TEXT_DIM
                        });
                        if ui.selectable_label(selected, text).clicked() && !selected {
                            action = Some(HeaderAction::SelectTab(tab));
                        }
                    }

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("Logout").clicked() {
                            action = Some(HeaderAction::Logout);
                        }

                        let toggle_label = match theme {
                            Theme::Role => "Rank mode",
                            Theme::Rank => "Role mode",
                        };
                        if ui.button(toggle_label).clicked() {
                            action = Some(HeaderAction::ToggleTheme);
                        }

                        if let Some(session) = self.controller.session() {
                            ui.label(
                                RichText::new(format!("ID {}", session.user_id))
                                    .small()
                                    .color(TEXT_MUTED),
                            );
                        }
                    });
                });
            });

        action
    }
}
