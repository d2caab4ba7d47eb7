//! Profile panel: name, rank/role label, badge and milestone progress

use eframe::egui::{self, RichText, Vec2};

use super::app::AuraApp;
use super::board::{render_badge, render_stale_notice};
use super::theme::{
    BG_HIGHLIGHT, BG_SECONDARY, TEXT_DIM, TEXT_MUTED, TEXT_PRIMARY, accent, tier_text,
};
use crate::view::LabelKind;

const PROFILE_BADGE_SIZE: f32 = 220.0;

impl AuraApp {
    pub(crate) fn render_profile(&mut self, ui: &mut egui::Ui) {
        let Some(view) = self.controller.profile_view() else {
            ui.add_space(8.0);
            ui.label(RichText::new("LOADING...").color(TEXT_MUTED));
            render_stale_notice(ui, self.controller.profile_error());
            return;
        };
        let accent = accent(self.controller.theme());

        ui.add_space(16.0);
        ui.vertical_centered(|ui| {
            ui.label(RichText::new(&view.name).size(32.0).strong().color(TEXT_PRIMARY));
            ui.add_space(8.0);

            render_badge(ui, &view.badge_url, view.tier, PROFILE_BADGE_SIZE);
            ui.add_space(8.0);

            let label_color = match view.label_kind {
                LabelKind::Rank(tier) => tier_text(tier),
                LabelKind::Role => TEXT_DIM,
            };
            ui.label(RichText::new(&view.label).size(24.0).strong().color(label_color));
            ui.add_space(16.0);

            egui::Frame::NONE
                .fill(BG_SECONDARY)
                .corner_radius(8.0)
                .inner_margin(16.0)
                .show(ui, |ui| {
                    ui.set_width(420.0);
                    ui.label(RichText::new("NEXT MILESTONE").small().color(TEXT_MUTED));
                    ui.add_space(4.0);

                    let bar_width = 388.0;
                    let bar_height = 14.0;
                    let (rect, _response) = ui.allocate_exact_size(
                        Vec2::new(bar_width, bar_height),
                        egui::Sense::hover(),
                    );
                    let painter = ui.painter();
                    painter.rect_filled(rect, 4.0, BG_HIGHLIGHT);
                    let mut filled = rect;
                    filled.set_width(bar_width * view.progress);
                    painter.rect_filled(filled, 4.0, accent);

                    ui.add_space(6.0);
                    ui.horizontal(|ui| {
                        ui.label(
                            RichText::new(format!("{} tickets", view.counter))
                                .strong()
                                .color(TEXT_PRIMARY),
                        );
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            ui.label(RichText::new(format!("{}%", view.percent())).color(TEXT_DIM));
                        });
                    });
                });
        });

        render_stale_notice(ui, self.controller.profile_error());
    }
}
