//! Ranking rows, shared by the leaderboard and history panels

use eframe::egui::{self, RichText, Stroke, Vec2};

use super::app::AuraApp;
use super::theme::{
    ACCENT_RED, BG_SECONDARY, TEXT_MUTED, TEXT_PRIMARY, podium_border, podium_color, tier_glow,
};
use crate::api::ApiError;
use crate::domain::RankTier;
use crate::view::{BoardRow, BoardView};

const ROW_BADGE_SIZE: f32 = 96.0;

impl AuraApp {
    pub(crate) fn render_leaderboard(&mut self, ui: &mut egui::Ui) {
        ui.add_space(8.0);
        match self.controller.leaderboard_view() {
            BoardView::Waiting => {
                ui.label(RichText::new("LOADING...").color(TEXT_MUTED));
            }
            BoardView::Empty => {
                ui.label(RichText::new("No scores this month yet.").color(TEXT_MUTED));
            }
            BoardView::Rows(rows) => render_rows(ui, &rows),
        }
        render_stale_notice(ui, self.controller.leaderboard_error());
    }
}

pub(crate) fn render_rows(ui: &mut egui::Ui, rows: &[BoardRow]) {
    for row in rows {
        render_row(ui, row);
        ui.add_space(8.0);
    }
}

fn render_row(ui: &mut egui::Ui, row: &BoardRow) {
    egui::Frame::NONE
        .fill(BG_SECONDARY)
        .stroke(Stroke::new(1.0, podium_border(row.podium)))
        .corner_radius(10.0)
        .inner_margin(12.0)
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.add_sized(
                    [56.0, ROW_BADGE_SIZE],
                    egui::Label::new(
                        RichText::new(row.position_label())
                            .size(28.0)
                            .strong()
                            .color(podium_color(row.podium)),
                    ),
                );
                ui.label(RichText::new(&row.name).size(18.0).strong().color(TEXT_PRIMARY));

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    render_badge(ui, &row.badge_url, row.tier, ROW_BADGE_SIZE);
                    ui.add_space(12.0);
                    ui.label(RichText::new(row.score_label()).size(24.0).color(ACCENT_RED));
                });
            });
        });
}

/// Badge image with its tier glow behind it
pub(crate) fn render_badge(ui: &mut egui::Ui, url: &str, tier: Option<RankTier>, size: f32) {
    let (rect, _response) = ui.allocate_exact_size(Vec2::splat(size), egui::Sense::hover());
    if let Some(glow) = tier_glow(tier) {
        ui.painter()
            .circle_filled(rect.center(), size * 0.42, glow.gamma_multiply(0.35));
    }
    egui::Image::new(url)
        .fit_to_exact_size(Vec2::splat(size))
        .paint_at(ui, rect);
}

/// Small note under a panel whose last refresh failed
pub(crate) fn render_stale_notice(ui: &mut egui::Ui, error: Option<&ApiError>) {
    if let Some(error) = error {
        ui.add_space(8.0);
        ui.label(
            RichText::new(format!("Last refresh failed, showing previous data ({})", error))
                .small()
                .color(TEXT_MUTED),
        );
    }
}
