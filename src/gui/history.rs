//! Historical leaderboard panel with year/month selectors

use eframe::egui::{self, RichText};

use super::app::AuraApp;
use super::board::render_rows;
use super::theme::{ACCENT_RED, TEXT_DIM, TEXT_MUTED};
use crate::domain::Month;
use crate::view::HistoryView;

impl AuraApp {
    pub(crate) fn render_history(&mut self, ui: &mut egui::Ui) {
        let selection = self.controller.history_selection();
        let mut year = selection.year();
        let mut month = selection.month();

        ui.add_space(8.0);
        ui.horizontal(|ui| {
            egui::ComboBox::from_id_salt("history_year")
                .selected_text(year.to_string())
                .show_ui(ui, |ui| {
                    for candidate in self.controller.history_years() {
                        ui.selectable_value(&mut year, candidate, candidate.to_string());
                    }
                });

            egui::ComboBox::from_id_salt("history_month")
                .selected_text(month.label())
                .show_ui(ui, |ui| {
                    for candidate in Month::ALL {
                        ui.selectable_value(&mut month, candidate, candidate.label());
                    }
                });

            if (year, month) != (selection.year(), selection.month()) {
                if let Err(e) = self.controller.select_history(year, month.number()) {
                    tracing::warn!("Rejected history selection: {}", e);
                }
            }

            let searching = matches!(self.controller.history_view(), HistoryView::Searching(_));
            if ui
                .add_enabled(!searching, egui::Button::new(RichText::new("SEARCH").strong()))
                .clicked()
            {
                self.controller.query_history();
            }
        });
        ui.add_space(12.0);

        let view = self.controller.history_view();
        match &view {
            HistoryView::Rows { query, rows } => {
                ui.label(RichText::new(query.to_string()).small().color(TEXT_DIM));
                ui.add_space(4.0);
                render_rows(ui, rows);
            }
            HistoryView::Failed { message, .. } => {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new(view.message().unwrap_or_default()).color(ACCENT_RED));
                    ui.label(RichText::new(message).small().color(TEXT_MUTED));
                });
            }
            HistoryView::Idle | HistoryView::Searching(_) | HistoryView::Empty(_) => {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new(view.message().unwrap_or_default()).color(TEXT_MUTED));
                });
            }
        }
    }
}
