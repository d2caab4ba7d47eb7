//! Leaderboard and history list views

use crate::api::AssetUrls;
use crate::domain::{HistoricalQuery, LeaderboardEntry, RankTier};

/// Position-based styling class
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Podium {
    First,
    Second,
    Other,
}

impl Podium {
    fn for_position(position: usize) -> Self {
        match position {
            1 => Podium::First,
            2 => Podium::Second,
            _ => Podium::Other,
        }
    }
}

/// How names are shown in a list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameCase {
    AsReceived,
    Upper,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardRow {
    /// 1-based
    pub position: usize,
    pub name: String,
    pub score: i64,
    pub badge_url: String,
    pub tier: Option<RankTier>,
    pub podium: Podium,
}

impl BoardRow {
    pub fn position_label(&self) -> String {
        format!("{}º", self.position)
    }

    pub fn score_label(&self) -> String {
        format!("{} Aura Points", self.score)
    }
}

/// Render an ordered list. The result always replaces the previous rows.
pub fn board_rows(
    entries: &[LeaderboardEntry],
    assets: &AssetUrls,
    name_case: NameCase,
) -> Vec<BoardRow> {
    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            let position = index + 1;
            BoardRow {
                position,
                name: match name_case {
                    NameCase::AsReceived => entry.name.clone(),
                    NameCase::Upper => entry.name.to_uppercase(),
                },
                score: entry.score,
                badge_url: assets.badge(&entry.rank),
                tier: entry.rank.tier(),
                podium: Podium::for_position(position),
            }
        })
        .collect()
}

/// Current leaderboard panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardView {
    /// No response received yet in this session
    Waiting,
    Empty,
    Rows(Vec<BoardRow>),
}

impl BoardView {
    pub fn render(entries: Option<&[LeaderboardEntry]>, assets: &AssetUrls) -> Self {
        match entries {
            None => BoardView::Waiting,
            Some([]) => BoardView::Empty,
            Some(entries) => BoardView::Rows(board_rows(entries, assets, NameCase::AsReceived)),
        }
    }
}

/// Historical leaderboard panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HistoryView {
    /// Nothing requested yet
    Idle,
    Searching(HistoricalQuery),
    /// The month had no results
    Empty(HistoricalQuery),
    Failed { query: HistoricalQuery, message: String },
    Rows { query: HistoricalQuery, rows: Vec<BoardRow> },
}

impl HistoryView {
    pub fn loaded(
        query: HistoricalQuery,
        entries: &[LeaderboardEntry],
        assets: &AssetUrls,
    ) -> Self {
        if entries.is_empty() {
            HistoryView::Empty(query)
        } else {
            HistoryView::Rows {
                query,
                rows: board_rows(entries, assets, NameCase::Upper),
            }
        }
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            HistoryView::Idle => Some("Pick a month and search."),
            HistoryView::Searching(_) => Some("SEARCHING..."),
            HistoryView::Empty(_) => Some("NOTHING FOUND."),
            HistoryView::Failed { .. } => Some("SERVER ERROR"),
            HistoryView::Rows { .. } => None,
        }
    }
}
