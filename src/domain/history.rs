//! Historical leaderboard query (year / month)

use std::fmt;

/// Calendar months in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

impl Month {
    pub const ALL: [Month; 12] = [
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
        Month::July,
        Month::August,
        Month::September,
        Month::October,
        Month::November,
        Month::December,
    ];

    /// 1-based month number as sent to the API
    pub fn number(self) -> u32 {
        self as u32 + 1
    }

    pub fn from_number(number: u32) -> Option<Self> {
        let index = number.checked_sub(1)? as usize;
        Self::ALL.get(index).copied()
    }

    pub fn label(self) -> &'static str {
        match self {
            Month::January => "January",
            Month::February => "February",
            Month::March => "March",
            Month::April => "April",
            Month::May => "May",
            Month::June => "June",
            Month::July => "July",
            Month::August => "August",
            Month::September => "September",
            Month::October => "October",
            Month::November => "November",
            Month::December => "December",
        }
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Error type for history query validation
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
    #[error("Year {year} is out of range ({first}..={last})")]
    YearOutOfRange { year: i32, first: i32, last: i32 },

    #[error("Month {0} is out of range (1..=12)")]
    MonthOutOfRange(u32),
}

/// Validated `(year, month)` pair for `/api/historico`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HistoricalQuery {
    year: i32,
    month: Month,
}

impl HistoricalQuery {
    /// Build a query, checking the year against `epoch_year..=current_year`
    pub fn new(
        year: i32,
        month: u32,
        epoch_year: i32,
        current_year: i32,
    ) -> Result<Self, QueryError> {
        let month = Month::from_number(month).ok_or(QueryError::MonthOutOfRange(month))?;
        if year < epoch_year || year > current_year.max(epoch_year) {
            return Err(QueryError::YearOutOfRange {
                year,
                first: epoch_year,
                last: current_year.max(epoch_year),
            });
        }
        Ok(Self { year, month })
    }

    /// Build a query, pulling the year into the selectable range
    pub fn clamped(year: i32, month: Month, epoch_year: i32, current_year: i32) -> Self {
        Self {
            year: year.clamp(epoch_year, current_year.max(epoch_year)),
            month,
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> Month {
        self.month
    }
}

impl fmt::Display for HistoricalQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.month.label(), self.year)
    }
}

/// Selectable years: epoch year through the current year, inclusive.
///
/// Always contains at least the epoch year, even if the clock is behind it.
pub fn selectable_years(epoch_year: i32, current_year: i32) -> Vec<i32> {
    (epoch_year..=current_year.max(epoch_year)).collect()
}
