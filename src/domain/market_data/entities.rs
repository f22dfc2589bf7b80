pub use super::value_objects::{Billions, ShareSplit};
use serde::{Deserialize, Serialize};

/// Domain entity - one bar of the market cap chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketRow {
    pub label: String,
    pub value: Billions,
}

impl MarketRow {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self { label: label.into(), value: Billions::new(value) }
    }

    pub fn is_valid(&self) -> bool {
        !self.label.trim().is_empty() && self.value.is_valid()
    }
}

/// Sum of the row values, in row order.
pub fn total_of(rows: &[MarketRow]) -> Billions {
    rows.iter().map(|row| row.value).sum()
}

/// Domain entity - a milestone on the timeline.
///
/// `year` is a display label, not a date: ranges like `"2022–2023"` are fine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEvent {
    pub year: String,
    pub title: String,
    pub description: String,
}

impl TimelineEvent {
    pub fn new(year: impl Into<String>, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self { year: year.into(), title: title.into(), description: description.into() }
    }
}
