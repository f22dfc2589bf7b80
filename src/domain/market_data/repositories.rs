use crate::domain::market_data::{MarketRow, ShareSplit, TimelineEvent};

/// Source of everything the dashboard displays.
///
/// Implementations are pure and deterministic: the same calls always return
/// the same content and nothing can fail.
pub trait DashboardDataProvider {
    /// Market cap rows in display order.
    fn market_rows(&self) -> Vec<MarketRow>;

    /// Stablecoin vs. rest-of-market split.
    fn share_split(&self) -> ShareSplit;

    /// Timeline milestones in chronological (authoring) order.
    fn timeline_events(&self) -> Vec<TimelineEvent>;
}
