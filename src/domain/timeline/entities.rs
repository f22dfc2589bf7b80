use crate::domain::market_data::TimelineEvent;

/// Text of one rendered timeline node, in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimelineNodeContent {
    pub index: usize,
    pub year: String,
    pub title: String,
    pub description: String,
}

impl TimelineNodeContent {
    pub fn from_event(index: usize, event: &TimelineEvent) -> Self {
        Self {
            index,
            year: event.year.clone(),
            title: event.title.clone(),
            description: event.description.clone(),
        }
    }

    /// Year, title, description.
    pub fn parts(&self) -> [&str; 3] {
        [&self.year, &self.title, &self.description]
    }
}

/// One node per event, same order, no filtering.
pub fn node_contents(events: &[TimelineEvent]) -> Vec<TimelineNodeContent> {
    events
        .iter()
        .enumerate()
        .map(|(index, event)| TimelineNodeContent::from_event(index, event))
        .collect()
}
