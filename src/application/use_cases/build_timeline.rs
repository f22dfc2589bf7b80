use crate::application::ports::TimelineContainer;
use crate::domain::{
    errors::AppResult,
    logging::LogComponent,
    market_data::TimelineEvent,
    timeline::node_contents,
};
use crate::log_debug;

/// Append one node per event, in order. Stops at the first failed append.
///
/// Calling this twice on the same container appends the nodes twice.
pub fn build_timeline<C: TimelineContainer>(
    container: &mut C,
    events: &[TimelineEvent],
) -> AppResult<Vec<C::Node>> {
    let nodes = node_contents(events)
        .iter()
        .map(|content| container.append(content))
        .collect::<AppResult<Vec<_>>>()?;

    log_debug!(LogComponent::Application("BuildTimeline"), "appended {} timeline nodes", nodes.len());
    Ok(nodes)
}
