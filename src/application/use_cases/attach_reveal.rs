use crate::application::ports::RevealWatcher;
use crate::domain::{errors::AppResult, logging::LogComponent};
use crate::log_debug;

/// Watch every node for its first qualifying intersection.
/// Returns how many nodes are now watched.
pub fn attach_reveal_behavior<W: RevealWatcher>(
    watcher: &mut W,
    nodes: impl IntoIterator<Item = W::Node>,
) -> AppResult<usize> {
    let mut attached = 0;
    for node in nodes {
        watcher.watch(node)?;
        attached += 1;
    }

    log_debug!(LogComponent::Application("AttachReveal"), "watching {} timeline nodes", attached);
    Ok(attached)
}
