//! What the use cases need from the host page. The browser implementations
//! live in `infrastructure`; tests provide in-memory ones.

use crate::domain::{chart::ChartSpec, errors::AppResult, timeline::TimelineNodeContent};

/// External charting engine: turns a spec into a drawn chart on a surface.
pub trait ChartEngine {
    /// Keeps the drawn chart alive; dropping it may tear the chart down.
    type Handle;

    fn draw(&mut self, surface_id: &str, spec: &ChartSpec) -> AppResult<Self::Handle>;
}

/// Element that receives timeline nodes.
pub trait TimelineContainer {
    type Node;

    /// Append one node at the end. Not idempotent.
    fn append(&mut self, content: &TimelineNodeContent) -> AppResult<Self::Node>;
}

/// Visibility watch that reveals nodes once.
pub trait RevealWatcher {
    type Node;

    /// Start watching `node`. Returns the node's index on the board.
    fn watch(&mut self, node: Self::Node) -> AppResult<usize>;

    fn watched_count(&self) -> usize;

    fn shown_count(&self) -> usize;
}

/// Everything bootstrap needs, bundled so the sequence can run against a
/// real document or a test double.
pub trait DashboardHost {
    type Engine: ChartEngine;
    type Node;
    type Container: TimelineContainer<Node = Self::Node>;
    type Watcher: RevealWatcher<Node = Self::Node>;

    fn engine(&mut self) -> &mut Self::Engine;

    fn timeline_container(&mut self, container_id: &str) -> AppResult<Self::Container>;

    fn reveal_watcher(&mut self, threshold: f64) -> AppResult<Self::Watcher>;
}

pub type ChartHandleOf<H> = <<H as DashboardHost>::Engine as ChartEngine>::Handle;
