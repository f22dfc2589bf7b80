use web_sys::{Document, Element};

use crate::application::ports::DashboardHost;
use crate::domain::{errors::AppResult, logging::LogComponent};
use crate::infrastructure::{
    dom::{document, ensure_reveal_styles},
    rendering::{ChartJsEngine, DomTimelineContainer, IntersectionRevealWatcher},
};
use crate::log_warn;

/// The real page: Chart.js for charts, DOM elements for the timeline and an
/// `IntersectionObserver` for the reveal.
pub struct BrowserHost {
    document: Document,
    engine: ChartJsEngine,
}

impl BrowserHost {
    pub fn new(document: Document) -> Self {
        Self { engine: ChartJsEngine::new(document.clone()), document }
    }

    /// Host bound to the current window's document.
    pub fn current() -> AppResult<Self> {
        Ok(Self::new(document()?))
    }
}

impl DashboardHost for BrowserHost {
    type Engine = ChartJsEngine;
    type Node = Element;
    type Container = DomTimelineContainer;
    type Watcher = IntersectionRevealWatcher;

    fn engine(&mut self) -> &mut ChartJsEngine {
        &mut self.engine
    }

    fn timeline_container(&mut self, container_id: &str) -> AppResult<DomTimelineContainer> {
        DomTimelineContainer::from_id(self.document.clone(), container_id)
    }

    fn reveal_watcher(&mut self, threshold: f64) -> AppResult<IntersectionRevealWatcher> {
        // Missing styles only cost the animation, not the reveal itself.
        if let Err(err) = ensure_reveal_styles(&self.document) {
            log_warn!(LogComponent::Infrastructure("BrowserHost"), "reveal styles not installed: {}", err);
        }
        IntersectionRevealWatcher::new(threshold)
    }
}
