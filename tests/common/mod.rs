#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use stablecoin_dashboard_wasm::application::{ChartEngine, DashboardHost, RevealWatcher, TimelineContainer};
use stablecoin_dashboard_wasm::domain::{
    chart::ChartSpec,
    errors::{AppError, AppResult},
    timeline::{RevealBoard, TimelineNodeContent},
};

pub type CallLog = Rc<RefCell<Vec<String>>>;

/// In-memory stand-in for a rendered timeline element.
#[derive(Debug, Clone, PartialEq)]
pub struct MemoryNode {
    pub position: usize,
    pub texts: Vec<String>,
}

pub struct RecordingEngine {
    pub calls: CallLog,
    pub drawn: Vec<(String, ChartSpec)>,
    pub missing_surfaces: Vec<String>,
}

impl ChartEngine for RecordingEngine {
    type Handle = String;

    fn draw(&mut self, surface_id: &str, spec: &ChartSpec) -> AppResult<String> {
        self.calls.borrow_mut().push(format!("draw:{}", surface_id));
        if self.missing_surfaces.iter().any(|id| id == surface_id) {
            return Err(AppError::MissingAnchor(surface_id.to_string()));
        }
        self.drawn.push((surface_id.to_string(), spec.clone()));
        Ok(surface_id.to_string())
    }
}

#[derive(Clone, Default)]
pub struct MemoryContainer {
    pub nodes: Rc<RefCell<Vec<MemoryNode>>>,
}

impl TimelineContainer for MemoryContainer {
    type Node = MemoryNode;

    fn append(&mut self, content: &TimelineNodeContent) -> AppResult<MemoryNode> {
        let mut nodes = self.nodes.borrow_mut();
        let node = MemoryNode {
            position: nodes.len(),
            texts: content.parts().iter().map(|part| part.to_string()).collect(),
        };
        nodes.push(node.clone());
        Ok(node)
    }
}

pub struct MemoryWatcher {
    pub board: RevealBoard<()>,
    pub watched: Vec<MemoryNode>,
}

impl MemoryWatcher {
    pub fn new(threshold: f64) -> Self {
        Self { board: RevealBoard::new(threshold), watched: Vec::new() }
    }

    /// Simulate an intersection report for the node at `index`.
    pub fn report(&mut self, index: usize, ratio: f64) -> bool {
        self.board.observe(index, ratio).is_some()
    }
}

impl RevealWatcher for MemoryWatcher {
    type Node = MemoryNode;

    fn watch(&mut self, node: MemoryNode) -> AppResult<usize> {
        self.watched.push(node);
        Ok(self.board.register(()))
    }

    fn watched_count(&self) -> usize {
        self.board.len()
    }

    fn shown_count(&self) -> usize {
        self.board.shown_count()
    }
}

pub struct MemoryHost {
    pub calls: CallLog,
    pub engine: RecordingEngine,
    pub container: MemoryContainer,
    pub container_ids: Vec<String>,
}

impl MemoryHost {
    /// A page with every default anchor present.
    pub fn new() -> Self {
        let calls: CallLog = Rc::default();
        Self {
            engine: RecordingEngine { calls: calls.clone(), drawn: Vec::new(), missing_surfaces: Vec::new() },
            calls,
            container: MemoryContainer::default(),
            container_ids: vec!["timeline".to_string()],
        }
    }

    pub fn without_surface(mut self, id: &str) -> Self {
        self.engine.missing_surfaces.push(id.to_string());
        self
    }

    pub fn without_container(mut self) -> Self {
        self.container_ids.clear();
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    pub fn appended(&self) -> Vec<MemoryNode> {
        self.container.nodes.borrow().clone()
    }
}

impl DashboardHost for MemoryHost {
    type Engine = RecordingEngine;
    type Node = MemoryNode;
    type Container = MemoryContainer;
    type Watcher = MemoryWatcher;

    fn engine(&mut self) -> &mut RecordingEngine {
        &mut self.engine
    }

    fn timeline_container(&mut self, container_id: &str) -> AppResult<MemoryContainer> {
        self.calls.borrow_mut().push(format!("container:{}", container_id));
        if self.container_ids.iter().any(|id| id == container_id) {
            Ok(self.container.clone())
        } else {
            Err(AppError::MissingAnchor(container_id.to_string()))
        }
    }

    fn reveal_watcher(&mut self, threshold: f64) -> AppResult<MemoryWatcher> {
        self.calls.borrow_mut().push("watcher".to_string());
        Ok(MemoryWatcher::new(threshold))
    }
}
