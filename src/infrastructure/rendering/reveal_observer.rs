use std::cell::RefCell;
use std::rc::Rc;

use js_sys::Array;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::application::ports::RevealWatcher;
use crate::domain::{
    errors::{AppError, AppResult},
    logging::LogComponent,
    timeline::RevealBoard,
};
use crate::infrastructure::dom::{REVEAL_INDEX_ATTR, VISIBLE_CLASS};
use crate::{log_trace, log_warn};

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// Subscription for one node. Dropping it stops the observer from reporting
/// on the element again.
pub struct NodeWatch {
    observer: IntersectionObserver,
    element: Element,
}

impl Drop for NodeWatch {
    fn drop(&mut self) {
        self.observer.unobserve(&self.element);
    }
}

/// Reveals timeline nodes with an `IntersectionObserver`: the first report of
/// at least `threshold` visibility adds the `visible` class and unobserves the
/// node.
pub struct IntersectionRevealWatcher {
    observer: IntersectionObserver,
    board: Rc<RefCell<RevealBoard<NodeWatch>>>,
    _callback: ObserverCallback,
}

impl IntersectionRevealWatcher {
    pub fn new(threshold: f64) -> AppResult<Self> {
        let board = Rc::new(RefCell::new(RevealBoard::new(threshold)));

        let callback_board = Rc::clone(&board);
        let callback = Closure::wrap(Box::new(move |entries: Array, _observer: IntersectionObserver| {
            for entry in entries.iter() {
                handle_entry(&callback_board, &entry.unchecked_into::<IntersectionObserverEntry>());
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));
        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
            .map_err(|e| AppError::browser("IntersectionObserver", e))?;

        Ok(Self { observer, board, _callback: callback })
    }

    /// Whether the node at `index` still waits for its reveal.
    pub fn is_watching(&self, index: usize) -> bool {
        self.board.borrow().is_watching(index)
    }
}

impl RevealWatcher for IntersectionRevealWatcher {
    type Node = Element;

    fn watch(&mut self, node: Element) -> AppResult<usize> {
        let index = self.board.borrow_mut().register(NodeWatch {
            observer: self.observer.clone(),
            element: node.clone(),
        });
        node.set_attribute(REVEAL_INDEX_ATTR, &index.to_string())
            .map_err(|e| AppError::browser("set_attribute", e))?;
        self.observer.observe(&node);
        Ok(index)
    }

    fn watched_count(&self) -> usize {
        self.board.borrow().len()
    }

    fn shown_count(&self) -> usize {
        self.board.borrow().shown_count()
    }
}

impl Drop for IntersectionRevealWatcher {
    fn drop(&mut self) {
        self.board.borrow_mut().release_all();
        self.observer.disconnect();
    }
}

fn handle_entry(board: &RefCell<RevealBoard<NodeWatch>>, entry: &IntersectionObserverEntry) {
    if !entry.is_intersecting() {
        return;
    }
    let target = entry.target();
    let Some(index) = target
        .get_attribute(REVEAL_INDEX_ATTR)
        .and_then(|raw| raw.parse::<usize>().ok())
    else {
        log_warn!(LogComponent::Infrastructure("Reveal"), "observed element without {}", REVEAL_INDEX_ATTR);
        return;
    };

    let ratio = entry.intersection_ratio();
    let revealed = board.borrow_mut().observe(index, ratio);
    if revealed.is_some() {
        if let Err(e) = target.class_list().add_1(VISIBLE_CLASS) {
            log_warn!(LogComponent::Infrastructure("Reveal"), "failed to mark node {} visible: {:?}", index, e);
        }
        log_trace!(LogComponent::Infrastructure("Reveal"), "node {} revealed at ratio {:.2}", index, ratio);
    }
}
