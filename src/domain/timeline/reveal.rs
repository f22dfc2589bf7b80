use derive_more::Display;

/// Fraction of a node that must be on screen before it is revealed.
pub const DEFAULT_REVEAL_THRESHOLD: f64 = 0.10;

/// `Hidden --[ratio >= threshold]--> Shown`; `Shown` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum RevealState {
    #[display(fmt = "hidden")]
    Hidden,
    #[display(fmt = "shown")]
    Shown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealTransition {
    pub index: usize,
}

struct RevealSlot<W> {
    state: RevealState,
    watch: Option<W>,
}

/// Per-node reveal state plus the subscription that feeds it.
///
/// `W` is the watch handle for one node; it is dropped on the node's first
/// qualifying report, which is what stops further notifications.
pub struct RevealBoard<W> {
    slots: Vec<RevealSlot<W>>,
    threshold: f64,
}

impl<W> RevealBoard<W> {
    pub fn new(threshold: f64) -> Self {
        Self { slots: Vec::new(), threshold }
    }

    /// Track a new node, hidden and watched. Returns its index.
    pub fn register(&mut self, watch: W) -> usize {
        self.slots.push(RevealSlot { state: RevealState::Hidden, watch: Some(watch) });
        self.slots.len() - 1
    }

    pub fn qualifies(&self, ratio: f64) -> bool {
        ratio >= self.threshold
    }

    /// Feed one visibility report. Returns the transition if this report
    /// revealed the node; later reports for the same node are ignored.
    pub fn observe(&mut self, index: usize, ratio: f64) -> Option<RevealTransition> {
        let qualifies = self.qualifies(ratio);
        let slot = self.slots.get_mut(index)?;
        if slot.state == RevealState::Shown || !qualifies {
            return None;
        }
        slot.state = RevealState::Shown;
        slot.watch = None;
        Some(RevealTransition { index })
    }

    pub fn state(&self, index: usize) -> Option<RevealState> {
        self.slots.get(index).map(|slot| slot.state)
    }

    pub fn is_watching(&self, index: usize) -> bool {
        self.slots.get(index).is_some_and(|slot| slot.watch.is_some())
    }

    pub fn shown_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.state == RevealState::Shown).count()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Drop every remaining watch without changing any state.
    pub fn release_all(&mut self) {
        for slot in &mut self.slots {
            slot.watch = None;
        }
    }
}

impl<W> Default for RevealBoard<W> {
    fn default() -> Self {
        Self::new(DEFAULT_REVEAL_THRESHOLD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    /// Counts how many watches were dropped.
    struct CountingWatch(Rc<Cell<usize>>);

    impl Drop for CountingWatch {
        fn drop(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    #[test]
    fn node_starts_hidden_and_watched() {
        let mut board = RevealBoard::default();
        let idx = board.register(());
        assert_eq!(board.state(idx), Some(RevealState::Hidden));
        assert!(board.is_watching(idx));
    }

    #[test]
    fn below_threshold_keeps_node_hidden() {
        let mut board = RevealBoard::default();
        let idx = board.register(());
        assert_eq!(board.observe(idx, 0.05), None);
        assert_eq!(board.observe(idx, 0.0), None);
        assert_eq!(board.state(idx), Some(RevealState::Hidden));
        assert!(board.is_watching(idx));
    }

    #[test]
    fn first_qualifying_report_reveals_and_drops_watch() {
        let dropped = Rc::new(Cell::new(0));
        let mut board = RevealBoard::new(0.1);
        let idx = board.register(CountingWatch(dropped.clone()));

        assert_eq!(board.observe(idx, 0.1), Some(RevealTransition { index: idx }));
        assert_eq!(board.state(idx), Some(RevealState::Shown));
        assert!(!board.is_watching(idx));
        assert_eq!(dropped.get(), 1);

        assert_eq!(board.observe(idx, 1.0), None);
        assert_eq!(board.observe(idx, 0.0), None);
        assert_eq!(board.state(idx), Some(RevealState::Shown));
        assert_eq!(dropped.get(), 1);
    }

    #[test]
    fn nodes_reveal_independently() {
        let mut board = RevealBoard::default();
        let a = board.register(());
        let b = board.register(());
        board.observe(b, 0.5);
        assert_eq!(board.state(a), Some(RevealState::Hidden));
        assert_eq!(board.state(b), Some(RevealState::Shown));
        assert_eq!(board.shown_count(), 1);
    }

    #[test]
    fn unknown_index_is_ignored() {
        let mut board: RevealBoard<()> = RevealBoard::default();
        assert_eq!(board.observe(3, 1.0), None);
        assert_eq!(board.state(3), None);
    }

    #[test]
    fn just_below_threshold_does_not_reveal() {
        let mut board = RevealBoard::new(0.10);
        let idx = board.register(());
        assert!(!board.qualifies(0.0999));
        assert_eq!(board.observe(idx, 0.0991), None);
        assert_eq!(board.state(idx), Some(RevealState::Hidden));
        assert!(board.is_watching(idx));
        assert!(board.qualifies(0.10));
    }
}
