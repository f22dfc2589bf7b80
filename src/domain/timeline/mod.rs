//! Timeline aggregate: node content and the one-shot reveal state machine.

pub mod entities;
pub mod reveal;

pub use entities::*;
pub use reveal::*;
