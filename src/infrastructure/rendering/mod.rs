pub mod chartjs;
pub mod reveal_observer;
pub mod timeline_dom;

pub use chartjs::{ChartHandle, ChartJsEngine};
pub use reveal_observer::{IntersectionRevealWatcher, NodeWatch};
pub use timeline_dom::DomTimelineContainer;
