pub mod attach_reveal;
pub mod build_timeline;
pub mod render_chart;

pub use attach_reveal::*;
pub use build_timeline::*;
pub use render_chart::*;
