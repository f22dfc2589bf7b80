//! Pure dashboard model. Nothing in here touches the browser, so it is all
//! testable natively.

pub mod chart;
pub mod errors;
pub mod logging;
pub mod market_data;
pub mod timeline;
