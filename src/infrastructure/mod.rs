//! Browser-side implementations of the application ports.

pub mod browser_host;
pub mod data;
pub mod dom;
pub mod rendering;
pub mod services;

pub use browser_host::BrowserHost;
pub use data::StaticDataProvider;
