//! Chart aggregate: declarative chart specs, their formatting and styling.

pub mod entities;
pub mod format;
pub mod services;
pub mod value_objects;

pub use entities::*;
pub use format::*;
pub use services::*;
pub use value_objects::*;
