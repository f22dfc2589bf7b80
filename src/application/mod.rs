pub mod coordinator;
pub mod ports;
pub mod use_cases;

pub use coordinator::*;
pub use ports::*;
pub use use_cases::*;
