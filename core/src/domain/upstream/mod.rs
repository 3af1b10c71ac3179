pub mod caller;
pub mod entities;
pub mod envelope;
pub mod payloads;
pub mod ports;
pub mod retry;

pub use entities::*;
pub use ports::*;
