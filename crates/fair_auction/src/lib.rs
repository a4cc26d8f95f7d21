//! Fair-launch auction engine
//!
//! Participants contribute a payment asset during a fixed window in exchange
//! for a pro-rata claim on a fixed project-token supply, subject to a global
//! raise cap and a per-wallet cap. Claims and the unsold-token burn happen
//! once the window has closed.

pub mod config;
pub mod engine;
pub mod error;
pub mod events;
pub mod memory;
pub mod ports;
pub mod state;


pub use config::*;
pub use engine::*;
pub use error::*;
pub use events::*;
pub use ports::*;
pub use state::*;
