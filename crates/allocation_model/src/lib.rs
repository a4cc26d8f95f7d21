//! Pure allocation model for the fair-launch auction
//! No external dependencies, no unwrap/panic, all functions total

pub mod math;
pub mod distribution;
pub mod helpers;

// Re-export commonly used items
pub use distribution::*;
pub use helpers::*;
