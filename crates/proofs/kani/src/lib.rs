//! Kani proofs for the allocation model

#![cfg_attr(kani, feature(register_tool), register_tool(kanitool))]

pub mod generators;

#[cfg(kani)]
pub mod safety;
