//! Adapters - concrete implementations of the ports.

pub mod advice;
pub mod model;
pub mod rng;
