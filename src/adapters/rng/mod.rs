//! Random-source adapters.

mod thread_rng;

pub use thread_rng::{FixedSource, ThreadRngSource};
