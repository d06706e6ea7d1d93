//! Extraction module - free text to structured clinical data.
//!
//! Turns raw conversation text into parameter values, symptom tags, and
//! demographic hints. Pure functions of the input text; an extraction miss
//! is never an error.

mod extractor;
mod lexicon;
mod patterns;

pub use extractor::{Extraction, Extractor};
