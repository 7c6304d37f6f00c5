//! Word validation
//!
//! A pure pipeline that decides whether a candidate may be played against a
//! root word. Dictionary lookups go through the [`Dictionary`] trait so any
//! word source can be plugged in.

mod dictionary;
mod pipeline;
mod rejection;

pub use dictionary::{Dictionary, WordSet};
pub use pipeline::{Accepted, Validator};
pub use rejection::{Alert, Rejection};
