//! Storage Commands
//!
//! Load/save entry points used by the store, organized by domain.

mod patterns;

pub use patterns::*;
