//! Prelude module for the ascent_goals crate.
//!
//! Re-exports the derive_more `Display` macro used by the date model.

pub use derive_more::Display;
