//! Cloudflare D1 engine.
//!
//! Talks to the D1 HTTP query API with `reqwest`. D1 persists each statement
//! itself, so there is no local state to flush.

mod engine;
mod error;

pub use engine::D1Engine;
