//! Functional core for logbook: journal and todo domain types, validation,
//! storage contracts, and login types. Nothing in here performs I/O.

pub mod auth;
pub mod journal;
pub mod serde;
pub mod storage;
