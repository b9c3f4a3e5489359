//! Core types and trait definitions for the BMI tracker.
//!
//! This crate is deliberately free of database and terminal dependencies.
//! The SQLite backend and the terminal front end both depend on it.

// We intentionally use native `async fn` in traits (stabilised in Rust 1.75).
// Suppress the advisory lint about `Send` bounds on the returned futures.
#![allow(async_fn_in_trait)]

pub mod bmi;
pub mod calculator;
pub mod error;
pub mod measurement;
pub mod record;
pub mod store;

pub use error::{Error, Result};
