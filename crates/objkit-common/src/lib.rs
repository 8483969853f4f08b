//! Common utilities for the objkit crates.
//!
//! This crate provides shared infrastructure used by the other members:
//! - **Warning System** - colored terminal output for recoverable oddities

pub mod warning;
