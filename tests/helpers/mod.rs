//! Test helpers module
//!
//! This module provides utilities for driving the Academy Ledger router
//! in-process against a throwaway SQLite database.

#![allow(dead_code)]

pub mod test_context;
pub mod test_data;

pub use test_context::*;
pub use test_data::*;
