//! Mediahub - media name recognition
//!
//! This library crate exposes the application layer (configuration, word
//! rules, directory scanning and reports) for integration testing.

pub mod config;
pub mod report;
pub mod scan;
pub mod words;
