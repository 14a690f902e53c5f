//! Infrastructure adapters. Implement ports.
//!
//! Summarizer backends and the terminal UI. Map errors to DomainError.

pub mod ai;
pub mod ui;
