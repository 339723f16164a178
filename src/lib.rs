//! Reelname - Media file renaming tool
//!
//! This library crate exposes the core functionality for integration testing.

pub mod config;
pub mod metadata;
pub mod naming;
pub mod processor;
pub mod scanner;
