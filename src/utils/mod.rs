//! Utility functions and helpers
//!
//! Path resolution and platform detection used by the key map loader.

pub mod app_paths;
pub mod platform;
