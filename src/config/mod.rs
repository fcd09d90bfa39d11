//! Configuration module
//!
//! This module contains the key map loading functionality:
//! the key map data model, the layered file loader and its errors.

pub mod error;
pub mod key_map;
pub mod keys_manager;
