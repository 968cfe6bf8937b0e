//! Utility modules for PokeCatalog
//!
//! - `files`: collection file loading and saving
//! - `http`: HTTP client utilities

pub mod files;
pub mod http;
