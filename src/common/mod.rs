//! Common types and utilities shared across pagesim.
//!
//! This module contains fundamental primitives used throughout the codebase:
//! - Configuration constants
//! - Error types
//! - The text page token ([`PageRef`]) used by adapters

pub mod config;
pub mod error;
mod page_ref;

pub use error::{Error, InvalidInput, Result};
pub use page_ref::{load_reference_file, parse_reference_string, PageRef};
