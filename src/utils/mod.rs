//! Utility modules for the Flavor Graph asset tools
//!
//! This module contains various utility functions organized by functionality:
//! - `files`: File operations and directory management
//! - `images`: Image encoding and validation
//! - `http`: HTTP client utilities

pub mod files;
pub mod http;
pub mod images;
