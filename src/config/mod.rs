//! Configuration module
//!
//! Settings file handling: API endpoint, output format and display options.

pub mod config;
