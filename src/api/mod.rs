//! ScriptBlox API client and request parameters
//!
//! This module handles communication with the script catalog
//! and defines the options accepted by the fetch endpoint.

pub mod client;
pub mod params;

pub use client::{ScriptbloxClient, DEFAULT_BASE_URL};
pub use params::{FetchParams, Mode, SortBy, SortOrder, MAX_PAGE_SIZE};
