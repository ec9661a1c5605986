//! Client for the ScriptBlox script catalog API.
//!
//! ```no_run
//! use scriptblox::api::{FetchParams, Mode, ScriptbloxClient};
//!
//! let client = ScriptbloxClient::default();
//! let params = FetchParams::new().page(2).mode(Mode::Free).verified(true);
//! let scripts = client.fetch_scripts(&params)?;
//! println!("{} scripts", scripts.len());
//! # Ok::<(), scriptblox::error::ScriptbloxError>(())
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod utils;
