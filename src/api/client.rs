use reqwest::blocking::Client;
use reqwest::Url;
use serde_json::Value;
use tracing::{debug, info};

use super::params::FetchParams;
use crate::config::config::Config;
use crate::error::{Result, ScriptbloxError};

/// Root of the public ScriptBlox API
pub const DEFAULT_BASE_URL: &str = "https://scriptblox.com/api";

const FETCH_PATH: &str = "/script/fetch";

#[derive(Clone)]
pub struct ScriptbloxClient {
    base_url: String,
    client: Client,
}

impl ScriptbloxClient {
    pub fn new(base_url: &str) -> Self {
        Self::with_client(base_url, Client::new())
    }

    /// Use a preconfigured reqwest client (user agent, proxies, ...)
    pub fn with_client(base_url: &str, client: Client) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .user_agent(config.api.user_agent.clone())
            .build()
            .map_err(|e| ScriptbloxError::Config {
                message: format!("could not build HTTP client: {e}"),
            })?;
        Ok(Self::with_client(&config.api.base_url, client))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL a fetch with these parameters would hit, percent-encoded
    /// exactly as it goes on the wire
    pub fn fetch_url(&self, params: &FetchParams) -> Result<String> {
        Ok(self.endpoint(params)?.to_string())
    }

    fn endpoint(&self, params: &FetchParams) -> Result<Url> {
        let mut url = Url::parse(&format!("{}{}", self.base_url, FETCH_PATH)).map_err(|e| {
            ScriptbloxError::Config {
                message: format!("invalid base URL '{}': {e}", self.base_url),
            }
        })?;

        let pairs = params.query_pairs();
        // An empty pair list would still leave a trailing '?'
        if !pairs.is_empty() {
            url.query_pairs_mut().extend_pairs(pairs);
        }
        Ok(url)
    }

    /// Fetch one page of scripts and return `result.scripts` as sent by the
    /// service. Paging is left to the caller via `page`.
    pub fn fetch_scripts(&self, params: &FetchParams) -> Result<Vec<Value>> {
        params.validate()?;

        let url = self.endpoint(params)?;
        debug!(target: "api", "GET {}", url);

        let response = self.client.get(url).send()?;

        let status = response.status();
        debug!(target: "api", "Response status: {}", status);

        if !status.is_success() {
            let body = match response.text() {
                Ok(body) => body,
                Err(e) => {
                    debug!(target: "api", "Could not read error body: {}", e);
                    String::new()
                }
            };
            return Err(ScriptbloxError::RequestFailed {
                status: status.as_u16(),
                body,
            });
        }

        let body: Value = response.json()?;
        let scripts = extract_scripts(body)?;
        info!(target: "api", "Fetched {} scripts", scripts.len());
        Ok(scripts)
    }
}

impl Default for ScriptbloxClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

/// Pull `result.scripts` out of a fetch response
pub fn extract_scripts(mut body: Value) -> Result<Vec<Value>> {
    match body.pointer_mut("/result/scripts").map(Value::take) {
        Some(Value::Array(scripts)) => Ok(scripts),
        Some(other) => Err(ScriptbloxError::decode(format!(
            "`result.scripts` is not a list: {other}"
        ))),
        None => Err(ScriptbloxError::decode(
            "response has no `result.scripts` field",
        )),
    }
}
