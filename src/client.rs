use crate::model::{parse_response, NationalityResponse};
use anyhow::{Context, Result};

/// Anything that can predict nationalities for a name.
pub trait PredictionSource {
    fn predict(&self, name: &str) -> Result<NationalityResponse>;
}

/// Blocking client for the nationalize.io API.
pub struct NationalizeClient {
    agent: ureq::Agent,
    api_url: String,
}

impl NationalizeClient {
    pub fn new(api_url: impl Into<String>) -> Self {
        let agent = ureq::Agent::config_builder().build().new_agent();
        Self { agent, api_url: api_url.into() }
    }
}

impl PredictionSource for NationalizeClient {
    /// GET `<api_url>?name=<name>`. Non-2xx statuses come back as errors.
    fn predict(&self, name: &str) -> Result<NationalityResponse> {
        let mut resp = self
            .agent
            .get(&self.api_url)
            .query("name", name)
            .call()
            .context("HTTP request failed")?;

        let body = resp
            .body_mut()
            .read_to_string()
            .context("Failed to read response body")?;

        parse_response(&body)
    }
}
