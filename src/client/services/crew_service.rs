use crate::common::error::{ConfigError, SubmitError};
use crate::common::models::CrewRequest;
use log::{debug, info};
use reqwest::header::CONTENT_TYPE;
use serde_json::Value;
use url::Url;

/// Talks to the `/crew` endpoint. Cheap to clone: the underlying
/// `reqwest::Client` shares its connection pool.
#[derive(Debug, Clone)]
pub struct CrewService {
    client: reqwest::Client,
    endpoint: Url,
}

impl CrewService {
    pub fn new(endpoint: &str) -> Result<Self, ConfigError> {
        let invalid = |reason: String| ConfigError::InvalidEndpoint {
            endpoint: endpoint.to_string(),
            reason,
        };
        let url = Url::parse(endpoint).map_err(|e| invalid(e.to_string()))?;
        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(invalid(format!("unsupported scheme '{}'", url.scheme())));
        }
        // No timeout: a submission always runs until the server answers or the connection fails.
        let client = reqwest::Client::builder().build()?;
        Ok(Self { client, endpoint: url })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Sends one `POST {"address": ...}` and returns the parsed JSON body.
    pub async fn fetch_crew(&self, address: &str) -> Result<Value, SubmitError> {
        debug!("POST {} address={:?}", self.endpoint, address);
        let body = serde_json::to_vec(&CrewRequest::new(address))?;
        let res = self
            .client
            .post(self.endpoint.clone())
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            info!("Crew request failed with status {}", status.as_u16());
            return Err(SubmitError::Http { status: status.as_u16() });
        }

        let bytes = res.bytes().await?;
        let data = serde_json::from_slice::<Value>(&bytes)?;
        info!("Crew request completed ({} bytes)", bytes.len());
        Ok(data)
    }
}
