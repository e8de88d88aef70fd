use anyhow::{anyhow, bail, Context};
use serde::Deserialize;
use serde_json::Value;

use super::SeedTarget;
use crate::database::Department;

/// The `{ success, data | message | error }` envelope every endpoint answers with
#[derive(Debug, Deserialize)]
pub struct Envelope {
    pub success: bool,
    #[serde(default)]
    pub data: Option<Value>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl Envelope {
    /// Turn a failure envelope into an error carrying the server's message
    pub fn into_result(self) -> anyhow::Result<Self> {
        if self.success {
            Ok(self)
        } else {
            Err(anyhow!(self.error.unwrap_or_else(|| "request failed".to_string())))
        }
    }
}

pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn envelope(response: reqwest::Response) -> anyhow::Result<Envelope> {
        let status = response.status();
        let envelope = response
            .json::<Envelope>()
            .await
            .with_context(|| format!("unexpected response body (status {})", status))?;
        envelope.into_result()
    }

    /// POST a seed endpoint and return the server's confirmation message
    pub async fn seed(&self, target: SeedTarget) -> anyhow::Result<String> {
        let response = self
            .http
            .post(self.url(target.path()))
            .send()
            .await
            .with_context(|| format!("failed to reach {}", self.base_url))?;

        let envelope = Self::envelope(response).await?;
        Ok(envelope.message.unwrap_or_default())
    }

    pub async fn departments(&self, workspace_id: &str) -> anyhow::Result<Vec<Department>> {
        let response = self
            .http
            .get(self.url("/api/departments"))
            .query(&[("workspaceId", workspace_id)])
            .send()
            .await
            .with_context(|| format!("failed to reach {}", self.base_url))?;

        let envelope = Self::envelope(response).await?;
        let Some(data) = envelope.data else {
            bail!("response is missing department data");
        };
        Ok(serde_json::from_value(data)?)
    }

    pub async fn health(&self) -> anyhow::Result<Value> {
        let response = self
            .http
            .get(self.url("/health"))
            .send()
            .await
            .with_context(|| format!("failed to reach {}", self.base_url))?;

        let envelope = Self::envelope(response).await?;
        Ok(envelope.data.unwrap_or(Value::Null))
    }
}
