use crate::responses::{
    BillStatus, HealthStatus, ProfileInfo, RawFields, UsageSummary, VasBundles,
};
use reqwest::StatusCode;

/// Where the client points. Passed in explicitly rather than read from a
/// process-wide constant so test, staging, and production backends can
/// coexist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

/// An API client for the dashboard backend.
///
/// Every endpoint is a plain GET returning JSON; there is no request body,
/// auth header, or query string on this surface.
pub struct ApiClient {
    pub config: ApiConfig,
    pub inner_client: reqwest::Client,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            config,
            inner_client: reqwest::Client::new(),
        }
    }

    fn format_url(&self, path: &str) -> String {
        format!("{}{path}", self.config.base_url)
    }

    async fn get(&self, path: &str) -> Result<reqwest::Response, ClientError> {
        let url = self.format_url(path);
        let response =
            self.inner_client.get(&url).send().await.inspect_err(|e| {
                tracing::warn!(%url, error = %e, "request failed");
            })?;
        Ok(response)
    }
}

/// Methods on the backend API
impl ApiClient {
    pub async fn health_check(&self) -> Result<HealthStatus, ClientError> {
        let response = self.get("/health").await?;
        ok_body(response).await
    }

    pub async fn usage_summary(&self) -> Result<UsageSummary, ClientError> {
        let response = self.get("/usage/summary").await?;
        ok_body(response).await
    }

    pub async fn profile_info(&self) -> Result<ProfileInfo, ClientError> {
        let response = self.get("/profile/info").await?;
        ok_body(response).await
    }

    pub async fn bill_status(&self) -> Result<BillStatus, ClientError> {
        let response = self.get("/bills/status").await?;
        ok_body(response).await
    }

    /// Payment details are forwarded from the operator API without
    /// normalization.
    pub async fn bill_payment_info(&self) -> Result<RawFields, ClientError> {
        let response = self.get("/bills/payment").await?;
        ok_body(response).await
    }

    pub async fn vas_bundles(&self) -> Result<VasBundles, ClientError> {
        let response = self.get("/vas/bundles").await?;
        ok_body(response).await
    }

    /// Extra GB add-on details, forwarded without normalization.
    pub async fn extra_gb(&self) -> Result<RawFields, ClientError> {
        let response = self.get("/vas/extra-gb").await?;
        ok_body(response).await
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Non-2xx response, containing the status and response text.
    #[error("API error: {0}: {1}")]
    Api(StatusCode, String),
    /// Transport failure or a body that did not decode as the expected
    /// shape. The two are deliberately not distinguished; callers display
    /// one message either way.
    #[error("Network error. Please check your connection.")]
    Network(#[from] reqwest::Error),
}

/// Deserialize a successful response into the desired type, or return an
/// appropriate error.
pub async fn ok_body<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ClientError> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await?;
        tracing::warn!(%status, "backend returned an error response");
        return Err(ClientError::Api(status, body));
    }
    Ok(response.json::<T>().await?)
}
