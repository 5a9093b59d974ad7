//! Signed REST client for the OVH API
//!
//! Every authenticated request carries the application key, the consumer key,
//! a timestamp synchronised with the API server, and a SHA1 signature over
//! the request.

use crate::credentials::Credentials;
use crate::endpoint::Endpoint;
use crate::error::{OvhError, Result};
use reqwest::{Method, Response};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use sha1::{Digest, Sha1};
use tokio::sync::OnceCell;

/// OVH API client
pub struct OvhClient {
    client: reqwest::Client,
    credentials: Credentials,
    /// Server time minus local time, in seconds
    time_delta: OnceCell<i64>,
}

impl OvhClient {
    pub fn new(credentials: Credentials) -> Self {
        Self {
            client: reqwest::Client::new(),
            credentials,
            time_delta: OnceCell::new(),
        }
    }

    /// Resolve credentials (see [`Credentials::load`]) and build a client
    pub fn from_env(endpoint: Option<&str>) -> Result<Self> {
        Ok(Self::new(Credentials::load(endpoint)?))
    }

    pub fn endpoint(&self) -> &Endpoint {
        &self.credentials.endpoint
    }

    /// GET a resource and decode its JSON body
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let response = self.call(Method::GET, path, String::new()).await?;
        Ok(response.json().await?)
    }

    /// POST a JSON body, discarding the response body
    pub async fn post<B: serde::Serialize>(&self, path: &str, body: &B) -> Result<()> {
        let body = serde_json::to_string(body)?;
        self.call(Method::POST, path, body).await?;
        Ok(())
    }

    async fn call(&self, method: Method, path: &str, body: String) -> Result<Response> {
        let url = self.endpoint().url(path);
        let timestamp = chrono::Utc::now().timestamp() + self.time_delta().await?;
        let signature = sign(
            &self.credentials.application_secret,
            &self.credentials.consumer_key,
            method.as_str(),
            &url,
            &body,
            timestamp,
        );

        tracing::debug!(%method, %url, "Calling OVH API");

        let response = self
            .client
            .request(method, &url)
            .header("Accept", "application/json")
            .header("Content-Type", "application/json;charset=utf-8")
            .header("X-Ovh-Application", &self.credentials.application_key)
            .header("X-Ovh-Consumer", &self.credentials.consumer_key)
            .header("X-Ovh-Timestamp", timestamp.to_string())
            .header("X-Ovh-Signature", signature)
            .body(body)
            .send()
            .await?;

        check_status(response).await
    }

    /// Offset between the API clock and the local clock, fetched once from `/auth/time`
    async fn time_delta(&self) -> Result<i64> {
        self.time_delta
            .get_or_try_init(|| async {
                let url = self.endpoint().url("/auth/time");
                let response = self
                    .client
                    .get(&url)
                    .header("Accept", "application/json")
                    .send()
                    .await?;
                let server_time: i64 = check_status(response).await?.json().await?;
                let delta = server_time - chrono::Utc::now().timestamp();
                tracing::debug!(delta, "Synchronised with API server time");
                Ok::<_, OvhError>(delta)
            })
            .await
            .copied()
    }
}

/// Compute the `X-Ovh-Signature` header value
pub fn sign(
    application_secret: &str,
    consumer_key: &str,
    method: &str,
    url: &str,
    body: &str,
    timestamp: i64,
) -> String {
    let payload = format!(
        "{}+{}+{}+{}+{}+{}",
        application_secret, consumer_key, method, url, body, timestamp
    );
    format!("$1${:x}", Sha1::digest(payload.as_bytes()))
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: Option<String>,
    class: Option<String>,
}

async fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let query_id = response
        .headers()
        .get("X-Ovh-QueryId")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let text = response.text().await.unwrap_or_default();
    let (message, class) = match serde_json::from_str::<ApiErrorBody>(&text) {
        Ok(body) => (body.message.unwrap_or(text), body.class),
        Err(_) => (text, None),
    };

    Err(OvhError::Api {
        status: status.as_u16(),
        message,
        class,
        query_id,
    })
}
