//! HTTP implementation of [`ShortUrlApi`]

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use ureq::Agent;

use super::ShortUrlApi;
use super::redirect::RedirectUrlBuilder;
use crate::config::{ApiConfig, ListFailurePolicy};
use crate::errors::{Result, ShortenerError};
use crate::models::{CreateUrlRequest, ShortUrl, ShortUrlWithStats, UpdateUrlRequest};
use crate::utils::url_validator::{validate_short_code, validate_url};

const JSON_CONTENT_TYPE: &str = "application/json";
const SHORTEN_PATH: &str = "/shorten";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Get => write!(f, "GET"),
            Self::Post => write!(f, "POST"),
            Self::Put => write!(f, "PUT"),
            Self::Delete => write!(f, "DELETE"),
        }
    }
}

/// Raw outcome of one round trip
struct RawResponse {
    status: u16,
    reason: Option<&'static str>,
    body: String,
}

/// Client for the shortener API.
///
/// Each operation is exactly one request: no retries, no batching, no
/// timeout beyond the transport default. The agent is blocking, so requests
/// run on the tokio blocking pool. Cloning is cheap; clones share the agent.
#[derive(Clone)]
pub struct ApiClient {
    agent: Agent,
    base_url: String,
    redirect: RedirectUrlBuilder,
    list_failure: ListFailurePolicy,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .field("redirect_root", &self.redirect.root())
            .field("list_failure", &self.list_failure)
            .finish()
    }
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> Self {
        // 非 2xx 状态码交给调用方处理，以便读取服务端返回的错误信息
        let agent: Agent = Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .into();

        Self {
            agent,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            redirect: RedirectUrlBuilder::from_config(config),
            list_failure: config.list_failure,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn list_failure_policy(&self) -> ListFailurePolicy {
        self.list_failure
    }

    /// `/shorten/{code}` with the code encoded as one path segment
    fn resource_path(short_code: &str) -> Result<String> {
        validate_short_code(short_code)?;
        Ok(format!(
            "{}/{}",
            SHORTEN_PATH,
            urlencoding::encode(short_code)
        ))
    }

    fn send_blocking(
        agent: &Agent,
        method: Method,
        url: &str,
        payload: Option<&serde_json::Value>,
    ) -> Result<RawResponse> {
        let response = match method {
            Method::Get => agent
                .get(url)
                .header("Content-Type", JSON_CONTENT_TYPE)
                .header("Accept", JSON_CONTENT_TYPE)
                .call()?,
            Method::Delete => agent
                .delete(url)
                .header("Content-Type", JSON_CONTENT_TYPE)
                .header("Accept", JSON_CONTENT_TYPE)
                .call()?,
            Method::Post => agent
                .post(url)
                .header("Content-Type", JSON_CONTENT_TYPE)
                .header("Accept", JSON_CONTENT_TYPE)
                .send_json(payload.unwrap_or(&serde_json::Value::Null))?,
            Method::Put => agent
                .put(url)
                .header("Content-Type", JSON_CONTENT_TYPE)
                .header("Accept", JSON_CONTENT_TYPE)
                .send_json(payload.unwrap_or(&serde_json::Value::Null))?,
        };

        let status = response.status();
        let body = response.into_body().read_to_string()?;

        Ok(RawResponse {
            status: status.as_u16(),
            reason: status.canonical_reason(),
            body,
        })
    }

    /// Perform one request and return the body of a 2xx response.
    async fn send(
        &self,
        method: Method,
        path: &str,
        payload: Option<serde_json::Value>,
    ) -> Result<String> {
        let agent = self.agent.clone();
        let url = format!("{}{}", self.base_url, path);

        debug!("{} {}", method, url);

        let raw = tokio::task::spawn_blocking(move || {
            Self::send_blocking(&agent, method, &url, payload.as_ref())
        })
        .await
        .map_err(|e| ShortenerError::transport(format!("request task failed: {}", e)))??;

        debug!("{} {} -> {}", method, path, raw.status);

        if (200..300).contains(&raw.status) {
            return Ok(raw.body);
        }

        let message = match raw.body.trim() {
            "" => raw
                .reason
                .map(str::to_string)
                .unwrap_or_else(|| format!("HTTP {}", raw.status)),
            text => text.to_string(),
        };

        if raw.status == 404 {
            Err(ShortenerError::not_found(message))
        } else {
            Err(ShortenerError::http(raw.status, message))
        }
    }

    async fn send_for<T: DeserializeOwned + Send>(
        &self,
        method: Method,
        path: &str,
        payload: Option<serde_json::Value>,
    ) -> Result<T> {
        let body = self.send(method, path, payload).await?;
        serde_json::from_str(&body).map_err(|e| {
            ShortenerError::decode(format!("{} {} returned unexpected body: {}", method, path, e))
        })
    }
}

#[async_trait]
impl ShortUrlApi for ApiClient {
    async fn create(&self, request: CreateUrlRequest) -> Result<ShortUrl> {
        validate_url(&request.url)?;
        let payload = serde_json::to_value(&request)?;
        self.send_for(Method::Post, SHORTEN_PATH, Some(payload)).await
    }

    async fn read(&self, short_code: &str) -> Result<ShortUrl> {
        let path = Self::resource_path(short_code)?;
        self.send_for(Method::Get, &path, None).await
    }

    async fn update(&self, short_code: &str, request: UpdateUrlRequest) -> Result<ShortUrl> {
        let path = Self::resource_path(short_code)?;
        validate_url(&request.url)?;
        let payload = serde_json::to_value(&request)?;
        self.send_for(Method::Put, &path, Some(payload)).await
    }

    async fn delete(&self, short_code: &str) -> Result<()> {
        let path = Self::resource_path(short_code)?;
        self.send(Method::Delete, &path, None).await?;
        Ok(())
    }

    async fn stats(&self, short_code: &str) -> Result<ShortUrlWithStats> {
        let path = format!("{}/stats", Self::resource_path(short_code)?);
        self.send_for(Method::Get, &path, None).await
    }

    async fn list(&self) -> Result<Vec<ShortUrlWithStats>> {
        // 服务端在没有记录时返回 `null`
        match self
            .send_for::<Option<Vec<ShortUrlWithStats>>>(Method::Get, SHORTEN_PATH, None)
            .await
        {
            Ok(urls) => Ok(urls.unwrap_or_default()),
            Err(e) => match self.list_failure {
                ListFailurePolicy::EmptyOnError => {
                    warn!("Listing short URLs failed, showing an empty list: {}", e);
                    Ok(Vec::new())
                }
                ListFailurePolicy::Propagate => Err(e),
            },
        }
    }

    fn redirect_url(&self, short_code: &str) -> String {
        self.redirect.redirect_url(short_code)
    }
}
