/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 20/10/25
******************************************************************************/

use crate::application::auth::{AuthMode, Session};
use crate::application::config::Config;
use crate::application::rate_limiter::RateLimiter;
use crate::constants::{JSON_CONTENT_TYPE, USER_AGENT};
use crate::error::AppError;
use crate::model::responses::ApiResponse;
use crate::storage::download::DownloadSink;
use reqwest::header::{CONTENT_TYPE, HeaderMap};
use reqwest::{Client, Method, Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, error, warn};

/// HTTP transport for the Foodgram API
///
/// Owns the `reqwest` client, the optional rate limiter and the session. Every
/// request gets the default `content-type: application/json` header plus
/// an `authorization` header when the endpoint's [`AuthMode`] allows it and
/// a token is stored.
pub struct HttpClient {
    http_client: Client,
    config: Arc<Config>,
    rate_limiter: Option<Arc<RwLock<RateLimiter>>>,
    session: Session,
}

impl HttpClient {
    /// Creates a transport for `config` using `session` for authentication
    pub fn new(config: Arc<Config>, session: Session) -> Result<Self, AppError> {
        let mut builder = Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = config.rest_api.request_timeout() {
            builder = builder.timeout(timeout);
        }
        let http_client = builder.build()?;
        let rate_limiter = config
            .rate_limiter
            .enabled
            .then(|| Arc::new(RwLock::new(RateLimiter::new(&config.rate_limiter))));

        Ok(Self {
            http_client,
            config,
            rate_limiter,
            session,
        })
    }

    /// Session used by this transport
    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Configuration used by this transport
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Sends a request and returns the raw response, whatever its status
    pub async fn send<B: Serialize>(
        &self,
        method: Method,
        path: &str,
        auth: AuthMode,
        query: &[(&str, String)],
        body: Option<&B>,
    ) -> Result<Response, AppError> {
        let url = self.config.url(path);
        let authorization = self.session.authorization(auth).await?;

        let mut headers = vec![("content-type", JSON_CONTENT_TYPE)];
        match (&authorization, auth) {
            (Some(value), _) => headers.push(("authorization", value.as_str())),
            (None, AuthMode::Required) => {
                warn!("No token stored, sending {} {} without authorization", method, url);
            }
            (None, _) => {}
        }

        make_http_request(
            &self.http_client,
            self.rate_limiter.clone(),
            method,
            &url,
            headers,
            query,
            body,
        )
        .await
    }

    /// Sends a request and normalizes the response
    pub async fn request<B: Serialize>(
        &self,
        method: Method,
        path: &str,
        auth: AuthMode,
        query: &[(&str, String)],
        body: Option<&B>,
    ) -> Result<ApiResponse, AppError> {
        let response = self.send(method, path, auth, query, body).await?;
        check_response(response).await
    }

    /// Sends a request whose JSON response is mapped to `T`
    pub async fn fetch<B: Serialize, T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        auth: AuthMode,
        query: &[(&str, String)],
        body: Option<&B>,
    ) -> Result<T, AppError> {
        self.request(method, path, auth, query, body)
            .await?
            .into_json()
    }

    /// Sends a GET request without query parameters
    pub async fn get<T: DeserializeOwned>(&self, path: &str, auth: AuthMode) -> Result<T, AppError> {
        self.fetch(Method::GET, path, auth, &[], None::<&()>).await
    }

    /// Sends a request for its side effect, accepting any successful response
    pub async fn execute<B: Serialize>(
        &self,
        method: Method,
        path: &str,
        auth: AuthMode,
        body: Option<&B>,
    ) -> Result<(), AppError> {
        self.request(method, path, auth, &[], body).await?;
        Ok(())
    }

    /// Downloads a file and hands it to `sink` under `file_name`
    pub async fn download(
        &self,
        path: &str,
        auth: AuthMode,
        sink: &dyn DownloadSink,
        file_name: &str,
    ) -> Result<(), AppError> {
        let response = self.send(Method::GET, path, auth, &[], None::<&()>).await?;
        check_file_download_response(response, sink, file_name).await
    }
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("base_url", &self.config.rest_api.base_url)
            .field("rate_limited", &self.rate_limiter.is_some())
            .field("session", &self.session)
            .finish()
    }
}

/// Makes an HTTP request, first waiting for the rate limiter when one is set
///
/// The status is not inspected here; callers pass the response to
/// [`check_response`] or [`check_file_download_response`].
///
/// # Arguments
///
/// * `client` - The HTTP client to use for the request
/// * `rate_limiter` - Shared rate limiter to control request rate, if any
/// * `method` - HTTP method
/// * `url` - Full URL to request
/// * `headers` - Vector of (header_name, header_value) tuples
/// * `query` - Query parameters appended to the URL, in order
/// * `body` - Optional request body, serialized to JSON
pub async fn make_http_request<B: Serialize>(
    client: &Client,
    rate_limiter: Option<Arc<RwLock<RateLimiter>>>,
    method: Method,
    url: &str,
    headers: Vec<(&str, &str)>,
    query: &[(&str, String)],
    body: Option<&B>,
) -> Result<Response, AppError> {
    if let Some(rate_limiter) = rate_limiter {
        let limiter = rate_limiter.read().await;
        limiter.wait().await;
    }

    debug!("{} {}", method, url);

    let mut request = client.request(method, url);

    for (name, value) in &headers {
        request = request.header(*name, *value);
    }

    if !query.is_empty() {
        request = request.query(query);
    }

    if let Some(b) = body {
        request = request.body(serde_json::to_vec(b)?);
    }

    let response = request.send().await?;
    debug!("Response status: {}", response.status());
    Ok(response)
}

/// Checks if the response declares a JSON body
#[must_use]
pub fn is_json_response(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.contains(JSON_CONTENT_TYPE))
}

/// Normalizes a response into an [`ApiResponse`] or an [`AppError`]
///
/// * 204 resolves as [`ApiResponse::Opaque`] without reading the body.
/// * A JSON body is parsed; below 400 it resolves as [`ApiResponse::Json`],
///   otherwise it rejects as [`AppError::Api`] carrying the parsed body.
///   A body that fails to parse rejects as [`AppError::Json`].
/// * Any other body is left unread; below 400 it resolves as
///   [`ApiResponse::Opaque`], otherwise it rejects as [`AppError::Http`].
pub async fn check_response(response: Response) -> Result<ApiResponse, AppError> {
    let status = response.status();
    if status == StatusCode::NO_CONTENT {
        return Ok(ApiResponse::Opaque {
            status,
            headers: response.headers().clone(),
        });
    }

    if is_json_response(response.headers()) {
        let bytes = response.bytes().await?;
        let body: Value = serde_json::from_slice(&bytes).map_err(|e| {
            error!("Invalid JSON body with status {}: {}", status, e);
            AppError::Json(e)
        })?;
        if status.as_u16() < 400 {
            return Ok(ApiResponse::Json { status, body });
        }
        error!("Request failed with status {}: {}", status, body);
        return Err(AppError::Api { status, body });
    }

    if status.as_u16() < 400 {
        Ok(ApiResponse::Opaque {
            status,
            headers: response.headers().clone(),
        })
    } else {
        error!("Request failed with status {} and no JSON body", status);
        Err(AppError::Http(status))
    }
}

/// Normalizes a file download
///
/// Below 400 the body is read as bytes and handed to `sink` exactly once
/// under `file_name`. Otherwise the body is discarded and the call rejects
/// with [`AppError::DownloadFailed`].
pub async fn check_file_download_response(
    response: Response,
    sink: &dyn DownloadSink,
    file_name: &str,
) -> Result<(), AppError> {
    let status = response.status();
    if status.as_u16() >= 400 {
        error!("Download failed with status {}", status);
        return Err(AppError::DownloadFailed(status));
    }

    let bytes = response.bytes().await?;
    debug!("Downloaded {} bytes", bytes.len());
    sink.save(file_name, &bytes).await
}
