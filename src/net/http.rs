//! Shared request plumbing for the resource clients.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, with the
//! bearer token from durable storage attached when present.
//! Server-side (SSR): stubs returning a `Local` error since the API is
//! only reachable from the browser.
//!
//! Resource clients stay pure request builders: verb + path + payload,
//! no retry, no caching, no response transformation.

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::ApiError;
#[cfg(feature = "hydrate")]
use crate::util::storage;

/// Prefix for every backend path.
pub const API_BASE: &str = "/api";

/// A multipart form body for file-bearing endpoints.
///
/// Text fields are collected eagerly; files only exist in the browser,
/// so they are hydrate-gated and the whole payload degrades to fields
/// only on the server.
#[derive(Default)]
pub struct FormPayload {
    fields: Vec<(String, String)>,
    #[cfg(feature = "hydrate")]
    files: Vec<(String, web_sys::File)>,
}

impl FormPayload {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a text field.
    pub fn field(mut self, name: &str, value: impl Into<String>) -> Self {
        self.fields.push((name.to_owned(), value.into()));
        self
    }

    /// Append a file attachment.
    #[cfg(feature = "hydrate")]
    pub fn file(mut self, name: &str, file: web_sys::File) -> Self {
        self.files.push((name.to_owned(), file));
        self
    }

    #[cfg(feature = "hydrate")]
    fn into_form_data(self) -> Result<web_sys::FormData, ApiError> {
        let form = web_sys::FormData::new()
            .map_err(|_| ApiError::local("failed to build form data"))?;
        for (name, value) in &self.fields {
            form.append_with_str(name, value)
                .map_err(|_| ApiError::local("failed to build form data"))?;
        }
        for (name, file) in &self.files {
            form.append_with_blob(name, file)
                .map_err(|_| ApiError::local("failed to build form data"))?;
        }
        Ok(form)
    }
}

/// GET a JSON payload.
pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let request = authorized(gloo_net::http::Request::get(&api_url(path)))
            .build()
            .map_err(ApiError::from)?;
        read_json(request.send().await.map_err(ApiError::from)?).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
        Err(server_only())
    }
}

/// POST a JSON body and read a JSON response.
pub async fn post_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let request = authorized(gloo_net::http::Request::post(&api_url(path)))
            .json(body)
            .map_err(ApiError::from)?;
        read_json(request.send().await.map_err(ApiError::from)?).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (path, body);
        Err(server_only())
    }
}

/// PUT a JSON body and read a JSON response.
pub async fn put_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let request = authorized(gloo_net::http::Request::put(&api_url(path)))
            .json(body)
            .map_err(ApiError::from)?;
        read_json(request.send().await.map_err(ApiError::from)?).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (path, body);
        Err(server_only())
    }
}

/// POST with an empty body (moderation and confirmation endpoints).
pub async fn post_empty<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let request = authorized(gloo_net::http::Request::post(&api_url(path)))
            .build()
            .map_err(ApiError::from)?;
        read_json(request.send().await.map_err(ApiError::from)?).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
        Err(server_only())
    }
}

/// POST a multipart form and read a JSON response.
pub async fn post_form<T: DeserializeOwned>(
    path: &str,
    payload: FormPayload,
) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let request = authorized(gloo_net::http::Request::post(&api_url(path)))
            .body(payload.into_form_data()?)
            .map_err(ApiError::from)?;
        read_json(request.send().await.map_err(ApiError::from)?).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (path, payload);
        Err(server_only())
    }
}

/// PUT a multipart form and read a JSON response.
pub async fn put_form<T: DeserializeOwned>(
    path: &str,
    payload: FormPayload,
) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let request = authorized(gloo_net::http::Request::put(&api_url(path)))
            .body(payload.into_form_data()?)
            .map_err(ApiError::from)?;
        read_json(request.send().await.map_err(ApiError::from)?).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (path, payload);
        Err(server_only())
    }
}

/// DELETE a resource. The backend answers 204, so no body is read.
pub async fn delete(path: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let request = authorized(gloo_net::http::Request::delete(&api_url(path)))
            .build()
            .map_err(ApiError::from)?;
        let response = request.send().await.map_err(ApiError::from)?;
        if response.ok() {
            Ok(())
        } else {
            Err(error_from_response(response).await)
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
        Err(server_only())
    }
}

#[cfg(feature = "hydrate")]
fn api_url(path: &str) -> String {
    format!("{API_BASE}{path}")
}

/// Attach the bearer token from durable storage, when present.
#[cfg(feature = "hydrate")]
fn authorized(builder: gloo_net::http::RequestBuilder) -> gloo_net::http::RequestBuilder {
    match storage::get_item(storage::ACCESS_TOKEN_KEY) {
        Some(token) => builder.header("Authorization", &format!("Bearer {token}")),
        None => builder,
    }
}

#[cfg(feature = "hydrate")]
async fn read_json<T: DeserializeOwned>(
    response: gloo_net::http::Response,
) -> Result<T, ApiError> {
    if !response.ok() {
        return Err(error_from_response(response).await);
    }
    response.json::<T>().await.map_err(|e| ApiError::local(e.to_string()))
}

#[cfg(feature = "hydrate")]
async fn error_from_response(response: gloo_net::http::Response) -> ApiError {
    let status = response.status();
    let body = response
        .json::<serde_json::Value>()
        .await
        .unwrap_or(serde_json::Value::Null);
    ApiError::status(status, body)
}

#[cfg(not(feature = "hydrate"))]
fn server_only() -> ApiError {
    ApiError::local("not available on server")
}
