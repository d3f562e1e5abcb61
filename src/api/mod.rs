//! Backend API Bindings
//!
//! Authenticated fetch gateway plus bindings organized by domain.

mod auth;
mod hello;
mod resource;

use std::sync::Arc;

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ApiError;

pub use auth::*;
pub use hello::*;

/// Wraps every outbound call: attaches the session cookie and ends the
/// session when the backend answers 401.
#[derive(Clone)]
pub struct Gateway {
    base_url: String,
    on_unauthorized: Arc<dyn Fn() + Send + Sync>,
}

impl Gateway {
    pub fn new(base_url: impl Into<String>, on_unauthorized: impl Fn() + Send + Sync + 'static) -> Self {
        Self {
            base_url: base_url.into(),
            on_unauthorized: Arc::new(on_unauthorized),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Request with the credential cookie attached
    pub fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = reqwest::Client::new().request(method, self.url(path));
        #[cfg(target_arch = "wasm32")]
        let builder = builder.fetch_credentials_include();
        builder
    }

    /// Send and classify the response; non-2xx becomes an `ApiError`.
    ///
    /// `fallback` is the message used when the error body has none.
    pub async fn send(&self, builder: RequestBuilder, fallback: &str) -> Result<Response, ApiError> {
        let response = builder.send().await.map_err(|e| {
            log::warn!("[API] Request failed: {}", e);
            ApiError::Network(e.to_string())
        })?;
        let status = response.status().as_u16();
        if response.status().is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        match self.settle(status, &body, fallback) {
            Err(err) => Err(err),
            Ok(()) => Err(ApiError::Status { status, message: fallback.to_string() }),
        }
    }

    /// Turn a status + body into `Ok` or the matching error, ending the
    /// session first when the status is 401.
    pub fn settle(&self, status: u16, body: &str, fallback: &str) -> Result<(), ApiError> {
        match ApiError::from_status(status, body, fallback) {
            None => Ok(()),
            Some(err) => {
                if err.is_unauthorized() {
                    log::info!("[API] 401 from backend, ending session");
                    (self.on_unauthorized)();
                } else {
                    log::warn!("[API] {} -> {}", status, err);
                }
                Err(err)
            }
        }
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str, fallback: &str) -> Result<T, ApiError> {
        log::debug!("[API] GET {}", path);
        let response = self.send(self.request(Method::GET, path), fallback).await?;
        Ok(response.json::<T>().await?)
    }

    pub async fn send_json<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: &B,
        fallback: &str,
    ) -> Result<Response, ApiError> {
        log::debug!("[API] {} {}", method, path);
        self.send(self.request(method, path).json(body), fallback).await
    }
}

/// `{collection}/{id}` with the id percent-encoded
pub fn record_path(collection: &str, id: &str) -> String {
    format!("{}/{}", collection, utf8_percent_encode(id, NON_ALPHANUMERIC))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn counting_gateway() -> (Gateway, Arc<AtomicUsize>) {
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = hits.clone();
        let gateway = Gateway::new("http://localhost:3000", move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        (gateway, hits)
    }

    #[test]
    fn test_401_ends_session_before_surfacing() {
        let (gateway, hits) = counting_gateway();

        let err = gateway.settle(401, "", "Failed to fetch items").unwrap_err();

        assert!(err.is_unauthorized());
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_other_errors_keep_session() {
        let (gateway, hits) = counting_gateway();

        let err = gateway.settle(404, r#"{"message":"Item not found"}"#, "x").unwrap_err();
        assert_eq!(err.message(), "Item not found");
        assert!(gateway.settle(201, "", "x").is_ok());
        assert_eq!(hits.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_record_path_encodes_id() {
        assert_eq!(record_path("/api/item", "65f0a1"), "/api/item/65f0a1");
        assert_eq!(record_path("/api/user", "a/b c"), "/api/user/a%2Fb%20c");
    }
}
