//! HTTP client for the LiftCare backend.
//!
//! One `ApiClient` is created per load sequence or form submission. It takes
//! a snapshot of the session token; once any of its requests gets HTTP 401 the
//! session is expired (only if it still holds that token) and the client
//! refuses to send anything else.

use std::sync::Arc;

use contracts::domain::common::Resource;
use contracts::shared::config::ClientConfig;
use contracts::shared::http::{
    bearer, interpret_response, ApiError, Payload, RequestScope, HEADER_AUTHORIZATION,
};
use gloo_net::http::{Request, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::system::auth::AuthContext;

/// Client configuration: `LIFTCARE_API_BASE` at build time, else the hosted backend.
pub fn client_config() -> ClientConfig {
    ClientConfig::from_override(option_env!("LIFTCARE_API_BASE"))
}

/// Build a full API URL from a path
pub fn api_url(path: &str) -> String {
    client_config().url(path)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Verb {
    Get,
    Post,
    Put,
    Delete,
}

#[derive(Clone)]
pub struct ApiClient {
    auth: AuthContext,
    scope: Arc<RequestScope>,
}

impl ApiClient {
    pub fn new(auth: AuthContext) -> Self {
        Self {
            auth,
            scope: Arc::new(RequestScope::new(auth.token_untracked())),
        }
    }

    fn builder(&self, verb: Verb, path: &str) -> RequestBuilder {
        let url = api_url(path);
        let builder = match verb {
            Verb::Get => Request::get(&url),
            Verb::Post => Request::post(&url),
            Verb::Put => Request::put(&url),
            Verb::Delete => Request::delete(&url),
        };
        match self.scope.token() {
            Some(token) => builder.header(HEADER_AUTHORIZATION, &bearer(token)),
            None => builder,
        }
    }

    async fn send<B: Serialize>(&self, verb: Verb, path: &str, body: Option<&B>) -> Result<Payload, ApiError> {
        self.scope.check(self.auth.token_untracked().as_deref())?;

        let builder = self.builder(verb, path);
        let sent = match body {
            Some(body) => {
                let request = builder
                    .json(body)
                    .map_err(|e| ApiError::Transport(format!("Failed to serialize request: {}", e)))?;
                request.send().await
            }
            None => builder.send().await,
        };
        let response = sent.map_err(|e| ApiError::Transport(e.to_string()))?;

        let status = response.status();
        let content_type = response.headers().get("content-type");
        let text = response
            .text()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        let result = interpret_response(status, content_type.as_deref(), text);
        if let Err(ApiError::Unauthorized { .. }) = &result {
            self.scope.on_unauthorized();
            self.auth.expire(self.scope.token());
        }
        if let Err(e) = &result {
            log::error!("{:?} {} failed: {}", verb, path, e);
        }
        result
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.send::<()>(Verb::Get, path, None).await?.decode()
    }

    pub async fn post<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T, ApiError> {
        self.send(Verb::Post, path, Some(body)).await?.decode()
    }

    /// POST without a body, e.g. marking a notification read.
    pub async fn post_empty(&self, path: &str) -> Result<(), ApiError> {
        self.send::<()>(Verb::Post, path, None).await.map(|_| ())
    }

    pub async fn put<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T, ApiError> {
        self.send(Verb::Put, path, Some(body)).await?.decode()
    }

    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.send::<()>(Verb::Delete, path, None).await.map(|_| ())
    }

    pub async fn list<R: Resource>(&self) -> Result<Vec<R>, ApiError> {
        self.get(R::collection_path()).await
    }

    pub async fn create<R: Resource, D: Serialize>(&self, dto: &D) -> Result<(), ApiError> {
        self.post::<D, serde_json::Value>(R::collection_path(), dto)
            .await
            .map(|_| ())
    }

    pub async fn update<R: Resource, D: Serialize>(&self, id: &R::Id, dto: &D) -> Result<(), ApiError> {
        self.put::<D, serde_json::Value>(&R::element_path(id), dto)
            .await
            .map(|_| ())
    }

    pub async fn remove<R: Resource>(&self, id: &R::Id) -> Result<(), ApiError> {
        self.delete(&R::element_path(id)).await
    }
}
