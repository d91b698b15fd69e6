//! HTTP transport for the phonebook API.
//!
//! The actual HTTP machinery sits behind the [`HttpClient`] trait so the
//! JSON contract (paths, verbs, error bodies) is carried in one place and
//! backends stay swappable.

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};
use crate::transport::PersonsApi;
use phonebook_api::{ErrorBody, NewPerson, Person, PersonId};
use serde::de::DeserializeOwned;

/// HTTP verbs the phonebook contract uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    /// GET.
    Get,
    /// POST.
    Post,
    /// DELETE.
    Delete,
}

/// A request handed to an [`HttpClient`] backend.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    /// Verb.
    pub method: HttpMethod,
    /// Absolute URL.
    pub url: String,
    /// JSON body, for verbs that carry one.
    pub body: Option<Vec<u8>>,
}

/// A raw response from an [`HttpClient`] backend.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response body bytes.
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Returns true for 2xx statuses.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Minimal HTTP client abstraction.
///
/// An `Err` means the server was never reached (refused connection,
/// timeout, DNS failure); responses with error statuses come back as
/// ordinary [`HttpResponse`] values so the caller can read the body.
pub trait HttpClient: Send + Sync {
    /// Sends one request and returns the raw response.
    fn send(&self, request: HttpRequest) -> Result<HttpResponse, String>;
}

/// The phonebook JSON contract over any [`HttpClient`] backend.
pub struct RestApi<C: HttpClient> {
    base_url: String,
    client: C,
}

impl<C: HttpClient> RestApi<C> {
    /// Creates a transport rooted at the given base URL.
    ///
    /// Trailing slashes are stripped so path joining stays predictable.
    pub fn new(base_url: impl Into<String>, client: C) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url, client }
    }

    /// Returns the base URL requests are rooted at.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn send(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<Vec<u8>>,
    ) -> ClientResult<HttpResponse> {
        let request = HttpRequest {
            method,
            url: format!("{}{path}", self.base_url),
            body,
        };
        let response = self.client.send(request).map_err(ClientError::transport)?;
        if response.is_success() {
            return Ok(response);
        }

        // Carry the server's own message out of the error body when there
        // is one; the engine decides whether the user gets to see it.
        match serde_json::from_slice::<ErrorBody>(&response.body) {
            Ok(body) => Err(ClientError::api_with_message(response.status, body.error)),
            Err(_) => Err(ClientError::api(response.status)),
        }
    }

    fn decode<T: DeserializeOwned>(response: &HttpResponse) -> ClientResult<T> {
        serde_json::from_slice(&response.body)
            .map_err(|e| ClientError::transport(format!("malformed response body: {e}")))
    }
}

impl<C: HttpClient> PersonsApi for RestApi<C> {
    fn list(&self) -> ClientResult<Vec<Person>> {
        let response = self.send(HttpMethod::Get, "/api/persons", None)?;
        Self::decode(&response)
    }

    fn get(&self, id: &PersonId) -> ClientResult<Person> {
        let response = self.send(HttpMethod::Get, &format!("/api/persons/{id}"), None)?;
        Self::decode(&response)
    }

    fn create(&self, new_person: &NewPerson) -> ClientResult<Person> {
        let body = serde_json::to_vec(new_person)
            .map_err(|e| ClientError::transport(format!("failed to encode request: {e}")))?;
        let response = self.send(HttpMethod::Post, "/api/persons", Some(body))?;
        Self::decode(&response)
    }

    fn remove(&self, id: &PersonId) -> ClientResult<()> {
        // 204 carries no body; reaching here means the status was 2xx.
        self.send(HttpMethod::Delete, &format!("/api/persons/{id}"), None)?;
        Ok(())
    }
}

/// [`HttpClient`] backed by a blocking reqwest client.
pub struct ReqwestClient {
    inner: reqwest::blocking::Client,
}

impl ReqwestClient {
    /// Creates a backend honoring the configured request timeout.
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let inner = reqwest::blocking::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ClientError::transport(e.to_string()))?;
        Ok(Self { inner })
    }
}

impl HttpClient for ReqwestClient {
    fn send(&self, request: HttpRequest) -> Result<HttpResponse, String> {
        let builder = match request.method {
            HttpMethod::Get => self.inner.get(&request.url),
            HttpMethod::Post => self.inner.post(&request.url),
            HttpMethod::Delete => self.inner.delete(&request.url),
        };
        let builder = match request.body {
            Some(body) => builder
                .header(reqwest::header::CONTENT_TYPE, "application/json")
                .body(body),
            None => builder,
        };

        let response = builder.send().map_err(|e| e.to_string())?;
        let status = response.status().as_u16();
        let body = response.bytes().map_err(|e| e.to_string())?.to_vec();
        Ok(HttpResponse { status, body })
    }
}
