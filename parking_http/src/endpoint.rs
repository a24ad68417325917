use parking_core::{RegistryError, Result};
use reqwest::{
    header::{HeaderValue, CONTENT_TYPE},
    Client, Method, StatusCode, Url,
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;

const APPLICATION_JSON: &str = "application/json";

/// Body of a successful response, split on its content type.
#[derive(Clone, Debug, PartialEq)]
pub enum Payload {
    Json(Value),
    Text(String),
    Empty,
}

impl Payload {
    /// Text bodies are given a chance as JSON too: some servers answer bare numbers as text/plain.
    pub fn decode<T: DeserializeOwned>(self) -> Result<T> {
        match self {
            Payload::Json(value) => serde_json::from_value(value.clone())
                .map_err(|e| RegistryError::MalformedResponse(format!("{e}: {value}"))),
            Payload::Text(text) => serde_json::from_str(&text)
                .map_err(|e| RegistryError::MalformedResponse(format!("{e}: {text}"))),
            Payload::Empty => Err(RegistryError::MalformedResponse(
                "empty response body".to_string(),
            )),
        }
    }
}

/// A base URL plus the single request helper every remote call goes through.
#[derive(Clone, Debug)]
pub struct Endpoint {
    client: Client,
    base_url: Url,
}

impl Endpoint {
    pub fn new(base_url: Url) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: Url) -> Self {
        Self { client, base_url }
    }

    /// No timeout is applied unless one is given.
    pub fn with_timeout(base_url: Url, timeout: Option<Duration>) -> reqwest::Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self::with_client(builder.build()?, base_url))
    }

    /// Appends `segments` to the base path, percent-encoding each one.
    pub fn url(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| {
                RegistryError::InvalidRequest(format!("{} cannot be a base URL", self.base_url))
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    pub async fn call(
        &self,
        method: Method,
        segments: &[&str],
        body: Option<&Value>,
    ) -> Result<Payload> {
        let url = self.url(segments)?;
        tracing::debug!("{method} {url}");

        // No authentication is wired; an Authorization header would be set here.
        let mut request = self
            .client
            .request(method.clone(), url.clone())
            .header(CONTENT_TYPE, HeaderValue::from_static(APPLICATION_JSON));
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(transport)?;
        let status = response.status();
        let is_json = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|v| v.contains(APPLICATION_JSON));
        let text = response.text().await.map_err(transport)?;

        if !status.is_success() {
            let message = error_message(status, &text);
            tracing::warn!("{method} {url} failed with {status}: {message}");
            return Err(RegistryError::Remote {
                status: status.as_u16(),
                message,
            });
        }

        if text.trim().is_empty() {
            Ok(Payload::Empty)
        } else if is_json {
            serde_json::from_str(&text)
                .map(Payload::Json)
                .map_err(|e| RegistryError::MalformedResponse(format!("{e}: {text}")))
        } else {
            Ok(Payload::Text(text))
        }
    }
}

fn transport(e: reqwest::Error) -> RegistryError {
    tracing::error!("Transport failure: {e}");
    RegistryError::Transport(Box::new(e))
}

/// The `message` field of a JSON error body, else the raw text, else the status reason.
pub fn error_message(status: StatusCode, text: &str) -> String {
    if let Ok(Value::Object(map)) = serde_json::from_str::<Value>(text) {
        if let Some(Value::String(message)) = map.get("message") {
            return message.clone();
        }
    }
    let text = text.trim();
    if !text.is_empty() {
        return text.to_string();
    }
    status
        .canonical_reason()
        .map(str::to_string)
        .unwrap_or_else(|| status.as_str().to_string())
}
