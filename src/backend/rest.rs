//! REST implementation of the backend client.
//!
//! Speaks the hosted platform's wire contract: reads and inserts go through
//! `/rest/v1/{table}`, photo bytes through `/storage/v1/object`. Inserts
//! send a single-element JSON array whose keys equal the form field names;
//! a non-2xx response is a failure and its JSON `message` field (when
//! present) is the error message.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::Serialize;

use super::Backend;
use crate::config::Config;
use crate::errors::FormError;
use crate::models::{Location, SchoolRecord, StaffRecord, StudentRecord};

/// Backend client over the platform's REST and storage APIs.
#[derive(Clone)]
pub struct RestBackend {
    client: Client,
    base_url: String,
    api_key: String,
    photo_bucket: String,
}

impl RestBackend {
    pub fn new(config: &Config) -> Self {
        Self {
            client: Client::new(),
            base_url: config.backend_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            photo_bucket: config.photo_bucket.clone(),
        }
    }

    /// Attach the anonymous key headers the platform expects on every call.
    fn authed(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .header("apikey", &self.api_key)
            .header("Authorization", format!("Bearer {}", self.api_key))
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url, table)
    }

    fn object_url(&self, path: &str) -> String {
        format!(
            "{}/storage/v1/object/{}/{}",
            self.base_url, self.photo_bucket, path
        )
    }

    /// Stable, publicly reachable address for a stored object.
    fn public_url(&self, path: &str) -> String {
        format!(
            "{}/storage/v1/object/public/{}/{}",
            self.base_url, self.photo_bucket, path
        )
    }

    async fn insert_row<T: Serialize>(&self, table: &str, record: &T) -> Result<(), FormError> {
        let response = self
            .authed(self.client.post(self.table_url(table)))
            .header("Prefer", "return=minimal")
            .json(&[record])
            .send()
            .await?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(FormError::Backend(error_message(response).await))
        }
    }
}

#[async_trait]
impl Backend for RestBackend {
    async fn fetch_locations(&self) -> Result<Vec<Location>, FormError> {
        let response = self
            .authed(self.client.get(self.table_url("locations")))
            .query(&[("select", "*")])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(FormError::ReferenceData(error_message(response).await));
        }

        Ok(response.json().await?)
    }

    async fn insert_school(&self, record: &SchoolRecord) -> Result<(), FormError> {
        self.insert_row("schools", record).await
    }

    async fn insert_staff(&self, record: &StaffRecord) -> Result<(), FormError> {
        self.insert_row("staff", record).await
    }

    async fn insert_student(&self, record: &StudentRecord) -> Result<(), FormError> {
        self.insert_row("students", record).await
    }

    async fn upload_photo(&self, path: &str, bytes: Vec<u8>) -> Result<String, FormError> {
        let response = self
            .authed(self.client.post(self.object_url(path)))
            .header("Content-Type", "application/octet-stream")
            .body(bytes)
            .send()
            .await?;

        if response.status().is_success() {
            Ok(self.public_url(path))
        } else {
            Err(FormError::Storage(error_message(response).await))
        }
    }
}

/// Extract the platform's error message from a failed response body,
/// falling back to the raw body or the status line.
async fn error_message(response: Response) -> String {
    let status: StatusCode = response.status();
    let body = response.text().await.unwrap_or_default();

    if let Ok(value) = serde_json::from_str::<serde_json::Value>(&body) {
        if let Some(message) = value.get("message").and_then(|m| m.as_str()) {
            return message.to_string();
        }
    }

    if body.is_empty() {
        status.to_string()
    } else {
        body
    }
}
