//! HTTP client for the remote product catalog.

use std::time::Duration;

use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;

use crate::catalog::error::CatalogError;
use crate::catalog::product::{Product, ProductDraft, ProductId};

/// Thin wrapper over the five catalog operations.
///
/// One network round trip per call: no retries and no per-request deadline.
/// The connect timeout only bounds how long an unreachable host can stall
/// the first byte.
pub struct CatalogClient {
    client: Client,
    base_url: String,
}

impl CatalogClient {
    pub fn new(base_url: &str, connect_timeout: Duration) -> Self {
        let client = Client::builder()
            .connect_timeout(connect_timeout)
            .build()
            .expect("Failed to build catalog client");

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// GET /products
    pub async fn list(&self) -> Result<Vec<Product>, CatalogError> {
        let response = self.client.get(self.url("/products")).send().await?;
        read_json(response).await
    }

    /// GET /products/{id}
    pub async fn get(&self, id: ProductId) -> Result<Product, CatalogError> {
        let response = self
            .client
            .get(self.url(&format!("/products/{id}")))
            .send()
            .await?;
        read_json(response).await
    }

    /// POST /products
    pub async fn create(&self, draft: &ProductDraft) -> Result<Product, CatalogError> {
        let response = self
            .client
            .post(self.url("/products"))
            .json(draft)
            .send()
            .await?;
        read_json(response).await
    }

    /// PUT /products/{id}
    pub async fn update(&self, id: ProductId, draft: &ProductDraft) -> Result<Product, CatalogError> {
        let response = self
            .client
            .put(self.url(&format!("/products/{id}")))
            .json(draft)
            .send()
            .await?;
        read_json(response).await
    }

    /// DELETE /products/{id}
    pub async fn remove(&self, id: ProductId) -> Result<(), CatalogError> {
        let response = self
            .client
            .delete(self.url(&format!("/products/{id}")))
            .send()
            .await?;
        check_status(&response)?;
        Ok(())
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

fn check_status(response: &Response) -> Result<(), CatalogError> {
    let status = response.status();
    if status.is_success() {
        return Ok(());
    }
    Err(CatalogError::Service {
        status: status.as_u16(),
        message: status_message(status),
    })
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, CatalogError> {
    check_status(&response)?;
    Ok(response.json::<T>().await?)
}

fn status_message(status: StatusCode) -> String {
    status
        .canonical_reason()
        .map(str::to_string)
        .unwrap_or_else(|| format!("status {}", status.as_u16()))
}
