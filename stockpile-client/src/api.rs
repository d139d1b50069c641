//! Typed inventory endpoints
//!
//! Thin layer over [`HttpClient`] that unwraps the `{success, data, error}`
//! envelope of every call.

use serde::de::DeserializeOwned;
use shared::{ApiResponse, Category, InventoryStats, Product, ProductPayload};

use crate::http::HttpClient;
use crate::{ClientError, ClientResult};

pub const STATS_PATH: &str = "/api/inventory/stats";
pub const PRODUCTS_PATH: &str = "/api/products";
pub const CATEGORIES_PATH: &str = "/api/categories";

fn product_path(id: i64) -> String {
    format!("{PRODUCTS_PATH}/{id}")
}

/// Inventory REST API
#[derive(Debug, Clone)]
pub struct InventoryApi<H> {
    http: H,
}

impl<H: HttpClient> InventoryApi<H> {
    pub fn new(http: H) -> Self {
        Self { http }
    }

    pub fn http(&self) -> &H {
        &self.http
    }

    /// Replace the bearer token used for subsequent calls
    pub fn set_token(&mut self, token: Option<String>) {
        self.http.set_token(token);
    }

    /// `GET /api/inventory/stats`
    pub async fn stats(&self) -> ClientResult<InventoryStats> {
        let resp = self.http.get(STATS_PATH).await?;
        require_data(resp, "stats")
    }

    /// `GET /api/products`
    pub async fn products(&self) -> ClientResult<Vec<Product>> {
        let resp = self.http.get(PRODUCTS_PATH).await?;
        require_data(resp, "product list")
    }

    /// `GET /api/products/{id}`
    pub async fn product(&self, id: i64) -> ClientResult<Product> {
        let resp = self.http.get(&product_path(id)).await?;
        require_data(resp, "product")
    }

    /// `GET /api/categories`
    pub async fn categories(&self) -> ClientResult<Vec<Category>> {
        let resp = self.http.get(CATEGORIES_PATH).await?;
        require_data(resp, "category list")
    }

    /// `POST /api/products`
    pub async fn create_product(&self, payload: &ProductPayload) -> ClientResult<()> {
        let resp: ApiResponse<serde_json::Value> = self.http.post(PRODUCTS_PATH, payload).await?;
        check(resp)
    }

    /// `PUT /api/products/{id}`
    pub async fn update_product(&self, id: i64, payload: &ProductPayload) -> ClientResult<()> {
        let resp: ApiResponse<serde_json::Value> =
            self.http.put(&product_path(id), payload).await?;
        check(resp)
    }

    /// `DELETE /api/products/{id}`
    pub async fn delete_product(&self, id: i64) -> ClientResult<()> {
        let resp: ApiResponse<serde_json::Value> = self.http.delete(&product_path(id)).await?;
        check(resp)
    }
}

fn rejected(message: Option<String>) -> ClientError {
    match message {
        Some(message) => ClientError::Api(message),
        None => ClientError::Rejected,
    }
}

fn require_data<T: DeserializeOwned>(resp: ApiResponse<T>, what: &str) -> ClientResult<T> {
    resp.into_result()
        .map_err(rejected)?
        .ok_or_else(|| ClientError::InvalidResponse(format!("Missing {what} data")))
}

/// Mutations only report success; whatever `data` they carry is ignored
fn check(resp: ApiResponse<serde_json::Value>) -> ClientResult<()> {
    resp.into_result().map(|_| ()).map_err(rejected)
}
