// stockpile-client/tests/common/mod.rs
// In-process inventory backend for integration tests

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{Value, json};
use stockpile_client::{
    Category, ClientConfig, HistoryNavigator, InventoryPage, InventoryStats, MemorySession,
    NetworkHttpClient, Product, ProductPayload, Route, UserInfo,
};

pub const TOKEN: &str = "test-token";

pub type TestPage = InventoryPage<NetworkHttpClient, MemorySession, HistoryNavigator>;

#[derive(Default)]
pub struct Backend {
    pub products: Mutex<Vec<Product>>,
    pub categories: Mutex<Vec<Category>>,
    /// Envelope error for the stats endpoint
    pub stats_error: Mutex<Option<String>>,
    /// Envelope error for the product list
    pub products_error: Mutex<Option<String>>,
    /// Plain 500 for the categories endpoint
    pub categories_down: Mutex<bool>,
    /// Envelope error for create/update
    pub save_error: Mutex<Option<String>>,
    /// Every request that reached the router
    pub requests: AtomicUsize,
    /// POST / PUT / DELETE requests
    pub mutations: AtomicUsize,
    pub next_id: AtomicUsize,
}

impl Backend {
    pub fn requests(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }

    pub fn mutations(&self) -> usize {
        self.mutations.load(Ordering::SeqCst)
    }

    pub fn product_ids(&self) -> Vec<i64> {
        self.products.lock().unwrap().iter().map(|p| p.id).collect()
    }
}

type Shared = Arc<Backend>;

fn ok(data: Value) -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "success": true, "data": data })))
}

fn fail(status: StatusCode, message: &str) -> (StatusCode, Json<Value>) {
    (status, Json(json!({ "success": false, "error": message })))
}

fn authorized(backend: &Backend, headers: &HeaderMap) -> bool {
    backend.requests.fetch_add(1, Ordering::SeqCst);
    headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v == format!("Bearer {TOKEN}"))
}

fn category_name(backend: &Backend, id: i64) -> Option<String> {
    backend
        .categories
        .lock()
        .unwrap()
        .iter()
        .find(|c| c.id == id)
        .map(|c| c.name.clone())
}

async fn stats(State(b): State<Shared>, headers: HeaderMap) -> (StatusCode, Json<Value>) {
    if !authorized(&b, &headers) {
        return fail(StatusCode::UNAUTHORIZED, "Invalid token");
    }
    if let Some(message) = b.stats_error.lock().unwrap().clone() {
        return fail(StatusCode::OK, &message);
    }
    let products = b.products.lock().unwrap();
    let stats = InventoryStats {
        total_products: products.len() as u64,
        low_stock: products
            .iter()
            .filter(|p| p.quantity > 0 && p.quantity < p.minimum_stock)
            .count() as u64,
        categories: b.categories.lock().unwrap().len() as u64,
    };
    ok(json!(stats))
}

async fn list_products(State(b): State<Shared>, headers: HeaderMap) -> (StatusCode, Json<Value>) {
    if !authorized(&b, &headers) {
        return fail(StatusCode::UNAUTHORIZED, "Invalid token");
    }
    if let Some(message) = b.products_error.lock().unwrap().clone() {
        return fail(StatusCode::OK, &message);
    }
    let products = b.products.lock().unwrap().clone();
    ok(json!(products))
}

async fn list_categories(State(b): State<Shared>, headers: HeaderMap) -> (StatusCode, String) {
    if !authorized(&b, &headers) {
        return (StatusCode::UNAUTHORIZED, "unauthorized".into());
    }
    if *b.categories_down.lock().unwrap() {
        return (StatusCode::INTERNAL_SERVER_ERROR, "upstream exploded".into());
    }
    let categories = b.categories.lock().unwrap().clone();
    let body = json!({ "success": true, "data": categories });
    (StatusCode::OK, body.to_string())
}

async fn get_product(
    State(b): State<Shared>,
    headers: HeaderMap,
    Path(id): Path<i64>,
) -> (StatusCode, Json<Value>) {
    if !authorized(&b, &headers) {
        return fail(StatusCode::UNAUTHORIZED, "Invalid token");
    }
    let product = b.products.lock().unwrap().iter().find(|p| p.id == id).cloned();
    match product {
        Some(product) => ok(json!(product)),
        None => fail(StatusCode::NOT_FOUND, "Product not found"),
    }
}

fn to_product(b: &Backend, id: i64, payload: ProductPayload) -> Product {
    Product {
        id,
        category_name: category_name(b, payload.category_id),
        name: payload.name,
        category_id: payload.category_id,
        quantity: payload.quantity,
        minimum_stock: payload.minimum_stock,
        location: payload.location,
        description: payload.description,
    }
}

async fn create_product(
    State(b): State<Shared>,
    headers: HeaderMap,
    Json(payload): Json<ProductPayload>,
) -> (StatusCode, Json<Value>) {
    if !authorized(&b, &headers) {
        return fail(StatusCode::UNAUTHORIZED, "Invalid token");
    }
    b.mutations.fetch_add(1, Ordering::SeqCst);
    if let Some(message) = b.save_error.lock().unwrap().clone() {
        return fail(StatusCode::BAD_REQUEST, &message);
    }
    let id = b.next_id.fetch_add(1, Ordering::SeqCst) as i64;
    let product = to_product(&b, id, payload);
    b.products.lock().unwrap().push(product.clone());
    ok(json!({ "id": product.id }))
}

async fn update_product(
    State(b): State<Shared>,
    headers: HeaderMap,
    Path(id): Path<i64>,
    Json(payload): Json<ProductPayload>,
) -> (StatusCode, Json<Value>) {
    if !authorized(&b, &headers) {
        return fail(StatusCode::UNAUTHORIZED, "Invalid token");
    }
    b.mutations.fetch_add(1, Ordering::SeqCst);
    if let Some(message) = b.save_error.lock().unwrap().clone() {
        return fail(StatusCode::BAD_REQUEST, &message);
    }
    let updated = to_product(&b, id, payload);
    let mut products = b.products.lock().unwrap();
    match products.iter_mut().find(|p| p.id == id) {
        Some(slot) => {
            *slot = updated;
            ok(Value::Null)
        }
        None => fail(StatusCode::NOT_FOUND, "Product not found"),
    }
}

async fn delete_product(
    State(b): State<Shared>,
    headers: HeaderMap,
    Path(id): Path<i64>,
) -> (StatusCode, Json<Value>) {
    if !authorized(&b, &headers) {
        return fail(StatusCode::UNAUTHORIZED, "Invalid token");
    }
    b.mutations.fetch_add(1, Ordering::SeqCst);
    let mut products = b.products.lock().unwrap();
    let before = products.len();
    products.retain(|p| p.id != id);
    if products.len() == before {
        return fail(StatusCode::NOT_FOUND, "Product not found");
    }
    ok(Value::Null)
}

pub fn sample_categories() -> Vec<Category> {
    vec![
        Category { id: 1, name: "Tornillería".into() },
        Category { id: 2, name: "Herramientas".into() },
    ]
}

/// `count` products cycling through the two categories and the three statuses
pub fn sample_products(count: i64) -> Vec<Product> {
    (1..=count)
        .map(|id| {
            let category_id = if id % 2 == 0 { 2 } else { 1 };
            Product {
                id,
                name: format!("Producto {id:02}"),
                category_id,
                category_name: Some(
                    if category_id == 1 { "Tornillería" } else { "Herramientas" }.into(),
                ),
                quantity: (id % 3) * 10,
                minimum_stock: 15,
                location: Some(format!("Pasillo {}", (b'A' + (id % 4) as u8) as char)),
                description: None,
            }
        })
        .collect()
}

/// Start the backend on an ephemeral port; returns its base URL
pub async fn spawn_backend(products: Vec<Product>) -> (String, Arc<Backend>) {
    let next_id = products.iter().map(|p| p.id).max().unwrap_or(0) as usize + 1;
    let backend = Arc::new(Backend {
        products: Mutex::new(products),
        categories: Mutex::new(sample_categories()),
        next_id: AtomicUsize::new(next_id),
        ..Default::default()
    });

    let app = Router::new()
        .route("/api/inventory/stats", get(stats))
        .route("/api/products", get(list_products).post(create_product))
        .route(
            "/api/products/{id}",
            get(get_product).put(update_product).delete(delete_product),
        )
        .route("/api/categories", get(list_categories))
        .with_state(backend.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{addr}"), backend)
}

pub fn user(role: &str, permissions: &[&str]) -> UserInfo {
    UserInfo {
        id: "1".into(),
        username: "tester".into(),
        role: role.into(),
        permissions: permissions.iter().map(|p| p.to_string()).collect(),
    }
}

pub fn admin_session() -> MemorySession {
    MemorySession::logged_in(TOKEN, user("admin", &[]))
}

pub fn page(base_url: &str, session: MemorySession) -> TestPage {
    let config = ClientConfig::new(base_url);
    let http = config.build_http_client().unwrap();
    InventoryPage::new(http, session, HistoryNavigator::new(Route::Inventory), &config)
}
