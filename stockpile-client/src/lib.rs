//! Stockpile Client - inventory screen for the Stockpile backend
//!
//! Session guard, concurrent data loading, client-side filtering and
//! pagination, product CRUD through modals, and HTML rendering of the
//! result.

pub mod api;
pub mod banner;
pub mod config;
pub mod error;
pub mod filter;
pub mod form;
pub mod http;
pub mod logger;
pub mod navigation;
pub mod page;
pub mod render;
pub mod session;

pub use api::InventoryApi;
pub use banner::{Banner, BannerKind, Banners};
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use filter::{PageControl, ProductFilter};
pub use form::{ProductForm, ProductFormError};
pub use http::{HttpClient, NetworkHttpClient};
pub use navigation::{HistoryNavigator, Navigator, Route};
pub use page::{FormMode, GuardOutcome, InventoryPage, Modal, ModalView, PageEvent, PageView, ViewState};
pub use session::{MemorySession, SessionStore};

// Re-export shared types for convenience
pub use shared::{ApiResponse, Capability, Category, InventoryStats, Product, ProductPayload, ProductStatus, UserInfo};
