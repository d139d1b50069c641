//! Inventory page controller
//!
//! Owns the view state of the inventory screen and reacts to [`PageEvent`]s:
//! filter changes, paging and the product modals. Every mutation ends with a
//! full reload of the product list.
//!
//! Capability checks here only decide what the page offers and attempts.
//! The backend authorizes every request on its own.

use shared::{Capability, Category, InventoryStats, Product, ProductStatus};

use crate::api::InventoryApi;
use crate::banner::Banners;
use crate::filter::{self, ProductFilter};
use crate::form::ProductForm;
use crate::http::HttpClient;
use crate::navigation::{self, Navigator, Route};
use crate::render::{self, RowActions};
use crate::session::SessionStore;
use crate::{ClientConfig, ClientError, ClientResult};

/// What the product form modal is doing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(i64),
}

/// Modal currently open on the page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Modal {
    #[default]
    Closed,
    View(Product),
    Form { mode: FormMode, form: ProductForm },
    DeleteConfirm(i64),
}

/// Everything the page shows, derived or loaded
#[derive(Debug, Clone)]
pub struct ViewState {
    /// Full product list, replaced on every load
    pub products: Vec<Product>,
    /// `products` narrowed by `filter`
    pub filtered_products: Vec<Product>,
    /// 1-based
    pub current_page: usize,
    pub items_per_page: usize,
    /// Product of the open edit/delete modal
    pub current_product_id: Option<i64>,
    pub filter: ProductFilter,
    pub stats: Option<InventoryStats>,
    pub categories: Vec<Category>,
    pub modal: Modal,
}

impl ViewState {
    pub fn new(items_per_page: usize) -> Self {
        Self {
            products: Vec::new(),
            filtered_products: Vec::new(),
            current_page: 1,
            items_per_page: items_per_page.max(1),
            current_product_id: None,
            filter: ProductFilter::default(),
            stats: None,
            categories: Vec::new(),
            modal: Modal::Closed,
        }
    }

    pub fn total_pages(&self) -> usize {
        filter::page_count(self.filtered_products.len(), self.items_per_page)
    }

    /// Rows of the current page
    pub fn page_items(&self) -> &[Product] {
        filter::page_slice(&self.filtered_products, self.current_page, self.items_per_page)
    }
}

/// User interaction, decoded from the page's controls
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageEvent {
    Search(String),
    FilterCategory(Option<i64>),
    FilterStatus(Option<ProductStatus>),
    ChangePage(usize),
    OpenAdd,
    OpenView(i64),
    OpenEdit(i64),
    OpenDelete(i64),
    CloseModal,
    Save(ProductForm),
    ConfirmDelete,
    Logout,
}

impl PageEvent {
    /// Decode the `data-action` / `data-value` pair of a rendered control
    pub fn from_action(action: &str, value: &str) -> Option<Self> {
        let id = || value.trim().parse::<i64>().ok();
        let optional = |v: &str| (!v.is_empty()).then(|| v.to_string());
        match action {
            "view" => id().map(Self::OpenView),
            "edit" => id().map(Self::OpenEdit),
            "delete" => id().map(Self::OpenDelete),
            "page" => value.trim().parse().ok().map(Self::ChangePage),
            "search" => Some(Self::Search(value.to_string())),
            "filter-category" => match optional(value) {
                None => Some(Self::FilterCategory(None)),
                Some(v) => v.parse().ok().map(|id| Self::FilterCategory(Some(id))),
            },
            "filter-status" => match optional(value) {
                None => Some(Self::FilterStatus(None)),
                Some(v) => v.parse().ok().map(|s| Self::FilterStatus(Some(s))),
            },
            "add" => Some(Self::OpenAdd),
            "close" => Some(Self::CloseModal),
            "confirm-delete" => Some(Self::ConfirmDelete),
            "logout" => Some(Self::Logout),
            _ => None,
        }
    }
}

/// Result of the entry guard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardOutcome {
    /// Session valid and allowed to see the inventory
    Ready,
    /// The page was left for another route
    Redirected(Route),
}

/// Modal part of a rendered page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalView {
    Hidden,
    Form {
        title: &'static str,
        form: ProductForm,
    },
    Details(String),
    DeleteConfirm,
}

/// Rendered page fragments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageView {
    pub stats: String,
    pub table_body: String,
    pub pagination: String,
    pub category_filter: String,
    pub category_select: String,
    pub show_add_button: bool,
    pub show_actions_column: bool,
    pub modal: ModalView,
    pub banners: String,
}

/// The inventory screen
pub struct InventoryPage<H, S, N> {
    api: InventoryApi<H>,
    session: S,
    nav: N,
    state: ViewState,
    banners: Banners,
}

impl<H, S, N> InventoryPage<H, S, N>
where
    H: HttpClient,
    S: SessionStore,
    N: Navigator,
{
    pub fn new(http: H, session: S, nav: N, config: &ClientConfig) -> Self {
        Self {
            api: InventoryApi::new(http),
            session,
            nav,
            state: ViewState::new(config.items_per_page),
            banners: Banners::new(config.banner_ttl),
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn session(&self) -> &S {
        &self.session
    }

    pub fn navigator(&self) -> &N {
        &self.nav
    }

    pub fn banners(&mut self) -> &mut Banners {
        &mut self.banners
    }

    pub fn api(&self) -> &InventoryApi<H> {
        &self.api
    }

    /// Check the session, then load stats, products and categories.
    ///
    /// Nothing is fetched unless the guard passes.
    pub async fn init(&mut self) -> GuardOutcome {
        let outcome = self.guard();
        if outcome == GuardOutcome::Ready {
            self.load_all().await;
        }
        outcome
    }

    /// Fail closed: no session goes to login, no inventory capability goes
    /// to the first page the session may see.
    pub fn guard(&mut self) -> GuardOutcome {
        if !self.session.is_authenticated() {
            tracing::info!("No session, redirecting to login");
            navigation::redirect_to_login(&mut self.nav);
            return GuardOutcome::Redirected(Route::Login);
        }
        if !self.session.has_permission(Capability::ViewInventory) {
            let route = navigation::authorized_route(&self.session);
            tracing::info!(path = route.path(), "Inventory not permitted, redirecting");
            self.nav.go_to(route);
            return GuardOutcome::Redirected(route);
        }
        GuardOutcome::Ready
    }

    fn authorize(&mut self) {
        self.api.set_token(self.session.token());
    }

    fn report(&mut self, err: &ClientError, fallback: &str) {
        tracing::error!("{}: {}", fallback, err);
        self.banners.error(err.user_message(fallback));
    }

    /// Fetch the three resources concurrently; each failure is reported on its own
    pub async fn load_all(&mut self) {
        self.authorize();
        let (stats, products, categories) = tokio::join!(
            self.api.stats(),
            self.api.products(),
            self.api.categories()
        );

        match stats {
            Ok(stats) => self.state.stats = Some(stats),
            Err(e) => self.report(&e, "Error loading stats"),
        }
        match products {
            Ok(products) => self.replace_products(products),
            Err(e) => self.report(&e, "Error loading products"),
        }
        match categories {
            Ok(categories) => self.state.categories = categories,
            Err(e) => self.report(&e, "Error loading categories"),
        }
    }

    /// Reload the full product list
    pub async fn load_products(&mut self) -> ClientResult<()> {
        self.authorize();
        let result = self.api.products().await;
        match result {
            Ok(products) => {
                self.replace_products(products);
                Ok(())
            }
            Err(e) => {
                self.report(&e, "Error loading products");
                Err(e)
            }
        }
    }

    fn replace_products(&mut self, products: Vec<Product>) {
        tracing::debug!(count = products.len(), "Products loaded");
        self.state.products = products;
        self.state.filtered_products = self.state.filter.apply(&self.state.products);
        let last = self.state.total_pages().max(1);
        self.state.current_page = self.state.current_page.clamp(1, last);
    }

    /// Replace the filter, recompute the filtered list and go back to page 1
    pub fn set_filter(&mut self, filter: ProductFilter) {
        self.state.filter = filter;
        self.state.filtered_products = self.state.filter.apply(&self.state.products);
        self.state.current_page = 1;
    }

    pub fn search(&mut self, term: impl Into<String>) {
        let filter = ProductFilter {
            search: term.into(),
            ..self.state.filter.clone()
        };
        self.set_filter(filter);
    }

    pub fn filter_category(&mut self, category_id: Option<i64>) {
        let filter = ProductFilter {
            category_id,
            ..self.state.filter.clone()
        };
        self.set_filter(filter);
    }

    pub fn filter_status(&mut self, status: Option<ProductStatus>) {
        let filter = ProductFilter {
            status,
            ..self.state.filter.clone()
        };
        self.set_filter(filter);
    }

    /// Go to a page, clamped to the existing ones
    pub fn change_page(&mut self, page: usize) {
        let last = self.state.total_pages().max(1);
        self.state.current_page = page.clamp(1, last);
    }

    fn require(&mut self, capability: Capability) -> ClientResult<()> {
        if self.session.has_permission(capability) {
            return Ok(());
        }
        let err = ClientError::PermissionDenied(capability);
        tracing::warn!("{}", err);
        self.banners.error(err.to_string());
        Err(err)
    }

    pub fn open_add_modal(&mut self) -> ClientResult<()> {
        self.require(Capability::AddProduct)?;
        self.state.current_product_id = None;
        self.state.modal = Modal::Form {
            mode: FormMode::Create,
            form: ProductForm::default(),
        };
        Ok(())
    }

    pub async fn open_edit_modal(&mut self, id: i64) -> ClientResult<()> {
        self.require(Capability::EditProduct)?;
        self.authorize();
        let result = self.api.product(id).await;
        match result {
            Ok(product) => {
                self.state.current_product_id = Some(id);
                self.state.modal = Modal::Form {
                    mode: FormMode::Edit(id),
                    form: ProductForm::from_product(&product),
                };
                Ok(())
            }
            Err(e) => {
                self.report(&e, "Error loading product");
                Err(e)
            }
        }
    }

    pub async fn open_view_modal(&mut self, id: i64) -> ClientResult<()> {
        self.authorize();
        let result = self.api.product(id).await;
        match result {
            Ok(product) => {
                self.state.modal = Modal::View(product);
                Ok(())
            }
            Err(e) => {
                self.report(&e, "Error loading product details");
                Err(e)
            }
        }
    }

    pub fn open_delete_modal(&mut self, id: i64) -> ClientResult<()> {
        self.require(Capability::DeleteProduct)?;
        self.state.current_product_id = Some(id);
        self.state.modal = Modal::DeleteConfirm(id);
        Ok(())
    }

    /// Hide every modal and forget the selected product
    pub fn close_modal(&mut self) {
        self.state.modal = Modal::Closed;
        self.state.current_product_id = None;
    }

    /// Create or update depending on the selected product.
    ///
    /// The form is validated before any request is made.
    pub async fn save_product(&mut self, form: ProductForm) -> ClientResult<()> {
        let editing = self.state.current_product_id;
        let capability = match editing {
            Some(_) => Capability::EditProduct,
            None => Capability::AddProduct,
        };
        self.require(capability)?;

        let payload = match form.validate() {
            Ok(payload) => payload,
            Err(e) => {
                let err = ClientError::from(e);
                tracing::warn!("Product form rejected: {}", err);
                self.banners.error(err.to_string());
                return Err(err);
            }
        };

        self.authorize();
        let result = match editing {
            Some(id) => self.api.update_product(id, &payload).await,
            None => self.api.create_product(&payload).await,
        };
        if let Err(e) = result {
            self.report(&e, "Error saving product");
            return Err(e);
        }

        tracing::info!(product_id = ?editing, "Product saved");
        self.close_modal();
        // The save stands even if the reload fails; load_products reports that
        let _ = self.load_products().await;
        self.banners.success(if editing.is_some() {
            "Product updated"
        } else {
            "Product added"
        });
        Ok(())
    }

    /// Delete the product of the open confirmation modal
    pub async fn confirm_delete(&mut self) -> ClientResult<()> {
        let Some(id) = self.state.current_product_id else {
            return Ok(());
        };
        self.require(Capability::DeleteProduct)?;

        self.authorize();
        if let Err(e) = self.api.delete_product(id).await {
            self.report(&e, "Error deleting product");
            return Err(e);
        }

        tracing::info!(product_id = id, "Product deleted");
        self.close_modal();
        let _ = self.load_products().await;
        self.banners.success("Product deleted successfully");
        Ok(())
    }

    /// Drop the session and leave for the login page
    pub fn logout(&mut self) {
        self.session.logout();
        navigation::redirect_to_login(&mut self.nav);
    }

    /// Handle one user interaction
    pub async fn dispatch(&mut self, event: PageEvent) -> ClientResult<()> {
        tracing::debug!(?event, "Page event");
        match event {
            PageEvent::Search(term) => self.search(term),
            PageEvent::FilterCategory(id) => self.filter_category(id),
            PageEvent::FilterStatus(status) => self.filter_status(status),
            PageEvent::ChangePage(page) => self.change_page(page),
            PageEvent::OpenAdd => self.open_add_modal()?,
            PageEvent::OpenView(id) => self.open_view_modal(id).await?,
            PageEvent::OpenEdit(id) => self.open_edit_modal(id).await?,
            PageEvent::OpenDelete(id) => self.open_delete_modal(id)?,
            PageEvent::CloseModal => self.close_modal(),
            PageEvent::Save(form) => self.save_product(form).await?,
            PageEvent::ConfirmDelete => self.confirm_delete().await?,
            PageEvent::Logout => self.logout(),
        }
        Ok(())
    }

    fn row_actions(&self) -> RowActions {
        RowActions {
            can_edit: self.session.has_permission(Capability::EditProduct),
            can_delete: self.session.has_permission(Capability::DeleteProduct),
        }
    }

    /// Render the current state
    pub fn render(&mut self) -> PageView {
        let actions = self.row_actions();
        let state = &self.state;
        let modal = match &state.modal {
            Modal::Closed => ModalView::Hidden,
            Modal::View(product) => ModalView::Details(render::product_details(product)),
            Modal::Form { mode, form } => ModalView::Form {
                title: match mode {
                    FormMode::Create => "Add product",
                    FormMode::Edit(_) => "Edit product",
                },
                form: form.clone(),
            },
            Modal::DeleteConfirm(_) => ModalView::DeleteConfirm,
        };
        let stats = state
            .stats
            .as_ref()
            .map(render::stats_panel)
            .unwrap_or_default();
        let table_body = render::product_rows(state.page_items(), actions);
        let pagination = render::pagination(&filter::page_controls(
            state.current_page,
            state.total_pages(),
        ));
        let category_filter = render::category_options(&state.categories, "All categories");
        let category_select = render::category_options(&state.categories, "Select a category");
        let show_add_button = self.session.has_permission(Capability::AddProduct);
        let banners = self.banners.active().iter().map(|b| b.html()).collect();

        PageView {
            stats,
            table_body,
            pagination,
            category_filter,
            category_select,
            show_add_button,
            show_actions_column: actions.any(),
            modal,
            banners,
        }
    }
}
