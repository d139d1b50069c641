//! Navigation helpers
//!
//! Named routes plus the redirects the inventory screen performs before
//! and after it runs.

use shared::Capability;

use crate::session::SessionStore;

/// Named page routes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Login,
    Inventory,
    Users,
    Reports,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Self::Login => "/pages/login.html",
            Self::Inventory => "/pages/inventory.html",
            Self::Users => "/pages/users.html",
            Self::Reports => "/pages/reports.html",
        }
    }

    pub fn from_path(path: &str) -> Option<Self> {
        [Self::Login, Self::Inventory, Self::Users, Self::Reports]
            .into_iter()
            .find(|route| route.path() == path)
    }

    /// Landing page after login
    pub fn home() -> Self {
        Self::Inventory
    }
}

/// Navigation collaborator (the browser location in a real page)
pub trait Navigator: Send + Sync {
    /// Path of the page currently shown
    fn current_path(&self) -> &str;

    /// Leave the current page
    fn go_to(&mut self, route: Route);
}

/// Navigator that keeps the visited paths in memory
#[derive(Debug, Clone)]
pub struct HistoryNavigator {
    history: Vec<String>,
}

impl HistoryNavigator {
    pub fn new(start: Route) -> Self {
        Self::at_path(start.path())
    }

    pub fn at_path(path: impl Into<String>) -> Self {
        Self {
            history: vec![path.into()],
        }
    }

    /// Every path visited, oldest first
    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// Route of the current path, if it is a named one
    pub fn current_route(&self) -> Option<Route> {
        Route::from_path(self.current_path())
    }
}

impl Navigator for HistoryNavigator {
    fn current_path(&self) -> &str {
        self.history.last().map(String::as_str).unwrap_or_default()
    }

    fn go_to(&mut self, route: Route) {
        tracing::debug!(path = route.path(), "Redirecting");
        self.history.push(route.path().to_string());
    }
}

pub fn redirect_to_login<N: Navigator + ?Sized>(nav: &mut N) {
    nav.go_to(Route::Login);
}

pub fn redirect_to_home<N: Navigator + ?Sized>(nav: &mut N) {
    nav.go_to(Route::home());
}

pub fn redirect_to_unauthorized<N: Navigator + ?Sized>(nav: &mut N) {
    redirect_to_home(nav);
}

/// Require a session, and when `allowed_roles` is not empty, one of those roles.
///
/// Redirects and returns `false` when the requirement is not met.
pub fn require_auth<S, N>(session: &S, nav: &mut N, allowed_roles: &[&str]) -> bool
where
    S: SessionStore + ?Sized,
    N: Navigator + ?Sized,
{
    if !session.is_authenticated() {
        redirect_to_login(nav);
        return false;
    }
    if !allowed_roles.is_empty() {
        let allowed = session
            .role()
            .is_some_and(|role| allowed_roles.contains(&role.as_str()));
        if !allowed {
            redirect_to_unauthorized(nav);
            return false;
        }
    }
    true
}

/// Keep anonymous users on the login page and logged-in users off it
pub fn setup_navigation<S, N>(session: &S, nav: &mut N)
where
    S: SessionStore + ?Sized,
    N: Navigator + ?Sized,
{
    let on_login = nav.current_path() == Route::Login.path();
    if !session.is_authenticated() && !on_login {
        redirect_to_login(nav);
    } else if session.is_authenticated() && on_login {
        redirect_to_home(nav);
    }
}

/// First page the session is allowed to see
pub fn authorized_route<S: SessionStore + ?Sized>(session: &S) -> Route {
    if !session.is_authenticated() {
        return Route::Login;
    }
    [
        (Capability::ViewInventory, Route::Inventory),
        (Capability::ViewReports, Route::Reports),
        (Capability::ManageUsers, Route::Users),
    ]
    .into_iter()
    .find(|(capability, _)| session.has_permission(*capability))
    .map(|(_, route)| route)
    .unwrap_or(Route::Login)
}

pub fn redirect_to_authorized_page<S, N>(session: &S, nav: &mut N)
where
    S: SessionStore + ?Sized,
    N: Navigator + ?Sized,
{
    nav.go_to(authorized_route(session));
}
