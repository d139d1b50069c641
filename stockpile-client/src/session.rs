//! Session store
//!
//! The inventory screen never authenticates by itself; it consults a
//! session collaborator for the bearer token and the capabilities of the
//! logged-in user.

use shared::{Capability, UserInfo};

/// Session / permission collaborator
pub trait SessionStore: Send + Sync {
    /// Whether a session token is present
    fn is_authenticated(&self) -> bool;

    /// Whether the session user holds the capability
    fn has_permission(&self, capability: Capability) -> bool;

    /// Bearer token of the session
    fn token(&self) -> Option<String>;

    /// Role of the session user
    fn role(&self) -> Option<String>;

    /// Drop the session
    fn logout(&mut self);
}

/// In-memory session, the equivalent of the browser's session storage
#[derive(Debug, Clone, Default)]
pub struct MemorySession {
    token: Option<String>,
    user: Option<UserInfo>,
}

impl MemorySession {
    /// Creates a new empty session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a logged-in session.
    pub fn logged_in(token: impl Into<String>, user: UserInfo) -> Self {
        let mut session = Self::new();
        session.set_login(token.into(), user);
        session
    }

    /// Sets the token and user info after a successful login.
    pub fn set_login(&mut self, token: String, user: UserInfo) {
        self.token = Some(token);
        self.user = Some(user);
    }

    /// Returns the current user info if available.
    pub fn user(&self) -> Option<&UserInfo> {
        self.user.as_ref()
    }
}

impl SessionStore for MemorySession {
    fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    fn has_permission(&self, capability: Capability) -> bool {
        self.user
            .as_ref()
            .is_some_and(|user| user.has_permission(capability))
    }

    fn token(&self) -> Option<String> {
        self.token.clone()
    }

    fn role(&self) -> Option<String> {
        self.user.as_ref().map(|user| user.role.clone())
    }

    fn logout(&mut self) {
        tracing::info!("Session cleared");
        self.token = None;
        self.user = None;
    }
}
