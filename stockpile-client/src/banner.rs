//! Transient notification banners
//!
//! Newest banner first; each one disappears once its lifetime has passed.

use std::time::Duration;

use tokio::time::Instant;

use crate::config::DEFAULT_BANNER_TTL;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    Error,
    Success,
}

impl BannerKind {
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Error => "alert alert-danger",
            Self::Success => "alert alert-success",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    pub kind: BannerKind,
    pub message: String,
    expires_at: Instant,
}

impl Banner {
    /// Markup of the banner, message escaped
    pub fn html(&self) -> String {
        format!(
            r#"<div class="{}">{}</div>"#,
            self.kind.css_class(),
            crate::render::escape_html(&self.message)
        )
    }
}

#[derive(Debug, Clone)]
pub struct Banners {
    ttl: Duration,
    items: Vec<Banner>,
}

impl Default for Banners {
    fn default() -> Self {
        Self::new(DEFAULT_BANNER_TTL)
    }
}

impl Banners {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            items: Vec::new(),
        }
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.push(BannerKind::Error, message.into());
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.push(BannerKind::Success, message.into());
    }

    fn push(&mut self, kind: BannerKind, message: String) {
        let now = Instant::now();
        self.prune(now);
        let banner = Banner {
            kind,
            message,
            expires_at: now + self.ttl,
        };
        self.items.insert(0, banner);
    }

    fn prune(&mut self, now: Instant) {
        self.items.retain(|b| b.expires_at > now);
    }

    /// Drop expired banners and return the visible ones
    pub fn active(&mut self) -> &[Banner] {
        self.prune(Instant::now());
        &self.items
    }

    /// Messages of the visible banners of one kind, newest first
    pub fn messages(&mut self, kind: BannerKind) -> Vec<String> {
        self.active()
            .iter()
            .filter(|b| b.kind == kind)
            .map(|b| b.message.clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_banners_expire_after_ttl() {
        let mut banners = Banners::default();
        banners.error("Error loading stats");
        tokio::time::advance(Duration::from_secs(2)).await;
        banners.success("Product added");

        let active = banners.active();
        assert_eq!(active.len(), 2);
        assert_eq!(active[0].message, "Product added");

        tokio::time::advance(Duration::from_millis(1500)).await;
        assert_eq!(banners.messages(BannerKind::Error), Vec::<String>::new());
        assert_eq!(banners.messages(BannerKind::Success), vec!["Product added".to_string()]);

        tokio::time::advance(Duration::from_secs(2)).await;
        assert!(banners.active().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_push_drops_expired_banners() {
        let mut banners = Banners::default();
        for _ in 0..50 {
            banners.error("Error loading products");
            tokio::time::advance(Duration::from_secs(4)).await;
        }
        banners.success("Product added");
        assert_eq!(banners.items.len(), 1);
        assert_eq!(banners.items[0].message, "Product added");
    }

    #[tokio::test(start_paused = true)]
    async fn test_banner_markup_is_escaped() {
        let mut banners = Banners::default();
        banners.error("<b>boom</b>");
        assert_eq!(
            banners.active()[0].html(),
            r#"<div class="alert alert-danger">&lt;b&gt;boom&lt;/b&gt;</div>"#
        );
    }
}
