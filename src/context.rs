//! Request context handed to plugins by the host.
//!
//! Everything a plugin needs to know about the current request lives here:
//! site settings, the resolved route, the current page and the taxonomy
//! used to turn category/tag keys into display names.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while reading the request context
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContextError {
    #[error("category '{0}' not found")]
    CategoryNotFound(String),

    #[error("tag '{0}' not found")]
    TagNotFound(String),
}

/// Text direction of the active language
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Ltr,
    Rtl,
}

impl Direction {
    pub fn is_rtl(&self) -> bool {
        matches!(self, Direction::Rtl)
    }
}

/// Site-wide settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteInfo {
    pub title: String,
    pub slogan: String,
    pub description: String,
    /// Absolute base URL, e.g. `https://example.com/`
    pub url: String,
    /// Language code, e.g. `en` or `ar`
    pub language: String,
    /// Locale used for `og:locale`, e.g. `en_US`
    pub locale: String,
    /// Path the blog index moves to when a static front page is set
    pub blog_path: Option<String>,
    /// Key of the static page used as front page
    pub home_page: Option<String>,
}

/// The page being rendered (singular routes and the 404 page)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PageInfo {
    pub key: String,
    pub title: String,
    pub description: String,
    pub published: Option<DateTime<Utc>>,
    pub author: String,
    pub category: Option<String>,
    pub tags: Vec<String>,
    pub cover_image: Option<String>,
    pub template: Option<String>,
    /// Static page rather than a blog post
    #[serde(rename = "static")]
    pub is_static: bool,
}

/// Route as resolved by the host router
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RouteContext {
    /// Free-form location string (`home`, `page`, `category`, `tag`,
    /// `search` or a plugin-defined value)
    pub where_am_i: String,
    pub slug: String,
    pub not_found: bool,
    /// Absolute URL of the current request
    pub url: String,
    /// 1-based pagination number
    pub page_number: u32,
    pub search_terms: String,
    pub direction: Direction,
}

impl Default for RouteContext {
    fn default() -> Self {
        Self {
            where_am_i: "home".to_string(),
            slug: String::new(),
            not_found: false,
            url: String::new(),
            page_number: 1,
            search_terms: String::new(),
            direction: Direction::Ltr,
        }
    }
}

/// Category and tag display names keyed by slug
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Taxonomy {
    pub categories: HashMap<String, String>,
    pub tags: HashMap<String, String>,
}

impl Taxonomy {
    /// Look up a category name by key
    pub fn category(&self, key: &str) -> Result<&str, ContextError> {
        self.categories
            .get(key)
            .map(String::as_str)
            .ok_or_else(|| ContextError::CategoryNotFound(key.to_string()))
    }

    /// Look up a tag name by key
    pub fn tag(&self, key: &str) -> Result<&str, ContextError> {
        self.tags
            .get(key)
            .map(String::as_str)
            .ok_or_else(|| ContextError::TagNotFound(key.to_string()))
    }
}

/// Everything the host knows about the current request
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RequestContext {
    pub site: SiteInfo,
    pub route: RouteContext,
    pub page: Option<PageInfo>,
    pub taxonomy: Taxonomy,
}

impl RequestContext {
    /// Parse a context from its JSON form
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_taxonomy_lookup() {
        let mut taxonomy = Taxonomy::default();
        taxonomy
            .categories
            .insert("news".to_string(), "News".to_string());

        assert_eq!(taxonomy.category("news"), Ok("News"));
        assert_eq!(
            taxonomy.category("gone"),
            Err(ContextError::CategoryNotFound("gone".to_string()))
        );
        assert_eq!(
            taxonomy.tag("rust").unwrap_err().to_string(),
            "tag 'rust' not found"
        );
    }

    #[test]
    fn test_context_from_partial_json() {
        let ctx = RequestContext::from_json(
            r#"{
                "site": { "title": "My Site" },
                "route": { "where_am_i": "page", "direction": "rtl" },
                "page": { "title": "About", "static": true,
                          "published": "2024-03-01T10:00:00Z" }
            }"#,
        )
        .unwrap();

        assert_eq!(ctx.site.title, "My Site");
        assert_eq!(ctx.route.where_am_i, "page");
        assert_eq!(ctx.route.page_number, 1);
        assert!(ctx.route.direction.is_rtl());

        let page = ctx.page.unwrap();
        assert!(page.is_static);
        assert!(page.published.is_some());
    }

    #[test]
    fn test_default_route_is_home() {
        let ctx = RequestContext::default();
        assert_eq!(ctx.route.where_am_i, "home");
        assert!(!ctx.route.direction.is_rtl());
        assert!(ctx.page.is_none());
    }
}
