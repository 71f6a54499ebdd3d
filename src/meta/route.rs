//! Route classification and cover image resolution.
//!
//! The host exposes a free-form "where am I" string plus a handful of page
//! flags. [`Route::classify`] folds those into a single [`RouteKind`] and a
//! resolved cover image so the title resolver and the tag assembler agree on
//! what is being rendered.

use std::fmt;

use tracing::debug;

use crate::context::{PageInfo, RequestContext};

/// Optional theme integration.
///
/// Themes that ship a default cover image expose it through this trait; the
/// meta data plugin receives one at construction time when available.
pub trait ThemeCompat: Send + Sync {
    /// Theme name (for logging)
    fn name(&self) -> &str;

    /// Absolute URL of the theme's default cover image
    fn default_cover_image(&self) -> Option<String>;
}

/// Theme provider backed by a fixed URL
#[derive(Debug, Clone)]
pub struct StaticTheme {
    name: String,
    cover: Option<String>,
}

impl StaticTheme {
    pub fn new(name: impl Into<String>, cover: Option<String>) -> Self {
        Self {
            name: name.into(),
            cover,
        }
    }
}

impl ThemeCompat for StaticTheme {
    fn name(&self) -> &str {
        &self.name
    }

    fn default_cover_image(&self) -> Option<String> {
        self.cover.clone().filter(|c| !c.is_empty())
    }
}

/// Classification of the current request
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RouteKind {
    Home,
    Loop,
    Category,
    Tag,
    Search,
    StaticPage,
    Post,
    NotFound,
    /// Location defined by another plugin
    Custom(String),
}

impl RouteKind {
    pub fn as_str(&self) -> &str {
        match self {
            RouteKind::Home => "home",
            RouteKind::Loop => "loop",
            RouteKind::Category => "category",
            RouteKind::Tag => "tag",
            RouteKind::Search => "search",
            RouteKind::StaticPage => "static_page",
            RouteKind::Post => "post",
            RouteKind::NotFound => "not_found",
            RouteKind::Custom(name) => name,
        }
    }

    /// Routes that render a single page
    pub fn is_singular(&self) -> bool {
        matches!(self, RouteKind::StaticPage | RouteKind::Post)
    }

    /// Routes that list pages and can be paginated
    pub fn is_paginated(&self) -> bool {
        matches!(
            self,
            RouteKind::Home | RouteKind::Loop | RouteKind::Category | RouteKind::Tag
        )
    }
}

impl fmt::Display for RouteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The classified route for one request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub kind: RouteKind,
    front_page: bool,
    cover_image: Option<String>,
}

impl Route {
    /// Classify the request and resolve its cover image
    pub fn classify(ctx: &RequestContext, theme: Option<&dyn ThemeCompat>) -> Self {
        let kind = classify_kind(ctx);
        let front_page = is_static_front_page(ctx);

        let page_cover = if kind.is_singular() || front_page {
            ctx.page
                .as_ref()
                .and_then(|p| p.cover_image.clone())
                .filter(|c| !c.is_empty())
        } else {
            None
        };
        let cover_image = page_cover.or_else(|| theme.and_then(|t| t.default_cover_image()));

        debug!(
            where_am_i = %ctx.route.where_am_i,
            kind = %kind,
            has_cover = cover_image.is_some(),
            "Classified route"
        );

        Self {
            kind,
            front_page,
            cover_image,
        }
    }

    pub fn is_home(&self) -> bool {
        self.kind == RouteKind::Home
    }

    pub fn is_loop(&self) -> bool {
        self.kind == RouteKind::Loop
    }

    pub fn is_category(&self) -> bool {
        self.kind == RouteKind::Category
    }

    pub fn is_tag(&self) -> bool {
        self.kind == RouteKind::Tag
    }

    pub fn is_search(&self) -> bool {
        self.kind == RouteKind::Search
    }

    pub fn is_static_page(&self) -> bool {
        self.kind == RouteKind::StaticPage
    }

    pub fn is_post(&self) -> bool {
        self.kind == RouteKind::Post
    }

    pub fn is_404(&self) -> bool {
        self.kind == RouteKind::NotFound
    }

    /// Static page configured as the site's front page
    pub fn is_front_page(&self) -> bool {
        self.front_page
    }

    pub fn is_singular(&self) -> bool {
        self.kind.is_singular()
    }

    pub fn has_cover_image(&self) -> bool {
        self.cover_image.is_some()
    }

    pub fn cover_image_src(&self) -> Option<&str> {
        self.cover_image.as_deref()
    }
}

fn classify_kind(ctx: &RequestContext) -> RouteKind {
    if ctx.route.not_found {
        return RouteKind::NotFound;
    }

    let has_front_page = ctx
        .site
        .home_page
        .as_deref()
        .is_some_and(|k| !k.is_empty());

    match ctx.route.where_am_i.as_str() {
        "home" if has_front_page => RouteKind::Loop,
        "home" => RouteKind::Home,
        "page" => match ctx.page.as_ref() {
            _ if is_static_front_page(ctx) => RouteKind::Home,
            Some(PageInfo {
                is_static: true, ..
            }) => RouteKind::StaticPage,
            Some(_) => RouteKind::Post,
            None => RouteKind::NotFound,
        },
        "category" => RouteKind::Category,
        "tag" => RouteKind::Tag,
        "search" => RouteKind::Search,
        other => RouteKind::Custom(other.to_string()),
    }
}

fn is_static_front_page(ctx: &RequestContext) -> bool {
    if ctx.route.not_found || ctx.route.where_am_i != "page" {
        return false;
    }
    match (ctx.site.home_page.as_deref(), ctx.page.as_ref()) {
        (Some(home), Some(page)) => !home.is_empty() && home == page.key,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(where_am_i: &str) -> RequestContext {
        let mut ctx = RequestContext::default();
        ctx.route.where_am_i = where_am_i.to_string();
        ctx
    }

    fn with_page(mut ctx: RequestContext, key: &str, is_static: bool) -> RequestContext {
        ctx.page = Some(PageInfo {
            key: key.to_string(),
            title: "Title".to_string(),
            is_static,
            ..Default::default()
        });
        ctx
    }

    #[test]
    fn test_classify_basic_locations() {
        assert_eq!(Route::classify(&ctx("home"), None).kind, RouteKind::Home);
        assert_eq!(
            Route::classify(&ctx("category"), None).kind,
            RouteKind::Category
        );
        assert_eq!(Route::classify(&ctx("tag"), None).kind, RouteKind::Tag);
        assert_eq!(Route::classify(&ctx("search"), None).kind, RouteKind::Search);
    }

    #[test]
    fn test_classify_pages() {
        let post = with_page(ctx("page"), "hello", false);
        let route = Route::classify(&post, None);
        assert!(route.is_post());
        assert!(route.is_singular());

        let about = with_page(ctx("page"), "about", true);
        let route = Route::classify(&about, None);
        assert!(route.is_static_page());
        assert!(!route.is_front_page());
    }

    #[test]
    fn test_classify_static_front_page() {
        let mut front = with_page(ctx("page"), "welcome", true);
        front.site.home_page = Some("welcome".to_string());
        let route = Route::classify(&front, None);
        assert!(route.is_home());
        assert!(route.is_front_page());

        // The blog index moves away from the root
        let mut blog = ctx("home");
        blog.site.home_page = Some("welcome".to_string());
        let route = Route::classify(&blog, None);
        assert!(route.is_loop());
        assert!(!route.is_front_page());
    }

    #[test]
    fn test_not_found_wins() {
        let mut missing = with_page(ctx("page"), "gone", false);
        missing.route.not_found = true;
        assert!(Route::classify(&missing, None).is_404());

        // "page" with no page object is treated as missing too
        assert!(Route::classify(&ctx("page"), None).is_404());
    }

    #[test]
    fn test_custom_route() {
        let route = Route::classify(&ctx("shop-cart"), None);
        assert_eq!(route.kind, RouteKind::Custom("shop-cart".to_string()));
        assert_eq!(route.kind.to_string(), "shop-cart");
    }

    #[test]
    fn test_cover_precedence() {
        let theme = StaticTheme::new("paper", Some("https://ex.com/theme.jpg".to_string()));

        let mut post = with_page(ctx("page"), "hello", false);
        if let Some(page) = post.page.as_mut() {
            page.cover_image = Some("https://ex.com/post.jpg".to_string());
        }
        let route = Route::classify(&post, Some(&theme));
        assert_eq!(route.cover_image_src(), Some("https://ex.com/post.jpg"));

        // Empty page cover falls through to the theme
        if let Some(page) = post.page.as_mut() {
            page.cover_image = Some(String::new());
        }
        let route = Route::classify(&post, Some(&theme));
        assert_eq!(route.cover_image_src(), Some("https://ex.com/theme.jpg"));

        // Loops never use a page cover
        let route = Route::classify(&ctx("category"), Some(&theme));
        assert_eq!(route.cover_image_src(), Some("https://ex.com/theme.jpg"));
    }

    #[test]
    fn test_no_cover_without_sources() {
        let post = with_page(ctx("page"), "hello", false);
        let route = Route::classify(&post, None);
        assert!(!route.has_cover_image());
        assert_eq!(route.cover_image_src(), None);

        let blank_theme = StaticTheme::new("blank", Some(String::new()));
        let route = Route::classify(&ctx("home"), Some(&blank_theme));
        assert!(!route.has_cover_image());
        assert_eq!(route.cover_image_src(), None);
    }
}
