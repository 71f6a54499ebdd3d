//! Meta data plugin: page titles and SEO/social meta tags.
//!
//! Per request the plugin classifies the route, computes the placeholder
//! values, resolves the `<title>` and assembles the enabled tag blocks.

pub mod placeholders;
pub mod route;
pub mod settings;
pub mod tags;
pub mod title;

use std::sync::Arc;

use html_escape::encode_text;
use tracing::{debug, warn};

use crate::context::RequestContext;
use crate::plugins::SitePlugin;
use placeholders::{PlaceholderValues, Token};
use route::{Route, ThemeCompat};
use settings::MetaSettings;
use tags::{ArticleMeta, MetaInput, TagFlags};

/// Title and meta tag generator
pub struct MetaData {
    settings: MetaSettings,
    theme: Option<Arc<dyn ThemeCompat>>,
}

impl MetaData {
    pub fn new(settings: MetaSettings) -> Self {
        Self {
            settings,
            theme: None,
        }
    }

    /// Attach a theme that supplies a default cover image
    pub fn with_theme(mut self, theme: Arc<dyn ThemeCompat>) -> Self {
        debug!(theme = theme.name(), "Theme compatibility enabled");
        self.theme = Some(theme);
        self
    }

    pub fn settings(&self) -> &MetaSettings {
        &self.settings
    }

    /// Classify the request once for title and tags
    pub fn route(&self, ctx: &RequestContext) -> Route {
        Route::classify(ctx, self.theme.as_deref())
    }

    /// Document title for the request
    pub fn title(&self, ctx: &RequestContext) -> String {
        let route = self.route(ctx);
        let values = PlaceholderValues::build(ctx, &route, &self.settings);
        title::document_title(
            &route.kind,
            ctx.route.direction.is_rtl(),
            &self.settings,
            &values,
        )
    }

    /// Values for the tag blocks
    pub fn meta_input(
        &self,
        ctx: &RequestContext,
        route: &Route,
        values: &PlaceholderValues,
        title: &str,
    ) -> MetaInput {
        let description = if route.is_singular() || route.is_front_page() {
            values.get(Token::PageDescription).to_string()
        } else {
            ctx.site.description.clone()
        };

        let article = if route.is_singular() {
            ctx.page.as_ref().map(|page| {
                let section = page.category.as_deref().and_then(|key| {
                    ctx.taxonomy
                        .category(key)
                        .map_err(|e| warn!(error = %e, "Omitting article:section"))
                        .ok()
                        .map(str::to_string)
                });
                let tags = page
                    .tags
                    .iter()
                    .filter_map(|key| {
                        ctx.taxonomy
                            .tag(key)
                            .map_err(|e| warn!(error = %e, "Omitting article:tag"))
                            .ok()
                            .map(str::to_string)
                    })
                    .collect();
                ArticleMeta {
                    author: page.author.clone(),
                    published: page.published.map(|d| d.to_rfc3339()),
                    section,
                    tags,
                }
            })
        } else {
            None
        };

        let title = if route.is_singular() {
            values.get(Token::PageTitle).to_string()
        } else {
            title.to_string()
        };

        MetaInput {
            title,
            description,
            keywords: self.settings.keyword_list(),
            url: ctx.route.url.clone(),
            site_name: ctx.site.title.clone(),
            locale: ctx.site.locale.clone(),
            language: ctx.site.language.clone(),
            cover_image: route.cover_image_src().map(str::to_string),
            twitter_site: self.settings.twitter_site.clone(),
            article,
        }
    }

    /// Full head fragment: title, tag blocks and custom head HTML
    pub fn head(&self, ctx: &RequestContext) -> String {
        let route = self.route(ctx);
        let values = PlaceholderValues::build(ctx, &route, &self.settings);
        let title = title::document_title(
            &route.kind,
            ctx.route.direction.is_rtl(),
            &self.settings,
            &values,
        );

        let mut html = format!("<title>{}</title>\n", encode_text(&title));
        let input = self.meta_input(ctx, &route, &values, &title);
        html.push_str(&tags::assemble(&input, TagFlags::from(&self.settings)));

        let custom = self.settings.custom_head.trim();
        if !custom.is_empty() {
            html.push_str(custom);
            html.push('\n');
        }
        html
    }
}

impl SitePlugin for MetaData {
    fn name(&self) -> &str {
        "MetaData"
    }

    fn site_head(&self, ctx: &RequestContext) -> String {
        self.head(ctx)
    }

    fn site_body_end(&self, _ctx: &RequestContext) -> String {
        let scripts = self.settings.footer_scripts.trim();
        if scripts.is_empty() {
            String::new()
        } else {
            format!("{}\n", scripts)
        }
    }
}
