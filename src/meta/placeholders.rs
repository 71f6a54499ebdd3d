//! Closed-vocabulary placeholder engine.
//!
//! Templates contain `{{name}}` markers. Only names listed in [`Token`] are
//! substituted; anything else is left in the output verbatim.

use std::borrow::Cow;
use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use tracing::warn;

use super::route::{Route, RouteKind};
use super::settings::MetaSettings;
use crate::context::{ContextError, RequestContext};

static TOKEN_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{\{\s*([a-z][a-z-]*)\s*\}\}").expect("valid token pattern"));

/// Placeholder tokens recognised in title templates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    SiteTitle,
    SiteSlogan,
    SiteDescription,
    PageTitle,
    PageDescription,
    Published,
    Category,
    Tag,
    SearchTerms,
    LoopType,
    PageNumber,
    Separator,
}

impl Token {
    pub fn all() -> &'static [Token] {
        &[
            Token::SiteTitle,
            Token::SiteSlogan,
            Token::SiteDescription,
            Token::PageTitle,
            Token::PageDescription,
            Token::Published,
            Token::Category,
            Token::Tag,
            Token::SearchTerms,
            Token::LoopType,
            Token::PageNumber,
            Token::Separator,
        ]
    }

    /// Name as written between the braces
    pub fn as_str(&self) -> &'static str {
        match self {
            Token::SiteTitle => "site-title",
            Token::SiteSlogan => "site-slogan",
            Token::SiteDescription => "site-description",
            Token::PageTitle => "page-title",
            Token::PageDescription => "page-description",
            Token::Published => "published",
            Token::Category => "category",
            Token::Tag => "tag",
            Token::SearchTerms => "search-terms",
            Token::LoopType => "loop-type",
            Token::PageNumber => "page-number",
            Token::Separator => "separator",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Token::all().iter().copied().find(|t| t.as_str() == name)
    }

    /// The `{{name}}` marker for this token
    pub fn marker(&self) -> String {
        format!("{{{{{}}}}}", self.as_str())
    }
}

/// Substitute every recognised token using `resolve`.
///
/// Unknown names, and known names the resolver declines, stay as written.
pub fn render<'a, F>(template: &str, mut resolve: F) -> String
where
    F: FnMut(Token) -> Option<Cow<'a, str>>,
{
    TOKEN_PATTERN
        .replace_all(template, |caps: &Captures<'_>| {
            Token::from_name(&caps[1])
                .and_then(&mut resolve)
                .map(Cow::into_owned)
                .unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}

/// Mirror directional glyphs for right-to-left output
pub fn mirror_glyphs(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '>' => '<',
            '<' => '>',
            '→' => '←',
            '←' => '→',
            '≫' => '≪',
            '≪' => '≫',
            '»' => '«',
            '«' => '»',
            '›' => '‹',
            '‹' => '›',
            other => other,
        })
        .collect()
}

/// Display name from a taxonomy lookup, empty when the term is gone
fn name_or_empty(lookup: Result<&str, ContextError>) -> String {
    match lookup {
        Ok(name) => name.to_string(),
        Err(e) => {
            warn!(error = %e, "Taxonomy lookup failed, leaving placeholder empty");
            String::new()
        }
    }
}

/// Request-scoped values for every [`Token`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlaceholderValues {
    values: HashMap<Token, String>,
}

impl PlaceholderValues {
    /// Compute all values for the current request.
    ///
    /// Category and tag come from the route slug on listing routes and from
    /// the page on singular routes. Lookups that fail leave them empty.
    pub fn build(ctx: &RequestContext, route: &Route, settings: &MetaSettings) -> Self {
        let rtl = ctx.route.direction.is_rtl();
        let separator = if rtl {
            mirror_glyphs(&settings.separator)
        } else {
            settings.separator.clone()
        };

        let page = ctx.page.as_ref();
        let page_title = match (page, &route.kind) {
            (Some(p), _) if !p.title.is_empty() => p.title.clone(),
            (_, RouteKind::NotFound) => "Page Not Found".to_string(),
            _ => String::new(),
        };
        let page_description = page
            .map(|p| p.description.clone())
            .filter(|d| !d.is_empty())
            .unwrap_or_else(|| ctx.site.description.clone());
        let published = page
            .and_then(|p| p.published)
            .map(|d| d.format(&settings.date_format).to_string())
            .unwrap_or_default();

        let category = if route.is_category() {
            name_or_empty(ctx.taxonomy.category(&ctx.route.slug))
        } else if route.is_singular() {
            page.and_then(|p| p.category.as_deref())
                .map(|key| name_or_empty(ctx.taxonomy.category(key)))
                .unwrap_or_default()
        } else {
            String::new()
        };
        let tag = if route.is_tag() {
            name_or_empty(ctx.taxonomy.tag(&ctx.route.slug))
        } else if route.is_singular() {
            page.map(|p| {
                p.tags
                    .iter()
                    .map(|key| name_or_empty(ctx.taxonomy.tag(key)))
                    .filter(|name| !name.is_empty())
                    .collect::<Vec<_>>()
                    .join(", ")
            })
            .unwrap_or_default()
        } else {
            String::new()
        };

        // RTL titles read the fragment from the other side
        let page_number = if route.kind.is_paginated() && ctx.route.page_number > 1 {
            let label = format!("{} {}", settings.page_label, ctx.route.page_number);
            if rtl {
                format!("{label} {separator} ")
            } else {
                format!(" {separator} {label}")
            }
        } else {
            String::new()
        };

        let mut values = HashMap::new();
        values.insert(Token::SiteTitle, ctx.site.title.clone());
        values.insert(Token::SiteSlogan, ctx.site.slogan.clone());
        values.insert(Token::SiteDescription, ctx.site.description.clone());
        values.insert(Token::PageTitle, page_title);
        values.insert(Token::PageDescription, page_description);
        values.insert(Token::Published, published);
        values.insert(Token::Category, category);
        values.insert(Token::Tag, tag);
        values.insert(Token::SearchTerms, ctx.route.search_terms.clone());
        values.insert(Token::LoopType, settings.loop_label.clone());
        values.insert(Token::PageNumber, page_number);
        values.insert(Token::Separator, separator);

        Self { values }
    }

    pub fn get(&self, token: Token) -> &str {
        self.values.get(&token).map(String::as_str).unwrap_or("")
    }

    pub fn set(&mut self, token: Token, value: impl Into<String>) {
        self.values.insert(token, value.into());
    }

    /// Render a template against these values
    pub fn render(&self, template: &str) -> String {
        render(template, |token| Some(Cow::Borrowed(self.get(token))))
    }
}
