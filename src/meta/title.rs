//! Title template resolution.
//!
//! Slot choice for a route: the RTL template when rendering right-to-left
//! and it is set, the LTR template when set, and otherwise a built-in
//! default assembled from the route's title elements.

use tracing::debug;

use super::placeholders::{PlaceholderValues, Token};
use super::route::RouteKind;
use super::settings::MetaSettings;

/// Title elements for a route kind, in left-to-right order
fn default_elements(kind: &RouteKind, values: &PlaceholderValues) -> Vec<Token> {
    match kind {
        RouteKind::Home => {
            if !values.get(Token::SiteSlogan).is_empty() {
                vec![Token::SiteTitle, Token::SiteSlogan]
            } else {
                vec![Token::SiteTitle, Token::SiteDescription]
            }
        }
        RouteKind::Loop => vec![Token::LoopType, Token::SiteTitle],
        RouteKind::Category => vec![Token::Category, Token::SiteTitle],
        RouteKind::Tag => vec![Token::Tag, Token::SiteTitle],
        RouteKind::Search => vec![Token::SearchTerms, Token::SiteTitle],
        RouteKind::StaticPage | RouteKind::Post | RouteKind::NotFound => {
            vec![Token::PageTitle, Token::SiteTitle]
        }
        RouteKind::Custom(_) => vec![Token::SiteTitle],
    }
}

/// Build the built-in template for a route kind.
///
/// Empty elements are dropped so the result never starts or ends with a
/// separator. Right-to-left output reverses the element order; the
/// separator value itself is already mirrored in `values`.
pub fn default_template(kind: &RouteKind, rtl: bool, values: &PlaceholderValues) -> String {
    let mut parts: Vec<String> = default_elements(kind, values)
        .into_iter()
        .filter(|t| !values.get(*t).is_empty())
        .map(|t| t.marker())
        .collect();

    // Pagination rides on the leading element, on the side facing the rest
    if kind.is_paginated() {
        if let Some(first) = parts.first_mut() {
            if rtl {
                first.insert_str(0, &Token::PageNumber.marker());
            } else {
                first.push_str(&Token::PageNumber.marker());
            }
        }
    }

    if rtl {
        parts.reverse();
    }

    let joiner = format!(" {} ", Token::Separator.marker());
    parts.join(&joiner)
}

/// Pick the template for a slot pair, falling back to `fallback`
fn select<'a>(ltr: &'a str, rtl_slot: &'a str, rtl: bool) -> Option<&'a str> {
    if rtl && !rtl_slot.trim().is_empty() {
        Some(rtl_slot)
    } else if !ltr.trim().is_empty() {
        Some(ltr)
    } else {
        None
    }
}

/// Resolve the title for a route kind.
///
/// Returns `None` for custom routes; callers fall back to
/// [`resolve_default_title`].
pub fn resolve_title(
    kind: &RouteKind,
    rtl: bool,
    settings: &MetaSettings,
    values: &PlaceholderValues,
) -> Option<String> {
    let (ltr, rtl_slot) = settings.slot(kind)?;

    let template = match select(ltr, rtl_slot, rtl) {
        Some(t) => {
            debug!(kind = %kind, rtl, "Using configured title template");
            t.to_string()
        }
        None => {
            debug!(kind = %kind, rtl, "Using built-in title template");
            default_template(kind, rtl, values)
        }
    };

    Some(values.render(&template).trim().to_string())
}

/// Title for routes without a slot of their own.
///
/// Uses the `default_title` pair, then the site title.
pub fn resolve_default_title(
    rtl: bool,
    settings: &MetaSettings,
    values: &PlaceholderValues,
) -> String {
    let (ltr, rtl_slot) = settings.default_slot();
    match select(ltr, rtl_slot, rtl) {
        Some(t) => values.render(t).trim().to_string(),
        None => values.get(Token::SiteTitle).to_string(),
    }
}

/// Resolve the document title for any route
pub fn document_title(
    kind: &RouteKind,
    rtl: bool,
    settings: &MetaSettings,
    values: &PlaceholderValues,
) -> String {
    resolve_title(kind, rtl, settings, values)
        .unwrap_or_else(|| resolve_default_title(rtl, settings, values))
}
