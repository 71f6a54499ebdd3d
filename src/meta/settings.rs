//! Admin-configured settings for the meta data plugin.

use serde::{Deserialize, Serialize};

use super::route::RouteKind;

/// Meta data plugin settings as stored by the host
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MetaSettings {
    pub home_title: String,
    pub home_title_rtl: String,
    pub loop_title: String,
    pub loop_title_rtl: String,
    pub cat_title: String,
    pub cat_title_rtl: String,
    pub tag_title: String,
    pub tag_title_rtl: String,
    pub search_title: String,
    pub search_title_rtl: String,
    pub page_title: String,
    pub page_title_rtl: String,
    pub post_title: String,
    pub post_title_rtl: String,
    pub error_title: String,
    pub error_title_rtl: String,
    /// Used for routes no other slot covers
    pub default_title: String,
    pub default_title_rtl: String,

    /// Separator glyph placed between title elements
    pub separator: String,
    /// Value of `{{loop-type}}`
    pub loop_label: String,
    /// Word used in the pagination fragment
    pub page_label: String,
    /// strftime pattern for `{{published}}`
    pub date_format: String,

    pub meta_schema: bool,
    pub meta_og: bool,
    pub meta_twitter: bool,
    pub meta_dublin: bool,

    /// One keyword per line
    pub keywords: String,
    /// Twitter handle for `twitter:site`
    pub twitter_site: String,
    /// Raw HTML appended to the head output
    pub custom_head: String,
    /// Raw HTML emitted before `</body>`
    pub footer_scripts: String,
}

impl Default for MetaSettings {
    fn default() -> Self {
        Self {
            home_title: String::new(),
            home_title_rtl: String::new(),
            loop_title: String::new(),
            loop_title_rtl: String::new(),
            cat_title: String::new(),
            cat_title_rtl: String::new(),
            tag_title: String::new(),
            tag_title_rtl: String::new(),
            search_title: String::new(),
            search_title_rtl: String::new(),
            page_title: String::new(),
            page_title_rtl: String::new(),
            post_title: String::new(),
            post_title_rtl: String::new(),
            error_title: String::new(),
            error_title_rtl: String::new(),
            default_title: String::new(),
            default_title_rtl: String::new(),
            separator: "|".to_string(),
            loop_label: "Blog".to_string(),
            page_label: "Page".to_string(),
            date_format: "%B %-d, %Y".to_string(),
            meta_schema: true,
            meta_og: true,
            meta_twitter: true,
            meta_dublin: false,
            keywords: String::new(),
            twitter_site: String::new(),
            custom_head: String::new(),
            footer_scripts: String::new(),
        }
    }
}

impl MetaSettings {
    /// The (LTR, RTL) template pair for a route kind.
    ///
    /// Custom routes have no slot of their own.
    pub fn slot(&self, kind: &RouteKind) -> Option<(&str, &str)> {
        let pair = match kind {
            RouteKind::Home => (&self.home_title, &self.home_title_rtl),
            RouteKind::Loop => (&self.loop_title, &self.loop_title_rtl),
            RouteKind::Category => (&self.cat_title, &self.cat_title_rtl),
            RouteKind::Tag => (&self.tag_title, &self.tag_title_rtl),
            RouteKind::Search => (&self.search_title, &self.search_title_rtl),
            RouteKind::StaticPage => (&self.page_title, &self.page_title_rtl),
            RouteKind::Post => (&self.post_title, &self.post_title_rtl),
            RouteKind::NotFound => (&self.error_title, &self.error_title_rtl),
            RouteKind::Custom(_) => return None,
        };
        Some((pair.0.as_str(), pair.1.as_str()))
    }

    /// The fallback slot pair for routes without their own
    pub fn default_slot(&self) -> (&str, &str) {
        (&self.default_title, &self.default_title_rtl)
    }

    /// Keywords as a comma separated list, blank lines dropped
    pub fn keyword_list(&self) -> String {
        self.keywords
            .lines()
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .collect::<Vec<_>>()
            .join(", ")
    }
}
