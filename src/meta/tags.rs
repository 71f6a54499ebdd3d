//! Meta tag assembly.
//!
//! Blocks are emitted in a fixed order: Standard, Schema.org, Open Graph,
//! Twitter, Dublin Core. Only the Standard block is unconditional.

use html_escape::encode_double_quoted_attribute;

use super::settings::MetaSettings;

/// Which optional blocks to emit
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TagFlags {
    pub schema: bool,
    pub open_graph: bool,
    pub twitter: bool,
    pub dublin_core: bool,
}

impl TagFlags {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn all() -> Self {
        Self {
            schema: true,
            open_graph: true,
            twitter: true,
            dublin_core: true,
        }
    }
}

impl From<&MetaSettings> for TagFlags {
    fn from(settings: &MetaSettings) -> Self {
        Self {
            schema: settings.meta_schema,
            open_graph: settings.meta_og,
            twitter: settings.meta_twitter,
            dublin_core: settings.meta_dublin,
        }
    }
}

/// Details only present when rendering a single page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleMeta {
    pub author: String,
    /// RFC 3339 timestamp
    pub published: Option<String>,
    /// Resolved category name
    pub section: Option<String>,
    /// Resolved tag names
    pub tags: Vec<String>,
}

/// Values the blocks are populated from
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetaInput {
    pub title: String,
    pub description: String,
    /// Comma separated keyword list
    pub keywords: String,
    pub url: String,
    pub site_name: String,
    pub locale: String,
    pub language: String,
    pub cover_image: Option<String>,
    pub twitter_site: String,
    pub article: Option<ArticleMeta>,
}

fn push_meta(out: &mut String, attr: &str, key: &str, value: &str) {
    out.push_str(&format!(
        "<meta {}=\"{}\" content=\"{}\">\n",
        attr,
        key,
        encode_double_quoted_attribute(value)
    ));
}

fn push_link(out: &mut String, rel: &str, href: &str) {
    out.push_str(&format!(
        "<link rel=\"{}\" href=\"{}\">\n",
        rel,
        encode_double_quoted_attribute(href)
    ));
}

fn standard_block(input: &MetaInput, out: &mut String) {
    push_meta(out, "name", "description", &input.description);
    if !input.keywords.is_empty() {
        push_meta(out, "name", "keywords", &input.keywords);
    }
    if let Some(article) = &input.article {
        if !article.author.is_empty() {
            push_meta(out, "name", "author", &article.author);
        }
    }
    if !input.url.is_empty() {
        push_link(out, "canonical", &input.url);
    }
}

fn schema_block(input: &MetaInput, out: &mut String) {
    push_meta(out, "itemprop", "name", &input.title);
    push_meta(out, "itemprop", "description", &input.description);
    if let Some(image) = &input.cover_image {
        push_meta(out, "itemprop", "image", image);
    }
    if let Some(article) = &input.article {
        if !article.author.is_empty() {
            push_meta(out, "itemprop", "author", &article.author);
        }
        if let Some(date) = &article.published {
            push_meta(out, "itemprop", "datePublished", date);
        }
    }
}

fn open_graph_block(input: &MetaInput, out: &mut String) {
    let og_type = if input.article.is_some() {
        "article"
    } else {
        "website"
    };
    push_meta(out, "property", "og:type", og_type);
    push_meta(out, "property", "og:title", &input.title);
    push_meta(out, "property", "og:description", &input.description);
    if !input.url.is_empty() {
        push_meta(out, "property", "og:url", &input.url);
    }
    push_meta(out, "property", "og:site_name", &input.site_name);
    if !input.locale.is_empty() {
        push_meta(out, "property", "og:locale", &input.locale);
    }
    if let Some(image) = &input.cover_image {
        push_meta(out, "property", "og:image", image);
    }
    if let Some(article) = &input.article {
        if let Some(date) = &article.published {
            push_meta(out, "property", "article:published_time", date);
        }
        if !article.author.is_empty() {
            push_meta(out, "property", "article:author", &article.author);
        }
        if let Some(section) = &article.section {
            push_meta(out, "property", "article:section", section);
        }
        for tag in &article.tags {
            push_meta(out, "property", "article:tag", tag);
        }
    }
}

fn twitter_block(input: &MetaInput, out: &mut String) {
    let card = if input.cover_image.is_some() {
        "summary_large_image"
    } else {
        "summary"
    };
    push_meta(out, "name", "twitter:card", card);
    if !input.twitter_site.is_empty() {
        push_meta(out, "name", "twitter:site", &input.twitter_site);
    }
    push_meta(out, "name", "twitter:title", &input.title);
    push_meta(out, "name", "twitter:description", &input.description);
    if let Some(image) = &input.cover_image {
        push_meta(out, "name", "twitter:image", image);
    }
}

fn dublin_core_block(input: &MetaInput, out: &mut String) {
    push_link(out, "schema.DC", "http://purl.org/dc/elements/1.1/");
    push_meta(out, "name", "DC.title", &input.title);
    push_meta(out, "name", "DC.description", &input.description);
    push_meta(out, "name", "DC.publisher", &input.site_name);
    if !input.language.is_empty() {
        push_meta(out, "name", "DC.language", &input.language);
    }
    if let Some(article) = &input.article {
        if !article.author.is_empty() {
            push_meta(out, "name", "DC.creator", &article.author);
        }
        if let Some(date) = &article.published {
            push_meta(out, "name", "DC.date", date);
        }
    }
}

/// Assemble all enabled blocks
pub fn assemble(input: &MetaInput, flags: TagFlags) -> String {
    let mut out = String::new();
    standard_block(input, &mut out);
    if flags.schema {
        schema_block(input, &mut out);
    }
    if flags.open_graph {
        open_graph_block(input, &mut out);
    }
    if flags.twitter {
        twitter_block(input, &mut out);
    }
    if flags.dublin_core {
        dublin_core_block(input, &mut out);
    }
    out
}
