//! Meta Data - page titles and SEO/social meta tags for a flat-file CMS
//!
//! This library exports the site plugins (meta data generator and the
//! boilerplate starter plugin), the request context they render from, and
//! a handful of standalone text helpers.

pub mod config;
pub mod context;
pub mod logging;
pub mod meta;
pub mod plugins;
pub mod text;

pub use context::RequestContext;
pub use meta::MetaData;
pub use plugins::{PluginHost, SitePlugin};
