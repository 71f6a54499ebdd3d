//! Boilerplate plugin.
//!
//! A minimal plugin meant as the starting point for new ones: two options
//! with defaults, asset tags for the front end and the admin area, an admin
//! sidebar link and a sidebar snippet.

mod views;

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::SitePlugin;
use crate::context::RequestContext;
use views::Views;

/// Class name used in admin URLs
pub const CLASS_NAME: &str = "Boilerplate";

/// Boilerplate settings as stored by the host
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BoilerplateOptions {
    /// Register the plugin with the host
    pub enabled: bool,
    pub option_one: bool,
    pub option_two: String,
    /// Public URL of the plugin directory
    pub domain_path: String,
    /// Admin root URL, e.g. `/admin/`
    pub admin_path: String,
    /// Appended to asset URLs as `?version=`
    pub version: String,
    /// Serve non-minified assets
    pub debug_mode: bool,
}

impl Default for BoilerplateOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            option_one: true,
            option_two: String::new(),
            domain_path: "/bl-plugins/boilerplate/".to_string(),
            admin_path: "/admin/".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            debug_mode: false,
        }
    }
}

/// Role of the logged-in user as reported by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Editor,
    Author,
}

/// The boilerplate plugin
pub struct Boilerplate {
    options: BoilerplateOptions,
    views: Views,
}

impl Boilerplate {
    pub fn new(options: BoilerplateOptions) -> Self {
        Self {
            options,
            views: Views::new(),
        }
    }

    pub fn option_one(&self) -> bool {
        self.options.option_one
    }

    pub fn option_two(&self) -> &str {
        &self.options.option_two
    }

    fn suffix(&self) -> &'static str {
        if self.options.debug_mode {
            ""
        } else {
            ".min"
        }
    }

    fn asset_tags(&self, side: &str) -> String {
        let suffix = self.suffix();
        let base = &self.options.domain_path;
        let version = &self.options.version;
        format!(
            "<script type=\"text/javascript\" src=\"{base}assets/js/{side}{suffix}.js?version={version}\"></script>\n\
             <link rel=\"stylesheet\" type=\"text/css\" href=\"{base}assets/css/{side}{suffix}.css?version={version}\" />\n"
        )
    }

    /// Backend assets, only on this plugin's admin pages
    pub fn admin_head(&self, admin_slug: &str) -> String {
        if admin_slug.contains(CLASS_NAME) {
            self.asset_tags("backend")
        } else {
            String::new()
        }
    }

    /// Link to the options screen; admins only
    pub fn admin_sidebar(&self, role: Role) -> Option<String> {
        if role != Role::Admin {
            return None;
        }
        let url = format!("{}configure-plugin/{}", self.options.admin_path, CLASS_NAME);
        match self.views.admin_link(&url, CLASS_NAME) {
            Ok(html) => Some(html),
            Err(e) => {
                warn!(error = %e, "Failed to render admin sidebar link");
                None
            }
        }
    }
}

impl SitePlugin for Boilerplate {
    fn name(&self) -> &str {
        CLASS_NAME
    }

    fn is_enabled(&self) -> bool {
        self.options.enabled
    }

    fn site_head(&self, _ctx: &RequestContext) -> String {
        self.asset_tags("frontend")
    }

    fn site_sidebar(&self, ctx: &RequestContext) -> String {
        self.views
            .sidebar(&ctx.site.title, self.option_one(), self.option_two())
            .unwrap_or_else(|e| {
                warn!(error = %e, "Failed to render boilerplate sidebar");
                String::new()
            })
    }
}
