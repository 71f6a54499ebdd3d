//! Render hook contract and the host that dispatches to plugins.

pub mod boilerplate;

use std::sync::Arc;

use tracing::debug;

use crate::config::Config;
use crate::context::RequestContext;
use crate::meta::route::{StaticTheme, ThemeCompat};
use crate::meta::MetaData;
use boilerplate::Boilerplate;

/// Trait for site plugins.
///
/// The host calls each hook once per request and echoes the returned HTML
/// into the page. Hooks must not fail; optional content is simply omitted.
pub trait SitePlugin: Send + Sync {
    /// Plugin name (for logging)
    fn name(&self) -> &str;

    /// Disabled plugins are skipped by the host
    fn is_enabled(&self) -> bool {
        true
    }

    /// HTML for the page `<head>`
    fn site_head(&self, ctx: &RequestContext) -> String;

    /// HTML emitted right before `</body>`
    fn site_body_end(&self, _ctx: &RequestContext) -> String {
        String::new()
    }

    /// HTML for the theme sidebar
    fn site_sidebar(&self, _ctx: &RequestContext) -> String {
        String::new()
    }
}

/// Ordered set of plugins for one site.
///
/// Each hook concatenates the output of all enabled plugins in
/// registration order.
#[derive(Default)]
pub struct PluginHost {
    plugins: Vec<Arc<dyn SitePlugin>>,
}

impl PluginHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the host with the plugins described by `config`
    pub fn from_config(config: &Config) -> Self {
        let mut host = Self::new();

        let mut meta = MetaData::new(config.meta.clone());
        if let Some(cover) = config.theme.default_cover.clone() {
            let theme: Arc<dyn ThemeCompat> =
                Arc::new(StaticTheme::new(config.theme.name.clone(), Some(cover)));
            meta = meta.with_theme(theme);
        }
        host.register(Arc::new(meta));

        if config.boilerplate.enabled {
            host.register(Arc::new(Boilerplate::new(config.boilerplate.clone())));
        }

        host
    }

    pub fn register(&mut self, plugin: Arc<dyn SitePlugin>) {
        debug!(plugin = plugin.name(), "Registered plugin");
        self.plugins.push(plugin);
    }

    pub fn plugin_names(&self) -> Vec<&str> {
        self.plugins.iter().map(|p| p.name()).collect()
    }

    fn collect<F>(&self, hook: F) -> String
    where
        F: Fn(&dyn SitePlugin) -> String,
    {
        self.plugins
            .iter()
            .filter(|p| p.is_enabled())
            .map(|p| hook(p.as_ref()))
            .collect()
    }

    pub fn site_head(&self, ctx: &RequestContext) -> String {
        self.collect(|p| p.site_head(ctx))
    }

    pub fn site_body_end(&self, ctx: &RequestContext) -> String {
        self.collect(|p| p.site_body_end(ctx))
    }

    pub fn site_sidebar(&self, ctx: &RequestContext) -> String {
        self.collect(|p| p.site_sidebar(ctx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Mock plugin for testing
    struct MockPlugin {
        name: String,
        enabled: bool,
    }

    impl SitePlugin for MockPlugin {
        fn name(&self) -> &str {
            &self.name
        }

        fn is_enabled(&self) -> bool {
            self.enabled
        }

        fn site_head(&self, _ctx: &RequestContext) -> String {
            format!("<!-- {} -->\n", self.name)
        }
    }

    fn mock(name: &str, enabled: bool) -> Arc<dyn SitePlugin> {
        Arc::new(MockPlugin {
            name: name.to_string(),
            enabled,
        })
    }

    #[test]
    fn test_hooks_run_in_registration_order() {
        let mut host = PluginHost::new();
        host.register(mock("first", true));
        host.register(mock("second", true));

        let html = host.site_head(&RequestContext::default());
        assert_eq!(html, "<!-- first -->\n<!-- second -->\n");
        assert_eq!(host.plugin_names(), vec!["first", "second"]);
    }

    #[test]
    fn test_disabled_plugin_is_skipped() {
        let mut host = PluginHost::new();
        host.register(mock("on", true));
        host.register(mock("off", false));

        let html = host.site_head(&RequestContext::default());
        assert_eq!(html, "<!-- on -->\n");
    }

    #[test]
    fn test_default_hooks_are_empty() {
        let mut host = PluginHost::new();
        host.register(mock("only-head", true));
        let ctx = RequestContext::default();
        assert_eq!(host.site_body_end(&ctx), "");
        assert_eq!(host.site_sidebar(&ctx), "");
    }

    #[test]
    fn test_from_config_registers_both_plugins() {
        let host = PluginHost::from_config(&Config::default());
        assert_eq!(host.plugin_names(), vec!["MetaData", "Boilerplate"]);

        let mut config = Config::default();
        config.boilerplate.enabled = false;
        let host = PluginHost::from_config(&config);
        assert_eq!(host.plugin_names(), vec!["MetaData"]);
    }
}
