//! Handlebars views for the boilerplate plugin.

use anyhow::{Context, Result};
use handlebars::Handlebars;
use serde_json::json;

const SIDEBAR_TEMPLATE: &str = r#"<div class="plugin plugin-boilerplate">
	<h2>Boilerplate Plugin</h2>
	<p>Sidebar content for {{site_title}}.</p>
{{#if option_one}}
	<p class="boilerplate-option">{{option_two}}</p>
{{/if}}
</div>
"#;

const ADMIN_LINK_TEMPLATE: &str =
    r#"<a class="nav-link" href="{{url}}"><span class="fa fa-code"></span>{{label}}</a>"#;

/// Registered view templates
pub struct Views {
    handlebars: Handlebars<'static>,
}

impl Default for Views {
    fn default() -> Self {
        Self::new()
    }
}

impl Views {
    pub fn new() -> Self {
        let mut handlebars = Handlebars::new();
        handlebars.set_strict_mode(false);
        // Templates are compile-time constants
        handlebars
            .register_template_string("sidebar", SIDEBAR_TEMPLATE)
            .expect("valid sidebar template");
        handlebars
            .register_template_string("admin_link", ADMIN_LINK_TEMPLATE)
            .expect("valid admin link template");
        Self { handlebars }
    }

    /// Sidebar snippet; the option line shows when `option_one` is on
    pub fn sidebar(
        &self,
        site_title: &str,
        option_one: bool,
        option_two: &str,
    ) -> Result<String> {
        let context = json!({
            "site_title": site_title,
            "option_one": option_one && !option_two.is_empty(),
            "option_two": option_two,
        });
        self.handlebars
            .render("sidebar", &context)
            .context("Failed to render sidebar view")
    }

    pub fn admin_link(&self, url: &str, label: &str) -> Result<String> {
        self.handlebars
            .render("admin_link", &json!({ "url": url, "label": label }))
            .context("Failed to render admin link view")
    }
}
