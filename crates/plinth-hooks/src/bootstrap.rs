//! The theme's hook table: Bootstrap markup on every content surface.

use std::sync::Arc;

use plinth_markup::{
    NoTranslation, Translate, inject_content_classes, pagination_defaults,
    related_pages_defaults, wrap_aligned_images, wrap_captioned_image, wrap_responsive_embed,
};

use crate::filters::{Hook, Hookable};
use crate::payload::Payload;

/// Extension point names the theme attaches to.
pub mod hooks {
    /// Related-pages widget argument defaults.
    pub const RELATED_PAGES_DEFAULTS: &str = "related_pages.defaults";
    /// Pagination widget argument defaults.
    pub const PAGINATION_DEFAULTS: &str = "pagination.defaults";
    /// oEmbed HTML about to be embedded in content.
    pub const OEMBED_RENDER: &str = "oembed.render";
    /// Rendered post content.
    pub const CONTENT_RENDER: &str = "content.render";
    /// Caption shortcode output.
    pub const CAPTION_RENDER: &str = "caption.render";
}

/// Adds Bootstrap 4 markup where possible.
///
/// Contributes one handler per extension point, except `content.render`
/// which carries two chained handlers: class injection first, then image
/// wrapping.
pub struct Bootstrap {
    translator: Arc<dyn Translate + Send + Sync>,
}

impl Bootstrap {
    /// Theme hookable with the identity translation lookup.
    #[must_use]
    pub fn new() -> Self {
        Self::with_translator(Arc::new(NoTranslation))
    }

    /// Theme hookable with an injected translation backend.
    #[must_use]
    pub fn with_translator(translator: Arc<dyn Translate + Send + Sync>) -> Self {
        Self { translator }
    }
}

impl Default for Bootstrap {
    fn default() -> Self {
        Self::new()
    }
}

impl Hookable for Bootstrap {
    fn hooks(&self) -> Vec<Hook> {
        let translator = Arc::clone(&self.translator);

        vec![
            Hook::new(hooks::RELATED_PAGES_DEFAULTS, |p| {
                p.map_options(|options| related_pages_defaults(&options))
            }),
            Hook::new(hooks::PAGINATION_DEFAULTS, move |p| {
                let translator = Arc::clone(&translator);
                p.map_options(move |options| pagination_defaults(&options, translator.as_ref()))
            }),
            Hook::new(hooks::OEMBED_RENDER, |p| p.map_html(wrap_responsive_embed)),
            Hook::new(hooks::CONTENT_RENDER, |p| p.map_html(inject_content_classes)),
            Hook::new(hooks::CONTENT_RENDER, |p| p.map_html(wrap_aligned_images)),
            Hook::new(hooks::CAPTION_RENDER, |p| match p {
                Payload::Caption { attrs, content } => {
                    Payload::Html(wrap_captioned_image(&attrs, &content))
                }
                other => other,
            }),
        ]
    }
}

#[cfg(test)]
mod tests {
    use plinth_markup::{CaptionAttrs, Defaults};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::filters::Filters;

    fn registered() -> Filters {
        let mut filters = Filters::new();
        filters.register(&Bootstrap::new());
        filters
    }

    #[test]
    fn test_registers_five_extension_points() {
        let filters = registered();
        assert_eq!(filters.handler_count(hooks::RELATED_PAGES_DEFAULTS), 1);
        assert_eq!(filters.handler_count(hooks::PAGINATION_DEFAULTS), 1);
        assert_eq!(filters.handler_count(hooks::OEMBED_RENDER), 1);
        assert_eq!(filters.handler_count(hooks::CONTENT_RENDER), 2);
        assert_eq!(filters.handler_count(hooks::CAPTION_RENDER), 1);
    }

    #[test]
    fn test_oembed_render_wraps_html() {
        let out = registered().apply(hooks::OEMBED_RENDER, Payload::from("<iframe></iframe>"));
        assert_eq!(
            out.into_html(),
            r#"<figure class="embed-responsive embed-responsive-16by9"><iframe></iframe></figure>"#
        );
    }

    #[test]
    fn test_content_render_chains_both_transforms() {
        let html = r#"<blockquote>q</blockquote><p><img class="aligncenter" src="a.png"></p>"#;
        let out = registered()
            .apply(hooks::CONTENT_RENDER, Payload::from(html))
            .into_html();
        assert!(out.contains(r#"<blockquote class="blockquote">"#));
        assert!(out.contains(r#"<figure class="figure text-center d-block">"#));
        assert!(out.contains(r#"<img class="img-fluid aligncenter""#));
    }

    #[test]
    fn test_pagination_defaults_filter() {
        let overrides: Defaults = [("before_output", "X")].into_iter().collect();
        let out = registered()
            .apply(hooks::PAGINATION_DEFAULTS, Payload::from(overrides))
            .into_options();
        assert_eq!(out.get("before_output"), Some("X"));
        assert_eq!(out.len(), 7);
    }

    #[test]
    fn test_related_pages_defaults_filter() {
        let out = registered()
            .apply(hooks::RELATED_PAGES_DEFAULTS, Payload::from(Defaults::new()))
            .into_options();
        assert_eq!(out.get("li_class"), Some("nav-item"));
    }

    #[test]
    fn test_caption_render_produces_html() {
        let payload = Payload::Caption {
            attrs: CaptionAttrs {
                caption: "Cap".to_owned(),
                align: "aligncenter".to_owned(),
            },
            content: r#"<img class="a">"#.to_owned(),
        };
        let out = registered().apply(hooks::CAPTION_RENDER, payload).into_html();
        assert!(out.contains(r#"<figcaption class="figure-caption">Cap</figcaption>"#));
        assert!(out.contains("img-fluid figure-img"));
    }

    #[test]
    fn test_translator_reaches_pagination_labels() {
        struct Upper;
        impl Translate for Upper {
            fn translate(&self, text: &str, _domain: &str) -> String {
                text.to_uppercase()
            }
        }

        let mut filters = Filters::new();
        filters.register(&Bootstrap::with_translator(Arc::new(Upper)));
        let out = filters
            .apply(hooks::PAGINATION_DEFAULTS, Payload::from(Defaults::new()))
            .into_options();
        assert!(out.get("next_wrapper").unwrap().contains("NEXT"));
    }
}
