//! Bootstrap defaults for pagination and related-pages navigation.

use crate::defaults::Defaults;
use crate::translate::Translate;

/// Text domain for label translation lookups.
pub const TEXT_DOMAIN: &str = "plinth";

/// Bootstrap pagination templates, merged under caller overrides.
///
/// Produces the seven named wrapper templates for the pagination widget.
/// Each template carries `%s` placeholders for the link URL and/or label
/// text; user-facing labels go through the injected translation lookup.
/// Keys present in `overrides` win, absent keys fall back to the template
/// defaults.
#[must_use]
pub fn pagination_defaults(overrides: &Defaults, translator: &dyn Translate) -> Defaults {
    let t = |text: &str| translator.translate(text, TEXT_DOMAIN);

    let mut defaults = Defaults::new();
    defaults.set(
        "before_output",
        format!(
            r#"<nav aria-label="{}"><ul class="pagination justify-content-center" itemscope itemtype="http://schema.org/SiteNavigationElement">"#,
            t("Pagination")
        ),
    );
    defaults.set(
        "link_wrapper",
        format!(
            r#"<li class="page-item"><a href="%s" class="page-link" itemprop="url"><span itemprop="name"><span class="sr-only">{}</span>%s</span></a></li>"#,
            t("Page")
        ),
    );
    defaults.set(
        "active_link_wrapper",
        r#"<li class="page-item active"><span class="page-link">%s</span></li>"#,
    );
    defaults.set(
        "first_wrapper",
        format!(
            r#"<li class="page-item"><a href="%s" class="page-link" itemprop="url"><span itemprop="name">{}</span></a></li>"#,
            t("First page")
        ),
    );
    defaults.set(
        "last_wrapper",
        format!(
            r#"<li class="page-item"><a href="%s" class="page-link" itemprop="url"><span itemprop="name">{}</span></a></li>"#,
            t("Last page")
        ),
    );
    defaults.set(
        "next_wrapper",
        format!(
            r#"<li class="page-item"><a href="%s" class="page-link" itemprop="url"><span itemprop="name">{}</span></a></li>"#,
            t("Next")
        ),
    );
    defaults.set(
        "previous_wrapper",
        format!(
            r#"<li class="page-item"><a href="%s" class="page-link" itemprop="url"><span itemprop="name">{}</span></a></li>"#,
            t("Previous")
        ),
    );

    defaults.overridden_by(overrides)
}

/// Bootstrap markup for the related-pages widget, merged under caller
/// overrides with the same caller-wins rule.
#[must_use]
pub fn related_pages_defaults(overrides: &Defaults) -> Defaults {
    let mut defaults = Defaults::new();
    defaults.set(
        "container_start",
        r#"<ul class="nav flex-column nav-pills" role="navigation">"#,
    );
    defaults.set("li_class", "nav-item");
    defaults.set("link_class", "nav-link");

    defaults.overridden_by(overrides)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::translate::NoTranslation;

    const PAGINATION_KEYS: [&str; 7] = [
        "before_output",
        "link_wrapper",
        "active_link_wrapper",
        "first_wrapper",
        "last_wrapper",
        "next_wrapper",
        "previous_wrapper",
    ];

    #[test]
    fn test_pagination_defaults_has_exactly_seven_keys() {
        let args = pagination_defaults(&Defaults::new(), &NoTranslation);
        assert_eq!(args.len(), 7);
        let keys: Vec<_> = args.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, PAGINATION_KEYS);
    }

    #[test]
    fn test_pagination_templates() {
        let args = pagination_defaults(&Defaults::new(), &NoTranslation);
        assert_eq!(
            args.get("before_output"),
            Some(
                r#"<nav aria-label="Pagination"><ul class="pagination justify-content-center" itemscope itemtype="http://schema.org/SiteNavigationElement">"#
            )
        );
        assert_eq!(
            args.get("active_link_wrapper"),
            Some(r#"<li class="page-item active"><span class="page-link">%s</span></li>"#)
        );
        assert_eq!(
            args.get("link_wrapper"),
            Some(
                r#"<li class="page-item"><a href="%s" class="page-link" itemprop="url"><span itemprop="name"><span class="sr-only">Page</span>%s</span></a></li>"#
            )
        );
    }

    #[test]
    fn test_pagination_override_wins_others_unchanged() {
        let overrides: Defaults = [("before_output", "X")].into_iter().collect();
        let defaults = pagination_defaults(&Defaults::new(), &NoTranslation);
        let args = pagination_defaults(&overrides, &NoTranslation);

        assert_eq!(args.get("before_output"), Some("X"));
        assert_eq!(args.len(), 7);
        for key in PAGINATION_KEYS.iter().filter(|k| **k != "before_output") {
            assert_eq!(args.get(key), defaults.get(key));
        }
    }

    #[test]
    fn test_pagination_labels_go_through_translator() {
        struct Shouty;
        impl Translate for Shouty {
            fn translate(&self, text: &str, domain: &str) -> String {
                assert_eq!(domain, TEXT_DOMAIN);
                text.to_uppercase()
            }
        }

        let args = pagination_defaults(&Defaults::new(), &Shouty);
        assert!(args.get("first_wrapper").unwrap().contains("FIRST PAGE"));
        assert!(args.get("before_output").unwrap().contains("PAGINATION"));
    }

    #[test]
    fn test_related_pages_defaults() {
        let args = related_pages_defaults(&Defaults::new());
        assert_eq!(args.len(), 3);
        assert_eq!(
            args.get("container_start"),
            Some(r#"<ul class="nav flex-column nav-pills" role="navigation">"#)
        );
        assert_eq!(args.get("li_class"), Some("nav-item"));
        assert_eq!(args.get("link_class"), Some("nav-link"));
    }

    #[test]
    fn test_related_pages_override_wins() {
        let overrides: Defaults = [("li_class", "list-item")].into_iter().collect();
        let args = related_pages_defaults(&overrides);
        assert_eq!(args.get("li_class"), Some("list-item"));
        assert_eq!(args.get("link_class"), Some("nav-link"));
    }
}
