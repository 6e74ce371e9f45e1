//! Transforms over rendered post content and oEmbed fragments.

use std::sync::LazyLock;

use regex::Regex;

static BLOCKQUOTE_OPEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(<blockquote([^>]*))>").unwrap());

static TABLE_OPEN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(<table([^>]*))>").unwrap());

/// Wrap oEmbed HTML in a responsive embed container.
///
/// Pure wrap, no inspection of `html`; an empty fragment yields an empty
/// container.
#[must_use]
pub fn wrap_responsive_embed(html: &str) -> String {
    format!(r#"<figure class="embed-responsive embed-responsive-16by9">{html}</figure>"#)
}

/// Add Bootstrap classes to `<blockquote>` and `<table>` opening tags.
///
/// Each matched opening tag gains one `class` attribute after its existing
/// attributes. Nested content and everything outside the opening tags is
/// left untouched; input without either tag comes back unchanged.
#[must_use]
pub fn inject_content_classes(html: &str) -> String {
    let mut out = html.to_owned();

    if out.contains("<blockquote") {
        out = BLOCKQUOTE_OPEN
            .replace_all(&out, r#"${1} class="blockquote">"#)
            .into_owned();
    }

    if out.contains("<table") {
        out = TABLE_OPEN
            .replace_all(&out, r#"${1} class="table">"#)
            .into_owned();
    }

    out
}
