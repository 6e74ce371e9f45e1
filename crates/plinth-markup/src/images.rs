//! Figure wrapping for aligned images in post content.

use std::sync::LazyLock;

use regex::Regex;

use crate::align::Alignment;

static IMG_WITH_CLASS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"<img[^>]*class="[^"]*"[^>]*>"#).unwrap());

/// Wrap aligned content images in Bootstrap `<figure>` elements.
///
/// Every `<img>` carrying a class attribute with one of the four alignment
/// markers gets `img-fluid` prepended to its class list and is wrapped in
/// the `<figure>` variant for its alignment. Images without a class
/// attribute, or whose class list has no alignment marker, are left fully
/// unmodified.
///
/// Replacement is by literal snippet: each distinct matched `<img>` string
/// is processed once and all of its occurrences are wrapped in the same
/// pass, so identical duplicates never double-wrap. Re-running the
/// transform on its own output is a different story and will nest figures;
/// callers apply it once per render.
///
/// Wrapping can strand the paragraph tags the renderer put around a bare
/// image, so a cleanup pass collapses `<p><figure` and `</figure></p>`
/// adjacencies.
#[must_use]
pub fn wrap_aligned_images(content: &str) -> String {
    let mut out = content.to_owned();
    let mut seen: Vec<&str> = Vec::new();

    for m in IMG_WITH_CLASS.find_iter(content) {
        let snippet = m.as_str();
        if seen.contains(&snippet) {
            continue;
        }
        seen.push(snippet);

        let Some(alignment) = Alignment::detect(snippet) else {
            continue;
        };

        let mutated = snippet.replace(r#"class=""#, r#"class="img-fluid "#);
        let wrapped = format!(
            r#"<figure class="{}">{mutated}</figure>"#,
            alignment.figure_classes()
        );
        out = out.replace(snippet, &wrapped);
    }

    out = out.replace("<p><figure", "<figure");
    out.replace("</figure></p>", "</figure>")
}
