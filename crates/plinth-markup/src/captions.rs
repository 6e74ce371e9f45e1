//! Figure wrapping for captioned images.

use crate::align::Alignment;

/// Attributes of a caption shortcode invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CaptionAttrs {
    /// Caption text. Passed through verbatim, caller HTML included.
    pub caption: String,
    /// Raw alignment token, e.g. `aligncenter`.
    pub align: String,
}

/// Wrap a captioned image in a Bootstrap `<figure>` with a `<figcaption>`.
///
/// The image markup in `content` gets `img-fluid figure-img` prepended to
/// its class list. For a recognized alignment the mutated content is
/// wrapped in the per-alignment figure variant, followed by a figcaption
/// holding the caption text verbatim (no escaping).
///
/// An unrecognized alignment token returns the mutated content with no
/// figure and no caption. Dropping the caption there is longstanding
/// behavior that callers may rely on; see DESIGN.md before changing it.
#[must_use]
pub fn wrap_captioned_image(attrs: &CaptionAttrs, content: &str) -> String {
    let content = content.replace(r#"class=""#, r#"class="img-fluid figure-img "#);

    let Some(alignment) = Alignment::parse(&attrs.align) else {
        return content;
    };

    format!(
        r#"<figure class="{}">{content}<figcaption class="{}">{}</figcaption></figure>"#,
        alignment.figure_classes(),
        alignment.figcaption_classes(),
        attrs.caption
    )
}
