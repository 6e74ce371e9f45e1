//! Values flowing through pipeline extension points.

use plinth_markup::{CaptionAttrs, Defaults};

/// The value handed to, and returned by, a filter handler.
///
/// Extension points are string-keyed and their value types vary by point,
/// so the payload is an enum. Handlers receive whatever the host passed;
/// a handler applied to a variant it does not understand passes it through
/// unchanged, in keeping with the no-fail contract of the transforms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payload {
    /// An HTML fragment (post content, oEmbed markup, rendered shortcode).
    Html(String),
    /// Named widget options.
    Options(Defaults),
    /// A caption shortcode invocation: attributes plus inner image markup.
    Caption {
        attrs: CaptionAttrs,
        content: String,
    },
}

impl Payload {
    /// Apply `f` when the payload is HTML, pass anything else through.
    #[must_use]
    pub fn map_html(self, f: impl FnOnce(&str) -> String) -> Self {
        match self {
            Self::Html(html) => Self::Html(f(&html)),
            other => other,
        }
    }

    /// Apply `f` when the payload is an options map, pass anything else
    /// through.
    #[must_use]
    pub fn map_options(self, f: impl FnOnce(Defaults) -> Defaults) -> Self {
        match self {
            Self::Options(options) => Self::Options(f(options)),
            other => other,
        }
    }

    /// Extract the HTML fragment, rendering other variants to an empty
    /// string.
    #[must_use]
    pub fn into_html(self) -> String {
        match self {
            Self::Html(html) => html,
            Self::Options(_) | Self::Caption { .. } => String::new(),
        }
    }

    /// Extract the options map, rendering other variants to an empty map.
    #[must_use]
    pub fn into_options(self) -> Defaults {
        match self {
            Self::Options(options) => options,
            Self::Html(_) | Self::Caption { .. } => Defaults::new(),
        }
    }
}

impl From<String> for Payload {
    fn from(html: String) -> Self {
        Self::Html(html)
    }
}

impl From<&str> for Payload {
    fn from(html: &str) -> Self {
        Self::Html(html.to_owned())
    }
}

impl From<Defaults> for Payload {
    fn from(options: Defaults) -> Self {
        Self::Options(options)
    }
}
