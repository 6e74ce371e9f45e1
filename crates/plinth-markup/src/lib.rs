//! Bootstrap markup transforms for rendered theme content.
//!
//! This crate rewrites HTML fragments produced by the host content pipeline
//! so they carry Bootstrap 4 presentation classes: responsive oEmbed
//! wrappers, blockquote/table classes, `<figure>` wrappers around aligned
//! and captioned images, and Bootstrap-flavored pagination and
//! related-pages widget defaults.
//!
//! Every transform is a pure, synchronous function over its arguments. No
//! state is shared between invocations and nothing here can fail: malformed
//! HTML degrades to visually incorrect output rather than an error.
//!
//! Markup is matched with literal patterns over the raw string, not a full
//! HTML parser. That is intentional: the inputs are fragments mid-render,
//! frequently unbalanced, and the transforms only touch the exact tags they
//! target.
//!
//! # Example
//!
//! ```
//! use plinth_markup::wrap_aligned_images;
//!
//! let html = r#"<p><img class="aligncenter" src="a.png"></p>"#;
//! let out = wrap_aligned_images(html);
//! assert!(out.starts_with(r#"<figure class="figure text-center d-block">"#));
//! ```

mod align;
mod captions;
mod content;
mod defaults;
mod images;
mod nav;
mod translate;

pub use align::Alignment;
pub use captions::{CaptionAttrs, wrap_captioned_image};
pub use content::{inject_content_classes, wrap_responsive_embed};
pub use defaults::Defaults;
pub use images::wrap_aligned_images;
pub use nav::{TEXT_DOMAIN, pagination_defaults, related_pages_defaults};
pub use translate::{NoTranslation, Translate};
