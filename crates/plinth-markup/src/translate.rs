//! Injected translation lookup for user-facing label text.

/// Translation lookup capability.
///
/// User-facing labels embedded in generated markup (pagination link text
/// and the like) pass through this seam rather than an ambient global, so
/// hosts can plug in their own localization backend.
pub trait Translate {
    /// Return the localized form of `text` for the given text domain.
    fn translate(&self, text: &str, domain: &str) -> String;
}

/// Identity lookup used when no translation backend is wired up.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTranslation;

impl Translate for NoTranslation {
    fn translate(&self, text: &str, _domain: &str) -> String {
        text.to_owned()
    }
}
