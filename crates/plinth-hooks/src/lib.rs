//! Filter table and pipeline registration for the Plinth theme.
//!
//! The host content pipeline exposes string-keyed extension points and
//! applies registered callbacks to the value flowing through each one. This
//! crate models that seam explicitly: a [`Hook`] is a named handler, a
//! [`Hookable`] contributes a table of hooks at startup, and [`Filters`] is
//! the registry the host applies them through.
//!
//! [`Bootstrap`] is the theme's hookable: it wires the transforms from
//! `plinth-markup` onto the five extension points the theme cares about.
//!
//! # Example
//!
//! ```
//! use plinth_hooks::{Bootstrap, Filters, Payload, hooks};
//!
//! let mut filters = Filters::new();
//! filters.register(&Bootstrap::new());
//!
//! let out = filters.apply(hooks::OEMBED_RENDER, Payload::Html("<iframe></iframe>".into()));
//! assert!(out.into_html().starts_with("<figure"));
//! ```

mod bootstrap;
mod filters;
mod payload;

pub use bootstrap::{Bootstrap, hooks};
pub use filters::{Filters, HandlerFn, Hook, Hookable};
pub use payload::Payload;
