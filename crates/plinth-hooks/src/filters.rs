//! The filter registry the host pipeline applies callbacks through.

use std::collections::HashMap;
use std::fmt;

use crate::payload::Payload;

/// A filter callback.
pub type HandlerFn = Box<dyn Fn(Payload) -> Payload + Send + Sync>;

/// A named filter callback, ready for registration.
pub struct Hook {
    /// Extension point this handler attaches to.
    pub name: &'static str,
    /// The callback itself.
    pub handler: HandlerFn,
}

impl Hook {
    pub fn new(
        name: &'static str,
        handler: impl Fn(Payload) -> Payload + Send + Sync + 'static,
    ) -> Self {
        Self {
            name,
            handler: Box::new(handler),
        }
    }
}

impl fmt::Debug for Hook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hook").field("name", &self.name).finish()
    }
}

/// A component that contributes filter callbacks at startup.
pub trait Hookable {
    /// The hook table: one entry per (extension point, handler) pair, in
    /// the order the handlers should run.
    fn hooks(&self) -> Vec<Hook>;
}

/// Registry of filter callbacks keyed by extension point name.
///
/// Handlers registered under the same name chain in registration order:
/// each receives the previous handler's output. Applying an extension
/// point nobody registered for returns the payload unchanged.
#[derive(Default)]
pub struct Filters {
    handlers: HashMap<&'static str, Vec<HandlerFn>>,
}

impl Filters {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a handler to an extension point.
    pub fn add(
        &mut self,
        name: &'static str,
        handler: impl Fn(Payload) -> Payload + Send + Sync + 'static,
    ) {
        self.handlers.entry(name).or_default().push(Box::new(handler));
    }

    /// Register every hook a hookable contributes.
    pub fn register(&mut self, hookable: &dyn Hookable) {
        for hook in hookable.hooks() {
            tracing::debug!(name = hook.name, "registering filter");
            self.handlers.entry(hook.name).or_default().push(hook.handler);
        }
    }

    /// Run `payload` through the handler chain for `name`.
    #[must_use]
    pub fn apply(&self, name: &str, payload: Payload) -> Payload {
        let Some(chain) = self.handlers.get(name) else {
            return payload;
        };
        tracing::debug!(name, handlers = chain.len(), "applying filters");
        chain.iter().fold(payload, |value, handler| handler(value))
    }

    /// Number of handlers attached to an extension point.
    #[must_use]
    pub fn handler_count(&self, name: &str) -> usize {
        self.handlers.get(name).map_or(0, Vec::len)
    }
}

impl fmt::Debug for Filters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<_> = self
            .handlers
            .iter()
            .map(|(name, chain)| (*name, chain.len()))
            .collect();
        names.sort_unstable();
        f.debug_struct("Filters").field("handlers", &names).finish()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_unknown_name_passes_payload_through() {
        let filters = Filters::new();
        let out = filters.apply("nobody.home", Payload::from("x"));
        assert_eq!(out, Payload::Html("x".to_owned()));
    }

    #[test]
    fn test_handlers_chain_in_registration_order() {
        let mut filters = Filters::new();
        filters.add("t", |p| p.map_html(|h| format!("{h}a")));
        filters.add("t", |p| p.map_html(|h| format!("{h}b")));

        let out = filters.apply("t", Payload::from("x"));
        assert_eq!(out.into_html(), "xab");
    }

    #[test]
    fn test_register_collects_hookable_table() {
        struct Doubler;
        impl Hookable for Doubler {
            fn hooks(&self) -> Vec<Hook> {
                vec![
                    Hook::new("a", |p| p.map_html(|h| h.repeat(2))),
                    Hook::new("b", |p| p),
                ]
            }
        }

        let mut filters = Filters::new();
        filters.register(&Doubler);
        assert_eq!(filters.handler_count("a"), 1);
        assert_eq!(filters.handler_count("b"), 1);
        assert_eq!(filters.apply("a", Payload::from("x")).into_html(), "xx");
    }
}
