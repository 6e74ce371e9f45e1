//! Insertion-ordered option maps with caller-wins override merging.

/// An insertion-ordered mapping of option name to value.
///
/// Used for the pagination and related-pages widget arguments, where the
/// host pipeline hands a map through a filter and expects the keys back in
/// a stable order. The maps involved hold a handful of entries, so lookups
/// are a linear scan.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Defaults {
    entries: Vec<(String, String)>,
}

impl Defaults {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `key` to `value`, replacing an existing entry in place or
    /// appending a new one.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        if let Some(entry) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            entry.1 = value;
        } else {
            self.entries.push((key, value));
        }
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Overlay the entries of `overrides` onto `self`.
    ///
    /// Keys present in `overrides` win; keys only in `self` keep their
    /// value and position. Override-only keys are appended afterwards in
    /// their own order.
    #[must_use]
    pub fn overridden_by(mut self, overrides: &Self) -> Self {
        for entry in &mut self.entries {
            if let Some(value) = overrides.get(&entry.0) {
                entry.1 = value.to_owned();
            }
        }
        for (key, value) in overrides.iter() {
            if !self.contains(key) {
                self.entries.push((key.to_owned(), value.to_owned()));
            }
        }
        self
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Defaults {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut map = Self::new();
        for (k, v) in iter {
            map.set(k, v);
        }
        map
    }
}
