//! The static registry layered with caller-supplied names.

use std::collections::HashMap;

use super::registry::lookup;

/// Chain names from the static registry plus an overlay of extra entries.
///
/// The static registry always wins; the overlay only adds chains the
/// registry does not know. Lookups follow the same rules as
/// [`chain_name`](super::chain_name): case-insensitive matching, and the
/// original input on a miss.
#[derive(Debug, Clone, Default)]
pub struct ChainNames {
    extra: HashMap<String, String>,
}

impl ChainNames {
    /// Creates a lookup with an empty overlay.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a name to the overlay.
    #[must_use]
    pub fn with_name(mut self, chain_id: impl AsRef<str>, name: impl Into<String>) -> Self {
        self.insert(chain_id, name);
        self
    }

    /// Adds a name to the overlay, returning the name it replaced.
    pub fn insert(&mut self, chain_id: impl AsRef<str>, name: impl Into<String>) -> Option<String> {
        self.extra.insert(chain_id.as_ref().to_lowercase(), name.into())
    }

    /// Resolves a display name for `chain_id`.
    #[must_use]
    pub fn get<'a>(&'a self, chain_id: &'a str) -> &'a str {
        if let Some(name) = lookup(chain_id) {
            return name;
        }
        self.extra
            .get(&chain_id.to_lowercase())
            .map_or(chain_id, String::as_str)
    }

    /// Number of overlay entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.extra.len()
    }

    /// Whether the overlay is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.extra.is_empty()
    }
}

impl<K: AsRef<str>, V: Into<String>> FromIterator<(K, V)> for ChainNames {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut names = Self::new();
        for (chain_id, name) in iter {
            names.insert(chain_id, name);
        }
        names
    }
}
