//! Shared plumbing for the three linked collections.

use cortex0::error::LinkError;
use std::collections::HashMap;

/// A name → value map with a one-shot linked flag. Reads are gated on the
/// flag; `link_with` runs a binding pass over every entry and can only
/// succeed once.
pub(crate) struct LinkedMap<V> {
    label: &'static str,
    entries: HashMap<String, V>,
    linked: bool,
}

impl<V> LinkedMap<V> {
    pub(crate) fn new(label: &'static str, entries: HashMap<String, V>) -> Self {
        Self {
            label,
            entries,
            linked: false,
        }
    }

    pub(crate) fn get(&self, name: &str) -> Result<&V, LinkError> {
        if !self.linked {
            return Err(LinkError::NotLinked { label: self.label });
        }
        self.entries.get(name).ok_or_else(|| LinkError::NotFound {
            label: self.label,
            name: name.to_owned(),
        })
    }

    pub(crate) fn get_all(&self) -> Result<&HashMap<String, V>, LinkError> {
        if !self.linked {
            return Err(LinkError::NotLinked { label: self.label });
        }
        Ok(&self.entries)
    }

    /// Run `bind` over every entry, then set the flag. Exactly one binding
    /// call per entry; a second pass is an error.
    pub(crate) fn link_with(
        &mut self,
        mut bind: impl FnMut(&str, &mut V),
    ) -> Result<(), LinkError> {
        if self.linked {
            return Err(LinkError::AlreadyLinked { label: self.label });
        }
        for (name, value) in self.entries.iter_mut() {
            bind(name, value);
        }
        self.linked = true;
        Ok(())
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn is_linked(&self) -> bool {
        self.linked
    }
}
