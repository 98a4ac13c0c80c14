use std::collections::BTreeSet;

/// Quote ids the reader has loved during this visit. Never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LikedQuotes {
    ids: BTreeSet<String>,
}

impl LikedQuotes {
    /// Flips the like for `id` and returns the new state.
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.ids.remove(id) {
            false
        } else {
            self.ids.insert(id.to_string());
            true
        }
    }

    pub fn is_liked(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
