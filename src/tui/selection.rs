use std::collections::HashSet;

/// Marked item indices. Order of marking is irrelevant; callers that need
/// an order ask for [`Selection::sorted`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    marked: HashSet<usize>,
    len: usize,
}

impl Selection {
    /// An empty selection over `len` items.
    pub fn new(len: usize) -> Self {
        Selection {
            marked: HashSet::new(),
            len,
        }
    }

    pub fn contains(&self, index: usize) -> bool {
        self.marked.contains(&index)
    }

    pub fn count(&self) -> usize {
        self.marked.len()
    }

    pub fn is_full(&self) -> bool {
        self.marked.len() == self.len
    }

    /// Mark or unmark one index. Indices past the end are ignored.
    pub fn toggle(&mut self, index: usize) {
        if index >= self.len {
            return;
        }
        if !self.marked.remove(&index) {
            self.marked.insert(index);
        }
    }

    /// All-or-nothing: a full selection becomes empty, anything else becomes full.
    pub fn toggle_all(&mut self) {
        if self.is_full() {
            self.marked.clear();
        } else {
            self.marked.extend(0..self.len);
        }
    }

    /// Marked indices in ascending order.
    pub fn sorted(&self) -> Vec<usize> {
        let mut indices: Vec<usize> = self.marked.iter().copied().collect();
        indices.sort_unstable();
        indices
    }
}
