//! Selection state for the design surface.
//!
//! At most one element is selected at a time. Selection is UI state owned
//! by the engine, never part of element identity, and must be cleared when
//! the selected element is deleted.

/// Tracks the single selected element, if any.
#[derive(Debug, Clone, Default)]
pub struct SelectionManager {
    selected_id: Option<String>,
}

impl SelectionManager {
    /// Creates a new `SelectionManager` with no selection.
    pub fn new() -> Self {
        Self { selected_id: None }
    }

    /// Returns the id of the selected element.
    pub fn selected_id(&self) -> Option<&str> {
        self.selected_id.as_deref()
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected_id.as_deref() == Some(id)
    }

    /// Selects the given element, replacing any prior selection.
    pub fn select(&mut self, id: impl Into<String>) {
        self.selected_id = Some(id.into());
    }

    /// Clears the selection.
    pub fn clear(&mut self) {
        self.selected_id = None;
    }

    /// Clears the selection if it currently points at `id`.
    ///
    /// Returns `true` if the selection was cleared.
    pub fn clear_if(&mut self, id: &str) -> bool {
        if self.is_selected(id) {
            self.selected_id = None;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_replaces_prior_selection() {
        let mut selection = SelectionManager::new();
        selection.select("a");
        selection.select("b");
        assert_eq!(selection.selected_id(), Some("b"));
        assert!(!selection.is_selected("a"));
    }

    #[test]
    fn clear_if_only_matches_current() {
        let mut selection = SelectionManager::new();
        selection.select("a");
        assert!(!selection.clear_if("b"));
        assert_eq!(selection.selected_id(), Some("a"));
        assert!(selection.clear_if("a"));
        assert_eq!(selection.selected_id(), None);
    }
}
