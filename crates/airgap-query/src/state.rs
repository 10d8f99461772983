use crate::filters::{lookup, FilterCriterion};
use crate::{QueryError, TypeSelector};

/// Search text, type selector and active trust filters for one session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryState {
    search_text: String,
    type_selector: TypeSelector,
    // Insertion-ordered set; kept as a Vec so chips render in activation order.
    active_filter_ids: Vec<String>,
}

impl QueryState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    pub fn type_selector(&self) -> TypeSelector {
        self.type_selector
    }

    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.search_text = text.into();
    }

    pub fn set_type_selector(&mut self, selector: TypeSelector) {
        self.type_selector = selector;
    }

    /// Parse and apply a selector. On error the state is left untouched.
    pub fn set_type_selector_str(&mut self, selector: &str) -> Result<(), QueryError> {
        self.type_selector = selector.parse()?;
        Ok(())
    }

    /// Add `id` if it is inactive, remove it otherwise. Unknown ids are accepted.
    pub fn toggle_filter(&mut self, id: &str) {
        if let Some(pos) = self.active_filter_ids.iter().position(|f| f == id) {
            self.active_filter_ids.remove(pos);
        } else {
            self.active_filter_ids.push(id.to_string());
        }
    }

    pub fn clear_filters(&mut self) {
        self.active_filter_ids.clear();
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active_filter_ids.iter().any(|f| f == id)
    }

    pub fn active_filter_ids(&self) -> &[String] {
        &self.active_filter_ids
    }

    pub fn active_filter_count(&self) -> usize {
        self.active_filter_ids.len()
    }

    /// Registry entries for the active ids, in activation order. Unknown ids are skipped.
    pub fn active_filters(&self) -> Vec<&'static FilterCriterion> {
        self.active_filter_ids
            .iter()
            .filter_map(|id| lookup(id))
            .collect()
    }
}
