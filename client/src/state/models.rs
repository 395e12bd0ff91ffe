//! Model-list state for the dashboard.
//!
//! DESIGN
//! ======
//! The dashboard fetches one page of up to 100 models and then searches and
//! paginates locally. Pages are 1-based to match what the pager displays.

#[cfg(test)]
#[path = "models_test.rs"]
mod models_test;

use crate::net::types::BBModel;

/// Cards per dashboard page.
pub const PAGE_SIZE: usize = 6;

/// Which empty-state message the dashboard shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EmptyState {
    /// The user has not generated anything yet.
    NoModels,
    /// Models exist but none match the search.
    NoMatches,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DashboardState {
    pub models: Vec<BBModel>,
    pub query: String,
    pub page: usize,
    pub loading: bool,
    pub error: Option<String>,
    /// Model awaiting delete confirmation.
    pub pending_delete: Option<String>,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self {
            models: Vec::new(),
            query: String::new(),
            page: 1,
            loading: true,
            error: None,
            pending_delete: None,
        }
    }
}

impl DashboardState {
    pub fn set_models(&mut self, models: Vec<BBModel>) {
        self.models = models;
        self.loading = false;
        self.error = None;
        self.clamp_page();
    }

    pub fn set_error(&mut self, message: String) {
        self.loading = false;
        self.error = Some(message);
    }

    /// Update the search text. Any change returns to the first page.
    pub fn set_query(&mut self, query: String) {
        if query != self.query {
            self.query = query;
            self.page = 1;
        }
    }

    /// Models matching the query, case-insensitively, in name or prompt.
    #[must_use]
    pub fn filtered(&self) -> Vec<&BBModel> {
        let needle = self.query.trim().to_lowercase();
        self.models
            .iter()
            .filter(|m| {
                needle.is_empty() || m.name.to_lowercase().contains(&needle) || m.prompt.to_lowercase().contains(&needle)
            })
            .collect()
    }

    #[must_use]
    pub fn page_count(&self) -> usize {
        self.filtered().len().div_ceil(PAGE_SIZE)
    }

    /// Models on the current page.
    #[must_use]
    pub fn page_items(&self) -> Vec<BBModel> {
        let start = self.page.saturating_sub(1) * PAGE_SIZE;
        self.filtered()
            .into_iter()
            .skip(start)
            .take(PAGE_SIZE)
            .cloned()
            .collect()
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page;
        self.clamp_page();
    }

    pub fn request_delete(&mut self, model_id: String) {
        self.pending_delete = Some(model_id);
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    /// Remove the model awaiting confirmation from the local list.
    pub fn confirm_delete(&mut self) {
        let Some(model_id) = self.pending_delete.take() else {
            return;
        };
        self.models.retain(|m| m.id != model_id);
        self.clamp_page();
    }

    #[must_use]
    pub fn empty_state(&self) -> Option<EmptyState> {
        if self.loading || !self.filtered().is_empty() {
            return None;
        }
        if self.query.trim().is_empty() {
            Some(EmptyState::NoModels)
        } else {
            Some(EmptyState::NoMatches)
        }
    }

    fn clamp_page(&mut self) {
        self.page = self.page.clamp(1, self.page_count().max(1));
    }
}
