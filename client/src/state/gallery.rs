//! Gallery collection state: fetched records, paging, and the detail modal.
//!
//! DESIGN
//! ======
//! The collection is fetched once per mount and replaced wholesale; nothing
//! mutates individual records. A failed fetch is logged and becomes an empty
//! gallery so the page never surfaces an error dialog.

#[cfg(test)]
#[path = "gallery_test.rs"]
mod gallery_test;

use super::pagination::PageState;
use crate::net::api::FetchError;
use crate::net::types::CollectionRecord;

/// Saved creations plus page position for the gallery route.
#[derive(Clone, Debug, PartialEq)]
pub struct GalleryState {
    pub items: Vec<CollectionRecord>,
    pub loading: bool,
    pub page: PageState,
    pub selected_id: Option<String>,
}

impl Default for GalleryState {
    fn default() -> Self {
        Self { items: Vec::new(), loading: true, page: PageState::default(), selected_id: None }
    }
}

impl GalleryState {
    /// Apply the one-shot fetch result in a single update.
    pub fn apply_fetch(&mut self, result: Result<Vec<CollectionRecord>, FetchError>) {
        let items = match result {
            Ok(items) => {
                log::debug!("gallery loaded {} creations", items.len());
                items
            }
            Err(e) => {
                log::warn!("gallery fetch failed: {e}");
                Vec::new()
            }
        };
        self.page.set_total_items(items.len());
        self.items = items;
        self.loading = false;
        if self
            .selected_id
            .as_ref()
            .is_some_and(|id| !self.items.iter().any(|item| &item.id == id))
        {
            self.selected_id = None;
        }
    }

    /// Records on the current page.
    #[must_use]
    pub fn visible(&self) -> &[CollectionRecord] {
        self.page.slice(&self.items)
    }

    #[must_use]
    pub fn can_go_next(&self) -> bool {
        !self.loading && self.page.has_next()
    }

    #[must_use]
    pub fn can_go_prev(&self) -> bool {
        !self.loading && self.page.has_prev()
    }

    pub fn next_page(&mut self) {
        self.page.next_page();
    }

    pub fn prev_page(&mut self) {
        self.page.prev_page();
    }

    /// Open the detail modal for `id`. Unknown ids are ignored.
    pub fn open_detail(&mut self, id: &str) {
        if self.items.iter().any(|item| item.id == id) {
            self.selected_id = Some(id.to_owned());
        }
    }

    pub fn close_detail(&mut self) {
        self.selected_id = None;
    }

    #[must_use]
    pub fn selected(&self) -> Option<&CollectionRecord> {
        let id = self.selected_id.as_deref()?;
        self.items.iter().find(|item| item.id == id)
    }
}
