use tracing::{debug, warn};

use super::filter::FilterState;
use super::window::PageWindow;
use crate::config::BrowserConfig;
use crate::domain::{Browsable, DatasetResult};
use crate::repository::FetchError;

/// What the view should show.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderState<T> {
    Loading,
    Error(String),
    Empty,
    Populated { visible: Vec<T>, has_sentinel: bool },
}

impl<T> RenderState<T> {
    pub fn visible_len(&self) -> usize {
        match self {
            RenderState::Populated { visible, .. } => visible.len(),
            _ => 0,
        }
    }

    pub fn has_sentinel(&self) -> bool {
        matches!(self, RenderState::Populated { has_sentinel: true, .. })
    }
}

/// Single-writer state behind the browsing view: the dataset, the two
/// filters, and the page window. Filtered and visible views are recomputed
/// on every read.
#[derive(Debug, Clone)]
pub struct BrowserState<T> {
    dataset: DatasetResult<T>,
    filters: FilterState,
    window: PageWindow,
    revision: u64,
}

impl<T: Browsable + Clone> BrowserState<T> {
    pub fn new(page_size: usize) -> Self {
        Self {
            dataset: DatasetResult::Pending,
            filters: FilterState::default(),
            window: PageWindow::new(page_size),
            revision: 0,
        }
    }

    pub fn from_config(config: &BrowserConfig) -> Self {
        Self::new(config.page_size)
    }

    pub fn dataset(&self) -> &DatasetResult<T> {
        &self.dataset
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn window(&self) -> &PageWindow {
        &self.window
    }

    /// Bumped by every mutation that can change what is rendered.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Settle the dataset. Only the first result of a session is accepted.
    pub fn load(&mut self, result: Result<Vec<T>, FetchError>) -> bool {
        self.settle(result.into())
    }

    pub fn load_items(&mut self, items: Vec<T>) -> bool {
        self.settle(DatasetResult::Ready(items))
    }

    pub fn fail(&mut self, message: impl Into<String>) -> bool {
        self.settle(DatasetResult::Failed(message.into()))
    }

    fn settle(&mut self, result: DatasetResult<T>) -> bool {
        if self.dataset.is_settled() {
            warn!("dataset already settled for this session, ignoring new result");
            return false;
        }
        match &result {
            DatasetResult::Ready(items) => debug!(count = items.len(), "dataset ready"),
            DatasetResult::Failed(message) => warn!(%message, "dataset fetch failed"),
            DatasetResult::Pending => return false,
        }
        self.dataset = result;
        self.revision += 1;
        true
    }

    /// Returns whether the query actually changed (and the window was reset).
    pub fn set_query(&mut self, query: impl Into<String>) -> bool {
        let query = query.into();
        if self.filters.query == query {
            return false;
        }
        debug!(%query, "query changed");
        self.filters.query = query;
        self.reset_window();
        true
    }

    pub fn set_facet(&mut self, facet: impl Into<String>) -> bool {
        let facet = facet.into();
        if self.filters.facet == facet {
            return false;
        }
        debug!(%facet, "facet changed");
        self.filters.facet = facet;
        self.reset_window();
        true
    }

    fn reset_window(&mut self) {
        self.window.reset();
        self.revision += 1;
    }

    /// Proximity signal. The guard is evaluated against the filtered length
    /// as it is now, not as it was when the signal was armed.
    pub fn grow(&mut self) -> bool {
        let filtered_len = self.filtered_len();
        if !self.window.grow(filtered_len) {
            debug!(filtered_len, "grow ignored, window exhausted");
            return false;
        }
        self.revision += 1;
        debug!(
            page_count = self.window.page_count(),
            visible = self.window.visible_len(filtered_len),
            filtered_len,
            "window grown"
        );
        true
    }

    pub fn filtered(&self) -> Vec<&T> {
        self.filters.apply(self.dataset.items())
    }

    pub fn filtered_len(&self) -> usize {
        let items = self.dataset.items();
        if self.filters.is_unfiltered() {
            return items.len();
        }
        items.iter().filter(|item| self.filters.matches(*item)).count()
    }

    pub fn visible(&self) -> Vec<&T> {
        let filtered = self.filtered();
        self.window.visible(&filtered).to_vec()
    }

    pub fn has_more(&self) -> bool {
        self.window.has_more(self.filtered_len())
    }

    pub fn render(&self) -> RenderState<T> {
        match &self.dataset {
            DatasetResult::Failed(message) => RenderState::Error(message.clone()),
            DatasetResult::Pending => RenderState::Loading,
            DatasetResult::Ready(items) => {
                let filtered = self.filters.apply(items);
                if filtered.is_empty() {
                    return RenderState::Empty;
                }
                let visible = self.window.visible(&filtered);
                RenderState::Populated {
                    has_sentinel: visible.len() < filtered.len(),
                    visible: visible.iter().map(|item| (*item).clone()).collect(),
                }
            }
        }
    }
}
