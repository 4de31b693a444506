//! Incremental search and pagination state machine.
//!
//! Every operation returns the fetch it wants performed, if any; the caller
//! owns the I/O and feeds the result back through [`SearchController::apply`].
//! Responses are matched against the epoch they were issued under, so a late
//! answer for an abandoned filter never touches the current result set.

use crate::interactive_ratatui::domain::filter::Filter;
use crate::interactive_ratatui::domain::models::{
    Epoch, FetchOutcome, FetchRequest, LoadState, PageCursor,
};
use crate::schemas::Issue;
use tracing::{debug, warn};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Applied {
    Accepted,
    /// Belonged to an earlier epoch or to a page nobody is waiting for.
    Stale,
}

#[derive(Debug)]
pub struct SearchController {
    filter: Filter,
    epoch: Epoch,
    cursor: PageCursor,
    items: Vec<Issue>,
    state: LoadState,
    total_count: u64,
    in_flight: Option<u32>,
    started: bool,
}

impl Default for SearchController {
    fn default() -> Self {
        Self::new(Filter::default())
    }
}

impl SearchController {
    pub fn new(filter: Filter) -> Self {
        Self {
            filter,
            epoch: Epoch::default(),
            cursor: PageCursor::first(),
            items: Vec::new(),
            state: LoadState::InitialLoading,
            total_count: 0,
            in_flight: None,
            started: false,
        }
    }

    pub fn filter(&self) -> &Filter {
        &self.filter
    }

    pub fn epoch(&self) -> Epoch {
        self.epoch
    }

    pub fn cursor(&self) -> PageCursor {
        self.cursor
    }

    pub fn items(&self) -> &[Issue] {
        &self.items
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn total_count(&self) -> u64 {
        self.total_count
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn in_flight_page(&self) -> Option<u32> {
        self.in_flight
    }

    /// Whether a response issued under `epoch` may still mutate state.
    pub fn is_current(&self, epoch: Epoch) -> bool {
        epoch == self.epoch
    }

    pub fn can_load_more(&self) -> bool {
        self.state == LoadState::Idle && !self.items.is_empty() && self.cursor.has_more()
    }

    /// Issue the first page-1 fetch. Called once the user is authenticated.
    pub fn start(&mut self) -> Option<FetchRequest> {
        if self.started {
            return None;
        }
        self.started = true;
        Some(self.begin_epoch())
    }

    /// Switch to `filter`. Before [`start`](Self::start) the filter is only
    /// recorded.
    pub fn set_filter(&mut self, filter: Filter) -> Option<FetchRequest> {
        if filter == self.filter {
            return None;
        }
        debug!(?filter, "filter changed");
        self.filter = filter;
        if !self.started {
            return None;
        }
        Some(self.begin_epoch())
    }

    /// Restart the current filter from page 1.
    pub fn refresh(&mut self) -> Option<FetchRequest> {
        if !self.started {
            return None;
        }
        Some(self.begin_epoch())
    }

    pub fn load_next_page(&mut self) -> Option<FetchRequest> {
        if self.is_loading() || !self.can_load_more() {
            return None;
        }
        self.cursor.current_page += 1;
        self.state = LoadState::LoadingMore;
        Some(self.request(self.cursor.current_page))
    }

    /// Re-request the page that failed. A failed page 1 restarts the epoch.
    pub fn retry_current_page(&mut self) -> Option<FetchRequest> {
        if self.is_loading() {
            return None;
        }
        match self.state {
            LoadState::ErrorFirstPage(_) => self.refresh(),
            LoadState::ErrorSubsequentPage(_) => {
                self.state = LoadState::LoadingMore;
                Some(self.request(self.cursor.current_page))
            }
            _ => None,
        }
    }

    pub fn apply(&mut self, outcome: FetchOutcome) -> Applied {
        if !self.is_current(outcome.epoch) || self.in_flight != Some(outcome.page) {
            debug!(
                epoch = outcome.epoch.0,
                current = self.epoch.0,
                page = outcome.page,
                "discarding stale response"
            );
            return Applied::Stale;
        }
        self.in_flight = None;

        match outcome.result {
            Ok(page) if outcome.page == 1 => {
                self.total_count = page.total_count;
                self.cursor.total_pages = PageCursor::total_pages_for(page.total_count);
                self.items = page.items;
                self.clamp_to_total();
                self.state = LoadState::Idle;
            }
            Ok(page) => {
                self.items.extend(page.items);
                self.clamp_to_total();
                self.state = LoadState::Idle;
            }
            Err(message) if outcome.page == 1 => {
                warn!("first page failed: {message}");
                self.items.clear();
                self.state = LoadState::ErrorFirstPage(message);
            }
            Err(message) => {
                warn!("page {} failed: {message}", outcome.page);
                self.state = LoadState::ErrorSubsequentPage(message);
            }
        }

        debug!(
            page = outcome.page,
            items = self.items.len(),
            total_pages = self.cursor.total_pages,
            state = ?self.state,
            "response applied"
        );
        Applied::Accepted
    }

    fn begin_epoch(&mut self) -> FetchRequest {
        self.epoch = self.epoch.next();
        self.cursor = PageCursor::first();
        self.items.clear();
        self.total_count = 0;
        self.state = LoadState::InitialLoading;
        self.request(1)
    }

    fn request(&mut self, page: u32) -> FetchRequest {
        self.in_flight = Some(page);
        FetchRequest {
            epoch: self.epoch,
            filter: self.filter.clone(),
            page,
        }
    }

    // The accumulator never holds more than the page-1 estimate
    fn clamp_to_total(&mut self) {
        let limit = usize::try_from(self.total_count).unwrap_or(usize::MAX);
        self.items.truncate(limit);
    }
}
