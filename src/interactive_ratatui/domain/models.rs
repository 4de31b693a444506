use super::filter::Filter;
use crate::github::{PAGE_SIZE, SearchPage};

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Mode {
    Search,
    LanguagePicker,
}

/// Identifies the query in flight. Incremented on every page-1 reset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Epoch(pub u64);

impl Epoch {
    pub fn next(self) -> Self {
        Epoch(self.0 + 1)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageCursor {
    pub current_page: u32,
    pub total_pages: u32,
}

impl PageCursor {
    pub fn first() -> Self {
        Self {
            current_page: 1,
            total_pages: 1,
        }
    }

    /// `ceil(total_count / PAGE_SIZE)`, never below 1.
    pub fn total_pages_for(total_count: u64) -> u32 {
        let pages = total_count.div_ceil(u64::from(PAGE_SIZE)).max(1);
        u32::try_from(pages).unwrap_or(u32::MAX)
    }

    pub fn has_more(&self) -> bool {
        self.current_page < self.total_pages
    }
}

impl Default for PageCursor {
    fn default() -> Self {
        Self::first()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoadState {
    /// Page 1 requested, nothing to show yet.
    InitialLoading,
    Idle,
    /// Next page requested, existing items stay visible.
    LoadingMore,
    ErrorFirstPage(String),
    ErrorSubsequentPage(String),
}

impl LoadState {
    pub fn error_message(&self) -> Option<&str> {
        match self {
            LoadState::ErrorFirstPage(message) | LoadState::ErrorSubsequentPage(message) => {
                Some(message)
            }
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthStatus {
    Resolving,
    Authenticated { login: String },
    Unauthenticated(String),
}

// Fetch request and outcome for async communication
#[derive(Clone, Debug, PartialEq)]
pub struct FetchRequest {
    pub epoch: Epoch,
    pub filter: Filter,
    pub page: u32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FetchOutcome {
    pub epoch: Epoch,
    pub page: u32,
    pub result: Result<SearchPage, String>,
}

impl FetchOutcome {
    pub fn success(request: &FetchRequest, page: SearchPage) -> Self {
        Self {
            epoch: request.epoch,
            page: request.page,
            result: Ok(page),
        }
    }

    pub fn failure(request: &FetchRequest, message: impl Into<String>) -> Self {
        Self {
            epoch: request.epoch,
            page: request.page,
            result: Err(message.into()),
        }
    }
}
