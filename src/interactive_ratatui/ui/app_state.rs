use crate::interactive_ratatui::application::search_controller::{Applied, SearchController};
use crate::interactive_ratatui::constants::*;
use crate::interactive_ratatui::domain::filter::{Filter, FilterKind};
use crate::interactive_ratatui::domain::languages::LANGUAGES;
use crate::interactive_ratatui::domain::models::AuthStatus;
use crate::interactive_ratatui::ui::commands::Command;
use crate::interactive_ratatui::ui::events::Message;
use crate::schemas::Issue;
use tracing::info;

// Re-export Mode
pub use crate::interactive_ratatui::domain::models::Mode;

pub struct AppState {
    pub mode: Mode,
    pub auth: AuthStatus,
    pub search: SearchState,
    pub picker: PickerState,
    pub ui: UiState,
}

pub struct SearchState {
    /// Text in the search bar, which may not be committed yet.
    pub query: String,
    pub controller: SearchController,
    pub selected_index: usize,
}

impl SearchState {
    pub fn selected_issue(&self) -> Option<&Issue> {
        self.controller.items().get(self.selected_index)
    }
}

pub struct PickerState {
    /// Row in the picker; 0 is "All languages", the rest index into [`LANGUAGES`] + 1.
    pub selected_index: usize,
}

pub struct UiState {
    pub message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Filter::default())
    }
}

impl AppState {
    pub fn new(filter: Filter) -> Self {
        Self {
            mode: Mode::Search,
            auth: AuthStatus::Resolving,
            search: SearchState {
                query: filter.text().unwrap_or_default().to_string(),
                controller: SearchController::new(filter),
                selected_index: 0,
            },
            picker: PickerState { selected_index: 0 },
            ui: UiState { message: None },
        }
    }

    pub fn update(&mut self, msg: Message) -> Command {
        match msg {
            Message::AuthResolved(status) => {
                self.auth = status;
                match &self.auth {
                    AuthStatus::Authenticated { login } => {
                        info!(%login, "authenticated");
                        Command::fetch(self.search.controller.start())
                    }
                    AuthStatus::Unauthenticated(reason) => {
                        info!(%reason, "not authenticated");
                        Command::None
                    }
                    AuthStatus::Resolving => Command::None,
                }
            }
            Message::QueryChanged(q) => {
                self.search.query = q.clone();
                self.ui.message = Some(TYPING_INDICATOR.to_string());
                Command::DebounceQuery(q)
            }
            Message::QueryCommitted(q) => {
                self.clear_typing_indicator();
                let filter = self.search.controller.filter().with_text(Some(q));
                self.apply_filter(filter)
            }
            Message::ClearFilter(kind) => {
                self.mode = Mode::Search;
                let filter = self.search.controller.filter().cleared(kind);
                if kind == FilterKind::Text {
                    self.search.query.clear();
                    self.clear_typing_indicator();
                    Command::Batch(vec![Command::CancelPendingQuery, self.apply_filter(filter)])
                } else {
                    self.apply_filter(filter)
                }
            }
            Message::Refresh => {
                if let AuthStatus::Unauthenticated(_) = self.auth {
                    self.auth = AuthStatus::Resolving;
                    return Command::Authenticate;
                }
                let command = Command::fetch(self.search.controller.refresh());
                if command != Command::None {
                    self.search.selected_index = 0;
                }
                command
            }
            Message::Retry => Command::fetch(self.search.controller.retry_current_page()),
            Message::ReachedBottom => Command::fetch(self.search.controller.load_next_page()),
            Message::FetchCompleted(outcome) => {
                if self.search.controller.apply(outcome) == Applied::Accepted {
                    let len = self.search.controller.items().len();
                    if self.search.selected_index >= len {
                        self.search.selected_index = len.saturating_sub(1);
                    }
                }
                Command::None
            }
            Message::SelectResult(index) => {
                if index < self.search.controller.items().len() {
                    self.search.selected_index = index;
                }
                Command::None
            }
            Message::OpenSelected => match self.search.selected_issue() {
                Some(issue) => Command::OpenUrl(issue.url.clone()),
                None => Command::None,
            },
            Message::OpenLanguagePicker => {
                self.mode = Mode::LanguagePicker;
                self.picker.selected_index = self
                    .search
                    .controller
                    .filter()
                    .language()
                    .and_then(|current| LANGUAGES.iter().position(|l| *l == current))
                    .map_or(0, |pos| pos + 1);
                Command::None
            }
            Message::CloseLanguagePicker => {
                self.mode = Mode::Search;
                Command::None
            }
            Message::ToggleLanguage(language) => {
                self.mode = Mode::Search;
                let filter = self.search.controller.filter().toggle_language(&language);
                self.apply_filter(filter)
            }
            Message::PickerNavigated(index) => {
                if index <= LANGUAGES.len() {
                    self.picker.selected_index = index;
                }
                Command::None
            }
            Message::SetStatus(msg) => {
                self.ui.message = Some(msg);
                Command::ScheduleClearMessage(MESSAGE_CLEAR_DELAY_MS)
            }
        }
    }

    fn apply_filter(&mut self, filter: Filter) -> Command {
        let command = Command::fetch(self.search.controller.set_filter(filter));
        if command != Command::None {
            self.search.selected_index = 0;
        }
        command
    }

    fn clear_typing_indicator(&mut self) {
        if self.ui.message.as_deref() == Some(TYPING_INDICATOR) {
            self.ui.message = None;
        }
    }
}
