use crate::interactive_ratatui::domain::filter::FilterKind;
use crate::interactive_ratatui::domain::models::{AuthStatus, FetchOutcome};

#[derive(Clone, Debug)]
pub enum Message {
    // Session events
    AuthResolved(AuthStatus),

    // Search events
    QueryChanged(String),
    QueryCommitted(String),
    ClearFilter(FilterKind),
    Refresh,
    Retry,
    ReachedBottom,
    FetchCompleted(FetchOutcome),

    // Result list
    SelectResult(usize),
    OpenSelected,

    // Language picker
    OpenLanguagePicker,
    CloseLanguagePicker,
    ToggleLanguage(String),
    PickerNavigated(usize),

    // UI events
    SetStatus(String),
}
