use crate::interactive_ratatui::domain::models::FetchRequest;

#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    None,
    Authenticate,
    Fetch(FetchRequest),
    DebounceQuery(String),
    CancelPendingQuery,
    OpenUrl(String),
    ClearMessage,
    ScheduleClearMessage(u64), // delay in milliseconds
    Batch(Vec<Command>),
}

impl Command {
    pub fn fetch(request: Option<FetchRequest>) -> Self {
        request.map_or(Command::None, Command::Fetch)
    }
}
