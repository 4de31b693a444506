use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, poll},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Frame, Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::sync::Arc;
use std::sync::mpsc::{Receiver, Sender};
use std::time::{Duration, Instant};
use tracing::{debug, warn};

use crate::github::{GENERIC_FETCH_ERROR, SearchBackend};
use crate::logging;

pub mod application;
pub mod constants;
pub mod domain;
pub mod ui;


use self::application::debouncer::Debouncer;
use self::application::search_service::{
    SearchService, WorkerRequest, WorkerResponse, spawn_worker,
};
use self::constants::*;
use self::domain::filter::{Filter, FilterKind};
use self::domain::models::{AuthStatus, FetchOutcome, Mode};
use self::ui::{
    app_state::AppState, commands::Command, components::Component, events::Message,
    renderer::Renderer,
};

#[derive(Debug, Clone)]
pub struct InteractiveOptions {
    pub filter: Filter,
    pub debounce: Duration,
}

impl Default for InteractiveOptions {
    fn default() -> Self {
        Self {
            filter: Filter::default(),
            debounce: Duration::from_millis(QUERY_DEBOUNCE_MS),
        }
    }
}

pub struct InteractiveSearch {
    state: AppState,
    renderer: Renderer,
    search_service: SearchService,
    worker_sender: Option<Sender<WorkerRequest>>,
    worker_receiver: Option<Receiver<WorkerResponse>>,
    debouncer: Debouncer<String>,
    last_ctrl_c_press: Option<Instant>,
    message_timer: Option<Instant>,
    message_clear_delay: u64,
}

impl InteractiveSearch {
    pub fn new(backend: Arc<dyn SearchBackend>, options: InteractiveOptions) -> Self {
        Self {
            state: AppState::new(options.filter),
            renderer: Renderer::new(),
            search_service: SearchService::new(backend),
            worker_sender: None,
            worker_receiver: None,
            debouncer: Debouncer::new(options.debounce),
            last_ctrl_c_press: None,
            message_timer: None,
            message_clear_delay: MESSAGE_CLEAR_DELAY_MS,
        }
    }

    pub fn run(&mut self) -> Result<()> {
        let mut terminal = self.setup_terminal()?;
        let _panic_guard = logging::quiet_panics();

        self.start_worker();
        // Nothing is fetched until the session is resolved
        self.execute_command(Command::Authenticate);

        let result = self.run_app(&mut terminal);

        self.cleanup_terminal(&mut terminal)?;
        result
    }

    fn setup_terminal(&self) -> Result<Terminal<CrosstermBackend<Stdout>>> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Ok(terminal)
    }

    fn cleanup_terminal(&self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;
        Ok(())
    }

    fn run_app(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;
            self.after_draw();

            self.drain_responses();
            self.tick(Instant::now());

            if poll(Duration::from_millis(EVENT_POLL_INTERVAL_MS))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Release {
                        continue;
                    }
                    let should_quit = self.handle_input(key)?;
                    if should_quit {
                        break;
                    }
                }
            }
        }
        Ok(())
    }

    pub(crate) fn render(&mut self, f: &mut Frame) {
        self.renderer.render(f, &self.state);
    }

    /// Turn a marker that came into view during the last draw into a
    /// next-page request.
    pub(crate) fn after_draw(&mut self) {
        if self.renderer.take_continuation_signal() {
            self.handle_message(Message::ReachedBottom);
        }
    }

    pub(crate) fn drain_responses(&mut self) {
        let responses: Vec<WorkerResponse> = match &self.worker_receiver {
            Some(receiver) => receiver.try_iter().collect(),
            None => return,
        };
        for response in responses {
            self.handle_response(response);
        }
    }

    fn handle_response(&mut self, response: WorkerResponse) {
        let message = match response {
            WorkerResponse::Auth(status) => Message::AuthResolved(status),
            WorkerResponse::Fetch(outcome) => Message::FetchCompleted(outcome),
        };
        self.handle_message(message);
    }

    /// Deliver timers that are due at `now`.
    pub(crate) fn tick(&mut self, now: Instant) {
        if let Some(query) = self.debouncer.poll(now) {
            self.handle_message(Message::QueryCommitted(query));
        }

        if let Some(timer) = self.message_timer {
            if now.saturating_duration_since(timer) >= Duration::from_millis(self.message_clear_delay)
            {
                self.message_timer = None;
                self.execute_command(Command::ClearMessage);
            }
        }
    }

    pub(crate) fn handle_input(&mut self, key: KeyEvent) -> Result<bool> {
        // Global Ctrl+C handling for exit
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            if let Some(last_press) = self.last_ctrl_c_press {
                if last_press.elapsed() < Duration::from_secs(DOUBLE_CTRL_C_TIMEOUT_SECS) {
                    return Ok(true);
                }
            }
            self.last_ctrl_c_press = Some(Instant::now());
            self.state.ui.message = Some(EXIT_PROMPT.to_string());
            self.execute_command(Command::ScheduleClearMessage(MESSAGE_CLEAR_DELAY_MS));
            return Ok(false);
        }

        // Global keys
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('r') => {
                    self.handle_message(Message::Refresh);
                    return Ok(false);
                }
                KeyCode::Char('x') => {
                    self.handle_message(Message::ClearFilter(FilterKind::Language));
                    return Ok(false);
                }
                _ => {}
            }
        }

        let message = match self.state.mode {
            Mode::Search => self.handle_search_mode_input(key),
            Mode::LanguagePicker => self.renderer.get_language_picker_mut().handle_key(key),
        };

        if let Some(msg) = message {
            self.handle_message(msg);
        }

        Ok(false)
    }

    fn handle_search_mode_input(&mut self, key: KeyEvent) -> Option<Message> {
        let is_ctrl = key.modifiers == KeyModifiers::CONTROL;
        match key.code {
            KeyCode::Tab => Some(Message::OpenLanguagePicker),
            KeyCode::Up
            | KeyCode::Down
            | KeyCode::PageUp
            | KeyCode::PageDown
            | KeyCode::Enter => self.renderer.get_results_area_mut().handle_key(key),
            KeyCode::Char('p') | KeyCode::Char('n') if is_ctrl => {
                self.renderer.get_results_area_mut().handle_key(key)
            }
            _ => self.renderer.get_search_bar_mut().handle_key(key),
        }
    }

    fn handle_message(&mut self, message: Message) {
        let command = self.state.update(message);
        self.execute_command(command);
    }

    fn execute_command(&mut self, command: Command) {
        match command {
            Command::None => {}
            Command::Authenticate => self.send(WorkerRequest::Authenticate),
            Command::Fetch(request) => self.send(WorkerRequest::Fetch(request)),
            Command::DebounceQuery(query) => {
                self.debouncer.emit(query, Instant::now());
            }
            Command::CancelPendingQuery => {
                self.debouncer.cancel();
            }
            Command::OpenUrl(url) => {
                let status = match open_in_browser(&url) {
                    Ok(()) => format!("Opened {url}"),
                    Err(e) => {
                        warn!("Failed to open {url}: {e:#}");
                        format!("Failed to open browser: {e}")
                    }
                };
                self.handle_message(Message::SetStatus(status));
            }
            Command::ClearMessage => {
                self.state.ui.message = None;
                self.message_timer = None;
            }
            Command::ScheduleClearMessage(delay) => {
                self.message_timer = Some(Instant::now());
                self.message_clear_delay = delay;
            }
            Command::Batch(commands) => {
                for command in commands {
                    self.execute_command(command);
                }
            }
        }
    }

    pub(crate) fn start_worker(&mut self) {
        let (tx, rx) = spawn_worker(self.search_service.clone());
        self.worker_sender = Some(tx);
        self.worker_receiver = Some(rx);
    }

    /// Hand a request to the worker. A request that cannot be delivered is
    /// answered locally so the controller never waits forever.
    fn send(&mut self, request: WorkerRequest) {
        let delivered = match &self.worker_sender {
            Some(sender) => sender.send(request.clone()).is_ok(),
            None => false,
        };
        if delivered {
            debug!(?request, "request sent to worker");
            return;
        }

        warn!(?request, "search worker unavailable");
        let response = match request {
            WorkerRequest::Authenticate => {
                WorkerResponse::Auth(AuthStatus::Unauthenticated(GENERIC_FETCH_ERROR.to_string()))
            }
            WorkerRequest::Fetch(fetch) => {
                WorkerResponse::Fetch(FetchOutcome::failure(&fetch, GENERIC_FETCH_ERROR))
            }
        };
        self.handle_response(response);
    }

    #[cfg(test)]
    pub(crate) fn state(&self) -> &AppState {
        &self.state
    }

    #[cfg(test)]
    pub(crate) fn pending_query_deadline(&self) -> Option<Instant> {
        self.debouncer.deadline()
    }
}

fn open_in_browser(url: &str) -> Result<()> {
    use std::process::{Command, Stdio};

    #[cfg(target_os = "macos")]
    let mut command = Command::new("open");

    #[cfg(target_os = "windows")]
    let mut command = {
        let mut command = Command::new("cmd");
        command.args(["/C", "start", ""]);
        command
    };

    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    let mut command = Command::new("xdg-open");

    command
        .arg(url)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .context("Failed to spawn browser opener")?;
    Ok(())
}
