use crate::interactive_ratatui::application::scroll_sentinel::ContinuationSignal;
use crate::interactive_ratatui::constants::{
    FILTER_BAR_HEIGHT, NAVBAR_HEIGHT, SEARCH_BAR_HEIGHT, STATUS_BAR_HEIGHT,
};
use crate::interactive_ratatui::domain::models::{AuthStatus, LoadState};
use crate::interactive_ratatui::ui::app_state::{AppState, Mode};
use crate::interactive_ratatui::ui::components::{
    Component,
    filter_bar::FilterBar,
    language_picker::LanguagePicker,
    result_list::ResultList,
    search_bar::SearchBar,
    status_panel::{Panel, StatusPanel},
    view_layout::Styles,
};
use chrono::Utc;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
};

const SEARCH_HINTS: &str = "↑/↓: Navigate | Enter: Open | Tab: Language | Ctrl+X: Clear language | Esc: Clear search | Ctrl+R: Refresh | Ctrl+C×2: Exit";
const PICKER_HINTS: &str = "↑/↓: Navigate | Enter: Select | Esc/Tab: Close";

pub struct Renderer {
    search_bar: SearchBar,
    filter_bar: FilterBar,
    result_list: ResultList,
    status_panel: StatusPanel,
    language_picker: LanguagePicker,
    showing_panel: bool,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer {
    pub fn new() -> Self {
        Self {
            search_bar: SearchBar::new(),
            filter_bar: FilterBar::new(),
            result_list: ResultList::new(),
            status_panel: StatusPanel::new(),
            language_picker: LanguagePicker::new(),
            showing_panel: true,
        }
    }

    pub fn render(&mut self, f: &mut Frame, state: &AppState) {
        self.render_search_mode(f, state);

        if state.mode == Mode::LanguagePicker {
            self.language_picker
                .set_current(state.search.controller.filter().language().map(str::to_string));
            self.language_picker
                .set_selected_index(state.picker.selected_index);
            self.language_picker.render(f, f.area());
        }
    }

    fn render_search_mode(&mut self, f: &mut Frame, state: &AppState) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(NAVBAR_HEIGHT),
                Constraint::Length(SEARCH_BAR_HEIGHT),
                Constraint::Length(FILTER_BAR_HEIGHT),
                Constraint::Min(0),
                Constraint::Length(STATUS_BAR_HEIGHT),
            ])
            .split(f.area());

        let controller = &state.search.controller;
        let items = controller.items();

        // Update search bar state
        self.search_bar.set_query(state.search.query.clone());
        self.search_bar.set_loading(controller.is_loading());
        self.search_bar.set_message(state.ui.message.clone());

        // Update filter bar state
        self.filter_bar.set_filter(controller.filter().clone());
        let shown = match controller.state() {
            LoadState::InitialLoading | LoadState::ErrorFirstPage(_) => None,
            _ => Some(items.len()),
        };
        self.filter_bar.set_count(shown, controller.total_count());

        // Update result list state
        self.result_list.set_items(items);
        self.result_list.set_selected_index(state.search.selected_index);
        self.result_list
            .set_load_state(controller.state(), controller.can_load_more());
        self.result_list.set_progress(controller.cursor());
        self.result_list.set_now(Utc::now());

        render_navbar(f, chunks[0], &state.auth);
        self.search_bar.render(f, chunks[1]);
        self.filter_bar.render(f, chunks[2]);

        let panel = Panel::for_state(&state.auth, controller.state(), !items.is_empty());
        self.showing_panel = panel.is_some();
        match panel {
            Some(panel) => {
                self.status_panel.set_panel(panel);
                self.status_panel.render(f, chunks[3]);
            }
            None => self.result_list.render(f, chunks[3]),
        }

        let hints = match state.mode {
            Mode::Search => SEARCH_HINTS,
            Mode::LanguagePicker => PICKER_HINTS,
        };
        let status_bar = Paragraph::new(hints)
            .style(Styles::dimmed())
            .alignment(Alignment::Center);
        f.render_widget(status_bar, chunks[4]);
    }

    /// Whether the list marker came into view during the last draw.
    pub fn take_continuation_signal(&mut self) -> bool {
        // Drain regardless so a signal never outlives the frame it was raised in
        let signal = self.result_list.take_signal();
        signal && !self.showing_panel
    }

    /// The component that receives list keys this frame.
    pub fn get_results_area_mut(&mut self) -> &mut dyn Component {
        if self.showing_panel {
            &mut self.status_panel
        } else {
            &mut self.result_list
        }
    }

    pub fn get_search_bar_mut(&mut self) -> &mut SearchBar {
        &mut self.search_bar
    }

    pub fn get_language_picker_mut(&mut self) -> &mut LanguagePicker {
        &mut self.language_picker
    }
}

fn render_navbar(f: &mut Frame, area: Rect, auth: &AuthStatus) {
    let session = match auth {
        AuthStatus::Resolving => Span::styled("Signing in...", Styles::dimmed()),
        AuthStatus::Authenticated { login } => {
            Span::styled(format!("Signed in as @{login}"), Styles::success())
        }
        AuthStatus::Unauthenticated(_) => Span::styled("Not signed in", Styles::error()),
    };
    let session_width = u16::try_from(session.width()).unwrap_or(u16::MAX);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(session_width)])
        .split(area);

    let title = Line::from(vec![
        Span::styled("goodfirst", Styles::title()),
        Span::styled(" · good first issues on GitHub", Styles::dimmed()),
    ]);
    f.render_widget(Paragraph::new(title), chunks[0]);
    f.render_widget(
        Paragraph::new(Line::from(session)).alignment(Alignment::Right),
        chunks[1],
    );
}
