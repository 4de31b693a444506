use crate::interactive_ratatui::constants::{LOADING_ISSUES, NO_ISSUES_FOUND};
use crate::interactive_ratatui::domain::models::{AuthStatus, LoadState};
use crate::interactive_ratatui::ui::components::Component;
use crate::interactive_ratatui::ui::components::view_layout::Styles;
use crate::interactive_ratatui::ui::events::Message;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

/// What fills the results area when there is no list to show.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Panel {
    SigningIn,
    SignInRequired(String),
    Loading,
    Error(String),
    Empty,
}

impl Panel {
    /// The panel for the given session and load state, or `None` when the
    /// result list should be drawn instead.
    pub fn for_state(auth: &AuthStatus, state: &LoadState, has_items: bool) -> Option<Panel> {
        match auth {
            AuthStatus::Resolving => return Some(Panel::SigningIn),
            AuthStatus::Unauthenticated(reason) => {
                return Some(Panel::SignInRequired(reason.clone()));
            }
            AuthStatus::Authenticated { .. } => {}
        }
        match state {
            LoadState::InitialLoading => Some(Panel::Loading),
            LoadState::ErrorFirstPage(message) => Some(Panel::Error(message.clone())),
            LoadState::Idle if !has_items => Some(Panel::Empty),
            _ => None,
        }
    }
}

pub struct StatusPanel {
    panel: Panel,
}

impl Default for StatusPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl StatusPanel {
    pub fn new() -> Self {
        Self {
            panel: Panel::Loading,
        }
    }

    pub fn set_panel(&mut self, panel: Panel) {
        self.panel = panel;
    }

    pub fn panel(&self) -> &Panel {
        &self.panel
    }

    fn lines(&self) -> Vec<Line<'static>> {
        match &self.panel {
            Panel::SigningIn => vec![Line::from(Span::styled(
                "Signing in to GitHub...",
                Styles::title(),
            ))],
            Panel::SignInRequired(reason) => vec![
                Line::from(Span::styled("Sign in required", Styles::error())),
                Line::from(""),
                Line::from(Span::styled(reason.clone(), Styles::dimmed())),
                Line::from(""),
                Line::from("Set GITHUB_TOKEN or pass --token to browse issues."),
                Line::from(Span::styled("Ctrl+R: Sign in again", Styles::action_key())),
            ],
            Panel::Loading => vec![Line::from(Span::styled(LOADING_ISSUES, Styles::title()))],
            Panel::Error(message) => vec![
                Line::from(Span::styled("Something went wrong", Styles::error())),
                Line::from(""),
                Line::from(Span::styled(message.clone(), Styles::dimmed())),
                Line::from(""),
                Line::from(Span::styled("Enter: Try again", Styles::action_key())),
            ],
            Panel::Empty => vec![
                Line::from(Span::styled("No issues found", Styles::normal())),
                Line::from(""),
                Line::from(Span::styled(NO_ISSUES_FOUND, Styles::dimmed())),
            ],
        }
    }
}

impl Component for StatusPanel {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let lines = self.lines();
        // Vertically centre the message inside the border
        let inner_height = usize::from(area.height.saturating_sub(2));
        let pad = inner_height.saturating_sub(lines.len()) / 2;
        let mut text = vec![Line::from(""); pad];
        text.extend(lines);

        let paragraph = Paragraph::new(text)
            .block(Block::default().borders(Borders::ALL))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        f.render_widget(paragraph, area);
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<Message> {
        match (&self.panel, key.code) {
            (Panel::Error(_), KeyCode::Enter) => Some(Message::Retry),
            (Panel::SignInRequired(_), KeyCode::Enter) => Some(Message::Refresh),
            _ => None,
        }
    }
}
