use crate::interactive_ratatui::constants::{ALL_LANGUAGES, PICKER_MAX_WIDTH, POPUP_MARGIN};
use crate::interactive_ratatui::domain::filter::FilterKind;
use crate::interactive_ratatui::domain::languages::{LANGUAGES, language_color};
use crate::interactive_ratatui::ui::components::Component;
use crate::interactive_ratatui::ui::components::view_layout::{Styles, centered_rect};
use crate::interactive_ratatui::ui::events::Message;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState},
};

/// Single-select popup over "All languages" plus the language catalogue.
#[derive(Default)]
pub struct LanguagePicker {
    selected_index: usize,
    current: Option<String>,
}

impl LanguagePicker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn option_count() -> usize {
        LANGUAGES.len() + 1
    }

    pub fn set_selected_index(&mut self, index: usize) {
        self.selected_index = index.min(Self::option_count() - 1);
    }

    pub fn set_current(&mut self, language: Option<String>) {
        self.current = language;
    }

    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    fn option_line(&self, index: usize) -> Line<'static> {
        let Some(language) = index.checked_sub(1).and_then(|i| LANGUAGES.get(i)) else {
            let marker = if self.current.is_none() { "✓ " } else { "  " };
            return Line::from(vec![
                Span::styled(marker, Styles::success()),
                Span::raw(ALL_LANGUAGES),
            ]);
        };

        let marker = if self.current.as_deref() == Some(*language) {
            "✓ "
        } else {
            "  "
        };
        Line::from(vec![
            Span::styled(marker, Styles::success()),
            Span::styled("● ", Style::default().fg(language_color(language))),
            Span::raw(*language),
        ])
    }
}

impl Component for LanguagePicker {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let height = u16::try_from(Self::option_count() + 2).unwrap_or(u16::MAX);
        let popup = centered_rect(area, PICKER_MAX_WIDTH, height, POPUP_MARGIN);

        let options: Vec<ListItem> = (0..Self::option_count())
            .map(|i| ListItem::new(self.option_line(i)))
            .collect();

        let list = List::new(options)
            .block(
                Block::default()
                    .title(" Language (Enter: select, Esc: close) ")
                    .borders(Borders::ALL)
                    .border_style(Styles::title()),
            )
            .highlight_style(Styles::selected());

        let mut state = ListState::default();
        state.select(Some(self.selected_index));

        f.render_widget(Clear, popup);
        f.render_stateful_widget(list, popup, &mut state);
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<Message> {
        let last = Self::option_count() - 1;
        match key.code {
            KeyCode::Up => Some(Message::PickerNavigated(self.selected_index.saturating_sub(1))),
            KeyCode::Down => Some(Message::PickerNavigated((self.selected_index + 1).min(last))),
            KeyCode::Char('p') if key.modifiers == KeyModifiers::CONTROL => {
                Some(Message::PickerNavigated(self.selected_index.saturating_sub(1)))
            }
            KeyCode::Char('n') if key.modifiers == KeyModifiers::CONTROL => {
                Some(Message::PickerNavigated((self.selected_index + 1).min(last)))
            }
            KeyCode::Home => Some(Message::PickerNavigated(0)),
            KeyCode::End => Some(Message::PickerNavigated(last)),
            KeyCode::Enter => match self.selected_index.checked_sub(1) {
                Some(i) => LANGUAGES
                    .get(i)
                    .map(|language| Message::ToggleLanguage((*language).to_string())),
                None => Some(Message::ClearFilter(FilterKind::Language)),
            },
            KeyCode::Esc | KeyCode::Tab => Some(Message::CloseLanguagePicker),
            _ => None,
        }
    }
}
