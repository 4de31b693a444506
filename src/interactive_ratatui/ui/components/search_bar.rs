use crate::interactive_ratatui::domain::filter::FilterKind;
use crate::interactive_ratatui::ui::components::{Component, is_exit_prompt};
use crate::interactive_ratatui::ui::events::Message;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

#[derive(Default)]
pub struct SearchBar {
    query: String,
    cursor_position: usize,
    is_loading: bool,
    message: Option<String>,
}

impl SearchBar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the text. The cursor only moves when the text actually
    /// changed, so pushing the same state every frame keeps it in place.
    pub fn set_query(&mut self, query: String) {
        if query != self.query {
            self.query = query;
            self.cursor_position = self.query.chars().count();
        }
    }

    pub fn set_loading(&mut self, is_loading: bool) {
        self.is_loading = is_loading;
    }

    pub fn set_message(&mut self, message: Option<String>) {
        self.message = message;
    }

    pub fn get_query(&self) -> &str {
        &self.query
    }

    pub fn cursor_position(&self) -> usize {
        self.cursor_position
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    fn byte_offset(&self, char_pos: usize) -> usize {
        self.query
            .char_indices()
            .nth(char_pos)
            .map_or(self.query.len(), |(i, _)| i)
    }

    fn len(&self) -> usize {
        self.query.chars().count()
    }

    /// Find the previous word boundary from the given position
    fn find_prev_word_boundary(&self, from: usize) -> usize {
        let chars: Vec<char> = self.query.chars().collect();
        let mut pos = from;

        while pos > 0 && chars.get(pos - 1).is_some_and(|c| c.is_whitespace()) {
            pos -= 1;
        }
        while pos > 0 && chars.get(pos - 1).is_some_and(|c| !c.is_whitespace()) {
            pos -= 1;
        }

        pos
    }

    /// Find the next word boundary from the given position
    fn find_next_word_boundary(&self, from: usize) -> usize {
        let chars: Vec<char> = self.query.chars().collect();
        let mut pos = from;
        let len = chars.len();

        while pos < len && chars.get(pos).is_some_and(|c| !c.is_whitespace()) {
            pos += 1;
        }
        while pos < len && chars.get(pos).is_some_and(|c| c.is_whitespace()) {
            pos += 1;
        }

        pos
    }

    /// Delete the chars in `start..end` and return if the query changed
    fn delete_range(&mut self, start: usize, end: usize) -> bool {
        if start >= end || end > self.len() {
            return false;
        }

        let byte_start = self.byte_offset(start);
        let byte_end = self.byte_offset(end);
        self.query.drain(byte_start..byte_end);
        self.cursor_position = start;
        true
    }

    fn changed(&self) -> Option<Message> {
        Some(Message::QueryChanged(self.query.clone()))
    }
}

impl Component for SearchBar {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let cursor_style = Style::default().bg(Color::White).fg(Color::Black);
        let split = self.byte_offset(self.cursor_position);
        let (before, after) = self.query.split_at(split);

        let mut after_chars = after.chars();
        let input_text = match after_chars.next() {
            Some(under_cursor) => vec![
                Span::raw(before.to_string()),
                Span::styled(under_cursor.to_string(), cursor_style),
                Span::raw(after_chars.collect::<String>()),
            ],
            None => vec![Span::raw(before.to_string()), Span::styled(" ", cursor_style)],
        };

        let mut title = "Search good first issues".to_string();
        if self.is_loading {
            title.push_str(" [loading...]");
        }
        if let Some(msg) = &self.message {
            title.push_str(&format!(" - {msg}"));
        }

        let border_style = if is_exit_prompt(&self.message) {
            Style::default().fg(Color::Red)
        } else {
            Style::default()
        };

        let input = Paragraph::new(Line::from(input_text))
            .block(
                Block::default()
                    .title(title)
                    .borders(Borders::ALL)
                    .border_style(border_style),
            )
            .style(Style::default().fg(Color::Yellow));

        f.render_widget(input, area);
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<Message> {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                // Ctrl+A - Move cursor to beginning of line
                KeyCode::Char('a') => {
                    self.cursor_position = 0;
                    None
                }
                // Ctrl+E - Move cursor to end of line
                KeyCode::Char('e') => {
                    self.cursor_position = self.len();
                    None
                }
                // Ctrl+B - Move cursor backward one character
                KeyCode::Char('b') => {
                    self.cursor_position = self.cursor_position.saturating_sub(1);
                    None
                }
                // Ctrl+F - Move cursor forward one character
                KeyCode::Char('f') => {
                    self.cursor_position = (self.cursor_position + 1).min(self.len());
                    None
                }
                // Ctrl+H - Delete character before cursor (same as backspace)
                KeyCode::Char('h') => {
                    let pos = self.cursor_position;
                    if pos > 0 && self.delete_range(pos - 1, pos) {
                        self.changed()
                    } else {
                        None
                    }
                }
                // Ctrl+D - Delete character under cursor
                KeyCode::Char('d') => {
                    let pos = self.cursor_position;
                    if self.delete_range(pos, pos + 1) {
                        self.changed()
                    } else {
                        None
                    }
                }
                // Ctrl+W - Delete word before cursor
                KeyCode::Char('w') => {
                    let start = self.find_prev_word_boundary(self.cursor_position);
                    if self.delete_range(start, self.cursor_position) {
                        self.changed()
                    } else {
                        None
                    }
                }
                // Ctrl+U - Delete from cursor to beginning of line
                KeyCode::Char('u') => {
                    if self.delete_range(0, self.cursor_position) {
                        self.changed()
                    } else {
                        None
                    }
                }
                // Ctrl+K - Delete from cursor to end of line
                KeyCode::Char('k') => {
                    let len = self.len();
                    if self.delete_range(self.cursor_position, len) {
                        self.changed()
                    } else {
                        None
                    }
                }
                _ => None,
            };
        }

        if key.modifiers.contains(KeyModifiers::ALT) {
            match key.code {
                // Alt+B - Move cursor backward one word
                KeyCode::Char('b') => {
                    self.cursor_position = self.find_prev_word_boundary(self.cursor_position);
                }
                // Alt+F - Move cursor forward one word
                KeyCode::Char('f') => {
                    self.cursor_position = self.find_next_word_boundary(self.cursor_position);
                }
                _ => {}
            }
            return None;
        }

        match key.code {
            KeyCode::Char(c) => {
                let byte_pos = self.byte_offset(self.cursor_position);
                self.query.insert(byte_pos, c);
                self.cursor_position += 1;
                self.changed()
            }
            KeyCode::Backspace => {
                let pos = self.cursor_position;
                if pos > 0 && self.delete_range(pos - 1, pos) {
                    self.changed()
                } else {
                    None
                }
            }
            KeyCode::Delete => {
                let pos = self.cursor_position;
                if self.delete_range(pos, pos + 1) {
                    self.changed()
                } else {
                    None
                }
            }
            KeyCode::Left => {
                self.cursor_position = self.cursor_position.saturating_sub(1);
                None
            }
            KeyCode::Right => {
                self.cursor_position = (self.cursor_position + 1).min(self.len());
                None
            }
            KeyCode::Home => {
                self.cursor_position = 0;
                None
            }
            KeyCode::End => {
                self.cursor_position = self.len();
                None
            }
            KeyCode::Esc => {
                self.query.clear();
                self.cursor_position = 0;
                Some(Message::ClearFilter(FilterKind::Text))
            }
            _ => None,
        }
    }
}
