pub mod filter_bar;
pub mod issue_item;
pub mod language_picker;
pub mod list_item;
pub mod list_viewer;
pub mod result_list;
pub mod search_bar;
pub mod status_panel;
pub mod view_layout;

#[cfg(test)]
mod list_item_test;

use crate::interactive_ratatui::constants::EXIT_PROMPT;
use crate::interactive_ratatui::ui::events::Message;
use crossterm::event::KeyEvent;
use ratatui::{Frame, layout::Rect};

pub trait Component {
    fn render(&mut self, f: &mut Frame, area: Rect);
    fn handle_key(&mut self, key: KeyEvent) -> Option<Message>;
}

/// Check if a message is the exit prompt
pub fn is_exit_prompt(message: &Option<String>) -> bool {
    message.as_deref() == Some(EXIT_PROMPT)
}
