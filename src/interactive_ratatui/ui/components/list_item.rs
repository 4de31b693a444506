use chrono::{DateTime, Utc};
use ratatui::text::Line;

/// Trait for items that can be displayed in a generic list viewer.
///
/// Items may span several rows; the viewer asks for the lines at the
/// current width and scrolls by whole items.
pub trait ListItem: Clone {
    /// Rows for this item at `max_width` columns. Relative timestamps are
    /// computed against `now` so a whole frame agrees on the time.
    fn create_lines(&self, max_width: usize, now: DateTime<Utc>) -> Vec<Line<'static>>;

    /// Stable identity, used to keep the selection on the same item.
    fn key(&self) -> u64;
}

pub fn truncate_message(text: &str, max_width: usize) -> String {
    let text = text.replace('\n', " ");
    let chars: Vec<char> = text.chars().collect();

    if chars.len() <= max_width {
        text
    } else if max_width <= 3 {
        chars.into_iter().take(max_width).collect()
    } else {
        let truncated: String = chars.into_iter().take(max_width - 3).collect();
        format!("{truncated}...")
    }
}

pub fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    if max_width == 0 {
        return vec![];
    }

    let text = text.replace('\n', " ");
    let mut lines = Vec::new();
    let mut current_line = String::new();
    let mut current_width = 0;

    for word in text.split_whitespace() {
        let word_width = word.chars().count();

        if current_width > 0 && current_width + 1 + word_width > max_width {
            lines.push(std::mem::take(&mut current_line));
            current_line.push_str(word);
            current_width = word_width;
        } else {
            if current_width > 0 {
                current_line.push(' ');
                current_width += 1;
            }
            current_line.push_str(word);
            current_width += word_width;
        }
    }

    if !current_line.is_empty() {
        lines.push(current_line);
    }

    if lines.is_empty() {
        vec![String::new()]
    } else {
        lines
    }
}
