use crate::interactive_ratatui::domain::filter::Filter;
use crate::interactive_ratatui::domain::languages::language_color;
use crate::interactive_ratatui::ui::components::Component;
use crate::interactive_ratatui::ui::components::view_layout::Styles;
use crate::interactive_ratatui::ui::events::Message;
use crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

/// One row under the search box: result count on the left, active filters
/// and their clear shortcuts after it.
#[derive(Default)]
pub struct FilterBar {
    filter: Filter,
    shown: Option<usize>,
    total_count: u64,
}

impl FilterBar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_filter(&mut self, filter: Filter) {
        self.filter = filter;
    }

    /// `None` hides the count, e.g. while page 1 is loading.
    pub fn set_count(&mut self, shown: Option<usize>, total_count: u64) {
        self.shown = shown;
        self.total_count = total_count;
    }

    pub fn line(&self) -> Line<'static> {
        let mut spans = Vec::new();

        if let Some(shown) = self.shown {
            let count = if (shown as u64) < self.total_count {
                format!("Showing {shown} of {} issues", self.total_count)
            } else {
                format!("Showing {shown} issues")
            };
            spans.push(Span::styled(count, Styles::normal()));
        }

        if self.filter.is_empty() {
            return Line::from(spans);
        }

        if !spans.is_empty() {
            spans.push(Span::styled("  |  ", Styles::dimmed()));
        }
        spans.push(Span::styled("Active filters: ", Styles::dimmed()));

        if let Some(language) = self.filter.language() {
            spans.push(Span::styled("● ", Style::default().fg(language_color(language))));
            spans.push(Span::styled(format!("Language: {language}"), Styles::label()));
            spans.push(Span::styled(" (Ctrl+X) ", Styles::dimmed()));
        }
        if let Some(text) = self.filter.text() {
            spans.push(Span::styled(format!("Search: \"{text}\""), Styles::label()));
            spans.push(Span::styled(" (Esc)", Styles::dimmed()));
        }

        Line::from(spans)
    }
}

impl Component for FilterBar {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        f.render_widget(Paragraph::new(self.line()), area);
    }

    fn handle_key(&mut self, _key: KeyEvent) -> Option<Message> {
        None
    }
}
