use crate::interactive_ratatui::application::scroll_sentinel::{ContinuationSignal, ScrollSentinel};
use crate::interactive_ratatui::constants::{
    LIST_ITEM_ERROR, LOADING_MORE, NO_ISSUES_FOUND, RELOAD_LABEL, SCROLL_FOR_MORE,
};
use crate::interactive_ratatui::domain::models::{LoadState, PageCursor};
use crate::interactive_ratatui::ui::components::{
    Component, list_item::ListItem, list_viewer::ListViewer, view_layout::Styles,
};
use crate::interactive_ratatui::ui::events::Message;
use crate::schemas::Issue;
use chrono::{DateTime, Utc};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
};

const LIST_TITLE: &str = "Good First Issues";

/// The issue list plus the marker row below it. Drawing the marker raises
/// the continuation signal the run loop turns into a next-page request.
pub struct ResultList {
    list_viewer: ListViewer<Issue>,
    sentinel: ScrollSentinel,
    load_state: LoadState,
    can_load_more: bool,
    signature: Option<(usize, u64, u64)>,
}

impl Default for ResultList {
    fn default() -> Self {
        Self::new()
    }
}

impl ResultList {
    pub fn new() -> Self {
        Self {
            list_viewer: ListViewer::new(LIST_TITLE.to_string(), NO_ISSUES_FOUND.to_string()),
            sentinel: ScrollSentinel::new(),
            load_state: LoadState::Idle,
            can_load_more: false,
            signature: None,
        }
    }

    /// Push the current accumulator. A changed item set moves the marker, so
    /// the sentinel is re-armed.
    pub fn set_items(&mut self, items: &[Issue]) {
        let signature = match (items.first(), items.last()) {
            (Some(first), Some(last)) => Some((items.len(), first.key(), last.key())),
            _ => None,
        };
        if signature == self.signature {
            return;
        }
        self.signature = signature;
        self.sentinel.reset();
        self.list_viewer.set_items(items.to_vec());
    }

    pub fn set_selected_index(&mut self, index: usize) {
        self.list_viewer.set_selected_index(index);
    }

    /// A finished page load re-arms the sentinel even when no items were
    /// added, so a marker that never left the screen can ask again.
    pub fn set_load_state(&mut self, state: &LoadState, can_load_more: bool) {
        if self.load_state == LoadState::LoadingMore && *state != LoadState::LoadingMore {
            self.sentinel.reset();
        }
        self.load_state = state.clone();
        self.can_load_more = can_load_more;
    }

    pub fn set_progress(&mut self, cursor: PageCursor) {
        self.list_viewer.title = format!(
            "{LIST_TITLE} · page {}/{}",
            cursor.current_page, cursor.total_pages
        );
    }

    pub fn set_now(&mut self, now: DateTime<Utc>) {
        self.list_viewer.set_now(now);
    }

    pub fn selected_issue(&self) -> Option<&Issue> {
        self.list_viewer.get_selected_item()
    }

    pub fn get_selected_index(&self) -> usize {
        self.list_viewer.selected_index()
    }

    pub fn is_marker_visible(&self) -> bool {
        self.sentinel.is_visible()
    }

    fn footer(&self) -> Line<'static> {
        match &self.load_state {
            LoadState::LoadingMore => Line::from(Span::styled(LOADING_MORE, Styles::title())),
            LoadState::ErrorSubsequentPage(message) => Line::from(vec![
                Span::styled(format!("⚠ {LIST_ITEM_ERROR}: {message} "), Styles::error()),
                Span::styled(format!("[Enter: {RELOAD_LABEL}]"), Styles::action_key()),
            ]),
            _ if self.can_load_more => Line::from(Span::styled(SCROLL_FOR_MORE, Styles::dimmed())),
            _ => Line::from(Span::styled(
                format!("All {} issues loaded", self.list_viewer.items_count()),
                Styles::dimmed(),
            )),
        }
    }

    fn selection_changed(&self, moved: bool) -> Option<Message> {
        moved.then(|| Message::SelectResult(self.list_viewer.selected_index()))
    }
}

impl ContinuationSignal for ResultList {
    fn take_signal(&mut self) -> bool {
        self.sentinel.take_signal()
    }
}

impl Component for ResultList {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        self.list_viewer.set_footer(Some(self.footer()));
        let marker_visible = self.list_viewer.render(f, area);
        self.sentinel.observe(marker_visible);
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<Message> {
        match key.code {
            KeyCode::Up => {
                let moved = self.list_viewer.move_up();
                self.selection_changed(moved)
            }
            KeyCode::Down => {
                let moved = self.list_viewer.move_down();
                self.selection_changed(moved)
            }
            KeyCode::Char('p') if key.modifiers == KeyModifiers::CONTROL => {
                let moved = self.list_viewer.move_up();
                self.selection_changed(moved)
            }
            KeyCode::Char('n') if key.modifiers == KeyModifiers::CONTROL => {
                let moved = self.list_viewer.move_down();
                self.selection_changed(moved)
            }
            KeyCode::PageUp => {
                let moved = self.list_viewer.page_up();
                self.selection_changed(moved)
            }
            KeyCode::PageDown => {
                let moved = self.list_viewer.page_down();
                self.selection_changed(moved)
            }
            KeyCode::Home => {
                let moved = self.list_viewer.move_to_start();
                self.selection_changed(moved)
            }
            KeyCode::End => {
                let moved = self.list_viewer.move_to_end();
                self.selection_changed(moved)
            }
            KeyCode::Enter => match self.load_state {
                LoadState::ErrorSubsequentPage(_) => Some(Message::Retry),
                _ => Some(Message::OpenSelected),
            },
            _ => None,
        }
    }
}
