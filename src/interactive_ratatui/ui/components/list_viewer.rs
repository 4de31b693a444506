use super::list_item::ListItem;
use super::view_layout::Styles;
use crate::interactive_ratatui::constants::SCROLL_PAGE_SIZE;
use chrono::{DateTime, Utc};
use ratatui::{
    Frame,
    layout::Rect,
    text::Line,
    widgets::{Block, Borders, List, ListItem as TuiListItem, Paragraph},
};

/// Rows of the list that fit on screen, and whether the footer row made it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VisibleRange {
    pub start: usize,
    pub end: usize,
    pub footer_visible: bool,
}

pub struct ListViewer<T: ListItem> {
    pub items: Vec<T>,
    pub selected_index: usize,
    pub scroll_offset: usize,
    pub title: String,
    pub empty_message: String,
    footer: Option<Line<'static>>,
    now: DateTime<Utc>,
}

impl<T: ListItem> Default for ListViewer<T> {
    fn default() -> Self {
        Self::new(String::new(), String::new())
    }
}

impl<T: ListItem> ListViewer<T> {
    pub fn new(title: String, empty_message: String) -> Self {
        Self {
            items: Vec::new(),
            selected_index: 0,
            scroll_offset: 0,
            title,
            empty_message,
            footer: None,
            now: Utc::now(),
        }
    }

    /// Replace the items, keeping selection and scroll within bounds.
    pub fn set_items(&mut self, items: Vec<T>) {
        self.items = items;
        let last = self.items.len().saturating_sub(1);
        self.selected_index = self.selected_index.min(last);
        self.scroll_offset = self.scroll_offset.min(last);
    }

    pub fn set_selected_index(&mut self, index: usize) {
        if index < self.items.len() {
            self.selected_index = index;
        }
    }

    /// Extra row drawn after the last item, e.g. a loading indicator.
    pub fn set_footer(&mut self, footer: Option<Line<'static>>) {
        self.footer = footer;
    }

    pub fn set_now(&mut self, now: DateTime<Utc>) {
        self.now = now;
    }

    pub fn get_selected_item(&self) -> Option<&T> {
        self.items.get(self.selected_index)
    }

    pub fn items_count(&self) -> usize {
        self.items.len()
    }

    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    pub fn move_up(&mut self) -> bool {
        if self.selected_index > 0 {
            self.selected_index -= 1;
            true
        } else {
            false
        }
    }

    pub fn move_down(&mut self) -> bool {
        if self.selected_index + 1 < self.items.len() {
            self.selected_index += 1;
            true
        } else {
            false
        }
    }

    pub fn page_up(&mut self) -> bool {
        self.select(self.selected_index.saturating_sub(SCROLL_PAGE_SIZE))
    }

    pub fn page_down(&mut self) -> bool {
        let last = self.items.len().saturating_sub(1);
        self.select((self.selected_index + SCROLL_PAGE_SIZE).min(last))
    }

    pub fn move_to_start(&mut self) -> bool {
        self.select(0)
    }

    pub fn move_to_end(&mut self) -> bool {
        self.select(self.items.len().saturating_sub(1))
    }

    fn select(&mut self, index: usize) -> bool {
        if index != self.selected_index && index < self.items.len() {
            self.selected_index = index;
            true
        } else {
            false
        }
    }

    fn item_height(&self, index: usize, text_width: usize) -> usize {
        self.items
            .get(index)
            .map_or(0, |item| item.create_lines(text_width, self.now).len().max(1))
    }

    /// Items that fit in `height` rows starting at `offset`. The first item
    /// is always included even if it is taller than the area.
    pub fn calculate_visible_range(
        &self,
        offset: usize,
        height: usize,
        text_width: usize,
    ) -> VisibleRange {
        let mut used = 0;
        let mut end = offset;

        while end < self.items.len() {
            let item_height = self.item_height(end, text_width);
            if end > offset && used + item_height > height {
                break;
            }
            used += item_height;
            end += 1;
        }

        let footer_visible =
            self.footer.is_some() && end == self.items.len() && used < height;

        VisibleRange {
            start: offset,
            end,
            footer_visible,
        }
    }

    /// Scroll just enough to keep the selected item on screen. Selecting the
    /// last item also brings the footer into view.
    pub fn adjust_scroll_offset(&mut self, height: usize, text_width: usize) {
        if self.selected_index < self.scroll_offset {
            self.scroll_offset = self.selected_index;
            return;
        }
        let wants_footer = self.footer.is_some() && self.selected_index + 1 == self.items.len();
        while self.scroll_offset < self.selected_index {
            let range = self.calculate_visible_range(self.scroll_offset, height, text_width);
            if self.selected_index < range.end && (!wants_footer || range.footer_visible) {
                break;
            }
            self.scroll_offset += 1;
        }
    }

    /// Draw the list and report whether the footer row is on screen.
    pub fn render(&mut self, f: &mut Frame, area: Rect) -> bool {
        if self.items.is_empty() {
            let empty_message = Paragraph::new(self.empty_message.clone())
                .block(Block::default().title(self.title.clone()).borders(Borders::ALL))
                .style(Styles::dimmed());
            f.render_widget(empty_message, area);
            return false;
        }

        let height = usize::from(area.height.saturating_sub(2));
        let text_width = usize::from(area.width.saturating_sub(2));
        self.adjust_scroll_offset(height, text_width);
        let range = self.calculate_visible_range(self.scroll_offset, height, text_width);

        let mut rows: Vec<TuiListItem> = (range.start..range.end)
            .filter_map(|i| {
                self.items.get(i).map(|item| {
                    let row = TuiListItem::new(item.create_lines(text_width, self.now));
                    if i == self.selected_index {
                        row.style(Styles::selected())
                    } else {
                        row
                    }
                })
            })
            .collect();

        if range.footer_visible {
            if let Some(footer) = &self.footer {
                rows.push(TuiListItem::new(footer.clone()));
            }
        }

        let title = format!(
            "{} ({}/{})",
            self.title,
            self.selected_index + 1,
            self.items.len()
        );

        let list = List::new(rows).block(Block::default().title(title).borders(Borders::ALL));
        f.render_widget(list, area);

        range.footer_visible
    }
}
