use super::list_item::ListItem;
use crate::console::constants::PAGE_SIZE;
use crate::console::ui::components::view_layout::Styles;
use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::Line,
    widgets::{Block, Borders, List, ListItem as TuiListItem, Paragraph},
};

/// Scrollable, selectable list of multi-line items.
pub struct ListViewer<T: ListItem> {
    pub items: Vec<T>,
    pub selected_index: usize,
    pub scroll_offset: usize,
    pub truncation_enabled: bool,
    pub title: String,
    pub empty_message: String,
    pub focused: bool,
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
            truncation_enabled: true,
            title,
            empty_message,
            focused: false,
        }
    }

    pub fn set_items(&mut self, items: Vec<T>) {
        self.items = items;
        self.selected_index = self.selected_index.min(self.items.len().saturating_sub(1));
        self.scroll_offset = self.scroll_offset.min(self.selected_index);
    }

    pub fn set_selected_index(&mut self, index: usize) {
        if index < self.items.len() {
            self.selected_index = index;
        }
    }

    pub fn set_truncation_enabled(&mut self, enabled: bool) {
        self.truncation_enabled = enabled;
    }

    pub fn set_empty_message(&mut self, message: String) {
        self.empty_message = message;
    }

    pub fn get_selected_item(&self) -> Option<&T> {
        self.items.get(self.selected_index)
    }

    pub fn items_count(&self) -> usize {
        self.items.len()
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
        let new_index = self.selected_index.saturating_sub(PAGE_SIZE);
        if new_index != self.selected_index {
            self.selected_index = new_index;
            true
        } else {
            false
        }
    }

    pub fn page_down(&mut self) -> bool {
        let new_index = (self.selected_index + PAGE_SIZE).min(self.items.len().saturating_sub(1));
        if new_index != self.selected_index {
            self.selected_index = new_index;
            true
        } else {
            false
        }
    }

    pub fn move_to_start(&mut self) -> bool {
        if self.selected_index > 0 {
            self.selected_index = 0;
            self.scroll_offset = 0;
            true
        } else {
            false
        }
    }

    pub fn move_to_end(&mut self) -> bool {
        let last_index = self.items.len().saturating_sub(1);
        if self.selected_index < last_index {
            self.selected_index = last_index;
            true
        } else {
            false
        }
    }

    fn item_lines(&self, index: usize, text_width: usize) -> Vec<Line<'static>> {
        match self.items.get(index) {
            Some(item) if self.truncation_enabled => item.create_truncated_lines(index + 1, text_width),
            Some(item) => item.create_full_lines(index + 1, text_width),
            None => Vec::new(),
        }
    }

    /// Items from `start` that fit in `available_height` lines. Always at least one.
    fn visible_end(&self, start: usize, available_height: usize, text_width: usize) -> usize {
        let mut used = 0;
        let mut end = start;
        while end < self.items.len() {
            let height = self.item_lines(end, text_width).len();
            if end > start && used + height > available_height {
                break;
            }
            used += height;
            end += 1;
        }
        end
    }

    pub fn adjust_scroll_offset(&mut self, available_height: u16, text_width: usize) {
        if self.selected_index < self.scroll_offset {
            self.scroll_offset = self.selected_index;
            return;
        }
        while self.scroll_offset < self.selected_index
            && self.selected_index
                >= self.visible_end(self.scroll_offset, available_height as usize, text_width)
        {
            self.scroll_offset += 1;
        }
    }

    pub fn render(&mut self, f: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Styles::focused_border(self.focused));

        if self.items.is_empty() {
            let empty_message = Paragraph::new(self.empty_message.clone())
                .block(block.title(self.title.clone()))
                .style(Styles::dimmed());
            f.render_widget(empty_message, area);
            return;
        }

        let available_height = area.height.saturating_sub(2);
        let text_width = area.width.saturating_sub(2) as usize;
        self.adjust_scroll_offset(available_height, text_width);
        let start = self.scroll_offset;
        let end = self.visible_end(start, available_height as usize, text_width);

        let items: Vec<TuiListItem> = (start..end)
            .map(|i| {
                let style = if i == self.selected_index {
                    Styles::selected()
                } else {
                    Style::default()
                };
                TuiListItem::new(self.item_lines(i, text_width)).style(style)
            })
            .collect();

        let title = format!(
            "{} ({}/{}) - Showing {}-{}",
            self.title,
            self.selected_index + 1,
            self.items.len(),
            start + 1,
            end
        );

        let list = List::new(items).block(block.title(title));
        f.render_widget(list, area);
    }
}
