use crate::console::ui::components::{Component, list_viewer::ListViewer, view_layout};
use crate::console::ui::events::Message;
use crate::schemas::Record;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{Frame, layout::Rect};

const HINTS: &str = "↑/↓: Navigate | Enter/v: View | s: Similar | d: Delete | Tab: Focus | F1: Help";

pub struct ResultList {
    list_viewer: ListViewer<Record>,
}

impl Default for ResultList {
    fn default() -> Self {
        Self::new()
    }
}

impl ResultList {
    pub fn new() -> Self {
        Self {
            list_viewer: ListViewer::new("Results".to_string(), "No results found".to_string()),
        }
    }

    /// Sync the rows and selection from state.
    pub fn update_results(&mut self, results: Vec<Record>, selected_index: usize) {
        self.list_viewer.set_items(results);
        self.list_viewer.set_selected_index(selected_index);
    }

    /// The empty state reads "Searching..." while a request is outstanding.
    pub fn set_loading(&mut self, is_loading: bool) {
        let empty = if is_loading { "Searching..." } else { "No results found" };
        self.list_viewer.set_empty_message(empty.to_string());
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.list_viewer.focused = focused;
    }

    pub fn set_truncation_enabled(&mut self, enabled: bool) {
        self.list_viewer.set_truncation_enabled(enabled);
    }

    pub fn selected_result(&self) -> Option<&Record> {
        self.list_viewer.get_selected_item()
    }

    pub fn get_selected_index(&self) -> usize {
        self.list_viewer.selected_index
    }

    fn selection_changed(&self, moved: bool) -> Option<Message> {
        moved.then(|| Message::SelectResult(self.list_viewer.selected_index))
    }

    fn selected_id(&self) -> Option<String> {
        self.selected_result().map(|record| record.id.clone())
    }
}

impl Component for ResultList {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let list_viewer = &mut self.list_viewer;
        view_layout::render_with_hints(f, area, HINTS, |f, area| list_viewer.render(f, area));
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
            KeyCode::Enter | KeyCode::Char('v') => self.selected_id().map(Message::ViewRequested),
            KeyCode::Char('s') => self.selected_id().map(Message::FindSimilarRequested),
            KeyCode::Char('d') | KeyCode::Delete => {
                self.selected_id().map(Message::DeleteRequested)
            }
            _ => None,
        }
    }
}
