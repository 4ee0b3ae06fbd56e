pub mod filter_panel;
pub mod help_dialog;
pub mod highlight;
pub mod list_item;
pub mod list_viewer;
pub mod notification_bar;
pub mod record_detail;
pub mod result_list;
pub mod search_bar;
pub mod settings_panel;
pub mod stats_bar;
pub mod text_input;
pub mod view_layout;

#[cfg(test)]
mod filter_panel_test;
#[cfg(test)]
mod list_viewer_test;

use crate::console::constants::EXIT_PROMPT;
use crate::console::ui::events::Message;
use crossterm::event::KeyEvent;
use ratatui::{Frame, layout::Rect};

pub trait Component {
    fn render(&mut self, f: &mut Frame, area: Rect);
    fn handle_key(&mut self, key: KeyEvent) -> Option<Message>;
}

/// Check if a message is the exit prompt
pub fn is_exit_prompt(message: Option<&str>) -> bool {
    message == Some(EXIT_PROMPT)
}

/// Centers a `width` x `height` box inside `area`, shrinking it to fit.
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
