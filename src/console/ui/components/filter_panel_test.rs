#[cfg(test)]
mod tests {
    use super::super::Component;
    use super::super::filter_panel::*;
    use crate::console::domain::filter::{FilterField, FilterForm};
    use crate::console::domain::models::Focus;
    use crate::console::ui::events::Message;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::{Terminal, backend::TestBackend};

    fn create_key_event(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    fn focused(field: FilterField) -> FilterPanel {
        let mut panel = FilterPanel::new();
        panel.set_focus(Focus::Filter(field));
        panel
    }

    #[test]
    fn test_status_type_cycles_through_all_types() {
        let mut panel = focused(FilterField::StatusType);

        let expected = ["photo", "video", "link", "status", ""];
        for value in expected {
            assert_eq!(
                panel.handle_key(create_key_event(KeyCode::Right)),
                Some(Message::FilterChanged(
                    FilterField::StatusType,
                    value.to_string()
                ))
            );
        }

        assert_eq!(
            panel.handle_key(create_key_event(KeyCode::Left)),
            Some(Message::FilterChanged(
                FilterField::StatusType,
                "status".to_string()
            ))
        );
    }

    #[test]
    fn test_text_fields_emit_filter_changed() {
        let mut panel = focused(FilterField::MinReactions);
        panel.handle_key(create_key_event(KeyCode::Char('5')));
        assert_eq!(
            panel.handle_key(create_key_event(KeyCode::Char('0'))),
            Some(Message::FilterChanged(
                FilterField::MinReactions,
                "50".to_string()
            ))
        );

        let mut panel = focused(FilterField::DateTo);
        assert_eq!(
            panel.handle_key(create_key_event(KeyCode::Char('2'))),
            Some(Message::FilterChanged(FilterField::DateTo, "2".to_string()))
        );
    }

    #[test]
    fn test_enter_requests_search() {
        let mut panel = focused(FilterField::DateFrom);
        assert_eq!(
            panel.handle_key(create_key_event(KeyCode::Enter)),
            Some(Message::SearchRequested)
        );
    }

    #[test]
    fn test_keys_ignored_without_focus() {
        let mut panel = FilterPanel::new();
        panel.set_focus(Focus::Results);
        assert_eq!(panel.handle_key(create_key_event(KeyCode::Char('1'))), None);
    }

    #[test]
    fn test_set_form_syncs_and_renders() {
        let mut panel = FilterPanel::new();
        panel.set_form(&FilterForm {
            status_type: "video".to_string(),
            min_reactions: "1000".to_string(),
            date_from: "2016-01-01".to_string(),
            date_to: String::new(),
        });

        let backend = TestBackend::new(100, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| panel.render(f, f.area())).unwrap();

        let content: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(content.contains("video"));
        assert!(content.contains("1000"));
        assert!(content.contains("2016-01-01"));
        assert!(content.contains("Min Reactions"));
    }
}
