#[cfg(test)]
mod tests {
    use super::super::list_item::{ListItem, clip_spans, truncate_message, wrap_spans};
    use super::super::list_viewer::*;
    use crate::schemas::Record;
    use ratatui::{Terminal, backend::TestBackend, text::Span};

    fn create_record(id: &str, message: &str) -> Record {
        Record {
            id: id.to_string(),
            status_message: Some(message.to_string()),
            status_published: Some("2016-10-01 20:00:00".to_string()),
            status_type: Some("photo".to_string()),
            num_reactions: Some(12_345),
            ..Default::default()
        }
    }

    fn create_viewer(count: usize) -> ListViewer<Record> {
        let mut viewer = ListViewer::new("Results".to_string(), "No results found".to_string());
        viewer.set_items(
            (0..count)
                .map(|i| create_record(&i.to_string(), &format!("post {i}")))
                .collect(),
        );
        viewer
    }

    fn render_to_string(viewer: &mut ListViewer<Record>, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| viewer.render(f, f.area())).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_navigation_bounds() {
        let mut viewer = create_viewer(3);

        assert!(!viewer.move_up());
        assert!(viewer.move_down());
        assert!(viewer.move_down());
        assert!(!viewer.move_down());
        assert_eq!(viewer.selected_index, 2);

        assert!(viewer.move_to_start());
        assert!(!viewer.move_to_start());
        assert!(viewer.move_to_end());
        assert_eq!(viewer.get_selected_item().unwrap().id, "2");
    }

    #[test]
    fn test_paging() {
        let mut viewer = create_viewer(25);

        assert!(viewer.page_down());
        assert_eq!(viewer.selected_index, 10);
        assert!(viewer.page_down());
        assert!(viewer.page_down());
        assert_eq!(viewer.selected_index, 24);
        assert!(!viewer.page_down());
        assert!(viewer.page_up());
        assert_eq!(viewer.selected_index, 14);
    }

    #[test]
    fn test_set_items_clamps_selection() {
        let mut viewer = create_viewer(5);
        viewer.set_selected_index(4);

        viewer.set_items(vec![create_record("a", "a"), create_record("b", "b")]);
        assert_eq!(viewer.selected_index, 1);

        viewer.set_selected_index(9);
        assert_eq!(viewer.selected_index, 1);
    }

    #[test]
    fn test_scroll_follows_selection() {
        // Each truncated item is three lines; eight inner lines fit two items
        let mut viewer = create_viewer(10);
        viewer.set_selected_index(5);
        viewer.adjust_scroll_offset(8, 60);
        assert_eq!(viewer.scroll_offset, 4);

        viewer.set_selected_index(1);
        viewer.adjust_scroll_offset(8, 60);
        assert_eq!(viewer.scroll_offset, 1);
    }

    #[test]
    fn test_render_empty_message() {
        let mut viewer = create_viewer(0);
        let content = render_to_string(&mut viewer, 60, 5);
        assert!(content.contains("No results found"));
    }

    #[test]
    fn test_render_rows_show_rank_type_and_counters() {
        let mut viewer = create_viewer(2);
        let content = render_to_string(&mut viewer, 80, 10);

        assert!(content.contains("#1"));
        assert!(content.contains("#2"));
        assert!(content.contains("[photo]"));
        assert!(content.contains("post 0"));
        assert!(content.contains("12,345"));
        assert!(content.contains("(1/2)"));
    }

    #[test]
    fn test_full_lines_wrap_long_content() {
        let record = create_record("x", &"word ".repeat(40));
        let truncated = record.create_truncated_lines(1, 40);
        let full = record.create_full_lines(1, 40);

        assert_eq!(truncated.len(), 3);
        assert!(full.len() > 3);
    }

    #[test]
    fn test_missing_type_shows_na() {
        let record = Record::default();
        let header = record.create_header_line(3);
        let text: String = header.spans.iter().map(|s| s.content.as_ref()).collect();
        assert!(text.contains("[N/A]"));
        assert!(text.starts_with("#3"));
    }

    #[test]
    fn test_clip_and_wrap_helpers() {
        let spans = vec![Span::raw("hello "), Span::raw("world")];
        let clipped = clip_spans(spans.clone(), 8);
        let text: String = clipped.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, "hello...");

        let untouched = clip_spans(spans.clone(), 20);
        assert_eq!(untouched.len(), 2);

        let lines = wrap_spans(spans, 6);
        assert_eq!(lines.len(), 2);

        assert_eq!(truncate_message("a\nb", 10), "a b");
        assert_eq!(truncate_message("abcdefghij", 6), "abc...");
    }
}
