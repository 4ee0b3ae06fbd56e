#[cfg(test)]
mod tests {
    use super::super::app_state::AppState;
    use super::super::events::Message;
    use super::super::renderer::Renderer;
    use crate::console::domain::models::{Completion, Operation};
    use crate::console::ui::commands::Command;
    use crate::schemas::{Record, Stats};
    use ratatui::{Terminal, backend::TestBackend};

    fn render_to_string(renderer: &mut Renderer, state: &AppState) -> String {
        let backend = TestBackend::new(100, 40);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| renderer.render(f, state)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    fn record(id: &str, message: &str) -> Record {
        Record {
            id: id.to_string(),
            status_message: Some(message.to_string()),
            status_published: Some("2016-10-01 20:00:00".to_string()),
            status_type: Some("video".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_initial_screen() {
        let mut renderer = Renderer::new();
        let state = AppState::new();

        let content = render_to_string(&mut renderer, &state);
        assert!(content.contains("TrASH Console"));
        assert!(content.contains("Loading statistics..."));
        assert!(content.contains("Search"));
        assert!(content.contains("Post Type"));
        assert!(content.contains("No results found"));
    }

    #[test]
    fn test_results_stats_and_notification() {
        let mut renderer = Renderer::new();
        let mut state = AppState::new();
        state.session.stats = Some(Stats {
            total: 5800,
            ..Default::default()
        });

        let Command::Dispatch(request) = state.update(Message::SearchRequested) else {
            panic!("expected dispatch");
        };
        assert!(matches!(request.operation, Operation::Search(_)));
        let loading = render_to_string(&mut renderer, &state);
        assert!(loading.contains("Searching..."));

        state.update(Message::Completed(Completion::Search {
            id: request.id,
            result: Ok(vec![record("1", "Crooked media"), record("2", "Drain the swamp")]),
        }));

        let content = render_to_string(&mut renderer, &state);
        assert!(content.contains("Total Posts: 5,800"));
        assert!(content.contains("Found 2 results"));
        assert!(content.contains("Crooked media"));
        assert!(content.contains("Drain the swamp"));
        assert!(content.contains("[video]"));
        assert!(!content.contains("Searching..."));
    }

    #[test]
    fn test_overlays() {
        let mut renderer = Renderer::new();
        let mut state = AppState::new();

        state.update(Message::ToggleSettings);
        let content = render_to_string(&mut renderer, &state);
        assert!(content.contains("Settings"));
        assert!(content.contains("Import Data"));

        state.update(Message::CloseSettings);
        state.session.selected_record = Some(record("42", "Full text of the post"));
        let content = render_to_string(&mut renderer, &state);
        assert!(content.contains("Full Post"));
        assert!(content.contains("Reaction Statistics"));

        state.update(Message::CloseDetail);
        state.update(Message::ShowHelp);
        let content = render_to_string(&mut renderer, &state);
        assert!(content.contains("Press any key to close this help..."));
    }
}
