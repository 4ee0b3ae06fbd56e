use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, poll},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::{Duration, Instant};
use tracing::{debug, info};

pub mod application;
pub mod constants;
pub mod domain;
pub mod ui;


use crate::client::SearchBackend;
use self::application::search_service::SearchService;
use self::constants::{DOUBLE_CTRL_C_TIMEOUT_SECS, EVENT_POLL_INTERVAL_MS, EXIT_PROMPT};
use self::domain::models::{Completion, Focus, Mode, Severity};
use self::ui::{
    app_state::AppState, commands::Command, components::Component, events::Message,
    renderer::Renderer,
};

/// Settings the console starts with.
#[derive(Debug, Clone)]
pub struct ConsoleConfig {
    pub limit: Option<i64>,
    pub import_source: String,
    /// Wrap result bodies instead of clipping them to one line.
    pub full_text: bool,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            limit: Some(domain::request::DEFAULT_LIMIT),
            import_source: constants::DEFAULT_IMPORT_SOURCE.to_string(),
            full_text: false,
        }
    }
}

/// Terminal front end driving one [`AppState`].
///
/// Each dispatched request runs on its own thread and reports back through a
/// channel, so overlapping operations complete independently.
pub struct InteractiveConsole {
    state: AppState,
    renderer: Renderer,
    search_service: Arc<SearchService>,
    completion_sender: Sender<Completion>,
    completion_receiver: Receiver<Completion>,
    last_ctrl_c_press: Option<Instant>,
}

impl InteractiveConsole {
    pub fn new(backend: Arc<dyn SearchBackend>, config: ConsoleConfig) -> Self {
        let (completion_sender, completion_receiver) = mpsc::channel();
        let mut renderer = Renderer::new();
        renderer.set_truncation_enabled(!config.full_text);

        Self {
            state: AppState::with_settings(config.limit, config.import_source),
            renderer,
            search_service: Arc::new(SearchService::new(backend)),
            completion_sender,
            completion_receiver,
            last_ctrl_c_press: None,
        }
    }

    pub fn run(&mut self) -> Result<()> {
        let mut terminal = self.setup_terminal()?;
        info!("console started");

        self.handle_message(Message::RefreshStats);

        let result = self.run_app(&mut terminal);

        self.cleanup_terminal(&mut terminal)?;
        info!("console stopped");
        result
    }

    fn setup_terminal(&self) -> Result<Terminal<CrosstermBackend<Stdout>>> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Ok(terminal)
    }

    fn cleanup_terminal(&self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;
        Ok(())
    }

    fn run_app(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        loop {
            terminal.draw(|f| {
                self.renderer.render(f, &self.state);
            })?;

            self.drain_completions();
            self.state.ui.notifications.expire_due(Instant::now());

            if poll(Duration::from_millis(EVENT_POLL_INTERVAL_MS))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    if self.handle_input(key) {
                        break;
                    }
                }
            }
        }
        Ok(())
    }

    /// Applies every completion that has arrived since the last frame.
    pub(crate) fn drain_completions(&mut self) {
        while let Ok(completion) = self.completion_receiver.try_recv() {
            self.handle_message(Message::Completed(completion));
        }
    }

    /// Returns true when the console should exit.
    pub(crate) fn handle_input(&mut self, key: KeyEvent) -> bool {
        // Global Ctrl+C handling for exit
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            if let Some(last_press) = self.last_ctrl_c_press {
                if last_press.elapsed() < Duration::from_secs(DOUBLE_CTRL_C_TIMEOUT_SECS) {
                    return true;
                }
            }
            self.last_ctrl_c_press = Some(Instant::now());
            self.handle_message(Message::Notify(EXIT_PROMPT.to_string(), Severity::Info));
            return false;
        }

        // Components answer keys from what they last saw
        self.renderer.sync(&self.state);

        let message = if self.state.mode == Mode::Help {
            self.renderer.get_help_dialog_mut().handle_key(key)
        } else if self.state.session.selected_record.is_some() {
            self.renderer.get_record_detail_mut().handle_key(key)
        } else if self.state.ui.settings_visible {
            self.renderer.get_settings_panel_mut().handle_key(key)
        } else {
            match self.handle_search_screen_input(key) {
                SearchScreenInput::Quit => return true,
                SearchScreenInput::Message(message) => message,
            }
        };

        if let Some(msg) = message {
            self.handle_message(msg);
        }
        false
    }

    fn handle_search_screen_input(&mut self, key: KeyEvent) -> SearchScreenInput {
        let global = match key.code {
            KeyCode::Esc => return SearchScreenInput::Quit,
            KeyCode::F(1) => Some(Message::ShowHelp),
            KeyCode::F(2) => Some(Message::ToggleSettings),
            KeyCode::Tab => Some(Message::FocusNext),
            KeyCode::BackTab => Some(Message::FocusPrev),
            KeyCode::Char('r') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Message::ResetFilters)
            }
            _ => None,
        };
        if global.is_some() {
            return SearchScreenInput::Message(global);
        }

        let message = match self.state.search.focus {
            Focus::Query | Focus::SearchMode => self.renderer.get_search_bar_mut().handle_key(key),
            Focus::Filter(_) => self.renderer.get_filter_panel_mut().handle_key(key),
            Focus::Results => self.renderer.get_result_list_mut().handle_key(key),
        };
        SearchScreenInput::Message(message)
    }

    pub(crate) fn handle_message(&mut self, message: Message) {
        let command = self.state.update(message);
        self.execute_command(command);
    }

    fn execute_command(&mut self, command: Command) {
        match command {
            Command::None => {}
            Command::Dispatch(request) => {
                let service = Arc::clone(&self.search_service);
                let sender = self.completion_sender.clone();
                debug!(id = request.id, "spawning worker");
                thread::spawn(move || {
                    let completion = service.execute(request);
                    // The receiver is gone only when the console has exited
                    let _ = sender.send(completion);
                });
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn state(&self) -> &AppState {
        &self.state
    }

    /// Blocks until one completion arrives and applies it.
    #[cfg(test)]
    pub(crate) fn wait_for_completion(&mut self, timeout: Duration) -> bool {
        match self.completion_receiver.recv_timeout(timeout) {
            Ok(completion) => {
                self.handle_message(Message::Completed(completion));
                true
            }
            Err(_) => false,
        }
    }
}

enum SearchScreenInput {
    Quit,
    Message(Option<Message>),
}
