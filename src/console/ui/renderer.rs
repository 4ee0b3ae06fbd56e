use crate::console::constants::{
    DIALOG_MARGIN, FILTER_PANEL_HEIGHT, NOTIFICATION_BAR_HEIGHT, SEARCH_BAR_HEIGHT,
    STATS_BAR_HEIGHT,
};
use crate::console::domain::models::Focus;
use crate::console::ui::app_state::{AppState, Mode};
use crate::console::ui::components::{
    Component, filter_panel::FilterPanel, help_dialog::HelpDialog,
    notification_bar::NotificationBar, record_detail::RecordDetail, result_list::ResultList,
    search_bar::SearchBar, settings_panel::SettingsPanel, stats_bar::StatsBar,
};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Margin},
};

pub struct Renderer {
    notification_bar: NotificationBar,
    stats_bar: StatsBar,
    search_bar: SearchBar,
    filter_panel: FilterPanel,
    result_list: ResultList,
    record_detail: RecordDetail,
    settings_panel: SettingsPanel,
    help_dialog: HelpDialog,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer {
    pub fn new() -> Self {
        Self {
            notification_bar: NotificationBar::new(),
            stats_bar: StatsBar::new(),
            search_bar: SearchBar::new(),
            filter_panel: FilterPanel::new(),
            result_list: ResultList::new(),
            record_detail: RecordDetail::new(),
            settings_panel: SettingsPanel::new(),
            help_dialog: HelpDialog::new(),
        }
    }

    pub fn set_truncation_enabled(&mut self, enabled: bool) {
        self.result_list.set_truncation_enabled(enabled);
    }

    /// Push state into the components so key handling sees what was drawn.
    pub fn sync(&mut self, state: &AppState) {
        let focus = state.search.focus;
        let loading = state.session.is_loading();

        self.notification_bar
            .set_notification(state.ui.notifications.current());
        self.stats_bar.set_stats(state.session.stats.clone());

        self.search_bar.set_query(state.search.query.clone());
        self.search_bar.set_mode(state.search.mode);
        self.search_bar.set_loading(loading);
        self.search_bar.set_focus(focus);

        self.filter_panel.set_form(&state.search.filters);
        self.filter_panel.set_focus(focus);

        self.result_list
            .update_results(state.session.results.clone(), state.session.selected_index);
        self.result_list.set_loading(loading);
        self.result_list.set_focused(focus == Focus::Results);

        match &state.session.selected_record {
            Some(record) => self.record_detail.set_record(record.clone()),
            None => self.record_detail.clear(),
        }

        self.settings_panel
            .set_limit(state.ui.limit_input.clone(), state.ui.limit);
        self.settings_panel
            .set_import_source(state.ui.import_source.clone());
        self.settings_panel.set_loading(loading);
    }

    pub fn render(&mut self, f: &mut Frame, state: &AppState) {
        self.sync(state);
        self.render_search_screen(f);

        if state.ui.settings_visible {
            self.settings_panel.render(f, f.area());
        }
        if state.session.selected_record.is_some() {
            let area = f.area().inner(Margin {
                horizontal: DIALOG_MARGIN,
                vertical: DIALOG_MARGIN / 2,
            });
            self.record_detail.render(f, area);
        }
        if state.mode == Mode::Help {
            self.help_dialog.render(f, f.area());
        }
    }

    fn render_search_screen(&mut self, f: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(NOTIFICATION_BAR_HEIGHT),
                Constraint::Length(STATS_BAR_HEIGHT),
                Constraint::Length(SEARCH_BAR_HEIGHT),
                Constraint::Length(FILTER_PANEL_HEIGHT),
                Constraint::Min(0),
            ])
            .split(f.area());

        self.notification_bar.render(f, chunks[0]);
        self.stats_bar.render(f, chunks[1]);
        self.search_bar.render(f, chunks[2]);
        self.filter_panel.render(f, chunks[3]);
        self.result_list.render(f, chunks[4]);
    }

    pub fn get_search_bar_mut(&mut self) -> &mut SearchBar {
        &mut self.search_bar
    }

    pub fn get_filter_panel_mut(&mut self) -> &mut FilterPanel {
        &mut self.filter_panel
    }

    pub fn get_result_list_mut(&mut self) -> &mut ResultList {
        &mut self.result_list
    }

    pub fn get_record_detail_mut(&mut self) -> &mut RecordDetail {
        &mut self.record_detail
    }

    pub fn get_settings_panel_mut(&mut self) -> &mut SettingsPanel {
        &mut self.settings_panel
    }

    pub fn get_help_dialog_mut(&mut self) -> &mut HelpDialog {
        &mut self.help_dialog
    }
}
