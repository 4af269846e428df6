use crate::config::ConfigStore;
use crate::query::{build_radius_query, Query};
use crate::search::{SearchError, SearchResult};
use crate::ui::layout::{app_layout, AppLayout};
use crate::ui::map;
use crate::ui::mvi::Reducer;
use crate::ui::panels::{list_offset, list_viewport};
use crate::ui::session::{MobileTab, SessionIntent, SessionReducer, SessionState};
use crate::ui::suggestions::{SuggestionIntent, SuggestionReducer, SuggestionState};
use crate::ui::view::{cycle_facet, ViewModel};
use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};
use tokio::sync::mpsc;

#[derive(Debug)]
pub enum UiCommand {
    Search { seq: u64, query: Query },
}

pub type UiCommandSender = mpsc::Sender<UiCommand>;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// Top-level coordinator. Owns the session state and the input state and
/// is the only writer of either.
pub struct App {
    should_quit: bool,
    size: Option<(u16, u16)>,
    config: ConfigStore,
    examples: Vec<String>,
    radius_presets: Vec<u32>,
    radius_index: usize,
    narrow_width: u16,
    /// Text currently in the search box.
    query_text: String,
    /// Search session state (MVI pattern).
    session: SessionState,
    /// Example dropdown and input focus (MVI pattern).
    suggestions: SuggestionState,
    /// Pointer handling is live only while mounted.
    listeners_mounted: bool,
    /// Panel with keyboard focus when the input is not focused (wide layout).
    panel_focus: MobileTab,
    /// Highlighted row in the visible results.
    cursor: usize,
    command_sender: Option<UiCommandSender>,
    status_message: Option<String>,
    animation_tick: u8,
}

impl App {
    pub fn new(config: ConfigStore) -> Self {
        let snapshot = config.get();
        Self {
            should_quit: false,
            size: None,
            config,
            examples: snapshot.ui.examples,
            radius_index: default_radius_index(&snapshot.ui.radius_presets),
            radius_presets: snapshot.ui.radius_presets,
            narrow_width: snapshot.ui.narrow_width,
            query_text: String::new(),
            session: SessionState::default(),
            suggestions: SuggestionState::default(),
            listeners_mounted: false,
            panel_focus: MobileTab::Results,
            cursor: 0,
            command_sender: None,
            status_message: None,
            animation_tick: 0,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn set_command_sender(&mut self, sender: UiCommandSender) {
        self.command_sender = Some(sender);
    }

    /// Start handling pointer events for the search container.
    pub fn mount(&mut self) {
        self.listeners_mounted = true;
    }

    /// Stop handling pointer events. Called on teardown.
    pub fn unmount(&mut self) {
        self.listeners_mounted = false;
    }

    pub fn on_tick(&mut self) {
        if self.session.loading() {
            self.animation_tick = self.animation_tick.wrapping_add(1);
        }
    }

    pub fn animation_tick(&self) -> u8 {
        self.animation_tick
    }

    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        self.size = Some((cols, rows));
    }

    // ========================================================================
    // Read access
    // ========================================================================

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn suggestions(&self) -> &SuggestionState {
        &self.suggestions
    }

    /// Derived view shared by all panels.
    pub fn view(&self) -> ViewModel<'_> {
        ViewModel::derive(&self.session)
    }

    pub fn query_text(&self) -> &str {
        &self.query_text
    }

    pub fn examples(&self) -> &[String] {
        &self.examples
    }

    pub fn examples_visible(&self) -> bool {
        self.suggestions.is_visible(&self.query_text) && !self.examples.is_empty()
    }

    pub fn is_input_focused(&self) -> bool {
        self.suggestions.input_focused()
    }

    pub fn is_narrow(&self) -> bool {
        self.size
            .map(|(cols, _)| cols < self.narrow_width)
            .unwrap_or(false)
    }

    /// Panel receiving panel keys. In the narrow layout this is the visible tab.
    pub fn focused_panel(&self) -> MobileTab {
        if self.is_narrow() {
            self.session.mobile_tab()
        } else {
            self.panel_focus
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn radius(&self) -> u32 {
        self.radius_presets
            .get(self.radius_index)
            .copied()
            .unwrap_or_default()
    }

    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }

    /// Layout for the current terminal size, if known.
    pub fn layout(&self) -> Option<AppLayout> {
        let (cols, rows) = self.size?;
        let dropdown_rows = self
            .examples_visible()
            .then(|| self.examples.len().min(u16::MAX as usize) as u16);
        Some(app_layout(
            Rect::new(0, 0, cols, rows),
            self.is_narrow(),
            self.session.mobile_tab(),
            dropdown_rows,
            self.session.error().is_some(),
        ))
    }

    // ========================================================================
    // Search input
    // ========================================================================

    pub fn focus_input(&mut self) {
        self.dispatch_suggestions(SuggestionIntent::InputFocused);
    }

    /// Escape: hide examples and leave the input.
    pub fn escape_input(&mut self) {
        self.dispatch_suggestions(SuggestionIntent::Escape);
    }

    /// Editing is disabled while a search is loading.
    pub fn insert_char(&mut self, ch: char) {
        if !self.session.loading() {
            self.query_text.push(ch);
        }
    }

    pub fn delete_char(&mut self) {
        if !self.session.loading() {
            self.query_text.pop();
        }
    }

    pub fn clear_query_text(&mut self) {
        if !self.session.loading() {
            self.query_text.clear();
        }
    }

    pub fn move_example_highlight(&mut self, delta: i32) {
        let len = if self.examples_visible() {
            self.examples.len()
        } else {
            0
        };
        self.dispatch_suggestions(SuggestionIntent::MoveHighlight { delta, len });
    }

    /// Enter in the input: choose the highlighted example or submit the text.
    pub fn on_enter_in_input(&mut self) {
        if self.examples_visible() {
            if let Some(index) = self.suggestions.highlighted() {
                self.choose_example(index);
                return;
            }
        }
        self.submit();
    }

    /// Submit the typed query. Blank input and submissions while a search
    /// is loading are ignored.
    pub fn submit(&mut self) {
        if self.session.loading() {
            return;
        }
        let Some(query) = Query::free_text(&self.query_text) else {
            return;
        };
        self.dispatch_suggestions(SuggestionIntent::Submitted);
        self.start_search(query);
    }

    /// Fill the box with an example and search for it right away.
    pub fn choose_example(&mut self, index: usize) {
        if self.session.loading() {
            return;
        }
        let Some(example) = self.examples.get(index).cloned() else {
            return;
        };
        self.dispatch_suggestions(SuggestionIntent::ExampleChosen);
        let query = Query::free_text(&example);
        self.query_text = example;
        if let Some(query) = query {
            self.start_search(query);
        }
    }

    // ========================================================================
    // Search session (MVI pattern)
    // ========================================================================

    fn start_search(&mut self, query: Query) {
        self.dispatch_session(SessionIntent::Start {
            query: query.clone(),
        });
        self.cursor = 0;
        let seq = self.session.request_seq();
        tracing::info!(
            seq,
            query = %query,
            structured = query.is_structured(),
            "search started"
        );
        if !self.send_command(UiCommand::Search { seq, query }) {
            // No request is in flight, so fail the search now.
            self.on_search_resolved(
                seq,
                Err(SearchError::Transport("search worker unavailable".to_string())),
            );
        }
    }

    /// Apply the outcome of request `seq`. Outcomes of superseded requests
    /// are dropped by the reducer.
    pub fn on_search_resolved(&mut self, seq: u64, outcome: Result<SearchResult, SearchError>) {
        if seq != self.session.request_seq() {
            tracing::debug!(
                seq,
                latest = self.session.request_seq(),
                "discarding stale search response"
            );
        } else {
            match &outcome {
                Ok(result) => tracing::info!(
                    seq,
                    results = result.results.len(),
                    total = result.stats.total,
                    "search succeeded"
                ),
                Err(err) => tracing::warn!(
                    seq,
                    error_type = err.error_type(),
                    error = %err,
                    "search failed"
                ),
            }
        }
        self.dispatch_session(SessionIntent::Resolved { seq, outcome });
        self.clamp_cursor();
    }

    /// Toggle selection of a result id (list, map or keyboard).
    pub fn select_result(&mut self, id: &str) {
        self.dispatch_session(SessionIntent::Select { id: id.to_string() });
    }

    pub fn set_operator_filter(&mut self, operator: Option<String>) {
        self.dispatch_session(SessionIntent::SetOperatorFilter(operator));
        self.cursor = 0;
    }

    pub fn set_type_filter(&mut self, kind: Option<String>) {
        self.dispatch_session(SessionIntent::SetTypeFilter(kind));
        self.cursor = 0;
    }

    pub fn cycle_operator_filter(&mut self) {
        let next = {
            let view = self.view();
            cycle_facet(&view.operators, view.filter_operator)
        };
        self.set_operator_filter(next);
    }

    pub fn cycle_type_filter(&mut self) {
        let next = {
            let view = self.view();
            cycle_facet(&view.types, view.filter_type)
        };
        self.set_type_filter(next);
    }

    pub fn clear_filters(&mut self) {
        self.set_operator_filter(None);
        self.set_type_filter(None);
    }

    pub fn set_mobile_tab(&mut self, tab: MobileTab) {
        self.dispatch_session(SessionIntent::SetMobileTab(tab));
    }

    /// Tab: next panel (next mobile tab in the narrow layout).
    pub fn cycle_panel_focus(&mut self) {
        let next = match self.focused_panel() {
            MobileTab::Filters => MobileTab::Results,
            MobileTab::Results => MobileTab::Map,
            MobileTab::Map => MobileTab::Filters,
        };
        if self.is_narrow() {
            self.set_mobile_tab(next);
        }
        self.panel_focus = next;
    }

    pub fn step_radius(&mut self, delta: i32) {
        if self.radius_presets.is_empty() {
            return;
        }
        let last = self.radius_presets.len() - 1;
        self.radius_index = if delta.is_negative() {
            self.radius_index.saturating_sub(1)
        } else {
            (self.radius_index + 1).min(last)
        };
    }

    /// "Search near this": structured query around the selected result,
    /// with the current radius preset and the active type filter.
    pub fn radius_search(&mut self) -> bool {
        let query = {
            let view = self.view();
            let Some(selected) = view.selected else {
                return false;
            };
            build_radius_query(
                selected.display_name(),
                f64::from(self.radius()),
                view.filter_type,
            )
        };
        self.start_search(query);
        true
    }

    pub fn move_cursor(&mut self, delta: i32) {
        let len = self.view().visible.len();
        if len == 0 {
            self.cursor = 0;
            return;
        }
        self.cursor = if delta.is_negative() {
            self.cursor.saturating_sub(delta.unsigned_abs() as usize)
        } else {
            (self.cursor + delta as usize).min(len - 1)
        };
    }

    /// Toggle selection of the result under the cursor.
    pub fn activate_cursor(&mut self) {
        let id = self
            .view()
            .visible
            .get(self.cursor)
            .map(|item| item.id.clone());
        if let Some(id) = id {
            self.select_result(&id);
        }
    }

    // ========================================================================
    // Pointer input
    // ========================================================================

    pub fn on_mouse(&mut self, mouse: MouseEvent) {
        if !matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left)) {
            return;
        }
        self.on_pointer_down(Position::new(mouse.column, mouse.row));
    }

    /// Pointer pressed at `position`.
    ///
    /// Presses outside the search container (input line plus dropdown)
    /// dismiss the examples; presses inside do not.
    pub fn on_pointer_down(&mut self, position: Position) {
        if !self.listeners_mounted {
            return;
        }
        let Some(layout) = self.layout() else {
            return;
        };

        let inside = layout.search_container().contains(position);
        self.dispatch_suggestions(SuggestionIntent::PointerDown { inside });

        if inside {
            if let Some(index) = example_row_at(&layout, position, self.examples.len()) {
                self.choose_example(index);
            } else if layout.header.contains(position) {
                self.focus_input();
            }
            return;
        }

        let Some(panel) = layout.panel_at(position) else {
            return;
        };
        self.panel_focus = panel;
        match panel {
            MobileTab::Results => self.click_result_row(&layout, position),
            MobileTab::Map => self.click_map(&layout, position),
            MobileTab::Filters => {}
        }
    }

    fn click_result_row(&mut self, layout: &AppLayout, position: Position) {
        let Some(panel) = layout.results else {
            return;
        };
        let viewport = list_viewport(panel);
        if !viewport.contains(position) {
            return;
        }
        let offset = list_offset(self.cursor, viewport.height as usize);
        let index = offset + (position.y - viewport.y) as usize;
        let id = self.view().visible.get(index).map(|item| item.id.clone());
        if let Some(id) = id {
            self.cursor = index;
            self.select_result(&id);
        }
    }

    fn click_map(&mut self, layout: &AppLayout, position: Position) {
        let Some(panel) = layout.map else {
            return;
        };
        let id = {
            let view = self.view();
            let Some(bounds) = view.bounds else {
                return;
            };
            map::marker_at(&bounds, map::canvas(panel), &view.visible, position)
                .map(str::to_string)
        };
        if let Some(id) = id {
            self.select_result(&id);
        }
    }

    // ========================================================================
    // Config
    // ========================================================================

    /// Re-read the config file and refresh examples and radius presets.
    ///
    /// The search endpoint is fixed for the lifetime of the worker.
    pub fn reload_config(&mut self) {
        match self.config.reload() {
            Ok(()) => {
                let snapshot = self.config.get();
                self.examples = snapshot.ui.examples;
                self.radius_index = default_radius_index(&snapshot.ui.radius_presets);
                self.radius_presets = snapshot.ui.radius_presets;
                self.narrow_width = snapshot.ui.narrow_width;
                self.status_message = Some("Config reloaded".to_string());
                tracing::info!(path = %self.config.path().display(), "config reloaded");
            }
            Err(err) => {
                tracing::warn!(error = %err, "config reload failed");
                self.status_message = Some(err.to_string());
            }
        }
    }

    // ========================================================================
    // Internals
    // ========================================================================

    fn dispatch_session(&mut self, intent: SessionIntent) {
        dispatch_mvi!(self, session, SessionReducer, intent);
    }

    fn dispatch_suggestions(&mut self, intent: SuggestionIntent) {
        dispatch_mvi!(self, suggestions, SuggestionReducer, intent);
    }

    fn clamp_cursor(&mut self) {
        let len = self.view().visible.len();
        self.cursor = self.cursor.min(len.saturating_sub(1));
    }

    fn send_command(&mut self, command: UiCommand) -> bool {
        let Some(sender) = &self.command_sender else {
            tracing::warn!("search command dropped: no worker attached");
            self.status_message = Some("Search worker unavailable".to_string());
            return false;
        };

        match sender.try_send(command) {
            Ok(()) => {
                self.status_message = None;
                true
            }
            Err(err) => {
                tracing::warn!(error = %err, "search command dropped");
                self.status_message = Some(format!("Search worker unavailable: {}", err));
                false
            }
        }
    }
}

/// Middle preset, so both smaller and larger radii are one key away.
fn default_radius_index(presets: &[u32]) -> usize {
    presets.len() / 2
}

/// Example row under `position` while the dropdown is open.
fn example_row_at(layout: &AppLayout, position: Position, count: usize) -> Option<usize> {
    let dropdown = layout.dropdown?;
    // Border, then the "Examples" heading line.
    let first_row = dropdown.y + 2;
    if !dropdown.contains(position) || position.y < first_row {
        return None;
    }
    let index = (position.y - first_row) as usize;
    (index < count).then_some(index)
}
