//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event Model
//!
//! One loop on the main thread. Terminal events and results from the
//! background loader are each handled to completion before the next one.
//! The loader runs on the tokio runtime and reports back over an mpsc
//! channel of `Action`s; it is never cancelled.
//!
//! ## Redraw Strategy
//!
//! - **Loading**: draws every ~80ms so the spinner animates.
//! - **Idle**: sleeps up to 500ms, only redraws on events.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};

use crossterm::cursor::{SetCursorStyle, Show};
use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use crossterm::execute;
use ratatui::layout::Rect;
use tui_scrollview::ScrollViewState;

use crate::catalogue::{ProgramSource, build_source};
use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::filter::{SortOrder, reset, search, sort_programs};
use crate::core::program::Program;
use crate::core::state::Store;
use crate::tui::component::EventHandler;
use crate::tui::components::{
    FiltersEvent, FiltersPopupState, NewsletterEvent, NewsletterPopupState, ProgramListState,
    SearchBox, SearchEvent,
};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// TUI-specific presentation state (not part of the Store)
pub struct TuiState {
    pub search_box: SearchBox,
    pub program_list: ProgramListState,
    pub detail_scroll: ScrollViewState,
    /// Detail card shown over the list (narrow layout only).
    pub detail_overlay: bool,
    // Popups (None = hidden)
    pub newsletter: Option<NewsletterPopupState>,
    pub filters: Option<FiltersPopupState>,
    pub sort_order: SortOrder,
    pub wide_layout_columns: u16,
}

impl TuiState {
    pub fn new(wide_layout_columns: u16) -> Self {
        Self {
            search_box: SearchBox::new(),
            program_list: ProgramListState::new(),
            detail_scroll: ScrollViewState::default(),
            detail_overlay: false,
            newsletter: None,
            filters: None,
            sort_order: SortOrder::default(),
            wide_layout_columns,
        }
    }

    /// Select a row and open its detail. No bounds check against the list.
    pub fn select(&mut self, index: usize) {
        self.program_list.selected_index = index;
        self.detail_overlay = true;
        self.detail_scroll = ScrollViewState::default();
    }

    pub fn show_newsletter(&self) -> bool {
        self.newsletter.is_some()
    }

    pub fn show_filters(&self) -> bool {
        self.filters.is_some()
    }

    pub fn set_newsletter_visible(&mut self, visible: bool) {
        self.newsletter = visible.then(NewsletterPopupState::new);
    }

    /// The filters popup is built from the full catalogue.
    pub fn set_filters_visible(&mut self, visible: bool, information: &[Arc<Program>]) {
        self.filters = visible.then(|| FiltersPopupState::from_programs(information));
    }

    /// True while a popup has keyboard focus.
    pub fn has_focus_overlay(&self) -> bool {
        self.show_newsletter() || self.show_filters()
    }

    /// What the list shows: the Store's visible programs in display order.
    pub fn displayed_programs(&self, store: &Store) -> Vec<Arc<Program>> {
        sort_programs(self.sort_order, store.visible_programs())
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(
            stdout(),
            EnableMouseCapture,
            EnableBracketedPaste,
            Show,
            SetCursorStyle::SteadyBlock
        )?;
        info!("Terminal modes enabled (mouse, bracketed paste, steady block cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture, DisableBracketedPaste);
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let source = build_source(&config).map_err(|e| std::io::Error::other(e.to_string()))?;
    info!("Using {} source: {:?}", source.name(), config.source);

    let mut terminal = ratatui::init();
    let result = {
        let _terminal_mode_guard = TerminalModeGuard::new();
        event_loop(&mut terminal, source, &config)
    };
    ratatui::restore();
    result
}

fn event_loop(
    terminal: &mut ratatui::DefaultTerminal,
    source: Arc<dyn ProgramSource>,
    config: &ResolvedConfig,
) -> std::io::Result<()> {
    let mut store = Store::new();
    let mut tui = TuiState::new(config.wide_layout_columns);

    // Channel for actions from the background loader
    let (tx, rx) = mpsc::channel();

    // View activation: the one load per run, unless the user reloads.
    if update(&mut store, Action::Activate) == Effect::FetchPrograms {
        spawn_load(source.clone(), tx.clone());
    }

    let start_time = std::time::Instant::now();
    let mut needs_redraw = true;

    loop {
        if store.is_loading {
            needs_redraw = true;
        }

        if needs_redraw {
            let spinner_frame = (start_time.elapsed().as_secs_f32() * 12.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, &store, &mut tui, spinner_frame))?;
            needs_redraw = false;
        }

        let timeout = if store.is_loading {
            std::time::Duration::from_millis(80)
        } else {
            std::time::Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout)?;
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Process first event + drain everything pending before the next draw
        let frame_area = terminal.get_frame().area();
        let mut should_quit = false;
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            match handle_event(&mut store, &mut tui, event, frame_area) {
                Effect::Quit => should_quit = true,
                Effect::FetchPrograms => {
                    spawn_load(source.clone(), tx.clone());
                }
                Effect::None => {}
            }
        }
        if should_quit {
            break;
        }

        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            if update(&mut store, action) == Effect::Quit {
                return Ok(());
            }
        }
    }

    info!("Talentboard shutting down");
    Ok(())
}

/// Applies one terminal event to the Store and presentation state.
/// Returns the effect the loop must perform.
pub fn handle_event(
    store: &mut Store,
    tui: &mut TuiState,
    event: TuiEvent,
    frame_area: Rect,
) -> Effect {
    match event {
        TuiEvent::ForceQuit => return update(store, Action::Quit),
        TuiEvent::Resize => return Effect::None,
        _ => {}
    }

    // An open popup takes every key. Filters sits under the newsletter
    // popup when both are open, so the newsletter goes first.
    if let Some(newsletter) = tui.newsletter.as_mut() {
        if let Some(newsletter_event) = newsletter.handle_event(&event) {
            match newsletter_event {
                NewsletterEvent::Success(email) => {
                    info!("Newsletter signup submitted ({} chars)", email.len());
                    store.status_message = String::from("Thanks for subscribing!");
                    tui.set_newsletter_visible(false);
                }
                NewsletterEvent::Close => tui.set_newsletter_visible(false),
            }
        }
        return Effect::None;
    }
    if let Some(filters) = tui.filters.as_mut() {
        if let Some(filters_event) = filters.handle_event(&event) {
            match filters_event {
                FiltersEvent::Apply(term) => {
                    run_search(store, &term);
                    tui.set_filters_visible(false, &[]);
                }
                FiltersEvent::Close => tui.set_filters_visible(false, &[]),
            }
        }
        return Effect::None;
    }

    let wide = ui::is_wide(frame_area, tui.wide_layout_columns);

    // The narrow overlay covers the search box: `x` closes it and the
    // rest of the text input is dropped.
    if !wide && tui.detail_overlay {
        match event {
            TuiEvent::InputChar('x' | 'X') => {
                tui.detail_overlay = false;
                return Effect::None;
            }
            TuiEvent::InputChar(_)
            | TuiEvent::Paste(_)
            | TuiEvent::Backspace
            | TuiEvent::Submit
            | TuiEvent::ResetSearch => return Effect::None,
            _ => {}
        }
    }

    match event {
        TuiEvent::Reload => return update(store, Action::Activate),
        TuiEvent::OpenNewsletter => tui.set_newsletter_visible(true),
        TuiEvent::OpenFilters => tui.set_filters_visible(true, &store.information),
        TuiEvent::CycleSort => {
            let selected = tui
                .displayed_programs(store)
                .get(tui.program_list.selected_index)
                .cloned();
            tui.sort_order = tui.sort_order.next();
            // Keep the same record selected in the new order.
            tui.program_list.selected_index = selected
                .and_then(|program| {
                    tui.displayed_programs(store)
                        .iter()
                        .position(|p| Arc::ptr_eq(p, &program))
                })
                .unwrap_or(0);
            store.status_message = format!("Sort: {}", tui.sort_order.label());
        }
        TuiEvent::Escape => tui.detail_overlay = false,
        TuiEvent::CursorUp => {
            tui.program_list.move_up();
            tui.detail_scroll = ScrollViewState::default();
        }
        TuiEvent::CursorDown => {
            let len = store.visible_programs().len();
            tui.program_list.move_down(len);
            tui.detail_scroll = ScrollViewState::default();
        }
        TuiEvent::OpenDetail => tui.select(tui.program_list.selected_index),
        TuiEvent::ScrollUp => tui.detail_scroll.scroll_up(),
        TuiEvent::ScrollDown => tui.detail_scroll.scroll_down(),
        TuiEvent::ScrollPageUp => tui.detail_scroll.scroll_page_up(),
        TuiEvent::ScrollPageDown => tui.detail_scroll.scroll_page_down(),
        TuiEvent::MouseClick(col, row) => {
            // Clicks land on the overlay, not the list, while it is open.
            // While loading the list area only shows the spinner.
            if (!wide && tui.detail_overlay) || store.is_loading {
                return Effect::None;
            }
            let list_area = ui::compute_areas(frame_area, tui.wide_layout_columns).list;
            let in_columns = col >= list_area.x && col < list_area.x + list_area.width;
            let len = store.visible_programs().len();
            if in_columns && let Some(idx) = tui.program_list.hit_test(list_area, row, len) {
                debug!("Clicked program row {}", idx);
                tui.select(idx);
            }
        }
        other => {
            if let Some(search_event) = tui.search_box.handle_event(&other) {
                match search_event {
                    SearchEvent::Submit(query) => run_search(store, &query),
                    SearchEvent::Reset => {
                        update(store, Action::SetSearchedPrograms(reset()));
                    }
                    SearchEvent::ContentChanged => {}
                }
            }
        }
    }
    Effect::None
}

/// Filters the full catalogue and stores the result as the search override.
fn run_search(store: &mut Store, query: &str) {
    let results = search(query, &store.information);
    let found = results.len();
    info!(
        "Search {:?}: {} of {} programs",
        query,
        found,
        store.information.len()
    );
    update(store, Action::SetSearchedPrograms(results));
    if found == 0 && !store.information.is_empty() {
        store.status_message = format!("No programs match \"{query}\"");
    }
}

/// Fetches the catalogue in the background and reports the outcome as an
/// `Action`. A dropped receiver (the app quit) is logged and ignored.
pub fn spawn_load(
    source: Arc<dyn ProgramSource>,
    tx: mpsc::Sender<Action>,
) -> tokio::task::JoinHandle<()> {
    info!("Spawning program load from {} source", source.name());
    tokio::spawn(async move {
        let action = match source.fetch_programs().await {
            Ok(programs) => Action::SetAllPrograms(programs),
            Err(e) => {
                warn!("Program source {} failed: {}", source.name(), e);
                Action::LoadFailed(e.to_string())
            }
        };
        if tx.send(action).is_err() {
            warn!("Failed to deliver load result: receiver dropped");
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{FailingSource, StaticSource, sample_programs};

    const WIDE: Rect = Rect {
        x: 0,
        y: 0,
        width: 140,
        height: 40,
    };
    const NARROW: Rect = Rect {
        x: 0,
        y: 0,
        width: 60,
        height: 40,
    };

    fn loaded() -> (Store, TuiState) {
        let mut store = Store::new();
        update(&mut store, Action::SetAllPrograms(sample_programs()));
        (store, TuiState::new(100))
    }

    /// Bootcamp has a review, so "Top rating" puts it first.
    fn loaded_with_review() -> (Store, TuiState) {
        let mut programs = sample_programs();
        programs[1].reviews = vec![Default::default()];
        let mut store = Store::new();
        update(&mut store, Action::SetAllPrograms(programs));
        (store, TuiState::new(100))
    }

    fn displayed_ids(store: &Store, tui: &TuiState) -> Vec<String> {
        tui.displayed_programs(store)
            .iter()
            .map(|p| p.id.clone())
            .collect()
    }

    fn type_query(store: &mut Store, tui: &mut TuiState, text: &str) {
        for c in text.chars() {
            handle_event(store, tui, TuiEvent::InputChar(c), WIDE);
        }
    }

    #[test]
    fn test_tui_state_defaults() {
        let tui = TuiState::new(100);
        assert_eq!(tui.program_list.selected_index, 0);
        assert!(!tui.detail_overlay);
        assert!(!tui.show_newsletter());
        assert!(!tui.show_filters());
    }

    #[test]
    fn test_typed_search_filters_and_clears_query() {
        let (mut store, mut tui) = loaded();
        type_query(&mut store, &mut tui, "London");
        handle_event(&mut store, &mut tui, TuiEvent::Submit, WIDE);
        assert_eq!(store.searched_information.len(), 1);
        assert_eq!(store.visible_programs()[0].id, "bakery");
        assert!(tui.search_box.buffer.is_empty());
    }

    #[test]
    fn test_reset_restores_full_list() {
        let (mut store, mut tui) = loaded();
        type_query(&mut store, &mut tui, "tech");
        handle_event(&mut store, &mut tui, TuiEvent::Submit, WIDE);
        assert_eq!(store.visible_programs().len(), 1);
        handle_event(&mut store, &mut tui, TuiEvent::ResetSearch, WIDE);
        assert!(store.searched_information.is_empty());
        assert_eq!(store.visible_programs().len(), 2);
    }

    #[test]
    fn test_empty_search_sets_full_override() {
        let (mut store, mut tui) = loaded();
        handle_event(&mut store, &mut tui, TuiEvent::Submit, WIDE);
        assert_eq!(store.searched_information.len(), 2);
    }

    #[test]
    fn test_no_match_search_reports_status() {
        let (mut store, mut tui) = loaded();
        type_query(&mut store, &mut tui, "zzz");
        handle_event(&mut store, &mut tui, TuiEvent::Submit, WIDE);
        assert!(store.searched_information.is_empty());
        assert_eq!(store.status_message, "No programs match \"zzz\"");
        // Display falls back to everything.
        assert_eq!(tui.displayed_programs(&store).len(), 2);
    }

    #[test]
    fn test_click_selects_row_and_opens_overlay() {
        let (mut store, mut tui) = loaded();
        let list = ui::compute_areas(NARROW, 100).list;
        // Second row: border + one row height.
        let row = list.y + 1 + components::program_list::ROW_HEIGHT;
        handle_event(&mut store, &mut tui, TuiEvent::MouseClick(2, row), NARROW);
        assert_eq!(tui.program_list.selected_index, 1);
        assert!(tui.detail_overlay);

        handle_event(&mut store, &mut tui, TuiEvent::Escape, NARROW);
        assert!(!tui.detail_overlay);
    }

    #[test]
    fn test_x_closes_narrow_overlay_only() {
        let (mut store, mut tui) = loaded();
        tui.select(0);
        handle_event(&mut store, &mut tui, TuiEvent::InputChar('x'), NARROW);
        assert!(!tui.detail_overlay);
        assert!(tui.search_box.buffer.is_empty());

        tui.select(0);
        handle_event(&mut store, &mut tui, TuiEvent::InputChar('x'), WIDE);
        assert_eq!(tui.search_box.buffer, "x");
    }

    #[test]
    fn test_click_outside_list_is_ignored() {
        let (mut store, mut tui) = loaded();
        handle_event(&mut store, &mut tui, TuiEvent::MouseClick(120, 20), WIDE);
        assert!(!tui.detail_overlay);
    }

    #[test]
    fn test_arrow_keys_move_without_opening_overlay() {
        let (mut store, mut tui) = loaded();
        handle_event(&mut store, &mut tui, TuiEvent::CursorDown, NARROW);
        handle_event(&mut store, &mut tui, TuiEvent::CursorDown, NARROW);
        assert_eq!(tui.program_list.selected_index, 1);
        assert!(!tui.detail_overlay);
        handle_event(&mut store, &mut tui, TuiEvent::OpenDetail, NARROW);
        assert!(tui.detail_overlay);
    }

    #[test]
    fn test_filters_popup_applies_term() {
        let (mut store, mut tui) = loaded();
        handle_event(&mut store, &mut tui, TuiEvent::OpenFilters, WIDE);
        assert!(tui.show_filters());
        // Food, Tech, London, Manchester → pick "Tech"
        handle_event(&mut store, &mut tui, TuiEvent::CursorDown, WIDE);
        handle_event(&mut store, &mut tui, TuiEvent::Submit, WIDE);
        assert!(!tui.show_filters());
        assert_eq!(store.searched_information.len(), 1);
        assert_eq!(store.searched_information[0].id, "bootcamp");
    }

    #[test]
    fn test_popup_swallows_keys() {
        let (mut store, mut tui) = loaded();
        handle_event(&mut store, &mut tui, TuiEvent::OpenNewsletter, WIDE);
        handle_event(&mut store, &mut tui, TuiEvent::InputChar('a'), WIDE);
        assert!(tui.search_box.buffer.is_empty());
        handle_event(&mut store, &mut tui, TuiEvent::Escape, WIDE);
        assert!(!tui.show_newsletter());
    }

    #[test]
    fn test_newsletter_success_closes() {
        let (mut store, mut tui) = loaded();
        handle_event(&mut store, &mut tui, TuiEvent::OpenNewsletter, WIDE);
        for c in "amal@example.org".chars() {
            handle_event(&mut store, &mut tui, TuiEvent::InputChar(c), WIDE);
        }
        handle_event(&mut store, &mut tui, TuiEvent::Submit, WIDE);
        assert!(!tui.show_newsletter());
        assert_eq!(store.status_message, "Thanks for subscribing!");
    }

    #[test]
    fn test_popups_are_independent() {
        let (mut store, mut tui) = loaded();
        tui.set_filters_visible(true, &store.information);
        tui.set_newsletter_visible(true);
        handle_event(&mut store, &mut tui, TuiEvent::Escape, WIDE);
        assert!(!tui.show_newsletter());
        assert!(tui.show_filters());
    }

    #[test]
    fn test_cycle_sort() {
        let (mut store, mut tui) = loaded();
        handle_event(&mut store, &mut tui, TuiEvent::CycleSort, WIDE);
        assert_eq!(tui.sort_order, SortOrder::TopRating);
        assert_eq!(store.status_message, "Sort: Top rating");
        handle_event(&mut store, &mut tui, TuiEvent::CycleSort, WIDE);
        assert_eq!(tui.sort_order, SortOrder::MostRecent);
    }

    #[test]
    fn test_fresh_load_displays_in_source_order() {
        let (mut store, mut tui) = loaded_with_review();
        assert_eq!(displayed_ids(&store, &tui), vec!["bakery", "bootcamp"]);

        // Reset also comes back in source order.
        type_query(&mut store, &mut tui, "training");
        handle_event(&mut store, &mut tui, TuiEvent::Submit, WIDE);
        handle_event(&mut store, &mut tui, TuiEvent::ResetSearch, WIDE);
        assert_eq!(displayed_ids(&store, &tui), vec!["bakery", "bootcamp"]);

        handle_event(&mut store, &mut tui, TuiEvent::CycleSort, WIDE);
        assert_eq!(displayed_ids(&store, &tui), vec!["bootcamp", "bakery"]);
    }

    #[test]
    fn test_cycle_sort_keeps_selected_program() {
        let (mut store, mut tui) = loaded_with_review();
        tui.select(0);
        handle_event(&mut store, &mut tui, TuiEvent::CycleSort, WIDE);
        assert_eq!(tui.program_list.selected_index, 1);
        let selected = &tui.displayed_programs(&store)[tui.program_list.selected_index];
        assert_eq!(selected.id, "bakery");
    }

    #[test]
    fn test_narrow_overlay_blocks_search_input() {
        let (mut store, mut tui) = loaded();
        tui.select(1);
        for c in "london".chars() {
            handle_event(&mut store, &mut tui, TuiEvent::InputChar(c), NARROW);
        }
        handle_event(&mut store, &mut tui, TuiEvent::Backspace, NARROW);
        assert!(tui.search_box.buffer.is_empty());
        handle_event(&mut store, &mut tui, TuiEvent::Paste("tech".into()), NARROW);
        handle_event(&mut store, &mut tui, TuiEvent::Submit, NARROW);
        assert!(tui.detail_overlay);
        assert!(store.searched_information.is_empty());
        assert_eq!(tui.displayed_programs(&store)[1].id, "bootcamp");

        // Scrolling still reaches the card.
        handle_event(&mut store, &mut tui, TuiEvent::ScrollDown, NARROW);
        assert!(tui.detail_overlay);
    }

    #[test]
    fn test_clicks_ignored_while_loading() {
        let (mut store, mut tui) = loaded();
        handle_event(&mut store, &mut tui, TuiEvent::Reload, WIDE);
        assert!(store.is_loading);
        let list = ui::compute_areas(WIDE, 100).list;
        handle_event(&mut store, &mut tui, TuiEvent::MouseClick(2, list.y + 1), WIDE);
        assert!(!tui.detail_overlay);
    }

    #[test]
    fn test_reload_and_quit_effects() {
        let (mut store, mut tui) = loaded();
        assert_eq!(
            handle_event(&mut store, &mut tui, TuiEvent::Reload, WIDE),
            Effect::FetchPrograms
        );
        assert!(store.is_loading);
        assert_eq!(
            handle_event(&mut store, &mut tui, TuiEvent::ForceQuit, WIDE),
            Effect::Quit
        );
    }

    #[tokio::test]
    async fn test_spawn_load_delivers_programs() {
        let (tx, rx) = mpsc::channel();
        spawn_load(Arc::new(StaticSource(sample_programs())), tx)
            .await
            .unwrap();
        match rx.try_recv() {
            Ok(Action::SetAllPrograms(programs)) => assert_eq!(programs.len(), 2),
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_spawn_load_reports_failure() {
        let (tx, rx) = mpsc::channel();
        spawn_load(Arc::new(FailingSource), tx).await.unwrap();
        let mut store = Store::new();
        update(&mut store, Action::Activate);
        let action = rx.try_recv().unwrap();
        assert!(matches!(action, Action::LoadFailed(ref m) if m.contains("connection refused")));
        update(&mut store, action);
        assert!(store.is_loading);
    }

    #[tokio::test]
    async fn test_spawn_load_survives_dropped_receiver() {
        let (tx, rx) = mpsc::channel();
        drop(rx);
        let result = spawn_load(Arc::new(StaticSource(sample_programs())), tx).await;
        assert!(result.is_ok());
    }
}
