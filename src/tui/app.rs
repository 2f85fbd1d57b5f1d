//! TUI application state and event handling.
//!
//! The `App` owns the [`Session`] (cart count and search history) along with all
//! presentation state:
//!
//! - **Product list**: showcase cards fuzzy-filtered by the search input via `nucleo`
//! - **Suggestions**: dropdown under the search bar once the input has 2+ characters
//! - **Pending search**: simulated latency with cancellation, polled every loop iteration
//! - **Add to cart**: opening a product asks for confirmation before the cart changes
//! - **Toasts**: transient notifications with automatic expiry
//! - **Menu**: department panel, toggled on narrow terminals and always shown on wide ones
//!
//! Every handler runs synchronously on the UI thread. Session writes complete before
//! the handler returns.

use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::Result;
use nucleo::{Config, Nucleo};
use ratatui::Terminal;
use ratatui::backend::Backend;
use tracing::debug;

use super::events::{Action, poll_event};
use super::layout::MOBILE_BREAKPOINT_COLS;
use super::rendering::{RenderState, render_ui};
use crate::catalog::{ProductCard, SHOWCASE};
use crate::notifications::{Severity, ToastQueue};
use crate::search::{
    MAX_QUERY_LEN, PendingSearch, SEARCH_LATENCY, SearchPoll, suggestions, validate_query,
};
use crate::state::Session;
use crate::storage::KeyValueStore;

pub struct App<S> {
    session: Session<S>,
    toasts: ToastQueue,
    nucleo: Nucleo<ProductCard>,
    selected_idx: usize,
    search_query: String,
    suggestions: Vec<&'static str>,
    pending_search: Option<PendingSearch>,
    search_latency: Duration,
    // Product waiting for the add-to-cart confirmation
    confirm_add: Option<&'static str>,
    menu_open: bool,
    terminal_width: u16,
    should_quit: bool,
    // Dirty state tracking for efficient rendering
    needs_redraw: bool,
    last_draw_time: Instant,
}

impl<S: KeyValueStore> App<S> {
    pub fn new(session: Session<S>) -> Self {
        let nucleo = Nucleo::new(Config::DEFAULT, Arc::new(|| {}), None, 1);

        let injector = nucleo.injector();
        for card in SHOWCASE {
            injector.push(card.clone(), |card, cols| {
                cols[0] = card.title.into();
            });
        }

        Self {
            session,
            toasts: ToastQueue::new(),
            nucleo,
            selected_idx: 0,
            search_query: String::new(),
            suggestions: Vec::new(),
            pending_search: None,
            search_latency: SEARCH_LATENCY,
            confirm_add: None,
            menu_open: false,
            terminal_width: 0,
            should_quit: false,
            needs_redraw: true,
            last_draw_time: Instant::now(),
        }
    }

    /// Override the simulated search delay
    pub fn with_search_latency(mut self, latency: Duration) -> Self {
        self.search_latency = latency;
        self
    }

    pub fn session(&self) -> &Session<S> {
        &self.session
    }

    pub fn into_session(self) -> Session<S> {
        self.session
    }

    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        let size = terminal.size()?;
        self.resize(size.width);

        while !self.should_quit {
            self.tick(Instant::now());
            self.nucleo.tick(10);

            let matched_items = self.collect_matched_items();
            let matched_count = matched_items.len();

            // Draw if dirty or if it's been >100ms (for terminal resize handling)
            let now = Instant::now();
            let elapsed = now.duration_since(self.last_draw_time);
            if self.needs_redraw || elapsed >= Duration::from_millis(100) {
                terminal.draw(|f| {
                    let state = RenderState {
                        search_query: &self.search_query,
                        suggestions: &self.suggestions,
                        cart_count: self.session.count(),
                        history: self.session.history().entries(),
                        show_menu: self.menu_visible(),
                        toasts: self.toasts.visible(),
                        searching: self.pending_search.as_ref().map(PendingSearch::query),
                        confirming: self.confirm_add,
                        total_products: SHOWCASE.len(),
                    };
                    render_ui(f, &matched_items, self.selected_idx, &state);
                })?;
                self.needs_redraw = false;
                self.last_draw_time = now;
            }

            let action = poll_event(Duration::from_millis(100))?;
            self.handle_action(action, matched_count);
        }

        Ok(())
    }

    /// Expire toasts and settle the pending search
    fn tick(&mut self, now: Instant) {
        if self.toasts.expire(now) {
            self.needs_redraw = true;
        }

        let poll = match &self.pending_search {
            Some(search) => search.poll(now),
            None => return,
        };
        match poll {
            SearchPoll::Pending => {}
            SearchPoll::Completed(query) => {
                self.pending_search = None;
                self.notify(format!("Found results for: {}", query), Severity::Success);
            }
            SearchPoll::Cancelled => {
                self.pending_search = None;
                self.needs_redraw = true;
            }
        }
    }

    fn collect_matched_items(&self) -> Vec<&ProductCard> {
        let snapshot = self.nucleo.snapshot();
        snapshot.matched_items(..snapshot.matched_item_count()).map(|item| item.data).collect()
    }

    fn handle_action(&mut self, action: Action, total_items: usize) {
        if self.confirm_add.is_some() {
            self.handle_confirmation(action);
            return;
        }

        match action {
            Action::Quit => self.should_quit = true,
            Action::Escape => self.escape(),
            Action::MoveUp => self.move_selection(-1, total_items),
            Action::MoveDown => self.move_selection(1, total_items),
            Action::PageUp => self.move_selection(-10, total_items),
            Action::PageDown => self.move_selection(10, total_items),
            Action::Submit => self.perform_search(),
            Action::AcceptSuggestion => self.accept_suggestion(),
            Action::AddToCart => self.open_selected_product(),
            Action::OpenCart => {
                let count = self.session.count();
                self.notify(format!("Cart has {} items", count), Severity::Info);
            }
            Action::FocusSearch => self.clear_search(),
            Action::LoadMore => self.notify("Loading more products...", Severity::Info),
            Action::DismissToast => {
                if self.toasts.dismiss_newest() {
                    self.needs_redraw = true;
                }
            }
            Action::ToggleMenu => self.toggle_menu(),
            Action::Input(c) => self.update_search(c),
            Action::DeleteChar => self.delete_char(),
            Action::Resize(width) => self.resize(width),
            Action::None => {}
        }
    }

    fn notify(&mut self, message: impl Into<String>, severity: Severity) {
        self.toasts.push(message, severity);
        self.needs_redraw = true;
    }

    /// Esc peels back one layer: menu, then pending search, then input, then the app
    fn escape(&mut self) {
        if self.menu_open {
            self.close_menu();
        } else if let Some(search) = self.pending_search.take() {
            search.cancel();
            self.notify("Search cancelled", Severity::Info);
        } else if !self.search_query.is_empty() {
            self.clear_search();
        } else {
            self.should_quit = true;
        }
    }

    fn perform_search(&mut self) {
        let Some(query) = validate_query(&self.search_query).map(str::to_string) else {
            self.notify("Please enter a search term", Severity::Warning);
            return;
        };

        self.session.record_query(&query);
        self.notify(format!("Searching for: {}", query), Severity::Info);

        // A new search supersedes the one in flight
        if let Some(previous) = self.pending_search.take() {
            previous.cancel();
        }
        debug!(query = %query, "search started");
        self.pending_search = Some(PendingSearch::start(query, Instant::now(), self.search_latency));
        self.suggestions.clear();
    }

    fn accept_suggestion(&mut self) {
        let Some(suggestion) = self.suggestions.first().copied() else {
            return;
        };
        self.search_query = suggestion.to_string();
        self.update_nucleo_pattern();
        self.selected_idx = 0;
        self.perform_search();
    }

    fn open_selected_product(&mut self) {
        let title = self.collect_matched_items().get(self.selected_idx).map(|card| card.title);
        let Some(title) = title else {
            self.notify("No product selected", Severity::Error);
            return;
        };

        self.notify(format!("Opening: {}", title), Severity::Info);
        self.confirm_add = Some(title);
    }

    /// `y` or Enter adds the opened product; any other key declines
    fn handle_confirmation(&mut self, action: Action) {
        match action {
            Action::Input('y' | 'Y') | Action::Submit => {
                self.confirm_add = None;
                self.session.add_one();
                self.notify("Item added to cart!", Severity::Success);
            }
            Action::Quit => self.should_quit = true,
            Action::Resize(width) => self.resize(width),
            Action::None => {}
            _ => {
                self.confirm_add = None;
                self.needs_redraw = true;
            }
        }
    }

    fn menu_visible(&self) -> bool {
        self.menu_open || self.terminal_width > MOBILE_BREAKPOINT_COLS
    }

    fn toggle_menu(&mut self) {
        // Wide terminals always show the menu
        if self.terminal_width > MOBILE_BREAKPOINT_COLS {
            return;
        }
        self.menu_open = !self.menu_open;
        self.needs_redraw = true;
    }

    fn close_menu(&mut self) {
        self.menu_open = false;
        self.needs_redraw = true;
    }

    fn resize(&mut self, width: u16) {
        self.terminal_width = width;
        if width > MOBILE_BREAKPOINT_COLS && self.menu_open {
            self.close_menu();
        }
        self.needs_redraw = true;
    }

    fn move_selection(&mut self, delta: isize, total: usize) {
        if total == 0 {
            self.selected_idx = 0;
            return;
        }

        let old_idx = self.selected_idx;
        let new_idx = (self.selected_idx as isize + delta).max(0) as usize;
        self.selected_idx = new_idx.min(total - 1);

        if old_idx != self.selected_idx {
            self.needs_redraw = true;
        }
    }

    fn update_search(&mut self, c: char) {
        if self.search_query.chars().count() < MAX_QUERY_LEN {
            self.search_query.push(c);
            self.on_query_changed();
        }
    }

    fn delete_char(&mut self) {
        if self.search_query.pop().is_some() {
            self.on_query_changed();
        }
    }

    fn clear_search(&mut self) {
        self.search_query.clear();
        self.on_query_changed();
    }

    fn on_query_changed(&mut self) {
        self.update_nucleo_pattern();
        self.suggestions = suggestions(&self.search_query);
        self.selected_idx = 0;
        self.needs_redraw = true;
    }

    fn update_nucleo_pattern(&mut self) {
        self.nucleo.pattern.reparse(
            0,
            &self.search_query,
            nucleo::pattern::CaseMatching::Smart,
            nucleo::pattern::Normalization::Smart,
            false,
        );
        self.nucleo.tick(10);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{CART_COUNT_KEY, MemoryStore, SEARCH_HISTORY_KEY};

    fn create_test_app() -> App<MemoryStore> {
        let mut app = App::new(Session::load(MemoryStore::new()));
        app.nucleo.tick(10);
        app
    }

    fn type_query(app: &mut App<MemoryStore>, text: &str) {
        for c in text.chars() {
            app.handle_action(Action::Input(c), SHOWCASE.len());
        }
    }

    fn toast_messages(app: &App<MemoryStore>) -> Vec<String> {
        app.toasts.visible().iter().map(|t| t.message.clone()).collect()
    }

    #[test]
    fn test_app_new_initializes_state() {
        let app = create_test_app();

        assert_eq!(app.selected_idx, 0);
        assert_eq!(app.search_query, "");
        assert!(app.suggestions.is_empty());
        assert!(app.pending_search.is_none());
        assert!(!app.should_quit);
        assert_eq!(app.collect_matched_items().len(), SHOWCASE.len());
    }

    #[test]
    fn test_move_selection_bounds() {
        let mut app = create_test_app();

        app.move_selection(-1, 3);
        assert_eq!(app.selected_idx, 0);

        app.move_selection(1, 3);
        app.move_selection(10, 3);
        assert_eq!(app.selected_idx, 2);

        app.move_selection(1, 0);
        assert_eq!(app.selected_idx, 0);
    }

    #[test]
    fn test_typing_updates_suggestions() {
        let mut app = create_test_app();

        type_query(&mut app, "p");
        assert!(app.suggestions.is_empty());

        type_query(&mut app, "r");
        assert_eq!(app.suggestions, vec!["MacBook Pro", "iPad Pro"]);

        app.handle_action(Action::DeleteChar, SHOWCASE.len());
        assert!(app.suggestions.is_empty());
    }

    #[test]
    fn test_typing_filters_products() {
        let mut app = create_test_app();
        type_query(&mut app, "espresso");

        let matched = app.collect_matched_items();
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].title, "Espresso Machine");
    }

    #[test]
    fn test_query_length_limit() {
        let mut app = create_test_app();
        type_query(&mut app, &"x".repeat(MAX_QUERY_LEN + 10));
        assert_eq!(app.search_query.chars().count(), MAX_QUERY_LEN);
    }

    #[test]
    fn test_blank_search_warns_without_recording() {
        let mut app = create_test_app();
        type_query(&mut app, "   ");

        app.handle_action(Action::Submit, SHOWCASE.len());

        assert_eq!(toast_messages(&app), ["Please enter a search term"]);
        assert_eq!(app.toasts.newest().unwrap().severity, Severity::Warning);
        assert!(app.session.history().is_empty());
        assert!(app.pending_search.is_none());
    }

    #[test]
    fn test_search_records_and_completes() {
        let mut app = create_test_app().with_search_latency(Duration::ZERO);
        type_query(&mut app, "  AirPods ");

        app.handle_action(Action::Submit, SHOWCASE.len());
        assert_eq!(app.session.history().entries(), ["AirPods"]);
        assert_eq!(toast_messages(&app), ["Searching for: AirPods"]);
        assert!(app.pending_search.is_some());

        app.tick(Instant::now());
        assert!(app.pending_search.is_none());
        assert_eq!(toast_messages(&app), ["Searching for: AirPods", "Found results for: AirPods"]);
        assert_eq!(app.toasts.newest().unwrap().severity, Severity::Success);

        let stored = app.session.store().get_item(SEARCH_HISTORY_KEY).unwrap();
        assert_eq!(stored.as_deref(), Some(r#"["AirPods"]"#));
    }

    #[test]
    fn test_search_waits_for_latency() {
        let mut app = create_test_app();
        type_query(&mut app, "iPad");
        app.handle_action(Action::Submit, SHOWCASE.len());

        app.tick(Instant::now());
        assert!(app.pending_search.is_some());
        assert_eq!(app.toasts.len(), 1);
    }

    #[test]
    fn test_new_search_supersedes_pending() {
        let mut app = create_test_app();
        type_query(&mut app, "first");
        app.handle_action(Action::Submit, SHOWCASE.len());
        let first_token = app.pending_search.as_ref().unwrap().token();

        app.handle_action(Action::FocusSearch, SHOWCASE.len());
        type_query(&mut app, "second");
        app.handle_action(Action::Submit, SHOWCASE.len());

        assert!(first_token.is_cancelled());
        assert_eq!(app.pending_search.as_ref().unwrap().query(), "second");
        assert_eq!(app.session.history().entries(), ["second", "first"]);
    }

    #[test]
    fn test_escape_cancels_pending_search() {
        let mut app = create_test_app().with_search_latency(Duration::ZERO);
        type_query(&mut app, "AirPods");
        app.handle_action(Action::Submit, SHOWCASE.len());

        app.handle_action(Action::Escape, SHOWCASE.len());
        assert!(app.pending_search.is_none());

        app.tick(Instant::now());
        assert!(!toast_messages(&app).iter().any(|m| m.starts_with("Found results")));
        // Query survives; a second Esc clears it
        assert_eq!(app.search_query, "AirPods");
        app.handle_action(Action::Escape, SHOWCASE.len());
        assert_eq!(app.search_query, "");
        assert!(!app.should_quit);
        app.handle_action(Action::Escape, SHOWCASE.len());
        assert!(app.should_quit);
    }

    #[test]
    fn test_accept_suggestion_searches() {
        let mut app = create_test_app();
        type_query(&mut app, "sam");

        app.handle_action(Action::AcceptSuggestion, SHOWCASE.len());

        assert_eq!(app.search_query, "Samsung Galaxy");
        assert!(app.suggestions.is_empty());
        assert_eq!(app.session.history().entries(), ["Samsung Galaxy"]);
    }

    #[test]
    fn test_accept_suggestion_without_suggestions() {
        let mut app = create_test_app();
        app.handle_action(Action::AcceptSuggestion, SHOWCASE.len());
        assert!(app.session.history().is_empty());
        assert!(app.toasts.is_empty());
    }

    #[test]
    fn test_add_to_cart_persists() {
        let mut app = create_test_app();
        app.handle_action(Action::MoveDown, SHOWCASE.len());

        app.handle_action(Action::AddToCart, SHOWCASE.len());
        app.handle_action(Action::Input('y'), SHOWCASE.len());
        app.handle_action(Action::AddToCart, SHOWCASE.len());
        app.handle_action(Action::Submit, SHOWCASE.len());

        assert_eq!(app.session.count(), 2);
        assert_eq!(app.session.store().get_item(CART_COUNT_KEY).unwrap().as_deref(), Some("2"));
        let messages = toast_messages(&app);
        assert_eq!(messages[0], format!("Opening: {}", SHOWCASE[1].title));
        assert_eq!(messages[1], "Item added to cart!");
        // Confirming must not have typed into the search box or started a search
        assert_eq!(app.search_query, "");
        assert!(app.pending_search.is_none());
    }

    #[test]
    fn test_opening_product_waits_for_confirmation() {
        let mut app = create_test_app();

        app.handle_action(Action::AddToCart, SHOWCASE.len());
        assert_eq!(app.confirm_add, Some(SHOWCASE[0].title));
        assert_eq!(app.session.count(), 0);
        assert_eq!(app.session.store().get_item(CART_COUNT_KEY).unwrap(), None);
    }

    #[test]
    fn test_declining_confirmation_leaves_cart() {
        let mut app = create_test_app();

        app.handle_action(Action::AddToCart, SHOWCASE.len());
        app.handle_action(Action::Input('n'), SHOWCASE.len());
        assert!(app.confirm_add.is_none());
        assert_eq!(app.search_query, "");

        app.handle_action(Action::AddToCart, SHOWCASE.len());
        app.handle_action(Action::Escape, SHOWCASE.len());
        assert!(app.confirm_add.is_none());
        assert!(!app.should_quit);

        assert_eq!(app.session.count(), 0);
        assert!(!toast_messages(&app).iter().any(|m| m == "Item added to cart!"));
    }

    #[test]
    fn test_add_to_cart_with_no_matches() {
        let mut app = create_test_app();
        type_query(&mut app, "zzzzzz");

        app.handle_action(Action::AddToCart, 0);

        assert_eq!(app.session.count(), 0);
        assert_eq!(toast_messages(&app), ["No product selected"]);
    }

    #[test]
    fn test_open_cart_reports_count() {
        let mut store = MemoryStore::new();
        store.set_item(CART_COUNT_KEY, "4").unwrap();
        let mut app = App::new(Session::load(store));

        app.handle_action(Action::OpenCart, SHOWCASE.len());
        assert_eq!(toast_messages(&app), ["Cart has 4 items"]);
    }

    #[test]
    fn test_load_more_and_dismiss() {
        let mut app = create_test_app();
        app.handle_action(Action::LoadMore, SHOWCASE.len());
        assert_eq!(toast_messages(&app), ["Loading more products..."]);

        app.handle_action(Action::DismissToast, SHOWCASE.len());
        assert!(app.toasts.is_empty());
    }

    #[test]
    fn test_toasts_expire_on_tick() {
        let mut app = create_test_app();
        app.handle_action(Action::LoadMore, SHOWCASE.len());

        app.needs_redraw = false;
        app.tick(Instant::now() + Duration::from_secs(4));
        assert!(app.toasts.is_empty());
        assert!(app.needs_redraw);
    }

    #[test]
    fn test_menu_toggle_on_narrow_terminal() {
        let mut app = create_test_app();
        app.resize(80);
        assert!(!app.menu_visible());

        app.handle_action(Action::ToggleMenu, SHOWCASE.len());
        assert!(app.menu_visible());

        app.handle_action(Action::ToggleMenu, SHOWCASE.len());
        assert!(!app.menu_visible());
    }

    #[test]
    fn test_escape_closes_menu_first() {
        let mut app = create_test_app();
        app.resize(80);
        type_query(&mut app, "chair");
        app.handle_action(Action::ToggleMenu, SHOWCASE.len());

        app.handle_action(Action::Escape, SHOWCASE.len());
        assert!(!app.menu_open);
        assert_eq!(app.search_query, "chair");
    }

    #[test]
    fn test_resize_to_wide_closes_menu() {
        let mut app = create_test_app();
        app.resize(80);
        app.handle_action(Action::ToggleMenu, SHOWCASE.len());
        assert!(app.menu_open);

        app.handle_action(Action::Resize(140), SHOWCASE.len());
        assert!(!app.menu_open);
        // The wide layout shows the menu anyway
        assert!(app.menu_visible());

        app.handle_action(Action::Resize(80), SHOWCASE.len());
        assert!(!app.menu_visible());
    }

    #[test]
    fn test_toggle_ignored_on_wide_terminal() {
        let mut app = create_test_app();
        app.resize(140);
        app.handle_action(Action::ToggleMenu, SHOWCASE.len());
        assert!(!app.menu_open);
    }

    #[test]
    fn test_quit() {
        let mut app = create_test_app();
        app.handle_action(Action::Quit, SHOWCASE.len());
        assert!(app.should_quit);
    }
}
