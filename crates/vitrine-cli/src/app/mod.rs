//! View controller
//!
//! `AppState` is the single owner of everything the screen shows. Key
//! presses arrive as [`Action`]s; anything that has to touch the outside
//! world (clipboard, browser, preference file) is handed back to the
//! caller as an [`Effect`] so the state machine stays free of I/O.

pub mod keymap;

use std::time::{Duration, Instant};

use tracing::debug;
use vitrine_engine::{ViewQuery, view_indices};
use vitrine_runtime::{Catalog, LoadError, LoadState};
use vitrine_types::{LayoutMode, Product, ThemeMode};

pub use keymap::map_key;

/// Rows moved by PgUp/PgDn.
const PAGE_STEP: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Browse,
    Search,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    StartSearch,
    EndSearch,
    SearchInput(char),
    SearchBackspace,
    SearchClear,
    NextSort,
    PreviousSort,
    NextCategory,
    PreviousCategory,
    /// Position in the category bar, zero based.
    SelectCategory(usize),
    ToggleLayout,
    ToggleTheme,
    SelectNext,
    SelectPrevious,
    PageDown,
    PageUp,
    SelectFirst,
    SelectLast,
    CopyCode,
    OpenLink,
}

/// Side effect requested by an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Put `code` on the clipboard; `product` indexes the full set.
    CopyCode { product: usize, code: String },
    OpenLink(String),
    PersistTheme(ThemeMode),
    Quit,
}

#[derive(Debug, Clone, Copy)]
struct CopyFeedback {
    product: usize,
    until: Instant,
}

pub struct AppState {
    catalog: Catalog,
    load: LoadState,
    query: ViewQuery,
    layout: LayoutMode,
    theme: ThemeMode,
    view: Vec<usize>,
    selected: usize,
    input_mode: InputMode,
    copied: Option<CopyFeedback>,
    feedback_delay: Duration,
    notice: Option<String>,
}

impl AppState {
    /// Fresh session state: still loading, nothing filtered.
    pub fn new(theme: ThemeMode, layout: LayoutMode, feedback_delay: Duration) -> Self {
        Self {
            catalog: Catalog::empty(),
            load: LoadState::Loading,
            query: ViewQuery::default(),
            layout,
            theme,
            view: Vec::new(),
            selected: 0,
            input_mode: InputMode::Browse,
            copied: None,
            feedback_delay,
            notice: None,
        }
    }

    /// Install the outcome of the one-shot load. Later calls are ignored.
    pub fn finish_load(&mut self, result: Result<Catalog, LoadError>) {
        if !self.load.is_loading() {
            return;
        }
        match result {
            Ok(catalog) => {
                self.catalog = catalog;
                self.load = LoadState::Ready;
            }
            Err(err) => {
                self.catalog = Catalog::empty();
                self.load = LoadState::Failed(err);
            }
        }
        self.refresh_view();
    }

    pub fn apply(&mut self, action: Action) -> Option<Effect> {
        self.notice = None;

        match action {
            Action::Quit => return Some(Effect::Quit),
            Action::StartSearch => self.input_mode = InputMode::Search,
            Action::EndSearch => self.input_mode = InputMode::Browse,
            Action::SearchInput(c) => {
                self.query.search.push(c);
                self.refresh_view();
            }
            Action::SearchBackspace => {
                if self.query.search.pop().is_some() {
                    self.refresh_view();
                }
            }
            Action::SearchClear => {
                if !self.query.search.is_empty() {
                    self.query.search.clear();
                    self.refresh_view();
                }
            }
            Action::NextSort => {
                self.query.sort = self.query.sort.next();
                self.refresh_view();
            }
            Action::PreviousSort => {
                self.query.sort = self.query.sort.previous();
                self.refresh_view();
            }
            Action::NextCategory => self.step_category(1),
            Action::PreviousCategory => self.step_category(-1),
            Action::SelectCategory(index) => {
                if let Some(category) = self.catalog.categories().get(index)
                    && *category != self.query.category
                {
                    self.query.category = category.clone();
                    self.refresh_view();
                }
            }
            Action::ToggleLayout => self.layout = self.layout.toggled(),
            Action::ToggleTheme => {
                self.theme = self.theme.toggled();
                return Some(Effect::PersistTheme(self.theme));
            }
            Action::SelectNext => self.move_selection(1),
            Action::SelectPrevious => self.move_selection(-1),
            Action::PageDown => self.move_selection(PAGE_STEP as isize),
            Action::PageUp => self.move_selection(-(PAGE_STEP as isize)),
            Action::SelectFirst => self.selected = 0,
            Action::SelectLast => self.selected = self.view.len().saturating_sub(1),
            Action::CopyCode => {
                let product = self.selected_index()?;
                let code = self.catalog.products()[product].code.as_ref()?;
                return Some(Effect::CopyCode {
                    product,
                    code: code.to_string(),
                });
            }
            Action::OpenLink => {
                let product = self.selected_product()?;
                return Some(Effect::OpenLink(product.link.clone()));
            }
        }

        None
    }

    /// Show the copy confirmation on `product` until the feedback delay passes.
    pub fn confirm_copy(&mut self, product: usize, now: Instant) {
        self.copied = Some(CopyFeedback {
            product,
            until: now + self.feedback_delay,
        });
    }

    /// Drop an elapsed copy confirmation. Returns true if one was cleared.
    pub fn expire_feedback(&mut self, now: Instant) -> bool {
        match self.copied {
            Some(feedback) if now >= feedback.until => {
                self.copied = None;
                true
            }
            _ => false,
        }
    }

    pub fn set_notice(&mut self, message: impl Into<String>) {
        self.notice = Some(message.into());
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load
    }

    pub fn query(&self) -> &ViewQuery {
        &self.query
    }

    pub fn layout(&self) -> LayoutMode {
        self.layout
    }

    pub fn theme(&self) -> ThemeMode {
        self.theme
    }

    pub fn input_mode(&self) -> InputMode {
        self.input_mode
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Current view list, in display order.
    pub fn view(&self) -> impl ExactSizeIterator<Item = &Product> + '_ {
        self.view.iter().map(|i| &self.catalog.products()[*i])
    }

    /// Full-set positions of the current view list.
    pub fn view_indices(&self) -> &[usize] {
        &self.view
    }

    /// Cursor position within the view list, `None` when it is empty.
    pub fn selected(&self) -> Option<usize> {
        (!self.view.is_empty()).then_some(self.selected)
    }

    pub fn selected_product(&self) -> Option<&Product> {
        self.selected_index().map(|i| &self.catalog.products()[i])
    }

    /// Full-set position of the product whose copy confirmation is showing.
    pub fn copied_product(&self) -> Option<usize> {
        self.copied.map(|feedback| feedback.product)
    }

    fn selected_index(&self) -> Option<usize> {
        self.view.get(self.selected).copied()
    }

    fn step_category(&mut self, delta: isize) {
        let categories = self.catalog.categories();
        if categories.is_empty() {
            return;
        }
        let len = categories.len() as isize;
        let current = categories
            .iter()
            .position(|c| *c == self.query.category)
            .unwrap_or(0) as isize;
        let next = (current + delta).rem_euclid(len) as usize;
        self.query.category = categories[next].clone();
        self.refresh_view();
    }

    fn move_selection(&mut self, delta: isize) {
        if self.view.is_empty() {
            return;
        }
        let last = self.view.len() - 1;
        self.selected = self.selected.saturating_add_signed(delta).min(last);
    }

    fn refresh_view(&mut self) {
        self.view = view_indices(self.catalog.products(), &self.query);
        self.selected = 0;
        debug!(
            category = %self.query.category,
            search = %self.query.search,
            sort = %self.query.sort,
            shown = self.view.len(),
            total = self.catalog.len(),
            "View recomputed"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitrine_types::{Product, ProductCode, SortMode};

    fn product(title: &str, price: f64, category: &str, store: &str) -> Product {
        Product {
            title: title.to_string(),
            price,
            old_price: None,
            category: category.to_string(),
            store: store.to_string(),
            code: None,
            link: format!("https://example.com/{}", title.to_lowercase()),
            image: String::new(),
        }
    }

    /// Feed order; the catalog reverses it.
    fn feed() -> Vec<Product> {
        let mut fone = product("Fone", 89.9, "Eletrônicos", "Amazon");
        fone.code = Some(ProductCode::from("FB-01"));
        vec![
            product("Cabo", 19.9, "Eletrônicos", "Shopee"),
            product("Panela", 120.0, "Casa", "Mercado Livre"),
            fone,
        ]
    }

    fn ready_state() -> AppState {
        let mut state = AppState::new(ThemeMode::Light, LayoutMode::Grid, Duration::from_millis(1500));
        state.finish_load(Ok(Catalog::from_feed(feed())));
        state
    }

    fn titles(state: &AppState) -> Vec<&str> {
        state.view().map(|p| p.title.as_str()).collect()
    }

    #[test]
    fn test_initial_view_is_full_set_newest_first() {
        let state = ready_state();
        assert!(matches!(state.load_state(), LoadState::Ready));
        assert_eq!(titles(&state), vec!["Fone", "Panela", "Cabo"]);
        assert_eq!(state.selected(), Some(0));
    }

    #[test]
    fn test_layout_toggle_keeps_view_and_query() {
        let mut state = ready_state();
        state.apply(Action::NextCategory);
        state.apply(Action::StartSearch);
        state.apply(Action::SearchInput('o'));
        state.apply(Action::NextSort);
        let query_before = state.query().clone();
        let view_before = state.view_indices().to_vec();

        assert_eq!(state.apply(Action::ToggleLayout), None);

        assert_eq!(state.layout(), LayoutMode::List);
        assert_eq!(state.query(), &query_before);
        assert_eq!(state.view_indices(), view_before.as_slice());
    }

    #[test]
    fn test_failed_load_shows_error_with_empty_set() {
        let mut state = AppState::new(ThemeMode::Dark, LayoutMode::Grid, Duration::from_millis(1500));
        state.finish_load(Err(LoadError::Status(404)));

        assert!(!state.load_state().is_loading());
        assert!(state.load_state().error().is_some());
        assert!(state.catalog().is_empty());
        assert_eq!(state.view().len(), 0);
        assert_eq!(state.selected(), None);
    }

    #[test]
    fn test_second_load_result_is_ignored() {
        let mut state = ready_state();
        state.finish_load(Err(LoadError::Status(500)));
        assert!(matches!(state.load_state(), LoadState::Ready));
        assert_eq!(state.view().len(), 3);
    }

    #[test]
    fn test_search_editing_refilters() {
        let mut state = ready_state();
        state.apply(Action::StartSearch);
        assert_eq!(state.input_mode(), InputMode::Search);

        for c in "CAB".chars() {
            state.apply(Action::SearchInput(c));
        }
        assert_eq!(titles(&state), vec!["Cabo"]);

        state.apply(Action::SearchBackspace);
        state.apply(Action::SearchBackspace);
        assert_eq!(state.query().search, "C");
        assert_eq!(titles(&state), vec!["Cabo"]);

        state.apply(Action::SearchClear);
        assert_eq!(state.view().len(), 3);

        state.apply(Action::EndSearch);
        assert_eq!(state.input_mode(), InputMode::Browse);
    }

    #[test]
    fn test_search_matches_code() {
        let mut state = ready_state();
        for c in "fb-0".chars() {
            state.apply(Action::SearchInput(c));
        }
        assert_eq!(titles(&state), vec!["Fone"]);
    }

    #[test]
    fn test_category_cycle_wraps() {
        let mut state = ready_state();
        assert_eq!(state.catalog().categories(), &["Todos", "Eletrônicos", "Casa"]);

        state.apply(Action::PreviousCategory);
        assert_eq!(state.query().category, "Casa");
        assert_eq!(titles(&state), vec!["Panela"]);

        state.apply(Action::NextCategory);
        assert_eq!(state.query().category, "Todos");

        state.apply(Action::SelectCategory(1));
        assert_eq!(titles(&state), vec!["Fone", "Cabo"]);

        state.apply(Action::SelectCategory(9));
        assert_eq!(state.query().category, "Eletrônicos");
    }

    #[test]
    fn test_reselecting_active_category_keeps_selection() {
        let mut state = ready_state();
        state.apply(Action::SelectCategory(1));
        state.apply(Action::SelectNext);
        assert_eq!(state.selected(), Some(1));

        state.apply(Action::SelectCategory(1));
        assert_eq!(state.selected(), Some(1));

        state.apply(Action::SelectCategory(0));
        assert_eq!(state.selected(), Some(0));
    }

    #[test]
    fn test_sort_cycle() {
        let mut state = ready_state();
        state.apply(Action::NextSort);
        assert_eq!(state.query().sort, SortMode::PriceAsc);
        assert_eq!(titles(&state), vec!["Cabo", "Fone", "Panela"]);

        state.apply(Action::PreviousSort);
        state.apply(Action::PreviousSort);
        assert_eq!(state.query().sort, SortMode::StoreMl);
        assert_eq!(titles(&state), vec!["Panela", "Fone", "Cabo"]);
    }

    #[test]
    fn test_selection_is_clamped() {
        let mut state = ready_state();
        state.apply(Action::SelectPrevious);
        assert_eq!(state.selected(), Some(0));
        state.apply(Action::PageDown);
        assert_eq!(state.selected(), Some(2));
        state.apply(Action::SelectFirst);
        state.apply(Action::SelectNext);
        assert_eq!(state.selected_product().map(|p| p.title.as_str()), Some("Panela"));
        state.apply(Action::SelectLast);
        assert_eq!(state.selected(), Some(2));
    }

    #[test]
    fn test_copy_requires_code() {
        let mut state = ready_state();
        assert_eq!(
            state.apply(Action::CopyCode),
            Some(Effect::CopyCode {
                product: 0,
                code: "FB-01".to_string()
            })
        );

        state.apply(Action::SelectNext);
        assert_eq!(state.apply(Action::CopyCode), None);
    }

    #[test]
    fn test_copy_feedback_expires_after_delay() {
        let mut state = ready_state();
        let start = Instant::now();
        state.confirm_copy(0, start);
        assert_eq!(state.copied_product(), Some(0));

        assert!(!state.expire_feedback(start + Duration::from_millis(1499)));
        assert_eq!(state.copied_product(), Some(0));

        assert!(state.expire_feedback(start + Duration::from_millis(1500)));
        assert_eq!(state.copied_product(), None);
    }

    #[test]
    fn test_theme_toggle_requests_persistence() {
        let mut state = ready_state();
        assert_eq!(
            state.apply(Action::ToggleTheme),
            Some(Effect::PersistTheme(ThemeMode::Dark))
        );
        assert_eq!(state.theme(), ThemeMode::Dark);
    }

    #[test]
    fn test_open_link_and_quit() {
        let mut state = ready_state();
        assert_eq!(
            state.apply(Action::OpenLink),
            Some(Effect::OpenLink("https://example.com/fone".to_string()))
        );
        assert_eq!(state.apply(Action::Quit), Some(Effect::Quit));
    }

    #[test]
    fn test_notice_clears_on_next_action() {
        let mut state = ready_state();
        state.set_notice("falhou");
        assert_eq!(state.notice(), Some("falhou"));
        state.apply(Action::SelectNext);
        assert_eq!(state.notice(), None);
    }
}
