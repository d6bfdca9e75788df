use folio_core::{Catalog, Publication, Selection, SelectionEvent};
use ratatui::Frame;

use crate::action::Action;
use crate::theme::{Theme, ThemeKind};
use crate::view;


/// Browser state. Every action that touches the selection recomputes
/// `visible` before returning, so drawing never sees a stale view.
pub struct App {
    pub catalog: Catalog,
    pub selection: Selection,
    /// Indices into `catalog.publications`, in display order.
    pub visible: Vec<usize>,
    pub cursor: usize,
    pub theme_kind: ThemeKind,
    pub theme: Theme,
    pub show_help: bool,
    pub should_quit: bool,
}

impl App {
    pub fn new(catalog: Catalog, selection: Selection, theme_kind: ThemeKind) -> Self {
        let mut app = Self {
            catalog,
            selection,
            visible: Vec::new(),
            cursor: 0,
            theme_kind,
            theme: theme_kind.theme(),
            show_help: false,
            should_quit: false,
        };
        app.refresh();
        app
    }

    /// Recompute the visible indices from the current selection.
    fn refresh(&mut self) {
        let view = self.catalog.view(&self.selection);
        self.visible = view
            .publications
            .iter()
            .filter_map(|p| {
                self.catalog
                    .publications
                    .iter()
                    .position(|q| std::ptr::eq(q, *p))
            })
            .collect();
        self.cursor = 0;
        tracing::debug!(
            filter = %self.selection.filter,
            sort = %self.selection.sort,
            shown = self.visible.len(),
            "view recomputed"
        );
    }

    fn apply(&mut self, event: SelectionEvent) {
        self.selection = std::mem::take(&mut self.selection).apply(event);
        self.refresh();
    }

    pub fn selected(&self) -> Option<&Publication> {
        self.visible
            .get(self.cursor)
            .map(|&i| &self.catalog.publications[i])
    }

    /// Publications in display order.
    pub fn rows(&self) -> impl Iterator<Item = &Publication> {
        self.visible.iter().map(|&i| &self.catalog.publications[i])
    }

    pub fn update(&mut self, action: Action) {
        // While help is open, only closing it or quitting does anything.
        if self.show_help {
            match action {
                Action::Quit => self.should_quit = true,
                Action::ToggleHelp | Action::ResetFilter => self.show_help = false,
                _ => {}
            }
            return;
        }

        match action {
            Action::Quit => self.should_quit = true,
            Action::MoveDown => {
                if self.cursor + 1 < self.visible.len() {
                    self.cursor += 1;
                }
            }
            Action::MoveUp => self.cursor = self.cursor.saturating_sub(1),
            Action::GoTop => self.cursor = 0,
            Action::GoBottom => self.cursor = self.visible.len().saturating_sub(1),
            Action::CycleFilter => {
                let next = self.catalog.next_filter(&self.selection.filter);
                self.apply(SelectionEvent::SetFilter(next));
            }
            Action::ResetFilter => {
                self.apply(SelectionEvent::SetFilter(Default::default()));
            }
            Action::ToggleSort => {
                let next = self.selection.sort.toggle();
                self.apply(SelectionEvent::SetSort(next));
            }
            Action::ToggleTheme => {
                self.theme_kind = self.theme_kind.toggle();
                self.theme = self.theme_kind.theme();
            }
            Action::ToggleHelp => self.show_help = true,
            Action::Resize | Action::None => {}
        }
    }

    pub fn view(&self, f: &mut Frame) {
        view::list::render(f, self);
        if self.show_help {
            view::help::render(f, &self.theme);
        }
    }
}
