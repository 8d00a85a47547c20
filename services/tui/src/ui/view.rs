//! services/tui/src/ui/view.rs
//!
//! Pure view state: focus, cursors, the active modal, and the transient
//! status message. Everything here is derived presentation state; the
//! application truth lives in `tooldex_core::Directory`.

use ratatui::widgets::ListState;
use tooldex_core::domain::{Category, ToolId};
use tooldex_core::Directory;

use super::forms::{AuthForm, TagBrowser, ToolForm};

/// Which pane receives Up/Down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    Sidebar,
    #[default]
    Results,
}

/// The modal overlay currently on screen, if any.
#[derive(Default)]
pub enum Modal {
    #[default]
    None,
    Auth(AuthForm),
    Tool(ToolForm),
    Tags(TagBrowser),
    Detail(ToolId),
}

/// All view-only state for the running UI.
pub struct ViewState {
    pub focus: Focus,
    /// 0 selects "All Tools", 1.. index into `Category::ALL`.
    pub sidebar_cursor: usize,
    pub list_state: ListState,
    pub searching: bool,
    pub modal: Modal,
    pub status: Option<String>,
}

impl Default for ViewState {
    fn default() -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            focus: Focus::default(),
            sidebar_cursor: 0,
            list_state,
            searching: false,
            modal: Modal::None,
            status: None,
        }
    }
}

impl ViewState {
    /// Keeps the result selection inside the visible list, which shrinks
    /// and grows as criteria change.
    pub fn clamp_selection(&mut self, visible_len: usize) {
        if visible_len == 0 {
            self.list_state.select(None);
        } else {
            let selected = self.list_state.selected().unwrap_or(0);
            self.list_state.select(Some(selected.min(visible_len - 1)));
        }
    }

    pub fn select_next(&mut self, visible_len: usize) {
        if visible_len == 0 {
            return;
        }
        let next = match self.list_state.selected() {
            Some(i) if i + 1 < visible_len => i + 1,
            Some(i) => i,
            None => 0,
        };
        self.list_state.select(Some(next));
    }

    pub fn select_prev(&mut self) {
        let prev = self.list_state.selected().unwrap_or(0).saturating_sub(1);
        self.list_state.select(Some(prev));
    }

    /// The id of the highlighted result, under the current criteria.
    pub fn selected_tool(&self, directory: &Directory) -> Option<ToolId> {
        let visible = directory.visible();
        self.list_state
            .selected()
            .and_then(|i| visible.get(i))
            .map(|tool| tool.id)
    }

    /// The category the sidebar cursor denotes; `None` is "All Tools".
    pub fn cursor_category(&self) -> Option<Category> {
        if self.sidebar_cursor == 0 {
            None
        } else {
            Category::ALL.get(self.sidebar_cursor - 1).copied()
        }
    }

    pub fn sidebar_up(&mut self) {
        self.sidebar_cursor = self.sidebar_cursor.saturating_sub(1);
    }

    pub fn sidebar_down(&mut self) {
        if self.sidebar_cursor < Category::ALL.len() {
            self.sidebar_cursor += 1;
        }
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status = Some(message.into());
    }
}
