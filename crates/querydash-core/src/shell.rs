//! State owned by the tabbed shell while it is mounted

use crate::session::{ProjectContext, SessionStore};
use crate::tab::{Tab, TabController};

/// Tab selection plus the project context read at mount
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShellState {
    tabs: TabController,
    project: ProjectContext,
}

impl ShellState {
    /// Build the state for a fresh mount: first tab selected, session read once
    pub fn mount(store: &impl SessionStore) -> Self {
        Self {
            tabs: TabController::new(),
            project: ProjectContext::read(store),
        }
    }

    pub fn select_tab(&mut self, index: usize) -> usize {
        self.tabs.select(index)
    }

    pub fn selected_index(&self) -> usize {
        self.tabs.current()
    }

    /// The single view to mount in the content area
    pub fn active_view(&self) -> Option<Tab> {
        self.tabs.active()
    }

    pub fn project(&self) -> &ProjectContext {
        &self.project
    }

    pub fn project_label(&self) -> Option<String> {
        self.project.display_label()
    }
}
