//! Tabbed shell mounted at the root path

use leptos::prelude::*;
use querydash_core::{ShellState, Tab};

use super::tab_view;
use crate::components::{ProjectBadge, TabBar};
use crate::session::BrowserSession;

/// App bar with tabs and project badge, plus the selected view
#[component]
pub fn MainLayout() -> impl IntoView {
    // Session storage is read once here; later writes are not picked up
    let shell = RwSignal::new(ShellState::mount(&BrowserSession));
    let project_id = shell.with_untracked(|s| s.project().project_id().map(str::to_string));

    // Re-selecting the current tab leaves the memo unchanged, so the view stays mounted
    let selected = Memo::new(move |_| shell.with(|s| s.selected_index()));

    let on_select = Callback::new(move |index: usize| {
        shell.update(|s| {
            s.select_tab(index);
        });
    });

    view! {
        <div class="shell">
            <header class="app-bar">
                <TabBar selected on_select />
                <ProjectBadge project_id />
            </header>
            <main class="content">
                {move || Tab::from_index(selected.get()).map(tab_view)}
            </main>
        </div>
    }
}
