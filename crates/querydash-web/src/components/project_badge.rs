//! Project identifier badge

use leptos::prelude::*;

/// Shows `Project ID: <id>`; renders nothing at all without an id
#[component]
pub fn ProjectBadge(project_id: Option<String>) -> impl IntoView {
    project_id.map(|id| {
        view! {
            <div class="project-badge">
                <span>"Project ID:"</span>
                <span class="project-badge-id">{id}</span>
            </div>
        }
    })
}
