//! Leptos UI components

mod project_badge;
mod tab_bar;

pub use project_badge::ProjectBadge;
pub use tab_bar::TabBar;
