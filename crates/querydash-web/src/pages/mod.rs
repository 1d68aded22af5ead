//! Page components

mod data_catalog_editor;
mod insight;
mod main_layout;
mod optimize;
mod query_details;
mod recommendation;

pub use data_catalog_editor::DataCatalogEditor;
pub use insight::Insight;
pub use main_layout::MainLayout;
pub use optimize::Optimize;
pub use query_details::QueryDetailsPage;
pub use recommendation::Recommendation;

use leptos::prelude::*;
use querydash_core::Tab;

/// Mount the view for `tab`. Each view is self-contained and takes no props.
pub fn tab_view(tab: Tab) -> AnyView {
    match tab {
        Tab::Insight => view! { <Insight /> }.into_any(),
        Tab::Optimize => view! { <Optimize /> }.into_any(),
        Tab::Recommendation => view! { <Recommendation /> }.into_any(),
        Tab::DataCatalogEditor => view! { <DataCatalogEditor /> }.into_any(),
    }
}
