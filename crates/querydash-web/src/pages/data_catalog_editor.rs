//! Data Catalog Editor page component

use leptos::prelude::*;

#[component]
pub fn DataCatalogEditor() -> impl IntoView {
    view! {
        <div class="page data-catalog-editor-page">
            <h2>"Data Catalog Editor"</h2>
            <div class="page-content">
                <p>"Edit table and column descriptions used for query generation."</p>
            </div>
        </div>
    }
}
