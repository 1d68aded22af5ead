//! Optimize page component

use leptos::prelude::*;

/// Query optimization page
#[component]
pub fn Optimize() -> impl IntoView {
    view! {
        <div class="page optimize-page">
            <h2>"Optimize"</h2>
            <div class="page-content">
                <p>"Paste a query to get a rewritten, cheaper version."</p>
                <p class="hint">"Results come from the optimization service."</p>
            </div>
        </div>
    }
}
