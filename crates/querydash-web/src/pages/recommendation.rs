//! Recommendation page component

use leptos::prelude::*;

/// Rule recommendations produced by the analysis backend
#[component]
pub fn Recommendation() -> impl IntoView {
    view! {
        <div class="page recommendation-page">
            <h2>"Recommendation"</h2>
            <div class="page-content">
                <p>"Recommendations for your project's queries."</p>
                <p class="hint">"Open a rule to see its query details."</p>
            </div>
        </div>
    }
}
