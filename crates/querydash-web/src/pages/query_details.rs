//! Query details page component

use leptos::prelude::*;
use leptos_router::components::A;
use querydash_core::QueryDetailsParams;

/// Standalone details view for one recommendation rule.
///
/// The path segments arrive exactly as they appeared in the URL.
#[component]
pub fn QueryDetailsPage(params: QueryDetailsParams) -> impl IntoView {
    let QueryDetailsParams {
        rule_id,
        recommendation,
        rule_title,
    } = params;

    view! {
        <div class="page query-details-page">
            <A href="/" attr:class="back-link">"← Back to Dashboard"</A>
            <h2>{rule_title.clone()}</h2>
            <div class="details-grid">
                <span class="details-label">"Rule ID"</span>
                <span class="details-value">{rule_id}</span>
                <span class="details-label">"Recommendation"</span>
                <span class="details-value">{recommendation}</span>
                <span class="details-label">"Rule"</span>
                <span class="details-value">{rule_title}</span>
            </div>
        </div>
    }
}
