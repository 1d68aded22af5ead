//! Generate Query page component

use leptos::prelude::*;

/// Natural-language to SQL query generation
#[component]
pub fn Insight() -> impl IntoView {
    let (question, set_question) = signal(String::new());

    view! {
        <div class="page insight-page">
            <h2>"Generate Query"</h2>
            <p class="page-description">
                "Describe the data you need and the query service drafts the SQL."
            </p>
            <div class="page-content">
                <textarea
                    class="question-input"
                    placeholder="e.g. monthly active users by region"
                    prop:value=move || question.get()
                    on:input=move |ev| set_question.set(event_target_value(&ev))
                ></textarea>
                <p class="hint">
                    {move || format!("{} characters", question.get().chars().count())}
                </p>
            </div>
        </div>
    }
}
