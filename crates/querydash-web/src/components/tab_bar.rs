//! Tab bar for the shell's app bar

use leptos::prelude::*;
use querydash_core::Tab;

/// One button per [`Tab`], in catalogue order
#[component]
pub fn TabBar(
    /// Index of the selected tab
    #[prop(into)]
    selected: Signal<usize>,
    /// Called with the index of the clicked tab
    on_select: Callback<usize>,
) -> impl IntoView {
    view! {
        <nav class="tab-bar" role="tablist" aria-label="tabs">
            {Tab::all()
                .iter()
                .map(|tab| {
                    let index = tab.index();
                    view! {
                        <button
                            id=format!("tab-{}", tab.slug())
                            class="tab"
                            class:tab-active=move || selected.get() == index
                            role="tab"
                            aria-selected=move || (selected.get() == index).to_string()
                            on:click=move |_| on_select.run(index)
                        >
                            {tab.label()}
                        </button>
                    }
                })
                .collect_view()}
        </nav>
    }
}
