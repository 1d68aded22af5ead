//! Main Leptos App component with SPA router

use leptos::prelude::*;
use leptos_router::{
    components::{Redirect, Router},
    hooks::use_location,
    NavigateOptions,
};
use querydash_core::{Resolution, Route, RouteTable};
use tracing::debug;

use crate::pages::{MainLayout, QueryDetailsPage};

/// Main App component
#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <Dispatcher />
        </Router>
    }
}

/// Mounts whatever the route table resolves the current location to
#[component]
fn Dispatcher() -> impl IntoView {
    let table = RouteTable::standard();
    let pathname = use_location().pathname;

    // Memo so that navigations resolving to the same route keep the view mounted
    let resolution = Memo::new(move |_| pathname.with(|path| table.resolve(path)));

    move || match resolution.get() {
        Resolution::Mount(Route::Shell) => view! { <MainLayout /> }.into_any(),
        Resolution::Mount(Route::QueryDetails(params)) => {
            view! { <QueryDetailsPage params /> }.into_any()
        }
        Resolution::Redirect { to, replace } => {
            debug!(to = %to, replace, "redirecting unmatched path");
            view! {
                <Redirect
                    path=to
                    options=NavigateOptions {
                        replace,
                        ..Default::default()
                    }
                />
            }
            .into_any()
        }
    }
}
