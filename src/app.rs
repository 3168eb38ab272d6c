//! Job Tracker App
//!
//! Root component: owns the session store and lays out the page.

use leptos::prelude::*;

use crate::components::{JobForm, JobList, ThemeToggle, ViewControls};
use crate::config::APP_TITLE;
use crate::store::{AppState, AppStore};

#[component]
pub fn App() -> impl IntoView {
    // Empty on every load, nothing is persisted
    let store = AppStore::new(AppState::default());
    provide_context(store);
    log::info!("[APP] Job tracker started");

    view! {
        <main class="app">
            <header class="app-header">
                <h1>{APP_TITLE}</h1>
                <ThemeToggle />
            </header>

            <JobForm />

            <ViewControls />

            <JobList />
        </main>
    }
}
