//! Theme Toggle Component

use leptos::prelude::*;

use crate::theme::apply_theme;
use crate::store::{store_toggle_theme, use_app_store, AppStateStoreFields};

/// Header button switching between light and dark presentation
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let store = use_app_store();

    view! {
        <button class="theme-toggle" on:click=move |_| apply_theme(store_toggle_theme(&store))>
            {move || store.theme().get().toggle_label()}
        </button>
    }
}
