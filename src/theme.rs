//! Display Theme
//!
//! Light/dark flag and the root class that switches the stylesheet.

use serde::{Deserialize, Serialize};

use crate::config::DARK_CLASS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    /// Label of the button that switches away from this theme
    pub fn toggle_label(self) -> &'static str {
        match self {
            Theme::Light => "Dark Mode",
            Theme::Dark => "Light Mode",
        }
    }
}

/// Add or remove the dark class on `<html>`
pub fn apply_theme(theme: Theme) {
    let root = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.document_element());
    let Some(root) = root else {
        log::warn!("[THEME] No document root to apply {:?}", theme);
        return;
    };
    if let Err(err) = root.class_list().toggle_with_force(DARK_CLASS, theme.is_dark()) {
        log::warn!("[THEME] Failed to toggle class: {:?}", err);
    }
}
