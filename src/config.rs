//! App Constants

/// Heading shown in the header
pub const APP_TITLE: &str = "Job Tracker";

/// Class toggled on `<html>` for the dark theme
pub const DARK_CLASS: &str = "dark";

/// Shown when the filtered list is empty
pub const EMPTY_PLACEHOLDER: &str = "No applications yet.";
