//! UI Components
//!
//! Leptos components rendered by `App`.

mod job_form;
mod view_controls;
mod job_list;
mod job_card;
mod theme_toggle;

pub use job_form::JobForm;
pub use view_controls::ViewControls;
pub use job_list::JobList;
pub use job_card::JobCard;
pub use theme_toggle::ThemeToggle;
