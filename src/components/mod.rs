//! UI Components
//!
//! Leptos components rendering the task list state.

mod app_info_banner;
mod task_form;
mod task_list;
mod task_row;

pub use app_info_banner::AppInfoBanner;
pub use task_form::TaskForm;
pub use task_list::TaskList;
pub use task_row::TaskRow;
