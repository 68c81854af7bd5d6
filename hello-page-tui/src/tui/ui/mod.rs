mod components;
mod error;
mod pages;
mod ui_manager;

pub use self::{error::Error, ui_manager::UiManager};
