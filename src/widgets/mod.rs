//! UI widgets: canvas plus the chrome around it.

pub mod actions;
pub mod canvas;
pub mod file_dialogs;
pub mod header;
pub mod sidebar;
pub mod status;

pub use actions::ActionQueue;
