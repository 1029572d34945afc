//! State Management
//!
//! Global application state and the reminder timer.

pub mod global;
pub mod reminders;

pub use global::{provide_global_state, GlobalState};
pub use reminders::start_reminders;
