/// Birthday scheduling modules
mod manager;
mod notify;
mod tick;

// Re-export public types and functions
pub use manager::start_schedule_manager;
pub use tick::{TickReport, run_birthday_tick};
