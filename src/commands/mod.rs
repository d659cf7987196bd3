/// Slash command modules
mod birthday;
mod config;

pub use birthday::{get_birthday, list_birthdays, remove_birthday, set_birthday};
pub use config::{disable_birthdays, force_birthday_tick, setup_birthdays};
