/// Utility modules
pub mod announce;
pub mod datetime;
pub mod due;
pub mod messages;
pub mod role_logic;
pub mod validation;
