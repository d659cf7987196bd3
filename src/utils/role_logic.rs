/// Pure functions for birthday role rotation (Discord-agnostic)
use crate::constants::DEFAULT_ROLE_COLOUR;

/// Name for the rotating birthday role, derived from today's date
pub fn birthday_role_name(month: i32, day: i32) -> String {
    format!("Birthday {:02}.{:02}", day, month)
}

/// Decide colour and position for the replacement role.
///
/// The new role inherits the retired role's colour and sits just below its
/// position. Without a predecessor it gets the default amber colour and is
/// placed near the top of the guild's role list; Discord clamps positions
/// the bot cannot reach.
pub fn plan_role_appearance(previous: Option<(u32, u16)>, top_position: u16) -> (u32, u16) {
    match previous {
        Some((colour, position)) => (colour, position.saturating_sub(1).max(1)),
        None => (DEFAULT_ROLE_COLOUR, top_position.saturating_sub(1).max(1)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_birthday_role_name_zero_padded() {
        assert_eq!(birthday_role_name(3, 14), "Birthday 14.03");
        assert_eq!(birthday_role_name(11, 5), "Birthday 05.11");
        assert_eq!(birthday_role_name(12, 31), "Birthday 31.12");
    }

    #[test]
    fn test_plan_inherits_previous_appearance() {
        let (colour, position) = plan_role_appearance(Some((0x00FF00, 12)), 40);
        assert_eq!(colour, 0x00FF00);
        assert_eq!(position, 11);
    }

    #[test]
    fn test_plan_defaults_without_previous() {
        let (colour, position) = plan_role_appearance(None, 40);
        assert_eq!(colour, DEFAULT_ROLE_COLOUR);
        assert_eq!(position, 39);
    }

    #[test]
    fn test_plan_position_floor() {
        let (_, position) = plan_role_appearance(Some((0, 1)), 40);
        assert_eq!(position, 1);

        // A guild with only @everyone has top position 0
        let (_, position) = plan_role_appearance(None, 0);
        assert_eq!(position, 1);
    }
}
