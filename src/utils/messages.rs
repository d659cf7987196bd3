/// Pure functions for formatting user-facing command responses (Discord-agnostic)

/// Format a validation error message with emoji
pub fn format_error(message: &str) -> String {
    format!("❌ {}", message)
}

/// Format a success message with emoji
pub fn format_success(message: &str) -> String {
    format!("✅ {}", message)
}

/// Format an info message with emoji
pub fn format_info(message: &str) -> String {
    format!("ℹ️ {}", message)
}

/// Truncate a long message with ellipsis
pub fn truncate_message(message: &str, max_length: usize) -> String {
    if message.len() <= max_length {
        message.to_string()
    } else if max_length < 3 {
        message.chars().take(max_length).collect()
    } else {
        let truncated: String = message.chars().take(max_length - 3).collect();
        format!("{}...", truncated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_error() {
        assert_eq!(format_error("bad input"), "❌ bad input");
    }

    #[test]
    fn test_format_success() {
        assert_eq!(format_success("saved"), "✅ saved");
    }

    #[test]
    fn test_format_info() {
        assert_eq!(format_info("nothing to do"), "ℹ️ nothing to do");
    }

    #[test]
    fn test_truncate_message_short() {
        assert_eq!(truncate_message("hello", 10), "hello");
    }

    #[test]
    fn test_truncate_message_long() {
        assert_eq!(truncate_message("hello world", 8), "hello...");
    }

    #[test]
    fn test_truncate_message_tiny_limit() {
        assert_eq!(truncate_message("hello", 2), "he");
    }
}
