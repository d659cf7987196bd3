/// Pure functions for the birthday announcement text (Discord-agnostic)
use crate::constants::MAX_MENTIONS;

/// Build the single announcement message for a guild's due birthdays.
///
/// At most the first `MAX_MENTIONS` members are mentioned individually;
/// any overflow is summarized as "and N others!".
pub fn build_birthday_announcement(subject_ids: &[u64]) -> String {
    let mentions: Vec<String> = subject_ids
        .iter()
        .take(MAX_MENTIONS)
        .map(|id| format!("<@{}>", id))
        .collect();

    let list = mentions.join(", ");

    if subject_ids.len() > MAX_MENTIONS {
        format!(
            "Happy birthday to {} and {} others! 🎉🎂",
            list,
            subject_ids.len() - MAX_MENTIONS
        )
    } else {
        format!("Happy birthday to {} 🎉🎂", list)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_subject() {
        let message = build_birthday_announcement(&[100]);
        assert_eq!(message, "Happy birthday to <@100> 🎉🎂");
    }

    #[test]
    fn test_multiple_subjects_under_cap() {
        let message = build_birthday_announcement(&[100, 200, 300]);
        assert_eq!(message, "Happy birthday to <@100>, <@200>, <@300> 🎉🎂");
    }

    #[test]
    fn test_truncation_at_cap() {
        let ids: Vec<u64> = (1..=12).collect();
        let message = build_birthday_announcement(&ids);

        // Exactly the first ten are mentioned
        for id in 1..=10 {
            assert!(message.contains(&format!("<@{}>", id)));
        }
        assert!(!message.contains("<@11>"));
        assert!(!message.contains("<@12>"));
        assert!(message.contains("and 2 others!"));
    }

    #[test]
    fn test_exactly_cap_has_no_overflow() {
        let ids: Vec<u64> = (1..=10).collect();
        let message = build_birthday_announcement(&ids);

        assert!(message.contains("<@10>"));
        assert!(!message.contains("others"));
    }
}
