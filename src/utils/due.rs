/// Pure functions building the per-guild due batch (Discord-agnostic)
use std::collections::BTreeMap;

use poise::serenity_prelude::{GuildId, UserId};

use crate::models::DueBirthday;

/// Group today's birthday records into a per-guild batch, keeping only
/// members not yet notified this year.
///
/// Members within a guild are ordered ascending by id so the announcement
/// (and its truncation) is deterministic across ticks.
pub fn partition_due(rows: Vec<DueBirthday>, current_year: i32) -> BTreeMap<GuildId, Vec<UserId>> {
    let mut batch: BTreeMap<GuildId, Vec<UserId>> = BTreeMap::new();

    for row in rows {
        if row.last_year_notified != current_year {
            batch.entry(row.guild_id).or_default().push(row.user_id);
        }
    }

    for subjects in batch.values_mut() {
        subjects.sort_unstable();
    }

    batch
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(guild_id: u64, user_id: u64, last_year_notified: i32) -> DueBirthday {
        DueBirthday {
            guild_id: GuildId::new(guild_id),
            user_id: UserId::new(user_id),
            last_year_notified,
        }
    }

    #[test]
    fn test_partition_due_filters_already_notified() {
        let rows = vec![record(1, 100, 0), record(1, 200, 2024), record(1, 300, 2023)];

        let batch = partition_due(rows, 2024);

        let subjects = batch.get(&GuildId::new(1)).unwrap();
        assert_eq!(
            subjects,
            &vec![UserId::new(100), UserId::new(300)],
            "only members not yet notified in 2024 are due"
        );
    }

    #[test]
    fn test_partition_due_groups_by_guild() {
        let rows = vec![record(2, 100, 0), record(1, 200, 0), record(2, 300, 0)];

        let batch = partition_due(rows, 2024);

        assert_eq!(batch.len(), 2);
        assert_eq!(batch.get(&GuildId::new(1)).unwrap().len(), 1);
        assert_eq!(batch.get(&GuildId::new(2)).unwrap().len(), 2);
    }

    #[test]
    fn test_partition_due_orders_subjects_ascending() {
        let rows = vec![record(1, 300, 0), record(1, 100, 0), record(1, 200, 0)];

        let batch = partition_due(rows, 2024);

        let subjects = batch.get(&GuildId::new(1)).unwrap();
        assert_eq!(
            subjects,
            &vec![UserId::new(100), UserId::new(200), UserId::new(300)]
        );
    }

    #[test]
    fn test_partition_due_empty_when_all_notified() {
        let rows = vec![record(1, 100, 2024), record(2, 200, 2024)];

        let batch = partition_due(rows, 2024);

        assert!(batch.is_empty());
    }

    #[test]
    fn test_partition_due_same_member_in_two_guilds() {
        // Records are scoped per guild; the same member can be due in one
        // guild and already notified in another.
        let rows = vec![record(1, 100, 2024), record(2, 100, 0)];

        let batch = partition_due(rows, 2024);

        assert!(!batch.contains_key(&GuildId::new(1)));
        assert_eq!(batch.get(&GuildId::new(2)).unwrap().len(), 1);
    }
}
