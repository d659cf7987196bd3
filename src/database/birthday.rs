use super::Database;
use poise::serenity_prelude::{GuildId, UserId};
use sqlx::Error as SqlxError;

use crate::models::DueBirthday;

impl Database {
    /// Save or update a member's birthday in a guild.
    ///
    /// Changing the stored month/day resets the notified marker so a
    /// corrected birthday can still fire in the current year.
    pub async fn upsert_birthday(
        &self,
        guild_id: GuildId,
        user_id: UserId,
        month: i32,
        day: i32,
        year: Option<i32>,
    ) -> Result<(), SqlxError> {
        sqlx::query(
            r#"
            INSERT INTO birthdays (guild_id, user_id, birth_month, birth_day, birth_year, updated_at)
            VALUES ($1, $2, $3, $4, $5, NOW())
            ON CONFLICT (guild_id, user_id)
            DO UPDATE SET
                birth_month = $3,
                birth_day = $4,
                birth_year = $5,
                last_year_notified = CASE
                    WHEN birthdays.birth_month <> $3 OR birthdays.birth_day <> $4 THEN 0
                    ELSE birthdays.last_year_notified
                END,
                updated_at = NOW()
            "#,
        )
        .bind(guild_id.get() as i64)
        .bind(user_id.get() as i64)
        .bind(month)
        .bind(day)
        .bind(year)
        .execute(self.pool())
        .await?;
        Ok(())
    }

    /// Get a member's birthday in a guild
    pub async fn get_birthday(
        &self,
        guild_id: GuildId,
        user_id: UserId,
    ) -> Result<Option<(i32, i32, Option<i32>)>, SqlxError> {
        let result: Option<(i32, i32, Option<i32>)> = sqlx::query_as(
            "SELECT birth_month, birth_day, birth_year FROM birthdays \
             WHERE guild_id = $1 AND user_id = $2",
        )
        .bind(guild_id.get() as i64)
        .bind(user_id.get() as i64)
        .fetch_optional(self.pool())
        .await?;

        Ok(result)
    }

    /// Remove a member's birthday in a guild. Returns true if a record was deleted.
    pub async fn remove_birthday(
        &self,
        guild_id: GuildId,
        user_id: UserId,
    ) -> Result<bool, SqlxError> {
        let result = sqlx::query("DELETE FROM birthdays WHERE guild_id = $1 AND user_id = $2")
            .bind(guild_id.get() as i64)
            .bind(user_id.get() as i64)
            .execute(self.pool())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Get all stored birthdays for a guild
    pub async fn list_birthdays(
        &self,
        guild_id: GuildId,
    ) -> Result<Vec<(UserId, i32, i32, Option<i32>)>, SqlxError> {
        let rows: Vec<(i64, i32, i32, Option<i32>)> = sqlx::query_as(
            "SELECT user_id, birth_month, birth_day, birth_year FROM birthdays \
             WHERE guild_id = $1",
        )
        .bind(guild_id.get() as i64)
        .fetch_all(self.pool())
        .await?;

        Ok(rows
            .into_iter()
            .map(|(user_id, month, day, year)| (UserId::new(user_id as u64), month, day, year))
            .collect())
    }

    /// Get all birthdays falling on a specific month/day, across all guilds.
    ///
    /// The notified marker is returned raw; filtering against the current
    /// year happens in the tick so the predicate stays testable.
    pub async fn birthdays_on_date(
        &self,
        month: i32,
        day: i32,
    ) -> Result<Vec<DueBirthday>, SqlxError> {
        let rows: Vec<(i64, i64, i32)> = sqlx::query_as(
            "SELECT guild_id, user_id, last_year_notified FROM birthdays \
             WHERE birth_month = $1 AND birth_day = $2",
        )
        .bind(month)
        .bind(day)
        .fetch_all(self.pool())
        .await?;

        Ok(rows
            .into_iter()
            .map(|(guild_id, user_id, last_year_notified)| DueBirthday {
                guild_id: GuildId::new(guild_id as u64),
                user_id: UserId::new(user_id as u64),
                last_year_notified,
            })
            .collect())
    }

    /// Mark the given members of a guild as notified for the given year.
    ///
    /// This is the idempotency commit: once set, the members no longer match
    /// the due predicate until next year.
    pub async fn mark_notified(
        &self,
        guild_id: GuildId,
        user_ids: &[UserId],
        year: i32,
    ) -> Result<(), SqlxError> {
        let ids: Vec<i64> = user_ids.iter().map(|id| id.get() as i64).collect();

        sqlx::query(
            "UPDATE birthdays SET last_year_notified = $3, updated_at = NOW() \
             WHERE guild_id = $1 AND user_id = ANY($2)",
        )
        .bind(guild_id.get() as i64)
        .bind(&ids)
        .bind(year)
        .execute(self.pool())
        .await?;
        Ok(())
    }
}
