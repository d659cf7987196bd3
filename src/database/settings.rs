use super::Database;
use poise::serenity_prelude::{ChannelId, GuildId, RoleId};
use sqlx::Error as SqlxError;

use crate::models::BirthdaySettings;

impl Database {
    /// Get the birthday notification settings for a guild
    pub async fn get_birthday_settings(
        &self,
        guild_id: GuildId,
    ) -> Result<Option<BirthdaySettings>, SqlxError> {
        let result: Option<(Option<i64>, Option<i64>)> = sqlx::query_as(
            "SELECT channel_id, birthday_role_id FROM guild_birthday_settings \
             WHERE guild_id = $1",
        )
        .bind(guild_id.get() as i64)
        .fetch_optional(self.pool())
        .await?;

        Ok(result.map(|(channel_id, role_id)| BirthdaySettings {
            channel_id: channel_id.map(|id| ChannelId::new(id as u64)),
            birthday_role_id: role_id.map(|id| RoleId::new(id as u64)),
        }))
    }

    /// Set the announcement channel for a guild, creating the settings row
    /// if needed. The active role id is left untouched.
    pub async fn set_birthday_channel(
        &self,
        guild_id: GuildId,
        channel_id: ChannelId,
    ) -> Result<(), SqlxError> {
        sqlx::query(
            r#"
            INSERT INTO guild_birthday_settings (guild_id, channel_id, updated_at)
            VALUES ($1, $2, NOW())
            ON CONFLICT (guild_id)
            DO UPDATE SET channel_id = $2, updated_at = NOW()
            "#,
        )
        .bind(guild_id.get() as i64)
        .bind(channel_id.get() as i64)
        .execute(self.pool())
        .await?;
        Ok(())
    }

    /// Record the currently active rotating birthday role for a guild
    pub async fn set_active_birthday_role(
        &self,
        guild_id: GuildId,
        role_id: RoleId,
    ) -> Result<(), SqlxError> {
        sqlx::query(
            "UPDATE guild_birthday_settings SET birthday_role_id = $2, updated_at = NOW() \
             WHERE guild_id = $1",
        )
        .bind(guild_id.get() as i64)
        .bind(role_id.get() as i64)
        .execute(self.pool())
        .await?;
        Ok(())
    }

    /// Remove the birthday settings for a guild.
    /// Returns the previous channel id if a row was deleted.
    pub async fn remove_birthday_settings(
        &self,
        guild_id: GuildId,
    ) -> Result<Option<Option<ChannelId>>, SqlxError> {
        let result: Option<(Option<i64>,)> = sqlx::query_as(
            "DELETE FROM guild_birthday_settings WHERE guild_id = $1 RETURNING channel_id",
        )
        .bind(guild_id.get() as i64)
        .fetch_optional(self.pool())
        .await?;

        Ok(result.map(|(channel_id,)| channel_id.map(|id| ChannelId::new(id as u64))))
    }
}
