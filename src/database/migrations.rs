use super::Database;
use sqlx::Error as SqlxError;

impl Database {
    /// Run database migrations to create tables
    pub(super) async fn run_migrations(&self) -> Result<(), SqlxError> {
        self.create_birthday_table().await?;
        self.create_settings_table().await?;
        Ok(())
    }

    async fn create_birthday_table(&self) -> Result<(), SqlxError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS birthdays (
                guild_id BIGINT NOT NULL,
                user_id BIGINT NOT NULL,
                birth_month INTEGER NOT NULL CHECK (birth_month BETWEEN 1 AND 12),
                birth_day INTEGER NOT NULL CHECK (birth_day BETWEEN 1 AND 31),
                birth_year INTEGER CHECK (birth_year IS NULL OR birth_year > 1900),
                last_year_notified INTEGER NOT NULL DEFAULT 0,
                created_at TIMESTAMP NOT NULL DEFAULT NOW(),
                updated_at TIMESTAMP NOT NULL DEFAULT NOW(),
                PRIMARY KEY (guild_id, user_id)
            )
            "#,
        )
        .execute(self.pool())
        .await?;

        sqlx::query(
            r#"
            CREATE INDEX IF NOT EXISTS birthdays_by_date
            ON birthdays (birth_month, birth_day)
            "#,
        )
        .execute(self.pool())
        .await?;

        Ok(())
    }

    async fn create_settings_table(&self) -> Result<(), SqlxError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS guild_birthday_settings (
                guild_id BIGINT PRIMARY KEY,
                channel_id BIGINT,
                birthday_role_id BIGINT,
                created_at TIMESTAMP NOT NULL DEFAULT NOW(),
                updated_at TIMESTAMP NOT NULL DEFAULT NOW()
            )
            "#,
        )
        .execute(self.pool())
        .await?;

        Ok(())
    }
}
