use std::sync::Arc;

use dashmap::DashMap;
use poise::serenity_prelude::{ChannelId, GuildId, RoleId, UserId};

use crate::database::Database;

/// A stored birthday that matches today's month/day, as read by the tick
#[derive(Clone, Debug)]
pub struct DueBirthday {
    pub guild_id: GuildId,
    pub user_id: UserId,
    pub last_year_notified: i32,
}

/// Per-guild notification configuration
#[derive(Clone, Debug)]
pub struct BirthdaySettings {
    /// Channel the announcement is posted to, if one is configured
    pub channel_id: Option<ChannelId>,
    /// The currently active rotating birthday role, if any
    pub birthday_role_id: Option<RoleId>,
}

/// Bot state shared across all handlers
#[derive(Clone)]
pub struct Data {
    /// Database connection
    pub db: Database,
    /// Guilds with a birthday run currently in flight. A guild present in
    /// this map is skipped by any concurrently started tick.
    pub guild_runs: Arc<DashMap<GuildId, ()>>,
}

impl Data {
    /// Create a new Data instance with the given database connection
    pub fn new(db: Database) -> Self {
        Self {
            db,
            guild_runs: Arc::new(DashMap::new()),
        }
    }
}

pub type Error = Box<dyn std::error::Error + Send + Sync>;
pub type Context<'a> = poise::Context<'a, Data, Error>;
