use std::sync::Arc;

use poise::serenity_prelude::{
    self as serenity, Channel, ChannelId, ChannelType, Colour, CreateMessage, EditRole, GuildId,
    UserId,
};
use tracing::{error, info, warn};

use crate::database::Database;
use crate::models::BirthdaySettings;
use crate::utils::announce::build_birthday_announcement;
use crate::utils::role_logic::{birthday_role_name, plan_role_appearance};

/// Outcome of one guild's notification run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GuildOutcome {
    pub role_rotated: bool,
    pub mentioned: bool,
}

impl GuildOutcome {
    /// Whether enough happened for the guild to count as handled this tick
    pub fn handled(&self) -> bool {
        self.role_rotated || self.mentioned
    }
}

/// Rotate the birthday role and post the announcement for one guild.
///
/// The two phases degrade independently: a guild without a configured
/// channel still gets its role rotated, and a failed rotation does not stop
/// the announcement. Failures are logged, never propagated, so one guild
/// cannot abort the batch.
pub async fn notify_guild(
    http: &Arc<serenity::Http>,
    db: &Database,
    guild_id: GuildId,
    due: &[UserId],
    settings: &BirthdaySettings,
    month: i32,
    day: i32,
) -> GuildOutcome {
    if due.is_empty() {
        info!("No due birthdays for guild {}, nothing to do", guild_id);
        return GuildOutcome::default();
    }

    let role_rotated = rotate_birthday_role(http, db, guild_id, due, settings, month, day).await;
    let mentioned = send_announcement(http, guild_id, settings.channel_id, due).await;

    GuildOutcome {
        role_rotated,
        mentioned,
    }
}

/// Retire the previous birthday role, create today's, and assign it to
/// every due member. Returns true when the new role exists and is recorded
/// in the guild's settings.
async fn rotate_birthday_role(
    http: &Arc<serenity::Http>,
    db: &Database,
    guild_id: GuildId,
    due: &[UserId],
    settings: &BirthdaySettings,
    month: i32,
    day: i32,
) -> bool {
    let roles = match guild_id.roles(http).await {
        Ok(roles) => roles,
        Err(e) => {
            error!("Failed to fetch roles for guild {}: {}", guild_id, e);
            return false;
        }
    };

    let previous = settings.birthday_role_id.and_then(|id| roles.get(&id));

    if let Some(previous_role) = previous {
        // Deletion failure must not leave the rotation stuck on one bad
        // role reference; the replacement is created regardless.
        if let Err(e) = guild_id.delete_role(http, previous_role.id).await {
            warn!(
                "Failed to delete stale birthday role {} in guild {}: {}",
                previous_role.id, guild_id, e
            );
        }
    } else if let Some(stale_id) = settings.birthday_role_id {
        info!(
            "Stored birthday role {} no longer exists in guild {}",
            stale_id, guild_id
        );
    }

    let top_position = roles.values().map(|role| role.position).max().unwrap_or(0);
    let (colour, position) = plan_role_appearance(
        previous.map(|role| (role.colour.0, role.position)),
        top_position,
    );
    let name = birthday_role_name(month, day);

    let builder = EditRole::new()
        .name(name.as_str())
        .colour(Colour::new(colour))
        .hoist(true)
        .position(position);

    let role = match guild_id.create_role(http, builder).await {
        Ok(role) => role,
        Err(e) => {
            error!(
                "Failed to create role \"{}\" in guild {}: {}",
                name, guild_id, e
            );
            return false;
        }
    };

    info!(
        "Created birthday role \"{}\" ({}) in guild {}",
        name, role.id, guild_id
    );

    if let Err(e) = db.set_active_birthday_role(guild_id, role.id).await {
        error!(
            "Failed to record birthday role {} for guild {}, the role is now orphaned and needs manual cleanup: {}",
            role.id, guild_id, e
        );
        return false;
    }

    for user_id in due {
        let member = match guild_id.member(http, *user_id).await {
            Ok(member) => member,
            Err(e) => {
                warn!(
                    "Member {} not found in guild {}, skipping role assignment: {}",
                    user_id, guild_id, e
                );
                continue;
            }
        };

        if let Err(e) = member.add_role(http, role.id).await {
            warn!(
                "Failed to assign birthday role to member {} in guild {}: {}",
                user_id, guild_id, e
            );
        }
    }

    true
}

/// Post the single aggregated announcement to the configured channel.
/// Returns true when the message was sent.
async fn send_announcement(
    http: &Arc<serenity::Http>,
    guild_id: GuildId,
    channel_id: Option<ChannelId>,
    due: &[UserId],
) -> bool {
    let Some(channel_id) = channel_id else {
        warn!(
            "No birthday channel configured for guild {}, skipping announcement",
            guild_id
        );
        return false;
    };

    match channel_id.to_channel(http).await {
        Ok(Channel::Guild(channel)) if channel.kind == ChannelType::Text => {}
        Ok(_) => {
            warn!(
                "Birthday channel {} in guild {} is not a text channel",
                channel_id, guild_id
            );
            return false;
        }
        Err(e) => {
            warn!(
                "Birthday channel {} in guild {} is unreachable: {}",
                channel_id, guild_id, e
            );
            return false;
        }
    }

    let subject_ids: Vec<u64> = due.iter().map(|id| id.get()).collect();
    let content = build_birthday_announcement(&subject_ids);

    match channel_id
        .send_message(http, CreateMessage::new().content(content))
        .await
    {
        Ok(_) => {
            info!(
                "Sent birthday announcement for {} member(s) in guild {}",
                due.len(),
                guild_id
            );
            true
        }
        Err(e) => {
            warn!(
                "Failed to send birthday announcement in guild {}: {}",
                guild_id, e
            );
            false
        }
    }
}
