use chrono::Utc;
use poise::serenity_prelude::{ChannelType, GuildChannel};
use tracing::{error, info};

use crate::models::{Context, Error};
use crate::schedule::run_birthday_tick;
use crate::utils::messages::{format_error, format_info, format_success};
use crate::utils::validation::{require_guild, validate_channel_type};

/// Configure the channel birthday announcements are posted to
#[poise::command(slash_command, required_permissions = "MANAGE_GUILD")]
pub async fn setup_birthdays(
    ctx: Context<'_>,
    #[description = "Channel where birthday announcements will be sent"]
    announcement_channel: GuildChannel,
) -> Result<(), Error> {
    let guild_id = require_guild(ctx.guild_id())?;

    if let Err(e) = validate_channel_type(&announcement_channel, ChannelType::Text) {
        ctx.say(format_error(&e.to_string())).await?;
        return Ok(());
    }

    if let Err(e) = ctx
        .data()
        .db
        .set_birthday_channel(guild_id, announcement_channel.id)
        .await
    {
        error!(
            "Failed to save birthday channel for guild {}: {}",
            guild_id, e
        );
        ctx.say(format_error("Failed to save the birthday channel!"))
            .await?;
        return Ok(());
    }

    info!(
        "Birthday announcements in guild {} now go to channel {}",
        guild_id, announcement_channel.id
    );
    ctx.say(format_success(&format!(
        "Birthday announcements will be posted in <#{}>.",
        announcement_channel.id
    )))
    .await?;

    Ok(())
}

/// Disable birthday announcements for this server
#[poise::command(slash_command, required_permissions = "MANAGE_GUILD")]
pub async fn disable_birthdays(ctx: Context<'_>) -> Result<(), Error> {
    let guild_id = require_guild(ctx.guild_id())?;

    match ctx.data().db.remove_birthday_settings(guild_id).await {
        Ok(Some(_)) => {
            info!("Disabled birthday announcements for guild {}", guild_id);
            ctx.say(format_success(
                "Birthday announcements are disabled for this server.",
            ))
            .await?;
        }
        Ok(None) => {
            ctx.say(format_info(
                "Birthday announcements were not configured for this server.",
            ))
            .await?;
        }
        Err(e) => {
            error!(
                "Failed to remove birthday settings for guild {}: {}",
                guild_id, e
            );
            ctx.say(format_error("Failed to disable birthday announcements!"))
                .await?;
        }
    }

    Ok(())
}

/// Run the birthday tick immediately (bot owner only)
#[poise::command(slash_command, owners_only, hide_in_help)]
pub async fn force_birthday_tick(ctx: Context<'_>) -> Result<(), Error> {
    ctx.defer().await?;

    let http = ctx.serenity_context().http.clone();

    match run_birthday_tick(&http, ctx.data(), Utc::now()).await {
        Ok(report) => {
            ctx.say(format_info(&format!(
                "Tick finished: {} guild(s) processed, {} failed, {} mention(s) sent.",
                report.guilds_processed, report.guilds_failed, report.mentions_sent
            )))
            .await?;
        }
        Err(e) => {
            error!("Manual birthday tick aborted: {}", e);
            ctx.say(format_error("Birthday tick aborted, see logs."))
                .await?;
        }
    }

    Ok(())
}
