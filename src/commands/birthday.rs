use chrono::{Datelike, Utc};
use poise::serenity_prelude as serenity;
use tracing::{error, info};

use crate::constants::MAX_LIST_LENGTH;
use crate::models::{Context, Error};
use crate::utils::datetime::{
    format_birthday_display, is_valid_birth_year, is_valid_month_day, month_day,
    upcoming_sort_key,
};
use crate::utils::messages::{format_error, format_info, format_success, truncate_message};
use crate::utils::validation::require_guild;

/// Set your birthday for this server
#[poise::command(slash_command)]
pub async fn set_birthday(
    ctx: Context<'_>,
    #[description = "Day of the month (1-31)"] day: u32,
    #[description = "Month (1-12)"] month: u32,
    #[description = "Birth year (optional, shown in listings)"] year: Option<i32>,
) -> Result<(), Error> {
    let guild_id = require_guild(ctx.guild_id())?;

    if !is_valid_month_day(month as i32, day as i32) {
        ctx.say(format_error("That is not a valid day/month combination!"))
            .await?;
        return Ok(());
    }

    if let Some(year) = year {
        if !is_valid_birth_year(year, Utc::now().year()) {
            ctx.say(format_error(
                "Birth year must be after 1900 and not in the future!",
            ))
            .await?;
            return Ok(());
        }
    }

    if let Err(e) = ctx
        .data()
        .db
        .upsert_birthday(guild_id, ctx.author().id, month as i32, day as i32, year)
        .await
    {
        error!(
            "Failed to save birthday for user {} in guild {}: {}",
            ctx.author().id,
            guild_id,
            e
        );
        ctx.say(format_error("Failed to save your birthday!"))
            .await?;
        return Ok(());
    }

    info!(
        "Saved birthday {:02}.{:02} for user {} in guild {}",
        day,
        month,
        ctx.author().id,
        guild_id
    );
    ctx.say(format_success(&format!(
        "Your birthday is set to {}!",
        format_birthday_display(month as i32, day as i32, year)
    )))
    .await?;

    Ok(())
}

/// Show a member's birthday
#[poise::command(slash_command)]
pub async fn get_birthday(
    ctx: Context<'_>,
    #[description = "Member to look up (defaults to you)"] user: Option<serenity::User>,
) -> Result<(), Error> {
    let guild_id = require_guild(ctx.guild_id())?;
    let target = user.as_ref().unwrap_or_else(|| ctx.author());

    match ctx.data().db.get_birthday(guild_id, target.id).await {
        Ok(Some((month, day, year))) => {
            ctx.say(format_info(&format!(
                "{}'s birthday is {}.",
                target.name,
                format_birthday_display(month, day, year)
            )))
            .await?;
        }
        Ok(None) => {
            ctx.say(format_info(&format!(
                "{} has no birthday stored in this server.",
                target.name
            )))
            .await?;
        }
        Err(e) => {
            error!(
                "Failed to look up birthday for user {} in guild {}: {}",
                target.id, guild_id, e
            );
            ctx.say(format_error("Failed to look up that birthday!"))
                .await?;
        }
    }

    Ok(())
}

/// Remove your birthday from this server
#[poise::command(slash_command)]
pub async fn remove_birthday(ctx: Context<'_>) -> Result<(), Error> {
    let guild_id = require_guild(ctx.guild_id())?;

    match ctx
        .data()
        .db
        .remove_birthday(guild_id, ctx.author().id)
        .await
    {
        Ok(true) => {
            info!(
                "Removed birthday for user {} in guild {}",
                ctx.author().id,
                guild_id
            );
            ctx.say(format_success("Your birthday was removed from this server."))
                .await?;
        }
        Ok(false) => {
            ctx.say(format_info("You have no birthday stored in this server."))
                .await?;
        }
        Err(e) => {
            error!(
                "Failed to remove birthday for user {} in guild {}: {}",
                ctx.author().id,
                guild_id,
                e
            );
            ctx.say(format_error("Failed to remove your birthday!"))
                .await?;
        }
    }

    Ok(())
}

/// List the stored birthdays for this server, soonest first
#[poise::command(slash_command)]
pub async fn list_birthdays(ctx: Context<'_>) -> Result<(), Error> {
    let guild_id = require_guild(ctx.guild_id())?;

    let mut birthdays = match ctx.data().db.list_birthdays(guild_id).await {
        Ok(birthdays) => birthdays,
        Err(e) => {
            error!("Failed to list birthdays for guild {}: {}", guild_id, e);
            ctx.say(format_error("Failed to load the birthday list!"))
                .await?;
            return Ok(());
        }
    };

    if birthdays.is_empty() {
        ctx.say(format_info("No birthdays stored in this server yet."))
            .await?;
        return Ok(());
    }

    let (today_month, today_day) = month_day(&Utc::now());
    birthdays.sort_by_key(|(user_id, month, day, _)| {
        (
            upcoming_sort_key(*month, *day, today_month, today_day),
            *user_id,
        )
    });

    let body = birthdays
        .iter()
        .map(|(user_id, month, day, year)| {
            format!(
                "• <@{}>: {}",
                user_id,
                format_birthday_display(*month, *day, *year)
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    ctx.say(format!(
        "🎂 **Upcoming birthdays**\n{}",
        truncate_message(&body, MAX_LIST_LENGTH)
    ))
    .await?;

    Ok(())
}
