use std::sync::Arc;

use chrono::{DateTime, Datelike, Utc};
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use poise::serenity_prelude::{self as serenity, GuildId};
use tracing::{error, info, warn};

use super::notify::notify_guild;
use crate::constants::MAX_MENTIONS;
use crate::models::{Data, Error};
use crate::utils::datetime::month_day;
use crate::utils::due::partition_due;

/// Summary of one scheduler tick, for logs and the manual trigger
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickReport {
    pub guilds_processed: u32,
    pub guilds_failed: u32,
    pub mentions_sent: u32,
}

/// Run one birthday tick against the given snapshot time.
///
/// The snapshot is captured once per tick: a tick straddling midnight still
/// matches against the date it started with. A directory read failure aborts
/// the whole tick before any guild is touched. After that, guilds are walked
/// independently: a failure in one guild never blocks its siblings, and a
/// guild is marked notified only after its notification actually went
/// through, so an interrupted run re-notifies on the next tick rather than
/// silently skipping anyone.
pub async fn run_birthday_tick(
    http: &Arc<serenity::Http>,
    data: &Data,
    now: DateTime<Utc>,
) -> Result<TickReport, Error> {
    let (month, day) = month_day(&now);
    let year = now.year();

    info!("Running birthday tick for {:02}.{:02}.{}", day, month, year);

    let rows = data.db.birthdays_on_date(month, day).await?;
    let batch = partition_due(rows, year);

    if batch.is_empty() {
        info!("No birthdays due today");
        return Ok(TickReport::default());
    }

    let mut report = TickReport::default();

    for (guild_id, subjects) in batch {
        let Some(_run) = GuildRunGuard::acquire(&data.guild_runs, guild_id) else {
            info!(
                "Birthday run already in flight for guild {}, skipping",
                guild_id
            );
            continue;
        };

        let settings = match data.db.get_birthday_settings(guild_id).await {
            Ok(Some(settings)) => settings,
            Ok(None) => {
                warn!("No birthday settings for guild {}, skipping", guild_id);
                report.guilds_failed += 1;
                continue;
            }
            Err(e) => {
                error!(
                    "Failed to load birthday settings for guild {}: {}",
                    guild_id, e
                );
                report.guilds_failed += 1;
                continue;
            }
        };

        let outcome = notify_guild(http, &data.db, guild_id, &subjects, &settings, month, day).await;

        if outcome.mentioned {
            report.mentions_sent += subjects.len().min(MAX_MENTIONS) as u32;
        }

        if !outcome.handled() {
            report.guilds_failed += 1;
            continue;
        }

        match data.db.mark_notified(guild_id, &subjects, year).await {
            Ok(()) => report.guilds_processed += 1,
            Err(e) => {
                // The guild was notified but stays due, so the next tick
                // will notify it again.
                error!(
                    "Failed to mark guild {} as notified for {}: {}",
                    guild_id, year, e
                );
                report.guilds_failed += 1;
            }
        }
    }

    info!(
        "Birthday tick finished: {} guild(s) processed, {} failed, {} mention(s) sent",
        report.guilds_processed, report.guilds_failed, report.mentions_sent
    );

    Ok(report)
}

/// Marks a guild's birthday run as in flight for the guard's lifetime.
/// Overlapping ticks (scheduled or manual) skip a claimed guild instead of
/// rotating its role twice.
struct GuildRunGuard<'a> {
    runs: &'a DashMap<GuildId, ()>,
    guild_id: GuildId,
}

impl<'a> GuildRunGuard<'a> {
    /// Claim the guild, or return None if another run holds it
    fn acquire(runs: &'a DashMap<GuildId, ()>, guild_id: GuildId) -> Option<Self> {
        match runs.entry(guild_id) {
            Entry::Occupied(_) => None,
            Entry::Vacant(entry) => {
                entry.insert(());
                Some(Self { runs, guild_id })
            }
        }
    }
}

impl Drop for GuildRunGuard<'_> {
    fn drop(&mut self) {
        self.runs.remove(&self.guild_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guild_run_guard_excludes_second_claim() {
        let runs = DashMap::new();
        let guild = GuildId::new(1);

        let guard = GuildRunGuard::acquire(&runs, guild).expect("first claim succeeds");
        assert!(GuildRunGuard::acquire(&runs, guild).is_none());

        // Independent guilds are not blocked
        assert!(GuildRunGuard::acquire(&runs, GuildId::new(2)).is_some());

        drop(guard);
        assert!(GuildRunGuard::acquire(&runs, guild).is_some());
    }
}
