use std::sync::Arc;

use chrono::Utc;
use chrono_tz::Tz;
use poise::serenity_prelude as serenity;
use tokio::time::{Duration, sleep};
use tracing::{error, info};

use super::tick::run_birthday_tick;
use crate::models::Data;

/// Start the schedule manager that fires the birthday tick on its cadence.
///
/// The cadence is a deployment choice; the tick itself is idempotent, so
/// running it more or less often only changes how soon after midnight a
/// birthday is celebrated.
pub fn start_schedule_manager(
    http: Arc<serenity::Http>,
    data: Arc<Data>,
    schedule: cron::Schedule,
    timezone: Tz,
) {
    tokio::spawn(async move {
        info!("Schedule manager started (timezone {})", timezone);

        loop {
            let Some(next) = schedule.upcoming(timezone).next() else {
                error!("Tick cron expression has no upcoming run, stopping schedule manager");
                break;
            };

            let wait = (next.with_timezone(&Utc) - Utc::now())
                .to_std()
                .unwrap_or(Duration::from_secs(1));

            info!(
                "Next birthday tick at {} (in {} minutes)",
                next,
                wait.as_secs() / 60
            );

            sleep(wait).await;

            if let Err(e) = run_birthday_tick(&http, &data, Utc::now()).await {
                error!("Birthday tick aborted: {}", e);
            }
        }

        info!("Schedule manager stopped");
    });
}
