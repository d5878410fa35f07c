use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, TimeDelta, Timelike};
use log::{info, warn};

use crate::api::models::ScheduledGame;
use crate::api::NhlClient;
use crate::config::settings::{FetchSettings, ScheduleSettings};
use crate::domain::GameInfo;
use crate::http::Fetcher;
use crate::schedule::window::DayWindow;

const DEFAULT_EASTERN_OFFSET: &str = "-05:00";

/// Finds the next meeting of two teams by walking the schedule day by day
pub struct ScheduleLocator<'a, F: Fetcher> {
    client: &'a NhlClient<'a, F>,
    horizon_days: u32,
    broadcast_country: String,
    site_base_url: String,
}

impl<'a, F: Fetcher> ScheduleLocator<'a, F> {
    pub fn new(
        client: &'a NhlClient<'a, F>,
        schedule: &ScheduleSettings,
        fetch: &FetchSettings,
    ) -> Self {
        Self {
            client,
            horizon_days: schedule.horizon_days,
            broadcast_country: schedule.broadcast_country.to_string(),
            site_base_url: fetch.site_base_url.to_string(),
        }
    }

    /// First game between `first` and `second` on or after `today`.
    ///
    /// One schedule fetch per day, at most `horizon_days` fetches. Days that
    /// fail to load are skipped.
    pub async fn find_next_game(&self, first: &str, second: &str, today: NaiveDate) -> Option<GameInfo> {
        info!("Searching for next {} vs {} game...", first, second);

        let mut window = DayWindow::new(today, self.horizon_days);

        while !window.has_reached_max() {
            let day = window.current_day()?;
            window.advance();

            let Some(schedule) = self.client.schedule(day).await else {
                continue;
            };

            let found = schedule
                .game_week
                .iter()
                .flat_map(|d| d.games.iter())
                .find(|game| game.is_between(first, second));

            if let Some(game) = found {
                let info = self.game_info(game);
                info!("  → Found game: {} @ {} on {}", info.away, info.home, info.date_label);
                return Some(info);
            }
        }

        warn!("Could not find upcoming game between {} and {}", first, second);
        None
    }

    /// Position of the game dated `date` in the team's season (1-based)
    pub async fn season_game_number(&self, team_code: &str, date: NaiveDate) -> Option<u32> {
        let schedule = self.client.club_schedule(team_code).await?;

        let count = schedule
            .games
            .iter()
            .filter_map(|g| g.game_date.as_deref())
            .filter_map(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok())
            .filter(|d| *d <= date)
            .count();

        Some(count as u32)
    }

    // --- Game Info ---

    pub fn game_info(&self, game: &ScheduledGame) -> GameInfo {
        let local = local_start(game);

        GameInfo {
            id: game.id,
            date: local.map(|t| t.date()),
            date_label: local.map(|t| date_label(&t)).unwrap_or_default(),
            time_label: local.map(|t| time_label(&t)).unwrap_or_else(|| "TBD".to_string()),
            broadcasts: self.broadcasts(game),
            link: self.game_link(game),
            away: game.away_team.abbrev.clone(),
            home: game.home_team.abbrev.clone(),
        }
    }

    /// Networks for the configured country, first occurrence order
    fn broadcasts(&self, game: &ScheduledGame) -> Vec<String> {
        let mut networks: Vec<String> = Vec::new();

        for broadcast in &game.tv_broadcasts {
            if broadcast.country_code != self.broadcast_country || broadcast.network.is_empty() {
                continue;
            }
            if !networks.contains(&broadcast.network) {
                networks.push(broadcast.network.clone());
            }
        }

        networks
    }

    fn game_link(&self, game: &ScheduledGame) -> String {
        match game.game_center_link.as_deref() {
            Some(link) if !link.is_empty() && !link.starts_with("http") => {
                format!("{}{}", self.site_base_url, link)
            }
            Some(link) => link.to_string(),
            None => String::new(),
        }
    }
}

/// Start time shifted by the whole hours of the game's eastern offset
fn local_start(game: &ScheduledGame) -> Option<NaiveDateTime> {
    let raw = game.start_time_utc.as_deref()?;
    let utc = DateTime::parse_from_rfc3339(raw).ok()?.naive_utc();

    let offset = game.eastern_utc_offset.as_deref().unwrap_or(DEFAULT_EASTERN_OFFSET);
    let hours: i64 = offset.split(':').next()?.parse().ok()?;

    utc.checked_add_signed(TimeDelta::try_hours(hours)?)
}

/// `M/D/YY`
fn date_label(t: &NaiveDateTime) -> String {
    format!("{}/{}/{}", t.month(), t.day(), t.format("%y"))
}

/// `h:MM AM`
fn time_label(t: &NaiveDateTime) -> String {
    let (is_pm, hour) = t.hour12();
    let suffix = if is_pm { "PM" } else { "AM" };
    format!("{}:{:02} {}", hour, t.minute(), suffix)
}
