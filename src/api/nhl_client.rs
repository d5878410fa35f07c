use chrono::NaiveDate;
use log::{debug, warn};
use serde::de::DeserializeOwned;

use crate::api::models::{
    ClubScheduleResponse, ClubStatsResponse, ScheduleResponse, StandingsResponse,
    TeamSummaryResponse,
};
use crate::config::settings::FetchSettings;
use crate::errors::parse_context;
use crate::http::Fetcher;

/// League statistics API client.
///
/// Every call is a single round trip. Failures of any kind (transport,
/// status, payload) are logged and come back as `None`.
pub struct NhlClient<'a, F: Fetcher> {
    fetcher: &'a F,
    api_base_url: String,
    stats_base_url: String,
}

impl<'a, F: Fetcher> NhlClient<'a, F> {
    pub fn new(fetcher: &'a F, settings: &FetchSettings) -> Self {
        Self {
            fetcher,
            api_base_url: settings.api_base_url.to_string(),
            stats_base_url: settings.stats_base_url.to_string(),
        }
    }

    /// Current league standings
    pub async fn standings(&self) -> Option<StandingsResponse> {
        let url = format!("{}/standings/now", self.api_base_url);
        self.fetch_json(&url, "standings").await
    }

    /// Special-teams summary for every team of a season
    pub async fn team_summary(&self, season_id: i64) -> Option<TeamSummaryResponse> {
        let url = Self::build_summary_url(&self.stats_base_url, season_id);
        self.fetch_json(&url, "team summary").await
    }

    /// Skater and goalie statistics for one club
    pub async fn club_stats(&self, team_code: &str) -> Option<ClubStatsResponse> {
        let url = format!("{}/club-stats/{}/now", self.api_base_url, team_code);
        self.fetch_json(&url, "club stats").await
    }

    /// League schedule starting at `date`
    pub async fn schedule(&self, date: NaiveDate) -> Option<ScheduleResponse> {
        let url = format!("{}/schedule/{}", self.api_base_url, date.format("%Y-%m-%d"));
        self.fetch_json(&url, "schedule").await
    }

    /// Full current-season schedule of one club
    pub async fn club_schedule(&self, team_code: &str) -> Option<ClubScheduleResponse> {
        let url = format!("{}/club-schedule-season/{}/now", self.api_base_url, team_code);
        self.fetch_json(&url, "club schedule").await
    }

    // --- Helper Methods ---

    fn build_summary_url(base: &str, season_id: i64) -> String {
        format!("{}/team/summary?cayenneExp=seasonId={}", base, season_id)
    }

    async fn fetch_json<T: DeserializeOwned>(&self, url: &str, data_type: &str) -> Option<T> {
        debug!("Fetching {} from {}", data_type, url);

        let text = match self.fetcher.get_text(url).await {
            Ok(text) => text,
            Err(e) => {
                warn!("Error fetching {}: {:#}", url, e);
                return None;
            }
        };

        match serde_json::from_str(&text) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!("{}: {}", parse_context(data_type), e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::testing::MapFetcher;

    fn settings() -> FetchSettings {
        FetchSettings {
            api_base_url: "https://api.test/v1",
            stats_base_url: "https://stats.test",
            ..FetchSettings::default()
        }
    }

    #[tokio::test]
    async fn test_standings_parsed() {
        let fetcher = MapFetcher::new().with(
            "https://api.test/v1/standings/now",
            r#"{"standings":[{"teamAbbrev":{"default":"NYR"},"wins":3}]}"#,
        );
        let client = NhlClient::new(&fetcher, &settings());

        let standings = client.standings().await.unwrap();
        assert_eq!(standings.standings.len(), 1);
        assert_eq!(standings.standings[0].wins, 3);
    }

    #[tokio::test]
    async fn test_malformed_payload_is_absent() {
        let fetcher = MapFetcher::new().with("https://api.test/v1/club-stats/NYR/now", "<html>");
        let client = NhlClient::new(&fetcher, &settings());

        assert!(client.club_stats("NYR").await.is_none());
    }

    #[tokio::test]
    async fn test_failed_fetch_is_absent() {
        let fetcher = MapFetcher::new();
        let client = NhlClient::new(&fetcher, &settings());

        assert!(client.team_summary(20242025).await.is_none());
    }

    #[tokio::test]
    async fn test_schedule_url_uses_iso_date() {
        let fetcher = MapFetcher::new().with(
            "https://api.test/v1/schedule/2025-01-05",
            r#"{"gameWeek":[{"games":[]}]}"#,
        );
        let client = NhlClient::new(&fetcher, &settings());
        let date = NaiveDate::from_ymd_opt(2025, 1, 5).unwrap();

        assert_eq!(client.schedule(date).await.unwrap().game_week.len(), 1);
    }
}
