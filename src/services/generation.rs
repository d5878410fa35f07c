use anyhow::Result;
use chrono::NaiveDate;
use log::{info, warn};

use crate::api::models::StandingsEntry;
use crate::api::NhlClient;
use crate::config::{AppConfig, TeamDirectory};
use crate::domain::{GameInfo, TeamIdentity, TeamReport};
use crate::errors::GenerateError;
use crate::fetchers::RosterScraper;
use crate::http::Fetcher;
use crate::patch::{Anchors, HeaderData, PatchEngine};
use crate::schedule::ScheduleLocator;
use crate::stats::{leader_board, select_goalie, StatisticsAggregator};

/// One generation: the primary team's template filled for a matchup
pub struct GenerationRequest {
    pub primary: String,
    pub opponent: String,
    pub template: String,
    /// First day of the schedule search
    pub today: NaiveDate,
}

#[derive(Debug)]
pub struct Generated {
    pub html: String,
    pub game: Option<GameInfo>,
    pub warnings: Vec<String>,
}

/// Gathers every input for a matchup, then patches the template in order.
///
/// All fetching happens before the first edit, so the one hard failure
/// (standings) leaves nothing half-written.
pub struct GenerationService<'a, F: Fetcher> {
    config: &'a AppConfig,
    teams: &'a TeamDirectory,
    client: NhlClient<'a, F>,
    scraper: RosterScraper<'a, F>,
    anchors: Anchors,
}

impl<'a, F: Fetcher> GenerationService<'a, F> {
    pub fn new(fetcher: &'a F, config: &'a AppConfig, teams: &'a TeamDirectory) -> Result<Self> {
        Ok(Self {
            config,
            teams,
            client: NhlClient::new(fetcher, &config.fetch),
            scraper: RosterScraper::new(fetcher, config.fetch.roster_base_url, &config.roster)?,
            anchors: Anchors::new(&config.template)?,
        })
    }

    pub async fn generate(&self, request: &GenerationRequest) -> Result<Generated> {
        info!("=== Generating {} vs {} ===\n", request.primary, request.opponent);

        let primary = self.identity(&request.primary)?;
        let opponent = self.identity(&request.opponent)?;
        if primary.code == opponent.code {
            return Err(GenerateError::SameTeam(primary.code.clone()).into());
        }

        let mut warnings = Vec::new();

        // Step 1: League data
        info!("Step 1: Fetching league standings...");
        let standings = self
            .client
            .standings()
            .await
            .ok_or_else(|| GenerateError::DataUnavailable(primary.code.clone()))?;

        let primary_entry = Self::entry_for(&standings.standings, primary)?;
        let opponent_entry = Self::entry_for(&standings.standings, opponent)?;

        let summary = match primary_entry.season_id {
            Some(season_id) => self.client.team_summary(season_id).await,
            None => None,
        };
        if summary.is_none() {
            note(&mut warnings, "Special-teams summary unavailable; PP% and PK% left unchanged".to_string());
        }
        let aggregator = StatisticsAggregator::new(&standings, summary.as_ref());

        // Step 2: Team reports
        info!("Step 2: Building team reports...");
        let primary_report = self.team_report(&aggregator, primary_entry, primary, &mut warnings).await;
        let opponent_report = self.team_report(&aggregator, opponent_entry, opponent, &mut warnings).await;

        // Step 3: Next game
        info!("Step 3: Locating next game...");
        let locator = ScheduleLocator::new(&self.client, &self.config.schedule, &self.config.fetch);
        let game = locator
            .find_next_game(&primary.code, &opponent.code, request.today)
            .await;
        let game_number = match game.as_ref().and_then(|g| g.date) {
            Some(date) => locator.season_game_number(&primary.code, date).await,
            None => None,
        };

        // Step 4: Patch
        info!("Step 4: Patching template...");
        let mut engine = PatchEngine::new(
            request.template.clone(),
            &self.anchors,
            self.config.template.expected_logos,
        );
        engine.patch_logos(primary, opponent)?;
        engine.patch_header(&HeaderData {
            game: game.as_ref(),
            game_number,
            radio: primary.radio.as_deref(),
        })?;
        engine.patch_team(&primary_report)?;
        engine.patch_team(&opponent_report)?;
        let outcome = engine.finish()?;

        warnings.extend(outcome.warnings);
        info!("=== Generation Complete ({} warnings) ===", warnings.len());

        Ok(Generated {
            html: outcome.html,
            game,
            warnings,
        })
    }

    // --- Data Gathering ---

    fn identity(&self, code: &str) -> Result<&'a TeamIdentity, GenerateError> {
        self.teams
            .get(code)
            .ok_or_else(|| GenerateError::MissingTeamConfig(code.to_string()))
    }

    fn entry_for<'s>(
        standings: &'s [StandingsEntry],
        team: &TeamIdentity,
    ) -> Result<&'s StandingsEntry, GenerateError> {
        standings
            .iter()
            .find(|entry| entry.code() == team.code)
            .ok_or_else(|| GenerateError::DataUnavailable(team.code.clone()))
    }

    async fn team_report(
        &self,
        aggregator: &StatisticsAggregator<'_>,
        entry: &StandingsEntry,
        team: &TeamIdentity,
        warnings: &mut Vec<String>,
    ) -> TeamReport {
        info!("Fetching data for {}...", team.code);

        let lines = self.scraper.scrape(team).await;
        if lines.is_none() {
            note(warnings, format!("No line combinations for {}; lineup left unchanged", team.code));
        }

        let club_stats = self.client.club_stats(&team.code).await;
        if club_stats.is_none() {
            note(warnings, format!("No club statistics for {}; leaders and goalie left unchanged", team.code));
        }

        let hint = lines.as_ref().and_then(|l| l.starting_goalie());
        let leaders = club_stats.as_ref().map(|s| leader_board(&s.skaters));
        let goalie = club_stats.as_ref().and_then(|s| select_goalie(&s.goalies, hint));

        TeamReport {
            team: team.clone(),
            standings: aggregator.standings_snapshot(entry),
            rates: aggregator.rate_stats(entry, &team.name),
            leaders,
            goalie,
            lines,
        }
    }
}

fn note(warnings: &mut Vec<String>, message: String) {
    warn!("{}", message);
    warnings.push(message);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::testing::MapFetcher;

    const API: &str = "https://api-web.nhle.com/v1";

    const TEMPLATE: &str = r#"<hr style="width:50%">
<p data-gdt="***UPDATE RECORD***">0-0-0</p>
<hr style="width:50%">
<p data-gdt="***UPDATE RECORD***">0-0-0</p>
"#;

    fn standings_json() -> String {
        r#"{"standings":[
            {"teamAbbrev":{"default":"NYR"},"wins":10,"losses":3,"otLosses":2,"points":22},
            {"teamAbbrev":{"default":"BUF"},"wins":7,"losses":6,"otLosses":1,"points":15}
        ]}"#
        .to_string()
    }

    fn request(opponent: &str) -> GenerationRequest {
        GenerationRequest {
            primary: "NYR".to_string(),
            opponent: opponent.to_string(),
            template: TEMPLATE.to_string(),
            today: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
        }
    }

    fn config() -> AppConfig {
        let mut config = AppConfig::new();
        config.schedule.horizon_days = 2;
        config
    }

    #[tokio::test]
    async fn test_missing_standings_is_fatal() {
        let fetcher = MapFetcher::new();
        let config = config();
        let teams = TeamDirectory::standard();
        let service = GenerationService::new(&fetcher, &config, &teams).unwrap();

        let err = service.generate(&request("BUF")).await.unwrap_err();

        assert_eq!(
            err.downcast_ref::<GenerateError>(),
            Some(&GenerateError::DataUnavailable("NYR".to_string()))
        );
    }

    #[tokio::test]
    async fn test_opponent_missing_from_standings_is_fatal() {
        let fetcher = MapFetcher::new().with(&format!("{}/standings/now", API), &standings_json());
        let config = config();
        let teams = TeamDirectory::standard();
        let service = GenerationService::new(&fetcher, &config, &teams).unwrap();

        let err = service.generate(&request("BOS")).await.unwrap_err();

        assert_eq!(err.to_string(), "could not fetch data for BOS");
    }

    #[tokio::test]
    async fn test_same_team_rejected() {
        let fetcher = MapFetcher::new();
        let config = config();
        let teams = TeamDirectory::standard();
        let service = GenerationService::new(&fetcher, &config, &teams).unwrap();

        let err = service.generate(&request("NYR")).await.unwrap_err();

        assert_eq!(
            err.downcast_ref::<GenerateError>(),
            Some(&GenerateError::SameTeam("NYR".to_string()))
        );
    }

    #[tokio::test]
    async fn test_standings_only_still_produces_document() {
        let fetcher = MapFetcher::new().with(&format!("{}/standings/now", API), &standings_json());
        let config = config();
        let teams = TeamDirectory::standard();
        let service = GenerationService::new(&fetcher, &config, &teams).unwrap();

        let generated = service.generate(&request("BUF")).await.unwrap();

        assert!(generated.html.contains("10-3-2 (22 Points)"));
        assert!(generated.html.contains("7-6-1 (15 Points)"));
        assert!(generated.game.is_none());
        assert!(generated.warnings.iter().any(|w| w.contains("No line combinations for BUF")));
        assert!(generated.warnings.iter().any(|w| w.contains("No upcoming game")));
    }
}
