use serde::Deserialize;

// --- League Standings ---

/// Localized text as served by the league API (`{"default": "..."}`)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LocalizedName {
    #[serde(default)]
    pub default: String,
}

#[derive(Debug, Deserialize)]
pub struct StandingsResponse {
    #[serde(default)]
    pub standings: Vec<StandingsEntry>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StandingsEntry {
    pub team_abbrev: LocalizedName,
    pub season_id: Option<i64>,
    pub games_played: u32,
    pub goal_for: u32,
    pub goal_against: u32,
    pub goal_differential: Option<i64>,
    pub wins: u32,
    pub losses: u32,
    pub ot_losses: u32,
    pub points: u32,
    pub division_sequence: u32,
    pub division_name: Option<String>,
    pub regulation_plus_ot_wins: u32,
    pub point_pctg: f64,
    pub home_wins: u32,
    pub home_losses: u32,
    pub home_ot_losses: u32,
    pub road_wins: u32,
    pub road_losses: u32,
    pub road_ot_losses: u32,
    pub shootout_wins: u32,
    pub shootout_losses: u32,
    pub l10_wins: u32,
    pub l10_losses: u32,
    pub l10_ot_losses: u32,
    pub streak_code: Option<String>,
    pub streak_count: u32,
}

impl StandingsEntry {
    pub fn code(&self) -> &str {
        &self.team_abbrev.default
    }

    pub fn goal_differential(&self) -> i64 {
        self.goal_differential
            .unwrap_or(self.goal_for as i64 - self.goal_against as i64)
    }

    pub fn goals_for_per_game(&self) -> f64 {
        per_game(self.goal_for, self.games_played)
    }

    pub fn goals_against_per_game(&self) -> f64 {
        per_game(self.goal_against, self.games_played)
    }
}

fn per_game(total: u32, games: u32) -> f64 {
    if games == 0 {
        0.0
    } else {
        total as f64 / games as f64
    }
}

// --- League Team Summary (special teams) ---

#[derive(Debug, Deserialize)]
pub struct TeamSummaryResponse {
    #[serde(default)]
    pub data: Vec<TeamSummaryEntry>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TeamSummaryEntry {
    pub team_full_name: String,
    /// Fraction, 0.0 - 1.0
    pub power_play_pct: Option<f64>,
    pub penalty_kill_pct: Option<f64>,
}

// --- Club Statistics ---

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ClubStatsResponse {
    pub skaters: Vec<SkaterStats>,
    pub goalies: Vec<GoalieStats>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SkaterStats {
    pub first_name: LocalizedName,
    pub last_name: LocalizedName,
    pub position_code: Option<String>,
    pub goals: i64,
    pub assists: i64,
    pub points: i64,
    pub plus_minus: i64,
    pub penalty_minutes: i64,
    /// Seconds
    pub avg_time_on_ice_per_game: f64,
}

impl SkaterStats {
    pub fn full_name(&self) -> String {
        full_name(&self.first_name, &self.last_name)
    }

    pub fn is_defenseman(&self) -> bool {
        self.position_code.as_deref() == Some("D")
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GoalieStats {
    pub first_name: LocalizedName,
    pub last_name: LocalizedName,
    pub games_played: u32,
    pub games_started: Option<u32>,
    pub wins: u32,
    pub losses: u32,
    pub overtime_losses: u32,
    pub save_percentage: f64,
    pub goals_against_average: f64,
    pub shutouts: u32,
}

impl GoalieStats {
    pub fn full_name(&self) -> String {
        full_name(&self.first_name, &self.last_name)
    }
}

fn full_name(first: &LocalizedName, last: &LocalizedName) -> String {
    format!("{} {}", first.default, last.default).trim().to_string()
}

// --- Schedule ---

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScheduleResponse {
    pub game_week: Vec<ScheduleDay>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ScheduleDay {
    pub games: Vec<ScheduledGame>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScheduledGame {
    pub id: i64,
    #[serde(rename = "startTimeUTC")]
    pub start_time_utc: Option<String>,
    #[serde(rename = "easternUTCOffset")]
    pub eastern_utc_offset: Option<String>,
    pub tv_broadcasts: Vec<Broadcast>,
    pub game_center_link: Option<String>,
    pub away_team: ScheduleTeam,
    pub home_team: ScheduleTeam,
}

impl ScheduledGame {
    /// Same two participants, in either order
    pub fn is_between(&self, first: &str, second: &str) -> bool {
        let away = self.away_team.abbrev.as_str();
        let home = self.home_team.abbrev.as_str();
        (away == first && home == second) || (away == second && home == first)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ScheduleTeam {
    pub abbrev: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Broadcast {
    pub network: String,
    pub country_code: String,
}

// --- Club Season Schedule ---

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ClubScheduleResponse {
    pub games: Vec<ClubScheduleGame>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClubScheduleGame {
    pub game_date: Option<String>,
}
