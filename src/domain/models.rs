use chrono::NaiveDate;
use std::fmt;

/// Static identity of a team
#[derive(Debug, Clone, PartialEq)]
pub struct TeamIdentity {
    pub code: String,
    pub name: String,
    pub logo_url: Option<String>,
    pub roster_slug: String,
    pub radio: Option<String>,
}

/// The next scheduled meeting of two teams, in the game's local time
#[derive(Debug, Clone, PartialEq)]
pub struct GameInfo {
    pub id: i64,
    pub date: Option<NaiveDate>,
    /// `M/D/YY`
    pub date_label: String,
    /// `h:MM AM`, or `TBD` when the start time could not be read
    pub time_label: String,
    pub broadcasts: Vec<String>,
    pub link: String,
    pub away: String,
    pub home: String,
}

/// Wins, losses and overtime losses
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Record {
    pub wins: u32,
    pub losses: u32,
    pub ot_losses: u32,
}

impl Record {
    pub fn new(wins: u32, losses: u32, ot_losses: u32) -> Self {
        Self { wins, losses, ot_losses }
    }
}

/// `W-L-OTL`
impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", self.wins, self.losses, self.ot_losses)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Streak {
    pub code: String,
    pub count: u32,
}

/// `W3`
impl fmt::Display for Streak {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.code, self.count)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct StandingsSnapshot {
    pub record: Record,
    pub points: u32,
    pub division_rank: u32,
    pub division_name: String,
    pub regulation_plus_ot_wins: u32,
    pub point_pct: f64,
    pub home: Record,
    pub road: Record,
    pub shootout_wins: u32,
    pub shootout_losses: u32,
    pub last_ten: Record,
    pub streak: Streak,
}

/// A metric together with its league rank
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ranked<T> {
    pub value: T,
    pub rank: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RateStats {
    pub goal_differential: Ranked<i64>,
    pub goals_for_per_game: Ranked<f64>,
    pub goals_against_per_game: Ranked<f64>,
    /// Percent (0-100); absent when the league summary could not be read
    pub power_play_pct: Option<Ranked<f64>>,
    pub penalty_kill_pct: Option<Ranked<f64>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Leader {
    pub name: String,
    pub value: String,
}

impl Leader {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaderBoard {
    pub goals: Leader,
    pub assists: Leader,
    pub points: Leader,
    pub plus_minus: Leader,
    pub penalty_minutes: Leader,
    pub toi_defense: Leader,
    pub toi_forward: Leader,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoalieSnapshot {
    pub name: String,
    pub games_started: u32,
    pub record: Record,
    /// `.XXX`
    pub save_pct: String,
    /// Two decimals
    pub gaa: String,
    pub shutouts: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InjuryStatus {
    Out,
    DayToDay,
    LongTermInjuredReserve,
    InjuredReserve,
}

impl InjuryStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            InjuryStatus::Out => "OUT",
            InjuryStatus::DayToDay => "DTD",
            InjuryStatus::LongTermInjuredReserve => "LTIR",
            InjuryStatus::InjuredReserve => "IR",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Injury {
    pub name: String,
    pub status: InjuryStatus,
    pub detail: String,
}

/// Projected lineup scraped from a roster page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineCombination {
    pub forwards: [Vec<String>; 4],
    pub defense: [Vec<String>; 3],
    pub goalies: Vec<String>,
    pub injuries: Vec<Injury>,
}

impl LineCombination {
    pub fn starting_goalie(&self) -> Option<&str> {
        self.goalies.first().map(String::as_str)
    }
}

/// Everything gathered about one team before patching starts
#[derive(Debug, Clone, PartialEq)]
pub struct TeamReport {
    pub team: TeamIdentity,
    pub standings: StandingsSnapshot,
    pub rates: RateStats,
    pub leaders: Option<LeaderBoard>,
    pub goalie: Option<GoalieSnapshot>,
    pub lines: Option<LineCombination>,
}
