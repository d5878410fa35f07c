use log::{info, warn};

use crate::api::models::{StandingsEntry, StandingsResponse, TeamSummaryEntry, TeamSummaryResponse};
use crate::domain::{Ranked, RateStats, Record, StandingsSnapshot, Streak};
use crate::stats::ranking::{rank_by_strictly_better, Direction};

/// Builds per-team snapshots from league-wide standings and the optional
/// special-teams summary. Every rank is computed against the whole league.
pub struct StatisticsAggregator<'a> {
    standings: &'a [StandingsEntry],
    summary: Option<&'a [TeamSummaryEntry]>,
}

impl<'a> StatisticsAggregator<'a> {
    pub fn new(standings: &'a StandingsResponse, summary: Option<&'a TeamSummaryResponse>) -> Self {
        Self {
            standings: &standings.standings,
            summary: summary.map(|s| s.data.as_slice()),
        }
    }

    pub fn find_entry(&self, code: &str) -> Option<&'a StandingsEntry> {
        self.standings.iter().find(|entry| entry.code() == code)
    }

    pub fn standings_snapshot(&self, entry: &StandingsEntry) -> StandingsSnapshot {
        StandingsSnapshot {
            record: Record::new(entry.wins, entry.losses, entry.ot_losses),
            points: entry.points,
            division_rank: entry.division_sequence,
            division_name: entry.division_name.clone().unwrap_or_default(),
            regulation_plus_ot_wins: entry.regulation_plus_ot_wins,
            point_pct: entry.point_pctg,
            home: Record::new(entry.home_wins, entry.home_losses, entry.home_ot_losses),
            road: Record::new(entry.road_wins, entry.road_losses, entry.road_ot_losses),
            shootout_wins: entry.shootout_wins,
            shootout_losses: entry.shootout_losses,
            last_ten: Record::new(entry.l10_wins, entry.l10_losses, entry.l10_ot_losses),
            streak: Streak {
                code: entry.streak_code.clone().unwrap_or_default(),
                count: entry.streak_count,
            },
        }
    }

    /// Rate metrics with league ranks. `team_name` keys the special-teams
    /// summary, which has no team codes.
    pub fn rate_stats(&self, entry: &StandingsEntry, team_name: &str) -> RateStats {
        let diff = entry.goal_differential();
        let gf = entry.goals_for_per_game();
        let ga = entry.goals_against_per_game();

        let rates = RateStats {
            goal_differential: Ranked {
                value: diff,
                rank: self.rank_standings(diff as f64, Direction::HigherIsBetter, |e| {
                    e.goal_differential() as f64
                }),
            },
            goals_for_per_game: Ranked {
                value: gf,
                rank: self.rank_standings(gf, Direction::HigherIsBetter, StandingsEntry::goals_for_per_game),
            },
            goals_against_per_game: Ranked {
                value: ga,
                rank: self.rank_standings(ga, Direction::LowerIsBetter, StandingsEntry::goals_against_per_game),
            },
            power_play_pct: self.special_teams(team_name, |s| s.power_play_pct),
            penalty_kill_pct: self.special_teams(team_name, |s| s.penalty_kill_pct),
        };

        info!(
            "  → {}: diff {} ({}), GF/GP {:.2} ({}), GA/GP {:.2} ({})",
            entry.code(),
            rates.goal_differential.value,
            rates.goal_differential.rank,
            rates.goals_for_per_game.value,
            rates.goals_for_per_game.rank,
            rates.goals_against_per_game.value,
            rates.goals_against_per_game.rank
        );

        rates
    }

    // --- Ranking ---

    fn rank_standings<M>(&self, subject: f64, direction: Direction, metric: M) -> u32
    where
        M: Fn(&StandingsEntry) -> f64,
    {
        rank_by_strictly_better(self.standings.iter().map(metric), subject, direction)
    }

    /// Percent value (fraction × 100) and rank; absent when the summary or the
    /// team's row is missing
    fn special_teams<M>(&self, team_name: &str, metric: M) -> Option<Ranked<f64>>
    where
        M: Fn(&TeamSummaryEntry) -> Option<f64>,
    {
        let summary = self.summary?;

        let Some(row) = summary.iter().find(|s| s.team_full_name == team_name) else {
            warn!("No special-teams summary row for {}", team_name);
            return None;
        };

        let value = metric(row)? * 100.0;
        let league = summary.iter().filter_map(&metric).map(|v| v * 100.0);

        Some(Ranked {
            value,
            rank: rank_by_strictly_better(league, value, Direction::HigherIsBetter),
        })
    }
}
