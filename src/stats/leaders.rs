use crate::api::models::SkaterStats;
use crate::domain::format::{minutes_seconds, signed};
use crate::domain::{Leader, LeaderBoard};

const NO_LEADER: &str = "N/A";
/// Starting best for categories that can go negative
const SCORING_FLOOR: i64 = -9999;

/// Team leaders per category. Linear scan, strict `>`, so the first skater
/// listed wins a tie.
pub fn leader_board(skaters: &[SkaterStats]) -> LeaderBoard {
    let goals = best_by(skaters, SCORING_FLOOR, |s| s.goals);
    let assists = best_by(skaters, SCORING_FLOOR, |s| s.assists);
    let points = best_by(skaters, SCORING_FLOOR, |s| s.points);
    let plus_minus = best_by(skaters, SCORING_FLOOR, |s| s.plus_minus);
    let penalty_minutes = best_by(skaters, 0, |s| s.penalty_minutes);

    LeaderBoard {
        goals: count_leader(goals),
        assists: count_leader(assists),
        points: count_leader(points),
        plus_minus: plus_minus
            .map(|(s, v)| Leader::new(s.full_name(), signed(v)))
            .unwrap_or_else(|| Leader::new(NO_LEADER, "0")),
        penalty_minutes: count_leader(penalty_minutes),
        toi_defense: ice_time_leader(skaters.iter().filter(|s| s.is_defenseman())),
        toi_forward: ice_time_leader(skaters.iter().filter(|s| !s.is_defenseman())),
    }
}

// --- Scans ---

fn best_by<M>(skaters: &[SkaterStats], floor: i64, metric: M) -> Option<(&SkaterStats, i64)>
where
    M: Fn(&SkaterStats) -> i64,
{
    let mut best: Option<(&SkaterStats, i64)> = None;
    let mut best_value = floor;

    for skater in skaters {
        let value = metric(skater);
        if value > best_value {
            best_value = value;
            best = Some((skater, value));
        }
    }

    best
}

fn ice_time_leader<'a, I>(skaters: I) -> Leader
where
    I: Iterator<Item = &'a SkaterStats>,
{
    let mut best: Option<&SkaterStats> = None;
    let mut best_toi = 0.0;

    for skater in skaters {
        if skater.avg_time_on_ice_per_game > best_toi {
            best_toi = skater.avg_time_on_ice_per_game;
            best = Some(skater);
        }
    }

    match best {
        Some(skater) => Leader::new(skater.full_name(), minutes_seconds(best_toi)),
        None => Leader::new(NO_LEADER, "0:00"),
    }
}

fn count_leader(best: Option<(&SkaterStats, i64)>) -> Leader {
    match best {
        Some((skater, value)) => Leader::new(skater.full_name(), value.to_string()),
        None => Leader::new(NO_LEADER, "0"),
    }
}
