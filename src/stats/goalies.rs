use log::debug;

use crate::api::models::GoalieStats;
use crate::domain::format::{thousandths, two_decimals};
use crate::domain::{GoalieSnapshot, Record};

/// Picks the goalie to feature.
///
/// A non-empty `hint` matches the first goalie whose full name contains it, or
/// is contained by it, ignoring case. Without a match the goalie with the most
/// games played is used (first listed on a tie).
pub fn select_goalie(goalies: &[GoalieStats], hint: Option<&str>) -> Option<GoalieSnapshot> {
    let hinted = hint
        .map(str::trim)
        .filter(|h| !h.is_empty())
        .and_then(|h| match_hint(goalies, h));

    let selected = hinted.or_else(|| most_games_played(goalies))?;
    Some(snapshot(selected))
}

fn match_hint<'a>(goalies: &'a [GoalieStats], hint: &str) -> Option<&'a GoalieStats> {
    let hint = hint.to_lowercase();

    let found = goalies.iter().find(|g| {
        let name = g.full_name().to_lowercase();
        !name.is_empty() && (name.contains(&hint) || hint.contains(&name))
    });

    if found.is_none() {
        debug!("No goalie matches hint '{}'", hint);
    }
    found
}

fn most_games_played(goalies: &[GoalieStats]) -> Option<&GoalieStats> {
    let mut iter = goalies.iter();
    let mut best = iter.next()?;

    for goalie in iter {
        if goalie.games_played > best.games_played {
            best = goalie;
        }
    }

    Some(best)
}

fn snapshot(goalie: &GoalieStats) -> GoalieSnapshot {
    GoalieSnapshot {
        name: goalie.full_name(),
        games_started: goalie.games_started.unwrap_or(goalie.games_played),
        record: Record::new(goalie.wins, goalie.losses, goalie.overtime_losses),
        save_pct: thousandths(goalie.save_percentage),
        gaa: two_decimals(goalie.goals_against_average),
        shutouts: goalie.shutouts,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::models::LocalizedName;

    fn goalie(first: &str, last: &str, games_played: u32) -> GoalieStats {
        GoalieStats {
            first_name: LocalizedName { default: first.to_string() },
            last_name: LocalizedName { default: last.to_string() },
            games_played,
            ..GoalieStats::default()
        }
    }

    #[test]
    fn test_hint_matches_either_direction() {
        let goalies = vec![goalie("Igor", "Shesterkin", 30), goalie("Jonathan", "Quick", 8)];

        let by_surname = select_goalie(&goalies, Some("quick")).unwrap();
        assert_eq!(by_surname.name, "Jonathan Quick");

        let by_longer_hint = select_goalie(&goalies, Some("Dr. Jonathan Quick Jr")).unwrap();
        assert_eq!(by_longer_hint.name, "Jonathan Quick");
    }

    #[test]
    fn test_falls_back_to_most_games_played() {
        let goalies = vec![
            goalie("Jonathan", "Quick", 8),
            goalie("Igor", "Shesterkin", 30),
            goalie("Louis", "Domingue", 30),
        ];

        assert_eq!(select_goalie(&goalies, Some("Nobody")).unwrap().name, "Igor Shesterkin");
        assert_eq!(select_goalie(&goalies, None).unwrap().name, "Igor Shesterkin");
        assert_eq!(select_goalie(&goalies, Some("  ")).unwrap().name, "Igor Shesterkin");
    }

    #[test]
    fn test_snapshot_formats() {
        let mut igor = goalie("Igor", "Shesterkin", 30);
        igor.games_started = Some(29);
        igor.wins = 18;
        igor.losses = 9;
        igor.overtime_losses = 2;
        igor.save_percentage = 0.9154;
        igor.goals_against_average = 2.456;
        igor.shutouts = 3;

        let snapshot = select_goalie(&[igor], None).unwrap();

        assert_eq!(snapshot.games_started, 29);
        assert_eq!(snapshot.record, Record::new(18, 9, 2));
        assert_eq!(snapshot.save_pct, ".915");
        assert_eq!(snapshot.gaa, "2.46");
        assert_eq!(snapshot.shutouts, 3);
    }

    #[test]
    fn test_games_started_falls_back_to_played() {
        let snapshot = select_goalie(&[goalie("Igor", "Shesterkin", 30)], None).unwrap();
        assert_eq!(snapshot.games_started, 30);
        assert_eq!(snapshot.save_pct, ".000");
    }

    #[test]
    fn test_no_goalies() {
        assert!(select_goalie(&[], Some("Igor")).is_none());
    }
}
