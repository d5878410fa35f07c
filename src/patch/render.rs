//! Renders a team report into slot values, in the order they are applied.

use crate::domain::format::{ordinal, percent, signed, thousandths, two_decimals};
use crate::domain::{
    GoalieSnapshot, Injury, Leader, LeaderBoard, LineCombination, Ranked, RateStats, StandingsSnapshot,
    TeamReport,
};
use crate::patch::template::SlotKey;

pub type SlotValue = (SlotKey, String);

/// Standings, rates, leaders, goalie, lineup, injuries. Parts whose data is
/// missing produce nothing, so their slots keep the template text.
pub fn team_values(report: &TeamReport) -> Vec<SlotValue> {
    let mut values = standings_values(&report.standings);
    values.extend(rate_values(&report.rates));

    if let Some(leaders) = &report.leaders {
        values.extend(leader_values(leaders));
    }
    if let Some(goalie) = &report.goalie {
        values.extend(goalie_values(goalie));
    }
    if let Some(lines) = &report.lines {
        values.extend(lineup_values(lines));
        values.push(field("INJURIES", injury_lines(&lines.injuries).join("<br>\n\t\t")));
    }

    values
}

pub fn standings_values(standings: &StandingsSnapshot) -> Vec<SlotValue> {
    vec![
        field("RECORD", format!("{} ({} Points)", standings.record, standings.points)),
        field(
            "POSITION",
            format!("{} — {}", ordinal(standings.division_rank), standings.division_name),
        ),
        field("ROW", standings.regulation_plus_ot_wins.to_string()),
        field("P%", thousandths(standings.point_pct)),
        field("RECORD HOME", standings.home.to_string()),
        field("RECORD AWAY", standings.road.to_string()),
        field(
            "S/O",
            format!("{}-{}", standings.shootout_wins, standings.shootout_losses),
        ),
        field("LAST 10", standings.last_ten.to_string()),
        field("STREAK", standings.streak.to_string()),
    ]
}

pub fn rate_values(rates: &RateStats) -> Vec<SlotValue> {
    let mut values = vec![
        field("DIFF", ranked(signed(rates.goal_differential.value), rates.goal_differential.rank)),
        field("GF/GP", ranked_decimal(&rates.goals_for_per_game)),
        field("GA/GP", ranked_decimal(&rates.goals_against_per_game)),
    ];

    if let Some(pp) = &rates.power_play_pct {
        values.push(field("PP%", ranked(percent(pp.value), pp.rank)));
    }
    if let Some(pk) = &rates.penalty_kill_pct {
        values.push(field("PK%", ranked(percent(pk.value), pk.rank)));
    }

    values
}

pub fn leader_values(leaders: &LeaderBoard) -> Vec<SlotValue> {
    [
        ("GOALS", &leaders.goals),
        ("ASSISTS", &leaders.assists),
        ("POINTS", &leaders.points),
        ("+/-", &leaders.plus_minus),
        ("PIM", &leaders.penalty_minutes),
        ("TOI/G (D)", &leaders.toi_defense),
        ("TOI/G (F)", &leaders.toi_forward),
    ]
    .into_iter()
    .map(|(label, leader)| field(label, leader_text(leader)))
    .collect()
}

pub fn goalie_values(goalie: &GoalieSnapshot) -> Vec<SlotValue> {
    vec![
        field("GS", goalie.games_started.to_string()),
        field("REC", goalie.record.to_string()),
        field("SV%", goalie.save_pct.clone()),
        field("GAA", goalie.gaa.clone()),
        field("SO", goalie.shutouts.to_string()),
    ]
}

/// Forward lines, defense pairs and the starting goaltender's name
pub fn lineup_values(lines: &LineCombination) -> Vec<SlotValue> {
    let mut values = Vec::new();

    let forwards = joined_groups(&lines.forwards);
    if !forwards.is_empty() {
        values.push((SlotKey::ForwardLines, block(&forwards)));
    }

    let defense = joined_groups(&lines.defense);
    if !defense.is_empty() {
        values.push((SlotKey::DefensePairs, block(&defense)));
    }

    if let Some(goalie) = lines.starting_goalie() {
        values.push((SlotKey::StartingGoalie, format!("\n\t\t{}", goalie)));
    }

    values
}

/// `Name (STATUS: detail)`, one per injury; `None` for a healthy roster
pub fn injury_lines(injuries: &[Injury]) -> Vec<String> {
    if injuries.is_empty() {
        return vec!["None".to_string()];
    }

    injuries
        .iter()
        .map(|i| format!("{} ({}: {})", i.name, i.status.as_str(), i.detail))
        .collect()
}

// --- Formatting ---

/// Placeholder paragraph body
fn field(label: &str, value: impl AsRef<str>) -> SlotValue {
    (SlotKey::field(label), format!("\n\t\t\t\t{}\n\t\t\t", value.as_ref()))
}

/// Lineup paragraph body, one group per line
fn block(lines: &[String]) -> String {
    format!("\n\t\t{}\n\t", lines.join("<br>\n\t\t"))
}

fn joined_groups(groups: &[Vec<String>]) -> Vec<String> {
    groups
        .iter()
        .filter(|g| !g.is_empty())
        .map(|g| g.join(" / "))
        .collect()
}

fn ranked(value: String, rank: u32) -> String {
    format!("{} ({})", value, ordinal(rank))
}

fn ranked_decimal(metric: &Ranked<f64>) -> String {
    ranked(two_decimals(metric.value), metric.rank)
}

fn leader_text(leader: &Leader) -> String {
    format!("{} ({})", leader.name, leader.value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{InjuryStatus, Record, Streak};

    fn value_of<'a>(values: &'a [SlotValue], label: &str) -> &'a str {
        let key = SlotKey::field(label);
        values
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.trim())
            .unwrap()
    }

    #[test]
    fn test_record_and_position_text() {
        let standings = StandingsSnapshot {
            record: Record::new(10, 3, 2),
            points: 22,
            division_rank: 2,
            division_name: "Metropolitan".to_string(),
            streak: Streak { code: "W".to_string(), count: 3 },
            point_pct: 0.75,
            shootout_wins: 2,
            shootout_losses: 1,
            ..StandingsSnapshot::default()
        };

        let values = standings_values(&standings);

        assert_eq!(value_of(&values, "RECORD"), "10-3-2 (22 Points)");
        assert_eq!(value_of(&values, "POSITION"), "2nd — Metropolitan");
        assert_eq!(value_of(&values, "P%"), ".750");
        assert_eq!(value_of(&values, "S/O"), "2-1");
        assert_eq!(value_of(&values, "STREAK"), "W3");
        assert_eq!(values[0].1, "\n\t\t\t\t10-3-2 (22 Points)\n\t\t\t");
    }

    #[test]
    fn test_rate_text() {
        let rates = RateStats {
            goal_differential: Ranked { value: 12, rank: 5 },
            goals_for_per_game: Ranked { value: 3.4567, rank: 3 },
            goals_against_per_game: Ranked { value: 2.5, rank: 11 },
            power_play_pct: Some(Ranked { value: 24.36, rank: 1 }),
            penalty_kill_pct: None,
        };

        let values = rate_values(&rates);

        assert_eq!(value_of(&values, "DIFF"), "+12 (5th)");
        assert_eq!(value_of(&values, "GF/GP"), "3.46 (3rd)");
        assert_eq!(value_of(&values, "GA/GP"), "2.50 (11th)");
        assert_eq!(value_of(&values, "PP%"), "24.4% (1st)");
        assert!(!values.iter().any(|(k, _)| *k == SlotKey::field("PK%")));
    }

    #[test]
    fn test_lineup_blocks() {
        let mut lines = LineCombination::default();
        lines.forwards[0] = vec!["Chris Kreider".into(), "Mika Zibanejad".into(), "Kaapo Kakko".into()];
        lines.forwards[1] = vec!["Artemi Panarin".into(), "Vincent Trocheck".into()];
        lines.defense[0] = vec!["K'Andre Miller".into(), "Adam Fox".into()];
        lines.goalies = vec!["Igor Shesterkin".into()];

        let values = lineup_values(&lines);

        assert_eq!(
            values[0],
            (
                SlotKey::ForwardLines,
                "\n\t\tChris Kreider / Mika Zibanejad / Kaapo Kakko<br>\n\t\tArtemi Panarin / Vincent Trocheck\n\t"
                    .to_string()
            )
        );
        assert_eq!(values[1], (SlotKey::DefensePairs, "\n\t\tK'Andre Miller / Adam Fox\n\t".to_string()));
        assert_eq!(values[2], (SlotKey::StartingGoalie, "\n\t\tIgor Shesterkin".to_string()));
    }

    #[test]
    fn test_empty_lineup_renders_nothing() {
        assert!(lineup_values(&LineCombination::default()).is_empty());
    }

    #[test]
    fn test_injury_lines() {
        let injuries = vec![Injury {
            name: "Filip Chytil".to_string(),
            status: InjuryStatus::Out,
            detail: "undisclosed".to_string(),
        }];

        assert_eq!(injury_lines(&injuries), vec!["Filip Chytil (OUT: undisclosed)"]);
        assert_eq!(injury_lines(&[]), vec!["None"]);
    }
}
