/// Which way a metric improves
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    HigherIsBetter,
    LowerIsBetter,
}

impl Direction {
    fn is_better(&self, candidate: f64, subject: f64) -> bool {
        match self {
            Direction::HigherIsBetter => candidate > subject,
            Direction::LowerIsBetter => candidate < subject,
        }
    }
}

/// 1 + number of league values strictly better than `subject`.
///
/// Ties share a rank and do not push the next rank down, so three teams tied
/// for first are all 1st and the team behind them is 4th.
pub fn rank_by_strictly_better<I>(league: I, subject: f64, direction: Direction) -> u32
where
    I: IntoIterator<Item = f64>,
{
    let better = league
        .into_iter()
        .filter(|value| direction.is_better(*value, subject))
        .count();
    better as u32 + 1
}
