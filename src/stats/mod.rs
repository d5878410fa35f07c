mod aggregator;
mod goalies;
mod leaders;
pub mod ranking;

pub use aggregator::StatisticsAggregator;
pub use goalies::select_goalie;
pub use leaders::leader_board;
pub use ranking::{rank_by_strictly_better, Direction};
