pub mod roster_parser;
mod roster_scraper;

pub use roster_parser::RosterParser;
pub use roster_scraper::RosterScraper;
