use anyhow::Result;
use log::{info, warn};

use crate::config::settings::RosterSettings;
use crate::domain::{LineCombination, TeamIdentity};
use crate::fetchers::roster_parser::RosterParser;
use crate::http::Fetcher;

/// Fetches a team's line-combinations page and reads the projected lineup
pub struct RosterScraper<'a, F: Fetcher> {
    fetcher: &'a F,
    base_url: String,
    parser: RosterParser,
}

impl<'a, F: Fetcher> RosterScraper<'a, F> {
    pub fn new(fetcher: &'a F, base_url: &str, settings: &RosterSettings) -> Result<Self> {
        Ok(Self {
            fetcher,
            base_url: base_url.to_string(),
            parser: RosterParser::new(settings)?,
        })
    }

    /// Lines for one team, or `None` when the page is unavailable or unreadable
    pub async fn scrape(&self, team: &TeamIdentity) -> Option<LineCombination> {
        info!("Fetching line combinations for {}...", team.code);

        let url = self.build_url(&team.roster_slug);
        let html = match self.fetcher.get_text(&url).await {
            Ok(html) => html,
            Err(e) => {
                warn!("Error fetching {}: {:#}", url, e);
                return None;
            }
        };

        let lines = self.parser.parse(&html);
        match &lines {
            Some(lines) => Self::log_summary(lines),
            None => warn!("No lineup found on {}", url),
        }
        lines
    }

    fn build_url(&self, slug: &str) -> String {
        format!("{}/teams/{}/line-combinations/", self.base_url, slug)
    }

    fn log_summary(lines: &LineCombination) {
        let forwards = lines.forwards.iter().filter(|l| !l.is_empty()).count();
        let pairs = lines.defense.iter().filter(|p| !p.is_empty()).count();
        info!(
            "  → {} forward lines, {} defense pairs, {} goalies, {} injuries",
            forwards,
            pairs,
            lines.goalies.len(),
            lines.injuries.len()
        );
    }
}
