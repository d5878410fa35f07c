use anyhow::{Context, Result};
use log::debug;
use regex::Regex;
use scraper::{Html, Selector};
use std::collections::HashSet;

use crate::config::settings::RosterSettings;
use crate::domain::{slug_to_name, Injury, InjuryStatus, LineCombination};

const FORWARD_LINES: usize = 4;
const FORWARDS_PER_LINE: usize = 3;
const DEFENSE_PAIRS: usize = 3;
const DEFENSE_PER_PAIR: usize = 2;
const GOALIES: usize = 2;

pub const UNDISCLOSED_DETAIL: &str = "undisclosed";

/// Status keywords in priority order; the first group with a hit wins
const STATUS_KEYWORDS: &[(InjuryStatus, &[&str])] = &[
    (InjuryStatus::Out, &[">out<", ">out "]),
    (InjuryStatus::DayToDay, &[">dtd<", "day-to-day"]),
    (InjuryStatus::LongTermInjuredReserve, &[">ltir<"]),
    (InjuryStatus::InjuredReserve, &[">ir<"]),
];

/// Extracts projected lines and injuries from a line-combinations page.
///
/// The page has no usable structure beyond player links, so the lineup is
/// read positionally: everything before the injuries marker is the lineup,
/// in document order.
pub struct RosterParser {
    injuries_marker: String,
    injury_window: usize,
    status_window: usize,
    player_link_regex: Regex,
    link_selector: Selector,
}

impl RosterParser {
    pub fn new(settings: &RosterSettings) -> Result<Self> {
        Ok(Self {
            injuries_marker: settings.injuries_marker.to_string(),
            injury_window: settings.injury_window,
            status_window: settings.status_window,
            player_link_regex: Self::compile_regex()?,
            link_selector: Self::compile_selector()?,
        })
    }

    /// `None` when the page has no injuries marker or no player links before it
    pub fn parse(&self, html: &str) -> Option<LineCombination> {
        let marker = html.find(&self.injuries_marker)?;

        let roster_slugs = self.unique_slugs(&html[..marker], &HashSet::new());
        if roster_slugs.is_empty() {
            return None;
        }
        debug!("Found {} players in lineup region", roster_slugs.len());

        let seen: HashSet<String> = roster_slugs.iter().map(|s| s.to_ascii_lowercase()).collect();
        let names: Vec<String> = roster_slugs.iter().map(|s| slug_to_name(s)).collect();

        let mut lines = Self::assign_positions(&names);
        lines.injuries = self.extract_injuries(window(html, marker, self.injury_window), &seen);

        Some(lines)
    }

    // --- Construction Helpers ---

    fn compile_regex() -> Result<Regex> {
        Regex::new(r"^/players/news/([a-zA-Z0-9-]+)/\d+$")
            .context("Failed to compile player link regex")
    }

    fn compile_selector() -> Result<Selector> {
        Selector::parse("a[href]").map_err(|e| anyhow::anyhow!("Invalid link selector: {:?}", e))
    }

    // --- Slug Extraction ---

    /// Player slugs in document order, first spelling kept, case-insensitive dedup
    fn unique_slugs(&self, fragment: &str, exclude: &HashSet<String>) -> Vec<String> {
        let document = Html::parse_fragment(fragment);
        let mut seen = HashSet::new();
        let mut slugs = Vec::new();

        for element in document.select(&self.link_selector) {
            let Some(slug) = self.parse_slug(element.value().attr("href")) else {
                continue;
            };
            let key = slug.to_ascii_lowercase();
            if exclude.contains(&key) {
                continue;
            }
            if seen.insert(key) {
                slugs.push(slug.to_string());
            }
        }

        slugs
    }

    fn parse_slug<'h>(&self, href: Option<&'h str>) -> Option<&'h str> {
        let captures = self.player_link_regex.captures(href?)?;
        Some(captures.get(1)?.as_str())
    }

    // --- Lineup ---

    fn assign_positions(names: &[String]) -> LineCombination {
        let mut lines = LineCombination::default();
        let forward_count = FORWARD_LINES * FORWARDS_PER_LINE;
        let defense_count = DEFENSE_PAIRS * DEFENSE_PER_PAIR;

        for (i, name) in names.iter().take(forward_count).enumerate() {
            lines.forwards[i / FORWARDS_PER_LINE].push(name.clone());
        }

        for (i, name) in names.iter().skip(forward_count).take(defense_count).enumerate() {
            lines.defense[i / DEFENSE_PER_PAIR].push(name.clone());
        }

        lines.goalies = names
            .iter()
            .skip(forward_count + defense_count)
            .take(GOALIES)
            .cloned()
            .collect();

        lines
    }

    // --- Injuries ---

    fn extract_injuries(&self, section: &str, lineup: &HashSet<String>) -> Vec<Injury> {
        let section_lower = section.to_ascii_lowercase();

        self.unique_slugs(section, lineup)
            .into_iter()
            .map(|slug| Injury {
                status: self.find_status(&section_lower, &slug.to_ascii_lowercase()),
                name: slug_to_name(&slug),
                detail: UNDISCLOSED_DETAIL.to_string(),
            })
            .collect()
    }

    fn find_status(&self, section_lower: &str, slug_lower: &str) -> InjuryStatus {
        let Some(position) = section_lower.find(slug_lower) else {
            return InjuryStatus::InjuredReserve;
        };
        let nearby = window(section_lower, position, self.status_window);

        STATUS_KEYWORDS
            .iter()
            .find(|(_, keywords)| keywords.iter().any(|k| nearby.contains(k)))
            .map(|(status, _)| *status)
            .unwrap_or(InjuryStatus::InjuredReserve)
    }
}

/// Up to `len` bytes of `text` from `start`, shortened to a char boundary
fn window(text: &str, start: usize, len: usize) -> &str {
    let mut end = start.saturating_add(len).min(text.len());
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    &text[start..end]
}
