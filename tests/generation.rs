use anyhow::{anyhow, Result};
use chrono::NaiveDate;
use std::collections::HashMap;

use gdt_updater::config::{AppConfig, TeamDirectory};
use gdt_updater::errors::GenerateError;
use gdt_updater::http::Fetcher;
use gdt_updater::services::{Generated, GenerationRequest, GenerationService};

const API: &str = "https://api-web.nhle.com/v1";
const STATS: &str = "https://api.nhle.com/stats/rest/en";
const ROSTER: &str = "https://www.dailyfaceoff.com";

const TEMPLATE: &str = include_str!("fixtures/template.html");

/// Recorded responses keyed by URL
struct FixtureFetcher {
    pages: HashMap<String, &'static str>,
}

impl FixtureFetcher {
    fn full() -> Self {
        let mut pages = HashMap::new();
        pages.insert(format!("{}/standings/now", API), include_str!("fixtures/standings.json"));
        pages.insert(
            format!("{}/team/summary?cayenneExp=seasonId=20242025", STATS),
            include_str!("fixtures/team_summary.json"),
        );
        pages.insert(format!("{}/club-stats/NYR/now", API), include_str!("fixtures/club_stats_nyr.json"));
        pages.insert(format!("{}/club-stats/BUF/now", API), include_str!("fixtures/club_stats_buf.json"));
        pages.insert(format!("{}/schedule/2025-01-02", API), include_str!("fixtures/schedule.json"));
        pages.insert(
            format!("{}/club-schedule-season/NYR/now", API),
            include_str!("fixtures/club_schedule_nyr.json"),
        );
        pages.insert(
            format!("{}/teams/new-york-rangers/line-combinations/", ROSTER),
            include_str!("fixtures/roster_nyr.html"),
        );
        Self { pages }
    }

    fn without(mut self, url: &str) -> Self {
        self.pages.remove(url);
        self
    }
}

impl Fetcher for FixtureFetcher {
    async fn get_text(&self, url: &str) -> Result<String> {
        self.pages
            .get(url)
            .map(|body| body.to_string())
            .ok_or_else(|| anyhow!("HTTP error: 404 Not Found"))
    }
}

fn request() -> GenerationRequest {
    GenerationRequest {
        primary: "NYR".to_string(),
        opponent: "BUF".to_string(),
        template: TEMPLATE.to_string(),
        today: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
    }
}

async fn generate(fetcher: &FixtureFetcher) -> Result<Generated> {
    let config = AppConfig::new();
    let teams = TeamDirectory::standard();
    let service = GenerationService::new(fetcher, &config, &teams)?;
    service.generate(&request()).await
}

/// Splits the output into header, first team and second team regions
fn regions(html: &str) -> (&str, &str, &str) {
    let cuts: Vec<usize> = html.match_indices("<hr").map(|(i, _)| i).collect();
    (&html[..cuts[0]], &html[cuts[0]..cuts[1]], &html[cuts[1]..cuts[2]])
}

fn field<'a>(region: &'a str, label: &str) -> &'a str {
    let open = format!("data-gdt=\"***UPDATE {}***\">", label);
    let start = region.find(&open).unwrap() + open.len();
    let end = start + region[start..].find("</p>").unwrap();
    region[start..end].trim()
}

#[tokio::test]
async fn test_header_is_filled_from_schedule() {
    let generated = generate(&FixtureFetcher::full()).await.unwrap();
    let (header, _, _) = regions(&generated.html);

    assert!(header.contains("REGULAR SEASON GAME #4 &mdash; 1/4/25"));
    assert!(header.contains("<b>Time</b>: 7:30 PM"));
    assert!(header.contains("<b>TV</b><span>:</span>&nbsp;MSG, MSG-B<br>"));
    assert!(header.contains("<b>&nbsp;Radio</b>: 98.7 FM, 107.1 FM, 710 AM, Sirius XM<br>"));
    assert!(header.contains(r#"href="https://www.nhl.com/gamecenter/buf-vs-nyr/2025/01/04/2024020612""#));

    let game = generated.game.unwrap();
    assert_eq!(game.id, 2024020612);
    assert_eq!(game.home, "NYR");
}

#[tokio::test]
async fn test_logos_alternate_between_teams() {
    let generated = generate(&FixtureFetcher::full()).await.unwrap();
    let teams = TeamDirectory::standard();
    let nyr = teams.get("NYR").unwrap().logo_url.clone().unwrap();
    let buf = teams.get("BUF").unwrap().logo_url.clone().unwrap();

    let logos: Vec<&str> = generated
        .html
        .split("data-src=\"")
        .skip(1)
        .filter_map(|rest| rest.split('"').next())
        .collect();

    assert_eq!(logos, vec![nyr.as_str(), buf.as_str(), nyr.as_str(), buf.as_str()]);
}

#[tokio::test]
async fn test_primary_team_region() {
    let generated = generate(&FixtureFetcher::full()).await.unwrap();
    let (_, nyr, _) = regions(&generated.html);

    assert_eq!(field(nyr, "RECORD"), "10-3-2 (22 Points)");
    assert_eq!(field(nyr, "POSITION"), "2nd — Metropolitan");
    assert_eq!(field(nyr, "ROW"), "9");
    assert_eq!(field(nyr, "P%"), ".733");
    assert_eq!(field(nyr, "RECORD HOME"), "6-1-1");
    assert_eq!(field(nyr, "RECORD AWAY"), "4-2-1");
    assert_eq!(field(nyr, "S/O"), "1-0");
    assert_eq!(field(nyr, "LAST 10"), "7-2-1");
    assert_eq!(field(nyr, "STREAK"), "W3");

    assert_eq!(field(nyr, "DIFF"), "+12 (2nd)");
    assert_eq!(field(nyr, "GF/GP"), "3.33 (2nd)");
    assert_eq!(field(nyr, "GA/GP"), "2.53 (2nd)");
    assert_eq!(field(nyr, "PP%"), "25.0% (2nd)");
    assert_eq!(field(nyr, "PK%"), "80.0% (2nd)");

    assert_eq!(field(nyr, "GOALS"), "Artemi Panarin (12)");
    assert_eq!(field(nyr, "ASSISTS"), "Adam Fox (16)");
    assert_eq!(field(nyr, "POINTS"), "Artemi Panarin (27)");
    assert_eq!(field(nyr, "+/-"), "Artemi Panarin (+8)");
    assert_eq!(field(nyr, "PIM"), "Jacob Trouba (22)");
    assert_eq!(field(nyr, "TOI/G (D)"), "Adam Fox (23:20)");
    assert_eq!(field(nyr, "TOI/G (F)"), "Vincent Trocheck (20:30)");
}

#[tokio::test]
async fn test_projected_starter_drives_goalie_stats() {
    let generated = generate(&FixtureFetcher::full()).await.unwrap();
    let (_, nyr, _) = regions(&generated.html);

    assert!(nyr.contains("<b>Starting Goaltender:</b></h3>\n\t<p>\n\t\tJonathan Quick<br>"));
    assert_eq!(field(nyr, "GS"), "3");
    assert_eq!(field(nyr, "REC"), "2-1-1");
    assert_eq!(field(nyr, "SV%"), ".905");
    assert_eq!(field(nyr, "GAA"), "2.90");
    assert_eq!(field(nyr, "SO"), "0");
}

#[tokio::test]
async fn test_lineup_and_injuries_from_roster_page() {
    let generated = generate(&FixtureFetcher::full()).await.unwrap();
    let (_, nyr, _) = regions(&generated.html);

    assert!(nyr.contains(
        "<p>\n\t\tChris Kreider / Mika Zibanejad / Kaapo Kakko<br>\n\t\t\
         Artemi Panarin / Vincent Trocheck / Alexis Lafreniere<br>\n\t\t\
         Will Cuylle / J.T. Miller / Reilly Smith<br>\n\t\t\
         Jimmy Vesey / Sam Carrick / Matt Rempe\n\t</p>"
    ));
    assert!(nyr.contains(
        "<p>&nbsp;</p>\n\t<p>\n\t\tK. Andre Miller / Adam Fox<br>\n\t\t\
         Ryan Lindgren / Braden Schneider<br>\n\t\t\
         Zac Jones / Jacob Trouba\n\t</p>"
    ));
    assert_eq!(
        field(nyr, "INJURIES"),
        "Filip Chytil (OUT: undisclosed)<br>\n\t\tBrennan Othmann (DTD: undisclosed)"
    );
    assert!(!nyr.contains("Old One"));
}

#[tokio::test]
async fn test_opponent_region_without_roster_page() {
    let generated = generate(&FixtureFetcher::full()).await.unwrap();
    let (_, _, buf) = regions(&generated.html);

    assert_eq!(field(buf, "RECORD"), "7-6-2 (16 Points)");
    assert_eq!(field(buf, "POSITION"), "6th — Atlantic");
    assert_eq!(field(buf, "STREAK"), "L2");
    assert_eq!(field(buf, "DIFF"), "-5 (4th)");
    assert_eq!(field(buf, "GF/GP"), "2.80 (4th)");
    assert_eq!(field(buf, "GA/GP"), "3.13 (4th)");
    assert_eq!(field(buf, "PP%"), "18.0% (4th)");
    assert_eq!(field(buf, "PK%"), "76.0% (4th)");
    assert_eq!(field(buf, "GOALS"), "Tage Thompson (9)");
    assert_eq!(field(buf, "TOI/G (D)"), "Rasmus Dahlin (25:00)");

    assert_eq!(field(buf, "GS"), "11");
    assert_eq!(field(buf, "SV%"), ".895");
    assert_eq!(field(buf, "GAA"), "3.10");

    assert!(buf.contains("Opp One / Opp Two / Opp Three"));
    assert!(buf.contains("<p><br>\n\t\tOpp D One / Opp D Two"));
    assert!(buf.contains("Opp Goalie<br>"));
    assert_eq!(field(buf, "INJURIES"), "None");
    assert!(generated
        .warnings
        .iter()
        .any(|w| w.contains("No line combinations for BUF")));
}

#[tokio::test]
async fn test_text_outside_slots_is_untouched() {
    let generated = generate(&FixtureFetcher::full()).await.unwrap();

    assert!(generated.html.starts_with("<div class=\"gdt-header\" style=\"text-align:center;\">"));
    assert!(generated.html.ends_with("<hr style=\"width:50%\">\n<p>Let's go Rangers!</p>\n"));
    assert_eq!(generated.html.matches("<hr style=\"width:50%\">").count(), 3);
    assert!(generated.html.contains("<i>^ projected</i>"));
}

#[tokio::test]
async fn test_generation_is_deterministic() {
    let fetcher = FixtureFetcher::full();

    let first = generate(&fetcher).await.unwrap();
    let second = generate(&fetcher).await.unwrap();

    assert_eq!(first.html, second.html);
    assert_eq!(first.warnings, second.warnings);
}

#[tokio::test]
async fn test_missing_special_teams_keeps_template_text() {
    let fetcher = FixtureFetcher::full()
        .without(&format!("{}/team/summary?cayenneExp=seasonId=20242025", STATS));

    let generated = generate(&fetcher).await.unwrap();
    let (_, nyr, buf) = regions(&generated.html);

    assert_eq!(field(nyr, "PP%"), "21.0% (13th)");
    assert_eq!(field(buf, "PK%"), "76.5% (25th)");
    assert_eq!(field(nyr, "DIFF"), "+12 (2nd)");
}

#[tokio::test]
async fn test_missing_standings_produces_no_document() {
    let fetcher = FixtureFetcher::full().without(&format!("{}/standings/now", API));

    let err = generate(&fetcher).await.unwrap_err();

    assert_eq!(
        err.downcast_ref::<GenerateError>(),
        Some(&GenerateError::DataUnavailable("NYR".to_string()))
    );
}
