use anyhow::{Context, Result};
use regex::Regex;

use crate::config::settings::TemplateSettings;

/// Compiled patterns that locate every replaceable span of the template.
/// Each pattern's first capture group is the span that gets replaced.
pub struct Anchors {
    pub logo: Regex,
    pub separator: Regex,
    /// Two groups: game number, then date
    pub game_header: Regex,
    pub game_time: Regex,
    pub broadcast: Regex,
    pub radio: Regex,
    pub game_link: Regex,
    /// Two groups: the raw `data-gdt` label, then the paragraph body
    pub field: Regex,
    pub forward_lines: Regex,
    pub defense_after_spacer: Regex,
    pub defense_after_break: Regex,
    pub starting_goalie: Regex,
}

impl Anchors {
    pub fn new(settings: &TemplateSettings) -> Result<Self> {
        Ok(Self {
            logo: Self::compile_regex(&Self::logo_pattern(&settings.logo_hosts), "logo")?,
            separator: Self::compile_regex(r#"<hr\s+style="width:\d+%">"#, "region separator")?,
            game_header: Self::compile_regex(
                r"(?i)REGULAR SEASON GAME #(\d+)\s*&mdash;\s*(\d+/\d+/\d+)",
                "game header",
            )?,
            game_time: Self::compile_regex(r"(?i)<b>Time</b>:\s*(\d+:\d+\s*[AP]M)", "game time")?,
            broadcast: Self::compile_regex(r"(?i)<b>TV</b><span>:</span>&nbsp;([^<]+)", "broadcast")?,
            radio: Self::compile_regex(r"(?i)<b>&nbsp;Radio</b>:\s*([^<]+)", "radio")?,
            game_link: Self::compile_regex(r#"href="([^"]*nhl\.com/gamecenter[^"]*)""#, "game link")?,
            field: Self::compile_regex(r#"(?is)<p\s+data-gdt="([^"]*)">(.*?)</p>"#, "field")?,
            forward_lines: Self::compile_regex(
                r"(?is)<b>Starting Lineup:\^?</b>\s*</h3>\s*<p>(.*?)</p>\s*<p>",
                "forward lines",
            )?,
            defense_after_spacer: Self::compile_regex(
                r"(?is)&nbsp;\s*</p>\s*<p>(.*?)</p>\s*(?:<h4>|<h3>\s*<b>Starting Goaltender)",
                "defense pairs",
            )?,
            defense_after_break: Self::compile_regex(
                r"(?is)</p>\s*<p>\s*(<br>.*?)</p>\s*(?:<h4>|<h3>\s*<b>Starting Goaltender)",
                "defense pairs",
            )?,
            starting_goalie: Self::compile_regex(
                r"(?i)<b>Starting Goaltender:</b>\s*</h3>\s*<p>(\s*[^<\n]+)(?:<br>|&nbsp;)",
                "starting goaltender",
            )?,
        })
    }

    fn logo_pattern(hosts: &[&str]) -> String {
        let hosts = hosts
            .iter()
            .map(|h| regex::escape(h))
            .collect::<Vec<_>>()
            .join("|");
        format!(r#"(?i)data-src="([^"]*(?:{})[^"]*\.png[^"]*)""#, hosts)
    }

    fn compile_regex(pattern: &str, name: &str) -> Result<Regex> {
        Regex::new(pattern).with_context(|| format!("Failed to compile {} anchor", name))
    }
}

/// Canonical form of a `data-gdt` label: `***UPDATE RECORD HOME***` -> `RECORDHOME`.
///
/// Labels without the `UPDATE` marker are not placeholders.
pub fn normalize_label(raw: &str) -> Option<String> {
    let cleaned: String = raw
        .to_uppercase()
        .chars()
        .filter(|c| *c != '*' && !c.is_whitespace())
        .collect();
    cleaned.strip_prefix("UPDATE").map(str::to_string)
}
