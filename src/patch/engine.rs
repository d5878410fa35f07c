use anyhow::{bail, Result};
use log::{info, warn};

use crate::domain::{GameInfo, TeamIdentity, TeamReport};
use crate::patch::anchors::Anchors;
use crate::patch::render::team_values;
use crate::patch::template::{Scope, Side, SlotKey, Template};

/// Generation progress. Each step runs once, in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Loaded,
    LogosPatched,
    HeaderPatched,
    TeamAPatched,
    TeamBPatched,
    Done,
}

/// Everything the header needs; each part is optional
#[derive(Debug, Default)]
pub struct HeaderData<'a> {
    pub game: Option<&'a GameInfo>,
    pub game_number: Option<u32>,
    pub radio: Option<&'a str>,
}

#[derive(Debug)]
pub struct PatchOutcome {
    pub html: String,
    pub warnings: Vec<String>,
}

/// Applies the generation steps to one template.
///
/// A slot the template lacks is a soft miss: its text stays as authored and a
/// warning is recorded.
pub struct PatchEngine {
    template: Template,
    expected_logos: usize,
    stage: Stage,
    warnings: Vec<String>,
}

impl PatchEngine {
    pub fn new(source: String, anchors: &Anchors, expected_logos: usize) -> Self {
        Self {
            template: Template::parse(source, anchors),
            expected_logos,
            stage: Stage::Loaded,
            warnings: Vec::new(),
        }
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// Logo attributes alternate between the teams: 1st and 3rd are `first`,
    /// 2nd and 4th are `second`
    pub fn patch_logos(&mut self, first: &TeamIdentity, second: &TeamIdentity) -> Result<()> {
        self.advance(Stage::Loaded, Stage::LogosPatched)?;

        let (Some(first_logo), Some(second_logo)) = (&first.logo_url, &second.logo_url) else {
            self.warn(format!("No logo URL for {} or {}; logos left unchanged", first.code, second.code));
            return Ok(());
        };

        let found = self.template.logo_count();
        if found < self.expected_logos {
            self.warn(format!("Found only {} logo images, expected {}", found, self.expected_logos));
        }

        for n in 0..found.min(self.expected_logos) {
            let logo = if n % 2 == 0 { first_logo } else { second_logo };
            self.template.fill(Scope::Document, &SlotKey::Logo(n), logo.as_str());
        }

        info!("  → Logos set for {} and {}", first.code, second.code);
        Ok(())
    }

    pub fn patch_header(&mut self, header: &HeaderData) -> Result<()> {
        self.advance(Stage::LogosPatched, Stage::HeaderPatched)?;

        let Some(game) = header.game else {
            self.warn("No upcoming game found; header left unchanged".to_string());
            return Ok(());
        };

        match header.game_number {
            Some(number) if !game.date_label.is_empty() => {
                self.fill(Scope::Document, &SlotKey::GameNumber, number.to_string());
                self.fill(Scope::Document, &SlotKey::GameDate, game.date_label.clone());
            }
            _ => self.warn("Game number unknown; game number and date left unchanged".to_string()),
        }

        self.fill(Scope::Document, &SlotKey::GameTime, game.time_label.clone());

        if !game.broadcasts.is_empty() {
            self.fill(Scope::Document, &SlotKey::Broadcast, game.broadcasts.join(", "));
        }
        if let Some(radio) = header.radio {
            self.fill(Scope::Document, &SlotKey::Radio, radio);
        }
        if !game.link.is_empty() {
            self.fill(Scope::Document, &SlotKey::GameLink, game.link.clone());
        }

        info!("  → Header set for {} @ {} on {}", game.away, game.home, game.date_label);
        Ok(())
    }

    /// Patches the next team region: the first call fills team A, the second
    /// team B
    pub fn patch_team(&mut self, report: &TeamReport) -> Result<()> {
        let (side, next) = match self.stage {
            Stage::HeaderPatched => (Side::First, Stage::TeamAPatched),
            Stage::TeamAPatched => (Side::Second, Stage::TeamBPatched),
            stage => bail!("Cannot patch a team region at stage {:?}", stage),
        };
        self.stage = next;

        let values = team_values(report);
        let total = values.len();
        let mut filled = 0;

        for (key, value) in values {
            if self.fill(Scope::Team(side), &key, value) {
                filled += 1;
            }
        }

        info!("  → {}: {} of {} fields updated", report.team.code, filled, total);
        Ok(())
    }

    pub fn finish(mut self) -> Result<PatchOutcome> {
        self.advance(Stage::TeamBPatched, Stage::Done)?;

        let mut warnings = self.template.warnings().to_vec();
        warnings.append(&mut self.warnings);

        Ok(PatchOutcome {
            html: self.template.render(),
            warnings,
        })
    }

    // --- Helper Methods ---

    fn advance(&mut self, expected: Stage, next: Stage) -> Result<()> {
        if self.stage != expected {
            bail!("Cannot move to {:?} from {:?}", next, self.stage);
        }
        self.stage = next;
        Ok(())
    }

    fn fill(&mut self, scope: Scope, key: &SlotKey, value: impl Into<String>) -> bool {
        let found = self.template.fill(scope, key, value);
        if !found {
            let place = match scope {
                Scope::Document => "document".to_string(),
                Scope::Team(side) => format!("{:?} team region", side).to_lowercase(),
            };
            self.warn(format!("Template anchor not found: {} in {}", key, place));
        }
        found
    }

    fn warn(&mut self, message: String) {
        warn!("{}", message);
        self.warnings.push(message);
    }
}
