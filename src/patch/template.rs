use log::{debug, warn};
use regex::Regex;
use std::collections::{BTreeMap, HashSet};
use std::fmt;
use std::ops::Range;

use crate::patch::anchors::{normalize_label, Anchors};

/// One of the two team regions, in document order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    First,
    Second,
}

/// Where a slot lives: the whole document or one team's region
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scope {
    Document,
    Team(Side),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SlotKey {
    /// Nth logo attribute of the document, 0-based
    Logo(usize),
    GameNumber,
    GameDate,
    GameTime,
    Broadcast,
    Radio,
    GameLink,
    /// Normalized `data-gdt` label
    Field(String),
    ForwardLines,
    DefensePairs,
    StartingGoalie,
}

impl SlotKey {
    /// Placeholder key for a label as written, e.g. `RECORD HOME`
    pub fn field(label: &str) -> Self {
        let label: String = label.chars().filter(|c| !c.is_whitespace()).collect();
        SlotKey::Field(label.to_uppercase())
    }
}

impl fmt::Display for SlotKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SlotKey::Logo(n) => write!(f, "logo #{}", n + 1),
            SlotKey::GameNumber => write!(f, "game number"),
            SlotKey::GameDate => write!(f, "game date"),
            SlotKey::GameTime => write!(f, "game time"),
            SlotKey::Broadcast => write!(f, "TV"),
            SlotKey::Radio => write!(f, "radio"),
            SlotKey::GameLink => write!(f, "game link"),
            SlotKey::Field(label) => write!(f, "field {}", label),
            SlotKey::ForwardLines => write!(f, "forward lines"),
            SlotKey::DefensePairs => write!(f, "defense pairs"),
            SlotKey::StartingGoalie => write!(f, "starting goaltender"),
        }
    }
}

#[derive(Debug, Clone)]
struct Slot {
    scope: Scope,
    key: SlotKey,
    span: Range<usize>,
}

/// A template parsed once into addressable slots.
///
/// Slots are byte spans of the untouched source. Filling a slot only records
/// its replacement; `render` applies every replacement back-to-front so no
/// replacement is ever re-scanned and all other bytes are copied verbatim.
pub struct Template {
    source: String,
    slots: Vec<Slot>,
    fills: Vec<(usize, String)>,
    warnings: Vec<String>,
}

impl Template {
    pub fn parse(source: String, anchors: &Anchors) -> Self {
        let mut template = Self {
            source,
            slots: Vec::new(),
            fills: Vec::new(),
            warnings: Vec::new(),
        };

        template.scan_logos(anchors);
        template.scan_header(anchors);

        let [first, second] = template.team_regions(&anchors.separator);
        template.scan_team(anchors, Side::First, first);
        template.scan_team(anchors, Side::Second, second);

        debug!("Parsed template into {} slots", template.slots.len());
        template
    }

    /// Records `value` for the first slot with this scope and key.
    /// Returns `false` when the template has no such slot.
    pub fn fill(&mut self, scope: Scope, key: &SlotKey, value: impl Into<String>) -> bool {
        match self.slots.iter().position(|s| s.scope == scope && &s.key == key) {
            Some(index) => {
                self.fills.push((index, value.into()));
                true
            }
            None => false,
        }
    }

    pub fn logo_count(&self) -> usize {
        self.slots
            .iter()
            .filter(|s| matches!(s.key, SlotKey::Logo(_)))
            .count()
    }

    /// Problems found while reading the template
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Source with every filled slot replaced.
    ///
    /// Identical spans (both teams sharing one region) keep the value filled
    /// last.
    pub fn render(&self) -> String {
        let mut edits: BTreeMap<(usize, usize), &str> = BTreeMap::new();
        for (index, value) in &self.fills {
            let span = &self.slots[*index].span;
            edits.insert((span.start, span.end), value.as_str());
        }

        let mut output = self.source.clone();
        for ((start, end), value) in edits.iter().rev() {
            output.replace_range(*start..*end, value);
        }
        output
    }

    // --- Scanning ---

    fn scan_logos(&mut self, anchors: &Anchors) {
        let spans: Vec<Range<usize>> = anchors
            .logo
            .captures_iter(&self.source)
            .filter_map(|c| c.get(1).map(|m| m.range()))
            .collect();

        for (n, span) in spans.into_iter().enumerate() {
            self.push_slot(Scope::Document, SlotKey::Logo(n), span);
        }
    }

    fn scan_header(&mut self, anchors: &Anchors) {
        if let Some(caps) = anchors.game_header.captures(&self.source) {
            let number = caps.get(1).map(|m| m.range());
            let date = caps.get(2).map(|m| m.range());
            if let Some(span) = number {
                self.push_slot(Scope::Document, SlotKey::GameNumber, span);
            }
            if let Some(span) = date {
                self.push_slot(Scope::Document, SlotKey::GameDate, span);
            }
        }

        let singles = [
            (&anchors.game_time, SlotKey::GameTime),
            (&anchors.broadcast, SlotKey::Broadcast),
            (&anchors.radio, SlotKey::Radio),
            (&anchors.game_link, SlotKey::GameLink),
        ];
        for (regex, key) in singles {
            if let Some(span) = first_group(regex, &self.source, 0..self.source.len()) {
                self.push_slot(Scope::Document, key, span);
            }
        }
    }

    /// Team A spans the 1st to 2nd separator, team B the 2nd to the 3rd (or
    /// the end). With fewer than two separators both teams get the whole
    /// document.
    fn team_regions(&mut self, separator: &Regex) -> [Range<usize>; 2] {
        let starts: Vec<usize> = separator.find_iter(&self.source).map(|m| m.start()).collect();
        let end = self.source.len();

        if starts.len() < 2 {
            self.warn(format!(
                "Found {} region separators, expected at least 2; using the whole document for both teams",
                starts.len()
            ));
            return [0..end, 0..end];
        }

        let second_end = starts.get(2).copied().unwrap_or(end);
        [starts[0]..starts[1], starts[1]..second_end]
    }

    fn scan_team(&mut self, anchors: &Anchors, side: Side, region: Range<usize>) {
        let scope = Scope::Team(side);

        let fields = self.field_spans(&anchors.field, region.clone());
        for (label, span) in fields {
            self.push_slot(scope, SlotKey::Field(label), span);
        }

        let forwards = first_group(&anchors.forward_lines, &self.source, region.clone());
        let defense_from = forwards.as_ref().map_or(region.start, |span| span.end);
        if let Some(span) = forwards {
            self.push_slot(scope, SlotKey::ForwardLines, span);
        }

        let defense_region = defense_from..region.end;
        let defense = first_group(&anchors.defense_after_spacer, &self.source, defense_region.clone())
            .or_else(|| first_group(&anchors.defense_after_break, &self.source, defense_region));
        if let Some(span) = defense {
            self.push_slot(scope, SlotKey::DefensePairs, span);
        }

        if let Some(span) = first_group(&anchors.starting_goalie, &self.source, region) {
            self.push_slot(scope, SlotKey::StartingGoalie, span);
        }
    }

    /// Body span of the first placeholder paragraph per label
    fn field_spans(&self, field: &Regex, region: Range<usize>) -> Vec<(String, Range<usize>)> {
        let text = &self.source[region.clone()];
        let mut seen = HashSet::new();
        let mut fields = Vec::new();

        for caps in field.captures_iter(text) {
            let (Some(label), Some(body)) = (caps.get(1), caps.get(2)) else {
                continue;
            };
            let Some(label) = normalize_label(label.as_str()) else {
                continue;
            };
            if seen.insert(label.clone()) {
                fields.push((label, offset(body.range(), region.start)));
            }
        }

        fields
    }

    /// Slots never partially overlap; an overlapping later slot is dropped.
    /// The two team scopes are only compared to themselves since they share
    /// spans when the regions coincide.
    fn push_slot(&mut self, scope: Scope, key: SlotKey, span: Range<usize>) {
        let clash = self.slots.iter().find(|s| {
            let comparable = !matches!((s.scope, scope), (Scope::Team(a), Scope::Team(b)) if a != b);
            comparable && overlaps(&s.span, &span)
        });

        if let Some(existing) = clash {
            let message = format!("Template slot {} overlaps {}; ignoring it", key, existing.key);
            self.warn(message);
            return;
        }

        self.slots.push(Slot { scope, key, span });
    }

    fn warn(&mut self, message: String) {
        warn!("{}", message);
        self.warnings.push(message);
    }
}

fn first_group(regex: &Regex, source: &str, region: Range<usize>) -> Option<Range<usize>> {
    let start = region.start;
    let caps = regex.captures(&source[region])?;
    caps.get(1).map(|m| offset(m.range(), start))
}

fn offset(span: Range<usize>, by: usize) -> Range<usize> {
    span.start + by..span.end + by
}

/// Shared bytes, or the same empty position
fn overlaps(a: &Range<usize>, b: &Range<usize>) -> bool {
    if a.is_empty() || b.is_empty() {
        return a == b;
    }
    a.start < b.end && b.start < a.end
}
