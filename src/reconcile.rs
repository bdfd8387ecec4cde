//! Cross-source merge of the ranked pitcher list with the roster feed, the
//! metrics sheet and the opponent rank table. The pipeline is a chain of pure
//! stages; each stage consumes the table and returns a new one, so a rerun on
//! unchanged inputs produces an identical table.

use anyhow::{Result, bail};

use crate::name_match::{self, DEFAULT_THRESHOLD};
use crate::normalize;
use crate::team_codes::TeamRankTable;

/// Recommended-usage tier, in descending order of confidence. Assigned from
/// the last-seen tier heading while the ranking post is parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    AutoStart,
    ProbablyStart,
    QuestionableStart,
    DoNotStart,
}

impl Tier {
    /// Tier carried by a heading paragraph, if it is one.
    pub fn from_heading(text: &str) -> Option<Self> {
        let t = text.to_lowercase();
        if t.contains("do not start") {
            Some(Tier::DoNotStart)
        } else if t.contains("questionable start") {
            Some(Tier::QuestionableStart)
        } else if t.contains("probably start") {
            Some(Tier::ProbablyStart)
        } else if t.contains("auto-start") || t.contains("auto start") {
            Some(Tier::AutoStart)
        } else {
            None
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Tier::AutoStart => "Auto-Start",
            Tier::ProbablyStart => "Probably Start",
            Tier::QuestionableStart => "Questionable Start",
            Tier::DoNotStart => "Do Not Start",
        }
    }
}

/// One entry of the primary ranking list. Immutable once the provider parsed
/// it; `player` is the canonical reconciliation key.
#[derive(Debug, Clone)]
pub struct RankedPitcher {
    pub tier: Option<Tier>,
    pub player: String,
    pub opponent: Option<String>,
    pub blurb: String,
}

/// One free agent from the fantasy roster feed.
#[derive(Debug, Clone)]
pub struct RosterPlayer {
    pub name: String,
    pub eligible_slots: Vec<String>,
}

impl RosterPlayer {
    pub fn is_pitcher(&self) -> bool {
        self.eligible_slots
            .iter()
            .any(|s| matches!(s.as_str(), "P" | "SP" | "RP"))
    }
}

/// One row of the advanced metrics sheet, all fields raw as read.
#[derive(Debug, Clone)]
pub struct MetricsRow {
    pub rank: String,
    pub name: String,
    pub stuff_plus: String,
    pub location_plus: String,
    pub pitching_plus: String,
    pub notes: String,
}

#[derive(Debug, Clone)]
pub struct MatchConfig {
    /// Fuzzy accept threshold in [0,100]; exact equality always matches.
    pub threshold: u8,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

/// Final fixed-schema row. Secondary fields stay `None` when their source did
/// not match, which is distinct from a matched-but-zero metric right up until
/// display, where the legacy sheet policy renders both as empty cells.
#[derive(Debug, Clone)]
pub struct MergedRecord {
    pub player: String,
    pub sheet_name: Option<String>,
    pub espn_name: Option<String>,
    pub tier: Option<Tier>,
    pub opponent: Option<String>,
    pub opponent_rank: Option<u32>,
    pub blurb: String,
    pub rank: Option<f64>,
    pub stuff_plus: Option<f64>,
    pub location_plus: Option<f64>,
    pub pitching_plus: Option<f64>,
    pub notes: Option<String>,
}

/// Canonical column order. Invariant across runs no matter which secondary
/// sources matched or in what order the inputs arrived.
pub const COLUMNS: [&str; 12] = [
    "Player",
    "Sheet Name",
    "ESPN Name",
    "Tier",
    "Opponent",
    "Opp Rank",
    "Blurb",
    "Rank",
    "Stuff+",
    "Location+",
    "Pitching+",
    "Notes",
];

impl MergedRecord {
    pub fn to_row(&self) -> Vec<String> {
        vec![
            self.player.clone(),
            self.sheet_name.clone().unwrap_or_default(),
            self.espn_name.clone().unwrap_or_default(),
            self.tier.map(Tier::label).unwrap_or_default().to_string(),
            self.opponent.clone().unwrap_or_default(),
            self.opponent_rank
                .map(|r| r.to_string())
                .unwrap_or_default(),
            self.blurb.clone(),
            normalize::display_number(self.rank),
            normalize::display_number(self.stuff_plus),
            normalize::display_number(self.location_plus),
            normalize::display_number(self.pitching_plus),
            self.notes.clone().unwrap_or_default(),
        ]
    }
}

/// What one run did, including everything that degraded. Printed by the
/// binary so a table missing secondary columns is visibly degraded rather
/// than silently full of blanks.
#[derive(Debug, Clone, Default)]
pub struct RunReport {
    pub ranked_total: usize,
    pub rows_emitted: usize,
    pub dropped_do_not_start: usize,
    pub roster_unmatched: Vec<String>,
    pub metrics_unmatched: Vec<String>,
    pub missing_opponent_rank: usize,
    pub degradations: Vec<String>,
}

/// Run the whole merge. An empty primary list is fatal; empty secondary
/// sources just leave every match against them unmatched.
pub fn reconcile(
    ranked: &[RankedPitcher],
    roster: &[RosterPlayer],
    metrics: &[MetricsRow],
    team_ranks: &TeamRankTable,
    cfg: &MatchConfig,
) -> Result<(Vec<MergedRecord>, RunReport)> {
    if ranked.is_empty() {
        bail!("primary ranking list is empty; nothing to reconcile");
    }

    let mut report = RunReport {
        ranked_total: ranked.len(),
        ..RunReport::default()
    };
    if roster.is_empty() {
        report
            .degradations
            .push("roster feed empty; ESPN names unavailable".to_string());
    }
    if metrics.is_empty() {
        report
            .degradations
            .push("metrics sheet empty; metric columns unavailable".to_string());
    }
    if team_ranks.is_empty() {
        report
            .degradations
            .push("team rank table empty; opponent ranks unavailable".to_string());
    }

    let rows = seeded(ranked);
    let rows = with_roster(rows, roster, cfg, &mut report);
    let rows = with_metrics(rows, metrics, cfg, &mut report);
    let rows = with_opponent_ranks(rows, team_ranks, &mut report);
    let rows = without_do_not_starts(rows, &mut report);

    report.rows_emitted = rows.len();
    Ok((rows, report))
}

fn seeded(ranked: &[RankedPitcher]) -> Vec<MergedRecord> {
    ranked
        .iter()
        .map(|r| MergedRecord {
            player: normalize::clean_text(&r.player),
            sheet_name: None,
            espn_name: None,
            tier: r.tier,
            opponent: r.opponent.clone(),
            opponent_rank: None,
            blurb: normalize::clean_text(&r.blurb),
            rank: None,
            stuff_plus: None,
            location_plus: None,
            pitching_plus: None,
            notes: None,
        })
        .collect()
}

/// Attach the roster display name for every row whose player matches a
/// pitcher-eligible free agent. The roster contributes that one field only.
fn with_roster(
    rows: Vec<MergedRecord>,
    roster: &[RosterPlayer],
    cfg: &MatchConfig,
    report: &mut RunReport,
) -> Vec<MergedRecord> {
    let references: Vec<&str> = roster
        .iter()
        .filter(|p| p.is_pitcher())
        .map(|p| p.name.as_str())
        .collect();

    rows.into_iter()
        .map(|mut row| {
            let outcome = name_match::best_match(&row.player, &references, cfg.threshold);
            match outcome.matched_name {
                Some(name) => row.espn_name = Some(name),
                None => {
                    if !references.is_empty() {
                        report.roster_unmatched.push(row.player.clone());
                    }
                }
            }
            row
        })
        .collect()
}

/// Merge the metrics sheet: rank, three stat columns and notes. Numeric
/// coercion happens at attach time; an unparsable cell degrades to 0, which
/// the display policy then blanks.
fn with_metrics(
    rows: Vec<MergedRecord>,
    metrics: &[MetricsRow],
    cfg: &MatchConfig,
    report: &mut RunReport,
) -> Vec<MergedRecord> {
    let references: Vec<&str> = metrics.iter().map(|m| m.name.as_str()).collect();

    rows.into_iter()
        .map(|mut row| {
            let outcome = name_match::best_match(&row.player, &references, cfg.threshold);
            let matched = outcome
                .matched_name
                .as_deref()
                .and_then(|name| metrics.iter().find(|m| m.name == name));
            match matched {
                Some(m) => {
                    row.sheet_name = Some(m.name.clone());
                    row.rank = Some(normalize::parse_or_zero(&m.rank));
                    row.stuff_plus = Some(normalize::parse_or_zero(&m.stuff_plus));
                    row.location_plus = Some(normalize::parse_or_zero(&m.location_plus));
                    row.pitching_plus = Some(normalize::parse_or_zero(&m.pitching_plus));
                    row.notes = Some(normalize::clean_text(&m.notes));
                }
                None => {
                    if !references.is_empty() {
                        report.metrics_unmatched.push(row.player.clone());
                    }
                }
            }
            row
        })
        .collect()
}

/// Opponent rank is keyed by the row's opponent code, not the player name.
fn with_opponent_ranks(
    rows: Vec<MergedRecord>,
    team_ranks: &TeamRankTable,
    report: &mut RunReport,
) -> Vec<MergedRecord> {
    rows.into_iter()
        .map(|mut row| {
            row.opponent_rank = row
                .opponent
                .as_deref()
                .and_then(|code| team_ranks.rank(code));
            if row.opponent_rank.is_none() && !team_ranks.is_empty() {
                report.missing_opponent_rank += 1;
            }
            row
        })
        .collect()
}

/// Drop Do Not Start rows. Removal only; surviving rows keep primary order.
fn without_do_not_starts(rows: Vec<MergedRecord>, report: &mut RunReport) -> Vec<MergedRecord> {
    let before = rows.len();
    let rows: Vec<MergedRecord> = rows
        .into_iter()
        .filter(|r| r.tier != Some(Tier::DoNotStart))
        .collect();
    report.dropped_do_not_start = before - rows.len();
    rows
}
