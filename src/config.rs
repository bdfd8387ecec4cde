//! Run configuration from the environment. `.env.local` / `.env` are loaded
//! by the binary before this runs; everything has a default except the
//! secondary-source credentials, whose absence degrades that source rather
//! than failing the run.

use std::env;
use std::path::PathBuf;

use chrono::{Datelike, Local};

use crate::name_match::DEFAULT_THRESHOLD;
use crate::reconcile::MatchConfig;
use crate::roster_fetch::LeagueAuth;
use crate::sheet_fetch::MetricsSpec;

const DEFAULT_POSTS_ENDPOINT: &str = "https://pitcherlist.com/wp-json/wp/v2/posts";
const DEFAULT_OUTPUT_PATH: &str = "streamer_sheet.xlsx";

#[derive(Debug, Clone)]
pub struct RunConfig {
    pub posts_endpoint: String,
    pub espn: Option<LeagueAuth>,
    pub source_sheet_id: Option<String>,
    pub metrics_tab: String,
    pub metrics_spec: MetricsSpec,
    pub team_rank_tab: Option<String>,
    pub team_tab_has_header: bool,
    pub output_path: PathBuf,
    pub output_tab: String,
    pub match_config: MatchConfig,
}

impl RunConfig {
    pub fn from_env() -> Self {
        let now = Local::now();
        Self {
            posts_endpoint: env_string("STREAMER_POSTS_ENDPOINT", DEFAULT_POSTS_ENDPOINT),
            espn: league_auth_from_env(now.year() as u32),
            source_sheet_id: env_opt("SOURCE_SHEET_ID"),
            // The source sheet keeps one dated metrics tab per slate.
            metrics_tab: env_string(
                "METRICS_TAB",
                &format!("Ranks {}/{}", now.month(), now.day()),
            ),
            metrics_spec: metrics_spec_from_env(),
            team_rank_tab: env_opt("TEAM_RANK_TAB"),
            team_tab_has_header: env_flag("TEAM_RANK_TAB_HAS_HEADER", false),
            output_path: PathBuf::from(env_string("OUTPUT_PATH", DEFAULT_OUTPUT_PATH)),
            output_tab: env_string(
                "OUTPUT_TAB",
                &format!("Streamers {}-{}", now.month(), now.day()),
            ),
            match_config: MatchConfig {
                threshold: match_threshold_from_env(),
            },
        }
    }
}

fn league_auth_from_env(default_season: u32) -> Option<LeagueAuth> {
    let league_id = env_opt("SECRET_LEAGUE_ID")?;
    let espn_s2 = env_opt("SECRET_ESPN_S2_COOKIE")?;
    let swid = env_opt("SECRET_SWID")?;
    let season = env::var("SEASON_ID")
        .ok()
        .and_then(|v| v.trim().parse::<u32>().ok())
        .unwrap_or(default_season);
    Some(LeagueAuth {
        league_id,
        season,
        espn_s2,
        swid,
    })
}

fn metrics_spec_from_env() -> MetricsSpec {
    let defaults = MetricsSpec::default();
    MetricsSpec {
        name_col: env_string("METRICS_NAME_COL", &defaults.name_col),
        rank_col: env_string("METRICS_RANK_COL", &defaults.rank_col),
        stuff_col: env_string("METRICS_STUFF_COL", &defaults.stuff_col),
        location_col: env_string("METRICS_LOCATION_COL", &defaults.location_col),
        pitching_col: env_string("METRICS_PITCHING_COL", &defaults.pitching_col),
        notes_col: env_string("METRICS_NOTES_COL", &defaults.notes_col),
    }
}

/// Tunable fuzzy accept threshold, clamped to a sane band.
fn match_threshold_from_env() -> u8 {
    env::var("STREAMER_MATCH_THRESHOLD")
        .ok()
        .and_then(|v| v.trim().parse::<u8>().ok())
        .map(|t| t.clamp(50, 100))
        .unwrap_or(DEFAULT_THRESHOLD)
}

fn env_string(key: &str, default: &str) -> String {
    env_opt(key).unwrap_or_else(|| default.to_string())
}

fn env_opt(key: &str) -> Option<String> {
    match env::var(key) {
        Ok(val) => {
            let trimmed = val.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        }
        Err(_) => None,
    }
}

fn env_flag(key: &str, default: bool) -> bool {
    match env::var(key) {
        Ok(val) => matches!(val.trim(), "1" | "true" | "yes" | "on"),
        Err(_) => default,
    }
}
