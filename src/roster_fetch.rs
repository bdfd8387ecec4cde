//! Fantasy roster feed provider: available players from an ESPN fantasy
//! baseball league. Contributes only display names (plus the eligibility tags
//! the engine filters on); everything else about the platform stays outside
//! the pipeline.

use anyhow::{Context, Result};
use serde_json::Value;

use crate::http_client::http_client;
use crate::reconcile::RosterPlayer;

const FANTASY_API_BASE: &str = "https://lm-api-reads.fantasy.espn.com/apis/v3/games/flb";
const FREE_AGENT_LIMIT: u32 = 500;

/// ESPN lineup slot ids for the tags the engine recognizes. Non-pitcher slots
/// are carried through as raw ids; the pitcher filter never looks at them.
const SLOT_TAGS: &[(u64, &str)] = &[(13, "P"), (14, "SP"), (15, "RP")];

#[derive(Debug, Clone)]
pub struct LeagueAuth {
    pub league_id: String,
    pub season: u32,
    pub espn_s2: String,
    pub swid: String,
}

pub fn fetch_free_agents(auth: &LeagueAuth) -> Result<Vec<RosterPlayer>> {
    let client = http_client()?;
    let url = format!(
        "{FANTASY_API_BASE}/seasons/{}/segments/0/leagues/{}?view=kona_player_info",
        auth.season, auth.league_id
    );
    let filter = serde_json::json!({
        "players": {
            "filterStatus": { "value": ["FREEAGENT", "WAIVERS"] },
            "filterSlotIds": { "value": [13, 14, 15] },
            "limit": FREE_AGENT_LIMIT,
        }
    });
    let body = client
        .get(&url)
        .header("X-Fantasy-Filter", filter.to_string())
        .header(
            reqwest::header::COOKIE,
            format!("espn_s2={}; SWID={}", auth.espn_s2, auth.swid),
        )
        .send()
        .context("roster feed request failed")?
        .error_for_status()
        .context("roster feed request rejected")?
        .text()
        .context("roster feed body unreadable")?;
    parse_free_agents_json(&body)
}

pub fn parse_free_agents_json(raw: &str) -> Result<Vec<RosterPlayer>> {
    let v: Value = serde_json::from_str(raw.trim()).context("invalid roster json")?;
    let mut out = Vec::new();
    let Some(players) = v.get("players").and_then(|x| x.as_array()) else {
        return Ok(out);
    };
    for entry in players {
        let Some(player) = entry.get("player") else {
            continue;
        };
        let Some(name) = player.get("fullName").and_then(|x| x.as_str()) else {
            continue;
        };
        let eligible_slots = player
            .get("eligibleSlots")
            .and_then(|x| x.as_array())
            .map(|slots| {
                slots
                    .iter()
                    .filter_map(|s| s.as_u64())
                    .map(slot_tag)
                    .collect()
            })
            .unwrap_or_default();
        out.push(RosterPlayer {
            name: name.to_string(),
            eligible_slots,
        });
    }
    Ok(out)
}

fn slot_tag(slot_id: u64) -> String {
    SLOT_TAGS
        .iter()
        .find(|(id, _)| *id == slot_id)
        .map(|(_, tag)| tag.to_string())
        .unwrap_or_else(|| slot_id.to_string())
}
