use std::collections::HashMap;

/// Ordered alias table mapping free-text team names to short codes.
///
/// Lookup is case-insensitive substring containment, first match wins, so the
/// order of this table is itself data: a more specific alias must appear
/// before any shorter alias it overlaps with. Nickname fragments come first
/// (unique across the league), then city-only fallbacks for feeds that name a
/// team by city alone — "White Sox" must be hit before the bare "Chicago"
/// fallback, "Mets" before "New York".
pub const TEAM_ALIASES: &[(&str, &str)] = &[
    ("Diamondbacks", "ARI"),
    ("D-backs", "ARI"),
    ("Braves", "ATL"),
    ("Orioles", "BAL"),
    ("Red Sox", "BOS"),
    ("White Sox", "CWS"),
    ("Cubs", "CHC"),
    ("Reds", "CIN"),
    ("Guardians", "CLE"),
    ("Rockies", "COL"),
    ("Tigers", "DET"),
    ("Astros", "HOU"),
    ("Royals", "KC"),
    ("Angels", "LAA"),
    ("Dodgers", "LAD"),
    ("Marlins", "MIA"),
    ("Brewers", "MIL"),
    ("Twins", "MIN"),
    ("Mets", "NYM"),
    ("Yankees", "NYY"),
    ("Athletics", "ATH"),
    ("Phillies", "PHI"),
    ("Pirates", "PIT"),
    ("Padres", "SD"),
    ("Mariners", "SEA"),
    ("Giants", "SF"),
    ("Cardinals", "STL"),
    ("Rays", "TB"),
    ("Rangers", "TEX"),
    ("Blue Jays", "TOR"),
    ("Nationals", "WSH"),
    // City-only fallbacks, after every nickname they could shadow.
    ("Chicago", "CHC"),
    ("New York", "NYY"),
    ("Los Angeles", "LAD"),
];

/// Resolve a free-text team display name to its short code via the first
/// alias that is a case-insensitive substring of it. None when nothing hits;
/// callers tolerate the miss.
pub fn code_for(team_display_name: &str) -> Option<&'static str> {
    let haystack = team_display_name.to_lowercase();
    TEAM_ALIASES
        .iter()
        .find(|(alias, _)| haystack.contains(&alias.to_lowercase()))
        .map(|(_, code)| *code)
}

/// Opponent-quality ranks keyed by team code. Rank N is the Nth row of an
/// externally ordered team list; the source order is trusted as-is.
#[derive(Debug, Clone, Default)]
pub struct TeamRankTable {
    rank_by_code: HashMap<&'static str, u32>,
}

impl TeamRankTable {
    pub fn from_ordered_names<S: AsRef<str>>(names: &[S]) -> Self {
        let mut rank_by_code = HashMap::new();
        for (idx, name) in names.iter().enumerate() {
            let Some(code) = code_for(name.as_ref()) else {
                continue;
            };
            // First occurrence keeps its rank if a feed repeats a team.
            rank_by_code.entry(code).or_insert(idx as u32 + 1);
        }
        Self { rank_by_code }
    }

    pub fn rank(&self, code: &str) -> Option<u32> {
        self.rank_by_code.get(code).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.rank_by_code.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rank_by_code.len()
    }
}
