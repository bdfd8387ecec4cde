use streamer_sheet::team_codes::{TeamRankTable, code_for};

#[test]
fn lookup_is_case_insensitive_substring() {
    assert_eq!(code_for("Atlanta Braves"), Some("ATL"));
    assert_eq!(code_for("ATLANTA BRAVES"), Some("ATL"));
    assert_eq!(code_for("the braves lineup"), Some("ATL"));
}

#[test]
fn specific_alias_beats_city_fallback() {
    // "Chicago White Sox" contains both "White Sox" and the bare "Chicago"
    // fallback; table order decides.
    assert_eq!(code_for("Chicago White Sox"), Some("CWS"));
    assert_eq!(code_for("Chicago Cubs"), Some("CHC"));
    assert_eq!(code_for("Chicago"), Some("CHC"));
    assert_eq!(code_for("New York Mets"), Some("NYM"));
    assert_eq!(code_for("New York"), Some("NYY"));
}

#[test]
fn unknown_team_is_none() {
    assert_eq!(code_for("Springfield Isotopes"), None);
    assert_eq!(code_for(""), None);
}

#[test]
fn rank_table_is_positional() {
    let names = [
        "Los Angeles Dodgers",
        "Atlanta Braves",
        "New York Mets",
        "Seattle Mariners",
    ];
    let table = TeamRankTable::from_ordered_names(&names);
    assert_eq!(table.rank("LAD"), Some(1));
    assert_eq!(table.rank("ATL"), Some(2));
    assert_eq!(table.rank("NYM"), Some(3));
    assert_eq!(table.rank("SEA"), Some(4));
    assert_eq!(table.rank("BOS"), None);
    assert_eq!(table.len(), 4);
}

#[test]
fn unresolvable_row_still_occupies_its_position() {
    // The external ordering is trusted as-is: row N maps to rank N even when
    // an earlier row fails to resolve to a code.
    let names = ["Springfield Isotopes", "Atlanta Braves"];
    let table = TeamRankTable::from_ordered_names(&names);
    assert_eq!(table.rank("ATL"), Some(2));
    assert_eq!(table.len(), 1);
}

#[test]
fn duplicate_team_keeps_first_rank() {
    let names = ["Atlanta Braves", "Braves"];
    let table = TeamRankTable::from_ordered_names(&names);
    assert_eq!(table.rank("ATL"), Some(1));
}
