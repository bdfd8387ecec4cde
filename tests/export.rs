use std::fs;

use streamer_sheet::export::write_table;
use streamer_sheet::reconcile::{MatchConfig, RankedPitcher, Tier, reconcile};
use streamer_sheet::team_codes::TeamRankTable;

#[test]
fn workbook_write_replaces_previous_file() {
    let primary = vec![RankedPitcher {
        tier: Some(Tier::AutoStart),
        player: "Zack Wheeler".to_string(),
        opponent: Some("ATL".to_string()),
        blurb: "Solid matchup".to_string(),
    }];
    let (rows, _) = reconcile(
        &primary,
        &[],
        &[],
        &TeamRankTable::from_ordered_names::<String>(&[]),
        &MatchConfig::default(),
    )
    .expect("run should succeed");

    let path = std::env::temp_dir().join("streamer_sheet_export_test.xlsx");
    let _ = fs::remove_file(&path);

    write_table(&path, "Streamers", &rows).expect("first write should succeed");
    let first_len = fs::metadata(&path).expect("file should exist").len();
    assert!(first_len > 0);

    // Second save overwrites in place rather than appending.
    write_table(&path, "Streamers", &rows).expect("second write should succeed");
    assert!(fs::metadata(&path).expect("file should exist").len() > 0);

    let _ = fs::remove_file(&path);
}

#[test]
fn invalid_worksheet_name_is_a_sink_error() {
    let path = std::env::temp_dir().join("streamer_sheet_export_invalid.xlsx");
    // Worksheet names cannot contain '/'.
    let err = write_table(&path, "Ranks 6/12", &[]).unwrap_err();
    assert!(err.to_string().contains("worksheet"), "{err}");
    let _ = fs::remove_file(&path);
}
