use anyhow::Result;

use streamer_sheet::config::RunConfig;
use streamer_sheet::reconcile::{self, MergedRecord, RunReport};
use streamer_sheet::team_codes::TeamRankTable;
use streamer_sheet::{export, rankings_fetch, roster_fetch, sheet_fetch};

fn main() -> Result<()> {
    let _ = dotenvy::from_filename(".env.local");
    let _ = dotenvy::from_filename(".env");
    let cfg = RunConfig::from_env();

    // Primary source. Any failure here is fatal: without the ranked list
    // there is nothing to reconcile and no output should be written.
    let post = rankings_fetch::fetch_latest_rankings(&cfg.posts_endpoint)?;
    println!("Post: {}", post.title);
    println!("URL: {}", post.url);
    let ranked = rankings_fetch::parse_rankings_html(&post.html);
    println!("Ranked entries: {}", ranked.len());

    // Secondary sources degrade individually; an unreachable feed only
    // leaves its columns unmatched.
    let roster = match &cfg.espn {
        Some(auth) => match roster_fetch::fetch_free_agents(auth) {
            Ok(roster) => roster,
            Err(err) => {
                eprintln!("[WARN] roster feed degraded: {err:#}");
                Vec::new()
            }
        },
        None => {
            eprintln!("[WARN] league credentials missing; roster feed skipped");
            Vec::new()
        }
    };

    let metrics = match &cfg.source_sheet_id {
        Some(sheet_id) => {
            match sheet_fetch::fetch_metrics(sheet_id, &cfg.metrics_tab, &cfg.metrics_spec) {
                Ok(rows) => rows,
                Err(err) => {
                    eprintln!("[WARN] metrics sheet degraded: {err:#}");
                    Vec::new()
                }
            }
        }
        None => {
            eprintln!("[WARN] SOURCE_SHEET_ID missing; metrics sheet skipped");
            Vec::new()
        }
    };

    let team_names = match (&cfg.source_sheet_id, &cfg.team_rank_tab) {
        (Some(sheet_id), Some(tab)) => {
            match sheet_fetch::fetch_team_list(sheet_id, tab, cfg.team_tab_has_header) {
                Ok(names) => names,
                Err(err) => {
                    eprintln!("[WARN] team rank list degraded: {err:#}");
                    Vec::new()
                }
            }
        }
        _ => Vec::new(),
    };
    let team_ranks = TeamRankTable::from_ordered_names(&team_names);

    let (rows, report) = reconcile::reconcile(
        &ranked,
        &roster,
        &metrics,
        &team_ranks,
        &cfg.match_config,
    )?;

    export::write_table(&cfg.output_path, &cfg.output_tab, &rows)?;
    println!(
        "Wrote {} rows to {} ({})",
        rows.len(),
        cfg.output_path.display(),
        cfg.output_tab
    );

    print_report(&report, &rows);
    Ok(())
}

fn print_report(report: &RunReport, rows: &[MergedRecord]) {
    println!(
        "Reconciled {}/{} entries ({} Do Not Start dropped)",
        rows.len(),
        report.ranked_total,
        report.dropped_do_not_start
    );
    if report.missing_opponent_rank > 0 {
        println!("Opponent rank missing: {}", report.missing_opponent_rank);
    }
    print_unmatched("roster", &report.roster_unmatched);
    print_unmatched("metrics", &report.metrics_unmatched);
    for note in &report.degradations {
        println!("[DEGRADED] {note}");
    }
}

fn print_unmatched(source: &str, players: &[String]) {
    if players.is_empty() {
        return;
    }
    println!("Unmatched against {source}: {}", players.len());
    for player in players.iter().take(6) {
        println!(" - {player}");
    }
}
