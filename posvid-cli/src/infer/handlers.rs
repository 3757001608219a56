use anyhow::{Context, Result};
use clap::ArgMatches;
use serde::Serialize;
use tabled::{Table, Tabled};

use posvid_core::ColumnCandidate;
use posvid_core::consts::MIN_VIDEO_LIKENESS;
use posvid_core::inference::{common_name_column, infer_video_column, score_columns};
use posvid_io::read_table;

use crate::table_args;

#[derive(Tabled)]
struct CandidatePrint {
    column: String,
    score: String,
    non_null: usize,
}

#[derive(Serialize, Debug, PartialEq)]
struct InferenceReport {
    column: Option<String>,
    matched_by: Option<&'static str>,
    threshold: f64,
    candidates: Vec<ColumnCandidate>,
}

fn print_candidates(candidates: &[ColumnCandidate]) {
    let rows: Vec<CandidatePrint> = candidates
        .iter()
        .map(|c| CandidatePrint {
            column: c.name.clone(),
            score: format!("{:.3}", c.score),
            non_null: c.non_null,
        })
        .collect();

    println!("{}", Table::new(rows));
}

fn build_report(table: &posvid_core::models::Table) -> (InferenceReport, Result<String>) {
    let candidates = score_columns(table);
    let inferred = infer_video_column(table, None).map_err(anyhow::Error::from);

    let matched_by = match (&inferred, common_name_column(table)) {
        (Err(_), _) => None,
        (Ok(_), Some(_)) => Some("name"),
        (Ok(_), None) => Some("content"),
    };

    let report = InferenceReport {
        column: inferred.as_ref().ok().cloned(),
        matched_by,
        threshold: MIN_VIDEO_LIKENESS,
        candidates,
    };
    (report, inferred)
}

pub fn run_infer(matches: &ArgMatches) -> Result<()> {
    let input = table_args::input_path(matches);
    let read_options = table_args::read_options(matches)?;
    let as_json = matches.get_flag("json");

    let table = read_table(&input, &read_options)
        .with_context(|| format!("Failed to read table: {}", input.display()))?;

    let (report, inferred) = build_report(&table);

    if as_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_candidates(&report.candidates);
    }

    // the report is printed even when nothing qualifies
    let column = inferred?;
    if !as_json {
        println!(
            "video_col={} (matched by {})",
            column,
            report.matched_by.unwrap_or_default()
        );
    }

    Ok(())
}
