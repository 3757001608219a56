use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::ArgMatches;
use tracing::debug;

use posvid_core::PositionDeriver;
use posvid_io::{WriteOptions, read_table, write_table};

use crate::table_args;

pub fn run_position(matches: &ArgMatches) -> Result<()> {
    // get arguments from CLI
    let input = table_args::input_path(matches);
    let output = matches
        .get_one::<String>("out")
        .map(PathBuf::from)
        .unwrap_or_else(|| input.clone());
    let read_options = table_args::read_options(matches)?;
    let dry_run = matches.get_flag("dry-run");

    let mut builder = PositionDeriver::builder();
    if let Some(column) = matches.get_one::<String>("video-col") {
        builder = builder.with_source_column(column.clone());
    }
    if let Some(target) = matches.get_one::<String>("target-col") {
        builder = builder.with_target_column(target.clone());
    }
    if let Some(sibling) = matches.get_one::<String>("sibling") {
        builder = builder.with_sibling_name(sibling.clone());
    }
    let deriver = builder.finish()?;

    let mut table = read_table(&input, &read_options)
        .with_context(|| format!("Failed to read table: {}", input.display()))?;

    let derivation = deriver.derive(&mut table)?;
    debug!(?derivation, "derivation complete");

    if dry_run {
        println!(
            "Dry run. video_col={}, would write to: {}",
            derivation.source_column,
            output.display()
        );
        return Ok(());
    }

    // an explicit --sep applies to the output too
    let mut write_options = WriteOptions::new();
    if let Some(delimiter) = read_options.delimiter {
        write_options = write_options.with_delimiter(delimiter);
    }
    write_table(&output, &table, &write_options)
        .with_context(|| format!("Failed to write table: {}", output.display()))?;

    println!(
        "Done. video_col={}, written to: {}",
        derivation.source_column,
        output.display()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::fs;
    use std::path::Path;

    use pretty_assertions::assert_eq;
    use rstest::*;

    use crate::position::cli::create_position_cli;

    fn run(args: &[&str]) -> Result<()> {
        let matches = create_position_cli()
            .try_get_matches_from(std::iter::once("position").chain(args.iter().copied()))?;
        run_position(&matches)
    }

    fn write_csv(dir: &Path, contents: &str) -> PathBuf {
        let path = dir.join("dataset_metadata.csv");
        fs::write(&path, contents).unwrap();
        path
    }

    #[fixture]
    fn tempdir() -> tempfile::TempDir {
        tempfile::tempdir().unwrap()
    }

    #[rstest]
    fn test_overwrites_input_by_default(tempdir: tempfile::TempDir) {
        let csv = write_csv(
            tempdir.path(),
            "video,prompt\n/data/a/clip1.mp4,a cat\n/data/b/clip2.MP4,a dog\n",
        );

        run(&["--csv", csv.to_str().unwrap()]).unwrap();

        assert_eq!(
            fs::read_to_string(&csv).unwrap(),
            "video,prompt,position_video\n\
             /data/a/clip1.mp4,a cat,/data/a/position.mp4\n\
             /data/b/clip2.MP4,a dog,/data/b/position.mp4\n"
        );
    }

    #[rstest]
    fn test_writes_to_out_and_keeps_input(tempdir: tempfile::TempDir) {
        let original = "id,clip\n1,x/a.mp4\n2,y/b.mp4\n";
        let csv = write_csv(tempdir.path(), original);
        let out = tempdir.path().join("out/with_position.csv");

        run(&["--csv", csv.to_str().unwrap(), "--out", out.to_str().unwrap()]).unwrap();

        assert_eq!(fs::read_to_string(&csv).unwrap(), original);
        assert_eq!(
            fs::read_to_string(&out).unwrap(),
            "id,clip,position_video\n1,x/a.mp4,x/position.mp4\n2,y/b.mp4,y/position.mp4\n"
        );
    }

    #[rstest]
    fn test_explicit_column_bypasses_inference(tempdir: tempfile::TempDir) {
        let csv = write_csv(tempdir.path(), "video,raw\na.mp4,takes/t1\n");

        run(&["--csv", csv.to_str().unwrap(), "--video-col", "raw"]).unwrap();

        assert_eq!(
            fs::read_to_string(&csv).unwrap(),
            "video,raw,position_video\na.mp4,takes/t1,takes/position.mp4\n"
        );
    }

    #[rstest]
    fn test_missing_explicit_column_fails_without_writing(tempdir: tempfile::TempDir) {
        let original = "video\na.mp4\n";
        let csv = write_csv(tempdir.path(), original);

        let err = run(&["--csv", csv.to_str().unwrap(), "--video-col", "nope"]).unwrap_err();

        assert!(err.to_string().contains("nope"));
        assert_eq!(fs::read_to_string(&csv).unwrap(), original);
    }

    #[rstest]
    fn test_inference_failure_is_an_error(tempdir: tempfile::TempDir) {
        let csv = write_csv(tempdir.path(), "name,notes\nalpha,first\nbeta,second\n");

        let err = run(&["--csv", csv.to_str().unwrap()]).unwrap_err();

        assert!(err.to_string().contains("--video-col"));
    }

    #[rstest]
    fn test_unreadable_input_is_an_error(tempdir: tempfile::TempDir) {
        let missing = tempdir.path().join("missing.csv");

        let err = run(&["--csv", missing.to_str().unwrap()]).unwrap_err();

        assert!(err.to_string().contains("Failed to read table"));
    }

    #[rstest]
    fn test_dry_run_writes_nothing(tempdir: tempfile::TempDir) {
        let original = "video\na.mp4\n";
        let csv = write_csv(tempdir.path(), original);
        let out = tempdir.path().join("out.csv");

        run(&["--csv", csv.to_str().unwrap(), "--out", out.to_str().unwrap(), "--dry-run"])
            .unwrap();

        assert!(!out.exists());
        assert_eq!(fs::read_to_string(&csv).unwrap(), original);
    }

    #[rstest]
    fn test_custom_target_and_separator(tempdir: tempfile::TempDir) {
        let csv = write_csv(tempdir.path(), "clip;n\nx/a.mp4;1\n");

        run(&[
            "--csv",
            csv.to_str().unwrap(),
            "--sep",
            ";",
            "--target-col",
            "depth_video",
            "--sibling",
            "depth.mp4",
        ])
        .unwrap();

        assert_eq!(
            fs::read_to_string(&csv).unwrap(),
            "clip;n;depth_video\nx/a.mp4;1;x/depth.mp4\n"
        );
    }
}
