//! # Video column inference
//!
//! Picks the column of a [Table] that holds video paths. Well-known column
//! names win outright; failing that, every column is scored by the share of
//! its non-null values that end in `.mp4` and the best column is used if it
//! clears [MIN_VIDEO_LIKENESS].
use tracing::debug;

use crate::consts::{COMMON_VIDEO_COLUMNS, MIN_VIDEO_LIKENESS, VIDEO_SUFFIX};
use crate::errors::PositionError;
use crate::models::{Column, Table, Value};

///
/// A column paired with its video-likeness score.
///
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColumnCandidate {
    pub name: String,
    pub score: f64,
    pub non_null: usize,
}

///
/// Fraction of non-null values whose lowercase text ends in `.mp4`.
///
/// Returns `None` when there are no non-null values to score.
pub fn video_likeness<'a, I>(values: I) -> Option<f64>
where
    I: IntoIterator<Item = &'a Value>,
{
    let (hits, total) = values
        .into_iter()
        .filter_map(Value::as_text)
        .fold((0usize, 0usize), |(hits, total), text| {
            let hit = ends_with_ignore_case(text, VIDEO_SUFFIX);
            (hits + usize::from(hit), total + 1)
        });

    if total == 0 {
        None
    } else {
        Some(hits as f64 / total as f64)
    }
}

fn ends_with_ignore_case(text: &str, suffix: &str) -> bool {
    text.to_lowercase().ends_with(suffix)
}

fn score_column(column: &Column) -> Option<ColumnCandidate> {
    video_likeness(&column.values).map(|score| ColumnCandidate {
        name: column.name.clone(),
        score,
        non_null: column.non_null_count(),
    })
}

///
/// Score every column that has at least one non-null value, in column order.
///
pub fn score_columns(table: &Table) -> Vec<ColumnCandidate> {
    table.columns().iter().filter_map(score_column).collect()
}

///
/// First column of the table whose name is on the well-known list, in list order.
///
pub fn common_name_column(table: &Table) -> Option<&'static str> {
    COMMON_VIDEO_COLUMNS
        .iter()
        .copied()
        .find(|name| table.has_column(name))
}

///
/// Highest scoring candidate. Ties keep the earliest column.
///
pub fn best_candidate(candidates: &[ColumnCandidate]) -> Option<&ColumnCandidate> {
    candidates.iter().fold(None, |best, c| match best {
        Some(b) if c.score <= b.score => Some(b),
        _ => Some(c),
    })
}

///
/// Determine which column holds video paths.
///
/// # Arguments
/// - table: the table to inspect
/// - explicit: a caller supplied column name; returned as-is without checking the table
///
/// # Returns
/// - the column name, or [PositionError::ColumnInference] when nothing qualifies
pub fn infer_video_column(table: &Table, explicit: Option<&str>) -> Result<String, PositionError> {
    if let Some(name) = explicit {
        debug!(column = name, "using explicitly supplied video column");
        return Ok(name.to_string());
    }

    if let Some(name) = common_name_column(table) {
        debug!(column = name, "matched well-known video column name");
        return Ok(name.to_string());
    }

    let candidates = score_columns(table);
    for c in &candidates {
        debug!(column = %c.name, score = c.score, non_null = c.non_null, "scored column");
    }

    match best_candidate(&candidates) {
        None => Err(PositionError::ColumnInference(
            "no column has any non-empty values".to_string(),
        )),
        Some(best) if best.score < MIN_VIDEO_LIKENESS => {
            Err(PositionError::ColumnInference(format!(
                "best candidate '{}' has only {:.0}% of values ending in {}",
                best.name,
                best.score * 100.0,
                VIDEO_SUFFIX
            )))
        }
        Some(best) => {
            debug!(column = %best.name, score = best.score, "inferred video column from contents");
            Ok(best.name.clone())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    fn column(name: &str, values: &[Option<&str>]) -> Column {
        Column::new(name, values.iter().map(|v| Value::from(*v)).collect())
    }

    fn table(columns: Vec<Column>) -> Table {
        Table::from_columns(columns).unwrap()
    }

    #[rstest]
    fn test_explicit_column_is_returned_unchecked() {
        let t = table(vec![column("video", &[Some("a.mp4")])]);
        assert_eq!(
            infer_video_column(&t, Some("not_there")).unwrap(),
            "not_there"
        );
    }

    #[rstest]
    fn test_common_name_wins_regardless_of_content() {
        let t = table(vec![
            column("clips", &[Some("a.mp4"), Some("b.mp4")]),
            column("video", &[Some("42"), None]),
        ]);
        assert_eq!(infer_video_column(&t, None).unwrap(), "video");
    }

    #[rstest]
    fn test_common_names_follow_priority_order() {
        let t = table(vec![
            column("ref_video", &[Some("a.mp4")]),
            column("path", &[Some("x")]),
            column("video_path", &[Some("y")]),
        ]);
        assert_eq!(infer_video_column(&t, None).unwrap(), "video_path");
    }

    #[rstest]
    fn test_common_name_matches_on_empty_table() {
        let t = table(vec![column("id", &[]), column("driving_video", &[])]);
        assert_eq!(infer_video_column(&t, None).unwrap(), "driving_video");
    }

    #[rstest]
    fn test_picks_column_by_content() {
        let t = table(vec![
            column("id", &[Some("1"), Some("2"), Some("3"), Some("4")]),
            column("clip", &[Some("a.mp4"), Some("b.MP4"), Some("c.avi"), None]),
            column("note", &[Some("x.mp4"), Some("y"), Some("z"), Some("w")]),
        ]);
        assert_eq!(infer_video_column(&t, None).unwrap(), "clip");
    }

    #[rstest]
    fn test_exactly_half_qualifies() {
        let t = table(vec![column("clip", &[Some("a.mp4"), Some("b.txt")])]);
        assert_eq!(infer_video_column(&t, None).unwrap(), "clip");
    }

    #[rstest]
    fn test_tie_keeps_first_column() {
        let t = table(vec![
            column("first", &[Some("a.mp4"), Some("b")]),
            column("second", &[Some("c.mp4"), Some("d")]),
        ]);
        assert_eq!(infer_video_column(&t, None).unwrap(), "first");
    }

    #[rstest]
    fn test_all_below_threshold_fails() {
        let t = table(vec![
            column("a", &[Some("x.mp4"), Some("y"), Some("z")]),
            column("b", &[Some("1"), Some("2"), Some("3")]),
        ]);
        let err = infer_video_column(&t, None).unwrap_err();
        assert!(matches!(err, PositionError::ColumnInference(_)));
        assert!(err.to_string().contains("--video-col"));
    }

    #[rstest]
    fn test_empty_table_without_common_name_fails() {
        let t = table(vec![column("a", &[]), column("b", &[])]);
        assert!(matches!(
            infer_video_column(&t, None),
            Err(PositionError::ColumnInference(_))
        ));
    }

    #[rstest]
    fn test_all_null_columns_fail() {
        let t = table(vec![column("a", &[None, None])]);
        assert!(matches!(
            infer_video_column(&t, None),
            Err(PositionError::ColumnInference(_))
        ));
    }

    #[rstest]
    #[case(&[Some("a.mp4"), Some("b.MP4")], Some(1.0))]
    #[case(&[Some("a.mp4"), None, Some("b.txt"), None], Some(0.5))]
    #[case(&[None, None], None)]
    #[case(&[], None)]
    fn test_video_likeness(#[case] values: &[Option<&str>], #[case] expected: Option<f64>) {
        let c = column("c", values);
        assert_eq!(video_likeness(&c.values), expected);
    }

    #[rstest]
    fn test_score_columns_skips_empty_columns() {
        let t = table(vec![
            column("a", &[Some("a.mp4"), Some("b")]),
            column("b", &[None, None]),
        ]);
        let scores = score_columns(&t);
        assert_eq!(
            scores,
            vec![ColumnCandidate {
                name: "a".to_string(),
                score: 0.5,
                non_null: 2
            }]
        );
    }
}
