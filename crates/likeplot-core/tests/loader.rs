// File: crates/likeplot-core/tests/loader.rs
// Purpose: Validate CSV loading for the three chart inputs, including rejection of bad cells.

use std::io::Write;

use chrono::NaiveDate;
use likeplot_core::loader::{
    load_daily_averages, load_daily_averages_from_reader, load_likes, load_likes_from_reader,
    load_platform_averages_from_reader,
};
use likeplot_core::{DataError, Record};

fn temp_csv(contents: &str) -> tempfile::NamedTempFile {
    let mut f = tempfile::Builder::new().suffix(".csv").tempfile().expect("tempfile");
    f.write_all(contents.as_bytes()).expect("write csv");
    f.flush().expect("flush");
    f
}

#[test]
fn likes_from_file() {
    let f = temp_csv("Platform,AgeGroup,Likes\nInstagram,18-24, 120\nTwitter,25-34,45\n");
    let rows = load_likes(f.path()).expect("load");
    assert_eq!(rows, vec![Record::new("18-24", 120.0), Record::new("25-34", 45.0)]);
}

#[test]
fn likes_missing_column() {
    let err = load_likes_from_reader("AgeGroup,Count\n18-24,3\n".as_bytes()).unwrap_err();
    assert!(matches!(err, DataError::MissingColumn { column: "Likes" }), "{err}");
}

#[test]
fn likes_non_numeric_reports_line() {
    let err = load_likes_from_reader("AgeGroup,Likes\n18-24,3\n25-34,lots\n".as_bytes()).unwrap_err();
    match err {
        DataError::NonNumeric { line, column, value } => {
            assert_eq!(line, 3);
            assert_eq!(column, "Likes");
            assert_eq!(value, "lots");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn likes_nan_is_not_a_number() {
    let err = load_likes_from_reader("AgeGroup,Likes\n18-24,NaN\n".as_bytes()).unwrap_err();
    assert!(matches!(err, DataError::NonNumeric { .. }));
}

#[test]
fn missing_file_is_io_error() {
    let err = load_likes("definitely/not/here.csv").unwrap_err();
    assert!(matches!(err, DataError::Io(_)));
}

#[test]
fn platform_averages_keep_row_order() {
    let csv = "Platform,PostType,AvgLikes\nFacebook,Image,101.5\nFacebook,Video,88\nInstagram,Image,240.25\n";
    let rows = load_platform_averages_from_reader(csv.as_bytes()).expect("load");
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0].platform, "Facebook");
    assert_eq!(rows[1].post_type, "Video");
    assert_eq!(rows[2].avg_likes, 240.25);
}

#[test]
fn daily_averages_parse_weekday_dates_and_sort() {
    let csv = "Date,AvgLikes\n3/2/2024 (Saturday),12.5\n3/1/2024 (Friday),10\n03/03/2024,8\n";
    let rows = load_daily_averages_from_reader(csv.as_bytes()).expect("load");
    let dates: Vec<NaiveDate> = rows.iter().map(|d| d.date).collect();
    assert_eq!(
        dates,
        (1..=3).map(|d| NaiveDate::from_ymd_opt(2024, 3, d).unwrap()).collect::<Vec<_>>()
    );
    assert_eq!(rows[0].avg_likes, 10.0);
}

#[test]
fn daily_averages_bad_date() {
    let f = temp_csv("Date,AvgLikes\nyesterday,3\n");
    let err = load_daily_averages(f.path()).unwrap_err();
    assert!(matches!(err, DataError::BadDate { line: 2, .. }), "{err}");
}
