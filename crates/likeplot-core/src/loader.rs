// File: crates/likeplot-core/src/loader.rs
// Summary: CSV loaders for the three chart inputs (likes per age group, platform averages, daily averages).
// Notes:
// - Headers are matched exactly; extra columns are ignored.
// - Measurements are coerced from text and must be finite; bad cells fail the whole load.

use std::io::Read;
use std::path::Path;

use chrono::NaiveDate;
use csv::StringRecord;

use crate::error::DataError;
use crate::stats::Record;

/// One bar of the grouped bar chart.
#[derive(Clone, Debug, PartialEq)]
pub struct PlatformAverage {
    pub platform: String,
    pub post_type: String,
    pub avg_likes: f64,
}

/// One point of the daily line chart.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DailyAverage {
    pub date: NaiveDate,
    pub avg_likes: f64,
}

const DATE_FORMATS: &[&str] = &["%m/%d/%Y (%A)", "%m/%d/%Y", "%Y-%m-%d"];

/// Load `AgeGroup,Likes` rows as rollup records.
pub fn load_likes(path: impl AsRef<Path>) -> Result<Vec<Record>, DataError> {
    let rdr = open(path.as_ref())?;
    read_likes(rdr)
}

pub fn load_likes_from_reader<R: Read>(reader: R) -> Result<Vec<Record>, DataError> {
    read_likes(csv_reader(reader))
}

/// Load `Platform,PostType,AvgLikes` rows.
pub fn load_platform_averages(path: impl AsRef<Path>) -> Result<Vec<PlatformAverage>, DataError> {
    let rdr = open(path.as_ref())?;
    read_platform_averages(rdr)
}

pub fn load_platform_averages_from_reader<R: Read>(reader: R) -> Result<Vec<PlatformAverage>, DataError> {
    read_platform_averages(csv_reader(reader))
}

/// Load `Date,AvgLikes` rows, sorted by date.
pub fn load_daily_averages(path: impl AsRef<Path>) -> Result<Vec<DailyAverage>, DataError> {
    let rdr = open(path.as_ref())?;
    read_daily_averages(rdr)
}

pub fn load_daily_averages_from_reader<R: Read>(reader: R) -> Result<Vec<DailyAverage>, DataError> {
    read_daily_averages(csv_reader(reader))
}

// ---- helpers ----------------------------------------------------------------

fn open(path: &Path) -> Result<csv::Reader<std::fs::File>, DataError> {
    let file = std::fs::File::open(path)?;
    tracing::debug!(path = %path.display(), "opened csv");
    Ok(csv_reader(file))
}

fn csv_reader<R: Read>(reader: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader)
}

fn column(headers: &StringRecord, name: &'static str) -> Result<usize, DataError> {
    headers
        .iter()
        .position(|h| h == name)
        .ok_or(DataError::MissingColumn { column: name })
}

fn line_of(rec: &StringRecord) -> u64 {
    rec.position().map(|p| p.line()).unwrap_or(0)
}

fn text(rec: &StringRecord, ix: usize) -> &str {
    rec.get(ix).unwrap_or("")
}

fn number(rec: &StringRecord, ix: usize, name: &'static str) -> Result<f64, DataError> {
    let raw = text(rec, ix);
    match raw.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(DataError::NonNumeric { line: line_of(rec), column: name, value: raw.to_string() }),
    }
}

fn date(rec: &StringRecord, ix: usize) -> Result<NaiveDate, DataError> {
    let raw = text(rec, ix);
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
        .ok_or_else(|| DataError::BadDate { line: line_of(rec), value: raw.to_string() })
}

fn read_likes<R: Read>(mut rdr: csv::Reader<R>) -> Result<Vec<Record>, DataError> {
    let headers = rdr.headers()?.clone();
    let i_group = column(&headers, "AgeGroup")?;
    let i_likes = column(&headers, "Likes")?;

    let mut out = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        out.push(Record::new(text(&rec, i_group), number(&rec, i_likes, "Likes")?));
    }
    tracing::debug!(rows = out.len(), "loaded likes");
    Ok(out)
}

fn read_platform_averages<R: Read>(mut rdr: csv::Reader<R>) -> Result<Vec<PlatformAverage>, DataError> {
    let headers = rdr.headers()?.clone();
    let i_platform = column(&headers, "Platform")?;
    let i_type = column(&headers, "PostType")?;
    let i_avg = column(&headers, "AvgLikes")?;

    let mut out = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        out.push(PlatformAverage {
            platform: text(&rec, i_platform).to_string(),
            post_type: text(&rec, i_type).to_string(),
            avg_likes: number(&rec, i_avg, "AvgLikes")?,
        });
    }
    tracing::debug!(rows = out.len(), "loaded platform averages");
    Ok(out)
}

fn read_daily_averages<R: Read>(mut rdr: csv::Reader<R>) -> Result<Vec<DailyAverage>, DataError> {
    let headers = rdr.headers()?.clone();
    let i_date = column(&headers, "Date")?;
    let i_avg = column(&headers, "AvgLikes")?;

    let mut out = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        out.push(DailyAverage { date: date(&rec, i_date)?, avg_likes: number(&rec, i_avg, "AvgLikes")? });
    }
    out.sort_by_key(|d| d.date);
    tracing::debug!(rows = out.len(), "loaded daily averages");
    Ok(out)
}
