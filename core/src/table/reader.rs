use crate::error::{NlstError, Result};
use crate::types::{AbnormalityRecord, ResolveMode};
use csv::StringRecord;
use log::info;
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;

pub const PID: &str = "pid";
pub const STUDY_YR: &str = "study_yr";
pub const SCT_SLICE_NUM: &str = "sct_slice_num";
pub const SCT_AB_DESC: &str = "sct_ab_desc";

/// Columns the input table must carry
///
/// `pid` and `study_yr` are always needed. Slice mode also needs the slice
/// number and description; filtering by description needs the description.
pub fn required_columns(mode: ResolveMode, filter_by_desc: bool) -> Vec<&'static str> {
    let mut columns = vec![PID, STUDY_YR];
    if mode.is_slice() {
        columns.push(SCT_SLICE_NUM);
    }
    if mode.is_slice() || filter_by_desc {
        columns.push(SCT_AB_DESC);
    }
    columns
}

#[derive(Debug, Deserialize)]
struct RawRow {
    pid: String,
    study_yr: String,
    sct_slice_num: Option<String>,
    sct_ab_desc: Option<String>,
}

/// Input table: raw rows for pass-through plus the parsed records
///
/// `rows[i]` is the source row of `records[i]`.
#[derive(Debug, Clone)]
pub struct AbnormalityTable {
    pub headers: StringRecord,
    pub rows: Vec<StringRecord>,
    pub records: Vec<AbnormalityRecord>,
}

impl AbnormalityTable {
    /// Reads an abnormality CSV from disk
    ///
    /// When `ab_desc` is given only rows with that `sct_ab_desc` are kept.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, lacks a required column,
    /// or holds a malformed `pid`, `study_yr` or `sct_slice_num` cell
    pub fn read(path: &Path, mode: ResolveMode, ab_desc: Option<&str>) -> Result<Self> {
        let file = File::open(path)?;
        let table = Self::from_reader(file, path, mode, ab_desc)?;
        info!(
            "Read {} abnormality rows from {}",
            table.len(),
            path.display()
        );
        Ok(table)
    }

    /// Reads an abnormality CSV from any reader; `source` names it in errors
    pub fn from_reader<R: Read>(
        reader: R,
        source: &Path,
        mode: ResolveMode,
        ab_desc: Option<&str>,
    ) -> Result<Self> {
        let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::Headers).from_reader(reader);
        let headers = rdr.headers()?.clone();

        let missing: Vec<String> = required_columns(mode, ab_desc.is_some())
            .into_iter()
            .filter(|column| !headers.iter().any(|h| h == *column))
            .map(String::from)
            .collect();
        if !missing.is_empty() {
            return Err(NlstError::MissingColumns {
                path: source.to_path_buf(),
                columns: missing,
            });
        }

        let mut rows = Vec::new();
        let mut records = Vec::new();
        for (idx, result) in rdr.records().enumerate() {
            let row = result?;
            let raw: RawRow = row.deserialize(Some(&headers))?;
            let record = AbnormalityRecord::from_cells(
                idx + 1,
                &raw.pid,
                &raw.study_yr,
                raw.sct_slice_num.as_deref(),
                raw.sct_ab_desc.as_deref(),
            )?;

            if let Some(code) = ab_desc {
                if !same_code(&record.sct_ab_desc, code) {
                    continue;
                }
            }

            rows.push(row);
            records.push(record);
        }

        Ok(Self {
            headers,
            rows,
            records,
        })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Compares description codes, treating `51` and `51.0` as equal
fn same_code(value: &str, code: &str) -> bool {
    let (value, code) = (value.trim(), code.trim());
    if value == code {
        return true;
    }
    match (value.parse::<f64>(), code.parse::<f64>()) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}
