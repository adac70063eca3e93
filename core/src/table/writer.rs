use crate::api::ResolvedRecord;
use crate::error::Result;
use crate::table::reader::AbnormalityTable;
use crate::types::ResolveMode;
use csv::StringRecord;
use log::info;
use std::fs::File;
use std::io::Write;
use std::path::Path;

pub const PATIENT_NOT_FOUND: &str = "patient_not_found";
pub const STUDY_YR_NOT_FOUND: &str = "study_yr_not_found";
pub const PATH: &str = "path";
pub const MANUFACTURER: &str = "manufacturer";
pub const KERNEL: &str = "kernel";
pub const SERIES_NUMBER: &str = "series_number";
pub const SLICE_THICKNESS: &str = "slice_thickness";
pub const SLICE_NOT_FOUND: &str = "slice_not_found";
pub const WRONG_SLICE_ANNOTATION: &str = "wrong_slice_annotation";
pub const SERIES_PATH: &str = "series_path";

/// Columns appended to the input table, in output order
pub fn result_columns(mode: ResolveMode) -> Vec<&'static str> {
    let mut columns = vec![
        PATIENT_NOT_FOUND,
        STUDY_YR_NOT_FOUND,
        PATH,
        MANUFACTURER,
        KERNEL,
        SERIES_NUMBER,
        SLICE_THICKNESS,
    ];
    match mode {
        ResolveMode::Slice => columns.extend([SLICE_NOT_FOUND, WRONG_SLICE_ANNOTATION]),
        ResolveMode::Folder => columns.push(SERIES_PATH),
    }
    columns
}

/// Writes the input table with result columns to `path`
pub fn write_table(
    path: &Path,
    table: &AbnormalityTable,
    resolved: &[ResolvedRecord],
    mode: ResolveMode,
) -> Result<()> {
    let file = File::create(path)?;
    write_table_to(file, table, resolved, mode)?;
    info!("Wrote {} rows to {}", resolved.len(), path.display());
    Ok(())
}

/// Writes the input table with result columns to any writer
///
/// Input columns keep their order. Result columns already present in the
/// input are overwritten in place; the rest are appended.
pub fn write_table_to<W: Write>(
    writer: W,
    table: &AbnormalityTable,
    resolved: &[ResolvedRecord],
    mode: ResolveMode,
) -> Result<()> {
    let mut headers: Vec<String> = table.headers.iter().map(String::from).collect();
    let mut positions = Vec::new();
    for column in result_columns(mode) {
        let pos = match headers.iter().position(|h| h == column) {
            Some(pos) => pos,
            None => {
                headers.push(column.to_string());
                headers.len() - 1
            }
        };
        positions.push((column, pos));
    }

    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(&headers)?;

    for (row, result) in table.rows.iter().zip(resolved) {
        let mut fields = padded(row, headers.len());
        for (column, pos) in &positions {
            fields[*pos] = cell(result, column);
        }
        wtr.write_record(&fields)?;
    }

    wtr.flush()?;
    Ok(())
}

fn padded(row: &StringRecord, width: usize) -> Vec<String> {
    let mut fields: Vec<String> = row.iter().map(String::from).collect();
    fields.resize(width, String::new());
    fields
}

fn flag(set: bool) -> String {
    if set {
        "1".to_string()
    } else {
        String::new()
    }
}

fn cell(result: &ResolvedRecord, column: &str) -> String {
    let series = result.series.as_ref();
    match column {
        PATIENT_NOT_FOUND => flag(result.patient_not_found),
        STUDY_YR_NOT_FOUND => flag(result.study_yr_not_found),
        SLICE_NOT_FOUND => flag(result.slice_not_found),
        PATH => display_path(result.resolved_path.as_deref()),
        SERIES_PATH => display_path(result.series_path.as_deref()),
        MANUFACTURER => series
            .and_then(|s| s.manufacturer.clone())
            .unwrap_or_default(),
        KERNEL => series.and_then(|s| s.kernel.clone()).unwrap_or_default(),
        SERIES_NUMBER => series
            .and_then(|s| s.series_number)
            .map(|n| n.to_string())
            .unwrap_or_default(),
        SLICE_THICKNESS => series
            .and_then(|s| s.slice_thickness)
            .map(|t| t.to_string())
            .unwrap_or_default(),
        WRONG_SLICE_ANNOTATION => result
            .wrong_slice_annotation
            .map(|w| w.to_string())
            .unwrap_or_default(),
        _ => String::new(),
    }
}

fn display_path(path: Option<&Path>) -> String {
    path.map(|p| p.display().to_string()).unwrap_or_default()
}
