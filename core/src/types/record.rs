use crate::error::{NlstError, Result};

/// One reported abnormality from the input table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AbnormalityRecord {
    /// Patient identifier, as used for the patient directory name
    pub pid: String,

    /// Screening round (0 for T0)
    pub study_yr: i32,

    /// Slice reported to contain the abnormality
    pub sct_slice_num: Option<u32>,

    /// Abnormality description code
    pub sct_ab_desc: String,
}

impl AbnormalityRecord {
    pub fn new(
        pid: impl Into<String>,
        study_yr: i32,
        sct_slice_num: Option<u32>,
        sct_ab_desc: impl Into<String>,
    ) -> Self {
        Self {
            pid: pid.into(),
            study_yr,
            sct_slice_num,
            sct_ab_desc: sct_ab_desc.into(),
        }
    }

    /// Builds a record from raw cells, `row` being the 1-based data row
    pub fn from_cells(
        row: usize,
        pid: &str,
        study_yr: &str,
        sct_slice_num: Option<&str>,
        sct_ab_desc: Option<&str>,
    ) -> Result<Self> {
        Ok(Self {
            pid: parse_pid(row, pid)?,
            study_yr: parse_study_yr(row, study_yr)?,
            sct_slice_num: match sct_slice_num {
                Some(cell) => parse_slice_num(row, cell)?,
                None => None,
            },
            sct_ab_desc: sct_ab_desc.map(|s| s.trim().to_string()).unwrap_or_default(),
        })
    }
}

/// Parses an integer cell, tolerating the `12.0` form written by dataframe
/// exports. Empty cells yield `None`.
fn parse_integral(row: usize, column: &'static str, cell: &str) -> Result<Option<i64>> {
    let cell = cell.trim();
    if cell.is_empty() {
        return Ok(None);
    }
    if let Ok(v) = cell.parse::<i64>() {
        return Ok(Some(v));
    }

    let invalid = || NlstError::InvalidCell {
        row,
        column,
        value: cell.to_string(),
    };
    let v: f64 = cell.parse().map_err(|_| invalid())?;
    if v.is_finite() && v.fract() == 0.0 && v.abs() < i64::MAX as f64 {
        Ok(Some(v as i64))
    } else {
        Err(invalid())
    }
}

fn parse_pid(row: usize, cell: &str) -> Result<String> {
    let trimmed = cell.trim();
    let invalid = || NlstError::InvalidCell {
        row,
        column: "pid",
        value: cell.to_string(),
    };

    if trimmed.is_empty() || trimmed.contains(['/', '\\']) || trimmed == "." || trimmed == ".." {
        return Err(invalid());
    }

    // Numeric ids are normalised; anything else is used verbatim
    match parse_integral(row, "pid", trimmed) {
        Ok(Some(v)) => Ok(v.to_string()),
        _ => Ok(trimmed.to_string()),
    }
}

fn parse_study_yr(row: usize, cell: &str) -> Result<i32> {
    parse_integral(row, "study_yr", cell)?
        .and_then(|v| i32::try_from(v).ok())
        .ok_or_else(|| NlstError::InvalidCell {
            row,
            column: "study_yr",
            value: cell.to_string(),
        })
}

fn parse_slice_num(row: usize, cell: &str) -> Result<Option<u32>> {
    match parse_integral(row, "sct_slice_num", cell)? {
        Some(v) => u32::try_from(v)
            .map(Some)
            .map_err(|_| NlstError::InvalidCell {
                row,
                column: "sct_slice_num",
                value: cell.to_string(),
            }),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_from_cells_basic() {
        let rec =
            AbnormalityRecord::from_cells(1, "100012", "0", Some("45"), Some("51")).unwrap();
        assert_eq!(rec, AbnormalityRecord::new("100012", 0, Some(45), "51"));
    }

    #[test]
    fn test_from_cells_float_forms() {
        let rec = AbnormalityRecord::from_cells(1, "100012.0", "2.0", Some("38.0"), Some(" 51 "))
            .unwrap();
        assert_eq!(rec.pid, "100012");
        assert_eq!(rec.study_yr, 2);
        assert_eq!(rec.sct_slice_num, Some(38));
        assert_eq!(rec.sct_ab_desc, "51");
    }

    #[test]
    fn test_empty_slice_is_absent() {
        let rec = AbnormalityRecord::from_cells(1, "100012", "1", Some(""), None).unwrap();
        assert_eq!(rec.sct_slice_num, None);
        assert_eq!(rec.sct_ab_desc, "");
    }

    #[test]
    fn test_non_numeric_pid_kept() {
        let rec = AbnormalityRecord::from_cells(1, "LSS-7", "0", None, None).unwrap();
        assert_eq!(rec.pid, "LSS-7");
    }

    #[rstest]
    #[case("", "0", None, "pid")]
    #[case("../etc", "0", None, "pid")]
    #[case("100012", "", None, "study_yr")]
    #[case("100012", "T1", None, "study_yr")]
    #[case("100012", "0.5", None, "study_yr")]
    #[case("100012", "0", Some("-3"), "sct_slice_num")]
    #[case("100012", "0", Some("abc"), "sct_slice_num")]
    fn test_invalid_cells(
        #[case] pid: &str,
        #[case] study_yr: &str,
        #[case] slice: Option<&str>,
        #[case] expected_column: &str,
    ) {
        match AbnormalityRecord::from_cells(7, pid, study_yr, slice, None) {
            Err(NlstError::InvalidCell { row, column, .. }) => {
                assert_eq!(row, 7);
                assert_eq!(column, expected_column);
            }
            other => panic!("expected InvalidCell, got {:?}", other),
        }
    }
}
