use std::path::PathBuf;
use thiserror::Error;

/// Result type for nlstpath operations
pub type Result<T> = std::result::Result<T, NlstError>;

/// Error types for nlstpath operations
#[derive(Error, Debug)]
pub enum NlstError {
    /// DICOM reading error
    #[error("DICOM error: {0}")]
    DicomError(String),

    /// Input table lacks columns needed for the selected mode
    #[error("Missing required column(s) in {}: {}", .path.display(), .columns.join(", "))]
    MissingColumns { path: PathBuf, columns: Vec<String> },

    /// A cell could not be interpreted
    #[error("Row {row}: invalid {column} value '{value}'")]
    InvalidCell {
        row: usize,
        column: &'static str,
        value: String,
    },

    /// Study folder pattern did not compile
    #[error("Invalid study pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },

    /// Study year too large to map to a calendar year
    #[error("Study year {study_yr} is out of range for base year {base_year}")]
    StudyYearOutOfRange { study_yr: i32, base_year: i32 },

    /// Data root is absent or not a directory
    #[error("Data root {} is not a directory", .0.display())]
    DataRootMissing(PathBuf),

    /// CSV error
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    /// I/O error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

// Convert dicom-object errors
impl From<dicom_object::ReadError> for NlstError {
    fn from(e: dicom_object::ReadError) -> Self {
        NlstError::DicomError(format!("{}", e))
    }
}
