use crate::error::{NlstError, Result};
use regex::Regex;

/// Placeholder replaced by the calendar year of the screening round
pub const YEAR_PLACEHOLDER: &str = "{year}";

/// Placeholder replaced by the raw study year (0, 1, 2)
pub const STUDY_YR_PLACEHOLDER: &str = "{study_yr}";

/// Directory and file naming convention of an NLST data tree
///
/// The defaults describe the TCIA export, where a study directory is named
/// like `01-02-1999-NLST-LSS-55322` and slices are `1-045.dcm`:
///
/// ```text
/// <root>/<pid>/<study dir>/<series dir>/1-NNN.dcm
/// ```
///
/// # Example
///
/// ```
/// use nlstpath_core::LayoutConfig;
///
/// let layout = LayoutConfig::default()
///     .with_study_pattern("^{study_yr}$")
///     .with_slice_prefix("slice");
///
/// assert_eq!(layout.slice_file_name(45), "slice045.dcm");
/// let re = layout.study_regex(0).unwrap();
/// assert!(re.is_match("0"));
/// assert!(!re.is_match("10"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutConfig {
    /// Regex template a study directory name must match
    pub study_pattern: String,

    /// Calendar year of study year 0
    pub base_year: i32,

    /// File name prefix before the slice number
    pub slice_prefix: String,

    /// Zero-padded width of the slice number
    pub slice_digits: usize,

    /// Slice file extension, without the dot
    pub slice_extension: String,

    /// Slice read from each series in folder mode
    pub probe_slice: u32,

    /// Series thicker than this (mm) are skipped
    pub max_slice_thickness: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            study_pattern: "01-02-{year}".to_string(),
            base_year: 1999,
            slice_prefix: "1-".to_string(),
            slice_digits: 3,
            slice_extension: "dcm".to_string(),
            probe_slice: 3,
            max_slice_thickness: 5.0,
        }
    }
}

impl LayoutConfig {
    /// Builder: Set the study directory pattern
    pub fn with_study_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.study_pattern = pattern.into();
        self
    }

    /// Builder: Set the calendar year of study year 0
    pub fn with_base_year(mut self, year: i32) -> Self {
        self.base_year = year;
        self
    }

    /// Builder: Set the slice file prefix
    pub fn with_slice_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.slice_prefix = prefix.into();
        self
    }

    /// Builder: Set the folder-mode probe slice
    pub fn with_probe_slice(mut self, slice: u32) -> Self {
        self.probe_slice = slice;
        self
    }

    /// Builder: Set the slice thickness cutoff
    pub fn with_max_slice_thickness(mut self, mm: f64) -> Self {
        self.max_slice_thickness = mm;
        self
    }

    /// Calendar year of a study year, `None` if it does not fit in `i32`
    pub fn calendar_year(&self, study_yr: i32) -> Option<i32> {
        self.base_year.checked_add(study_yr)
    }

    /// Builds the study directory regex for a study year
    ///
    /// # Errors
    ///
    /// Returns [`NlstError::StudyYearOutOfRange`] if the calendar year
    /// overflows, or [`NlstError::InvalidPattern`] if the substituted
    /// template is not a valid regex
    pub fn study_regex(&self, study_yr: i32) -> Result<Regex> {
        let year = self
            .calendar_year(study_yr)
            .ok_or(NlstError::StudyYearOutOfRange {
                study_yr,
                base_year: self.base_year,
            })?;
        let pattern = self
            .study_pattern
            .replace(YEAR_PLACEHOLDER, &year.to_string())
            .replace(STUDY_YR_PLACEHOLDER, &study_yr.to_string());

        Regex::new(&pattern).map_err(|e| NlstError::InvalidPattern {
            pattern: self.study_pattern.clone(),
            reason: e.to_string(),
        })
    }

    /// Checks that the study pattern compiles
    pub fn validate(&self) -> Result<()> {
        self.study_regex(0).map(|_| ())
    }

    /// File name of a slice inside a series directory
    pub fn slice_file_name(&self, slice: u32) -> String {
        format!(
            "{}{:0width$}.{}",
            self.slice_prefix,
            slice,
            self.slice_extension,
            width = self.slice_digits
        )
    }
}
