use crate::error::Result;
use crate::extraction::SeriesInfo;
use std::cmp::Ordering;
use std::path::PathBuf;

/// A slice file from one series, together with its header info
///
/// Ordering follows preference: the most preferred candidate is the
/// minimum, so `min()` over a collection selects it.
#[derive(Debug, Clone)]
pub struct SliceCandidate {
    /// Path to the DICOM file that was read
    pub file_path: PathBuf,

    /// Series directory holding the file
    pub series_dir: PathBuf,

    /// Extracted header info
    pub info: SeriesInfo,
}

impl SliceCandidate {
    /// Reads the candidate's header from disk
    pub fn from_file(file_path: PathBuf, series_dir: PathBuf) -> Result<Self> {
        let info = SeriesInfo::from_file(&file_path)?;
        Ok(Self {
            file_path,
            series_dir,
            info,
        })
    }

    /// Checks if this candidate is preferred over another
    ///
    /// Priority order:
    /// 1. Known kernel beats unknown kernel; lower kernel rank wins
    /// 2. Higher series number wins
    pub fn is_preferred_to(&self, other: &SliceCandidate) -> bool {
        match (self.info.kernel_rank(), other.info.kernel_rank()) {
            (Some(a), Some(b)) if a != b => return a < b,
            (Some(_), None) => return true,
            (None, Some(_)) => return false,
            _ => {}
        }

        self.info.series_number > other.info.series_number
    }
}

impl PartialEq for SliceCandidate {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for SliceCandidate {}

impl PartialOrd for SliceCandidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SliceCandidate {
    fn cmp(&self, other: &Self) -> Ordering {
        if self.is_preferred_to(other) {
            Ordering::Less
        } else if other.is_preferred_to(self) {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }
}
