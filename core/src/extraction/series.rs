use crate::error::Result;
use crate::extraction::tags::{
    get_first_string_value, get_float_value, get_int_value, get_string_value,
    CONVOLUTION_KERNEL, INSTANCE_NUMBER, MANUFACTURER, SERIES_NUMBER, SLICE_THICKNESS,
};
use crate::types::kernel_preference_rank;
use dicom_object::{open_file, InMemDicomObject};
use std::path::Path;

/// Header fields of one CT slice used to rank its series
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesInfo {
    /// Scanner manufacturer
    pub manufacturer: Option<String>,

    /// Reconstruction kernel (first value only)
    pub kernel: Option<String>,

    /// Series number within the study
    pub series_number: Option<i32>,

    /// Slice thickness in mm
    pub slice_thickness: Option<f64>,

    /// Instance number of the slice
    pub instance_number: Option<i32>,
}

impl SeriesInfo {
    /// Reads a DICOM file and extracts its series info
    pub fn from_file(path: &Path) -> Result<Self> {
        let dcm = open_file(path)?;
        Ok(Self::from_dicom(&dcm))
    }

    /// Extracts series info from an already-opened DICOM object
    pub fn from_dicom(dcm: &InMemDicomObject) -> Self {
        Self {
            manufacturer: get_string_value(dcm, MANUFACTURER),
            kernel: get_first_string_value(dcm, CONVOLUTION_KERNEL),
            series_number: get_int_value(dcm, SERIES_NUMBER),
            slice_thickness: get_float_value(dcm, SLICE_THICKNESS),
            instance_number: get_int_value(dcm, INSTANCE_NUMBER),
        }
    }

    /// Kernel preference rank, `None` when unknown
    pub fn kernel_rank(&self) -> Option<usize> {
        kernel_preference_rank(self.manufacturer.as_deref(), self.kernel.as_deref())
    }

    /// Whether the slice is thin enough to be used
    ///
    /// A missing thickness counts as too thick.
    pub fn is_thin(&self, max_thickness: f64) -> bool {
        self.slice_thickness.is_some_and(|t| t <= max_thickness)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{write_ct_slice, CtSlice};
    use tempfile::TempDir;

    #[test]
    fn test_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("1-045.dcm");
        write_ct_slice(
            &path,
            &CtSlice::new("GE MEDICAL SYSTEMS", "LUNG", 3, 1.25).instance(45),
        );

        let info = SeriesInfo::from_file(&path).unwrap();
        assert_eq!(info.manufacturer.as_deref(), Some("GE MEDICAL SYSTEMS"));
        assert_eq!(info.kernel.as_deref(), Some("LUNG"));
        assert_eq!(info.series_number, Some(3));
        assert_eq!(info.slice_thickness, Some(1.25));
        assert_eq!(info.instance_number, Some(45));
        assert_eq!(info.kernel_rank(), Some(0));
    }

    #[test]
    fn test_from_file_not_dicom() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("1-001.dcm");
        std::fs::write(&path, b"not a dicom file").unwrap();

        assert!(SeriesInfo::from_file(&path).is_err());
    }

    #[test]
    fn test_is_thin() {
        let mut info = SeriesInfo::from_dicom(&InMemDicomObject::new_empty());
        assert!(!info.is_thin(5.0));

        info.slice_thickness = Some(5.0);
        assert!(info.is_thin(5.0));

        info.slice_thickness = Some(5.1);
        assert!(!info.is_thin(5.0));
    }
}
