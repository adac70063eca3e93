//! Fixtures for writing small NLST-like data trees in tests

use crate::extraction::tags::{
    CONVOLUTION_KERNEL, INSTANCE_NUMBER, MANUFACTURER, MODALITY, SERIES_NUMBER, SLICE_THICKNESS,
};
use dicom_core::{DataElement, PrimitiveValue, VR};
use dicom_object::{FileMetaTableBuilder, InMemDicomObject};
use std::fs;
use std::path::{Path, PathBuf};

const CT_IMAGE_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.2";
const EXPLICIT_VR_LITTLE_ENDIAN: &str = "1.2.840.10008.1.2.1";

/// Header values of a synthetic CT slice
#[derive(Debug, Clone)]
pub struct CtSlice {
    pub manufacturer: String,
    pub kernel: String,
    pub series_number: i32,
    pub slice_thickness: f64,
    pub instance_number: Option<i32>,
}

impl CtSlice {
    pub fn new(manufacturer: &str, kernel: &str, series_number: i32, slice_thickness: f64) -> Self {
        Self {
            manufacturer: manufacturer.to_string(),
            kernel: kernel.to_string(),
            series_number,
            slice_thickness,
            instance_number: None,
        }
    }

    pub fn instance(mut self, n: i32) -> Self {
        self.instance_number = Some(n);
        self
    }
}

/// Writes a minimal CT DICOM file, creating parent directories
pub fn write_ct_slice(path: &Path, slice: &CtSlice) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }

    let mut dcm = InMemDicomObject::new_empty();
    dcm.put(DataElement::new(MODALITY, VR::CS, PrimitiveValue::from("CT")));
    dcm.put(DataElement::new(
        MANUFACTURER,
        VR::LO,
        PrimitiveValue::from(slice.manufacturer.as_str()),
    ));
    dcm.put(DataElement::new(
        CONVOLUTION_KERNEL,
        VR::SH,
        PrimitiveValue::from(slice.kernel.as_str()),
    ));
    dcm.put(DataElement::new(
        SERIES_NUMBER,
        VR::IS,
        PrimitiveValue::from(slice.series_number.to_string()),
    ));
    dcm.put(DataElement::new(
        SLICE_THICKNESS,
        VR::DS,
        PrimitiveValue::from(slice.slice_thickness.to_string()),
    ));
    if let Some(n) = slice.instance_number {
        dcm.put(DataElement::new(
            INSTANCE_NUMBER,
            VR::IS,
            PrimitiveValue::from(n.to_string()),
        ));
    }

    let file = dcm
        .with_meta(
            FileMetaTableBuilder::new()
                .transfer_syntax(EXPLICIT_VR_LITTLE_ENDIAN)
                .media_storage_sop_class_uid(CT_IMAGE_STORAGE)
                .media_storage_sop_instance_uid("2.25.1234567890"),
        )
        .unwrap();
    file.write_to_file(path).unwrap();
}

/// Creates `root/<pid>/<study>/<series>` and returns the series path
pub fn make_series_dir(root: &Path, pid: &str, study: &str, series: &str) -> PathBuf {
    let dir = root.join(pid).join(study).join(series);
    fs::create_dir_all(&dir).unwrap();
    dir
}
