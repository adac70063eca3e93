use dicom_core::Tag;
use dicom_object::InMemDicomObject;

// Identification Tags
pub const MODALITY: Tag = Tag(0x0008, 0x0060);

// Device/Manufacturer Tags
pub const MANUFACTURER: Tag = Tag(0x0008, 0x0070);

// Acquisition Tags
pub const SLICE_THICKNESS: Tag = Tag(0x0018, 0x0050);
pub const CONVOLUTION_KERNEL: Tag = Tag(0x0018, 0x1210);

// Series/Instance Tags
pub const SERIES_NUMBER: Tag = Tag(0x0020, 0x0011);
pub const INSTANCE_NUMBER: Tag = Tag(0x0020, 0x0013);

/// Helper to get string value from DICOM tag
///
/// Returns `None` if the tag is not present or cannot be converted to string
pub fn get_string_value(dcm: &InMemDicomObject, tag: Tag) -> Option<String> {
    dcm.element(tag)
        .ok()
        .and_then(|elem| elem.to_str().ok())
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Helper to get integer value from DICOM tag
///
/// Returns `None` if the tag is not present or cannot be converted to i32
pub fn get_int_value(dcm: &InMemDicomObject, tag: Tag) -> Option<i32> {
    dcm.element(tag)
        .ok()
        .and_then(|elem| elem.to_int::<i32>().ok())
}

/// Helper to get floating point value from DICOM tag
///
/// Returns `None` if the tag is not present or cannot be converted to f64
pub fn get_float_value(dcm: &InMemDicomObject, tag: Tag) -> Option<f64> {
    dcm.element(tag)
        .ok()
        .and_then(|elem| elem.to_float64().ok())
}

/// Helper to get the first value of a multi-valued string tag
///
/// Kernels such as `FC51\AIDR 3D` carry vendor qualifiers after the first
/// value; only the first value is meaningful for ranking.
pub fn get_first_string_value(dcm: &InMemDicomObject, tag: Tag) -> Option<String> {
    get_string_value(dcm, tag).and_then(|s| {
        s.split('\\')
            .next()
            .map(|part| part.trim().to_string())
            .filter(|part| !part.is_empty())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use dicom_core::{DataElement, PrimitiveValue, VR};

    #[test]
    fn test_tag_values() {
        assert_eq!(MANUFACTURER, Tag(0x0008, 0x0070));
        assert_eq!(CONVOLUTION_KERNEL, Tag(0x0018, 0x1210));
        assert_eq!(SLICE_THICKNESS, Tag(0x0018, 0x0050));
        assert_eq!(SERIES_NUMBER, Tag(0x0020, 0x0011));
        assert_eq!(INSTANCE_NUMBER, Tag(0x0020, 0x0013));
    }

    #[test]
    fn test_value_helpers() {
        let mut dcm = InMemDicomObject::new_empty();
        dcm.put(DataElement::new(
            MANUFACTURER,
            VR::LO,
            PrimitiveValue::from("SIEMENS "),
        ));
        dcm.put(DataElement::new(
            CONVOLUTION_KERNEL,
            VR::SH,
            PrimitiveValue::from("FC51\\AIDR 3D"),
        ));
        dcm.put(DataElement::new(
            SLICE_THICKNESS,
            VR::DS,
            PrimitiveValue::from("2.5"),
        ));
        dcm.put(DataElement::new(
            SERIES_NUMBER,
            VR::IS,
            PrimitiveValue::from("4"),
        ));

        assert_eq!(
            get_string_value(&dcm, MANUFACTURER),
            Some("SIEMENS".to_string())
        );
        assert_eq!(
            get_first_string_value(&dcm, CONVOLUTION_KERNEL),
            Some("FC51".to_string())
        );
        assert_eq!(get_float_value(&dcm, SLICE_THICKNESS), Some(2.5));
        assert_eq!(get_int_value(&dcm, SERIES_NUMBER), Some(4));
        assert_eq!(get_int_value(&dcm, INSTANCE_NUMBER), None);
    }
}
