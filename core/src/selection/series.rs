use crate::selection::candidate::SliceCandidate;
use log::{debug, warn};
use std::path::{Path, PathBuf};

/// Selects the preferred series of a study
///
/// Reads `file_name` from each series directory and keeps the most
/// preferred readable slice whose thickness is at most `max_thickness`.
///
/// Series are skipped when:
/// - the file is absent
/// - the file cannot be decoded as DICOM
/// - the slice is thicker than `max_thickness` or has no thickness
///
/// # Returns
///
/// The preferred candidate, or `None` if no series qualifies
pub fn select_preferred_series(
    series_dirs: &[PathBuf],
    file_name: &str,
    max_thickness: f64,
) -> Option<SliceCandidate> {
    series_dirs
        .iter()
        .filter_map(|series_dir| read_candidate(series_dir, file_name))
        .filter(|candidate| {
            let thin = candidate.info.is_thin(max_thickness);
            if !thin {
                debug!(
                    "Skipping thick series {} ({:?} mm)",
                    candidate.series_dir.display(),
                    candidate.info.slice_thickness
                );
            }
            thin
        })
        .min()
}

fn read_candidate(series_dir: &Path, file_name: &str) -> Option<SliceCandidate> {
    let file_path = series_dir.join(file_name);
    if !file_path.is_file() {
        debug!("No {} in {}", file_name, series_dir.display());
        return None;
    }

    match SliceCandidate::from_file(file_path.clone(), series_dir.to_path_buf()) {
        Ok(candidate) => Some(candidate),
        Err(e) => {
            warn!("Skipping {}: {}", file_path.display(), e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{write_ct_slice, CtSlice};
    use std::fs;
    use tempfile::TempDir;

    fn series(temp_dir: &TempDir, name: &str) -> PathBuf {
        let dir = temp_dir.path().join(name);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_selects_preferred_kernel() {
        let temp_dir = TempDir::new().unwrap();
        let soft = series(&temp_dir, "1.000000-soft");
        let lung = series(&temp_dir, "2.000000-lung");
        write_ct_slice(
            &soft.join("1-003.dcm"),
            &CtSlice::new("SIEMENS", "B30f", 4, 2.0),
        );
        write_ct_slice(
            &lung.join("1-003.dcm"),
            &CtSlice::new("SIEMENS", "B50f", 2, 2.0),
        );

        let best = select_preferred_series(&[soft, lung.clone()], "1-003.dcm", 5.0).unwrap();
        assert_eq!(best.series_dir, lung);
        assert_eq!(best.info.kernel.as_deref(), Some("B50f"));
    }

    #[test]
    fn test_skips_thick_and_missing() {
        let temp_dir = TempDir::new().unwrap();
        let thick = series(&temp_dir, "thick");
        let empty = series(&temp_dir, "empty");
        let thin = series(&temp_dir, "thin");
        write_ct_slice(
            &thick.join("1-003.dcm"),
            &CtSlice::new("SIEMENS", "B50f", 1, 10.0),
        );
        write_ct_slice(
            &thin.join("1-003.dcm"),
            &CtSlice::new("SIEMENS", "B31s", 2, 2.5),
        );

        let best = select_preferred_series(&[thick, empty, thin.clone()], "1-003.dcm", 5.0).unwrap();
        assert_eq!(best.series_dir, thin);
    }

    #[test]
    fn test_skips_unreadable() {
        let temp_dir = TempDir::new().unwrap();
        let broken = series(&temp_dir, "broken");
        fs::write(broken.join("1-003.dcm"), b"garbage").unwrap();

        assert!(select_preferred_series(&[broken], "1-003.dcm", 5.0).is_none());
    }

    #[test]
    fn test_no_series() {
        assert!(select_preferred_series(&[], "1-003.dcm", 5.0).is_none());
    }
}
