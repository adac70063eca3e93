use crate::error::{NlstError, Result};
use crate::extraction::SeriesInfo;
use crate::selection::select_preferred_series;
use crate::types::{AbnormalityRecord, LayoutConfig, ResolveMode};
use log::debug;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Resolves abnormality records to paths in an NLST data tree
///
/// Lookup walks `root/<pid>`, then the study directory matching the study
/// year, then every series directory of that study. See [`LayoutConfig`]
/// for the naming convention.
///
/// # Example
///
/// ```no_run
/// use nlstpath_core::{AbnormalityRecord, PathResolver, ResolveMode};
///
/// let resolver = PathResolver::new("/data/NLST", ResolveMode::Folder);
/// let records = vec![AbnormalityRecord::new("100012", 0, None, "51")];
/// let resolved = resolver.resolve(&records).unwrap();
/// assert_eq!(resolved.len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct PathResolver {
    root: PathBuf,
    mode: ResolveMode,
    layout: LayoutConfig,
}

impl PathResolver {
    /// Creates a resolver using the default NLST layout
    pub fn new(root: impl Into<PathBuf>, mode: ResolveMode) -> Self {
        Self {
            root: root.into(),
            mode,
            layout: LayoutConfig::default(),
        }
    }

    /// Builder: Use a custom layout
    pub fn with_layout(mut self, layout: LayoutConfig) -> Self {
        self.layout = layout;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn mode(&self) -> ResolveMode {
        self.mode
    }

    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    /// Resolves every record, in order
    ///
    /// Misses are recorded on the returned rows; only filesystem failures
    /// and an unusable data root abort the run.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The data root does not exist or is not a directory
    /// - The study pattern is not a valid regex
    /// - A directory in the tree cannot be read
    pub fn resolve(&self, records: &[AbnormalityRecord]) -> Result<Vec<ResolvedRecord>> {
        self.check_root()?;
        self.layout.validate()?;
        records.iter().map(|r| self.resolve_record(r)).collect()
    }

    /// Resolves a single record
    pub fn resolve_record(&self, record: &AbnormalityRecord) -> Result<ResolvedRecord> {
        let mut resolved = ResolvedRecord::unresolved(record);

        let Some(patient_dir) = self.patient_dir(&record.pid)? else {
            debug!("Patient {} not found", record.pid);
            resolved.patient_not_found = true;
            return Ok(resolved);
        };

        let Some(study_dir) = self.study_dir(&patient_dir, record.study_yr)? else {
            debug!(
                "Study year {} not found for patient {}",
                record.study_yr, record.pid
            );
            resolved.study_yr_not_found = true;
            return Ok(resolved);
        };

        let series_dirs = list_dirs(&study_dir)?;

        match self.mode {
            ResolveMode::Folder => {
                let probe = self.layout.slice_file_name(self.layout.probe_slice);
                if let Some(best) = select_preferred_series(
                    &series_dirs,
                    &probe,
                    self.layout.max_slice_thickness,
                ) {
                    resolved.series_path = Some(best.series_dir);
                    resolved.series = Some(best.info);
                }
                resolved.resolved_path = Some(study_dir);
            }
            ResolveMode::Slice => {
                let Some(slice) = record.sct_slice_num else {
                    debug!(
                        "No slice number for patient {} year {}",
                        record.pid, record.study_yr
                    );
                    resolved.slice_not_found = true;
                    return Ok(resolved);
                };

                let file_name = self.layout.slice_file_name(slice);
                match select_preferred_series(
                    &series_dirs,
                    &file_name,
                    self.layout.max_slice_thickness,
                ) {
                    Some(best) => {
                        resolved.wrong_slice_annotation =
                            Some(best.info.instance_number != i32::try_from(slice).ok());
                        resolved.resolved_path = Some(best.file_path);
                        resolved.series_path = Some(best.series_dir);
                        resolved.series = Some(best.info);
                    }
                    None => {
                        debug!(
                            "Slice {} not found for patient {} year {}",
                            slice, record.pid, record.study_yr
                        );
                        resolved.slice_not_found = true;
                    }
                }
            }
        }

        Ok(resolved)
    }

    /// Checks that the data root is a readable directory
    pub fn check_root(&self) -> Result<()> {
        match fs::metadata(&self.root) {
            Ok(meta) if meta.is_dir() => Ok(()),
            Ok(_) => Err(NlstError::DataRootMissing(self.root.clone())),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                Err(NlstError::DataRootMissing(self.root.clone()))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Locates `root/<pid>`
    ///
    /// Returns `None` if the patient has no directory
    pub fn patient_dir(&self, pid: &str) -> Result<Option<PathBuf>> {
        let path = self.root.join(pid);
        match fs::metadata(&path) {
            Ok(meta) if meta.is_dir() => Ok(Some(path)),
            Ok(_) => Ok(None),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Locates the study directory of a patient for a study year
    ///
    /// The first directory (by name) matching the study pattern wins.
    ///
    /// A study year whose calendar year overflows matches nothing.
    pub fn study_dir(&self, patient_dir: &Path, study_yr: i32) -> Result<Option<PathBuf>> {
        if self.layout.calendar_year(study_yr).is_none() {
            debug!("Study year {} is out of range", study_yr);
            return Ok(None);
        }
        let re = self.layout.study_regex(study_yr)?;
        Ok(list_dirs(patient_dir)?.into_iter().find(|dir| {
            dir.file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| re.is_match(name))
        }))
    }
}

/// Resolves records under `root` with the default layout
pub fn resolve(
    records: &[AbnormalityRecord],
    root: impl Into<PathBuf>,
    mode: ResolveMode,
) -> Result<Vec<ResolvedRecord>> {
    PathResolver::new(root, mode).resolve(records)
}

/// Lists subdirectories of `dir`, sorted by name
fn list_dirs(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut dirs = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            dirs.push(path);
        }
    }
    dirs.sort();
    Ok(dirs)
}

/// Outcome of resolving one abnormality record
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedRecord {
    /// Patient identifier
    pub pid: String,

    /// Study year
    pub study_yr: i32,

    /// Slice file (slice mode) or study directory (folder mode)
    pub resolved_path: Option<PathBuf>,

    /// No `root/<pid>` directory
    pub patient_not_found: bool,

    /// No study directory for the study year
    pub study_yr_not_found: bool,

    /// Slice mode: no series held a usable slice file
    pub slice_not_found: bool,

    /// Slice mode: InstanceNumber of the chosen file differs from the
    /// reported slice number
    pub wrong_slice_annotation: Option<bool>,

    /// Preferred series directory
    pub series_path: Option<PathBuf>,

    /// Header info of the preferred series
    pub series: Option<SeriesInfo>,
}

impl ResolvedRecord {
    /// Creates an empty result for a record
    pub fn unresolved(record: &AbnormalityRecord) -> Self {
        Self {
            pid: record.pid.clone(),
            study_yr: record.study_yr,
            resolved_path: None,
            patient_not_found: false,
            study_yr_not_found: false,
            slice_not_found: false,
            wrong_slice_annotation: None,
            series_path: None,
            series: None,
        }
    }

    pub fn is_resolved(&self) -> bool {
        self.resolved_path.is_some()
    }
}
