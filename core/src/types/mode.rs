use std::fmt;

/// Output granularity of a resolution run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ResolveMode {
    /// Resolve to the DICOM file holding the reported slice
    #[default]
    Slice,
    /// Resolve to the study directory
    Folder,
}

impl ResolveMode {
    /// Interprets a `--slice_or_folder` flag value
    ///
    /// Only an exact `"folder"` selects folder mode; every other value,
    /// including typos, falls back to slice mode. The second element is
    /// `true` when the value was substituted so callers can warn about it.
    pub fn from_flag(flag: &str) -> (Self, bool) {
        match flag {
            "folder" => (ResolveMode::Folder, false),
            "slice" => (ResolveMode::Slice, false),
            _ => (ResolveMode::Slice, true),
        }
    }

    /// Returns simple name for display
    pub fn simple_name(&self) -> &'static str {
        match self {
            ResolveMode::Slice => "slice",
            ResolveMode::Folder => "folder",
        }
    }

    pub fn is_slice(&self) -> bool {
        matches!(self, ResolveMode::Slice)
    }
}

impl fmt::Display for ResolveMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.simple_name())
    }
}
