use std::fmt;

/// CT scanner manufacturers with a known kernel preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Manufacturer {
    Siemens,
    Ge,
    Philips,
    Toshiba,
}

/// Reconstruction kernels ordered from most to least preferred for lung reads
///
/// Harder kernels come first. Based on the supplementary material of
/// Ardila et al., Nat Med 25, 954-961 (2019).
const SIEMENS_KERNELS: &[&str] = &[
    "B50f", "B45f", "B50s", "B40f", "B41s", "B60f", "B60s", "B70f", "B36f", "B35f", "B30f",
    "B31s",
];
const GE_KERNELS: &[&str] = &[
    "LUNG",
    "BONE",
    "BODY FILTER/BONE",
    "STANDARD",
    "BODY FILTER/STANDARD",
    "SOFT",
    "EXPERIMENTAL7",
    "BODY FILTER/EXPERIMENTAL7",
];
const PHILIPS_KERNELS: &[&str] = &["D", "C", "B", "A"];
const TOSHIBA_KERNELS: &[&str] = &[
    "FC51", "FC50", "FC52", "FC53", "FC30", "FC11", "FC10", "FC82", "FL04", "FC02", "FC01",
    "FL01",
];

impl Manufacturer {
    /// Parses the DICOM Manufacturer value
    ///
    /// Matching is exact after trimming, as NLST headers use a small set of
    /// fixed vendor strings.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim() {
            "SIEMENS" => Some(Manufacturer::Siemens),
            "GE MEDICAL SYSTEMS" => Some(Manufacturer::Ge),
            "Philips" => Some(Manufacturer::Philips),
            "TOSHIBA" => Some(Manufacturer::Toshiba),
            _ => None,
        }
    }

    /// Returns the vendor string as it appears in DICOM headers
    pub fn dicom_name(&self) -> &'static str {
        match self {
            Manufacturer::Siemens => "SIEMENS",
            Manufacturer::Ge => "GE MEDICAL SYSTEMS",
            Manufacturer::Philips => "Philips",
            Manufacturer::Toshiba => "TOSHIBA",
        }
    }

    /// Kernels for this manufacturer, most preferred first
    pub fn kernels(&self) -> &'static [&'static str] {
        match self {
            Manufacturer::Siemens => SIEMENS_KERNELS,
            Manufacturer::Ge => GE_KERNELS,
            Manufacturer::Philips => PHILIPS_KERNELS,
            Manufacturer::Toshiba => TOSHIBA_KERNELS,
        }
    }

    /// Returns the preference rank of a kernel (0 is best)
    pub fn kernel_rank(&self, kernel: &str) -> Option<usize> {
        let kernel = kernel.trim();
        self.kernels().iter().position(|k| *k == kernel)
    }
}

impl fmt::Display for Manufacturer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.dicom_name())
    }
}

/// Ranks a manufacturer/kernel pair
///
/// Returns `None` when either is missing or not in the preference table;
/// such series rank after every known kernel.
pub fn kernel_preference_rank(manufacturer: Option<&str>, kernel: Option<&str>) -> Option<usize> {
    let manufacturer = Manufacturer::from_str(manufacturer?)?;
    manufacturer.kernel_rank(kernel?)
}
