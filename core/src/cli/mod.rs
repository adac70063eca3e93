pub mod report;

use crate::api::PathResolver;
use crate::error::Result;
use crate::table::{write_table, AbnormalityTable};
use crate::types::{LayoutConfig, ResolveMode};
use clap::Parser;
use log::{info, warn};
use report::RunSummary;
use std::path::PathBuf;

/// Default data root on the lab cluster
pub const DEFAULT_DATA_PATH: &str = "/nas-ctm01/sas-storage/data01/NLST";

/// Command-line arguments for nlstpath
#[derive(Parser, Debug)]
#[command(name = "nlstpath")]
#[command(about = "Resolve NLST abnormality annotations to DICOM slice or study folder paths")]
#[command(version)]
pub struct Cli {
    /// CSV with columns pid, study_yr, sct_slice_num, sct_ab_desc
    #[arg(long = "df", value_name = "CSV")]
    pub df: PathBuf,

    /// Where to write the CSV with resolved paths
    #[arg(long, value_name = "CSV", default_value = "path_df.csv")]
    pub save: PathBuf,

    /// Root folder of the NLST data
    #[arg(long = "NLST_data_path", value_name = "DIR", default_value = DEFAULT_DATA_PATH)]
    pub nlst_data_path: PathBuf,

    /// Resolve to "slice" files or study "folder"s; other values mean "slice"
    #[arg(long = "slice_or_folder", value_name = "MODE", default_value = "slice")]
    pub slice_or_folder: String,

    /// Keep only rows whose sct_ab_desc equals this code
    #[arg(long = "ab_desc", value_name = "CODE")]
    pub ab_desc: Option<String>,

    /// Regex template for study folder names ({year}, {study_yr} are substituted)
    #[arg(long = "study_pattern", value_name = "TEMPLATE")]
    pub study_pattern: Option<String>,

    /// Calendar year of study year 0
    #[arg(long = "base_year", value_name = "YEAR")]
    pub base_year: Option<i32>,

    /// Skip series with thicker slices (mm)
    #[arg(long = "max_slice_thickness", value_name = "MM")]
    pub max_slice_thickness: Option<f64>,

    /// File name prefix before the zero-padded slice number
    #[arg(long = "slice_prefix", value_name = "PREFIX")]
    pub slice_prefix: Option<String>,

    /// Slice read from each series to rank it in folder mode
    #[arg(long = "probe_slice", value_name = "N")]
    pub probe_slice: Option<u32>,

    /// Verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Resolution mode and whether the flag value was substituted
    pub fn mode(&self) -> (ResolveMode, bool) {
        ResolveMode::from_flag(&self.slice_or_folder)
    }

    /// Layout with command-line overrides applied
    pub fn layout(&self) -> LayoutConfig {
        let mut layout = LayoutConfig::default();
        if let Some(ref pattern) = self.study_pattern {
            layout = layout.with_study_pattern(pattern.clone());
        }
        if let Some(year) = self.base_year {
            layout = layout.with_base_year(year);
        }
        if let Some(mm) = self.max_slice_thickness {
            layout = layout.with_max_slice_thickness(mm);
        }
        if let Some(ref prefix) = self.slice_prefix {
            layout = layout.with_slice_prefix(prefix.clone());
        }
        if let Some(slice) = self.probe_slice {
            layout = layout.with_probe_slice(slice);
        }
        layout
    }
}

/// Runs a full resolution: read, resolve, write
///
/// The output file is only created once every row has been resolved, so a
/// fatal error leaves no partial output behind.
pub fn run(cli: &Cli) -> Result<RunSummary> {
    let (mode, substituted) = cli.mode();
    if substituted {
        warn!(
            "--slice_or_folder '{}' is not 'slice' or 'folder', using 'slice'",
            cli.slice_or_folder
        );
    }

    let layout = cli.layout();
    layout.validate()?;

    let table = AbnormalityTable::read(&cli.df, mode, cli.ab_desc.as_deref())?;

    info!(
        "Resolving {} rows in {} mode under {}",
        table.len(),
        mode,
        cli.nlst_data_path.display()
    );
    let resolver = PathResolver::new(&cli.nlst_data_path, mode).with_layout(layout);
    let resolved = resolver.resolve(&table.records)?;

    write_table(&cli.save, &table, &resolved, mode)?;
    Ok(RunSummary::from_records(&resolved))
}
