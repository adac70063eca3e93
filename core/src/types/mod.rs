//! Core type definitions for NLST path resolution
//!
//! - [`ResolveMode`]: Slice or folder output granularity
//! - [`AbnormalityRecord`]: One row of the abnormality table
//! - [`LayoutConfig`]: Naming convention of the data tree
//! - [`Manufacturer`]: Scanner vendors and their kernel preference order

mod kernel;
mod layout;
mod mode;
mod record;

pub use kernel::{kernel_preference_rank, Manufacturer};
pub use layout::{LayoutConfig, STUDY_YR_PLACEHOLDER, YEAR_PLACEHOLDER};
pub use mode::ResolveMode;
pub use record::AbnormalityRecord;
