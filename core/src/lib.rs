pub mod api;
pub mod cli;
pub mod error;
pub mod extraction;
pub mod selection;
pub mod table;
pub mod types;

#[cfg(test)]
pub(crate) mod test_utils;

pub use api::{resolve, PathResolver, ResolvedRecord};
pub use cli::report::{RunSummary, TextReport};
pub use error::{NlstError, Result};
pub use extraction::SeriesInfo;
pub use selection::{select_preferred_series, SliceCandidate};
pub use table::AbnormalityTable;
pub use types::*;
