//! Preferred series selection
//!
//! Ranks the series of a CT study by reconstruction kernel and series
//! number, skipping thick or unreadable slices.

mod candidate;
mod series;

pub use candidate::SliceCandidate;
pub use series::select_preferred_series;
