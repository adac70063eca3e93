pub mod series;
pub mod tags;

pub use series::SeriesInfo;
pub use tags::*;
