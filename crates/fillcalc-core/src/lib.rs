pub mod adjust;
pub mod error;
pub mod parse;
pub mod region;
pub mod types;

pub use adjust::adjust_footprint;
pub use error::{ParseCornerError, RegionError};
pub use parse::parse_corner;
pub use region::Region;
pub use types::Corner;
