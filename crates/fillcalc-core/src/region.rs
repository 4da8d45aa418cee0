use std::fmt;

use crate::adjust::adjust_footprint;
use crate::error::RegionError;
use crate::types::Corner;

/// The rectangular region spanned by two opposite corners.
///
/// When a height range is applied, `first` is treated as the lower Y corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub first: Corner,
    pub second: Corner,
}

impl Region {
    pub fn new(first: Corner, second: Corner) -> Self {
        Region { first, second }
    }

    /// Push the X/Z footprint outward by `margin` blocks on every side.
    pub fn expanded(self, margin: i32) -> Self {
        let (first, second) = adjust_footprint(self.first, self.second, margin);
        Region { first, second }
    }

    /// Pull the X/Z footprint inward by `margin` blocks on every side.
    pub fn contracted(self, margin: i32) -> Self {
        let (first, second) = adjust_footprint(self.first, self.second, -margin);
        Region { first, second }
    }

    /// Shift both corners vertically by `dy` blocks.
    pub fn shifted(self, dy: i32) -> Self {
        Region {
            first: Corner::new(self.first.x, self.first.y + dy, self.first.z),
            second: Corner::new(self.second.x, self.second.y + dy, self.second.z),
        }
    }

    /// Clamp the vertical span to exactly `blocks` blocks, counting up from
    /// the first corner's Y. `blocks == 1` makes both Y values equal.
    pub fn with_height(self, blocks: i32) -> Result<Self, RegionError> {
        if blocks < 1 {
            return Err(RegionError::HeightTooSmall(blocks));
        }
        let second = Corner::new(self.second.x, self.first.y + blocks - 1, self.second.z);
        Ok(Region {
            first: self.first,
            second,
        })
    }
}

/// Renders in fill-command argument order: `x1 y1 z1 x2 y2 z2`.
impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {} {}",
            self.first.x, self.first.y, self.first.z, self.second.x, self.second.y, self.second.z
        )
    }
}
