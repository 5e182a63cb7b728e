use crate::grid::GridDimensions;

/// Bag configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BagConfig {
    /// Number of columns in the occupancy grid.
    pub grid_width: u32,
    /// Number of rows in the occupancy grid.
    pub grid_height: u32,
}

impl BagConfig {
    // ===== runtime-tunable defaults =====
    pub const DEFAULT_GRID_WIDTH: u32 = 10;
    pub const DEFAULT_GRID_HEIGHT: u32 = 8;

    pub fn new() -> Self {
        Self {
            grid_width: Self::DEFAULT_GRID_WIDTH,
            grid_height: Self::DEFAULT_GRID_HEIGHT,
        }
    }

    pub fn with_grid_size(grid_width: u32, grid_height: u32) -> Self {
        Self {
            grid_width,
            grid_height,
        }
    }

    pub fn dimensions(&self) -> GridDimensions {
        GridDimensions::new(self.grid_width, self.grid_height)
    }
}

impl Default for BagConfig {
    fn default() -> Self {
        Self::new()
    }
}
