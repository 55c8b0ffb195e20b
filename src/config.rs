//! Grid construction parameters, stored as TOML.
//!
//! ```toml
//! rows = 4
//! columns = 4
//! offset_col = -2
//! offset_row = -2
//! layout = "r_offset"
//! shift = 0
//! ```
//!
//! Everything but `rows` and `columns` is optional.

use crate::geometry::hex::{HexGrid, Layout, Shift};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridConfig {
    /// Number of rows beyond the first; the grid spans `rows + 1` rows.
    pub rows: u32,

    /// Number of columns beyond the first; the grid spans `columns + 1` columns.
    pub columns: u32,

    #[serde(default)]
    pub offset_col: i32,

    #[serde(default)]
    pub offset_row: i32,

    #[serde(default)]
    pub layout: Layout,

    /// Must be `0` or `1`.
    #[serde(default)]
    pub shift: Shift,
}

impl GridConfig {
    pub fn save(&self, path: &Path) -> Result<(), Error> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let serialized = toml::to_string_pretty(self)?;
        std::fs::write(path, serialized.as_bytes()).map_err(Into::into)
    }

    pub fn load(path: &Path) -> Result<Self, Error> {
        let data = std::fs::read_to_string(path)?;
        let config = Self::parse(&data)?;
        log::debug!("loaded grid configuration from {}", path.display());
        Ok(config)
    }

    pub fn parse(data: &str) -> Result<Self, Error> {
        toml::from_str(data).map_err(Into::into)
    }

    /// Build the grid these parameters describe.
    pub fn build(&self) -> HexGrid {
        HexGrid::rectangle_with(
            self.layout,
            self.shift,
            self.rows,
            self.columns,
            self.offset_col,
            self.offset_row,
        )
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("configuration could not be loaded")]
    CouldNotLoad(#[from] std::io::Error),
    #[error("malformed configuration")]
    Malformed(#[from] toml::de::Error),
    #[error("failed to serialize")]
    CouldNotSerialize(#[from] toml::ser::Error),
}
