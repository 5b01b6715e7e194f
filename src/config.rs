use std::fs;
use std::path::{Path, PathBuf};

use crate::{DataLayout, Result};

/// Output directory used when none is given
pub const DEFAULT_OUT_DIR: &str = "./caffedata";

/// Name of the log file created inside the output directory
pub const LOG_FILE_NAME: &str = "cmparser.log";

/// Where and how weight dumps are written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportConfig {
    pub out_dir: PathBuf,
    pub layout: DataLayout,
}

impl Default for ExportConfig {
    fn default() -> Self {
        ExportConfig {
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            layout: DataLayout::default(),
        }
    }
}

impl ExportConfig {
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        ExportConfig {
            out_dir: out_dir.into(),
            ..Default::default()
        }
    }

    pub fn with_layout(mut self, layout: DataLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Create the output directory; an existing directory is not an error
    pub fn prepare(&self) -> Result<()> {
        fs::create_dir_all(&self.out_dir)?;
        Ok(())
    }

    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    pub fn log_path(&self) -> PathBuf {
        self.out_dir.join(LOG_FILE_NAME)
    }
}
