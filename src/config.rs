use std::env;
use std::path::PathBuf;

use anyhow::Result;

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded automatically at startup via dotenvy; CLI flags
/// override whatever the environment provides.
pub struct Config {
    /// Directory scanned for CSV source files
    pub input_dir: PathBuf,
    /// Directory where the analysis artifacts are written
    pub output_dir: PathBuf,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Both paths have defaults so `lexiscope process` works out of the box
    /// against ./data and ./out.
    pub fn load() -> Result<Self> {
        let input_dir = env::var("LEXISCOPE_INPUT_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("./data"));
        let output_dir = env::var("LEXISCOPE_OUTPUT_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("./out"));

        Ok(Self {
            input_dir,
            output_dir,
        })
    }

    /// Check that the input directory exists before starting a run.
    pub fn require_input(&self) -> Result<()> {
        if !self.input_dir.is_dir() {
            anyhow::bail!(
                "Input directory {} does not exist.\n\
                 Set LEXISCOPE_INPUT_DIR or pass --input to point at your CSV sources.",
                self.input_dir.display()
            );
        }
        Ok(())
    }
}
