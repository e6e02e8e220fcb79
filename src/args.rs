use anyhow::{bail, Result};
use clap::error::ErrorKind;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "extract_audio",
    about = "Extract the audio track of every video under a directory tree into a mirrored MP3 tree"
)]
pub struct Args {
    /// Source directory to scan for video files
    pub source_dir: PathBuf,
}

impl Args {
    /// Parse and validate command line arguments
    pub fn from_cli() -> Result<Self> {
        let args = match Self::try_parse() {
            Ok(args) => args,
            // Help and version are not errors; render them and leave.
            Err(e)
                if e.kind() == ErrorKind::DisplayHelp
                    || e.kind() == ErrorKind::DisplayVersion =>
            {
                e.exit()
            }
            Err(e) => bail!("{e}"),
        };
        args.validate()?;
        Ok(args)
    }

    /// Check that the source path exists and is a directory
    pub fn validate(&self) -> Result<()> {
        if !self.source_dir.exists() {
            bail!(
                "Source directory does not exist: {}",
                self.source_dir.display()
            );
        }
        if !self.source_dir.is_dir() {
            bail!(
                "Source path is not a directory: {}",
                self.source_dir.display()
            );
        }
        Ok(())
    }
}
