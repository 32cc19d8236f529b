use std::{fs::File, path::Path};

use dmz_archive::Container;
use miette::{Context, IntoDiagnostic, Result};
use tracing::info;

pub mod list;
pub mod merge;
pub mod verify;

#[derive(clap::Subcommand)]
pub enum Commands {
    /// List the timecode shows, scene lists or presets of a project
    List(list::ListArgs),
    /// Copy a timecode show from one project into another
    Merge(merge::MergeArgs),
    /// Verify the checksum file of a project
    Verify(verify::VerifyArgs),
}

impl Commands {
    pub fn handle(&self) -> Result<()> {
        match self {
            Commands::List(list) => list.handle(),
            Commands::Merge(merge) => merge.handle(),
            Commands::Verify(verify) => verify.handle(),
        }
    }
}

/// Read a whole project archive into memory
pub(crate) fn open(path: &Path) -> Result<Container> {
    info!("reading {}", path.display());

    let f = File::open(path)
        .into_diagnostic()
        .context(format!("path: {}", path.display()))?;
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    Container::read(f, &name).context(format!("reading {}", path.display()))
}
