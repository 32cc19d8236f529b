use clap::Args;
use dmz_archive::checksum::ChecksumStatus;
use miette::{miette, Result};
use owo_colors::OwoColorize;
use std::path::PathBuf;

#[derive(Args)]
pub struct VerifyArgs {
    /// A project archive
    #[arg(short, long, value_name = "FILE")]
    file: PathBuf,
}

impl VerifyArgs {
    pub fn handle(&self) -> Result<()> {
        let container = super::open(&self.file)?;

        let Some(report) = container.verify_checksums()? else {
            println!("{} has no checksum file", self.file.display());
            return Ok(());
        };

        for (entry, status) in &report.entries {
            match status {
                ChecksumStatus::Ok => println!("✅ {}", entry.name.green()),
                ChecksumStatus::Mismatch { actual } => println!(
                    "❌ {}: expected {:08X}, found {:08X}",
                    entry.name.red(),
                    entry.expected,
                    actual
                ),
                ChecksumStatus::Missing => println!("❌ {}: missing", entry.name.red()),
            }
        }

        if !report.is_valid() {
            return Err(miette!(
                "{} of {} entries failed verification",
                report.failures().count(),
                report.entries.len()
            ));
        }

        Ok(())
    }
}
