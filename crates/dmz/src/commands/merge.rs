use clap::Args;
use dmz_archive::write::ContainerWriterOptions;
use dmz_timeshow::{add_timeshow, extract_timeshow, get_timeshows, TimeshowMeta};
use itertools::Itertools;
use miette::{miette, Context, IntoDiagnostic, Result};
use std::{fs::File, path::PathBuf};
use tracing::info;
use uuid::Uuid;

#[derive(Args)]
pub struct MergeArgs {
    /// The project holding the timecode show
    #[arg(short, long, value_name = "FILE")]
    source: PathBuf,

    /// The project the timecode show is added to
    #[arg(short, long, value_name = "FILE")]
    destination: PathBuf,

    /// Id or name of the timecode show
    #[arg(long, value_name = "SHOW")]
    show: String,

    /// Where to write the merged project
    #[arg(short, long, value_name = "FILE")]
    output: PathBuf,

    /// Allow overwriting the target
    #[arg(long, default_value_t = false)]
    overwrite: bool,
}

impl MergeArgs {
    fn select(&self, shows: Vec<TimeshowMeta>) -> Result<TimeshowMeta> {
        let wanted = self.show.trim();
        let matches = match Uuid::parse_str(wanted) {
            Ok(id) => shows.into_iter().filter(|m| m.id == id).collect::<Vec<_>>(),
            Err(_) => shows
                .into_iter()
                .filter(|m| m.name.trim().eq_ignore_ascii_case(wanted))
                .collect(),
        };

        if matches.len() > 1 {
            return Err(miette!(
                help = "select the show by its id instead",
                "{} timecode shows are named {}: {}",
                matches.len(),
                wanted,
                matches.iter().map(|m| m.id).join(", ")
            ));
        }

        matches
            .into_iter()
            .next()
            .ok_or_else(|| miette!("no timecode show {} in {}", wanted, self.source.display()))
    }

    pub fn handle(&self) -> Result<()> {
        let source = super::open(&self.source)?;
        let mut destination = super::open(&self.destination)?;

        let meta = self.select(get_timeshows(&source))?;
        info!("extracting {} ({})", meta.name, meta.id);
        let timeshow = extract_timeshow(&source, &meta)?;

        // Only the in memory copy is touched until the merge went through completely
        let report = add_timeshow(&mut destination, &timeshow)?;
        for event in report.events() {
            println!("{event}");
        }

        info!("writing {}", self.output.display());
        let out = if !self.overwrite {
            File::create_new(&self.output)
                .into_diagnostic()
                .context(format!("creating {}", &self.output.display()))?
        } else {
            File::create(&self.output)
                .into_diagnostic()
                .context(format!("creating {}", &self.output.display()))?
        };

        destination
            .write(out, ContainerWriterOptions::default())
            .context(format!("writing {}", &self.output.display()))?;

        Ok(())
    }
}
