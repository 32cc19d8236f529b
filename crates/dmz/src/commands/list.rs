use clap::{Args, ValueEnum};
use dmz_timeshow::{get_presets, get_scene_lists, get_timeshows};
use miette::{IntoDiagnostic, Result};
use owo_colors::OwoColorize;
use serde_json::json;
use std::path::PathBuf;

#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Kind {
    #[default]
    Timeshows,
    SceneLists,
    Presets,
}

#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Format {
    #[default]
    Text,
    Json,
}

#[derive(Args)]
pub struct ListArgs {
    /// A project archive
    #[arg(short, long, value_name = "FILE")]
    file: PathBuf,

    /// What to list
    #[arg(short, long, value_enum, default_value_t = Kind::Timeshows)]
    kind: Kind,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,
}

impl ListArgs {
    pub fn handle(&self) -> Result<()> {
        let container = super::open(&self.file)?;

        let rows: Vec<(String, String, String)> = match self.kind {
            Kind::Timeshows => get_timeshows(&container)
                .into_iter()
                .map(|meta| (meta.id.to_string(), meta.number, meta.name))
                .collect(),
            Kind::SceneLists => get_scene_lists(&container)
                .into_iter()
                .map(|s| {
                    let number = s.node.attribute_value("Number").unwrap_or_default().to_owned();
                    (s.id.to_string(), number, s.name)
                })
                .collect(),
            Kind::Presets => get_presets(&container)
                .into_iter()
                .map(|p| {
                    let name = p.name().unwrap_or_default().to_owned();
                    (p.id.to_string(), String::new(), name)
                })
                .collect(),
        };

        match self.format {
            Format::Text => {
                for (id, number, name) in &rows {
                    println!("{} {:>4} {}", id.dimmed(), number.cyan(), name.bold());
                }
            }
            Format::Json => {
                let value = match self.kind {
                    Kind::Timeshows => {
                        serde_json::to_value(get_timeshows(&container)).into_diagnostic()?
                    }
                    _ => rows
                        .iter()
                        .map(|(id, number, name)| {
                            json!({ "id": id, "number": number, "name": name })
                        })
                        .collect(),
                };
                println!(
                    "{}",
                    serde_json::to_string_pretty(&value).into_diagnostic()?
                );
            }
        }

        Ok(())
    }
}
