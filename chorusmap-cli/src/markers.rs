//! Markers command implementation for the chorusmap CLI.
//!
//! Lists the map markers a renderer would place for a projects
//! document: one row per geolocated record, in table order. Records
//! without coordinates are left out rather than reported as errors.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use chorusmap_core::{Marker, SpeciesIcon};

use crate::{ARG_TABLE, CliError, source::TableSource};

/// CLI arguments for the `markers` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "List the map markers for a projects document as JSON. \
                 Records without coordinates are skipped. Without --table \
                 the builtin dataset is used.",
    about = "List the map markers for a projects document"
)]
#[ortho_config(prefix = "CHORUSMAP")]
pub(crate) struct MarkersArgs {
    /// Path to the projects document (defaults to the builtin dataset).
    #[arg(long = ARG_TABLE, value_name = "path")]
    #[serde(default)]
    pub(crate) table: Option<Utf8PathBuf>,
}

impl MarkersArgs {
    pub(crate) fn into_config(self) -> Result<MarkersConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        Ok(MarkersConfig::from(merged))
    }
}

/// Resolved `markers` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct MarkersConfig {
    pub(crate) source: TableSource,
}

impl From<MarkersArgs> for MarkersConfig {
    fn from(args: MarkersArgs) -> Self {
        Self {
            source: TableSource::from_arg(args.table),
        }
    }
}

/// One marker as emitted on the wire.
#[derive(Debug, Clone, PartialEq, Serialize)]
struct MarkerRow<'a> {
    name: &'a str,
    species: &'a str,
    icon: SpeciesIcon,
    latitude: f64,
    longitude: f64,
}

impl<'a> From<Marker<'a>> for MarkerRow<'a> {
    fn from(marker: Marker<'a>) -> Self {
        Self {
            name: marker.name(),
            species: marker.species(),
            icon: marker.icon(),
            latitude: marker.position.latitude(),
            longitude: marker.position.longitude(),
        }
    }
}

pub(super) fn run_markers(args: MarkersArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_markers_with(args, &mut stdout)
}

pub(super) fn run_markers_with(args: MarkersArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    config.source.validate()?;
    let table = config.source.load()?;
    let rows: Vec<MarkerRow<'_>> = table.markers().map(MarkerRow::from).collect();
    let payload = serde_json::to_string_pretty(&rows).map_err(CliError::SerialiseMarkers)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}
