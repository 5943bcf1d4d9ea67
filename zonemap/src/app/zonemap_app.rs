use super::{ZoneMapAppError, ZoneMapOperation};
use crate::config::ZoneMapConfig;
use clap::Parser;
use std::path::PathBuf;

/// delivery zone map engine: resolves postcode areas into zones, colors and
/// labels them, and keeps the zone -> responsible person table on disk.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct ZoneMapApp {
    /// TOML or JSON configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// GeoJSON FeatureCollection of postcode areas, overrides the configuration
    #[arg(long)]
    pub geometry_file: Option<String>,
    /// zone -> postcode CSV, overrides the configuration
    #[arg(long)]
    pub mapping_file: Option<String>,
    /// zone -> responsible CSV, overrides the configuration
    #[arg(long)]
    pub assignment_file: Option<String>,
    #[command(subcommand)]
    pub op: ZoneMapOperation,
}

impl ZoneMapApp {
    pub fn run(self) -> Result<(), ZoneMapAppError> {
        let conf = self.configuration()?;
        self.op.run(&conf)
    }

    /// the file configuration with any path flags applied on top.
    pub fn configuration(&self) -> Result<ZoneMapConfig, ZoneMapAppError> {
        let mut conf = ZoneMapConfig::read(self.config.as_deref())?;
        if let Some(f) = &self.geometry_file {
            conf.geometry_file = Some(f.clone());
        }
        if let Some(f) = &self.mapping_file {
            conf.mapping_file = Some(f.clone());
        }
        if let Some(f) = &self.assignment_file {
            conf.assignment_file = Some(f.clone());
        }
        Ok(conf)
    }
}
