use super::ZoneMapConfigError;
use crate::model::assignment::{MissingZonePolicy, DEFAULT_MAX_WRITE_ATTEMPTS};
use crate::model::bounds::BoundsStrategy;
use crate::model::centroid::CentroidStrategy;
use crate::model::color::{ColorAssigner, HexColor};
use crate::model::geometry::UnresolvedFeaturePolicy;
use crate::model::snapshot::{InitialView, PolygonStyle};
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// prefix for environment variable overrides, e.g. `ZONEMAP_ASSIGNMENT_FILE`.
/// nested values use a double underscore: `ZONEMAP_COLOR__SATURATION`.
pub const ENV_PREFIX: &str = "ZONEMAP";

/// run configuration for the zone map engine.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ZoneMapConfig {
    /// GeoJSON FeatureCollection of postcode areas
    pub geometry_file: Option<String>,
    /// CSV with `zone` and `postcode` columns
    pub mapping_file: Option<String>,
    /// CSV with `zone` and `responsible` columns, rewritten on every edit
    pub assignment_file: Option<String>,
    pub unresolved_feature_policy: UnresolvedFeaturePolicy,
    pub centroid_strategy: CentroidStrategy,
    pub bounds_strategy: BoundsStrategy,
    pub missing_zone_policy: MissingZonePolicy,
    pub max_write_attempts: usize,
    pub color: ColorAssigner,
    pub unknown_zone_color: HexColor,
    pub polygon_style: PolygonStyle,
    pub initial_view: InitialView,
}

impl Default for ZoneMapConfig {
    fn default() -> Self {
        Self {
            geometry_file: None,
            mapping_file: None,
            assignment_file: None,
            unresolved_feature_policy: UnresolvedFeaturePolicy::default(),
            centroid_strategy: CentroidStrategy::default(),
            bounds_strategy: BoundsStrategy::default(),
            missing_zone_policy: MissingZonePolicy::default(),
            max_write_attempts: DEFAULT_MAX_WRITE_ATTEMPTS,
            color: ColorAssigner::default(),
            unknown_zone_color: HexColor(String::from("#cccccc")),
            polygon_style: PolygonStyle::default(),
            initial_view: InitialView::default(),
        }
    }
}

impl ZoneMapConfig {
    /// reads configuration from an optional TOML or JSON file, with
    /// `ZONEMAP_`-prefixed environment variables layered on top.
    pub fn read(config_file: Option<&Path>) -> Result<ZoneMapConfig, ZoneMapConfigError> {
        let mut builder = Config::builder();
        if let Some(f) = config_file {
            log::info!("reading zonemap configuration from {}", f.display());
            builder = builder.add_source(File::from(f).format(file_format(f)?));
        }
        let config = builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| ZoneMapConfigError::ConfigReadError {
                msg: String::from("failed reading zonemap configuration"),
                source: e,
            })?;
        let conf = config
            .try_deserialize::<ZoneMapConfig>()
            .map_err(|e| ZoneMapConfigError::ConfigReadError {
                msg: String::from("failed decoding zonemap configuration"),
                source: e,
            })?;
        conf.validate()?;
        Ok(conf)
    }

    /// rejects values that deserialize but cannot be used.
    pub fn validate(&self) -> Result<(), ZoneMapConfigError> {
        self.bounds_strategy
            .validate()
            .map_err(|reason| ZoneMapConfigError::InvalidValue {
                name: String::from("bounds_strategy.radius"),
                reason,
            })
    }

    pub fn geometry_path(&self) -> Result<PathBuf, ZoneMapConfigError> {
        required_path(&self.geometry_file, "geometry_file")
    }

    pub fn mapping_path(&self) -> Result<PathBuf, ZoneMapConfigError> {
        required_path(&self.mapping_file, "mapping_file")
    }

    pub fn assignment_path(&self) -> Result<PathBuf, ZoneMapConfigError> {
        required_path(&self.assignment_file, "assignment_file")
    }
}

fn required_path(value: &Option<String>, name: &str) -> Result<PathBuf, ZoneMapConfigError> {
    value
        .as_ref()
        .map(PathBuf::from)
        .ok_or_else(|| ZoneMapConfigError::MissingValue(name.to_string()))
}

fn file_format(f: &Path) -> Result<FileFormat, ZoneMapConfigError> {
    match f.extension().and_then(|ext| ext.to_str()) {
        Some("toml") => Ok(FileFormat::Toml),
        Some("json") => Ok(FileFormat::Json),
        _ => Err(ZoneMapConfigError::UnsupportedFileType(
            f.to_string_lossy().to_string(),
        )),
    }
}
