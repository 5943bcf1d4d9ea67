use super::ZoneMapAppError;
use crate::config::ZoneMapConfig;
use crate::model::assignment::AssignmentStore;
use crate::model::bounds::BoundsResolver;
use crate::model::centroid::CentroidResolver;
use crate::model::dispatch::{DispatchError, InteractionDispatcher, ZoneEvent};
use crate::model::geometry::{read_feature_collection, GeometryAggregator};
use crate::model::snapshot::RegistrySnapshot;
use crate::model::zone::ZoneRegistry;
use clap::Subcommand;
use serde::{Deserialize, Serialize};
use std::io::{BufRead, Write};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize, Subcommand)]
pub enum ZoneMapOperation {
    /// list zones with their ordinal, color and current assignee as CSV
    Zones,
    /// write the polygons, label markers and sidebar rows for the map as JSON
    Render {
        /// output file, defaults to stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// print the viewport that fits a zone, or no_update
    Focus {
        #[arg(long)]
        zone: String,
    },
    /// set the responsible person for a zone and print its viewport
    Edit {
        #[arg(long)]
        zone: String,
        #[arg(long)]
        value: String,
    },
    /// dispatch newline-delimited JSON zone events read from stdin, one result per line
    Session,
}

impl ZoneMapOperation {
    pub fn run(&self, conf: &ZoneMapConfig) -> Result<(), ZoneMapAppError> {
        let stdin = std::io::stdin();
        let stdout = std::io::stdout();
        self.execute(conf, stdin.lock(), stdout.lock())
    }

    /// runs the operation against explicit event input and result output.
    pub fn execute<R: BufRead, W: Write>(
        &self,
        conf: &ZoneMapConfig,
        input: R,
        mut output: W,
    ) -> Result<(), ZoneMapAppError> {
        let snapshot = load_snapshot(conf)?;
        let store = AssignmentStore::load(
            &conf.assignment_path()?,
            &snapshot.registry,
            conf.missing_zone_policy,
        )?
        .with_max_write_attempts(conf.max_write_attempts);

        match self {
            ZoneMapOperation::Zones => write_zones(&snapshot, &store, &mut output),
            ZoneMapOperation::Render { output: file } => {
                let payload =
                    snapshot.render_payload(&store, &conf.polygon_style, &conf.initial_view);
                match file {
                    Some(f) => {
                        let json = serde_json::to_string_pretty(&payload)?;
                        std::fs::write(f, json).map_err(|e| {
                            ZoneMapAppError::OutputError(f.to_string_lossy().to_string(), e)
                        })?;
                        log::info!(
                            "wrote {} polygons and {} markers to {}",
                            payload.polygons.len(),
                            payload.markers.len(),
                            f.display()
                        );
                        Ok(())
                    }
                    None => write_json_line(&mut output, &payload),
                }
            }
            ZoneMapOperation::Focus { zone } => {
                let mut dispatcher = new_dispatcher(&snapshot, store, conf);
                let event = ZoneEvent::Focus { zone: zone.clone() };
                let result = dispatcher.dispatch(Some(&event))?;
                write_json_line(&mut output, &result)
            }
            ZoneMapOperation::Edit { zone, value } => {
                let mut dispatcher = new_dispatcher(&snapshot, store, conf);
                let event = ZoneEvent::EditAssignment {
                    zone: zone.clone(),
                    value: value.clone(),
                };
                let result = dispatcher.dispatch(Some(&event))?;
                write_json_line(&mut output, &result)
            }
            ZoneMapOperation::Session => {
                let dispatcher = new_dispatcher(&snapshot, store, conf);
                run_session(dispatcher, input, &mut output)
            }
        }
    }
}

fn load_snapshot(conf: &ZoneMapConfig) -> Result<RegistrySnapshot, ZoneMapAppError> {
    let registry = ZoneRegistry::load(&conf.mapping_path()?)?;
    let features = read_feature_collection(&conf.geometry_path()?)?;
    let snapshot = RegistrySnapshot::build(
        registry,
        &features,
        &GeometryAggregator::new(conf.unresolved_feature_policy),
        &CentroidResolver::new(conf.centroid_strategy),
        &conf.color,
        conf.unknown_zone_color.clone(),
    )?;
    Ok(snapshot)
}

fn new_dispatcher<'a>(
    snapshot: &'a RegistrySnapshot,
    store: AssignmentStore,
    conf: &ZoneMapConfig,
) -> InteractionDispatcher<'a> {
    InteractionDispatcher::new(snapshot, store, BoundsResolver::new(conf.bounds_strategy))
}

/// events are handled strictly in arrival order. a malformed event or one naming
/// an unknown zone is reported on its line and the session continues; a failed
/// table write ends it.
fn run_session<R: BufRead, W: Write>(
    mut dispatcher: InteractionDispatcher<'_>,
    input: R,
    output: &mut W,
) -> Result<(), ZoneMapAppError> {
    let mut n_events = 0;
    for (line_idx, line) in input.lines().enumerate() {
        let line = line.map_err(|e| ZoneMapAppError::InputError(String::from("stdin"), e))?;
        let result =
            ZoneEvent::decode(&line).and_then(|event| dispatcher.dispatch(event.as_ref()));
        match result {
            Ok(result) => write_json_line(output, &result)?,
            Err(DispatchError::AssignmentError(e)) => return Err(e.into()),
            Err(e) => {
                log::warn!("rejected event on line {}: {e}", line_idx + 1);
                write_json_line(output, &serde_json::json!({ "error": e.to_string() }))?;
            }
        }
        output
            .flush()
            .map_err(|e| ZoneMapAppError::OutputError(String::from("stdout"), e))?;
        n_events += 1;
    }
    log::info!("session finished after {n_events} events");
    Ok(())
}

fn write_zones<W: Write>(
    snapshot: &RegistrySnapshot,
    store: &AssignmentStore,
    output: &mut W,
) -> Result<(), ZoneMapAppError> {
    let to_output_error = |e: csv::Error| {
        ZoneMapAppError::OutputError(String::from("stdout"), std::io::Error::from(e))
    };
    let mut writer = csv::Writer::from_writer(output);
    writer
        .write_record(["ordinal", "zone", "color", "responsible"])
        .map_err(to_output_error)?;
    for (ordinal, zone_id) in snapshot.registry.zones().iter().enumerate() {
        let color = snapshot
            .colors
            .get_zone_id(zone_id)
            .map(|c| c.as_str())
            .unwrap_or_default();
        let responsible = store.get(zone_id).unwrap_or_default();
        writer
            .write_record([ordinal.to_string().as_str(), zone_id.as_str(), color, responsible])
            .map_err(to_output_error)?;
    }
    writer
        .flush()
        .map_err(|e| ZoneMapAppError::OutputError(String::from("stdout"), e))
}

fn write_json_line<W: Write, T: Serialize>(
    output: &mut W,
    value: &T,
) -> Result<(), ZoneMapAppError> {
    serde_json::to_writer(&mut *output, value)?;
    writeln!(output).map_err(|e| ZoneMapAppError::OutputError(String::from("stdout"), e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::assignment::AssignmentTable;
    use crate::model::bounds::MapViewport;
    use crate::model::dispatch::DispatchResult;
    use crate::model::geometry::LatLon;
    use std::fs;
    use std::io::Cursor;
    use tempfile::TempDir;

    const GEOJSON: &str = r#"{
        "type": "FeatureCollection",
        "features": [
            {
                "type": "Feature",
                "properties": { "postcode": 5000 },
                "geometry": { "type": "Polygon", "coordinates": [[
                    [138.6, -34.9], [138.61, -34.9], [138.61, -34.91],
                    [138.6, -34.91], [138.6, -34.9]
                ]] }
            },
            {
                "type": "Feature",
                "properties": { "postcode": "9999" },
                "geometry": { "type": "Polygon", "coordinates": [[
                    [139.0, -35.0], [139.1, -35.0], [139.1, -35.1], [139.0, -35.0]
                ]] }
            }
        ]
    }"#;

    fn fixture(dir: &TempDir) -> ZoneMapConfig {
        let mapping = dir.path().join("zones.csv");
        let geometry = dir.path().join("areas.geojson");
        let assignments = dir.path().join("assignments.csv");
        fs::write(&mapping, "Zone, Postcode\nNorth,\"5000, 5001\"\nSouth,5100\n").unwrap();
        fs::write(&geometry, GEOJSON).unwrap();
        fs::write(&assignments, "zone,responsible\nNorth,Ann\nSouth,\n").unwrap();
        ZoneMapConfig {
            geometry_file: Some(geometry.to_string_lossy().to_string()),
            mapping_file: Some(mapping.to_string_lossy().to_string()),
            assignment_file: Some(assignments.to_string_lossy().to_string()),
            ..Default::default()
        }
    }

    fn execute(op: ZoneMapOperation, conf: &ZoneMapConfig, input: &str) -> String {
        let mut output = Vec::new();
        op.execute(conf, Cursor::new(input), &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    fn north_viewport() -> DispatchResult {
        DispatchResult::Viewport(MapViewport {
            min: LatLon::new(-34.91, 138.6),
            max: LatLon::new(-34.9, 138.61),
        })
    }

    #[test]
    fn test_zones_listing() {
        let dir = TempDir::new().unwrap();
        let conf = fixture(&dir);
        let out = execute(ZoneMapOperation::Zones, &conf, "");
        let lines = out.lines().collect::<Vec<_>>();
        assert_eq!(lines[0], "ordinal,zone,color,responsible");
        assert_eq!(lines[1], "0,North,#d95757,Ann");
        assert!(lines[2].starts_with("1,South,#"));
        assert!(lines[2].ends_with(','));
    }

    #[test]
    fn test_render_payload_to_file() {
        let dir = TempDir::new().unwrap();
        let conf = fixture(&dir);
        let path = dir.path().join("payload.json");
        let op = ZoneMapOperation::Render {
            output: Some(path.clone()),
        };
        assert_eq!(execute(op, &conf, ""), "");
        let payload: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        let polygons = payload["polygons"].as_array().unwrap();
        assert_eq!(polygons.len(), 2);
        assert_eq!(polygons[0]["zone"], "North");
        assert_eq!(polygons[0]["positions"][1], serde_json::json!([-34.9, 138.61]));
        assert_eq!(polygons[1]["zone"], "Unknown Zone");
        assert_eq!(polygons[1]["unknown"], true);
        assert_eq!(polygons[1]["fill_color"], "#cccccc");
        // only North has geometry, and the unknown zone is never labeled
        let markers = payload["markers"].as_array().unwrap();
        assert_eq!(markers.len(), 1);
        assert_eq!(markers[0]["label"], "North");
        assert_eq!(payload["zones"][0]["responsible"], "Ann");
        assert_eq!(payload["initial_view"]["zoom"], 10);
    }

    #[test]
    fn test_focus_prints_viewport() {
        let dir = TempDir::new().unwrap();
        let conf = fixture(&dir);
        let op = ZoneMapOperation::Focus {
            zone: String::from("North"),
        };
        let out = execute(op, &conf, "");
        let result: DispatchResult = serde_json::from_str(out.trim()).unwrap();
        assert_eq!(result, north_viewport());
    }

    #[test]
    fn test_edit_persists() {
        let dir = TempDir::new().unwrap();
        let conf = fixture(&dir);
        let op = ZoneMapOperation::Edit {
            zone: String::from("South"),
            value: String::from("Bob"),
        };
        let out = execute(op, &conf, "");
        assert_eq!(out.trim(), "\"no_update\"");
        let table = AssignmentTable::read(&conf.assignment_path().unwrap()).unwrap();
        assert_eq!(
            table.assignments().collect::<Vec<_>>(),
            vec![("North", "Ann"), ("South", "Bob")]
        );
    }

    #[test]
    fn test_session_dispatches_in_order() {
        let dir = TempDir::new().unwrap();
        let conf = fixture(&dir);
        let input = [
            r#"{"type": "focus", "zone": "North"}"#,
            "",
            r#"{"type": "focus", "zone": "Nowhere"}"#,
            r#"{"type": "edit_assignment", "zone": "North", "value": "Cat"}"#,
            r#"{"type": "edit_assignment", "zone": "North", "value": "Dee"}"#,
        ]
        .join("\n");
        let out = execute(ZoneMapOperation::Session, &conf, &input);
        let lines = out.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), 5);
        let first: DispatchResult = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first, north_viewport());
        assert_eq!(lines[1], "\"no_update\"");
        let rejected: serde_json::Value = serde_json::from_str(lines[2]).unwrap();
        assert!(rejected["error"].as_str().unwrap().contains("Nowhere"));
        let last: DispatchResult = serde_json::from_str(lines[4]).unwrap();
        assert_eq!(last, north_viewport());

        let table = AssignmentTable::read(&conf.assignment_path().unwrap()).unwrap();
        assert_eq!(table.assignments().next(), Some(("North", "Dee")));
    }
}
