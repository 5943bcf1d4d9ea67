use super::{Zone, ZoneError, ZoneId};
use crate::util::table_ops;
use itertools::Itertools;
use std::{
    collections::{BTreeSet, HashMap},
    io::Read,
    path::Path,
};

pub const ZONE_COLUMN: &str = "zone";
pub const POSTCODE_COLUMN: &str = "postcode";

/// postcode to zone lookup along with the canonical, sorted list of zones.
///
/// the position of a zone in [`ZoneRegistry::zones`] is its ordinal, which
/// drives color assignment and the row set of the assignment table.
#[derive(Clone, Debug, Default)]
pub struct ZoneRegistry {
    postcode_zones: HashMap<String, ZoneId>,
    zones: Vec<ZoneId>,
    ordinals: HashMap<ZoneId, usize>,
}

impl ZoneRegistry {
    /// reads a zone mapping CSV with `zone` and `postcode` columns, where each
    /// `postcode` cell holds a comma-separated list of postcodes.
    pub fn load(mapping_file: &Path) -> Result<ZoneRegistry, ZoneError> {
        let filepath = mapping_file.to_string_lossy().to_string();
        let reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_path(mapping_file)
            .map_err(|e| ZoneError::MappingReadError(filepath.clone(), e))?;
        Self::read_mapping(reader, &filepath)
    }

    /// reads the zone mapping from any CSV byte source. `source_name` is only
    /// used in error messages.
    pub fn from_reader<R: Read>(source: R, source_name: &str) -> Result<ZoneRegistry, ZoneError> {
        let reader = csv::ReaderBuilder::new().flexible(true).from_reader(source);
        Self::read_mapping(reader, source_name)
    }

    /// builds a registry from (zone, comma-separated postcodes) pairs.
    pub fn from_rows<'a, I>(rows: I) -> ZoneRegistry
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut builder = RegistryBuilder::default();
        for (zone, postcodes) in rows {
            builder.add_row(zone, postcodes);
        }
        builder.build()
    }

    fn read_mapping<R: Read>(
        mut reader: csv::Reader<R>,
        source_name: &str,
    ) -> Result<ZoneRegistry, ZoneError> {
        let headers = reader
            .headers()
            .map_err(|e| ZoneError::MappingReadError(source_name.to_string(), e))?;
        let headers = table_ops::normalize_headers(headers);
        let lookup = table_ops::header_lookup(&headers);
        let column = |name: &str| {
            lookup
                .get(name)
                .copied()
                .ok_or_else(|| ZoneError::MissingColumn {
                    filepath: source_name.to_string(),
                    column: name.to_string(),
                    found: table_ops::describe_headers(&headers),
                })
        };
        let zone_idx = column(ZONE_COLUMN)?;
        let postcode_idx = column(POSTCODE_COLUMN)?;

        let mut builder = RegistryBuilder::default();
        for (row_idx, row) in reader.records().enumerate() {
            let record = row.map_err(|e| ZoneError::MappingReadError(source_name.to_string(), e))?;
            let zone = record.get(zone_idx).unwrap_or_default();
            let postcodes = record.get(postcode_idx).unwrap_or_default();
            if zone.trim().is_empty() {
                log::warn!(
                    "zone mapping row {row_idx} in {source_name} has no zone name, skipping"
                );
                continue;
            }
            builder.add_row(zone, postcodes);
        }
        let registry = builder.build();
        log::info!(
            "loaded {} zones covering {} postcodes from {source_name}",
            registry.zones.len(),
            registry.postcode_zones.len()
        );
        Ok(registry)
    }

    /// resolves a postcode to its zone, or [`Zone::Unknown`] when the mapping
    /// source does not list it.
    pub fn resolve(&self, postcode: &str) -> Zone {
        match self.postcode_zones.get(postcode.trim()) {
            Some(zone_id) => Zone::Named(zone_id.clone()),
            None => Zone::Unknown,
        }
    }

    /// the sorted, distinct zone list.
    pub fn zones(&self) -> &[ZoneId] {
        &self.zones
    }

    /// position of the zone in the sorted zone list.
    pub fn ordinal(&self, zone_id: &ZoneId) -> Option<usize> {
        self.ordinals.get(zone_id).copied()
    }

    pub fn contains(&self, zone_id: &ZoneId) -> bool {
        self.ordinals.contains_key(zone_id)
    }

    /// finds the registered zone with this name.
    pub fn get(&self, name: &str) -> Option<&ZoneId> {
        self.ordinals
            .get_key_value(&ZoneId::new(name))
            .map(|(zone_id, _)| zone_id)
    }

    pub fn len(&self) -> usize {
        self.zones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }
}

#[derive(Default)]
struct RegistryBuilder {
    postcode_zones: HashMap<String, ZoneId>,
    zones: BTreeSet<ZoneId>,
}

impl RegistryBuilder {
    fn add_row(&mut self, zone: &str, postcodes: &str) {
        let zone_id = ZoneId::new(zone.trim());
        for postcode in postcodes.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            // last write wins
            if let Some(previous) = self
                .postcode_zones
                .insert(postcode.to_string(), zone_id.clone())
            {
                if previous != zone_id {
                    log::warn!("postcode {postcode} reassigned from zone {previous} to {zone_id}");
                }
            }
        }
        self.zones.insert(zone_id);
    }

    fn build(self) -> ZoneRegistry {
        let zones = self.zones.into_iter().collect_vec();
        let ordinals = zones
            .iter()
            .enumerate()
            .map(|(idx, zone_id)| (zone_id.clone(), idx))
            .collect();
        ZoneRegistry {
            postcode_zones: self.postcode_zones,
            zones,
            ordinals,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_mapping_with_messy_headers() {
        let csv = " Zone ,PostCode\nNorth,\"5000, 5001\"\nSouth,5002\n";
        let registry = ZoneRegistry::from_reader(csv.as_bytes(), "test").unwrap();
        assert_eq!(registry.zones(), &[ZoneId::new("North"), ZoneId::new("South")]);
        assert_eq!(registry.resolve("5001"), Zone::Named(ZoneId::new("North")));
        assert_eq!(registry.resolve(" 5002 "), Zone::Named(ZoneId::new("South")));
        assert_eq!(registry.resolve("9999"), Zone::Unknown);
    }

    #[test]
    fn test_missing_postcode_column_fails() {
        let csv = "zone,suburb\nNorth,Adelaide\n";
        match ZoneRegistry::from_reader(csv.as_bytes(), "test") {
            Err(ZoneError::MissingColumn { column, .. }) => assert_eq!(column, "postcode"),
            other => panic!("expected missing column error, found {other:?}"),
        }
    }

    #[test]
    fn test_missing_zone_column_fails() {
        let csv = "region,postcode\nNorth,5000\n";
        let result = ZoneRegistry::from_reader(csv.as_bytes(), "test");
        assert!(matches!(result, Err(ZoneError::MissingColumn { column, .. }) if column == "zone"));
    }

    #[test]
    fn test_postcode_collision_last_write_wins() {
        let registry = ZoneRegistry::from_rows([("B", "5000"), ("A", "5000,5001")]);
        assert_eq!(registry.resolve("5000"), Zone::Named(ZoneId::new("A")));
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_zones_sorted_and_distinct() {
        let registry = ZoneRegistry::from_rows([("West", "1"), ("East", "2"), ("West", "3")]);
        assert_eq!(registry.zones(), &[ZoneId::new("East"), ZoneId::new("West")]);
        assert_eq!(registry.ordinal(&ZoneId::new("East")), Some(0));
        assert_eq!(registry.ordinal(&ZoneId::new("West")), Some(1));
        assert_eq!(registry.ordinal(&ZoneId::new("North")), None);
    }

    #[test]
    fn test_zone_with_empty_postcode_list_is_registered() {
        let csv = "zone,postcode\nEmpty,\n,5000\n";
        let registry = ZoneRegistry::from_reader(csv.as_bytes(), "test").unwrap();
        assert_eq!(registry.zones(), &[ZoneId::new("Empty")]);
        assert_eq!(registry.resolve("5000"), Zone::Unknown);
    }
}
