use super::{AssignmentError, AssignmentTable, MissingZonePolicy, TableVersion};
use crate::model::zone::{ZoneId, ZoneRegistry};
use std::{
    collections::BTreeMap,
    io::Write,
    path::{Path, PathBuf},
};
use tempfile::NamedTempFile;

/// number of read-modify-write attempts before an update gives up on a table
/// that keeps changing underneath it.
pub const DEFAULT_MAX_WRITE_ATTEMPTS: usize = 3;

/// what an [`AssignmentStore::update`] did to the durable table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// the zone's existing row(s) were rewritten
    Updated { rows: usize },
    /// a new row was appended for the zone
    Inserted,
    /// the zone has no row and the table was left untouched
    Ignored,
}

/// durable zone -> responsible person table.
///
/// the in-memory snapshot holds exactly the registry's zones, seeded with an
/// empty assignee. each update re-reads the table from disk, edits it, and
/// replaces the file through a temp file + rename. the rename only happens if
/// the file still holds the bytes that were read; otherwise the whole cycle is
/// retried. `update` takes `&mut self`, so a single store is the single writer
/// within a process.
#[derive(Debug)]
pub struct AssignmentStore {
    table_file: PathBuf,
    zones: Vec<ZoneId>,
    assignments: BTreeMap<ZoneId, String>,
    missing_zone_policy: MissingZonePolicy,
    max_write_attempts: usize,
}

impl AssignmentStore {
    /// loads the table and seeds every registry zone without a row with an
    /// empty assignee. rows for zones outside the registry stay in the file but
    /// are not tracked in memory.
    pub fn load(
        table_file: &Path,
        registry: &ZoneRegistry,
        missing_zone_policy: MissingZonePolicy,
    ) -> Result<AssignmentStore, AssignmentError> {
        let table = AssignmentTable::read(table_file)?;
        let mut store = AssignmentStore {
            table_file: table_file.to_path_buf(),
            zones: registry.zones().to_vec(),
            assignments: BTreeMap::new(),
            missing_zone_policy,
            max_write_attempts: DEFAULT_MAX_WRITE_ATTEMPTS,
        };
        let untracked = store.refresh(&table);
        if untracked > 0 {
            log::warn!(
                "{untracked} rows in {} name zones missing from the zone mapping, ignoring them",
                store.table_file.display()
            );
        }
        log::info!(
            "loaded {} assignment rows from {} for {} zones",
            table.len(),
            store.table_file.display(),
            store.zones.len()
        );
        Ok(store)
    }

    pub fn with_max_write_attempts(mut self, max_write_attempts: usize) -> AssignmentStore {
        self.max_write_attempts = max_write_attempts.max(1);
        self
    }

    pub fn table_file(&self) -> &Path {
        &self.table_file
    }

    /// current in-memory assignee for a zone.
    pub fn get(&self, zone_id: &ZoneId) -> Option<&str> {
        self.assignments.get(zone_id).map(String::as_str)
    }

    /// all tracked zones with their assignee, in zone order.
    pub fn iter(&self) -> impl Iterator<Item = (&ZoneId, &str)> {
        self.assignments.iter().map(|(k, v)| (k, v.as_str()))
    }

    /// writes a new assignee for the zone through to the durable table.
    ///
    /// # Arguments
    ///
    /// * `zone_id` - zone whose row is updated
    /// * `value` - new responsible person, stored verbatim
    ///
    /// # Result
    ///
    /// what happened to the table. a zone with no row is left alone under
    /// [`MissingZonePolicy::Ignore`], and appended under [`MissingZonePolicy::Insert`].
    pub fn update(
        &mut self,
        zone_id: &ZoneId,
        value: &str,
    ) -> Result<UpdateOutcome, AssignmentError> {
        self.update_staged(zone_id, value, |_| {})
    }

    /// [`AssignmentStore::update`] with a callback run on each attempt after the
    /// new table is staged and before the version check.
    fn update_staged<F>(
        &mut self,
        zone_id: &ZoneId,
        value: &str,
        mut on_staged: F,
    ) -> Result<UpdateOutcome, AssignmentError>
    where
        F: FnMut(usize),
    {
        for attempt in 1..=self.max_write_attempts {
            let mut table = AssignmentTable::read(&self.table_file)?;
            let outcome = match table.set(zone_id.as_str(), value) {
                0 => match self.missing_zone_policy {
                    MissingZonePolicy::Ignore => {
                        log::debug!(
                            "zone {zone_id} has no row in {}, update ignored",
                            self.table_file.display()
                        );
                        return Ok(UpdateOutcome::Ignored);
                    }
                    MissingZonePolicy::Insert => {
                        table.insert(zone_id.as_str(), value);
                        UpdateOutcome::Inserted
                    }
                },
                rows => UpdateOutcome::Updated { rows },
            };
            if self.replace_if_unchanged(&table, || on_staged(attempt))? {
                self.refresh(&table);
                log::info!("zone {zone_id} assigned to '{value}' ({outcome:?})");
                return Ok(outcome);
            }
            log::warn!(
                "{} changed while updating zone {zone_id} (attempt {attempt}/{}), retrying",
                self.table_file.display(),
                self.max_write_attempts
            );
        }
        Err(AssignmentError::ConcurrentModification {
            filepath: self.table_file.to_string_lossy().to_string(),
            attempts: self.max_write_attempts,
        })
    }

    /// rebuilds the in-memory snapshot from a table, returning the number of
    /// rows that name zones outside the registry.
    fn refresh(&mut self, table: &AssignmentTable) -> usize {
        let mut assignments = self
            .zones
            .iter()
            .map(|zone_id| (zone_id.clone(), String::new()))
            .collect::<BTreeMap<_, _>>();
        let mut untracked = 0;
        for (zone, responsible) in table.assignments() {
            match assignments.get_mut(&ZoneId::new(zone)) {
                Some(entry) => *entry = responsible.to_string(),
                None => untracked += 1,
            }
        }
        self.assignments = assignments;
        untracked
    }

    /// writes the table to a temp file next to the target and renames it into
    /// place, unless the target no longer matches the version the table was read
    /// from. returns false when the target changed.
    fn replace_if_unchanged<F: FnOnce()>(
        &self,
        table: &AssignmentTable,
        on_staged: F,
    ) -> Result<bool, AssignmentError> {
        let filepath = self.table_file.to_string_lossy().to_string();
        let bytes = table
            .to_bytes()
            .map_err(|e| AssignmentError::CsvError(filepath.clone(), e))?;
        let directory = match self.table_file.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut tmp = NamedTempFile::new_in(directory)
            .map_err(|e| AssignmentError::WriteError(filepath.clone(), e))?;
        tmp.write_all(&bytes)
            .and_then(|_| tmp.as_file().sync_all())
            .map_err(|e| AssignmentError::WriteError(filepath.clone(), e))?;
        on_staged();

        let current = std::fs::read(&self.table_file)
            .map_err(|e| AssignmentError::ReadError(filepath.clone(), e))?;
        if TableVersion::of(&current) != table.version() {
            return Ok(false);
        }
        tmp.persist(&self.table_file)
            .map_err(|e| AssignmentError::WriteError(filepath, e.error))?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn registry() -> ZoneRegistry {
        ZoneRegistry::from_rows([("ZoneA", "5000"), ("ZoneB", "5001"), ("ZoneC", "5002")])
    }

    fn write_table(dir: &TempDir, contents: &str) -> PathBuf {
        let path = dir.path().join("assignments.csv");
        fs::write(&path, contents).unwrap();
        path
    }

    fn read_rows(path: &Path) -> Vec<(String, String)> {
        AssignmentTable::read(path)
            .unwrap()
            .assignments()
            .map(|(z, r)| (z.to_string(), r.to_string()))
            .collect()
    }

    #[test]
    fn test_load_seeds_missing_zones() {
        let dir = TempDir::new().unwrap();
        let path = write_table(&dir, "zone,responsible\nZoneA,Ann\nOther,Olga\n");
        let store = AssignmentStore::load(&path, &registry(), MissingZonePolicy::Ignore).unwrap();
        assert_eq!(store.get(&ZoneId::new("ZoneA")), Some("Ann"));
        assert_eq!(store.get(&ZoneId::new("ZoneB")), Some(""));
        assert_eq!(store.get(&ZoneId::new("ZoneC")), Some(""));
        assert_eq!(store.get(&ZoneId::new("Other")), None);
        assert_eq!(store.iter().count(), 3);
    }

    #[test]
    fn test_missing_column_is_config_error() {
        let dir = TempDir::new().unwrap();
        let path = write_table(&dir, "zone,driver\nZoneA,Ann\n");
        let result = AssignmentStore::load(&path, &registry(), MissingZonePolicy::Ignore);
        assert!(matches!(result, Err(AssignmentError::MissingColumn { .. })));
    }

    #[test]
    fn test_update_then_get() {
        let dir = TempDir::new().unwrap();
        let path = write_table(&dir, "zone,responsible\nZoneA,\nZoneB,Bob\n");
        let mut store =
            AssignmentStore::load(&path, &registry(), MissingZonePolicy::Ignore).unwrap();
        let outcome = store.update(&ZoneId::new("ZoneA"), "Alice").unwrap();
        assert_eq!(outcome, UpdateOutcome::Updated { rows: 1 });
        assert_eq!(store.get(&ZoneId::new("ZoneA")), Some("Alice"));
        let rows = read_rows(&path);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], (String::from("ZoneA"), String::from("Alice")));
        assert_eq!(rows[1], (String::from("ZoneB"), String::from("Bob")));
    }

    #[test]
    fn test_update_unknown_zone_is_noop() {
        let dir = TempDir::new().unwrap();
        let original = "zone,responsible\nZoneA,Ann\nZoneB,Bob\n";
        let path = write_table(&dir, original);
        let mut store =
            AssignmentStore::load(&path, &registry(), MissingZonePolicy::Ignore).unwrap();
        let outcome = store.update(&ZoneId::new("NoSuchZone"), "X").unwrap();
        assert_eq!(outcome, UpdateOutcome::Ignored);
        assert_eq!(fs::read_to_string(&path).unwrap(), original);
        assert_eq!(store.get(&ZoneId::new("ZoneA")), Some("Ann"));
    }

    #[test]
    fn test_update_registry_zone_without_row() {
        let dir = TempDir::new().unwrap();
        let path = write_table(&dir, "zone,responsible\nZoneA,Ann\n");
        let mut ignoring =
            AssignmentStore::load(&path, &registry(), MissingZonePolicy::Ignore).unwrap();
        assert_eq!(
            ignoring.update(&ZoneId::new("ZoneC"), "Cat").unwrap(),
            UpdateOutcome::Ignored
        );
        assert_eq!(ignoring.get(&ZoneId::new("ZoneC")), Some(""));

        let mut inserting =
            AssignmentStore::load(&path, &registry(), MissingZonePolicy::Insert).unwrap();
        assert_eq!(
            inserting.update(&ZoneId::new("ZoneC"), "Cat").unwrap(),
            UpdateOutcome::Inserted
        );
        assert_eq!(inserting.get(&ZoneId::new("ZoneC")), Some("Cat"));
        assert_eq!(read_rows(&path).len(), 2);
    }

    #[test]
    fn test_update_rereads_table_from_disk() {
        let dir = TempDir::new().unwrap();
        let path = write_table(&dir, "zone,responsible\nZoneA,Ann\nZoneB,Bob\n");
        let mut store =
            AssignmentStore::load(&path, &registry(), MissingZonePolicy::Ignore).unwrap();
        // another writer edits ZoneB after we loaded
        fs::write(&path, "zone,responsible\nZoneA,Ann\nZoneB,Bea\n").unwrap();
        store.update(&ZoneId::new("ZoneA"), "Alice").unwrap();
        let rows = read_rows(&path);
        assert_eq!(rows[1], (String::from("ZoneB"), String::from("Bea")));
        assert_eq!(store.get(&ZoneId::new("ZoneB")), Some("Bea"));
    }

    #[test]
    fn test_extra_rows_and_columns_survive_rewrite() {
        let dir = TempDir::new().unwrap();
        let path = write_table(&dir, "zone,responsible,note\nOther,Olga,keep\nZoneA,,x\n");
        let mut store =
            AssignmentStore::load(&path, &registry(), MissingZonePolicy::Ignore).unwrap();
        store.update(&ZoneId::new("ZoneA"), "Alice").unwrap();
        let table = AssignmentTable::read(&path).unwrap();
        assert_eq!(table.len(), 2);
        let text = fs::read_to_string(&path).unwrap();
        assert!(text.contains("Other,Olga,keep"));
        assert!(text.contains("ZoneA,Alice,x"));
    }

    #[test]
    fn test_no_temp_files_left_behind() {
        let dir = TempDir::new().unwrap();
        let path = write_table(&dir, "zone,responsible\nZoneA,Ann\n");
        let mut store =
            AssignmentStore::load(&path, &registry(), MissingZonePolicy::Ignore).unwrap();
        store.update(&ZoneId::new("ZoneA"), "Alice").unwrap();
        store.update(&ZoneId::new("ZoneA"), "Amy").unwrap();
        let entries = fs::read_dir(dir.path()).unwrap().count();
        assert_eq!(entries, 1);
    }

    #[test]
    fn test_changed_table_is_not_replaced() {
        let dir = TempDir::new().unwrap();
        let path = write_table(&dir, "zone,responsible\nZoneA,Ann\n");
        let store = AssignmentStore::load(&path, &registry(), MissingZonePolicy::Ignore).unwrap();
        let mut table = AssignmentTable::read(&path).unwrap();
        table.set("ZoneA", "Alice");
        let concurrent = "zone,responsible\nZoneA,Zed\n";
        fs::write(&path, concurrent).unwrap();

        let replaced = store.replace_if_unchanged(&table, || {}).unwrap();
        assert!(!replaced);
        assert_eq!(fs::read_to_string(&path).unwrap(), concurrent);
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_update_retries_after_concurrent_write() {
        let dir = TempDir::new().unwrap();
        let path = write_table(&dir, "zone,responsible\nZoneA,Ann\nZoneB,Bob\n");
        let mut store =
            AssignmentStore::load(&path, &registry(), MissingZonePolicy::Ignore).unwrap();
        let mut attempts = Vec::new();
        let outcome = store
            .update_staged(&ZoneId::new("ZoneA"), "Alice", |attempt| {
                attempts.push(attempt);
                if attempt == 1 {
                    fs::write(&path, "zone,responsible\nZoneA,Ann\nZoneB,Bea\n").unwrap();
                }
            })
            .unwrap();
        assert_eq!(outcome, UpdateOutcome::Updated { rows: 1 });
        assert_eq!(attempts, vec![1, 2]);
        // the second attempt re-read the concurrent edit and kept it
        let rows = read_rows(&path);
        assert_eq!(rows[0], (String::from("ZoneA"), String::from("Alice")));
        assert_eq!(rows[1], (String::from("ZoneB"), String::from("Bea")));
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_update_gives_up_on_a_table_that_keeps_changing() {
        let dir = TempDir::new().unwrap();
        let path = write_table(&dir, "zone,responsible\nZoneA,Ann\n");
        let mut store = AssignmentStore::load(&path, &registry(), MissingZonePolicy::Ignore)
            .unwrap()
            .with_max_write_attempts(1);
        let concurrent = "zone,responsible\nZoneA,Zed\n";
        let result = store.update_staged(&ZoneId::new("ZoneA"), "Alice", |_| {
            fs::write(&path, concurrent).unwrap();
        });
        assert!(matches!(
            result,
            Err(AssignmentError::ConcurrentModification { attempts: 1, .. })
        ));
        assert_eq!(fs::read_to_string(&path).unwrap(), concurrent);
        assert_eq!(store.get(&ZoneId::new("ZoneA")), Some("Ann"));
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_update_gives_up_after_default_attempts() {
        let dir = TempDir::new().unwrap();
        let path = write_table(&dir, "zone,responsible\nZoneA,Ann\n");
        let mut store =
            AssignmentStore::load(&path, &registry(), MissingZonePolicy::Ignore).unwrap();
        let mut n_staged = 0;
        let result = store.update_staged(&ZoneId::new("ZoneA"), "Alice", |attempt| {
            n_staged += 1;
            fs::write(&path, format!("zone,responsible\nZoneA,writer{attempt}\n")).unwrap();
        });
        assert!(matches!(
            result,
            Err(AssignmentError::ConcurrentModification { attempts, .. })
                if attempts == DEFAULT_MAX_WRITE_ATTEMPTS
        ));
        assert_eq!(n_staged, DEFAULT_MAX_WRITE_ATTEMPTS);
    }
}
