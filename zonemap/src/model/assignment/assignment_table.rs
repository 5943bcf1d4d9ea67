use super::{AssignmentError, TableVersion};
use crate::util::table_ops;
use csv::StringRecord;
use std::path::Path;

pub const ZONE_COLUMN: &str = "zone";
pub const RESPONSIBLE_COLUMN: &str = "responsible";

/// the durable zone -> responsible table as read from disk. every column and
/// row is retained so that a rewrite only changes the cells being edited.
#[derive(Clone, Debug)]
pub struct AssignmentTable {
    headers: StringRecord,
    zone_idx: usize,
    responsible_idx: usize,
    rows: Vec<StringRecord>,
    version: TableVersion,
}

impl AssignmentTable {
    /// reads the table fresh from disk.
    pub fn read(table_file: &Path) -> Result<AssignmentTable, AssignmentError> {
        let filepath = table_file.to_string_lossy().to_string();
        let contents =
            std::fs::read(table_file).map_err(|e| AssignmentError::ReadError(filepath.clone(), e))?;
        Self::parse(&contents, &filepath)
    }

    /// parses table contents. headers are normalized (trimmed, lower-cased) and
    /// must include `zone` and `responsible`.
    pub fn parse(contents: &[u8], source_name: &str) -> Result<AssignmentTable, AssignmentError> {
        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_reader(contents);
        let headers = reader
            .headers()
            .map_err(|e| AssignmentError::CsvError(source_name.to_string(), e))?;
        let headers = table_ops::normalize_headers(headers);
        let lookup = table_ops::header_lookup(&headers);
        let column = |name: &str| {
            lookup
                .get(name)
                .copied()
                .ok_or_else(|| AssignmentError::MissingColumn {
                    filepath: source_name.to_string(),
                    column: name.to_string(),
                    found: table_ops::describe_headers(&headers),
                })
        };
        let zone_idx = column(ZONE_COLUMN)?;
        let responsible_idx = column(RESPONSIBLE_COLUMN)?;
        let rows = reader
            .records()
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| AssignmentError::CsvError(source_name.to_string(), e))?;
        Ok(AssignmentTable {
            headers,
            zone_idx,
            responsible_idx,
            rows,
            version: TableVersion::of(contents),
        })
    }

    /// fingerprint of the bytes this table was parsed from.
    pub fn version(&self) -> TableVersion {
        self.version
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// (zone, responsible) pairs in row order. rows with a blank zone are skipped.
    pub fn assignments(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.rows.iter().filter_map(|row| {
            let zone = row.get(self.zone_idx).unwrap_or_default().trim();
            if zone.is_empty() {
                None
            } else {
                let responsible = row.get(self.responsible_idx).unwrap_or_default();
                Some((zone, responsible))
            }
        })
    }

    /// sets `responsible` on every row matching `zone`, returning how many rows changed.
    pub fn set(&mut self, zone: &str, responsible: &str) -> usize {
        let (zone_idx, responsible_idx, width) =
            (self.zone_idx, self.responsible_idx, self.headers.len());
        let mut matched = 0;
        for row in self.rows.iter_mut() {
            if row.get(zone_idx).map(str::trim) == Some(zone) {
                *row = with_field(row, width, responsible_idx, responsible);
                matched += 1;
            }
        }
        matched
    }

    /// appends a row for a zone, leaving any other columns blank.
    pub fn insert(&mut self, zone: &str, responsible: &str) {
        let mut fields = vec![String::new(); self.headers.len()];
        fields[self.zone_idx] = zone.to_string();
        fields[self.responsible_idx] = responsible.to_string();
        self.rows.push(StringRecord::from(fields));
    }

    /// the full table as UTF-8 CSV with a leading byte order mark.
    pub fn to_bytes(&self) -> Result<Vec<u8>, csv::Error> {
        let mut writer = csv::WriterBuilder::new()
            .flexible(true)
            .from_writer(table_ops::UTF8_BOM.to_vec());
        writer.write_record(&self.headers)?;
        for row in self.rows.iter() {
            writer.write_record(row)?;
        }
        writer
            .into_inner()
            .map_err(|e| csv::Error::from(e.into_error()))
    }
}

fn with_field(row: &StringRecord, width: usize, idx: usize, value: &str) -> StringRecord {
    let mut fields = row.iter().map(String::from).collect::<Vec<_>>();
    if fields.len() < width {
        fields.resize(width, String::new());
    }
    fields[idx] = value.to_string();
    StringRecord::from(fields)
}
