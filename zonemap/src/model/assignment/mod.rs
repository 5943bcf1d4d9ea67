mod assignment_error;
mod assignment_store;
mod assignment_table;
mod missing_zone_policy;
mod table_version;

pub use assignment_error::AssignmentError;
pub use assignment_store::{AssignmentStore, UpdateOutcome, DEFAULT_MAX_WRITE_ATTEMPTS};
pub use assignment_table::{AssignmentTable, RESPONSIBLE_COLUMN, ZONE_COLUMN};
pub use missing_zone_policy::MissingZonePolicy;
pub use table_version::TableVersion;
