use thiserror::Error;

#[derive(Error, Debug)]
pub enum AssignmentError {
    #[error("assignment table '{filepath}' must contain '{column}' column, found: [{found}]")]
    MissingColumn {
        filepath: String,
        column: String,
        found: String,
    },
    #[error("failure reading assignment table '{0}': {1}")]
    ReadError(String, std::io::Error),
    #[error("failure decoding assignment table '{0}': {1}")]
    CsvError(String, csv::Error),
    #[error("failure writing assignment table '{0}': {1}")]
    WriteError(String, std::io::Error),
    #[error("assignment table '{filepath}' changed during update after {attempts} attempts")]
    ConcurrentModification { filepath: String, attempts: usize },
}
