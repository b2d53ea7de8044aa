use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ProcessingError>;

#[derive(Error, Debug)]
pub enum ProcessingError {
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Missing column '{column}' in {category} source")]
    MissingColumn { column: String, category: String },

    #[error("Date parsing error: '{value}' matches neither M/D/YYYY nor M/D/YY")]
    DateParse { value: String },

    #[error("Invalid coordinate format: {0}")]
    InvalidCoordinate(String),

    #[error("Must specify at least one of --members, --repeaters, --winlink, or --assembly-points")]
    NoSourceSpecified,

    #[error("Output filename must end with \".kmz\" or \".kml\": {}", path.display())]
    UnsupportedOutputFormat { path: PathBuf },

    #[error("KML write error: {0}")]
    Kml(#[from] kml::Error),

    #[error("Archive write error: {0}")]
    Zip(#[from] zip::result::ZipError),
}

impl ProcessingError {
    /// Process exit status reported for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            ProcessingError::UnsupportedOutputFormat { .. } => 2,
            _ => 1,
        }
    }
}
