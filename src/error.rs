use thiserror::Error;

use crate::literal::LiteralError;
use crate::sink::SinkError;

/// Everything that can abort a normalization run
#[derive(Error, Debug)]
pub enum NormalizeError {
    #[error("movie {movie_id}: cannot parse release date {text:?}")]
    DateParse { movie_id: i64, text: String },

    #[error("movie {movie_id}: malformed {column} list: {source}")]
    EmbeddedList {
        column: &'static str,
        movie_id: i64,
        #[source]
        source: LiteralError,
    },

    #[error("job {job:?} refers to unknown department {department:?}")]
    UnknownDepartment { job: String, department: String },

    #[error("dataset {0} not found in the data directory")]
    MissingDataset(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("archive error: {0}")]
    Archive(#[from] zip::result::ZipError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to write table {table}: {source}")]
    Sink {
        table: String,
        #[source]
        source: SinkError,
    },
}

pub type Result<T> = std::result::Result<T, NormalizeError>;
