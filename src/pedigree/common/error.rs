use thiserror::Error;

/// Every failure a heredity run can end with. All of them are terminal:
/// the run produces no partial table.
#[derive(Error, Debug)]
pub enum HeredityError {
    /// I/O errors (missing data file, unwritable output)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV framing errors (unbalanced quotes, missing columns)
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Probability table files that are not valid JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Family data violating the data model (bad trait marker, dangling parent, ...)
    #[error("Malformed input: {message}")]
    MalformedInput { message: String },

    /// Probability tables with values outside [0, 1] or a prior not summing to 1
    #[error("Invalid probability tables: {message}")]
    InvalidTables { message: String },

    /// Enumeration over this many people would not finish in reasonable time
    #[error("Population of {size} exceeds the limit of {limit} people")]
    PopulationTooLarge { size: usize, limit: usize },

    /// Observations admit no world with nonzero probability
    #[error("Unsatisfiable evidence: every hypothesis for '{person}' has zero probability")]
    UnsatisfiableEvidence { person: String },

    #[error("Unknown scenario: {name}")]
    UnknownScenario { name: String },
}

pub type Result<T> = std::result::Result<T, HeredityError>;

impl HeredityError {
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedInput {
            message: message.into(),
        }
    }

    pub fn invalid_tables(message: impl Into<String>) -> Self {
        Self::InvalidTables {
            message: message.into(),
        }
    }
}
