use std::fmt;

#[derive(Debug)]
pub enum PipelineError {
    /// TOML parse / deserialization error.
    ConfigParse(String),
    /// Config validation error (empty file name, bad filter, etc.).
    ConfigValidation(String),
    /// A configured column is missing from the input table's header row.
    MissingColumn { table: &'static str, column: String },
    /// A timestamp cell could not be parsed with the configured format.
    TimestampParse { table: &'static str, row: usize, value: String },
}

impl fmt::Display for PipelineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ConfigParse(msg) => write!(f, "config parse error: {msg}"),
            Self::ConfigValidation(msg) => write!(f, "config validation error: {msg}"),
            Self::MissingColumn { table, column } => {
                write!(f, "{table} table: missing column '{column}'")
            }
            Self::TimestampParse { table, row, value } => {
                write!(f, "{table} table, row {row}: cannot parse timestamp '{value}'")
            }
        }
    }
}

impl std::error::Error for PipelineError {}
