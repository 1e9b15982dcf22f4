use std::fmt;
use std::path::PathBuf;

#[derive(Debug)]
pub enum IoError {
    /// File could not be opened or decoded.
    Open { path: PathBuf, detail: String },
    /// Workbook has no sheets at all.
    EmptyWorkbook { path: PathBuf },
    /// The requested worksheet does not exist.
    SheetNotFound { path: PathBuf, sheet: String },
    /// The worksheet has no header row.
    EmptySheet { path: PathBuf, sheet: String },
    /// Neither a workbook nor a delimited-text extension.
    UnsupportedExtension { path: PathBuf },
    /// CSV parse error.
    Csv { path: PathBuf, detail: String },
    /// Output file could not be written.
    Write { path: PathBuf, detail: String },
}

impl fmt::Display for IoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Open { path, detail } => {
                write!(f, "cannot open {}: {detail}", path.display())
            }
            Self::EmptyWorkbook { path } => {
                write!(f, "{}: workbook contains no sheets", path.display())
            }
            Self::SheetNotFound { path, sheet } => {
                write!(f, "{}: no sheet named '{sheet}'", path.display())
            }
            Self::EmptySheet { path, sheet } => {
                write!(f, "{}: sheet '{sheet}' has no header row", path.display())
            }
            Self::UnsupportedExtension { path } => {
                write!(
                    f,
                    "{}: unsupported file type (expected xlsx, xls, xlsb, ods, csv or tsv)",
                    path.display()
                )
            }
            Self::Csv { path, detail } => {
                write!(f, "cannot parse {}: {detail}", path.display())
            }
            Self::Write { path, detail } => {
                write!(f, "cannot write {}: {detail}", path.display())
            }
        }
    }
}

impl std::error::Error for IoError {}
