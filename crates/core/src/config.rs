use chrono::format::{Item, StrftimeItems};
use serde::Deserialize;

use crate::error::PipelineError;

/// Timestamp layout the IO layer renders workbook date cells into.
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

// ---------------------------------------------------------------------------
// Top-level config
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct PipelineConfig {
    pub documents: DocumentsConfig,
    pub roster: RosterConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

// ---------------------------------------------------------------------------
// Documents side
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct DocumentsConfig {
    /// Workbook or CSV file name inside the input directory.
    pub file: String,
    /// Worksheet to read; first sheet when omitted.
    #[serde(default)]
    pub sheet: Option<String>,
    pub columns: DocumentColumns,
    /// Keep only rows whose filter column matches one of the values.
    #[serde(default)]
    pub filter: Option<RowFilter>,
    /// Derive per-document elapsed time between consecutive events.
    #[serde(default = "default_true")]
    pub derive_elapsed: bool,
    #[serde(default = "default_timestamp_format")]
    pub timestamp_format: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DocumentColumns {
    pub internal_id: String,
    pub category: String,
    pub reviewer_name: String,
    pub event_timestamp: String,
    pub associated_id: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RowFilter {
    pub column: String,
    pub values: Vec<String>,
}

// ---------------------------------------------------------------------------
// Roster side
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct RosterConfig {
    pub file: String,
    #[serde(default)]
    pub sheet: Option<String>,
    pub columns: RosterColumns,
}

/// The five roster columns carried into the output; everything else in the
/// export is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct RosterColumns {
    pub full_name: String,
    pub unit_code: String,
    pub unit_description: String,
    pub unit_code_secondary: String,
    pub unit_description_secondary: String,
}

// ---------------------------------------------------------------------------
// Output
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_documents_out")]
    pub documents: String,
    #[serde(default = "default_roster_out")]
    pub roster: String,
    #[serde(default = "default_linked_out")]
    pub linked: String,
    /// Separator used when a set-valued column is flattened to text.
    #[serde(default = "default_list_delimiter")]
    pub list_delimiter: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            documents: default_documents_out(),
            roster: default_roster_out(),
            linked: default_linked_out(),
            list_delimiter: default_list_delimiter(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_timestamp_format() -> String {
    DEFAULT_TIMESTAMP_FORMAT.into()
}

fn default_documents_out() -> String {
    "documents_clean.csv".into()
}

fn default_roster_out() -> String {
    "roster_clean.csv".into()
}

fn default_linked_out() -> String {
    "linked.csv".into()
}

fn default_list_delimiter() -> String {
    ";".into()
}

// ---------------------------------------------------------------------------
// Defaults — canonical export layout
// ---------------------------------------------------------------------------

impl Default for PipelineConfig {
    /// Built-in config matching the canonical registry and roster exports.
    fn default() -> Self {
        Self {
            documents: DocumentsConfig {
                file: "Reporte SSMOdigital Convenios.xlsx".into(),
                sheet: None,
                columns: DocumentColumns {
                    internal_id: "NumInterno".into(),
                    category: "Categoria".into(),
                    reviewer_name: "NomRevisor".into(),
                    event_timestamp: "FechaHistorico".into(),
                    associated_id: "NumDocAsociado".into(),
                },
                filter: None,
                derive_elapsed: true,
                timestamp_format: DEFAULT_TIMESTAMP_FORMAT.into(),
            },
            roster: RosterConfig {
                file: "Plano DSSMO dic 2023.xlsx".into(),
                sheet: None,
                columns: RosterColumns {
                    full_name: "Nombre Funcionario".into(),
                    unit_code: "Código Unidad".into(),
                    unit_description: "Descripción Unidad".into(),
                    unit_code_secondary: "Código Unidad 2".into(),
                    unit_description_secondary: "Descripción Unidad 2".into(),
                },
            },
            output: OutputConfig::default(),
        }
    }
}

// ---------------------------------------------------------------------------
// Parse + Validate
// ---------------------------------------------------------------------------

impl PipelineConfig {
    pub fn from_toml(input: &str) -> Result<Self, PipelineError> {
        let config: PipelineConfig =
            toml::from_str(input).map_err(|e| PipelineError::ConfigParse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), PipelineError> {
        if self.documents.file.is_empty() {
            return Err(PipelineError::ConfigValidation(
                "documents.file must not be empty".into(),
            ));
        }
        if self.roster.file.is_empty() {
            return Err(PipelineError::ConfigValidation(
                "roster.file must not be empty".into(),
            ));
        }

        let doc = &self.documents.columns;
        let roster = &self.roster.columns;
        let columns = [
            ("documents.columns.internal_id", &doc.internal_id),
            ("documents.columns.category", &doc.category),
            ("documents.columns.reviewer_name", &doc.reviewer_name),
            ("documents.columns.event_timestamp", &doc.event_timestamp),
            ("documents.columns.associated_id", &doc.associated_id),
            ("roster.columns.full_name", &roster.full_name),
            ("roster.columns.unit_code", &roster.unit_code),
            ("roster.columns.unit_description", &roster.unit_description),
            ("roster.columns.unit_code_secondary", &roster.unit_code_secondary),
            (
                "roster.columns.unit_description_secondary",
                &roster.unit_description_secondary,
            ),
        ];
        for (name, value) in columns {
            if value.is_empty() {
                return Err(PipelineError::ConfigValidation(format!(
                    "{name} must not be empty"
                )));
            }
        }

        if let Some(ref filter) = self.documents.filter {
            if filter.column.is_empty() {
                return Err(PipelineError::ConfigValidation(
                    "documents.filter.column must not be empty".into(),
                ));
            }
            if filter.values.is_empty() {
                return Err(PipelineError::ConfigValidation(
                    "documents.filter.values must list at least one value".into(),
                ));
            }
        }

        let format = &self.documents.timestamp_format;
        if format.is_empty()
            || StrftimeItems::new(format).any(|item| matches!(item, Item::Error))
        {
            return Err(PipelineError::ConfigValidation(format!(
                "documents.timestamp_format '{format}' is not a valid strftime layout"
            )));
        }

        if self.output.list_delimiter.is_empty() {
            return Err(PipelineError::ConfigValidation(
                "output.list_delimiter must not be empty".into(),
            ));
        }

        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
