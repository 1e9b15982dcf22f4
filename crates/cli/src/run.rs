//! The full run: load config, read tables, run the engine, write outputs.

use std::fs;
use std::path::Path;

use rosterlink_core::{pipeline, PipelineConfig, PipelineError, PipelineSummary};

use crate::serialize;
use crate::CliError;

/// Load the pipeline config, or fall back to the built-in export layout.
pub fn load_config(path: Option<&Path>) -> Result<PipelineConfig, CliError> {
    match path {
        Some(path) => {
            let text = fs::read_to_string(path).map_err(|e| {
                CliError::config(format!("cannot read config {}: {e}", path.display()))
            })?;
            PipelineConfig::from_toml(&text).map_err(|e| CliError::config(e.to_string()))
        }
        None => Ok(PipelineConfig::default()),
    }
}

/// Read both inputs, run the pipeline, write the three outputs.
///
/// Prints per-stage row counts and link statistics to stderr; data goes to
/// the output files only.
pub fn run_pipeline(
    config: &PipelineConfig,
    input_dir: &Path,
    output_dir: &Path,
) -> Result<PipelineSummary, CliError> {
    if !input_dir.is_dir() {
        return Err(
            CliError::usage(format!("input directory {} does not exist", input_dir.display()))
                .with_hint("the first argument must be an existing directory"),
        );
    }

    let documents_path = input_dir.join(&config.documents.file);
    let documents_table =
        rosterlink_io::read_table(&documents_path, config.documents.sheet.as_deref())
            .map_err(|e| CliError::read(e.to_string()))?;

    let roster_path = input_dir.join(&config.roster.file);
    let roster_table = rosterlink_io::read_table(&roster_path, config.roster.sheet.as_deref())
        .map_err(|e| CliError::read(e.to_string()))?;

    let output = pipeline::run(config, &documents_table, &roster_table)
        .map_err(pipeline_error)?;

    let summary = &output.summary;
    eprintln!(
        "documents: {} rows cleaned from {}",
        summary.document_rows, config.documents.file,
    );
    eprintln!(
        "roster: {} rows after deduplication from {}",
        summary.roster_rows, config.roster.file,
    );
    eprintln!(
        "linked: {} rows — {} matched reviewers, {} unmatched, {} documents referenced",
        summary.linked_rows,
        summary.matched_reviewers,
        summary.unmatched_reviewers,
        summary.referenced_documents,
    );

    fs::create_dir_all(output_dir).map_err(|e| {
        CliError::write(format!("cannot create {}: {e}", output_dir.display()))
    })?;

    let include_elapsed = config.documents.derive_elapsed;
    let outputs = [
        (
            &config.output.documents,
            serialize::documents_table(&documents_table.headers, &output.documents, include_elapsed),
        ),
        (
            &config.output.roster,
            serialize::roster_table(&config.roster.columns, &output.roster),
        ),
        (
            &config.output.linked,
            serialize::linked_table(
                &documents_table.headers,
                &config.roster.columns,
                &output.linked,
                include_elapsed,
                &config.output.list_delimiter,
            ),
        ),
    ];

    for (file, table) in &outputs {
        let path = output_dir.join(file.as_str());
        rosterlink_io::write_csv(table, &path).map_err(|e| CliError::write(e.to_string()))?;
        eprintln!("wrote {}", path.display());
    }

    Ok(output.summary)
}

/// Map engine errors onto the exit-code registry: config problems are
/// config errors, everything else is a data read failure.
fn pipeline_error(e: PipelineError) -> CliError {
    match e {
        PipelineError::ConfigParse(_) | PipelineError::ConfigValidation(_) => {
            CliError::config(e.to_string())
        }
        PipelineError::MissingColumn { .. } => CliError::read(e.to_string())
            .with_hint("check the column mapping in the pipeline config against the export"),
        PipelineError::TimestampParse { .. } => CliError::read(e.to_string())
            .with_hint("adjust documents.timestamp_format to match the export"),
    }
}
